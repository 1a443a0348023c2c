use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::ReviewCorpus;
use pipeline::Vocabulary;
use rand::Rng;
use recommender::{Recommendation, RecommendationService};
use sentiment::{LexiconScorer, SentimentScorer};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// PhoneRecs - Mobile Phone Recommendation Engine
#[derive(Parser)]
#[command(name = "phone-recs")]
#[command(about = "Mobile phone recommendation engine using review sentiment", long_about = None)]
struct Cli {
    /// Path to the review corpus CSV (product_id,review_text)
    #[arg(short, long, default_value = "data/reviews.csv")]
    data: PathBuf,

    /// Optional JSON file with an alternate feature/phrase vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend products for a free-text preference prompt
    Recommend {
        /// What you want in a phone (e.g. "best camera, excellent battery")
        #[arg(long)]
        prompt: String,

        /// Number of products to return
        #[arg(long, default_value = "5")]
        top_n: usize,
    },

    /// Show a product's review statistics
    Product {
        /// Product id to display
        #[arg(long)]
        product_id: String,
    },

    /// List the configured feature and sentiment-phrase vocabularies
    Features,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of recommendation requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the vocabulary (defaults unless an alternate file was given)
    let vocabulary = match &cli.vocabulary {
        Some(path) => Vocabulary::from_json_file(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::default(),
    };

    // Load the review corpus (this may take a moment)
    println!("Loading review corpus from {}...", cli.data.display());
    let start = Instant::now();
    let corpus = Arc::new(
        ReviewCorpus::load_from_csv(&cli.data).context("Failed to load review corpus")?,
    );
    println!("{} Loaded corpus in {:?}", "✓".green(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { prompt, top_n } => {
            handle_recommend(corpus, vocabulary, prompt, top_n)?
        }
        Commands::Product { product_id } => handle_product(corpus, product_id)?,
        Commands::Features => handle_features(&vocabulary),
        Commands::Benchmark { requests } => handle_benchmark(corpus, vocabulary, requests)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    corpus: Arc<ReviewCorpus>,
    vocabulary: Vocabulary,
    prompt: String,
    top_n: usize,
) -> Result<()> {
    if prompt.trim().is_empty() {
        println!("{}", "Please enter a valid prompt.".yellow());
        return Ok(());
    }

    let service = RecommendationService::new(corpus).with_vocabulary(vocabulary);
    let recommendation = service.recommend(&prompt, top_n);

    match &recommendation {
        Recommendation::Ranked(_) => {
            println!("{}", "Recommendations (Ranked):".bold().blue());
            println!("{}", recommendation.render());
        }
        Recommendation::NoFeatureRecognized => {
            println!(
                "{}",
                "No recognized feature in the prompt. Try something like \"best camera\"."
                    .yellow()
            );
        }
        Recommendation::NoQualifyingProducts => {
            println!(
                "{}",
                "No product has qualifying reviews for every requested feature.".yellow()
            );
        }
    }
    Ok(())
}

/// Handle the 'product' command
fn handle_product(corpus: Arc<ReviewCorpus>, product_id: String) -> Result<()> {
    let rows = corpus.product_rows(&product_id);
    if rows.is_empty() {
        return Err(anyhow!("Product {} not found", product_id));
    }
    let reviews = corpus.reviews();
    let scorer = LexiconScorer::new();

    // Display product information
    print!("{}", format!("Product: {}\n", product_id).bold().blue());
    let review_count = corpus
        .get_product_stats(&product_id)
        .map(|s| s.review_count)
        .unwrap_or(rows.len() as u32);
    print!("{}Reviews: {}\n", "• ".green(), review_count);

    // Mean polarity over the product's reviews
    let total: f32 = rows
        .iter()
        .map(|&row| scorer.score(&reviews[row].review_text))
        .sum();
    let mean = total / rows.len() as f32;
    print!("{}Average polarity: {:.3}\n", "• ".green(), mean);

    // Show a few sample reviews
    print!("Sample reviews:\n");
    for &row in rows.iter().take(3) {
        print!("  - {}\n", reviews[row].review_text);
    }
    Ok(())
}

/// Handle the 'features' command
fn handle_features(vocabulary: &Vocabulary) {
    println!("{}", "Known features:".bold().blue());
    for feature in &vocabulary.features {
        println!("  - {}", feature);
    }
    println!("{}", "Positive phrases:".bold().green());
    println!("  {}", vocabulary.positive_phrases.join(", "));
    println!("{}", "Negative phrases:".bold().red());
    println!("  {}", vocabulary.negative_phrases.join(", "));
    println!("{}", "Neutral phrases:".bold().yellow());
    println!("  {}", vocabulary.neutral_phrases.join(", "));
}

/// Handle the 'benchmark' command
fn handle_benchmark(
    corpus: Arc<ReviewCorpus>,
    vocabulary: Vocabulary,
    requests: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }
    if vocabulary.features.is_empty() {
        return Err(anyhow!("Benchmark needs a vocabulary with at least one feature"));
    }

    let service = RecommendationService::new(corpus).with_vocabulary(vocabulary.clone());
    let mut rng = rand::rng();

    // Run the requests with randomized prompts and collect timings
    let mut timings = Vec::with_capacity(requests);
    let bench_start = Instant::now();
    for _ in 0..requests {
        let prompt = random_prompt(&vocabulary, &mut rng);
        let start = Instant::now();
        let _ = service.recommend(&prompt, 5);
        timings.push(start.elapsed());
    }

    // Calculate and display statistics:
    //    - Total time
    //    - Average latency
    //    - P50, P95, P99 latencies
    //    - Throughput (requests/second)
    let total_time = bench_start.elapsed();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Build a randomized prompt from the vocabulary (one or two features, one
/// sentiment phrase each).
fn random_prompt<R: Rng>(vocabulary: &Vocabulary, rng: &mut R) -> String {
    let feature_count = if vocabulary.features.len() > 1 && rng.random_range(0..2) == 1 {
        2
    } else {
        1
    };

    let mut parts = Vec::with_capacity(feature_count);
    for _ in 0..feature_count {
        let feature = &vocabulary.features[rng.random_range(0..vocabulary.features.len())];
        let phrase = match rng.random_range(0..3) {
            0 if !vocabulary.positive_phrases.is_empty() => {
                &vocabulary.positive_phrases[rng.random_range(0..vocabulary.positive_phrases.len())]
            }
            1 if !vocabulary.negative_phrases.is_empty() => {
                &vocabulary.negative_phrases[rng.random_range(0..vocabulary.negative_phrases.len())]
            }
            _ if !vocabulary.neutral_phrases.is_empty() => {
                &vocabulary.neutral_phrases[rng.random_range(0..vocabulary.neutral_phrases.len())]
            }
            _ => continue,
        };
        parts.push(format!("{} {}", phrase, feature));
    }

    if parts.is_empty() {
        // Degenerate vocabulary without phrases: fall back to a bare feature
        vocabulary.features[rng.random_range(0..vocabulary.features.len())].clone()
    } else {
        parts.join(" and ")
    }
}
