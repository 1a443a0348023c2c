use data_loader::ReviewCorpus;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_path = Path::new("data/reviews.csv");

    println!("Loading phone review corpus...\n");

    let start = Instant::now();
    let corpus = ReviewCorpus::load_from_csv(data_path)
        .expect("Failed to load corpus");
    let elapsed = start.elapsed();

    let (reviews, products) = corpus.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Reviews: {}", reviews);
    println!("Products: {}", products);
    println!("\nPerformance: {:.0} reviews/second",
             reviews as f64 / elapsed.as_secs_f64());
}
