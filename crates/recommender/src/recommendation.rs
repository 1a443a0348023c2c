//! Recommendation outcomes and their rendered form.

use data_loader::ProductId;

/// Outcome of a recommendation request.
///
/// Empty results stay diagnosable: a prompt that named no known feature is
/// not the same thing as a prompt whose features matched no product, even
/// though both render to an empty ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// Ranked product ids, best first; at most the requested top-N
    Ranked(Vec<ProductId>),
    /// No vocabulary feature with a sentiment phrase was found in the prompt
    NoFeatureRecognized,
    /// Features were recognized, but no product qualified for all of them
    NoQualifyingProducts,
}

impl Recommendation {
    /// Render as one line per rank, 1-indexed: `Rank <i>: <product_id>`.
    ///
    /// The empty variants render to an empty string; callers supply their
    /// own user-facing message for those.
    pub fn render(&self) -> String {
        match self {
            Recommendation::Ranked(ids) => ids
                .iter()
                .enumerate()
                .map(|(i, product_id)| format!("Rank {}: {}", i + 1, product_id))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => String::new(),
        }
    }

    /// Does this outcome carry any ranked products?
    pub fn is_empty(&self) -> bool {
        match self {
            Recommendation::Ranked(ids) => ids.is_empty(),
            _ => true,
        }
    }
}
