use anyhow::Result;

use super::table::{EncodedTable, FeatureTable};

// ---------------------------------------------------------------------------
// Artifact capabilities
// ---------------------------------------------------------------------------

/// A fitted feature preprocessor: raw table in, model-ready table out.
///
/// Besides `transform`, a preprocessor exposes the category lists learned by
/// its named sub-transformers. A one-hot block keyed `"cat"` returns one list
/// per input column, in the column order it was fit on.
pub trait Preprocessor {
    fn transform(&self, table: &FeatureTable) -> Result<EncodedTable>;

    /// Learned category lists of the sub-transformer called `name`, or
    /// `None` when no such categorical transformer exists.
    fn learned_categories(&self, name: &str) -> Option<Vec<Vec<String>>>;
}

/// A fitted regression model: one scalar per encoded row.
pub trait Regressor {
    fn predict(&self, encoded: &EncodedTable) -> Result<Vec<f64>>;
}

/// Both loaded artifacts, owned for the lifetime of the process and never
/// mutated after startup.
pub struct Artifacts {
    pub preprocessor: Box<dyn Preprocessor>,
    pub model: Box<dyn Regressor>,
}

impl Artifacts {
    pub fn new(preprocessor: Box<dyn Preprocessor>, model: Box<dyn Regressor>) -> Self {
        Self {
            preprocessor,
            model,
        }
    }
}
