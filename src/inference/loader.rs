use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::artifacts::{Artifacts, Preprocessor, Regressor};
use super::table::{Cell, EncodedTable, FeatureTable};
use crate::config::AppConfig;
use crate::error::PredictorError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the preprocessor and model named by `config` from its artifact
/// directory.
///
/// Either file being absent or unparsable is reported as a single
/// [`PredictorError::MissingArtifact`] naming both expected files.
pub fn load_artifacts(config: &AppConfig) -> Result<Artifacts, PredictorError> {
    let model_path = config.model_path();
    let preprocessor_path = config.preprocessor_path();

    let loaded = load_model(&model_path).and_then(|model| {
        let preprocessor = load_preprocessor(&preprocessor_path)?;
        Ok(Artifacts::new(Box::new(preprocessor), Box::new(model)))
    });

    loaded.map_err(|e| PredictorError::MissingArtifact {
        model: model_path,
        preprocessor: preprocessor_path,
        reason: format!("{e:#}"),
    })
}

/// Parse and sanity-check an exported column transformer.
pub fn load_preprocessor(path: &Path) -> Result<ColumnTransformer> {
    let preprocessor: ColumnTransformer = read_json(path)?;
    preprocessor
        .check()
        .with_context(|| format!("invalid preprocessor in {}", path.display()))?;
    Ok(preprocessor)
}

/// Parse an exported regression model.
pub fn load_model(path: &Path) -> Result<LinearModel> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// Column transformer (preprocessor.json)
// ---------------------------------------------------------------------------

/// Expected JSON schema, as exported next to the fitted pipeline:
///
/// ```json
/// {
///   "feature_names_in": ["Age", "Gender", "Education Level", "Job Title", "Years of Experience"],
///   "transformers": [
///     { "name": "num", "kind": "standard_scaler",
///       "columns": ["Age", "Years of Experience"],
///       "mean": [33.6, 10.1], "scale": [7.6, 6.5] },
///     { "name": "cat", "kind": "one_hot",
///       "columns": ["Gender", "Education Level", "Job Title"],
///       "categories": [["Female", "Male"], ["Bachelor's", "Master's", "PhD"], ["..."]],
///       "handle_unknown": "ignore" }
///   ]
/// }
/// ```
///
/// Output columns are every transformer's output concatenated in list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnTransformer {
    pub feature_names_in: Vec<String>,
    pub transformers: Vec<NamedTransformer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedTransformer {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub kind: TransformerKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformerKind {
    StandardScaler { mean: Vec<f64>, scale: Vec<f64> },
    Passthrough,
    OneHot {
        categories: Vec<Vec<String>>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
}

/// What a one-hot block does with a label it never saw during fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    /// Encode as an all-zero block.
    Ignore,
}

impl ColumnTransformer {
    /// Structural checks that do not depend on input data.
    fn check(&self) -> Result<()> {
        for t in &self.transformers {
            for col in &t.columns {
                if !self.feature_names_in.contains(col) {
                    bail!("transformer '{}' uses unknown column '{col}'", t.name);
                }
            }
            match &t.kind {
                TransformerKind::StandardScaler { mean, scale } => {
                    if mean.len() != t.columns.len() || scale.len() != t.columns.len() {
                        bail!(
                            "transformer '{}': {} columns but {} means and {} scales",
                            t.name,
                            t.columns.len(),
                            mean.len(),
                            scale.len()
                        );
                    }
                }
                TransformerKind::OneHot { categories, .. } => {
                    if categories.len() != t.columns.len() {
                        bail!(
                            "transformer '{}': {} columns but {} category lists",
                            t.name,
                            t.columns.len(),
                            categories.len()
                        );
                    }
                }
                TransformerKind::Passthrough => {}
            }
        }
        Ok(())
    }

    /// Number of encoded columns one row expands into.
    pub fn output_width(&self) -> usize {
        self.transformers
            .iter()
            .map(|t| match &t.kind {
                TransformerKind::OneHot { categories, .. } => {
                    categories.iter().map(Vec::len).sum()
                }
                _ => t.columns.len(),
            })
            .sum()
    }
}

impl Preprocessor for ColumnTransformer {
    fn transform(&self, table: &FeatureTable) -> Result<EncodedTable> {
        if table.is_empty() {
            bail!("input table has no rows");
        }
        if table.columns != self.feature_names_in {
            bail!(
                "input columns {:?} do not match fitted columns {:?}",
                table.columns,
                self.feature_names_in
            );
        }

        let width = self.output_width();
        let mut rows = Vec::with_capacity(table.len());

        for (r, row) in table.rows.iter().enumerate() {
            if row.len() != table.columns.len() {
                bail!(
                    "Row {r}: {} values but {} columns",
                    row.len(),
                    table.columns.len()
                );
            }

            let mut encoded = Vec::with_capacity(width);
            for t in &self.transformers {
                t.encode_into(table, row, &mut encoded)
                    .with_context(|| format!("Row {r}: transformer '{}'", t.name))?;
            }
            rows.push(encoded);
        }

        Ok(EncodedTable::new(rows))
    }

    fn learned_categories(&self, name: &str) -> Option<Vec<Vec<String>>> {
        self.transformers
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| match &t.kind {
                TransformerKind::OneHot { categories, .. } => Some(categories.clone()),
                _ => None,
            })
    }
}

impl NamedTransformer {
    fn encode_into(&self, table: &FeatureTable, row: &[Cell], out: &mut Vec<f64>) -> Result<()> {
        for (j, col) in self.columns.iter().enumerate() {
            let idx = table
                .column_index(col)
                .with_context(|| format!("missing column '{col}'"))?;
            let cell = &row[idx];

            match &self.kind {
                TransformerKind::StandardScaler { mean, scale } => {
                    let v = numeric(cell, col)?;
                    // Constant features are fit with zero variance.
                    let s = if scale[j] == 0.0 { 1.0 } else { scale[j] };
                    out.push((v - mean[j]) / s);
                }
                TransformerKind::Passthrough => out.push(numeric(cell, col)?),
                TransformerKind::OneHot {
                    categories,
                    handle_unknown,
                } => {
                    let label = cell
                        .as_text()
                        .with_context(|| format!("'{col}': expected a category, got {cell}"))?;
                    let known = &categories[j];
                    let hit = known.iter().position(|c| c == label);
                    if hit.is_none() && *handle_unknown == HandleUnknown::Error {
                        bail!("Found unknown category '{label}' in column '{col}' during transform");
                    }
                    out.extend((0..known.len()).map(|k| if Some(k) == hit { 1.0 } else { 0.0 }));
                }
            }
        }
        Ok(())
    }
}

fn numeric(cell: &Cell, col: &str) -> Result<f64> {
    cell.as_f64()
        .with_context(|| format!("'{col}': expected a number, got '{cell}'"))
}

// ---------------------------------------------------------------------------
// Linear model (model.json)
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// { "kind": "linear_regression", "coef": [1520.3, -88.1, ...], "intercept": 41000.0 }
/// ```
///
/// `ridge` and `lasso` exports share the same evaluation and are accepted
/// under their own kind names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinearModel {
    #[serde(alias = "ridge", alias = "lasso")]
    LinearRegression { coef: Vec<f64>, intercept: f64 },
}

impl Regressor for LinearModel {
    fn predict(&self, encoded: &EncodedTable) -> Result<Vec<f64>> {
        let LinearModel::LinearRegression { coef, intercept } = self;
        if encoded.is_empty() {
            bail!("no encoded rows to predict");
        }

        encoded
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                if row.len() != coef.len() {
                    bail!(
                        "Row {r}: X has {} features, but the model is expecting {} features as input",
                        row.len(),
                        coef.len()
                    );
                }
                Ok(row.iter().zip(coef).map(|(x, w)| x * w).sum::<f64>() + intercept)
            })
            .collect()
    }
}
