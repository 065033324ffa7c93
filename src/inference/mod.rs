//! Inference layer: artifact loading, category discovery, validation, and
//! the single-row prediction pipeline.
//!
//! Architecture:
//! ```text
//!  preprocessor.json / model.json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse files → Artifacts (Preprocessor + Regressor)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ categories  │  "cat" lists 0,1,2 → CategorySet (+ "Other")
//!   └────────────┘
//!        │
//!        ▼
//!   ┌──────────┐     ┌──────────┐
//!   │ validate  │ ──▶ │ pipeline  │  request → table → transform → predict
//!   └──────────┘     └──────────┘
//! ```

pub mod artifacts;
pub mod categories;
pub mod loader;
pub mod pipeline;
pub mod request;
pub mod table;
pub mod validate;
