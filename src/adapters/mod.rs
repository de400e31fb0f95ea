//! Adapters layer: Concrete implementations of ports.
//!
//! - `catalog`: builtin respiratory catalog and JSON file loader
//! - `gemini`: Google Generative Language client for advice
//! - `sanitize`: credential filtering for logs

pub mod catalog;
pub mod gemini;
pub mod sanitize;

pub use catalog::{BuiltinCatalog, JsonCatalog};
pub use gemini::GeminiAdapter;
