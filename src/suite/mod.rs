//! Suite definitions
//!
//! Data shapes for suites, actions and assertion rules, plus loading them
//! from YAML or JSON files.

mod action;
mod loader;
mod rules;
pub mod values;

pub use action::*;
pub use loader::{load_suite, parse_suite, SuiteFormat};
pub use rules::*;
pub use values::TemplateValues;
