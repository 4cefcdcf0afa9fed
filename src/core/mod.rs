//! Core module tree for the lexpp conditional preprocessor.
//! Leaves first: symbols -> expr -> exclusion -> directive -> preprocess.

pub mod diagnostics;
pub mod directive;
pub mod error;
pub mod exclusion;
pub mod expr;
pub mod preprocess;
pub mod symbols;
#[macro_use]
pub mod debug; // gated debug logging (LEXPP_DEBUG=1) provides debug_log! macro

pub use error::PreprocessError;
pub use preprocess::{preprocess, PassStats, Preprocessor};
pub use symbols::SymbolTable;
