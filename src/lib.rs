pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{preprocess, PassStats, PreprocessError, Preprocessor, SymbolTable};
