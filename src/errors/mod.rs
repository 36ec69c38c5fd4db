//! Error types and error handling for the analyzer.
//!
//! This module defines the error types used throughout a compile pass.
//! It includes:
//!
//! - Lexical errors with the line and column they were found at
//! - Specific error variants for each lexical anomaly
//! - Persistence errors raised by the symbol table file
//! - Helpful error names and suggestions for diagnostics

pub mod errors;
