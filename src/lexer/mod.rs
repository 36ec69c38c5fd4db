//! Lexical analysis module.
//!
//! This module contains the analyzer that scans source text and records
//! every token occurrence in a [`SymbolTable`](crate::symbol_table::symbol_table::SymbolTable).
//! It handles:
//!
//! - The fixed token taxonomy (reserved words, operators, token kinds)
//! - Recognition of keywords, identifiers, numbers, strings and operators
//! - Line numbers for every recorded token
//! - Comments and whitespace handling
//! - Styling data for an external syntax highlighter

pub mod highlight;
pub mod lexer;
pub mod tokens;
