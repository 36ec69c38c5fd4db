//! Symbol table persistence.
//!
//! The symbol table is the ordered occurrence log of every token recorded
//! during a scan. It is bound to one file for its lifetime and can be
//! written out and read back in a tab-separated, line-oriented format.

pub mod symbol_table;
