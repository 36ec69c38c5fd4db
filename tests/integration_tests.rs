//! Integration tests for end-to-end compile passes.
//!
//! These tests drive the analyzer the way the editor does: hand it a whole
//! source text, then read back the symbol table, its file and the errors.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itc::{
    lexer::{
        lexer::{AnalyzerConfig, LexicalAnalyzer, UnterminatedStringPolicy},
        tokens::TokenKind,
    },
    render_report,
    symbol_table::symbol_table::{SymbolTable, HEADER},
    SUCCESS_MESSAGE,
};

fn temp_table(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "itc_integration_{}_{}.dat",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

fn analyzer(path: &Path) -> LexicalAnalyzer {
    LexicalAnalyzer::new(AnalyzerConfig::new(path)).unwrap()
}

const PROGRAM: &str = r#"// factorial
function fact(int n) {
    int result = 1;
    while (n > 1) {
        result = result * n;
        n = n - 1;
    }
    return result;
}
print("fact: ");
print(fact(5));
float ratio = 0.75;
if (ratio >= 0.5 and not false) { print("big"); }
"#;

#[test]
fn test_analyze_program() {
    let path = temp_table("program");
    let mut analyzer = analyzer(&path);

    analyzer.analyze(PROGRAM).unwrap();

    assert!(!analyzer.has_errors());
    let entries = analyzer.symbol_table().entries();
    assert_eq!(entries[0].kind, TokenKind::ReservedWord);
    assert_eq!(entries[0].text, "function");
    assert_eq!(entries[0].line, 2);
    assert!(entries
        .iter()
        .any(|e| e.kind == TokenKind::DecimalNumber && e.text == "0.75" && e.line == 12));
    assert!(entries
        .iter()
        .any(|e| e.kind == TokenKind::StringLiteral && e.text == "\"fact: \""));
    assert_eq!(
        entries.iter().filter(|e| e.text == "result").count(),
        4
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_file_matches_memory_after_pass() {
    let path = temp_table("file_matches");
    let mut analyzer = analyzer(&path);

    analyzer.analyze(PROGRAM).unwrap();

    let reloaded = SymbolTable::open(&path).unwrap();
    assert_eq!(reloaded.entries(), analyzer.symbol_table().entries());
    assert!(reloaded.last_load().is_clean());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_each_pass_starts_from_scratch() {
    let path = temp_table("rescan");
    let mut analyzer = analyzer(&path);

    analyzer.analyze("a @ b").unwrap();
    assert_eq!(analyzer.symbol_table().len(), 2);
    assert_eq!(analyzer.errors().len(), 1);

    analyzer.analyze("c").unwrap();
    assert_eq!(analyzer.symbol_table().len(), 1);
    assert!(analyzer.errors().is_empty());

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), HEADER.len() + 1);
    assert!(contents.ends_with("IDENTIFIER\tc\t1\n"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_passes_are_deterministic() {
    let first_path = temp_table("det_first");
    let second_path = temp_table("det_second");
    let mut first = analyzer(&first_path);
    let mut second = analyzer(&second_path);

    first.analyze(PROGRAM).unwrap();
    second.analyze(PROGRAM).unwrap();

    assert_eq!(first.symbol_table().entries(), second.symbol_table().entries());
    assert_eq!(
        fs::read_to_string(&first_path).unwrap(),
        fs::read_to_string(&second_path).unwrap()
    );

    fs::remove_file(&first_path).unwrap();
    fs::remove_file(&second_path).unwrap();
}

#[test]
fn test_new_analyzer_loads_previous_table() {
    let path = temp_table("reopen");
    let mut first = analyzer(&path);
    first.analyze("x = 1;").unwrap();

    let second = analyzer(&path);

    assert_eq!(second.symbol_table().len(), 4);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_aborted_pass_still_persists() {
    let path = temp_table("aborted");
    let mut analyzer = analyzer(&path);

    analyzer.analyze("x = 1;\nprint(\"oops);\ny = 2;").unwrap();

    assert_eq!(
        analyzer.error_messages(),
        vec!["lexical error at line 2: unterminated string".to_string()]
    );
    // x = 1 ; print (
    assert_eq!(analyzer.symbol_table().len(), 6);
    assert!(analyzer.symbol_table().entries().iter().all(|e| e.line <= 2));

    let reloaded = SymbolTable::open(&path).unwrap();
    assert_eq!(reloaded.len(), 6);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_line_recovery_policy() {
    let path = temp_table("line_recovery");
    let config = AnalyzerConfig::new(&path)
        .with_unterminated_string(UnterminatedStringPolicy::SkipLine);
    let mut analyzer = LexicalAnalyzer::new(config).unwrap();

    analyzer.analyze("x = 1;\nprint(\"oops);\ny = 2;").unwrap();

    assert_eq!(analyzer.errors().len(), 1);
    assert_eq!(analyzer.symbol_table().len(), 10);
    assert_eq!(analyzer.symbol_table().entries()[9].line, 3);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_errors_keep_scan_order() {
    let path = temp_table("order");
    let mut analyzer = analyzer(&path);

    analyzer.analyze("a # b\n1.2.3\n$").unwrap();

    assert_eq!(
        analyzer.error_messages(),
        vec![
            "lexical error at line 1: unrecognized character '#'".to_string(),
            "lexical error at line 2: number with multiple decimal points".to_string(),
            "lexical error at line 3: unrecognized character '$'".to_string(),
        ]
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_report_success() {
    let path = temp_table("report_ok");
    let mut analyzer = analyzer(&path);

    analyzer.analyze("x = 3.5;").unwrap();
    let report = render_report(&analyzer);

    assert!(report.starts_with("=== SYMBOL TABLE ==="));
    assert!(report.contains("DECIMAL_NUMBER  3.5"));
    assert!(report.ends_with(SUCCESS_MESSAGE));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_report_lists_errors() {
    let path = temp_table("report_err");
    let mut analyzer = analyzer(&path);

    analyzer.analyze("@").unwrap();
    let report = render_report(&analyzer);

    assert!(report.ends_with("lexical error at line 1: unrecognized character '@'"));
    assert!(!report.contains(SUCCESS_MESSAGE));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_unwritable_table_path_fails() {
    let path = temp_table("unwritable").join("nested").join("table.dat");

    assert!(LexicalAnalyzer::new(AnalyzerConfig::new(&path)).is_err());
}
