use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use itc::{
    lexer::lexer::{AnalyzerConfig, LexicalAnalyzer, UnterminatedStringPolicy, DEFAULT_TABLE_PATH},
    render_error, render_report,
};

const USAGE: &str = "usage: itc <source-file> [--table <path>] [--line-recovery]";

struct Args {
    source: PathBuf,
    config: AnalyzerConfig,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut source = None;
    let mut table_path = PathBuf::from(DEFAULT_TABLE_PATH);
    let mut policy = UnterminatedStringPolicy::AbortPass;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--table" => {
                let path = iter.next().ok_or("--table expects a path")?;
                table_path = PathBuf::from(path);
            }
            "--line-recovery" => policy = UnterminatedStringPolicy::SkipLine,
            flag if flag.starts_with("--") => return Err(format!("unknown flag `{}`", flag)),
            path if source.is_none() => source = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument `{}`", extra)),
        }
    }

    Ok(Args {
        source: source.ok_or("missing source file")?,
        config: AnalyzerConfig::new(table_path).with_unterminated_string(policy),
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    let file_name = args.source.to_string_lossy().into_owned();
    let source = match read_to_string(&args.source) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_name, e);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let mut analyzer = match LexicalAnalyzer::new(args.config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let previous = analyzer.symbol_table().last_load();
    if !previous.is_clean() {
        eprintln!(
            "Skipped {} malformed row(s) in {}",
            previous.skipped.len(),
            analyzer.symbol_table().path().display()
        );
    }

    if let Err(e) = analyzer.analyze(&source) {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    println!("Analyzed in {:?}", start.elapsed());
    println!("{}", render_report(&analyzer));

    if !analyzer.has_errors() {
        return ExitCode::SUCCESS;
    }

    println!();
    for error in analyzer.errors() {
        println!("{}", render_error(error, &source, &file_name));
    }

    ExitCode::from(1)
}
