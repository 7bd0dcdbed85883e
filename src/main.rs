//! md2xlsx CLI
//!
//! 固定パスのMarkdownテーブルをXLSXファイルに変換するコマンド。
//! ログ出力は`RUST_LOG`環境変数で制御します（デフォルト: `info`）。

use std::process;

use md2xlsx::{ConverterBuilder, MdToXlsxError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 入力Markdownファイル
const INPUT_PATH: &str = "TestData/Monday May 5th.md";

/// 出力XLSXファイル
const OUTPUT_PATH: &str = "TestData/Monday May 5th.xlsx";

fn main() {
    init_logging();

    match run() {
        Ok(()) => {
            println!("Successfully converted {} to {}", INPUT_PATH, OUTPUT_PATH);
        }
        Err(e) if e.is_empty_table() => {
            println!("{}", e);
        }
        Err(e) => {
            eprint!("{}", error_report(&e));
            process::exit(1);
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run() -> Result<(), MdToXlsxError> {
    let converter = ConverterBuilder::new().build()?;
    converter.convert_file(INPUT_PATH, OUTPUT_PATH)?;
    Ok(())
}

/// エラー種別ごとの診断メッセージ（改行区切り、末尾改行付き）
fn error_report(error: &MdToXlsxError) -> String {
    let lines = match error {
        MdToXlsxError::Io(io_err) => vec![
            format!("I/O Error: {}", io_err),
            format!("Please check that {} exists and is readable.", INPUT_PATH),
        ],
        MdToXlsxError::Utf8(utf8_err) => vec![
            format!("UTF-8 Conversion Error: {}", utf8_err),
            "The markdown file must be UTF-8 encoded.".to_string(),
        ],
        MdToXlsxError::ShapeMismatch {
            line,
            expected,
            found,
        } => vec![
            "Table Shape Error:".to_string(),
            format!("  Data row: {}", line),
            format!("  Expected cells: {}", expected),
            format!("  Found cells: {}", found),
        ],
        MdToXlsxError::Write(xlsx_err) => vec![format!("Spreadsheet Write Error: {}", xlsx_err)],
        MdToXlsxError::Parse(parse_err) => vec![format!("Parse Error: {}", parse_err)],
        MdToXlsxError::Config(msg) => vec![format!("Configuration Error: {}", msg)],
        MdToXlsxError::SecurityViolation(msg) => vec![format!("Security Violation: {}", msg)],
        MdToXlsxError::EmptyTable => vec![MdToXlsxError::EmptyTable.to_string()],
    };

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
