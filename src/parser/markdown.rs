//! Markdown Table Parser
//!
//! パイプ区切りのMarkdownテーブルを行単位で解析する。

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::MdToXlsxError;
use crate::link::extract_emails_in_row;
use crate::security::{read_limited, DEFAULT_MAX_INPUT_SIZE};
use crate::types::Row;

/// 区切り行を示すマーカー
const SEPARATOR_MARKER: &str = "---";

/// Markdownファイルを読み込み、行のリストに分割する
///
/// ファイル全体の前後の空白を取り除いてから改行（`\n`、`\r\n`）で分割します。
/// ファイルハンドルは読み込み完了後すぐに解放されます。
///
/// # 引数
///
/// * `path` - 入力ファイルのパス
///
/// # 戻り値
///
/// * `Ok(Vec<String>)` - 行のリスト
/// * `Err(MdToXlsxError::Io)` - ファイルが存在しない、または読み込みに失敗した場合
/// * `Err(MdToXlsxError::Utf8)` - 内容がUTF-8として不正な場合
///
/// # 使用例
///
/// ```rust,no_run
/// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
/// let lines = md2xlsx::load_lines("table.md")?;
/// println!("{} lines", lines.len());
/// # Ok(())
/// # }
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MdToXlsxError> {
    load_lines_limited(path, DEFAULT_MAX_INPUT_SIZE)
}

/// 入力サイズの上限を指定して`load_lines`を実行する
pub(crate) fn load_lines_limited<P: AsRef<Path>>(
    path: P,
    max_size: u64,
) -> Result<Vec<String>, MdToXlsxError> {
    let path = path.as_ref();
    let bytes = {
        let file = File::open(path)?;
        read_limited(file, max_size)?
    };
    let text = String::from_utf8(bytes)?;

    debug!(path = %path.display(), bytes = text.len(), "loaded markdown document");
    Ok(lines_from_text(&text))
}

/// 文書全体の前後の空白を取り除き、行に分割する
pub(crate) fn lines_from_text(text: &str) -> Vec<String> {
    text.trim().lines().map(str::to_string).collect()
}

/// 2行目が区切り行（`---`を含む行）であれば取り除く
///
/// 検査するのは2行目のみです。行数が2未満の場合はそのまま返します。
///
/// # 使用例
///
/// ```rust
/// use md2xlsx::strip_separator_row;
///
/// let lines = vec![
///     "| Name | Age |".to_string(),
///     "| --- | --- |".to_string(),
///     "| Alice | 30 |".to_string(),
/// ];
/// let lines = strip_separator_row(lines);
/// assert_eq!(lines, vec!["| Name | Age |", "| Alice | 30 |"]);
/// ```
pub fn strip_separator_row(mut lines: Vec<String>) -> Vec<String> {
    if lines
        .get(1)
        .is_some_and(|line| line.contains(SEPARATOR_MARKER))
    {
        lines.remove(1);
    }
    lines
}

/// 1行をセルのリストに分割する
///
/// `|`で分割し、各セルの前後の空白を取り除きます。行頭・行末の`|`によって
/// 生じる先頭・末尾の空セルは1つずつ取り除かれます。
///
/// 空行、およびセルが1つも残らない行（`|`のみの行など）は`None`を返します。
///
/// # 使用例
///
/// ```rust
/// use md2xlsx::parse_row;
///
/// assert_eq!(
///     parse_row("| Alice | 30 |"),
///     Some(vec!["Alice".to_string(), "30".to_string()])
/// );
/// assert_eq!(parse_row("   "), None);
/// ```
pub fn parse_row(line: &str) -> Option<Row> {
    if line.trim().is_empty() {
        return None;
    }

    let mut cells: Row = line.split('|').map(|cell| cell.trim().to_string()).collect();

    if cells.first().is_some_and(|cell| cell.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }

    if cells.is_empty() {
        None
    } else {
        Some(cells)
    }
}

/// 区切り行を除いた行のリストを解析し、行データに変換する
///
/// `extract_mailto`が`true`の場合、各セルのmailtoリンクを表示名に置き換えます。
pub(crate) fn parse_rows(lines: &[String], extract_mailto: bool) -> Vec<Row> {
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let Some(mut row) = parse_row(line) else {
            continue;
        };
        if extract_mailto {
            extract_emails_in_row(&mut row);
        }
        rows.push(row);
    }
    rows
}
