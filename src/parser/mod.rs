//! Parser Module
//!
//! Markdownテーブルの行解析と、書き出したXLSXファイルの読み戻しを提供するモジュール。

mod markdown;
mod workbook;

pub use markdown::{load_lines, parse_row, strip_separator_row};
pub(crate) use markdown::{lines_from_text, load_lines_limited, parse_rows};
pub use workbook::read_table;
pub(crate) use workbook::read_table_from_bytes;
