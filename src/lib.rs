//! md2xlsx - Pure-Rust converter from Markdown tables to Excel spreadsheets
//!
//! パイプ区切りのMarkdownテーブルを読み込み、1シートのXLSXファイルとして書き出すクレート。
//! 先頭行はヘッダーとして扱われ、`[表示名](mailto:address)`形式のセルは表示名のみに変換されます。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use md2xlsx::ConverterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // デフォルト設定でコンバーターを生成
//!     let converter = ConverterBuilder::new().build()?;
//!
//!     // Markdownファイルを読み込み、XLSXファイルを書き出す
//!     let summary = converter.convert_file("table.md", "table.xlsx")?;
//!     println!("{} rows x {} cols", summary.rows, summary.cols);
//!
//!     Ok(())
//! }
//! ```
//!
//! メモリ上で変換する場合:
//!
//! ```rust,no_run
//! use md2xlsx::ConverterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = ConverterBuilder::new().build()?;
//! let markdown = "| Name | Age |\n| --- | --- |\n| Alice | 30 |";
//! let xlsx_bytes: Vec<u8> = converter.convert(markdown.as_bytes())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use md2xlsx::{ConverterBuilder, RowShapePolicy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = ConverterBuilder::new()
//!         .with_sheet_name("Attendees")
//!         .with_row_shape_policy(RowShapePolicy::PadShort)
//!         .with_mailto_extraction(false)
//!         .build()?;
//!
//!     converter.convert_file("table.md", "table.xlsx")?;
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod link;
mod parser;
mod security;
mod table;
mod types;
mod writer;

// 公開API
pub use api::RowShapePolicy;
pub use builder::{Converter, ConverterBuilder};
pub use error::MdToXlsxError;
pub use link::extract_email;
pub use parser::{load_lines, parse_row, read_table, strip_separator_row};
pub use table::{build_table, Table};
pub use types::{ConversionSummary, Row};
pub use writer::{write_spreadsheet, write_to_buffer};
