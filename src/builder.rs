//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::api::RowShapePolicy;
use crate::error::MdToXlsxError;
use crate::parser::{
    lines_from_text, load_lines_limited, parse_rows, read_table, strip_separator_row,
};
use crate::security::{read_limited, DEFAULT_MAX_INPUT_SIZE};
use crate::table::{build_table, Table};
use crate::types::ConversionSummary;

/// シート名の最大文字数（Excelの制限）
const MAX_SHEET_NAME_LEN: usize = 31;

/// シート名に使用できない文字
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 出力シート名
    pub sheet_name: String,

    /// mailtoリンクを表示名に置き換えるか
    pub extract_mailto: bool,

    /// 列数が一致しない行の処理方法
    pub row_shape_policy: RowShapePolicy,

    /// 入力の最大サイズ（バイト）
    pub max_input_size: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            extract_mailto: true,
            row_shape_policy: RowShapePolicy::Strict,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use md2xlsx::{ConverterBuilder, RowShapePolicy};
///
/// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_name("Contacts")
///     .with_row_shape_policy(RowShapePolicy::PadShort)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート名: `Sheet1`
    /// - mailtoリンクの置換: 有効
    /// - 列数の不一致: エラー（`RowShapePolicy::Strict`）
    /// - 入力サイズの上限: 64MB
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 出力シート名を指定する
    ///
    /// # 制約
    ///
    /// * 空でないこと、31文字以内であること
    /// * `[ ] : * ? / \` を含まないこと
    /// * `'`で始まらない・終わらないこと
    /// * 制約違反の場合、`build()`時に`MdToXlsxError::Config`を返す
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// mailtoリンクを表示名に置き換えるかを指定する
    ///
    /// # 引数
    ///
    /// * `enabled: bool`:
    ///   * `true`: `[表示名](mailto:address)`を`表示名`に置き換える（デフォルト）
    ///   * `false`: セルの値をそのまま出力する
    pub fn with_mailto_extraction(mut self, enabled: bool) -> Self {
        self.config.extract_mailto = enabled;
        self
    }

    /// ヘッダーと列数が一致しない行の処理方法を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use md2xlsx::{ConverterBuilder, RowShapePolicy};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_row_shape_policy(RowShapePolicy::PadShort);
    /// ```
    pub fn with_row_shape_policy(mut self, policy: RowShapePolicy) -> Self {
        self.config.row_shape_policy = policy;
        self
    }

    /// 入力の最大サイズ（バイト）を指定する
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.max_input_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合、Converterインスタンス
    /// * `Err(MdToXlsxError::Config)`: 設定が無効な場合
    ///
    /// # 発生し得るエラー
    ///
    /// * `MdToXlsxError::Config(String)`: 設定の検証に失敗した場合
    ///   * シート名が空、31文字を超える、または使用できない文字を含む
    ///   * 入力サイズの上限が0
    pub fn build(self) -> Result<Converter, MdToXlsxError> {
        // 1. シート名の検証
        validate_sheet_name(&self.config.sheet_name)?;

        // 2. 入力サイズ上限の検証
        if self.config.max_input_size == 0 {
            return Err(MdToXlsxError::Config(
                "Maximum input size must be greater than zero".to_string(),
            ));
        }

        // 3. Converterインスタンス生成
        Ok(Converter::new(self.config))
    }
}

fn validate_sheet_name(name: &str) -> Result<(), MdToXlsxError> {
    if name.is_empty() {
        return Err(MdToXlsxError::Config(
            "Sheet name must not be empty".to_string(),
        ));
    }

    let len = name.chars().count();
    if len > MAX_SHEET_NAME_LEN {
        return Err(MdToXlsxError::Config(format!(
            "Sheet name '{}' is {} characters long (max: {})",
            name, len, MAX_SHEET_NAME_LEN
        )));
    }

    if let Some(c) = name.chars().find(|c| INVALID_SHEET_NAME_CHARS.contains(c)) {
        return Err(MdToXlsxError::Config(format!(
            "Sheet name '{}' contains invalid character '{}'",
            name, c
        )));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(MdToXlsxError::Config(format!(
            "Sheet name '{}' must not start or end with an apostrophe",
            name
        )));
    }

    Ok(())
}

/// 変換処理のファサード
///
/// MarkdownテーブルをXLSX形式に変換するためのメインエントリーポイントです。
/// `ConverterBuilder`を使用して構築された設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use md2xlsx::ConverterBuilder;
///
/// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
/// let converter = ConverterBuilder::new().build()?;
/// let summary = converter.convert_file("table.md", "table.xlsx")?;
/// println!("{} data rows written", summary.rows);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// 出力シート名
    pub fn sheet_name(&self) -> &str {
        &self.config.sheet_name
    }

    /// Markdown文字列をテーブルに変換
    ///
    /// # 処理フロー
    ///
    /// 1. 文書全体の前後の空白を除去し、行に分割
    /// 2. 2行目の区切り行を除去
    /// 3. 各行をセルに分割（空行はスキップ）
    /// 4. mailtoリンクを表示名に置換（設定が有効な場合）
    /// 5. 先頭行をヘッダーとしてテーブルを構築
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use md2xlsx::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let table = converter.parse_str("| Name |\n| --- |\n| [Jane](mailto:jane@example.com) |")?;
    /// assert_eq!(table.rows()[0], vec!["Jane"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse_str(&self, markdown: &str) -> Result<Table, MdToXlsxError> {
        let lines = strip_separator_row(lines_from_text(markdown));
        let rows = parse_rows(&lines, self.config.extract_mailto);
        debug!(lines = lines.len(), rows = rows.len(), "parsed markdown rows");
        build_table(rows, self.config.row_shape_policy)
    }

    /// リーダーからMarkdownを読み込み、テーブルに変換
    ///
    /// 入力サイズの上限を超えた場合は`MdToXlsxError::SecurityViolation`を返します。
    pub fn parse<R: Read>(&self, input: R) -> Result<Table, MdToXlsxError> {
        let bytes = read_limited(input, self.config.max_input_size)?;
        let text = String::from_utf8(bytes)?;
        self.parse_str(&text)
    }

    /// MarkdownをXLSX形式のバイト列に変換
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use md2xlsx::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let bytes = converter.convert("| A | B |\n| --- | --- |\n| 1 | 2 |".as_bytes())?;
    /// assert!(!bytes.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read>(&self, input: R) -> Result<Vec<u8>, MdToXlsxError> {
        let table = self.parse(input)?;
        crate::writer::write_to_buffer(&table, &self.config.sheet_name)
    }

    /// MarkdownファイルをXLSXファイルに変換
    ///
    /// テーブルの構築に失敗した場合（データ行なし、列数の不一致など）、
    /// 出力ファイルは作成されません。
    ///
    /// # 引数
    ///
    /// * `input` - 入力Markdownファイルのパス
    /// * `output` - 出力XLSXファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(ConversionSummary)` - 変換結果（行数、列数、出力サイズ）
    /// * `Err(MdToXlsxError)` - エラーが発生した場合
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ConversionSummary, MdToXlsxError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let lines = load_lines_limited(input, self.config.max_input_size)?;
        let lines = strip_separator_row(lines);
        let rows = parse_rows(&lines, self.config.extract_mailto);
        let table = build_table(rows, self.config.row_shape_policy)?;

        crate::writer::write_spreadsheet(&table, output, &self.config.sheet_name)?;
        let bytes_written = std::fs::metadata(output)?.len();

        let summary = ConversionSummary {
            rows: table.row_count(),
            cols: table.col_count(),
            bytes_written,
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            rows = summary.rows,
            cols = summary.cols,
            "converted markdown table"
        );
        Ok(summary)
    }

    /// 書き出したXLSXファイルをテーブルとして読み戻す
    pub fn read_back<P: AsRef<Path>>(&self, path: P) -> Result<Table, MdToXlsxError> {
        read_table(path)
    }

    /// XLSX形式のバイト列をテーブルとして読み戻す
    pub fn read_back_bytes(&self, bytes: Vec<u8>) -> Result<Table, MdToXlsxError> {
        crate::parser::read_table_from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert_eq!(builder.config.sheet_name, "Sheet1");
        assert!(builder.config.extract_mailto);
        assert_eq!(builder.config.row_shape_policy, RowShapePolicy::Strict);
        assert_eq!(builder.config.max_input_size, DEFAULT_MAX_INPUT_SIZE);
    }

    #[test]
    fn test_with_sheet_name() {
        let builder = ConverterBuilder::new().with_sheet_name("Contacts");
        assert_eq!(builder.config.sheet_name, "Contacts");
    }

    #[test]
    fn test_with_mailto_extraction() {
        let builder = ConverterBuilder::new().with_mailto_extraction(false);
        assert!(!builder.config.extract_mailto);
    }

    #[test]
    fn test_with_row_shape_policy() {
        let builder = ConverterBuilder::new().with_row_shape_policy(RowShapePolicy::PadShort);
        assert_eq!(builder.config.row_shape_policy, RowShapePolicy::PadShort);
    }

    #[test]
    fn test_build_default() {
        let converter = ConverterBuilder::new().build().unwrap();
        assert_eq!(converter.sheet_name(), "Sheet1");
    }

    #[test]
    fn test_build_rejects_empty_sheet_name() {
        let result = ConverterBuilder::new().with_sheet_name("").build();
        assert!(matches!(result, Err(MdToXlsxError::Config(_))));
    }

    #[test]
    fn test_build_rejects_long_sheet_name() {
        let result = ConverterBuilder::new()
            .with_sheet_name("a".repeat(MAX_SHEET_NAME_LEN + 1))
            .build();
        match result {
            Err(MdToXlsxError::Config(msg)) => assert!(msg.contains("max: 31")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_accepts_max_length_multibyte_sheet_name() {
        let name = "表".repeat(MAX_SHEET_NAME_LEN);
        assert!(ConverterBuilder::new().with_sheet_name(name).build().is_ok());
    }

    #[test]
    fn test_build_rejects_invalid_sheet_name_chars() {
        for name in ["a[b", "a]b", "a:b", "a*b", "a?b", "a/b", "a\\b"] {
            let result = ConverterBuilder::new().with_sheet_name(name).build();
            assert!(
                matches!(result, Err(MdToXlsxError::Config(_))),
                "expected '{}' to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_build_rejects_apostrophe_boundaries() {
        assert!(ConverterBuilder::new().with_sheet_name("'a").build().is_err());
        assert!(ConverterBuilder::new().with_sheet_name("a'").build().is_err());
        assert!(ConverterBuilder::new().with_sheet_name("a'b").build().is_ok());
    }

    #[test]
    fn test_build_rejects_zero_input_size() {
        let result = ConverterBuilder::new().with_max_input_size(0).build();
        assert!(matches!(result, Err(MdToXlsxError::Config(_))));
    }

    #[test]
    fn test_parse_str() {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter
            .parse_str("| Name | Age |\n| --- | --- |\n| Alice | 30 |\n| Bob | 25 |")
            .unwrap();

        assert_eq!(table.headers(), ["Name", "Age"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_str_separator_never_a_data_row() {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = converter
            .parse_str("| A | B |\n| --- | --- |\n| 1 | 2 |")
            .unwrap();

        assert!(table
            .rows()
            .iter()
            .all(|row| row.iter().all(|cell| !cell.contains("---"))));
    }

    #[test]
    fn test_parse_str_header_only() {
        let converter = ConverterBuilder::new().build().unwrap();
        assert!(matches!(
            converter.parse_str("| Name | Age |"),
            Err(MdToXlsxError::EmptyTable)
        ));
    }

    #[test]
    fn test_parse_str_empty() {
        let converter = ConverterBuilder::new().build().unwrap();
        assert!(matches!(
            converter.parse_str("\n  \n"),
            Err(MdToXlsxError::EmptyTable)
        ));
    }

    #[test]
    fn test_parse_size_limit() {
        let converter = ConverterBuilder::new()
            .with_max_input_size(8)
            .build()
            .unwrap();
        let result = converter.parse("| Name |\n| Alice |".as_bytes());
        assert!(matches!(result, Err(MdToXlsxError::SecurityViolation(_))));
    }

    #[test]
    fn test_convert_and_read_back_bytes() {
        let converter = ConverterBuilder::new().build().unwrap();
        let bytes = converter
            .convert("| Name | Email |\n| --- | --- |\n| Jane | [Jane Doe](mailto:jane@example.com) |".as_bytes())
            .unwrap();

        let table = converter.read_back_bytes(bytes).unwrap();
        assert_eq!(table.headers(), ["Name", "Email"]);
        assert_eq!(table.rows()[0], vec!["Jane", "Jane Doe"]);
    }
}
