//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// md2xlsxクレート全体で使用するエラー型
///
/// Markdownファイルの読み込み、テーブルの構築、XLSXファイルの書き出し処理中に
/// 発生するすべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（入力ファイルが存在しない場合を含む）
/// - `EmptyTable`: データ行が存在しない
/// - `ShapeMismatch`: データ行の列数がヘッダーと一致しない
/// - `Write`: XLSXファイルの生成に失敗したエラー（rust_xlsxwriter由来）
/// - `Parse`: XLSXファイルの読み戻しに失敗したエラー（calamine由来）
///
/// # 使用例
///
/// ```rust,no_run
/// use md2xlsx::MdToXlsxError;
///
/// fn read_markdown(path: &str) -> Result<Vec<String>, MdToXlsxError> {
///     let lines = md2xlsx::load_lines(path)?;
///     Ok(lines)
/// }
/// ```
#[derive(Error, Debug)]
pub enum MdToXlsxError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルが存在しない場合は`std::io::ErrorKind::NotFound`になります。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 入力がUTF-8として不正な場合のエラー
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// テーブルにデータ行が存在しない
    ///
    /// 入力が空、またはヘッダー行のみの場合に発生します。
    /// この場合、出力ファイルは書き出されません。
    #[error("No data found in the markdown file")]
    EmptyTable,

    /// データ行の列数がヘッダーと一致しない
    ///
    /// `line`はデータ行の番号（1始まり、ヘッダーと区切り行を除く）です。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use md2xlsx::MdToXlsxError;
    ///
    /// let error = MdToXlsxError::ShapeMismatch {
    ///     line: 2,
    ///     expected: 3,
    ///     found: 4,
    /// };
    ///
    /// println!("{}", error);
    /// // 出力: "Row 2 has 4 cells, but the header has 3"
    /// ```
    #[error("Row {line} has {found} cells, but the header has {expected}")]
    ShapeMismatch {
        /// データ行の番号（1始まり）
        line: usize,
        /// ヘッダーの列数
        expected: usize,
        /// 実際のセル数
        found: usize,
    },

    /// XLSXファイルの生成中に発生したエラー
    ///
    /// シート名が不正な場合や、Excelの行・列数の上限を超えた場合などに発生します。
    #[error("Failed to write spreadsheet: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// XLSXファイルの解析中に発生したエラー
    ///
    /// 書き出したファイルを読み戻す際に、calamineが返したエラーです。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、シート名が空の場合や31文字を超える場合などです。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use md2xlsx::{ConverterBuilder, MdToXlsxError};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_sheet_name("")
    ///     .build();
    ///
    /// match result {
    ///     Err(MdToXlsxError::Config(msg)) => {
    ///         println!("設定エラー: {}", msg);
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルのサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}

impl MdToXlsxError {
    /// データ行が存在しないエラーかどうか
    ///
    /// CLIではこのエラーを正常終了として扱います。
    pub fn is_empty_table(&self) -> bool {
        matches!(self, MdToXlsxError::EmptyTable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: MdToXlsxError = io_err.into();

        match error {
            MdToXlsxError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::NotFound);
                assert_eq!(e.to_string(), "File not found");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: MdToXlsxError = io_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("Permission denied"));
    }

    #[test]
    fn test_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let error: MdToXlsxError = utf8_err.into();
        assert!(error.to_string().starts_with("UTF-8 conversion error"));
    }

    #[test]
    fn test_empty_table_display() {
        let error = MdToXlsxError::EmptyTable;
        assert_eq!(error.to_string(), "No data found in the markdown file");
        assert!(error.is_empty_table());
    }

    #[test]
    fn test_shape_mismatch_display() {
        let error = MdToXlsxError::ShapeMismatch {
            line: 2,
            expected: 3,
            found: 4,
        };
        assert_eq!(error.to_string(), "Row 2 has 4 cells, but the header has 3");
        assert!(!error.is_empty_table());
    }

    #[test]
    fn test_write_error() {
        let error: MdToXlsxError = rust_xlsxwriter::XlsxError::RowColumnLimitError.into();
        match error {
            MdToXlsxError::Write(rust_xlsxwriter::XlsxError::RowColumnLimitError) => {}
            e => panic!("Expected Write error, got {:?}", e),
        }
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = calamine::Error::Msg("Corrupted file");
        let error: MdToXlsxError = parse_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("Failed to parse Excel file"));
        assert!(error_msg.contains("Corrupted file"));
    }

    #[test]
    fn test_xlsx_error_arrives_as_parse() {
        let xlsx_err = calamine::XlsxError::Unexpected("missing sheet part");
        let error: MdToXlsxError = calamine::Error::from(xlsx_err).into();

        assert!(matches!(
            error,
            MdToXlsxError::Parse(calamine::Error::Xlsx(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let error = MdToXlsxError::Config("Sheet name must not be empty".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("Sheet name must not be empty"));
    }

    // ?演算子による変換の確認
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn io_operation() -> Result<(), MdToXlsxError> {
            let _file = std::fs::File::open("nonexistent_file.md")?;
            Ok(())
        }

        match io_operation() {
            Err(MdToXlsxError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io error from ? operator"),
        }
    }
}
