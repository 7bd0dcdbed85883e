//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

/// テーブルの1行（セル文字列の並び）
pub type Row = Vec<String>;

/// ファイル変換の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// データ行数（ヘッダーを除く）
    pub rows: usize,

    /// 列数
    pub cols: usize,

    /// 書き出したXLSXファイルのバイト数
    pub bytes_written: u64,
}
