//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// ヘッダーと列数が一致しない行の処理方法
///
/// Markdownテーブルでは行ごとにセル数が異なることがありますが、
/// スプレッドシートとして書き出すには矩形のテーブルが必要です。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum RowShapePolicy {
    /// 列数が異なる行をエラーとする（デフォルト）
    ///
    /// `MdToXlsxError::ShapeMismatch`を返し、ファイルは書き出されません。
    #[default]
    Strict,

    /// ヘッダーより短い行を空セルで補完する
    ///
    /// ヘッダーより長い行は、データの欠落を避けるためエラーのままです。
    ///
    /// # 例
    ///
    /// ```markdown
    /// | Name  | Age | City  |
    /// | ----- | --- | ----- |
    /// | Alice | 30  |
    /// ```
    ///
    /// 2行目は `["Alice", "30", ""]` として扱われます。
    PadShort,
}
