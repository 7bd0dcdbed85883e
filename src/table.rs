//! Table Module
//!
//! 解析済みの行データから、ヘッダーとデータ行からなる矩形のテーブルを構築するモジュール。

use tracing::{debug, warn};

use crate::api::RowShapePolicy;
use crate::error::MdToXlsxError;
use crate::types::Row;

/// ヘッダー行とデータ行からなるテーブル
///
/// すべてのデータ行はヘッダーと同じ列数を持ちます。
/// `build_table`または`read_table`からのみ生成されます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Row,
    rows: Vec<Row>,
}

impl Table {
    /// ヘッダー行
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// データ行（ヘッダーを除く）
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// データ行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 列数
    pub fn col_count(&self) -> usize {
        self.headers.len()
    }

    /// テーブルを分解してヘッダーとデータ行を取り出す
    pub fn into_parts(self) -> (Row, Vec<Row>) {
        (self.headers, self.rows)
    }

    pub(crate) fn from_parts_unchecked(headers: Row, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }
}

/// 行データからテーブルを構築する
///
/// 先頭行をヘッダー、残りをデータ行として扱います。
///
/// # 引数
///
/// * `rows` - 解析済みの行データ
/// * `policy` - ヘッダーと列数が一致しない行の処理方法
///
/// # 戻り値
///
/// * `Ok(Table)` - テーブルの構築に成功した場合
/// * `Err(MdToXlsxError::EmptyTable)` - 行が存在しない、またはヘッダーのみの場合
/// * `Err(MdToXlsxError::ShapeMismatch)` - 列数がヘッダーと一致しない行がある場合
///
/// # 使用例
///
/// ```rust
/// use md2xlsx::{build_table, RowShapePolicy};
///
/// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
/// let rows = vec![
///     vec!["Name".to_string(), "Age".to_string()],
///     vec!["Alice".to_string(), "30".to_string()],
/// ];
/// let table = build_table(rows, RowShapePolicy::Strict)?;
/// assert_eq!(table.headers(), ["Name", "Age"]);
/// assert_eq!(table.row_count(), 1);
/// # Ok(())
/// # }
/// ```
pub fn build_table(rows: Vec<Row>, policy: RowShapePolicy) -> Result<Table, MdToXlsxError> {
    let mut rows = rows.into_iter();
    let headers = rows.next().ok_or(MdToXlsxError::EmptyTable)?;
    let width = headers.len();

    let mut data = Vec::with_capacity(rows.len());
    for (idx, mut row) in rows.enumerate() {
        let line = idx + 1;
        let found = row.len();

        if found > width {
            return Err(MdToXlsxError::ShapeMismatch {
                line,
                expected: width,
                found,
            });
        }

        if found < width {
            match policy {
                RowShapePolicy::PadShort => {
                    warn!(line, expected = width, found, "padding short row");
                    row.resize(width, String::new());
                }
                _ => {
                    return Err(MdToXlsxError::ShapeMismatch {
                        line,
                        expected: width,
                        found,
                    });
                }
            }
        }

        data.push(row);
    }

    if data.is_empty() {
        return Err(MdToXlsxError::EmptyTable);
    }

    debug!(rows = data.len(), cols = width, "built table");
    Ok(Table {
        headers,
        rows: data,
    })
}
