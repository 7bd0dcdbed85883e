//! Spreadsheet Writer
//!
//! `rust_xlsxwriter`を使用して、テーブルを1シートのXLSXファイルとして書き出すモジュール。

use std::path::Path;

use rust_xlsxwriter::{ColNum, RowNum, Workbook, XlsxError};
use tracing::debug;

use crate::error::MdToXlsxError;
use crate::table::Table;

/// Excelの最大行数
const MAX_ROWS: usize = 1_048_576;

/// Excelの最大列数
const MAX_COLS: usize = 16_384;

/// テーブルをXLSXファイルとして書き出す
///
/// ヘッダーを1行目、データ行を2行目以降に書き込みます。値はすべて文字列として
/// 書き込み、書式やインデックス列は追加しません。空セルは空白のまま残します。
///
/// # 引数
///
/// * `table` - 書き出すテーブル
/// * `path` - 出力先のパス
/// * `sheet_name` - シート名
///
/// # 戻り値
///
/// * `Ok(())` - 書き出しに成功した場合
/// * `Err(MdToXlsxError::Write)` - ワークブックの生成または保存に失敗した場合
pub fn write_spreadsheet<P: AsRef<Path>>(
    table: &Table,
    path: P,
    sheet_name: &str,
) -> Result<(), MdToXlsxError> {
    let mut workbook = build_workbook(table, sheet_name)?;
    workbook.save(path.as_ref())?;

    debug!(path = %path.as_ref().display(), "saved workbook");
    Ok(())
}

/// テーブルをXLSX形式のバイト列に変換する
///
/// # 使用例
///
/// ```rust
/// use md2xlsx::{build_table, write_to_buffer, RowShapePolicy};
///
/// # fn main() -> Result<(), md2xlsx::MdToXlsxError> {
/// let table = build_table(
///     vec![vec!["Name".to_string()], vec!["Alice".to_string()]],
///     RowShapePolicy::Strict,
/// )?;
/// let bytes = write_to_buffer(&table, "Sheet1")?;
/// assert!(!bytes.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn write_to_buffer(table: &Table, sheet_name: &str) -> Result<Vec<u8>, MdToXlsxError> {
    let mut workbook = build_workbook(table, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(table: &Table, sheet_name: &str) -> Result<Workbook, MdToXlsxError> {
    // ヘッダー行を含めた行数
    if table.row_count() + 1 > MAX_ROWS || table.col_count() > MAX_COLS {
        return Err(XlsxError::RowColumnLimitError.into());
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let all_rows = std::iter::once(table.headers()).chain(table.rows().iter().map(Vec::as_slice));
    for (row_idx, row) in all_rows.enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string(row_idx as RowNum, col_idx as ColNum, cell)?;
        }
    }

    debug!(
        sheet = sheet_name,
        rows = table.row_count(),
        cols = table.col_count(),
        "built workbook"
    );
    Ok(workbook)
}
