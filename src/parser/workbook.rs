//! Workbook Reader
//!
//! calamineを使用して、XLSXファイルの最初のシートをテーブルとして読み戻す。
//! 書き出し結果の検証（ラウンドトリップ）に使用します。

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use tracing::debug;

use crate::error::MdToXlsxError;
use crate::table::Table;
use crate::types::Row;

/// XLSXファイルの最初のシートをテーブルとして読み込む
///
/// 1行目をヘッダー、2行目以降をデータ行として扱います。セル位置はA1を基準とし、
/// 列数はシート内で使用されている最も右の列までとなります。
///
/// # 引数
///
/// * `path` - XLSXファイルのパス
///
/// # 戻り値
///
/// * `Ok(Table)` - 読み込みに成功した場合
/// * `Err(MdToXlsxError::Parse)` - ファイルの解析に失敗した場合
/// * `Err(MdToXlsxError::Config)` - ワークブックにシートが存在しない場合
/// * `Err(MdToXlsxError::EmptyTable)` - データ行が存在しない場合
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table, MdToXlsxError> {
    let mut workbook = open_workbook_auto(path.as_ref())?;
    let range = first_sheet_range(&mut workbook)?;
    table_from_range(&range)
}

/// メモリ上のXLSXデータの最初のシートをテーブルとして読み込む
pub(crate) fn read_table_from_bytes(bytes: Vec<u8>) -> Result<Table, MdToXlsxError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = first_sheet_range(&mut workbook)?;
    table_from_range(&range)
}

fn first_sheet_range<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
) -> Result<Range<Data>, MdToXlsxError> {
    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range?),
        None => Err(MdToXlsxError::Config(
            "Workbook contains no worksheets".to_string(),
        )),
    }
}

fn table_from_range(range: &Range<Data>) -> Result<Table, MdToXlsxError> {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return Err(MdToXlsxError::EmptyTable);
    };

    let height = end.0 as usize + 1;
    let width = end.1 as usize + 1;
    let mut grid: Vec<Row> = vec![vec![String::new(); width]; height];

    for (row, col, cell) in range.cells() {
        let abs_row = start.0 as usize + row;
        let abs_col = start.1 as usize + col;
        grid[abs_row][abs_col] = cell_to_string(cell);
    }

    let mut rows = grid.into_iter();
    let headers = rows.next().ok_or(MdToXlsxError::EmptyTable)?;
    let data: Vec<Row> = rows.collect();
    if data.is_empty() {
        return Err(MdToXlsxError::EmptyTable);
    }

    debug!(rows = data.len(), cols = width, "read table from workbook");
    Ok(Table::from_parts_unchecked(headers, data))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        // 日付はシリアル値のまま返す
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}
