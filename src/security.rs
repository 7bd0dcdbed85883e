//! Security Module
//!
//! 入力サイズの制限を実装するモジュール。
//! 巨大なファイルを丸ごとメモリに読み込むことを防ぎます。

use std::io::Read;

use crate::error::MdToXlsxError;

/// 入力ファイルの最大サイズ（バイト）のデフォルト値
/// デフォルト: 64MB (67_108_864 bytes)
pub(crate) const DEFAULT_MAX_INPUT_SIZE: u64 = 67_108_864;

/// 入力を上限サイズまで読み込む
///
/// 上限を1バイトでも超えた時点で読み込みを打ち切ります。
///
/// # 引数
///
/// * `reader` - 入力元のリーダー
/// * `max_size` - 許容する最大バイト数
///
/// # 戻り値
///
/// * `Ok(Vec<u8>)` - 読み込んだバイト列
/// * `Err(MdToXlsxError::SecurityViolation)` - 上限を超えた場合
pub(crate) fn read_limited<R: Read>(reader: R, max_size: u64) -> Result<Vec<u8>, MdToXlsxError> {
    let mut buffer = Vec::new();
    let bytes_read = reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if bytes_read as u64 > max_size {
        return Err(MdToXlsxError::SecurityViolation(format!(
            "Input file size exceeds maximum: more than {} bytes",
            max_size
        )));
    }

    Ok(buffer)
}
