//! Link Module
//!
//! Markdownのmailtoリンク（`[表示名](mailto:address)`）から表示名を取り出すモジュール。

use once_cell::sync::Lazy;
use regex::Regex;

static MAILTO_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]\(mailto:[^)]+\)").expect("valid regex: mailto link")
});

/// セル内のmailtoリンクを表示名に置き換える
///
/// セル内に`[表示名](mailto:address)`形式のリンクが含まれる場合、セル全体を
/// 最初のリンクの表示名に置き換えます。リンクを含まないセルはそのまま返します。
///
/// # 使用例
///
/// ```rust
/// use md2xlsx::extract_email;
///
/// assert_eq!(extract_email("[Jane Doe](mailto:jane@example.com)"), "Jane Doe");
/// assert_eq!(extract_email("plain text"), "plain text");
/// ```
pub fn extract_email(cell: &str) -> String {
    display_text(cell).unwrap_or_else(|| cell.to_string())
}

/// 行内のすべてのセルにmailtoリンクの置換を適用
pub(crate) fn extract_emails_in_row(row: &mut [String]) {
    for cell in row.iter_mut() {
        if let Some(display) = display_text(cell) {
            *cell = display;
        }
    }
}

/// 最初のmailtoリンクの表示名（リンクがなければ`None`）
fn display_text(cell: &str) -> Option<String> {
    MAILTO_LINK
        .captures(cell)
        .map(|caps| caps[1].to_string())
}
