//! アニメタイトルの大文字小文字統一

/// タイトルケースに変換する（ASCIIのみ）
///
/// 単語の先頭英字を大文字、残りを小文字にする。
/// 英数字とアポストロフィ以外の文字が単語の区切りになる。
/// 非ASCII文字はそのまま残す。
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            if word_start {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c.to_ascii_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = !(c.is_alphanumeric() || c == '\'');
        }
    }

    result
}
