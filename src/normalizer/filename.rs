//! ファイル名のサニタイズ
//!
//! 旧デッキの曲名にはファイル名として扱いづらい文字が含まれるため、
//! 音源ファイル名を組み立てる時点で `_` に置き換える。

/// ファイル名に使えない（または曖昧な）文字
const UNSAFE_CHARS: [char; 3] = ['\'', ';', '/'];

/// ファイル名中の危険な文字を `_` に置換する
///
/// パス全体ではなくファイル名部分にのみ適用すること。
pub fn sanitize_file_name(name: &str) -> String {
    name.replace(UNSAFE_CHARS, "_")
}
