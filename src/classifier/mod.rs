//! 曲名分類モジュール
//!
//! 旧デッキの1行（例: `"ANI Bocchi the Rock OP2"`）を
//! アニメタイトルと曲ラベルに分解する。
//!
//! ## 処理フロー
//! 1. 先頭のカテゴリタグ（大文字3文字 + 空白）を除去
//! 2. オートマトンで行末の OP/ED マーカーを検出
//! 3. マーカーより前をタイトルとし、必要ならタイトルケース化

pub mod automaton;
mod types;

pub use types::{ClassifiedTitle, TrackKind, TrackLabel};

use crate::normalizer::title_case;
use regex::Regex;

/// 先頭のカテゴリタグを除去する
///
/// 4文字未満の行にはタグがないものとして扱う。
pub fn strip_category_prefix(line: &str) -> &str {
    lazy_static::lazy_static! {
        static ref CATEGORY_PREFIX: Regex = Regex::new(r"^[A-Z]{3} ").unwrap();
    }

    match CATEGORY_PREFIX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// 1行をタイトルと曲ラベルに分類する
///
/// マーカーが見つからない場合は行全体がタイトル、ラベルは "OP 1"。
/// 番号のない "ED" は "ED 1" になる。
///
/// # Arguments
/// * `line` - 前後の空白を除いた旧デッキの1行
/// * `normalize_case` - タイトルをタイトルケースに揃えるか
pub fn classify(line: &str, normalize_case: bool) -> ClassifiedTitle {
    let text = strip_category_prefix(line);

    let (title, label) = match automaton::scan(text) {
        // マーカー直前の空白は含めない
        Some(m) => (
            text[..m.start - 1].trim_end(),
            TrackLabel::new(m.kind, m.number.unwrap_or("1")),
        ),
        None => (text, TrackLabel::default()),
    };

    let title = if normalize_case {
        title_case(title)
    } else {
        title.to_string()
    };

    ClassifiedTitle { title, label }
}
