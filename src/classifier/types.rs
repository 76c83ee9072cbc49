use serde::{Deserialize, Serialize};
use std::fmt;

/// 曲種別（オープニング / エンディング）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Opening,
    Ending,
}

impl TrackKind {
    /// ラベル表記（"OP" / "ED"）
    pub fn code(&self) -> &'static str {
        match self {
            TrackKind::Opening => "OP",
            TrackKind::Ending => "ED",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 曲ラベル（"OP 1", "ED 2" など）
///
/// 番号は行に書かれた数字列をそのまま保持する（"OP 02" は "OP 02" のまま）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLabel {
    pub kind: TrackKind,
    pub number: String,
}

impl TrackLabel {
    pub fn new(kind: TrackKind, number: impl Into<String>) -> Self {
        Self {
            kind,
            number: number.into(),
        }
    }

    /// 番号省略時のラベル（1番）
    pub fn first(kind: TrackKind) -> Self {
        Self::new(kind, "1")
    }
}

impl Default for TrackLabel {
    fn default() -> Self {
        Self::first(TrackKind::Opening)
    }
}

impl fmt::Display for TrackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.number)
    }
}

/// 曲名の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTitle {
    /// アニメタイトル
    pub title: String,
    /// 曲ラベル
    pub label: TrackLabel,
}
