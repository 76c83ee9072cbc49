//! OP/ED マーカー検出オートマトン
//!
//! 行末の「空白 + OP/ED + (数字 | 空白 + 数字)?」を、1文字ずつの状態遷移で検出する。
//! バックトラックはしない。判定は入力終端での状態で行い、
//! マーカー位置は最後に通過した OP/ED のものを使う。

use super::types::TrackKind;

/// 走査状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// 初期状態
    Idle,
    /// 空白の直後
    AfterSpace,
    /// "o" を読んだ
    SawO,
    /// "op" を読んだ
    Op,
    /// "e" を読んだ
    SawE,
    /// "ed" を読んだ
    Ed,
    /// "op " / "ed " を読んだ
    MarkerSpace,
    /// "op2" のように数字が直結
    GluedNumber,
    /// "op 2" のように空白を挟んで数字
    SpacedNumber,
}

/// 文字クラス（ASCII大文字小文字は区別しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    O,
    P,
    E,
    D,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        match c.to_ascii_lowercase() {
            ' ' => CharClass::Space,
            'o' => CharClass::O,
            'p' => CharClass::P,
            'e' => CharClass::E,
            'd' => CharClass::D,
            c if c.is_ascii_digit() => CharClass::Digit,
            _ => CharClass::Other,
        }
    }
}

impl State {
    /// 遷移関数
    fn step(self, class: CharClass) -> State {
        use CharClass as C;
        use State::*;

        match (self, class) {
            (Idle, C::Space) => AfterSpace,
            (AfterSpace | MarkerSpace, C::O) => SawO,
            (SawO, C::P) => Op,
            (AfterSpace | MarkerSpace, C::E) => SawE,
            (SawE, C::D) => Ed,
            (Op | Ed | GluedNumber, C::Digit) => GluedNumber,
            (Op | Ed, C::Space) => MarkerSpace,
            (MarkerSpace | SpacedNumber, C::Digit) => SpacedNumber,
            _ => Idle,
        }
    }
}

/// 検出されたマーカー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub kind: TrackKind,
    /// マーカー先頭（"o" / "e"）のバイト位置
    pub start: usize,
    /// マーカーに続く番号（省略時は None）
    pub number: Option<&'a str>,
}

/// 文字列を走査してマーカーを探す
pub fn scan(text: &str) -> Option<MarkerMatch<'_>> {
    let mut state = State::Idle;
    let mut marker: Option<(TrackKind, usize)> = None;

    for (i, c) in text.char_indices() {
        state = state.step(CharClass::of(c));

        // 直前の文字は ASCII の "o" / "e" なので i - 1 が先頭位置
        match state {
            State::Op => marker = Some((TrackKind::Opening, i - 1)),
            State::Ed => marker = Some((TrackKind::Ending, i - 1)),
            _ => {}
        }
    }

    let (kind, start) = marker?;
    let number = match state {
        State::Op | State::Ed => None,
        State::GluedNumber => Some(&text[start + 2..]),
        State::SpacedNumber => Some(&text[start + 3..]),
        _ => return None,
    };

    Some(MarkerMatch { kind, start, number })
}
