//! 音源ファイルの整合性チェック
//!
//! デッキサーバーは `Sounds/<audio>` を配信するため、
//! 変換後に各カードの音源が実在するかを確認する。

use super::{Card, Deck};
use std::path::Path;

/// 音源ファイルが存在しないカードを返す
pub fn missing_audio<'a>(deck: &'a Deck, sounds_dir: &Path) -> Vec<&'a Card> {
    deck.cards
        .iter()
        .filter(|card| !sounds_dir.join(&card.audio).is_file())
        .collect()
}
