//! デッキ（カタログ）JSON
//!
//! デッキサーバーが読む形式:
//! `{ name, category, type, cover, cards: [{ anime, type, visual, audio }] }`

pub mod verify;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const CATEGORY: &str = "KARUTA";
pub const DECK_TYPE: &str = "NORMAL";
pub const DEFAULT_COVER: &str = "default.png";

/// デッキ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub cover: String,
    pub cards: Vec<Card>,
}

/// カード（1曲）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// アニメタイトル
    pub anime: String,
    /// 曲ラベル（"OP 1" など）
    #[serde(rename = "type")]
    pub type_: String,
    /// 画像ファイル名
    pub visual: String,
    /// 音源ファイル名
    pub audio: String,
}

impl Deck {
    pub fn new(name: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: CATEGORY.into(),
            type_: DECK_TYPE.into(),
            cover: cover.into(),
            cards: Vec::new(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// デッキJSONを一括で書き出す
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
