//! Karuta Deck Converter
//!
//! 旧形式（1行1曲のテキスト）のカルタデッキをデッキJSONに変換し、
//! 音源ファイル名を `<アニメ> - <OP/ED n>.mp3` に統一する。

pub mod classifier;
pub mod cli;
pub mod config;
pub mod convert;
pub mod deck;
pub mod error;
pub mod normalizer;
pub mod renamer;
pub mod scanner;

pub use classifier::{classify, ClassifiedTitle, TrackKind, TrackLabel};
pub use deck::{Card, Deck};
pub use error::{DeckError, Result};
