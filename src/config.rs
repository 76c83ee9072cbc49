use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 変換設定（~/.config/karuta-deck/config.json）
///
/// ファイルに書かれていない項目はデフォルト値を使う。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 音源フォルダ
    pub sounds_dir: PathBuf,
    /// 音源ファイルの拡張子
    pub audio_extension: String,
    /// 画像ファイルの拡張子
    pub visual_extension: String,
    /// デッキのカバー画像
    pub default_cover: String,
    /// アニメタイトルをタイトルケースに揃える
    pub title_case: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from("Sounds"),
            audio_extension: "mp3".into(),
            visual_extension: "png".into(),
            default_cover: crate::deck::DEFAULT_COVER.into(),
            title_case: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                DeckError::Config(format!("{}: {}", config_path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DeckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("karuta-deck").join("config.json"))
    }
}
