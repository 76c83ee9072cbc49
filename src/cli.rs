use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "karuta-deck-converter")]
#[command(about = "旧形式のカルタデッキをJSONに変換し、音源ファイル名を統一する", long_about = None)]
pub struct Cli {
    /// 旧形式デッキファイル（1行1曲）
    pub deck_file: PathBuf,

    /// デッキ名（出力ファイル名にも使用）
    pub name: String,

    /// 音源フォルダ（デフォルト: Sounds）
    #[arg(long)]
    pub sounds_dir: Option<PathBuf>,

    /// カバー画像（デフォルト: default.png）
    #[arg(long)]
    pub cover: Option<String>,

    /// 出力JSONファイル（デフォルト: <デッキ名>.json）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// アニメタイトルの大文字小文字をそのまま残す
    #[arg(long)]
    pub keep_case: bool,

    /// ドライラン（リネームもJSON出力もせず計画だけ表示）
    #[arg(long)]
    pub dry_run: bool,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// コマンドライン指定で設定を上書き
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.sounds_dir {
            config.sounds_dir = dir.clone();
        }
        if let Some(cover) = &self.cover {
            config.default_cover = cover.clone();
        }
        if self.keep_case {
            config.title_case = false;
        }
        config
    }

    /// 出力先（省略時はカレントディレクトリの <デッキ名>.json）
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", self.name)))
    }
}
