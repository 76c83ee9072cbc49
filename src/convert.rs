//! デッキ変換処理
//!
//! 旧デッキを1行ずつ分類し、音源をリネームしながらカードを積み上げ、
//! 最後にデッキJSONを一度だけ書き出す。

use crate::classifier::classify;
use crate::config::Config;
use crate::deck::{Card, Deck};
use crate::error::{DeckError, Result};
use crate::renamer::{AudioRenamer, RenameReport, RenameRequest};
use crate::scanner::DirectorySnapshot;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 変換オプション
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// デッキ名
    pub name: String,
    /// 出力JSONファイル
    pub output: PathBuf,
    pub sounds_dir: PathBuf,
    pub audio_extension: String,
    pub visual_extension: String,
    pub cover: String,
    pub title_case: bool,
    pub dry_run: bool,
}

impl ConvertOptions {
    pub fn from_config(name: &str, output: PathBuf, config: &Config, dry_run: bool) -> Self {
        Self {
            name: name.to_string(),
            output,
            sounds_dir: config.sounds_dir.clone(),
            audio_extension: config.audio_extension.clone(),
            visual_extension: config.visual_extension.clone(),
            cover: config.default_cover.clone(),
            title_case: config.title_case,
            dry_run,
        }
    }
}

/// 1行分の変換計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlan {
    pub card: Card,
    pub request: RenameRequest,
}

/// 変換結果
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub deck: Deck,
    pub report: RenameReport,
}

/// 旧デッキファイルを読み込む（各行の前後の空白は除去、空行も1曲として残す）
pub fn read_deck_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(DeckError::FileNotFound(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?.trim().to_string());
    }
    Ok(lines)
}

/// 1行からカードとリネーム要求を作る
pub fn plan_card(line: &str, options: &ConvertOptions) -> CardPlan {
    let classified = classify(line, options.title_case);
    let label = classified.label.to_string();
    debug!("{:?} -> ({:?}, {})", line, classified.title, label);

    let target_stem = format!("{} - {}", classified.title, label);
    let request = RenameRequest::new(line, &target_stem, &options.audio_extension);

    let card = Card {
        anime: classified.title,
        type_: label,
        visual: format!("{}.{}", line, options.visual_extension),
        audio: request.target.clone(),
    };

    CardPlan { card, request }
}

pub fn plan_cards(lines: &[String], options: &ConvertOptions) -> Vec<CardPlan> {
    lines.iter().map(|line| plan_card(line, options)).collect()
}

/// 音源フォルダのスナップショット（フォルダがなければ空として続行）
fn snapshot_sounds(sounds_dir: &Path) -> Result<DirectorySnapshot> {
    match DirectorySnapshot::capture(sounds_dir) {
        Ok(snapshot) => Ok(snapshot),
        Err(DeckError::FolderNotFound(folder)) => {
            warn!("音源フォルダが見つかりません: {}（リネームはすべてスキップ）", folder);
            Ok(DirectorySnapshot::empty(sounds_dir))
        }
        Err(e) => Err(e),
    }
}

/// デッキを変換する
///
/// 音源のリネームに失敗してもカードは必ずデッキに残る。
/// ドライランではファイルを一切変更しない。
pub fn convert_deck(deck_file: &Path, options: &ConvertOptions) -> Result<ConvertSummary> {
    println!("[1/4] デッキを読み込み中...");
    let lines = read_deck_lines(deck_file)?;
    println!("✔ {}曲を検出\n", lines.len());

    println!("[2/4] 曲名を解析中...");
    let plans = plan_cards(&lines, options);
    for plan in &plans {
        println!("  {} - {}", plan.card.anime, plan.card.type_);
    }
    println!();

    println!(
        "[3/4] 音源ファイルをリネーム中...{}",
        if options.dry_run { " (ドライラン)" } else { "" }
    );
    let snapshot = snapshot_sounds(&options.sounds_dir)?;
    debug!("{}: {}ファイル", options.sounds_dir.display(), snapshot.len());

    let mut renamer = AudioRenamer::new(snapshot, options.dry_run);
    let mut report = RenameReport::default();
    let mut deck = Deck::new(&options.name, &options.cover);

    for plan in plans {
        let outcome = renamer.rename(&plan.request);
        report.record(&outcome);
        deck.push(plan.card);
    }
    println!();

    println!("[4/4] デッキを保存中...");
    if options.dry_run {
        println!("- ドライランのため保存しません");
    } else {
        deck.save(&options.output)?;
        println!("✔ デッキを保存: {}", options.output.display());
    }

    Ok(ConvertSummary { deck, report })
}
