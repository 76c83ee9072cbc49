use anyhow::{Context, Result};
use clap::Parser;
use karuta_deck_converter::{cli, config, convert, deck, renamer};
use cli::Cli;
use config::Config;
use convert::ConvertOptions;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn print_report(report: &renamer::RenameReport, dry_run: bool) {
    println!("\nリネーム結果:");
    if dry_run {
        println!("  リネーム予定: {}", report.planned);
    } else {
        println!("  リネーム: {}", report.renamed);
        println!("  リネーム（大文字小文字違い）: {}", report.renamed_from_fallback);
    }
    println!("  スキップ（既存）: {}", report.target_exists);
    println!("  元ファイルなし: {}", report.source_missing);
    println!("  エラー: {}", report.failed);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;
    let config = cli.apply_to(config);
    let options = ConvertOptions::from_config(&cli.name, cli.output_path(), &config, cli.dry_run);

    println!("🎴 karuta-deck-converter - デッキ変換\n");

    let summary = convert::convert_deck(&cli.deck_file, &options)
        .with_context(|| format!("{} の変換に失敗", cli.deck_file.display()))?;

    print_report(&summary.report, cli.dry_run);

    if !cli.dry_run {
        let missing = deck::verify::missing_audio(&summary.deck, &options.sounds_dir);
        if !missing.is_empty() {
            println!("\n⚠ 音源ファイルが見つからないカード: {}件", missing.len());
            for card in missing {
                println!("  {} ({})", card.audio, card.type_);
            }
        }
    }

    println!("\n✅ 完了（{}枚）", summary.deck.len());
    Ok(())
}
