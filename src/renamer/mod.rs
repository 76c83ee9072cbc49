//! 音源ファイルのリネーム
//!
//! 失敗しても処理は止めない（ロールバックもしない）。
//! 結果は [`RenameOutcome`] として返し、ログに残す。

mod types;

pub use types::{RenameOutcome, RenameReport, RenameRequest};

use crate::normalizer::sanitize_file_name;
use crate::scanner::DirectorySnapshot;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

impl RenameRequest {
    /// 拡張子なしの名前からリネーム要求を作る（サニタイズ込み）
    pub fn new(source_stem: &str, target_stem: &str, extension: &str) -> Self {
        Self {
            source: sanitize_file_name(&format!("{}.{}", source_stem, extension)),
            target: sanitize_file_name(&format!("{}.{}", target_stem, extension)),
        }
    }
}

pub struct AudioRenamer {
    snapshot: DirectorySnapshot,
    dry_run: bool,
    /// ドライランでリネーム予定にした変更後ファイル名
    planned_targets: HashSet<String>,
    /// この実行で使った（またはドライランで使う予定の）元ファイル名
    used_sources: HashSet<String>,
}

impl AudioRenamer {
    pub fn new(snapshot: DirectorySnapshot, dry_run: bool) -> Self {
        Self {
            snapshot,
            dry_run,
            planned_targets: HashSet::new(),
            used_sources: HashSet::new(),
        }
    }

    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    /// 1件リネームする
    ///
    /// 変更後のファイルが既にある場合は上書きせずスキップ。
    /// 元ファイルがなければ大文字小文字を無視して探し直す。
    pub fn rename(&mut self, request: &RenameRequest) -> RenameOutcome {
        let target_path = self.snapshot.root().join(&request.target);

        if self.snapshot.contains(&request.target)
            || target_path.exists()
            || self.planned_targets.contains(&request.target)
        {
            warn!("{} は既に存在するためスキップ", request.target);
            return RenameOutcome::TargetExists;
        }

        if self.dry_run {
            return self.plan(request);
        }

        let source_path = self.snapshot.root().join(&request.source);
        match std::fs::rename(source_path, &target_path) {
            Ok(()) => {
                info!("{} -> {}", request.source, request.target);
                self.used_sources.insert(request.source.clone());
                RenameOutcome::Renamed
            }
            Err(e) if e.kind() == ErrorKind::NotFound => self.rename_fallback(request, &target_path),
            Err(e) => {
                warn!("{} のリネームに失敗: {}", request.source, e);
                RenameOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// 大文字小文字違いの未使用ファイル
    fn fallback_source(&self, request: &RenameRequest) -> Option<String> {
        self.snapshot
            .find_case_insensitive_except(&request.source, &self.used_sources)
            .map(|name| name.to_string())
    }

    fn rename_fallback(&mut self, request: &RenameRequest, target_path: &Path) -> RenameOutcome {
        let Some(matched) = self.fallback_source(request) else {
            warn!("{} が見つかりません", request.source);
            return RenameOutcome::SourceMissing;
        };

        match std::fs::rename(self.snapshot.root().join(&matched), target_path) {
            Ok(()) => {
                info!(
                    "{} の代わりに {} を使用: {} -> {}",
                    request.source, matched, matched, request.target
                );
                self.used_sources.insert(matched.clone());
                RenameOutcome::RenamedFromFallback { matched }
            }
            Err(e) => {
                warn!("{} のリネームに失敗: {}", matched, e);
                RenameOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// ドライラン: 実際のリネームと同じ順で元ファイルを割り当てる
    fn plan(&mut self, request: &RenameRequest) -> RenameOutcome {
        let exact_available = self.snapshot.contains(&request.source)
            && !self.used_sources.contains(&request.source);

        let from = if exact_available {
            request.source.clone()
        } else if let Some(name) = self.fallback_source(request) {
            name
        } else {
            warn!("{} が見つかりません", request.source);
            return RenameOutcome::SourceMissing;
        };

        info!("(ドライラン) {} -> {}", from, request.target);
        self.planned_targets.insert(request.target.clone());
        self.used_sources.insert(from.clone());
        RenameOutcome::Planned { from }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn renamer_for(dir: &Path, dry_run: bool) -> AudioRenamer {
        AudioRenamer::new(DirectorySnapshot::capture(dir).unwrap(), dry_run)
    }

    #[test]
    fn test_request_is_sanitized() {
        let request = RenameRequest::new("JoJo's OP 1", "Jojo's - OP 1", "mp3");
        assert_eq!(request.source, "JoJo_s OP 1.mp3");
        assert_eq!(request.target, "Jojo_s - OP 1.mp3");
    }

    #[test]
    fn test_exact_rename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Naruto OP 2.mp3"), b"audio").unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let outcome = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(outcome, RenameOutcome::Renamed);
        assert!(!dir.path().join("Naruto OP 2.mp3").exists());
        assert_eq!(fs::read(dir.path().join("Naruto - OP 2.mp3")).unwrap(), b"audio");
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("naruto op 2.mp3")).unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let outcome = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(
            outcome,
            RenameOutcome::RenamedFromFallback {
                matched: "naruto op 2.mp3".into()
            }
        );
        assert!(dir.path().join("Naruto - OP 2.mp3").exists());
    }

    #[test]
    fn test_missing_source_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let outcome = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(outcome, RenameOutcome::SourceMissing);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Naruto OP 2.mp3"), b"new").unwrap();
        fs::write(dir.path().join("Naruto - OP 2.mp3"), b"old").unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let outcome = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(outcome, RenameOutcome::TargetExists);
        assert_eq!(fs::read(dir.path().join("Naruto - OP 2.mp3")).unwrap(), b"old");
        assert!(dir.path().join("Naruto OP 2.mp3").exists());
    }

    #[test]
    fn test_target_created_during_run_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Naruto OP2.mp3"), b"first").unwrap();
        fs::write(dir.path().join("Naruto OP 2.mp3"), b"second").unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let first = renamer.rename(&RenameRequest::new("Naruto OP2", "Naruto - OP 2", "mp3"));
        let second = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(first, RenameOutcome::Renamed);
        assert_eq!(second, RenameOutcome::TargetExists);
        assert_eq!(fs::read(dir.path().join("Naruto - OP 2.mp3")).unwrap(), b"first");
    }

    #[test]
    fn test_source_used_earlier_in_run_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("Naruto.mp3")).unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let first = renamer.rename(&RenameRequest::new("Naruto", "Naruto - OP 1", "mp3"));
        let second = renamer.rename(&RenameRequest::new("Naruto", "Naruto - ED 1", "mp3"));

        assert_eq!(first, RenameOutcome::Renamed);
        assert_eq!(second, RenameOutcome::SourceMissing);
    }

    #[test]
    fn test_dry_run_does_not_touch_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("naruto OP 2.mp3")).unwrap();

        let mut renamer = renamer_for(dir.path(), true);
        let outcome = renamer.rename(&RenameRequest::new("Naruto OP 2", "Naruto - OP 2", "mp3"));

        assert_eq!(
            outcome,
            RenameOutcome::Planned {
                from: "naruto OP 2.mp3".into()
            }
        );
        assert!(dir.path().join("naruto OP 2.mp3").exists());
        assert!(!dir.path().join("Naruto - OP 2.mp3").exists());

        // 同じ変更後ファイル名は2件目以降スキップ扱い
        let again = renamer.rename(&RenameRequest::new("naruto OP 2", "Naruto - OP 2", "mp3"));
        assert_eq!(again, RenameOutcome::TargetExists);
    }

    #[test]
    fn test_fallback_skips_source_used_earlier() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Naruto.mp3"), b"upper").unwrap();
        fs::write(dir.path().join("naruto.mp3"), b"lower").unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let first = renamer.rename(&RenameRequest::new("Naruto", "Naruto - OP 1", "mp3"));
        let second = renamer.rename(&RenameRequest::new("Naruto", "Naruto - ED 1", "mp3"));

        assert_eq!(first, RenameOutcome::Renamed);
        assert_eq!(
            second,
            RenameOutcome::RenamedFromFallback {
                matched: "naruto.mp3".into()
            }
        );
        assert_eq!(fs::read(dir.path().join("Naruto - OP 1.mp3")).unwrap(), b"upper");
        assert_eq!(fs::read(dir.path().join("Naruto - ED 1.mp3")).unwrap(), b"lower");
        assert!(!dir.path().join("naruto.mp3").exists());
    }

    #[test]
    fn test_fallback_source_is_used_only_once() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("Naruto.mp3")).unwrap();

        let mut renamer = renamer_for(dir.path(), false);
        let first = renamer.rename(&RenameRequest::new("naruto", "naruto - OP 1", "mp3"));
        let second = renamer.rename(&RenameRequest::new("NARUTO", "NARUTO - OP 1", "mp3"));

        assert_eq!(
            first,
            RenameOutcome::RenamedFromFallback {
                matched: "Naruto.mp3".into()
            }
        );
        assert_eq!(second, RenameOutcome::SourceMissing);
    }

    /// ドライランの計画は実際のリネーム結果と一致する
    #[test]
    fn test_dry_run_matches_real_run() {
        let layouts: [&[&str]; 3] = [
            &["Naruto.mp3"],
            &["Naruto.mp3", "naruto.mp3"],
            &["NARUTO.mp3", "Bleach.mp3"],
        ];
        let requests = [
            RenameRequest::new("naruto", "naruto - OP 1", "mp3"),
            RenameRequest::new("NARUTO", "NARUTO - OP 1", "mp3"),
            RenameRequest::new("Naruto", "Naruto - ED 1", "mp3"),
            RenameRequest::new("bleach", "Bleach - OP 1", "mp3"),
        ];

        for layout in layouts {
            let dry_dir = tempfile::tempdir().unwrap();
            let real_dir = tempfile::tempdir().unwrap();
            for name in layout {
                File::create(dry_dir.path().join(name)).unwrap();
                File::create(real_dir.path().join(name)).unwrap();
            }

            let mut dry = renamer_for(dry_dir.path(), true);
            let mut real = renamer_for(real_dir.path(), false);

            for request in &requests {
                let planned = dry.rename(request);
                let actual = real.rename(request);

                let expected_from = match &actual {
                    RenameOutcome::Renamed => Some(request.source.clone()),
                    RenameOutcome::RenamedFromFallback { matched } => Some(matched.clone()),
                    _ => None,
                };
                match planned {
                    RenameOutcome::Planned { from } => {
                        assert_eq!(Some(from), expected_from, "{:?} {:?}", layout, request)
                    }
                    other => {
                        assert_eq!(other, actual, "{:?} {:?}", layout, request);
                        assert!(expected_from.is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn test_report_counts() {
        let mut report = RenameReport::default();
        report.record(&RenameOutcome::Renamed);
        report.record(&RenameOutcome::SourceMissing);
        report.record(&RenameOutcome::TargetExists);
        report.record(&RenameOutcome::RenamedFromFallback {
            matched: "a.mp3".into(),
        });

        assert_eq!(report.total, 4);
        assert_eq!(report.renamed, 1);
        assert_eq!(report.renamed_from_fallback, 1);
        assert_eq!(report.source_missing, 1);
        assert_eq!(report.target_exists, 1);
        assert_eq!(report.failed, 0);
    }
}
