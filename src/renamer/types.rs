/// リネーム要求（ファイル名はサニタイズ済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    /// 既存の音源ファイル名
    pub source: String,
    /// 変更後のファイル名
    pub target: String,
}

/// 1件ごとのリネーム結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// そのままの名前でリネームした
    Renamed,
    /// 大文字小文字違いのファイルを見つけてリネームした
    RenamedFromFallback { matched: String },
    /// ドライラン: リネーム予定
    Planned { from: String },
    /// 変更後のファイルが既にあるためスキップ
    TargetExists,
    /// 元ファイルが見つからない
    SourceMissing,
    /// その他のIOエラー
    Failed { reason: String },
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            RenameOutcome::Renamed
                | RenameOutcome::RenamedFromFallback { .. }
                | RenameOutcome::Planned { .. }
        )
    }
}

/// リネーム結果の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub total: usize,
    pub renamed: usize,
    pub renamed_from_fallback: usize,
    pub planned: usize,
    pub target_exists: usize,
    pub source_missing: usize,
    pub failed: usize,
}

impl RenameReport {
    pub fn record(&mut self, outcome: &RenameOutcome) {
        self.total += 1;
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::RenamedFromFallback { .. } => self.renamed_from_fallback += 1,
            RenameOutcome::Planned { .. } => self.planned += 1,
            RenameOutcome::TargetExists => self.target_exists += 1,
            RenameOutcome::SourceMissing => self.source_missing += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
        }
    }
}
