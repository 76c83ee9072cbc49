use crate::error::{DeckError, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// 音源フォルダのファイル一覧（開始時に一度だけ取得）
///
/// 実行中にリネームしたファイルは反映されない。
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    root: PathBuf,
    file_names: BTreeSet<String>,
}

impl DirectorySnapshot {
    pub fn capture(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            return Err(DeckError::FolderNotFound(folder.display().to_string()));
        }

        let file_names = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1) // 直下のみ（再帰しない）
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| match e.file_name().to_str() {
                Some(name) => Some(name.to_string()),
                None => {
                    warn!("UTF-8でないファイル名のためスキップ: {}", e.path().display());
                    None
                }
            })
            .collect();

        Ok(Self {
            root: folder.to_path_buf(),
            file_names,
        })
    }

    /// 空のスナップショット（フォルダが存在しない場合用）
    pub fn empty(folder: &Path) -> Self {
        Self {
            root: folder.to_path_buf(),
            file_names: BTreeSet::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.file_names.contains(file_name)
    }

    /// 大文字小文字だけが違うファイル名を探す（ASCIIのみ）
    ///
    /// `file_name` 自身と `exclude` に含まれる名前は候補にしない。
    /// 複数候補がある場合は名前順で最初のもの。
    pub fn find_case_insensitive_except(
        &self,
        file_name: &str,
        exclude: &HashSet<String>,
    ) -> Option<&str> {
        self.file_names
            .iter()
            .filter(|name| name.as_str() != file_name && !exclude.contains(name.as_str()))
            .find(|name| name.eq_ignore_ascii_case(file_name))
            .map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.file_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_names.is_empty()
    }
}
