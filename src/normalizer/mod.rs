//! 文字列正規化モジュール
//!
//! - ファイル名のサニタイズ（`'` `;` `/` → `_`）
//! - アニメタイトルのタイトルケース化

pub mod filename;
pub mod title;

pub use filename::sanitize_file_name;
pub use title::title_case;
