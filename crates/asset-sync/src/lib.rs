//! Asset synchronization into the Android project tree.
//!
//! Walks a source directory, selects files by extension, and mirrors their
//! relative paths under a destination directory. Asset categories (shaders,
//! fonts, audio, meshes, textures) are described declaratively and expand
//! into one [`CopyTask`] per extension.

mod category;
mod copy;
mod error;

pub use category::{
    AssetCategory, CategorySummary, SHADERS, default_categories, find_category, sync_categories,
    sync_category,
};
pub use copy::{CopyOutcome, CopyReport, CopyTask, matches_extension};
pub use error::SyncError;

/// Android asset folder, relative to the project root.
pub const ANDROID_ASSETS_DIR: &str = "Android/app/src/main/assets";
