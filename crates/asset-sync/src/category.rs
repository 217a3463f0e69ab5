//! Declarative asset category table.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ANDROID_ASSETS_DIR;
use crate::copy::{CopyReport, CopyTask};
use crate::error::SyncError;

/// Name of the shader category, the only one `move_shaders` touches.
pub const SHADERS: &str = "shaders";

/// A named class of game content with its own paths and extension set.
///
/// `source` and `destination` are relative to the project root (absolute
/// paths are used as-is). An empty `extensions` list copies every file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCategory {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// What a category sync did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    /// `None` when the category's source folder does not exist.
    pub report: Option<CopyReport>,
}

impl AssetCategory {
    pub fn new(
        name: &str,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        extensions: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            source: source.into(),
            destination: destination.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Expands the category into one copy task per extension.
    pub fn tasks(&self, project_root: &Path) -> Vec<CopyTask> {
        let source = project_root.join(&self.source);
        let destination = project_root.join(&self.destination);

        if self.extensions.is_empty() {
            return vec![CopyTask::new(source, destination)];
        }

        self.extensions
            .iter()
            .map(|ext| CopyTask::new(&source, &destination).with_extension(ext.as_str()))
            .collect()
    }
}

/// The built-in category table, in sync order.
pub fn default_categories() -> Vec<AssetCategory> {
    let assets = Path::new(ANDROID_ASSETS_DIR);
    vec![
        AssetCategory::new(SHADERS, "Assets/Shaders", assets.join("Shaders"), &[".glsl"]),
        AssetCategory::new(
            "fonts",
            "Assets/Fonts",
            assets.join("Assets/Fonts"),
            &[".bft"],
        ),
        AssetCategory::new(
            "audio",
            "Assets/Audio",
            assets.join("Assets/Audio"),
            &[".mp3", ".wav", ".ogg"],
        ),
        AssetCategory::new(
            "meshes",
            "Assets/Meshes",
            assets.join("Assets/Meshes"),
            &[".abm", ".astc"],
        ),
        AssetCategory::new(
            "textures",
            "Assets/Textures",
            assets.join("Assets/Textures"),
            &[".png", ".jpg"],
        ),
    ]
}

/// Looks up a category by name.
pub fn find_category<'a>(categories: &'a [AssetCategory], name: &str) -> Option<&'a AssetCategory> {
    categories.iter().find(|c| c.name == name)
}

/// Copies one category into the Android tree.
///
/// A missing source folder is logged once and reported with `report: None`.
pub fn sync_category(
    project_root: &Path,
    category: &AssetCategory,
) -> Result<CategorySummary, SyncError> {
    let source = project_root.join(&category.source);
    if !source.exists() {
        tracing::warn!(
            category = %category.name,
            source = %source.display(),
            "source folder does not exist, skipping category"
        );
        return Ok(CategorySummary {
            name: category.name.clone(),
            report: None,
        });
    }

    tracing::info!(
        category = %category.name,
        destination = %project_root.join(&category.destination).display(),
        "moving files to Android path"
    );

    let mut report = CopyReport::default();
    for task in category.tasks(project_root) {
        if let Some(task_report) = task.run()?.report() {
            report.merge(task_report);
        }
    }

    tracing::info!(
        category = %category.name,
        copied = report.copied,
        replaced = report.replaced,
        "category synced"
    );

    Ok(CategorySummary {
        name: category.name.clone(),
        report: Some(report),
    })
}

/// Copies each category in order, stopping at the first failure.
pub fn sync_categories<'a, I>(
    project_root: &Path,
    categories: I,
) -> Result<Vec<CategorySummary>, SyncError>
where
    I: IntoIterator<Item = &'a AssetCategory>,
{
    categories
        .into_iter()
        .map(|category| sync_category(project_root, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, data: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, data).unwrap();
    }

    #[test]
    fn default_table_order_and_paths() {
        let categories = default_categories();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["shaders", "fonts", "audio", "meshes", "textures"]);

        let shaders = find_category(&categories, SHADERS).unwrap();
        assert_eq!(shaders.source, PathBuf::from("Assets/Shaders"));
        assert_eq!(
            shaders.destination,
            PathBuf::from("Android/app/src/main/assets/Shaders")
        );

        let audio = find_category(&categories, "audio").unwrap();
        assert_eq!(audio.extensions, [".mp3", ".wav", ".ogg"]);
        assert_eq!(
            audio.destination,
            PathBuf::from("Android/app/src/main/assets/Assets/Audio")
        );
    }

    #[test]
    fn find_unknown_category() {
        assert!(find_category(&default_categories(), "video").is_none());
    }

    #[test]
    fn tasks_one_per_extension() {
        let categories = default_categories();
        let meshes = find_category(&categories, "meshes").unwrap();
        let tasks = meshes.tasks(Path::new("/project"));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].extension_filter(), Some(".abm"));
        assert_eq!(tasks[1].extension_filter(), Some(".astc"));
        assert_eq!(tasks[0].source_root(), Path::new("/project/Assets/Meshes"));
        assert_eq!(
            tasks[0].dest_root(),
            Path::new("/project/Android/app/src/main/assets/Assets/Meshes")
        );
    }

    #[test]
    fn tasks_without_extensions_copy_everything() {
        let category = AssetCategory::new("misc", "Assets/Misc", "out/Misc", &[]);
        let tasks = category.tasks(Path::new("/p"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].extension_filter(), None);
    }

    #[test]
    fn sync_audio_merges_extensions() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "Assets/Audio/music/theme.ogg", b"ogg");
        write(root, "Assets/Audio/hit.wav", b"wav");
        write(root, "Assets/Audio/step.mp3", b"mp3");
        write(root, "Assets/Audio/notes.txt", b"txt");

        let categories = default_categories();
        let audio = find_category(&categories, "audio").unwrap();
        let summary = sync_category(root, audio).unwrap();

        assert_eq!(summary.name, "audio");
        assert_eq!(summary.report.unwrap().copied, 3);

        let dest = root.join("Android/app/src/main/assets/Assets/Audio");
        assert_eq!(fs::read(dest.join("music/theme.ogg")).unwrap(), b"ogg");
        assert!(dest.join("hit.wav").exists());
        assert!(dest.join("step.mp3").exists());
        assert!(!dest.join("notes.txt").exists());
    }

    #[test]
    fn sync_missing_category_source() {
        let tmp = TempDir::new().unwrap();
        let categories = default_categories();
        let fonts = find_category(&categories, "fonts").unwrap();

        let summary = sync_category(tmp.path(), fonts).unwrap();

        assert!(summary.report.is_none());
        assert!(!tmp.path().join("Android").exists());
    }

    #[test]
    fn sync_all_categories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "Assets/Shaders/pbr.glsl", b"glsl");
        write(root, "Assets/Textures/wall.png", b"png");
        write(root, "Assets/Textures/wall.psd", b"psd");

        let summaries = sync_categories(root, &default_categories()).unwrap();

        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[0].report.unwrap().copied, 1);
        assert!(summaries[1].report.is_none());
        assert_eq!(summaries[4].report.unwrap().copied, 1);

        let assets = root.join(ANDROID_ASSETS_DIR);
        assert!(assets.join("Shaders/pbr.glsl").exists());
        assert!(assets.join("Assets/Textures/wall.png").exists());
        assert!(!assets.join("Assets/Textures/wall.psd").exists());
    }
}
