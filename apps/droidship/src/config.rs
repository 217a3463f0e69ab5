//! Project configuration.
//!
//! Read from `<project-root>/droidship.toml` when present. Every field has a
//! default, so a partial file (or no file at all) is valid. Relative paths
//! resolve against the project root.

use std::path::{Path, PathBuf};

use anyhow::Context;
use droidship_asset_sync::{AssetCategory, default_categories};
use serde::{Deserialize, Serialize};

/// Configuration file name looked up in the project root.
pub const CONFIG_FILE: &str = "droidship.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Android project directory (where the gradle wrapper lives).
    #[serde(default = "default_android_dir")]
    pub android_dir: PathBuf,

    /// APK installed by `run`.
    #[serde(default = "default_apk_path")]
    pub apk_path: PathBuf,

    /// Command executed in `android_dir` by `build`.
    #[serde(default = "default_gradle_command")]
    pub gradle_command: String,

    /// Device bridge executable.
    #[serde(default = "default_adb")]
    pub adb: String,

    /// Application package launched after install.
    #[serde(default = "default_package")]
    pub package: String,

    /// Activity launched after install, relative to `package`.
    #[serde(default = "default_activity")]
    pub activity: String,

    /// Asset categories, in sync order.
    #[serde(default = "default_categories")]
    pub categories: Vec<AssetCategory>,
}

fn default_android_dir() -> PathBuf {
    PathBuf::from("Android")
}

fn default_apk_path() -> PathBuf {
    PathBuf::from("Android/app/build/outputs/apk/debug/app-debug.apk")
}

fn default_gradle_command() -> String {
    if cfg!(windows) {
        "gradlew assembleDebug".into()
    } else {
        "./gradlew assembleDebug".into()
    }
}

fn default_adb() -> String {
    "adb".into()
}

fn default_package() -> String {
    "com.anilgames.game".into()
}

fn default_activity() -> String {
    ".MainActivity".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            android_dir: default_android_dir(),
            apk_path: default_apk_path(),
            gradle_command: default_gradle_command(),
            adb: default_adb(),
            package: default_package(),
            activity: default_activity(),
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Loads the configuration for `project_root`.
    ///
    /// An explicit path must exist and is taken as given, so a relative one
    /// resolves against the current directory. Without one, `droidship.toml`
    /// in the project root is used if present, otherwise the defaults.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => {
                anyhow::ensure!(path.is_file(), "config file not found: {}", path.display());
                path.to_path_buf()
            }
            None => {
                let path = project_root.join(CONFIG_FILE);
                if !path.is_file() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn android_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.android_dir)
    }

    pub fn apk_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.apk_path)
    }

    /// Fully qualified component name for `am start -n`.
    pub fn component(&self) -> String {
        format!("{}/{}", self.package, self.activity)
    }
}
