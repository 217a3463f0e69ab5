//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "droidship")]
#[command(version, about = "Move game assets into the Android project and drive gradle/adb")]
pub struct Cli {
    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,

    /// Project root containing `Assets/` and `Android/` (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Configuration file, relative to the current directory (defaults to `<project-root>/droidship.toml` if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Assemble the debug APK with gradle
    Build,
    /// Install the debug APK with adb and launch the main activity
    Run,
    /// Copy every asset category into the Android asset folder
    #[value(name = "move_assets")]
    MoveAssets,
    /// Copy only shaders into the Android asset folder
    #[value(name = "move_shaders")]
    MoveShaders,
}

impl Cli {
    /// Resolves the project root, falling back to the current directory.
    pub fn project_root(&self) -> std::io::Result<PathBuf> {
        match &self.project_root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_every_action() {
        let cases = [
            ("build", Action::Build),
            ("run", Action::Run),
            ("move_assets", Action::MoveAssets),
            ("move_shaders", Action::MoveShaders),
        ];
        for (arg, expected) in cases {
            let cli = Cli::try_parse_from(["droidship", arg]).unwrap();
            assert_eq!(cli.action, expected, "argument {arg}");
        }
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(Cli::try_parse_from(["droidship", "deploy"]).is_err());
        assert!(Cli::try_parse_from(["droidship", "move-assets"]).is_err());
        assert!(Cli::try_parse_from(["droidship"]).is_err());
    }

    #[test]
    fn explicit_project_root() {
        let cli = Cli::try_parse_from([
            "droidship",
            "move_shaders",
            "--project-root",
            "/work/game",
            "--config",
            "ci.toml",
        ])
        .unwrap();
        assert_eq!(cli.project_root().unwrap(), PathBuf::from("/work/game"));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    }

    #[test]
    fn project_root_defaults_to_cwd() {
        let cli = Cli::try_parse_from(["droidship", "build"]).unwrap();
        assert_eq!(cli.project_root().unwrap(), std::env::current_dir().unwrap());
    }
}
