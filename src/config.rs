//! Configuration for a retrofit run
//!
//! A run needs two things: the directory holding the Flutter game screens and
//! the ordered list of screen files to rewrite, grouped by school subject.
//! `RetrofitConfig::default()` carries the built-in list of 22 games; a TOML
//! file can replace both the list and the directory.
//!
//! # File format
//!
//! ```toml
//! base_dir = "/home/me/aprende_kids/lib/presentation/screens/games"
//!
//! [[groups]]
//! subject = "math"
//! files = ["resta_magica_game.dart", "division_detective_game.dart"]
//! ```
//!
//! A relative `base_dir` is resolved against the directory holding the
//! configuration file.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Game screens directory inside a Flutter project
pub const DEFAULT_BASE_DIR: &str = "lib/presentation/screens/games";

const MATH_GAMES: &[&str] = &[
    "resta_magica_game.dart",
    "multiplicacion_espacial_game.dart",
    "division_detective_game.dart",
    "geometria_constructora_game.dart",
    "numeros_perdidos_game.dart",
    "completa_patron_game.dart",
];

const LANGUAGE_GAMES: &[&str] = &[
    "detectives_ortografia_game.dart",
    "rima_magica_game.dart",
    "sinonimos_antonimos_game.dart",
    "aventura_comprension_game.dart",
    "historias_locas_game.dart",
    "inventor_palabras_game.dart",
];

const SCIENCE_GAMES: &[&str] = &[
    "exploradores_cuerpo_game.dart",
    "sistema_solar_game.dart",
    "cadena_alimenticia_game.dart",
    "estados_materia_game.dart",
    "planeta_tierra_game.dart",
    "ecosistemas_mundo_game.dart",
];

const CREATIVITY_GAMES: &[&str] = &[
    "disenador_monstruos_game.dart",
    "mezcla_colores_game.dart",
    "artista_emojis_game.dart",
    "asociacion_creativa_game.dart",
];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No game files configured")]
    NoFiles,

    #[error("Base directory is empty")]
    EmptyBaseDir,

    #[error("Invalid game file name '{0}': must be a plain file name inside the base directory")]
    InvalidFileName(String),

    #[error("Game file '{0}' is listed more than once")]
    DuplicateFile(String),
}

/// Files for one school subject
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameGroup {
    pub subject: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl GameGroup {
    fn builtin(subject: &str, files: &[&str]) -> Self {
        Self {
            subject: subject.to_string(),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetrofitConfig {
    pub base_dir: PathBuf,
    #[serde(default)]
    pub groups: Vec<GameGroup>,
}

impl Default for RetrofitConfig {
    /// Built-in game list, rooted at the games directory of the Flutter
    /// project in the current working directory.
    fn default() -> Self {
        let base_dir = env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_BASE_DIR))
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BASE_DIR));

        Self {
            base_dir,
            groups: vec![
                GameGroup::builtin("math", MATH_GAMES),
                GameGroup::builtin("language", LANGUAGE_GAMES),
                GameGroup::builtin("science", SCIENCE_GAMES),
                GameGroup::builtin("creativity", CREATIVITY_GAMES),
            ],
        }
    }
}

impl RetrofitConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&text)?;
        if config.base_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.base_dir = parent.join(&config.base_dir);
            }
        }
        Ok(config)
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// All configured file names, in group order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.files.iter().map(String::as_str))
    }

    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|group| group.files.len()).sum()
    }

    /// Validates the configuration
    ///
    /// Checks that:
    /// - The base directory is set
    /// - At least one file is listed
    /// - Every entry is a bare file name (no separators, no `..`)
    /// - No file is listed twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyBaseDir);
        }

        if self.file_count() == 0 {
            return Err(ConfigError::NoFiles);
        }

        let mut seen = HashSet::new();
        for file in self.files() {
            if !is_plain_file_name(file) {
                return Err(ConfigError::InvalidFileName(file.to_string()));
            }
            if !seen.insert(file) {
                return Err(ConfigError::DuplicateFile(file.to_string()));
            }
        }

        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_lists_all_games() {
        let config = RetrofitConfig::default();
        assert_eq!(config.file_count(), 22);
        assert_eq!(config.groups.len(), 4);
        assert_eq!(config.files().next(), Some("resta_magica_game.dart"));
        assert_eq!(config.files().last(), Some("asociacion_creativa_game.dart"));
        assert!(config.base_dir.ends_with(DEFAULT_BASE_DIR));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = RetrofitConfig::from_toml_str(
            r#"
base_dir = "/srv/app/lib/presentation/screens/games"

[[groups]]
subject = "math"
files = ["resta_magica_game.dart", "numeros_perdidos_game.dart"]

[[groups]]
subject = "art"
files = ["mezcla_colores_game.dart"]
"#,
        )
        .unwrap();

        assert_eq!(
            config.base_dir,
            PathBuf::from("/srv/app/lib/presentation/screens/games")
        );
        let files: Vec<&str> = config.files().collect();
        assert_eq!(
            files,
            vec![
                "resta_magica_game.dart",
                "numeros_perdidos_game.dart",
                "mezcla_colores_game.dart"
            ]
        );
    }

    #[test]
    fn test_parse_error() {
        let err = RetrofitConfig::from_toml_str("groups = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_resolves_relative_base_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("retrofit.toml");
        fs::write(
            &path,
            "base_dir = \"games\"\n[[groups]]\nsubject = \"math\"\nfiles = [\"a.dart\"]\n",
        )
        .unwrap();

        let config = RetrofitConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir, temp.path().join("games"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = RetrofitConfig::from_file(Path::new("/nonexistent/retrofit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_validate_no_files() {
        let config = RetrofitConfig {
            base_dir: PathBuf::from("/games"),
            groups: vec![GameGroup::builtin("math", &[])],
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoFiles)));
    }

    #[test]
    fn test_validate_empty_base_dir() {
        let config = RetrofitConfig::default().with_base_dir(PathBuf::new());
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBaseDir)));
    }

    #[test]
    fn test_validate_rejects_paths() {
        for name in ["../escape.dart", "sub/game.dart", "sub\\game.dart", "..", "/abs.dart", ""] {
            let config = RetrofitConfig {
                base_dir: PathBuf::from("/games"),
                groups: vec![GameGroup::builtin("math", &[name])],
            };
            match config.validate() {
                Err(ConfigError::InvalidFileName(bad)) => assert_eq!(bad, name),
                other => panic!("Expected InvalidFileName for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_validate_duplicates() {
        let config = RetrofitConfig {
            base_dir: PathBuf::from("/games"),
            groups: vec![
                GameGroup::builtin("math", &["a.dart"]),
                GameGroup::builtin("art", &["a.dart"]),
            ],
        };
        match config.validate() {
            Err(ConfigError::DuplicateFile(name)) => assert_eq!(name, "a.dart"),
            other => panic!("Expected DuplicateFile, got {:?}", other),
        }
    }
}
