//! Layered configuration for seoscore.
//!
//! Settings are merged from these sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file `config.<ext>` in the platform config directory
//!    (`~/.config/seoscore/` on Linux)
//! 3. the nearest project directory holding `.seoscore.<ext>` or
//!    `seoscore.<ext>`, found by walking up from the working directory and
//!    stopping at a `.git` boundary
//! 4. files passed with `--config`
//! 5. `SEOSCORE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Every matching file in the
//! winning project directory is merged, dotfiles first.
//!
//! Score thresholds outside 0-100 are rejected at load time.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use seoscore_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load().unwrap();
//! println!("{:?} from {:?}", config.min_score, sources.primary_file());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::html::ContentFormat;
use crate::seo::MAX_SCORE;

/// Effective settings after every source has been merged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Level written to the JSON-lines log file.
    pub log_level: LogLevel,
    /// Where log files go; the platform data directory when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Gate for `score` when `--min-score` is absent.
    pub min_score: Option<u8>,
    /// Gate for `readability` when `--min-score` is absent.
    pub min_readability: Option<u8>,
    /// Interpretation of page `content` when `--format` is absent.
    pub content_format: Option<ContentFormat>,
    /// Largest accepted input, in bytes. Defaults to
    /// [`DEFAULT_MAX_INPUT_BYTES`](crate::DEFAULT_MAX_INPUT_BYTES).
    pub max_input_bytes: Option<usize>,
    /// Skip the size check altogether, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
}

impl Config {
    /// Effective input limit in bytes, or `None` when limits are disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        for (key, value) in [
            ("min_score", self.min_score),
            ("min_readability", self.min_readability),
        ] {
            if let Some(value) = value
                && value > MAX_SCORE
            {
                return Err(ConfigError::OutOfRange {
                    key,
                    value,
                    max: MAX_SCORE,
                });
            }
        }
        Ok(())
    }
}

/// Level for the file log layer.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-check detail.
    Debug,
    /// One event per command (default).
    #[default]
    Info,
    /// Problems that did not stop the command.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Directive accepted by `EnvFilter`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Files that contributed to a loaded [`Config`], for `seoscore info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Files from the nearest project directory, dotfiles first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The per-user file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed with `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: last `--config`, else the project file,
    /// else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

// Merge order within one directory: later entries override earlier ones.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];
const APP_NAME: &str = "seoscore";
const ENV_PREFIX: &str = "SEOSCORE_";
const BOUNDARY_MARKER: &str = ".git";

/// Collects config sources and merges them with figment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    stop_at_boundary: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Loader that reads the user file and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            stop_at_boundary: true,
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Toggle the per-user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Keep walking past `.git` directories up to the filesystem root.
    pub const fn without_boundary_marker(mut self) -> Self {
        self.stop_at_boundary = false;
        self
    }

    /// Layer `path` above discovered files. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and validate the result.
    ///
    /// Fails when a file does not parse, a value has the wrong type, or a
    /// score threshold exceeds 100.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // SEOSCORE_MIN_SCORE=70, SEOSCORE_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            min_score = ?config.min_score,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Every config file in the nearest directory that has one.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| format!("{stem}.{ext}"))
                })
                .map(|name| dir.join(name))
                .filter(|path| path.is_file())
                .collect();

            if !found.is_empty() {
                return found;
            }

            // A config beside `.git` still counts.
            if self.stop_at_boundary
                && dir != start
                && dir.join(BOUNDARY_MARKER).exists()
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Unknown extensions are read as TOML.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Platform config directory for seoscore, e.g. `~/.config/seoscore`.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    project_dirs().and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok())
}

/// Platform data directory; the CLI keeps its logs in `logs/` below it.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    project_dirs().and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.data_dir().to_path_buf()).ok())
}
