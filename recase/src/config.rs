//! Configuration loaded from `recase.toml`.
//!
//! ```toml
//! [defaults]
//! case = "camel"
//! json = false
//! ```

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use recase_core::Case;
use serde::Deserialize;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "recase.toml";

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("omit --config to run with built-in defaults"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(recase::config_parse_error),
        help("valid cases are: camel, pascal, kebab, dot")
    )]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Root of `recase.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Defaults applied when a flag is not given on the command line.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Target case for `convert` and `check`.
    #[serde(default = "default_case")]
    pub case: Case,

    /// Parse inputs as JSON values.
    #[serde(default)]
    pub json: bool,
}

fn default_case() -> Case {
    Case::Kebab
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            case: default_case(),
            json: false,
        }
    }
}

impl Config {
    /// Parse config content, using `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `recase.toml` in `dir` is
    /// used if present, built-in defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("loading config from {}", path.display());
            return Self::open(path);
        }

        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!("loading config from {}", path.display());
            Self::open(&path)
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }
}
