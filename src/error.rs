use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::template::TemplateError;

pub type Result<T, E = ButlerError> = std::result::Result<T, E>;

/// Everything that ends a scaffolding run.
#[derive(Error, Debug)]
pub enum ButlerError {
    #[error("butler: invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("butler: a value for `{field}` is required")]
    Validation { field: &'static str },
    #[error("butler: template {name} could not be found")]
    TemplateNotFound { name: String },
    #[error("butler: cloning `{url}` failed: {source}")]
    Clone {
        url: String,
        #[source]
        source: CloneFailure,
    },
    #[error("butler: cannot walk `{}`: {source}", .path.display())]
    WalkSetup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("butler: prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no `butler.toml` found in `{}` or its parents, and no `~/.butler.toml`", .searched.display())]
    NotFound { searched: PathBuf },
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no templates are configured")]
    NoTemplates,
    #[error("template #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
    #[error("template `{name}` is configured more than once")]
    DuplicateTemplate { name: String },
    #[error("butler {version} does not satisfy the required version `{required}`")]
    Version {
        required: semver::VersionReq,
        version: semver::Version,
    },
}

#[derive(Error, Debug)]
pub enum CloneFailure {
    #[error("destination `{}` already exists and is not empty", .0.display())]
    DestinationNotEmpty(PathBuf),
    #[error("cannot find the git config file `{}`", .0.display())]
    MissingGitConfig(PathBuf),
    #[error("ssh identity `{}` does not exist", .0.display())]
    MissingIdentity(PathBuf),
    #[error(transparent)]
    Git(#[from] git2::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failure confined to a single file of the tree; the file keeps its original bytes.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("cannot read file: {0}")]
    Read(#[source] std::io::Error),
    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("cannot write file: {0}")]
    Write(#[source] std::io::Error),
}
