use indexmap::IndexMap;
use log::debug;
use semver::VersionReq;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::user_parsed_input::abbreviated_git_url_to_full_remote;

pub const CONFIG_FILE_NAME: &str = "butler.toml";
pub const HOME_CONFIG_FILE_NAME: &str = ".butler.toml";

/// Raw shape of `butler.toml`.
#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
struct ConfigFile {
    butler: Option<ButlerSection>,
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
struct ButlerSection {
    version: Option<VersionReq>,
}

#[derive(Deserialize, Debug, PartialEq, Clone)]
struct TemplateEntry {
    name: String,
    url: String,
}

/// A template the user can pick.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TemplateDescriptor {
    pub name: String,
    pub url: String,
}

impl TemplateDescriptor {
    /// Remote to clone from, with `gh:`-style abbreviations expanded.
    pub fn source_url(&self) -> String {
        abbreviated_git_url_to_full_remote(&self.url).unwrap_or_else(|| self.url.clone())
    }
}

/// Configured templates, in file order, keyed by their unique name.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct TemplateSet(IndexMap<String, TemplateDescriptor>);

impl TemplateSet {
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn resolve(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.0.get(name)
    }
}

impl TryFrom<Vec<TemplateDescriptor>> for TemplateSet {
    type Error = ConfigError;

    fn try_from(templates: Vec<TemplateDescriptor>) -> Result<Self, Self::Error> {
        if templates.is_empty() {
            return Err(ConfigError::NoTemplates);
        }
        let mut set = IndexMap::with_capacity(templates.len());
        for (index, template) in templates.into_iter().enumerate() {
            if template.name.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    index,
                    field: "name",
                });
            }
            if template.url.trim().is_empty() {
                return Err(ConfigError::EmptyField { index, field: "url" });
            }
            if set.contains_key(&template.name) {
                return Err(ConfigError::DuplicateTemplate {
                    name: template.name,
                });
            }
            set.insert(template.name.clone(), template);
        }
        Ok(Self(set))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub version: Option<VersionReq>,
    pub templates: TemplateSet,
}

impl Config {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &contents)
    }

    fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let raw: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let templates = raw
            .templates
            .into_iter()
            .map(|t| TemplateDescriptor {
                name: t.name,
                url: t.url,
            })
            .collect::<Vec<_>>();
        Ok(Self {
            version: raw.butler.and_then(|b| b.version),
            templates: TemplateSet::try_from(templates)?,
        })
    }

    /// Load the explicit file when given, otherwise search for one.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => find_config_file()?,
        };
        debug!("Using configuration `{}`", path.display());
        Self::from_path(path)
    }

    pub fn check_version(&self) -> Result<(), ConfigError> {
        let Some(required) = &self.version else {
            return Ok(());
        };
        let version = semver::Version::parse(env!("CARGO_PKG_VERSION"))
            .expect("crate version is valid semver");
        if !required.matches(&version) {
            return Err(ConfigError::Version {
                required: required.clone(),
                version,
            });
        }
        Ok(())
    }
}

/// Walk up from the current directory looking for `butler.toml`, then fall
/// back to `~/.butler.toml`.
pub fn find_config_file() -> Result<PathBuf, ConfigError> {
    let cwd = env::current_dir().map_err(|source| ConfigError::Read {
        path: PathBuf::from("."),
        source,
    })?;
    if let Some(found) = search_upwards(&cwd) {
        return Ok(found);
    }
    if let Some(home) = home::home_dir() {
        let home_config = home.join(HOME_CONFIG_FILE_NAME);
        if home_config.is_file() {
            return Ok(home_config);
        }
    }
    Err(ConfigError::NotFound { searched: cwd })
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
