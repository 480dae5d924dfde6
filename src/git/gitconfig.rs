use git2::Config;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::error::CloneFailure;
use crate::git::utils::home;

pub fn find_gitconfig() -> Option<PathBuf> {
    let gitconfig = home().ok()?.join(".gitconfig");
    gitconfig.exists().then_some(gitconfig)
}

/// Open the git config used for credentials and url rewriting.
///
/// An explicit file must exist; otherwise `~/.gitconfig` is used when present,
/// then libgit2's default lookup, then an empty config.
pub fn open_gitconfig(explicit: Option<&Path>) -> Result<Config, CloneFailure> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CloneFailure::MissingGitConfig(path.to_path_buf()));
        }
        return Ok(Config::open(path)?);
    }
    if let Some(path) = find_gitconfig() {
        return Ok(Config::open(&path)?);
    }
    Ok(Config::open_default().or_else(|_| Config::new())?)
}

/// trades urls, to replace a given repo remote url with the right on based
/// on the `[url]` section in the `~/.gitconfig`
///
/// When several `insteadOf` prefixes match, the longest one wins.
pub fn resolve_instead_url(
    remote: impl AsRef<str>,
    gitconfig: &Config,
) -> Result<Option<String>, git2::Error> {
    let remote = remote.as_ref();
    // Match git config file item
    // [url "https://github.com/"]
    // insteadOf = gh:
    let re = Regex::new(r"^url\.(.+)\.insteadof$").expect("valid insteadOf pattern");

    let mut best: Option<(String, String)> = None;
    let mut entries = gitconfig.entries(None)?;
    while let Some(entry) = entries.next() {
        let entry = entry?;
        let (Some(name), Some(instead_of)) = (entry.name(), entry.value()) else {
            continue;
        };
        let Some(base) = re.captures(name).and_then(|cap| cap.get(1)) else {
            continue;
        };
        if !remote.starts_with(instead_of) {
            continue;
        }
        let longer = best
            .as_ref()
            .map_or(true, |(old, _)| instead_of.len() > old.len());
        if longer {
            best = Some((instead_of.to_owned(), base.as_str().to_owned()));
        }
    }

    Ok(best.map(|(old, new)| format!("{new}{}", &remote[old.len()..])))
}
