use auth_git2::GitAuthenticator;
use console::style;
use git2::{FetchOptions, ProxyOptions, RemoteCallbacks};
use log::{debug, info};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::CloneFailure;
use crate::git::gitconfig::{open_gitconfig, resolve_instead_url};
use crate::progressbar;
use crate::user_parsed_input::GitUserInput;

/// deals with `~/` and `$HOME/` prefixes
pub fn canonicalize_path(p: impl AsRef<Path>) -> io::Result<PathBuf> {
    let p = p.as_ref();
    let p = if let Ok(rest) = p.strip_prefix("~/") {
        home()?.join(rest)
    } else if let Ok(rest) = p.strip_prefix("$HOME/") {
        home()?.join(rest)
    } else {
        p.to_path_buf()
    };

    p.canonicalize()
}

/// home path wrapper
pub fn home() -> io::Result<PathBuf> {
    home::home_dir().ok_or_else(|| io::Error::new(ErrorKind::NotFound, "$HOME was not set"))
}

/// A clone may only land in a missing or empty directory.
fn ensure_empty_destination(destination: &Path) -> Result<(), CloneFailure> {
    match fs::read_dir(destination) {
        Ok(mut entries) => match entries.next() {
            None => Ok(()),
            Some(_) => Err(CloneFailure::DestinationNotEmpty(
                destination.to_path_buf(),
            )),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CloneFailure::Io(e)),
    }
}

/// Last complete status of a remote sideband packet.
///
/// Remotes redraw counters with `\r`, so `Counting objects: 50% (1/2)\rCounting
/// objects: 100% (2/2), done.\n` reports only the final state.
fn sideband_line(data: &[u8]) -> Option<String> {
    String::from_utf8_lossy(data)
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .last()
        .map(|segment| format!("remote: {segment}"))
}

/// clone the whole template repository into `destination` using libgit2
pub fn clone_template(
    git_url: &str,
    destination: &Path,
    git: &GitUserInput,
) -> Result<(), CloneFailure> {
    ensure_empty_destination(destination)?;

    #[cfg(windows)]
    let mut authenticator = GitAuthenticator::default().try_ssh_agent(true);
    #[cfg(not(windows))]
    let mut authenticator = GitAuthenticator::default()
        .try_ssh_agent(true)
        .add_default_ssh_keys()
        .prompt_ssh_key_password(true)
        .try_password_prompt(3);

    if let Some(identity_path) = git.identity() {
        let identity_path = canonicalize_path(identity_path)
            .map_err(|_| CloneFailure::MissingIdentity(identity_path.to_path_buf()))?;
        info!(
            "{} `{}` {}",
            style("Using private key:").bold(),
            style(format_args!("{}", identity_path.display()))
                .bold()
                .yellow(),
            style("for git-ssh checkout").bold()
        );
        authenticator = authenticator
            .add_ssh_key_from_file(identity_path, None)
            .try_password_prompt(3)
            .prompt_ssh_key_password(true);
    }

    let gitconfig = open_gitconfig(git.gitconfig())?;
    let url = match resolve_instead_url(git_url, &gitconfig)? {
        Some(url) => {
            info!("🔧 gitconfig 'insteadOf' lead to this url: {}", url);
            url
        }
        None => git_url.to_owned(),
    };

    let pb = progressbar::new();
    pb.set_prefix("Cloning");

    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(authenticator.credentials(&gitconfig));
    callbacks.transfer_progress(|stats| {
        pb.set_length(stats.total_objects() as u64);
        pb.set_position(stats.received_objects() as u64);
        true
    });
    callbacks.sideband_progress(|data| {
        if let Some(line) = sideband_line(data) {
            if pb.is_hidden() {
                info!("{line}");
            } else {
                pb.println(&line);
            }
        }
        true
    });

    let mut fetch_options = FetchOptions::new();
    if url.starts_with("http://") || url.starts_with("https://") {
        let mut proxy_options = ProxyOptions::new();
        proxy_options.auto();
        fetch_options.proxy_options(proxy_options);
    }
    fetch_options.remote_callbacks(callbacks);

    let mut builder = git2::build::RepoBuilder::new();
    if let Some(branch) = git.branch() {
        builder.branch(branch);
    }
    builder.fetch_options(fetch_options);

    let cloned = builder.clone(&url, destination);
    pb.finish_and_clear();
    cloned?;
    debug!("Cloned `{}` into `{}`", url, destination.display());

    Ok(())
}

/// remove context of repository by removing `.git` from filesystem
pub fn remove_history(project_dir: &Path) -> io::Result<()> {
    let git_dir = project_dir.join(".git");
    if git_dir.is_dir() {
        fs::remove_dir_all(&git_dir)?;
    }
    Ok(())
}
