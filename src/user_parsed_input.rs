//! Input from user but after parse

use std::path::{Path, PathBuf};

use crate::args::AppArgs;

// Contains parsed information from user.
#[derive(Debug, Default)]
pub struct UserParsedInput {
    config: Option<PathBuf>,

    // answers given up front, each one replaces a prompt
    template: Option<String>,
    name: Option<String>,
    destination: Option<PathBuf>,

    git: GitUserInput,

    silent: bool,
}

impl UserParsedInput {
    pub fn try_from_args(args: &AppArgs) -> Self {
        Self {
            config: args.config.clone(),
            template: args.template.clone(),
            name: args.name.clone(),
            destination: args.destination.clone(),
            git: GitUserInput::new(
                args.branch.as_ref(),
                args.ssh_identity.clone(),
                args.gitconfig.clone(),
                args.remove_history,
            ),
            silent: args.silent,
        }
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub const fn git(&self) -> &GitUserInput {
        &self.git
    }

    pub const fn is_silent(&self) -> bool {
        self.silent
    }
}

/// favorite can be in form with abbreviation what means that input is git repository
/// if so, the 3rd character would be a semicolon
pub fn abbreviated_git_url_to_full_remote(git: impl AsRef<str>) -> Option<String> {
    let git = git.as_ref();
    if git.len() >= 3 {
        match git.get(..3)? {
            "gl:" => Some(format!("https://gitlab.com/{}.git", &git[3..])),
            "bb:" => Some(format!("https://bitbucket.org/{}.git", &git[3..])),
            "gh:" => Some(format!("https://github.com/{}.git", &git[3..])),
            "sr:" => Some(format!("https://git.sr.ht/~{}", &git[3..])),
            _ => None,
        }
    } else {
        None
    }
}

// How the template should be cloned
#[derive(Debug, Default, Clone)]
pub struct GitUserInput {
    branch: Option<String>,
    identity: Option<PathBuf>,
    gitconfig: Option<PathBuf>,
    pub remove_history: bool,
}

impl GitUserInput {
    pub fn new(
        branch: Option<&impl AsRef<str>>,
        identity: Option<PathBuf>,
        gitconfig: Option<PathBuf>,
        remove_history: bool,
    ) -> Self {
        Self {
            branch: branch.map(|s| s.as_ref().to_owned()),
            identity,
            gitconfig,
            remove_history,
        }
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn identity(&self) -> Option<&Path> {
        self.identity.as_deref()
    }

    pub fn gitconfig(&self) -> Option<&Path> {
        self.gitconfig.as_deref()
    }
}
