use std::path::PathBuf;

use clap::Parser;
use std::env;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const GIT_PARAMETERS: &str = "Git Parameters";
    pub const PROJECT_SELECTION: &str = "Project Selection";
}

#[derive(Clone, Debug, Default, Parser)]
#[command(
    name = "butler",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Configuration file listing the templates. Defaults to the first `butler.toml` found in the
    /// current directory or its parents, then `~/.butler.toml`
    #[arg(long, value_parser, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the configured template to use, instead of being asked for it
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_SELECTION)]
    pub template: Option<String>,

    /// Project name substituted into the template, instead of being asked for it
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_SELECTION)]
    pub name: Option<String>,

    /// Directory the template is cloned into, instead of being asked for it
    #[arg(long, short, value_parser, value_name = "PATH", help_heading = heading::PROJECT_SELECTION)]
    pub destination: Option<PathBuf>,

    /// Never prompt. Template and name must be given, the destination falls back to `./src`
    #[arg(long, short, action, help_heading = heading::PROJECT_SELECTION)]
    pub silent: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,

    /// Branch to check out after cloning the template
    #[arg(short, long, help_heading = heading::GIT_PARAMETERS)]
    pub branch: Option<String>,

    /// Use a different ssh identity
    #[arg(short = 'i', long = "identity", value_parser, value_name = "IDENTITY", help_heading = heading::GIT_PARAMETERS)]
    pub ssh_identity: Option<PathBuf>,

    /// Use a different gitconfig file, if omitted the usual $HOME/.gitconfig will be used
    #[arg(long = "gitconfig", value_parser, value_name = "GITCONFIG_FILE", help_heading = heading::GIT_PARAMETERS)]
    pub gitconfig: Option<PathBuf>,

    /// Delete the `.git` directory of the cloned template
    #[arg(long, action, help_heading = heading::GIT_PARAMETERS)]
    pub remove_history: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
