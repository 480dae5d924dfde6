//! Scaffold a new project from a template repository: pick a template, clone
//! it, then render the `[[ .ProjectName ]]` placeholders of its text files.

pub mod app_log;
pub mod args;
pub mod config;
pub mod error;
pub mod git;
pub mod interactive;
mod progressbar;
pub mod rewrite;
pub mod scaffold;
pub mod template;
mod template_filters;
pub mod user_parsed_input;

pub use args::AppArgs;
pub use error::ButlerError;
pub use scaffold::{generate, ProjectRequest, Scaffolder};
