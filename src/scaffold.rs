use console::style;
use log::info;
use std::path::{Path, PathBuf};

use crate::args::AppArgs;
use crate::config::{Config, TemplateDescriptor};
use crate::error::{ButlerError, CloneFailure, Result};
use crate::git;
use crate::interactive::{self, ProjectSlot, SlotKind};
use crate::rewrite::{rewrite_tree, RewriteReport};
use crate::user_parsed_input::{GitUserInput, UserParsedInput};

/// What the user asked for, once all three questions are answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub template_name: String,
    pub project_name: String,
    pub destination: PathBuf,
}

#[derive(Debug)]
pub struct Scaffolded {
    pub request: ProjectRequest,
    pub report: RewriteReport,
}

pub struct Scaffolder<'a> {
    config: &'a Config,
}

impl<'a> Scaffolder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Collect template, project name and destination.
    ///
    /// Answers already present in `input` are not asked for. In silent mode
    /// nothing is asked and missing answers fall back to the prompt default.
    pub fn select_project(
        &self,
        input: &UserParsedInput,
        prompt: &mut impl FnMut(&ProjectSlot) -> Result<String>,
    ) -> Result<ProjectRequest> {
        let silent = input.is_silent();
        let template_name = answer(
            input.template().map(str::to_owned),
            silent,
            &interactive::template_slot(self.config.templates.names()),
            prompt,
        )?;
        let project_name = answer(
            input.name().map(str::to_owned),
            silent,
            &interactive::name_slot(),
            prompt,
        )?;
        let destination = answer(
            input.destination().map(|p| p.display().to_string()),
            silent,
            &interactive::destination_slot(),
            prompt,
        )?;

        Ok(ProjectRequest {
            template_name,
            project_name,
            destination: PathBuf::from(destination),
        })
    }

    pub fn resolve_template(&self, name: &str) -> Result<&'a TemplateDescriptor> {
        self.config
            .templates
            .resolve(name)
            .ok_or_else(|| ButlerError::TemplateNotFound {
                name: name.to_owned(),
            })
    }

    pub fn run(
        &self,
        input: &UserParsedInput,
        prompt: &mut impl FnMut(&ProjectSlot) -> Result<String>,
    ) -> Result<Scaffolded> {
        let request = self.select_project(input, prompt)?;
        let template = self.resolve_template(&request.template_name)?;

        info!(
            "🔧 {}",
            style(format!("Template: {} ({}) ...", template.name, template.url))
                .bold()
                .yellow()
        );
        info!(
            "🔧 {}",
            style(format!("Destination: {} ...", request.destination.display()))
                .bold()
                .yellow()
        );
        fetch_template(&template.source_url(), &request.destination, input.git())?;

        info!("🔧 {}", style("Generating template ...").bold().yellow());
        let report = rewrite_tree(&request.destination, &request.project_name)?;
        info!(
            "🔧 {}",
            style(format!(
                "{} files rendered, {} recovered",
                report.rewritten(),
                report.reverted()
            ))
            .bold()
            .yellow()
        );

        Ok(Scaffolded { request, report })
    }
}

fn answer(
    given: Option<String>,
    silent: bool,
    slot: &ProjectSlot,
    prompt: &mut impl FnMut(&ProjectSlot) -> Result<String>,
) -> Result<String> {
    let value = match given {
        Some(value) => value,
        None if silent => match &slot.kind {
            SlotKind::Text {
                default: Some(default),
            } => default.clone(),
            _ => String::new(),
        },
        None => prompt(slot)?,
    };
    if value.trim().is_empty() {
        return Err(ButlerError::Validation {
            field: slot.var_name,
        });
    }
    Ok(value)
}

/// Clone `source_url` into `destination`.
pub fn fetch_template(source_url: &str, destination: &Path, git: &GitUserInput) -> Result<()> {
    let clone_error = |source: CloneFailure| ButlerError::Clone {
        url: source_url.to_owned(),
        source,
    };
    git::clone_template(source_url, destination, git).map_err(clone_error)?;
    if git.remove_history {
        git::remove_history(destination).map_err(|e| clone_error(e.into()))?;
    }
    Ok(())
}

/// To scaffold a project: prompt, clone, then render the cloned tree
pub fn generate(args: AppArgs) -> anyhow::Result<PathBuf> {
    let user_parsed_input = UserParsedInput::try_from_args(&args);
    let config = Config::locate(user_parsed_input.config())?;
    config.check_version()?;

    let scaffolder = Scaffolder::new(&config);
    let scaffolded = scaffolder.run(
        &user_parsed_input,
        &mut interactive::prompt_and_check_variable,
    )?;
    let destination = scaffolded.request.destination;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(destination.display()).underlined()
    );

    Ok(destination)
}
