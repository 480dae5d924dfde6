use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::ops::Index;

use crate::error::{ButlerError, Result};

pub const TEMPLATE_PROMPT: &str = "What system are you using?";
pub const NAME_PROMPT: &str = "What is the project name?";
pub const DESTINATION_PROMPT: &str = "What is the destination?";
pub const DEFAULT_DESTINATION: &str = "./src";

/// One question asked while selecting the project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSlot {
    pub var_name: &'static str,
    pub prompt: &'static str,
    pub kind: SlotKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotKind {
    Select { choices: Vec<String> },
    Text { default: Option<String> },
}

pub fn template_slot(choices: Vec<String>) -> ProjectSlot {
    ProjectSlot {
        var_name: "Template",
        prompt: TEMPLATE_PROMPT,
        kind: SlotKind::Select { choices },
    }
}

pub fn name_slot() -> ProjectSlot {
    ProjectSlot {
        var_name: "Name",
        prompt: NAME_PROMPT,
        kind: SlotKind::Text { default: None },
    }
}

pub fn destination_slot() -> ProjectSlot {
    ProjectSlot {
        var_name: "Path",
        prompt: DESTINATION_PROMPT,
        kind: SlotKind::Text {
            default: Some(DEFAULT_DESTINATION.to_string()),
        },
    }
}

/// Ask the question on the terminal.
///
/// Empty answers are returned as-is; checking them is up to the caller.
pub fn prompt_and_check_variable(variable: &ProjectSlot) -> Result<String> {
    match &variable.kind {
        SlotKind::Select { choices } => handle_choice_input(choices, variable.prompt),
        SlotKind::Text { default } => user_question(variable.prompt, default),
    }
}

pub fn user_question(prompt: &str, default: &Option<String>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut i = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(s) = default {
        i = i.default(s.to_owned());
    }
    Ok(i.interact_text()?)
}

fn handle_choice_input(choices: &[String], prompt: &str) -> Result<String> {
    if choices.is_empty() {
        return Err(ButlerError::Validation { field: "Template" });
    }
    let chosen = Select::with_theme(&ColorfulTheme::default())
        .items(choices)
        .with_prompt(prompt)
        .default(0)
        .interact()?;

    Ok(choices.index(chosen).to_string())
}
