use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};
use thiserror::Error;

use crate::template_filters::*;

pub const START_DELIM: &str = "[[";
pub const END_DELIM: &str = "]]";
/// The single variable a template can reference, as `[[ .ProjectName ]]`.
pub const PROJECT_NAME_VAR: &str = "ProjectName";

// an action is a single output expression, never raw liquid markup
const LIQUID_MARKUP: [&str; 4] = ["{{", "}}", "{%", "%}"];

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("line {line}: unclosed action")]
    UnclosedAction { line: usize },
    #[error("line {line}: missing value for action")]
    EmptyAction { line: usize },
    #[error("line {line}: unexpected liquid markup inside action")]
    NestedMarkup { line: usize },
    #[error("line {line}: {source}")]
    Expression {
        line: usize,
        source: liquid_core::Error,
    },
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .filter(KebabCaseFilterParser)
        .filter(LowerCamelCaseFilterParser)
        .filter(PascalCaseFilterParser)
        .filter(ShoutyKebabCaseFilterParser)
        .filter(ShoutySnakeCaseFilterParser)
        .filter(SnakeCaseFilterParser)
        .filter(TitleCaseFilterParser)
        .filter(UpperCamelCaseFilterParser)
        .build()
        .expect("can't fail due to no partials support")
}

/// create liquid object for the template, holding the project name only
pub fn create_liquid_object(project_name: &str) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert(
        PROJECT_NAME_VAR.into(),
        Value::Scalar(project_name.to_owned().into()),
    );
    liquid_object
}

/// Renders `[[ ... ]]` actions; everything outside them is copied untouched.
///
/// The text between the delimiters is a liquid expression, so
/// `[[ .ProjectName | snake_case ]]` works the same as `{{ ProjectName | snake_case }}`
/// would in a plain liquid file. `[[- ` and ` -]]` trim the adjacent whitespace and
/// `[[/* ... */]]` is a comment.
pub struct Renderer {
    parser: Parser,
    globals: Object,
}

impl Renderer {
    pub fn new(project_name: &str) -> Self {
        Self {
            parser: create_liquid_engine(),
            globals: create_liquid_object(project_name),
        }
    }

    pub fn render(&self, content: &str) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(content.len());
        let mut offset = 0;
        let mut trim_next_text = false;

        while let Some(found) = content[offset..].find(START_DELIM) {
            let start = offset + found;
            let line = line_of(content, start);
            let open_end = start + START_DELIM.len();
            let close = content[open_end..]
                .find(END_DELIM)
                .ok_or(TemplateError::UnclosedAction { line })?;
            let inner = &content[open_end..open_end + close];

            let trim_left = has_left_trim_marker(inner);
            let trim_right = has_right_trim_marker(inner);

            let mut text = &content[offset..start];
            if trim_next_text {
                text = text.trim_start();
            }
            if trim_left {
                text = text.trim_end();
            }
            rendered.push_str(text);

            let mut expr = inner;
            if trim_left {
                expr = &expr[1..];
            }
            if trim_right {
                expr = &expr[..expr.len() - 1];
            }
            rendered.push_str(&self.evaluate(expr.trim(), line)?);

            trim_next_text = trim_right;
            offset = open_end + close + END_DELIM.len();
        }

        let mut tail = &content[offset..];
        if trim_next_text {
            tail = tail.trim_start();
        }
        rendered.push_str(tail);
        Ok(rendered)
    }

    fn evaluate(&self, expr: &str, line: usize) -> Result<String, TemplateError> {
        if expr.starts_with("/*") && expr.ends_with("*/") && expr.len() >= 4 {
            return Ok(String::new());
        }
        let expr = expr.strip_prefix('.').unwrap_or(expr).trim_start();
        if expr.is_empty() {
            return Err(TemplateError::EmptyAction { line });
        }
        if LIQUID_MARKUP.iter().any(|markup| expr.contains(markup)) {
            return Err(TemplateError::NestedMarkup { line });
        }
        self.parser
            .parse(&format!("{{{{ {expr} }}}}"))
            .and_then(|template| template.render(&self.globals))
            .map_err(|source| TemplateError::Expression { line, source })
    }
}

// `[[- x` trims, `[[-x` would be a negative number
fn has_left_trim_marker(inner: &str) -> bool {
    let mut chars = inner.chars();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_whitespace)
}

fn has_right_trim_marker(inner: &str) -> bool {
    let mut chars = inner.chars().rev();
    chars.next() == Some('-') && chars.next().is_some_and(char::is_whitespace)
}

fn line_of(content: &str, byte_offset: usize) -> usize {
    content[..byte_offset].matches('\n').count() + 1
}
