//! Document skeleton parsing.
//!
//! The skeleton is a Markdown asset with `{{ name }}` placeholders. It is
//! parsed once per process and rendered by filling every placeholder with
//! generated content.

use anyhow::{Context, Result};
use std::sync::LazyLock;
use thiserror::Error;

const SKELETON: &str = include_str!("../assets/customization.md");

static TEMPLATE: LazyLock<Result<Template<'static>, TemplateError>> =
    LazyLock::new(|| Template::parse(SKELETON));

/// Placeholder in the document skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// One section per form, in input order.
    Forms,
    /// Table body of the brokerpak configuration form.
    BrokerpakProperties,
}

impl Slot {
    const ALL: [Slot; 2] = [Slot::Forms, Slot::BrokerpakProperties];

    /// Returns placeholder name as written in the skeleton.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Forms => "forms",
            Slot::BrokerpakProperties => "brokerpak_properties",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

/// Errors raised while parsing a skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("Unknown placeholder `{name}` at byte {offset}")]
    UnknownSlot { name: String, offset: usize },

    #[error("Placeholder `{0}` appears more than once")]
    DuplicateSlot(&'static str),

    #[error("Placeholder `{0}` is missing")]
    MissingSlot(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Slot(Slot),
}

/// Parsed skeleton: literal text interleaved with placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parses skeleton source.
    ///
    /// Every known placeholder must appear exactly once. Whitespace inside
    /// the braces is ignored, so `{{forms}}` and `{{ forms }}` are equal.
    ///
    /// # Errors
    ///
    /// Returns error if a placeholder is unterminated, unknown, duplicated
    /// or missing.
    pub fn parse(source: &'a str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut seen: Vec<Slot> = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(&rest[..start]));
            }

            let inner = &rest[start + 2..];
            let end = inner.find("}}").ok_or(TemplateError::Unterminated {
                offset: offset + start,
            })?;

            let name = inner[..end].trim();
            let slot = Slot::from_name(name).ok_or_else(|| TemplateError::UnknownSlot {
                name: name.to_string(),
                offset: offset + start,
            })?;

            if seen.contains(&slot) {
                return Err(TemplateError::DuplicateSlot(slot.name()));
            }
            seen.push(slot);
            segments.push(Segment::Slot(slot));

            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }

        if let Some(missing) = Slot::ALL.into_iter().find(|slot| !seen.contains(slot)) {
            return Err(TemplateError::MissingSlot(missing.name()));
        }

        Ok(Self { segments })
    }

    /// Renders skeleton, calling `fill` once per placeholder in document order.
    pub fn render<F>(&self, mut fill: F) -> String
    where
        F: FnMut(Slot, &mut String),
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(slot) => fill(*slot, &mut out),
            }
        }
        out
    }
}

/// Returns the bundled customization skeleton, parsed on first use.
///
/// # Errors
///
/// Returns error if the bundled asset is malformed.
pub fn skeleton() -> Result<&'static Template<'static>> {
    TEMPLATE
        .as_ref()
        .map_err(Clone::clone)
        .context("Bundled customization skeleton is malformed")
}
