//! Customization document rendering.
//!
//! Fills the bundled skeleton with one section per form and the brokerpak
//! property table, then normalizes whitespace. Rendering is a pure function
//! of its inputs, so repeated runs over the same forms produce identical
//! bytes.

use anyhow::{Context, Result};

use crate::components::{description_cell, name_cell};
use crate::form::{Form, Property};
use crate::template::{self, Slot};

const FORM_TABLE_HEADER: &str = "| Environment Variable | Type | Description |\n\
                                 |----------------------|------|-------------|\n";

const BROKERPAK_TABLE_HEADER: &str = "| Property | Type | Description |\n\
                                      |----------|------|-------------|\n";

const REQUIRED_LEGEND: &str = "\n\n\\* = Required\n";

/// How property names appear in the first table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameStyle {
    /// Environment variable form, e.g. `db_host` becomes `DB_HOST`.
    Uppercase,
    /// Key as written, used for brokerpak object keys.
    Verbatim,
}

/// Renders customization document for the given forms.
///
/// Emits the static preamble, one section per form in input order, then the
/// brokerpak installation section with a table built from `brokerpak_form`.
/// An empty `forms` slice yields the preamble and brokerpak section only.
///
/// # Arguments
///
/// * `forms`: Forms documented as environment variable sections
/// * `brokerpak_form`: Form describing brokerpak source objects
///
/// # Returns
///
/// Normalized Markdown document
///
/// # Errors
///
/// Returns error if the bundled skeleton is malformed
pub fn render(forms: &[Form], brokerpak_form: &Form) -> Result<String> {
    let skeleton = template::skeleton().context("Failed to render customization document")?;

    let raw = skeleton.render(|slot, out| match slot {
        Slot::Forms => {
            for form in forms {
                out.push_str(&render_form_section(form));
            }
        }
        Slot::BrokerpakProperties => {
            out.push('\n');
            out.push_str(BROKERPAK_TABLE_HEADER);
            push_rows(out, &brokerpak_form.properties, NameStyle::Verbatim);
            out.push_str(REQUIRED_LEGEND);
        }
    });

    Ok(normalize(&raw))
}

/// Renders one form as a document section.
///
/// The section holds a level two heading with the form label, the form
/// description, a table with one row per property and the required legend.
/// Property names are uppercased.
pub fn render_form_section(form: &Form) -> String {
    let mut section = format!(
        "\n## {}\n\n{}\n\nYou can configure the following environment variables:\n\n",
        form.label, form.description
    );
    section.push_str(FORM_TABLE_HEADER);
    push_rows(&mut section, &form.properties, NameStyle::Uppercase);
    section.push_str(REQUIRED_LEGEND);
    section.push('\n');
    section
}

fn push_rows(out: &mut String, properties: &[Property], style: NameStyle) {
    for property in properties {
        out.push_str(&property_row(property, style));
    }
}

fn property_row(property: &Property, style: NameStyle) -> String {
    let name = match style {
        NameStyle::Uppercase => simple_uppercase(&property.name),
        NameStyle::Verbatim => property.name.clone(),
    };

    format!(
        "| {} | {} | {}|\n",
        name_cell(&name, property.is_required()).into_string(),
        property.kind,
        description_cell(property).into_string()
    )
}

/// Uppercases one character at a time.
///
/// Characters whose uppercase form spans several characters, such as `ß`,
/// are kept as they are, so names never change length in characters.
fn simple_uppercase(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Removes trailing whitespace from the document and every line.
///
/// Leading indentation is kept so indented code blocks survive. Only `\n`
/// separates lines; carriage returns are left in place.
///
/// # Arguments
///
/// * `raw`: Rendered document
///
/// # Returns
///
/// Document without leading or trailing blank space and without trailing
/// spaces or tabs on any line
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}
