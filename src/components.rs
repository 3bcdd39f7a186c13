//! Inline HTML fragments for property table cells
//!
//! Markdown tables cannot hold block content, so name and description cells
//! are rendered as inline HTML with Maud. Names, labels and descriptions are
//! written by form authors and pass through unescaped.

use maud::{Markup, PreEscaped, html};

use crate::escape::js_escape;
use crate::form::Property;

/// Renders variable name cell with optional required marker.
///
/// # Arguments
///
/// * `name`: Name as displayed (already case transformed)
/// * `required`: Appends bold asterisk when true
///
/// # Returns
///
/// Name cell markup, e.g. `<tt>DB_HOST</tt> <b>*</b>`
pub fn name_cell(name: &str, required: bool) -> Markup {
    html! {
        tt { (PreEscaped(name)) }
        @if required {
            " " b { "*" }
        }
    }
}

/// Renders description cell as a paragraph.
///
/// Reads `Label. Description` followed by the escaped default value when one
/// is set. Properties without a label read `Description.` instead.
pub fn description_cell(property: &Property) -> Markup {
    let summary = if property.label.is_empty() {
        terminate_sentence(&property.description)
    } else {
        format!("{}. {}", property.label, property.description)
    };

    html! {
        p {
            (PreEscaped(summary))
            @if let Some(default) = property.default_value() {
                // js_escape leaves no HTML specials behind
                " Default: " code { (PreEscaped(js_escape(default))) }
            }
        }
    }
}

fn terminate_sentence(text: &str) -> String {
    if text.is_empty() || text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{}.", text)
    }
}
