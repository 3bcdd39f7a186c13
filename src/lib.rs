//! Installation customization document generator for service broker forms.

mod components;
mod config;
mod document;
mod escape;
mod form;
mod output;
mod template;

pub use components::{description_cell, name_cell};
pub use config::Config;
pub use document::{normalize, render, render_form_section};
pub use escape::js_escape;
pub use form::{Form, FormSet, Property, load_form, load_forms};
pub use output::{print_document, write_document};
pub use template::{Slot, Template, TemplateError};
