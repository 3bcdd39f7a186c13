//! Form definitions consumed by the document renderer.
//!
//! Forms are produced by an external provider and loaded from JSON or TOML
//! files. The renderer treats them as opaque, ordered data.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Named group of configurable properties, rendered as one document section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Form {
    /// Machine identifier, not rendered.
    #[serde(default)]
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Vec<Property>,
}

/// Single configurable option, rendered as one table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, deserialize_with = "scalar_default")]
    pub default: Option<String>,
}

/// Forms loaded from a provider file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub forms: Vec<Form>,
    /// Overrides [`Form::brokerpak_configuration`] when present.
    #[serde(default)]
    pub brokerpak_form: Option<Form>,
}

impl Form {
    /// Returns built-in form describing brokerpak source objects.
    ///
    /// Each object in the `GSB_BROKERPAK_SOURCES` array accepts these keys.
    pub fn brokerpak_configuration() -> Self {
        Self {
            name: "brokerpak_sources".to_string(),
            label: "Brokerpak Sources".to_string(),
            description: "Configure Brokerpaks".to_string(),
            properties: vec![
                Property {
                    name: "uri".to_string(),
                    label: "Brokerpak URI".to_string(),
                    kind: "string".to_string(),
                    description: "The URI to load. Supported protocols are http, https, gs, and git. \
                        Cloud Storage (gs) URIs follow the gs://<bucket>/<path> convention and will be read using the service broker service account. \
                        You can validate the checksum of any file on download by appending a checksum query parameter to the URI in the format type:value. \
                        Valid checksum types are md5, sha1, sha256 and sha512. e.g. gs://foo/bar.brokerpak?checksum=md5:3063a2c62e82ef8614eee6745a7b6b59"
                        .to_string(),
                    optional: false,
                    default: None,
                },
                Property {
                    name: "service_prefix".to_string(),
                    label: "Service Prefix".to_string(),
                    kind: "string".to_string(),
                    description: "A prefix to prepend to every service name. This will be exact, so you may want to include a trailing dash."
                        .to_string(),
                    optional: true,
                    default: None,
                },
                Property {
                    name: "excluded_services".to_string(),
                    label: "Excluded Services".to_string(),
                    kind: "text".to_string(),
                    description: "A list of UUIDs of services to exclude, one per line.".to_string(),
                    optional: true,
                    default: None,
                },
                Property {
                    name: "config".to_string(),
                    label: "Brokerpak Configuration".to_string(),
                    kind: "text".to_string(),
                    description: "A JSON map of configuration key/value pairs for the brokerpak. \
                        If a key has the same name as a global brokerpak variable, it will be overridden."
                        .to_string(),
                    optional: true,
                    default: Some("{}".to_string()),
                },
                Property {
                    name: "notes".to_string(),
                    label: "Notes".to_string(),
                    kind: "text".to_string(),
                    description: "A place for your notes, not used by the broker.".to_string(),
                    optional: true,
                    default: None,
                },
            ],
        }
    }

    /// Returns property names that occur more than once, in first repeat order.
    pub fn duplicate_property_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for property in &self.properties {
            let name = property.name.as_str();
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}

impl Property {
    /// Returns default value when one should be documented.
    ///
    /// Empty defaults are treated as absent.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref().filter(|value| !value.is_empty())
    }

    /// Returns true when the property must be set.
    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

impl FormSet {
    /// Parses form set from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if text is not a valid form set document.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid JSON form set")
    }

    /// Parses form set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if text is not a valid form set document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML form set")
    }

    /// Returns `(form label, property name)` for every repeated property name.
    ///
    /// Covers the listed forms and the brokerpak form when one is present.
    pub fn duplicate_properties(&self) -> Vec<(&str, &str)> {
        self.forms
            .iter()
            .chain(self.brokerpak_form.as_ref())
            .flat_map(|form| {
                form.duplicate_property_names()
                    .into_iter()
                    .map(move |name| (form.label.as_str(), name))
            })
            .collect()
    }

    /// Returns brokerpak form from file or the built-in one.
    pub fn brokerpak_form(&self) -> Form {
        self.brokerpak_form
            .clone()
            .unwrap_or_else(Form::brokerpak_configuration)
    }
}

/// Loads form set from file.
///
/// Files with a `.toml` extension are parsed as TOML, anything else as JSON.
/// Duplicate property names are logged but kept.
///
/// # Arguments
///
/// * `path`: Path to forms file
///
/// # Errors
///
/// Returns error if file cannot be read or parsed
pub fn load_forms(path: impl AsRef<Path>) -> Result<FormSet> {
    let path = path.as_ref();
    let form_set: FormSet = read_document(path)?;

    for (label, name) in form_set.duplicate_properties() {
        warn!(form = %label, property = name, "Duplicate property name");
    }

    debug!(
        path = %path.display(),
        forms = form_set.forms.len(),
        custom_brokerpak = form_set.brokerpak_form.is_some(),
        "Loaded forms"
    );

    Ok(form_set)
}

/// Loads a single form from file, used for brokerpak form overrides.
///
/// # Errors
///
/// Returns error if file cannot be read or parsed
pub fn load_form(path: impl AsRef<Path>) -> Result<Form> {
    let path = path.as_ref();
    let form: Form = read_document(path)?;

    for name in form.duplicate_property_names() {
        warn!(form = %form.label, property = name, "Duplicate property name");
    }

    debug!(
        path = %path.display(),
        properties = form.properties.len(),
        "Loaded form"
    );

    Ok(form)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).with_context(|| format!("Invalid TOML in {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts string, boolean or numeric defaults.
///
/// `false`, zero and the empty string count as no default.
fn scalar_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Flag(bool),
        Integer(i64),
        Float(f64),
    }

    let value = match Option::<Scalar>::deserialize(deserializer)? {
        None | Some(Scalar::Flag(false)) | Some(Scalar::Integer(0)) => None,
        Some(Scalar::Float(f)) if f == 0.0 => None,
        Some(Scalar::Text(text)) if text.is_empty() => None,
        Some(Scalar::Text(text)) => Some(text),
        Some(Scalar::Flag(true)) => Some("true".to_string()),
        Some(Scalar::Integer(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
    };

    Ok(value)
}
