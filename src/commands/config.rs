//! `capsid config` - inspect resolved local properties.

use serde::Serialize;

use crate::commands::CommandResult;
use crate::config::resolver::resolve;
use crate::config::{LocalStore, key};
use crate::{Error, Result};

/// One property with its resolved value and source.
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub name: String,
    pub kind: &'static str,
    /// Resolved value, absent when nothing supplied one.
    pub value: Option<String>,
    /// Which source won, absent when the value is.
    pub source: Option<String>,
    pub required: bool,
}

impl CommandResult for ConfigEntry {
    fn to_human(&self) -> String {
        match (&self.value, &self.source) {
            (Some(value), Some(source)) => {
                format!("{} = {}  [{}]", self.name, value, source)
            }
            _ => format!("{} is not set", self.name),
        }
    }
}

/// Result of `capsid config list`.
#[derive(Debug, Serialize)]
pub struct ConfigListResult {
    pub properties: Vec<ConfigEntry>,
}

impl CommandResult for ConfigListResult {
    fn to_human(&self) -> String {
        self.properties
            .iter()
            .map(|entry| entry.to_human())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolve and display a single property by name.
///
/// Resolution failures (missing required value, malformed value) surface
/// as errors, exactly as any consuming command would see them.
pub fn config_get(store: &LocalStore, name: &str) -> Result<ConfigEntry> {
    let property = key::find(name).ok_or_else(|| Error::UnknownProperty(name.to_string()))?;
    let resolved = resolve(property, store)?;
    Ok(entry_for(property, resolved))
}

/// Resolve and display every property in the registry.
///
/// Unlike `get`, a missing required property is shown as unset rather
/// than failing the whole listing; `list` exists to diagnose exactly
/// that state.
pub fn config_list(store: &LocalStore) -> Result<ConfigListResult> {
    let mut properties = Vec::with_capacity(key::LOCAL_PROPERTIES.len());
    for property in key::LOCAL_PROPERTIES {
        let entry = match resolve(property, store) {
            Ok(resolved) => entry_for(property, resolved),
            Err(Error::MissingProperty { .. }) => entry_for(property, None),
            Err(e) => return Err(e),
        };
        properties.push(entry);
    }
    Ok(ConfigListResult { properties })
}

fn entry_for(
    property: &key::LocalProperty,
    resolved: Option<crate::config::Resolved<key::PropertyValue>>,
) -> ConfigEntry {
    let (value, source) = match resolved {
        Some(r) => (Some(r.value.display()), Some(r.source.to_string())),
        None => (None, None),
    };
    ConfigEntry {
        name: property.name.to_string(),
        kind: property.kind.as_str(),
        value,
        source,
        required: property.required,
    }
}
