//! Ordered-source resolution for local properties.
//!
//! Resolution is a pure, synchronous, single pass over the sources
//! described in the [module docs](super). The resolver is written against
//! the [`PropertySources`] trait so it has no compile-time dependency on
//! the process environment or the filesystem; the production
//! implementation is [`LocalStore`](super::store::LocalStore).
//!
//! Only *absence* continues down the chain. Once a source supplies a
//! non-empty raw string, that string is coerced to the property's declared
//! kind and any coercion failure is a real failure, never a fallthrough
//! trigger.

use crate::config::key::{LocalProperty, PropertyKind, PropertyValue};
use crate::{Error, Result};

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from the `local.properties` snapshot
    PropertiesFile,
    /// Value from a `-P key=value` process override
    Override,
    /// Value from an environment variable
    EnvVar(String),
    /// The property's built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::PropertiesFile => write!(f, "local.properties"),
            ValueSource::Override => write!(f, "override"),
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// The two capabilities the resolver needs from its host: reading a
/// persisted or overridden property by name, and reading an environment
/// variable by name.
///
/// Implementations must treat empty strings as absent so that resolution
/// continues down the chain.
pub trait PropertySources {
    /// Read `name` from the persisted property snapshot.
    fn persisted(&self, name: &str) -> Option<String>;

    /// Read `name` from the process-level override source.
    fn override_value(&self, name: &str) -> Option<String>;

    /// Read the environment variable `name`, fresh on every call.
    fn env_var(&self, name: &str) -> Option<String>;
}

/// Resolve a property through the ordered source chain.
///
/// Returns `Ok(None)` when the property is not required and nothing
/// supplied a value. A required property with no default fails with
/// [`Error::MissingProperty`] naming every source that was checked.
pub fn resolve(
    property: &LocalProperty,
    sources: &dyn PropertySources,
) -> Result<Option<Resolved<PropertyValue>>> {
    let env_name = property.env_name();

    let raw = sources
        .persisted(property.name)
        .map(|v| (v, ValueSource::PropertiesFile))
        .or_else(|| {
            sources
                .override_value(property.name)
                .map(|v| (v, ValueSource::Override))
        })
        .or_else(|| {
            sources
                .env_var(env_name)
                .map(|v| (v, ValueSource::EnvVar(env_name.to_string())))
        });

    if let Some((raw, source)) = raw {
        let value = coerce(property, &raw)?;
        return Ok(Some(Resolved::new(value, source)));
    }

    // Defaults are already typed and bypass coercion.
    if let Some(default) = property.default {
        return Ok(Some(Resolved::new(default.to_value(), ValueSource::Default)));
    }

    if property.required {
        return Err(Error::MissingProperty {
            name: property.name.to_string(),
            sources: format!(
                "local.properties, -P overrides, and environment variable {}",
                env_name
            ),
        });
    }

    Ok(None)
}

/// Resolve a property that the caller cannot proceed without.
///
/// Identical to [`resolve`] except that an absent optional property is
/// also an error. Useful for commands that need a value regardless of the
/// registry's `required` flag.
pub fn resolve_required(
    property: &LocalProperty,
    sources: &dyn PropertySources,
) -> Result<Resolved<PropertyValue>> {
    resolve(property, sources)?.ok_or_else(|| Error::MissingProperty {
        name: property.name.to_string(),
        sources: format!(
            "local.properties, -P overrides, and environment variable {}",
            property.env_name()
        ),
    })
}

/// Coerce a raw source string to the property's declared kind.
fn coerce(property: &LocalProperty, raw: &str) -> Result<PropertyValue> {
    match property.kind {
        PropertyKind::Path => {
            if raw.contains('\0') {
                return Err(Error::MalformedProperty {
                    name: property.name.to_string(),
                    reason: "path contains a NUL byte".to_string(),
                });
            }
            Ok(PropertyValue::Path(std::path::PathBuf::from(raw)))
        }
        PropertyKind::Text => Ok(PropertyValue::Text(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::key::{DefaultValue, GAME_DIR, IDEA_HOME, ZDOC_TOOL};
    use crate::test_utils::FakeSources;

    const OPTIONAL_TEXT: LocalProperty = LocalProperty {
        name: "someText",
        env: None,
        kind: PropertyKind::Text,
        default: None,
        required: false,
    };

    #[test]
    fn default_returned_untouched_when_all_sources_empty() {
        let sources = FakeSources::new();

        let resolved = resolve(&ZDOC_TOOL, &sources).unwrap().unwrap();
        assert_eq!(resolved.value, PropertyValue::Text("zdoc".to_string()));
        assert_eq!(resolved.source, ValueSource::Default);
    }

    #[test]
    fn properties_file_outranks_override() {
        let sources = FakeSources::new()
            .with_persisted("gameDir", "/from/file")
            .with_override("gameDir", "/from/override");

        let resolved = resolve(&GAME_DIR, &sources).unwrap().unwrap();
        assert_eq!(resolved.value.as_path().unwrap(), Path::new("/from/file"));
        assert_eq!(resolved.source, ValueSource::PropertiesFile);
    }

    #[test]
    fn override_outranks_environment() {
        let sources = FakeSources::new()
            .with_override("gameDir", "/from/override")
            .with_env("PZ_GAME_DIR", "/from/env");

        let resolved = resolve(&GAME_DIR, &sources).unwrap().unwrap();
        assert_eq!(resolved.source, ValueSource::Override);
        assert_eq!(
            resolved.value.as_path().unwrap(),
            Path::new("/from/override")
        );
    }

    #[test]
    fn environment_outranks_default() {
        let sources = FakeSources::new().with_env("ZDOC_TOOL", "custom-zdoc");

        let resolved = resolve(&ZDOC_TOOL, &sources).unwrap().unwrap();
        assert_eq!(resolved.value, PropertyValue::Text("custom-zdoc".to_string()));
        assert_eq!(resolved.source, ValueSource::EnvVar("ZDOC_TOOL".to_string()));
    }

    #[test]
    fn required_with_no_value_fails_with_missing() {
        let sources = FakeSources::new();

        let err = resolve(&GAME_DIR, &sources).unwrap_err();
        match err {
            crate::Error::MissingProperty { name, sources } => {
                assert_eq!(name, "gameDir");
                assert!(sources.contains("PZ_GAME_DIR"));
                assert!(sources.contains("local.properties"));
            }
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn optional_with_no_value_resolves_to_none() {
        let sources = FakeSources::new();
        assert!(resolve(&OPTIONAL_TEXT, &sources).unwrap().is_none());
    }

    #[test]
    fn resolve_required_rejects_absent_optional() {
        let sources = FakeSources::new();
        assert!(matches!(
            resolve_required(&OPTIONAL_TEXT, &sources),
            Err(crate::Error::MissingProperty { .. })
        ));
    }

    #[test]
    fn path_value_round_trips_platform_separators() {
        let sources = FakeSources::new().with_persisted("gameDir", "/a/b/c");

        let resolved = resolve(&GAME_DIR, &sources).unwrap().unwrap();
        let path = resolved.value.as_path().unwrap();
        assert_eq!(path, Path::new("/a/b/c"));
        assert_eq!(Path::new(&path.display().to_string()), Path::new("/a/b/c"));
    }

    #[test]
    fn env_lookup_uses_alternate_name_not_property_name() {
        // An env var literally named "gameDir" must not satisfy the key.
        let sources = FakeSources::new().with_env("gameDir", "/wrong");
        assert!(resolve(&GAME_DIR, &sources).is_err());

        let sources = FakeSources::new().with_env("PZ_GAME_DIR", "/right");
        let resolved = resolve(&GAME_DIR, &sources).unwrap().unwrap();
        assert_eq!(resolved.value.as_path().unwrap(), Path::new("/right"));
    }

    #[test]
    fn idea_home_from_properties_file_scenario() {
        // local.properties contains ideaHome=/opt/idea; nothing else set.
        let sources = FakeSources::new().with_persisted("ideaHome", "/opt/idea");
        let resolved = resolve(&IDEA_HOME, &sources).unwrap().unwrap();
        assert_eq!(resolved.value.as_path().unwrap(), Path::new("/opt/idea"));

        // Remove the line: resolution now fails with Missing("ideaHome").
        let sources = FakeSources::new();
        match resolve(&IDEA_HOME, &sources).unwrap_err() {
            crate::Error::MissingProperty { name, .. } => assert_eq!(name, "ideaHome"),
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn empty_values_are_absence_not_failures() {
        // Empty string in the file falls through to the environment.
        let sources = FakeSources::new()
            .with_persisted("gameDir", "")
            .with_env("PZ_GAME_DIR", "/from/env");

        let resolved = resolve(&GAME_DIR, &sources).unwrap().unwrap();
        assert_eq!(resolved.source, ValueSource::EnvVar("PZ_GAME_DIR".to_string()));
    }

    #[test]
    fn malformed_path_is_an_error_not_a_fallthrough() {
        let sources = FakeSources::new()
            .with_persisted("gameDir", "/bad\0path")
            .with_override("gameDir", "/good/path");

        // The file supplied a value, so its coercion failure must surface
        // even though a lower source holds a usable value.
        assert!(matches!(
            resolve(&GAME_DIR, &sources),
            Err(crate::Error::MalformedProperty { .. })
        ));
    }

    #[test]
    fn typed_path_default_bypasses_coercion() {
        let prop = LocalProperty {
            name: "cacheDir",
            env: None,
            kind: PropertyKind::Path,
            default: Some(DefaultValue::Path("/var/cache/capsid")),
            required: true,
        };

        // Required with a default is never an error; it degrades to the default.
        let resolved = resolve(&prop, &FakeSources::new()).unwrap().unwrap();
        assert_eq!(resolved.source, ValueSource::Default);
        assert_eq!(
            resolved.value.as_path().unwrap(),
            Path::new("/var/cache/capsid")
        );
    }

    #[test]
    fn value_source_display() {
        assert_eq!(format!("{}", ValueSource::PropertiesFile), "local.properties");
        assert_eq!(format!("{}", ValueSource::Override), "override");
        assert_eq!(format!("{}", ValueSource::EnvVar("FOO".to_string())), "env:FOO");
        assert_eq!(format!("{}", ValueSource::Default), "default");
    }
}
