//! The local property registry.
//!
//! Properties are defined once as compile-time constants and are immutable
//! thereafter; there is no runtime registration. Each entry declares the
//! persisted name, the alternate environment-variable name, the value kind,
//! an optional typed default, and whether resolution may fail on absence.

use std::path::PathBuf;

/// The kind of value a local property carries.
///
/// This is a closed set: coercion matches exhaustively on it, so a property
/// can never be declared with a kind the resolver does not know how to
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// A filesystem path. No existence check is performed at resolution
    /// time; existence is the caller's concern.
    Path,
    /// Free-form text, passed through unchanged.
    Text,
}

impl PropertyKind {
    /// String label used in human and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Path => "path",
            PropertyKind::Text => "text",
        }
    }
}

/// A resolved, typed property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Path(PathBuf),
    Text(String),
}

impl PropertyValue {
    /// The value as a displayable string (lossy for non-UTF-8 paths).
    pub fn display(&self) -> String {
        match self {
            PropertyValue::Path(p) => p.display().to_string(),
            PropertyValue::Text(s) => s.clone(),
        }
    }

    /// The value as a path, if it is one.
    pub fn as_path(&self) -> Option<&std::path::Path> {
        match self {
            PropertyValue::Path(p) => Some(p),
            PropertyValue::Text(_) => None,
        }
    }

    /// The value as text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Path(_) => None,
        }
    }
}

/// A default value declared in the registry.
///
/// Defaults are already of the correct native kind and bypass coercion
/// entirely; they are never re-parsed from source strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Path(&'static str),
    Text(&'static str),
}

impl DefaultValue {
    /// Materialize the default as a [`PropertyValue`].
    pub fn to_value(self) -> PropertyValue {
        match self {
            DefaultValue::Path(p) => PropertyValue::Path(PathBuf::from(p)),
            DefaultValue::Text(s) => PropertyValue::Text(s.to_string()),
        }
    }
}

/// One named, typed local property definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalProperty {
    /// Key used to look up the persisted property and the `-P` override.
    pub name: &'static str,
    /// Alternate name used when searching environment variables.
    /// Falls back to `name` when unset.
    pub env: Option<&'static str>,
    /// Declared value kind; selected raw strings are coerced to this.
    pub kind: PropertyKind,
    /// Optional typed default returned when no source supplies a value.
    pub default: Option<DefaultValue>,
    /// When true and no source (including the default) supplies a value,
    /// resolution fails instead of returning an absent result.
    pub required: bool,
}

impl LocalProperty {
    /// The environment variable name searched for this property.
    pub fn env_name(&self) -> &'static str {
        self.env.unwrap_or(self.name)
    }
}

/// Path to the Project Zomboid installation directory.
pub const GAME_DIR: LocalProperty = LocalProperty {
    name: "gameDir",
    env: Some("PZ_GAME_DIR"),
    kind: PropertyKind::Path,
    default: None,
    required: true,
};

/// Path to the IntelliJ IDEA installation directory.
pub const IDEA_HOME: LocalProperty = LocalProperty {
    name: "ideaHome",
    env: Some("IDEA_HOME"),
    kind: PropertyKind::Path,
    default: None,
    required: true,
};

/// Command used to invoke the external Lua annotator.
pub const ZDOC_TOOL: LocalProperty = LocalProperty {
    name: "zdocTool",
    env: Some("ZDOC_TOOL"),
    kind: PropertyKind::Text,
    default: Some(DefaultValue::Text("zdoc")),
    required: false,
};

/// Every property Capsid knows about, in display order.
pub const LOCAL_PROPERTIES: [&LocalProperty; 3] = [&GAME_DIR, &IDEA_HOME, &ZDOC_TOOL];

/// Look up a property definition by its persisted name.
pub fn find(name: &str) -> Option<&'static LocalProperty> {
    LOCAL_PROPERTIES.iter().copied().find(|p| p.name == name)
}
