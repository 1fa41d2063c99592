//! Post-resolution validation helpers.
//!
//! The resolver never checks that a path exists; that is the caller's
//! concern. Commands that are about to hand a resolved path to the IDE,
//! the game, or the annotator validate it here first.

use std::path::Path;

use crate::{Error, Result};

/// Check that a resolved path points at an existing directory.
///
/// `label` names the path in the error message (e.g. "game install").
pub fn directory(label: &str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::InvalidDirectory {
            label: label.to_string(),
            path: path.display().to_string(),
        })
    }
}

/// Check that a string looks like an `http(s)` URL.
///
/// Shape check only: a scheme and a non-empty host with a dot. Used for
/// the optional `url=` field of `mod.info`.
pub fn url(value: &str) -> Result<()> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && host.contains('.') && !host.starts_with('.') => Ok(()),
        _ => Err(Error::InvalidInput(format!(
            "'{}' is not a valid http(s) URL",
            value
        ))),
    }
}

/// A `MAJOR.MINOR.PATCH` semantic version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    /// Parse a semantic version from a string such as `41.78.16`.
    ///
    /// Tolerates a leading `v` and trailing pre-release/build suffixes
    /// (`1.2.3-beta`, `1.2.3+40`), since annotator builds tag themselves
    /// that way.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim().trim_start_matches('v');
        let core = value
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut parts = core.split('.');
        let (major, minor, patch) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(a), Some(b), Some(c), None) => (a, b, c),
            _ => {
                return Err(Error::InvalidInput(format!(
                    "'{}' is not a MAJOR.MINOR.PATCH version",
                    value
                )));
            }
        };

        let parse_part = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                Error::InvalidInput(format!("'{}' is not a MAJOR.MINOR.PATCH version", value))
            })
        };

        Ok(Self {
            major: parse_part(major)?,
            minor: parse_part(minor)?,
            patch: parse_part(patch)?,
        })
    }

    /// Find the first semantic version embedded in free-form text, such as
    /// an annotator's `version` banner line.
    pub fn find_in(text: &str) -> Option<Self> {
        text.split_whitespace()
            .find_map(|token| Self::parse(token).ok())
    }
}

impl std::fmt::Display for SemVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
