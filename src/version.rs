use log::debug;
use regex::Regex;
use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::runner::{CommandRunner, Invocation};

/// A `v<major>.<minor>` version as found in a tag.
///
/// Both parts are kept as decimal digit strings so any length of number can
/// be incremented. `major` keeps the tag's original digits (leading zeros
/// included) because it is copied into the suggestion untouched; `minor` is
/// stored without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVersion {
    pub major: String,
    pub minor: String,
}

impl TagVersion {
    /// Next minor version. Minor never rolls over into major.
    pub fn next_minor(&self) -> TagVersion {
        TagVersion {
            major: self.major.clone(),
            minor: increment_decimal(&self.minor),
        }
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// Strips leading zeros from a string of ASCII digits ("000" -> "0").
fn normalize_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Adds one to a string of ASCII digits, carrying as far as needed.
fn increment_decimal(digits: &str) -> String {
    let mut bytes: Vec<u8> = normalize_decimal(digits).into_bytes();

    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }

    // every digit carried
    let mut out = String::with_capacity(bytes.len() + 1);
    out.push('1');
    out.push_str(&String::from_utf8_lossy(&bytes));
    out
}

/// Parses a version from a git tag string.
///
/// Strips one optional leading lowercase `v`, then expects exactly two
/// all-digit components separated by a dot.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_version_from_tag("v2.3").unwrap().minor, "3");
/// assert_eq!(parse_version_from_tag("1.4").unwrap().major, "1");
/// assert_eq!(parse_version_from_tag("v1.2.3"), None); // three components
/// assert_eq!(parse_version_from_tag("release-1"), None);
/// ```
pub fn parse_version_from_tag(tag: &str) -> Option<TagVersion> {
    let re = Regex::new(r"^v?([0-9]+)\.([0-9]+)$").ok()?;
    let captures = re.captures(tag)?;

    let major = captures.get(1)?.as_str().to_string();
    let minor = normalize_decimal(captures.get(2)?.as_str());

    Some(TagVersion { major, minor })
}

/// What the version field should be pre-filled with.
///
/// The variants let the form tell an automatic increment apart from a label
/// that still needs manual editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSuggestion {
    /// The repository has no tags; the configured default label
    Initial(String),
    /// The tag query failed; the configured default label
    Unavailable(String),
    /// The latest tag was parsed and its minor version incremented
    Incremented { from: String, label: String },
    /// The latest tag could not be parsed; the tag plus the fallback suffix
    Fallback { from: String, label: String },
}

impl VersionSuggestion {
    /// The label to pre-fill
    pub fn label(&self) -> &str {
        match self {
            VersionSuggestion::Initial(label) => label,
            VersionSuggestion::Unavailable(label) => label,
            VersionSuggestion::Incremented { label, .. } => label,
            VersionSuggestion::Fallback { label, .. } => label,
        }
    }

    /// The tag the suggestion was derived from, if any
    pub fn source_tag(&self) -> Option<&str> {
        match self {
            VersionSuggestion::Initial(_) | VersionSuggestion::Unavailable(_) => None,
            VersionSuggestion::Incremented { from, .. } => Some(from),
            VersionSuggestion::Fallback { from, .. } => Some(from),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, VersionSuggestion::Fallback { .. })
    }
}

/// Derives a suggestion from the latest tag.
pub fn suggest_from_tag(tag: &str, fallback_suffix: &str) -> VersionSuggestion {
    match parse_version_from_tag(tag) {
        Some(version) => VersionSuggestion::Incremented {
            from: tag.to_string(),
            label: version.next_minor().to_string(),
        },
        None => VersionSuggestion::Fallback {
            from: tag.to_string(),
            label: format!("{}{}", tag, fallback_suffix),
        },
    }
}

/// Derives a suggestion from the output of the tag listing.
///
/// `listing` is `None` when the query failed. Only the first non-blank line
/// (the highest version) is considered.
pub fn suggest_from_listing(listing: Option<&str>, config: &Config) -> VersionSuggestion {
    let default = config.suggestion.default_version.clone();
    let Some(out) = listing else {
        return VersionSuggestion::Unavailable(default);
    };

    match out.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(tag) => suggest_from_tag(tag, &config.suggestion.fallback_suffix),
        None => VersionSuggestion::Initial(default),
    }
}

/// The tag query: all tags, highest version first.
pub fn tag_listing_invocation(repo_path: &Path, config: &Config) -> Invocation {
    Invocation::new(
        config.git.program.as_str(),
        ["tag", "--sort=-v:refname"],
        repo_path,
    )
}

/// Suggests the next version label for the repository at `repo_path`.
///
/// Never fails: if the tag query fails the default label is suggested.
pub fn suggest<R: CommandRunner + ?Sized>(
    repo_path: &Path,
    runner: &R,
    config: &Config,
) -> VersionSuggestion {
    let outcome = runner.run(&tag_listing_invocation(repo_path, config));
    if !outcome.success {
        debug!("tag query failed, using default label: {}", outcome.output);
    }

    let listing = outcome.success.then_some(outcome.output.as_str());
    suggest_from_listing(listing, config)
}
