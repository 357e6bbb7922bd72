use std::fmt;

use crate::version::VersionSuggestion;

/// Non-fatal issues noticed while filling in the form.
/// These are reported to the user but never stop the program.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The chosen project folder does not exist or is not a directory
    FolderMissing { path: String },
    /// The repository has no tags
    NoTagsFound { default: String },
    /// The latest tag is not `v<major>.<minor>` and could not be incremented
    UnparsableTag { tag: String, suggestion: String },
}

impl BoundaryWarning {
    /// The warning matching a version suggestion, if it deserves one.
    pub fn for_suggestion(suggestion: &VersionSuggestion) -> Option<Self> {
        match suggestion {
            VersionSuggestion::Initial(default) => Some(BoundaryWarning::NoTagsFound {
                default: default.clone(),
            }),
            VersionSuggestion::Fallback { from, label } => Some(BoundaryWarning::UnparsableTag {
                tag: from.clone(),
                suggestion: label.clone(),
            }),
            // a failed tag query falls back to the default without a word
            VersionSuggestion::Incremented { .. } | VersionSuggestion::Unavailable(_) => None,
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FolderMissing { path } => {
                write!(f, "Folder '{}' does not exist", path)
            }
            BoundaryWarning::NoTagsFound { default } => {
                write!(f, "No existing tags found, starting at '{}'", default)
            }
            BoundaryWarning::UnparsableTag { tag, suggestion } => {
                write!(
                    f,
                    "Cannot auto-increment tag '{}', suggested '{}': please edit the version manually",
                    tag, suggestion
                )
            }
        }
    }
}
