//! Creativity levels, resource kinds, and views.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Creativity
// ---------------------------------------------------------------------------

/// Preset controlling how speculative generated ideas are.
///
/// ```text
/// conservative → grounded, peer-review ready
/// balanced     → mainstream with a twist
/// radical      → speculative, boundary-pushing
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Creativity {
    Conservative,
    #[default]
    Balanced,
    Radical,
}

impl Creativity {
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Balanced, Self::Radical];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Balanced => "balanced",
            Self::Radical => "radical",
        }
    }

    /// Display label shown next to the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Radical => "Radical",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Conservative => "Grounded & Peer-Review Ready",
            Self::Balanced => "Mainstream with a Twist",
            Self::Radical => "Speculative & Boundary-Pushing",
        }
    }
}

impl fmt::Display for Creativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Creativity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown creativity level '{s}' (expected conservative, balanced, or radical)"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// Kind of an external resource attached to a bookmark.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[default]
    Link,
    File,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "link" => Ok(Self::Link),
            "file" => Ok(Self::File),
            other => Err(CoreError::Validation(format!(
                "unknown resource kind '{other}' (expected link or file)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The screen the presentation layer is currently showing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Lab,
    Journal,
    Frameworks,
    Profile,
}

impl View {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Journal => "journal",
            Self::Frameworks => "frameworks",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
