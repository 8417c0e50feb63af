use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::item::ParseEnumError;

/// A viewer's role within a project, from least to most privileged.
///
/// The derived ordering follows the declaration order, so role comparisons
/// like `level > AccessLevel::Guest` read the way the permission model is
/// described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    NonMember,
    Guest,
    Reporter,
    Developer,
    Maintainer,
    Owner,
}

impl AccessLevel {
    const fn as_str(self) -> &'static str {
        match self {
            Self::NonMember => "non_member",
            Self::Guest => "guest",
            Self::Reporter => "reporter",
            Self::Developer => "developer",
            Self::Maintainer => "maintainer",
            Self::Owner => "owner",
        }
    }

    /// Collapse the role ladder to the one boolean confidentiality cares
    /// about: membership strictly above guest.
    ///
    /// Guests are deliberately on the `false` side — a guest sees
    /// confidential items only through authorship, assignment, or admin.
    #[must_use]
    pub fn above_guest(self) -> bool {
        self > Self::Guest
    }
}

impl Default for AccessLevel {
    fn default() -> Self {
        Self::NonMember
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "non_member" => Ok(Self::NonMember),
            "guest" => Ok(Self::Guest),
            "reporter" => Ok(Self::Reporter),
            "developer" => Ok(Self::Developer),
            "maintainer" => Ok(Self::Maintainer),
            "owner" => Ok(Self::Owner),
            _ => Err(ParseEnumError {
                expected: "access level",
                got: s.to_string(),
            }),
        }
    }
}

/// The identity asking a question of the engine.
///
/// Anonymous viewers are represented as `Option<&Viewer>::None` at the call
/// sites; they degrade to non-members with no authorship or assignment
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
    /// Global admin flag. Admins see every item regardless of membership.
    #[serde(default)]
    pub admin: bool,
}

impl Viewer {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            admin: false,
        }
    }

    #[must_use]
    pub fn admin(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            admin: true,
        }
    }
}
