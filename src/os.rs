//! Target-platform resolution and per-OS syntactic rules
//!
//! Every validation and normalization call starts here: a requested
//! [`TargetOs`] is resolved to a concrete [`Platform`], which carries the
//! immutable [`RuleSet`] the rest of the crate consults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The platform a caller wants paths checked against.
///
/// `Auto` defers the decision to the host: it is resolved fresh on every
/// call via [`current_os`], never stored or cached, so behavior always
/// follows the actual runtime environment.
///
/// # Examples
/// ```
/// use pathvet::{Platform, TargetOs};
///
/// assert_eq!(TargetOs::Windows.resolve(), Platform::Windows);
/// assert_eq!(TargetOs::Auto.resolve(), pathvet::current_os());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetOs {
    Windows,
    Posix,
    #[default]
    Auto,
}

impl TargetOs {
    /// Resolve to a concrete platform, consulting the host for `Auto`.
    pub fn resolve(self) -> Platform {
        match self {
            TargetOs::Windows => Platform::Windows,
            TargetOs::Posix => Platform::Posix,
            TargetOs::Auto => current_os(),
        }
    }
}

impl From<Platform> for TargetOs {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Windows => TargetOs::Windows,
            Platform::Posix => TargetOs::Posix,
        }
    }
}

/// A concrete platform with known path syntax rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// The syntactic rule set for this platform.
    pub const fn rules(self) -> &'static RuleSet {
        match self {
            Platform::Windows => &WINDOWS_RULES,
            Platform::Posix => &POSIX_RULES,
        }
    }
}

/// The fixed bundle of per-OS path limits consulted by validation and
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Longest path accepted, in characters.
    pub max_path_length: usize,
    /// Characters never allowed anywhere in a path.
    pub illegal_chars: &'static [char],
    /// Whether control characters (0x00-0x1F) are also illegal.
    pub forbid_control_chars: bool,
    /// Whether the platform compares paths case-insensitively.
    pub case_insensitive: bool,
    /// The platform's native separator.
    pub separator: char,
}

impl RuleSet {
    /// Check a single character against this rule set's illegal class.
    pub fn is_illegal(&self, c: char) -> bool {
        self.illegal_chars.contains(&c) || (self.forbid_control_chars && (c as u32) < 0x20)
    }
}

pub(crate) const WINDOWS_RULES: RuleSet = RuleSet {
    max_path_length: 260,
    illegal_chars: &['<', '>', ':', '"', '|', '?', '*'],
    forbid_control_chars: true,
    case_insensitive: true,
    separator: '\\',
};

pub(crate) const POSIX_RULES: RuleSet = RuleSet {
    max_path_length: 4096,
    illegal_chars: &['\0'],
    forbid_control_chars: false,
    case_insensitive: false,
    separator: '/',
};

/// Query the host platform.
///
/// # Examples
/// ```
/// use pathvet::{current_os, Platform};
///
/// let os = current_os();
/// assert!(os == Platform::Windows || os == Platform::Posix);
/// ```
pub fn current_os() -> Platform {
    if cfg!(windows) {
        Platform::Windows
    } else {
        Platform::Posix
    }
}
