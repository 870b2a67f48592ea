//! Path validation against OS-specific syntactic rules
//!
//! The validator runs an ordered battery of independent checks over the raw
//! input string and reports every failure it finds. Only the empty-path check
//! short-circuits; all other findings accumulate so the caller sees the full
//! picture in one pass.

use crate::error::{ValidationError, ValidationResult};
use crate::normalize::{normalize_path, NormalizationOptions};
use crate::os::{Platform, TargetOs};
use log::debug;

/// Windows device names that shadow real files regardless of extension.
const RESERVED_DEVICE_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Options controlling [`validate_path`].
///
/// Plain immutable data; defaults are resolved at the start of each call,
/// never from global state.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Target platform; `Auto` resolves to the host on every call.
    pub os: TargetOs,
    /// Accept paths containing a raw `..` sequence (default false).
    pub allow_traversal: bool,
    /// Override the platform's maximum path length.
    pub max_length: Option<usize>,
    /// Accept absolute paths (default true).
    pub allow_absolute: bool,
    /// Accept relative paths (default true).
    pub allow_relative: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            os: TargetOs::Auto,
            allow_traversal: false,
            max_length: None,
            allow_absolute: true,
            allow_relative: true,
        }
    }
}

impl ValidationOptions {
    /// Default options for a specific target platform.
    pub fn for_os(os: TargetOs) -> Self {
        Self {
            os,
            ..Self::default()
        }
    }
}

/// Validate a path string against the target OS's syntactic rules.
///
/// Checks run in a fixed order: emptiness, length, raw `..` traversal,
/// illegal characters, absolute/relative policy, and Windows-specific syntax
/// (malformed drive or UNC prefixes, reserved device names). An empty input
/// returns immediately with the single empty-path finding; every other
/// failure accumulates into one ordered list.
///
/// The traversal check is a deliberate conservative policy: it matches the
/// raw substring `..` anywhere in the input, so `a..b` is flagged even
/// though it names no parent directory. Use
/// [`is_path_traversal`](crate::is_path_traversal) for the lexical
/// post-normalization test.
///
/// On success the result carries the input normalized with the resolved
/// OS's default normalization options.
///
/// # Examples
/// ```
/// use pathvet::{validate_path, ErrorCode, TargetOs, ValidationOptions};
///
/// let options = ValidationOptions::default();
/// assert!(validate_path("reports/summary.txt", &options).is_valid());
///
/// let windows = ValidationOptions::for_os(TargetOs::Windows);
/// let result = validate_path("reports/summary?.txt", &windows);
/// assert_eq!(result.errors()[0].code(), ErrorCode::IllegalChar);
/// ```
pub fn validate_path(path: &str, options: &ValidationOptions) -> ValidationResult {
    if path.is_empty() {
        return ValidationResult::Invalid {
            errors: vec![ValidationError::EmptyPath],
        };
    }

    let platform = options.os.resolve();
    let rules = platform.rules();
    let mut errors = Vec::new();

    let length = path.chars().count();
    let limit = options.max_length.unwrap_or(rules.max_path_length);
    if length > limit {
        errors.push(ValidationError::TooLong { length, limit });
    }

    if !options.allow_traversal && path.contains("..") {
        errors.push(ValidationError::Traversal);
    }

    // Only the first offending character is reported.
    if let Some((position, ch)) = path
        .chars()
        .enumerate()
        .find(|&(_, c)| rules.is_illegal(c))
    {
        errors.push(ValidationError::IllegalChar { ch, position });
    }

    if is_absolute(path, platform) {
        if !options.allow_absolute {
            errors.push(ValidationError::AbsoluteNotAllowed);
        }
    } else if !options.allow_relative {
        errors.push(ValidationError::RelativeNotAllowed);
    }

    if platform == Platform::Windows {
        check_windows_syntax(path, &mut errors);
    }

    if errors.is_empty() {
        let normalized = normalize_path(path, &NormalizationOptions::for_os(platform.into()));
        ValidationResult::Valid { normalized }
    } else {
        debug!("path rejected with {} finding(s)", errors.len());
        ValidationResult::Invalid { errors }
    }
}

/// Boolean convenience over [`validate_path`].
///
/// # Examples
/// ```
/// use pathvet::{is_valid_path, ValidationOptions};
///
/// let options = ValidationOptions::default();
/// assert!(is_valid_path("safe/path/file.txt", &options));
/// assert!(!is_valid_path("../etc/passwd", &options));
/// assert!(!is_valid_path("", &options));
/// ```
pub fn is_valid_path(path: &str, options: &ValidationOptions) -> bool {
    validate_path(path, options).is_valid()
}

/// Absoluteness under the target platform's rules: a drive letter plus
/// separator or a UNC prefix on Windows, a leading separator on Posix.
fn is_absolute(path: &str, platform: Platform) -> bool {
    match platform {
        Platform::Windows => {
            let mut chars = path.chars();
            let drive = matches!(
                (chars.next(), chars.next(), chars.next()),
                (Some(letter), Some(':'), Some('/' | '\\')) if letter.is_ascii_alphabetic()
            );
            drive || path.starts_with("\\\\") || path.starts_with("//")
        }
        Platform::Posix => path.starts_with('/'),
    }
}

fn check_windows_syntax(path: &str, errors: &mut Vec<ValidationError>) {
    let mut chars = path.chars();
    if let (Some(letter), Some(':')) = (chars.next(), chars.next()) {
        if letter.is_ascii_alphabetic() && !matches!(chars.next(), Some('/' | '\\')) {
            errors.push(ValidationError::Syntax {
                detail: format!("drive prefix '{letter}:' must be followed by a separator"),
            });
        }
    }

    if (path.starts_with("\\\\") || path.starts_with("//"))
        && path
            .trim_start_matches(['/', '\\'])
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .count()
            < 2
    {
        errors.push(ValidationError::Syntax {
            detail: "UNC path needs a server and a share component".to_string(),
        });
    }

    let reserved = path.split(['/', '\\']).filter(|s| !s.is_empty()).find(|component| {
        let stem = component.split('.').next().unwrap_or("");
        RESERVED_DEVICE_NAMES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(stem))
    });
    if let Some(component) = reserved {
        errors.push(ValidationError::Syntax {
            detail: format!("reserved device name '{component}'"),
        });
    }
}
