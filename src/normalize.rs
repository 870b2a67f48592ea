//! Path normalization, joining, and sanitization
//!
//! Everything in this module is purely lexical: `.` and `..` segments are
//! resolved by string rules alone, with no filesystem lookups and no symlink
//! awareness. No function here can fail; each degrades to a best-effort
//! string.

use crate::os::{current_os, TargetOs};
use log::trace;

/// Options controlling [`normalize_path`].
///
/// Plain immutable data; defaults are resolved at the start of each call,
/// never from global state.
#[derive(Debug, Clone)]
pub struct NormalizationOptions {
    /// Target platform; `Auto` resolves to the host on every call.
    pub os: TargetOs,
    /// Replace backslashes with forward slashes in the result (default true).
    pub force_forward_slash: bool,
    /// Strip one trailing separator when the result is longer than a bare
    /// root (default true).
    pub remove_trailing_slash: bool,
    /// Fold the result to lowercase. `None` applies the platform default:
    /// folding on Windows, none on Posix.
    pub to_lowercase: Option<bool>,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            os: TargetOs::Auto,
            force_forward_slash: true,
            remove_trailing_slash: true,
            to_lowercase: None,
        }
    }
}

impl NormalizationOptions {
    /// Default options for a specific target platform.
    pub fn for_os(os: TargetOs) -> Self {
        Self {
            os,
            ..Self::default()
        }
    }
}

/// Normalize a path string for cross-platform consistency.
///
/// Splits on either separator, drops empty and `.` segments, and collapses a
/// preceding segment against a following `..` where possible. A `..` that has
/// nothing to pop (leading `..` on a relative path, or `..` directly under
/// the root of an absolute path) is kept literally. A relative path that
/// resolves to nothing denoted the current directory and is returned exactly
/// as the caller spelled it.
///
/// Normalization is idempotent under a fixed set of options.
///
/// # Examples
/// ```
/// use pathvet::{normalize_path, NormalizationOptions, TargetOs};
///
/// let options = NormalizationOptions::default();
/// assert_eq!(normalize_path("a//b\\c", &options), "a/b/c");
/// assert_eq!(normalize_path("path/./to/../file.txt", &options), "path/file.txt");
/// assert_eq!(normalize_path("../escape", &options), "../escape");
///
/// // Windows rules fold case by default.
/// let windows = NormalizationOptions::for_os(TargetOs::Windows);
/// assert_eq!(normalize_path("Logs\\Today", &windows), "logs/today");
/// ```
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> String {
    if path.is_empty() {
        return String::new();
    }
    let rules = options.os.resolve().rules();

    let is_absolute = path.starts_with(['/', '\\']);
    let has_trailing = path.len() > 1 && path.ends_with(['/', '\\']);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&prev) if prev != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    // The caller wrote some spelling of the current directory; hand it back
    // untouched.
    if !is_absolute && segments.is_empty() {
        return path.to_string();
    }

    let mut result = String::with_capacity(path.len());
    if is_absolute {
        result.push(rules.separator);
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            result.push(rules.separator);
        }
        result.push_str(segment);
    }
    if has_trailing && !segments.is_empty() {
        result.push(rules.separator);
    }

    if options.force_forward_slash {
        result = result.replace('\\', "/");
    }
    if options.remove_trailing_slash && result.len() > 1 && result.ends_with(['/', '\\']) {
        result.pop();
    }
    if options.to_lowercase.unwrap_or(rules.case_insensitive) {
        result = result.to_lowercase();
    }
    result
}

/// Join path segments with the host platform's separator.
///
/// Empty segments are skipped. No segments yields the current-directory
/// token; a single segment is returned unchanged, with no separator
/// insertion and no normalization side-effects.
///
/// # Examples
/// ```
/// use pathvet::join_paths;
///
/// let empty: [&str; 0] = [];
/// assert_eq!(join_paths(empty), ".");
/// assert_eq!(join_paths(["path"]), "path");
/// # #[cfg(not(windows))]
/// assert_eq!(join_paths(["path", "", "file.txt"]), "path/file.txt");
/// ```
pub fn join_paths<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [] => ".".to_string(),
        [single] => single.clone(),
        _ => {
            let separator = current_os().rules().separator;
            parts.join(&separator.to_string())
        }
    }
}

/// Compute the relative path that reaches `to` when starting from `from`.
///
/// Both inputs are normalized with default options first, then compared
/// segment by segment: the longest common leading prefix is dropped, one
/// `..` is emitted per remaining `from` segment, and the remaining `to`
/// segments follow. Identical inputs yield an empty string.
///
/// This function never reports traversal; constructing `..` hops is its
/// whole purpose. Callers who need traversal detection apply
/// [`is_path_traversal`] separately.
///
/// # Examples
/// ```
/// use pathvet::relative_path;
///
/// assert_eq!(relative_path("/path/to", "/path/to/file.txt"), "file.txt");
/// assert_eq!(relative_path("/path/to/dir", "/path/file.txt"), "../../file.txt");
/// assert_eq!(relative_path("/same", "/same"), "");
/// ```
pub fn relative_path(from: &str, to: &str) -> String {
    let options = NormalizationOptions::default();
    let from_norm = normalize_path(from, &options);
    let to_norm = normalize_path(to, &options);
    if from_norm == to_norm {
        return String::new();
    }

    let from_segments = lexical_segments(&from_norm);
    let to_segments = lexical_segments(&to_norm);

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut pieces: Vec<&str> = Vec::new();
    for _ in common..from_segments.len() {
        pieces.push("..");
    }
    pieces.extend(to_segments[common..].iter().copied());
    pieces.join("/")
}

fn lexical_segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Strip every character the target OS forbids, then normalize what is left
/// with that OS's default normalization options.
///
/// Never fails; an empty input (or one that sanitizes away entirely) comes
/// back as an empty string.
///
/// # Examples
/// ```
/// use pathvet::{sanitize_path, TargetOs};
///
/// assert_eq!(
///     sanitize_path("path/to/<file>:*.txt", TargetOs::Windows),
///     "path/to/file.txt"
/// );
/// assert_eq!(sanitize_path("file\0name", TargetOs::Posix), "filename");
/// assert_eq!(sanitize_path("", TargetOs::Posix), "");
/// ```
pub fn sanitize_path(path: &str, os: TargetOs) -> String {
    if path.is_empty() {
        return String::new();
    }
    let platform = os.resolve();
    let rules = platform.rules();

    let cleaned: String = path.chars().filter(|&c| !rules.is_illegal(c)).collect();
    let removed = path.chars().count() - cleaned.chars().count();
    if removed > 0 {
        trace!("sanitize dropped {removed} illegal character(s)");
    }

    normalize_path(&cleaned, &NormalizationOptions::for_os(platform.into()))
}

/// Whether a path still steps through a `..` segment after normalization.
///
/// Empty input is not traversal. Because the test runs on the normalized
/// form, `..` sequences hidden behind `.` segments are resolved before the
/// check, while `..` spellings inside a filename (`a..b`) do not count.
/// Contrast with the raw-substring policy applied by
/// [`validate_path`](crate::validate_path), which flags those too.
///
/// # Examples
/// ```
/// use pathvet::is_path_traversal;
///
/// assert!(is_path_traversal("path/./to/../../../file.txt"));
/// assert!(!is_path_traversal("./path/to/file.txt"));
/// assert!(!is_path_traversal(""));
/// ```
pub fn is_path_traversal(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let normalized = normalize_path(path, &NormalizationOptions::default());
    normalized
        .split(['/', '\\'])
        .any(|segment| segment == "..")
}
