//! Property test generators for path strings
//!
//! Strategies for property-based testing of validation and normalization,
//! covering well-formed paths, cross-platform separator mixes, and
//! security-relevant hostile inputs.

use proptest::prelude::*;

/// Windows reserved device names, excluded from "safe" generators so they
/// stay valid under Windows rules.
const RESERVED_STEMS: [&str; 22] = [
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

fn has_reserved_component(path: &str) -> bool {
    path.split(['/', '\\']).any(|component| {
        let stem = component.split('.').next().unwrap_or("");
        RESERVED_STEMS.contains(&stem.to_ascii_lowercase().as_str())
    })
}

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate valid filename components (no separators, safe characters)
    pub fn filename_component() -> impl Strategy<Value = String> {
        "[a-z0-9_][a-z0-9_.-]{0,30}[a-z0-9_]"
            .prop_filter("Non-empty filename", |s| !s.is_empty() && !s.contains(".."))
    }

    /// Generate common file extensions
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("rs".to_string()),
            Just("txt".to_string()),
            Just("md".to_string()),
            Just("json".to_string()),
            Just("toml".to_string()),
            Just("log".to_string()),
            Just("csv".to_string()),
            Just("".to_string()), // Files without extension
        ]
    }

    /// Generate a complete filename with extension
    pub fn filename() -> impl Strategy<Value = String> {
        (Self::filename_component(), Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate directory names
    pub fn directory_name() -> impl Strategy<Value = String> {
        "[a-z0-9_][a-z0-9_-]{0,20}[a-z0-9_]".prop_filter("Valid directory name", |s| {
            !s.is_empty() && !s.contains("..")
        })
    }

    /// Generate safe relative paths (no security issues)
    pub fn safe_relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::directory_name(), 0..=4)
            .prop_flat_map(|dirs| {
                Self::filename().prop_map(move |filename| {
                    let mut parts = dirs.clone();
                    parts.push(filename);
                    parts.join("/")
                })
            })
            .prop_filter("No reserved device names", |s| !has_reserved_component(s))
    }

    /// Generate absolute Posix-style paths
    pub fn absolute_path() -> impl Strategy<Value = String> {
        Self::safe_relative_path().prop_map(|path| format!("/{}", path))
    }

    /// Generate Windows-style paths (for cross-platform testing)
    pub fn windows_path() -> impl Strategy<Value = String> {
        Self::safe_relative_path().prop_map(|path| path.replace('/', "\\"))
    }

    /// Generate paths with double slashes (for normalization testing)
    pub fn path_with_double_slashes() -> impl Strategy<Value = String> {
        Self::safe_relative_path().prop_map(|path| path.replace('/', "//"))
    }

    /// Generate paths with `.` segments sprinkled in
    pub fn path_with_dot_segments() -> impl Strategy<Value = String> {
        Self::safe_relative_path().prop_map(|path| format!("./{}", path.replace('/', "/./")))
    }

    /// Generate paths carrying `..` sequences (for traversal testing)
    pub fn traversal_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("../etc/passwd".to_string()),
            Just("../../windows/system32".to_string()),
            Just("lib/../../../etc/passwd".to_string()),
            Just("..\\..\\windows\\system32".to_string()),
            Just("a/./b/../../..".to_string()),
            Self::safe_relative_path().prop_map(|p| format!("../{}", p)),
        ]
    }

    /// Generate paths with characters Windows forbids
    pub fn windows_illegal_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("file<script>".to_string()),
            Just("file|pipe".to_string()),
            Just("file?query".to_string()),
            Just("file*glob".to_string()),
            Just("file\"quote".to_string()),
            Just("drive:colon".to_string()),
            Just("file\x01control".to_string()),
            Just("file\x1fescape".to_string()),
        ]
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::safe_relative_path(),
            2 => Self::absolute_path(),
            2 => Self::windows_path(),
            2 => Self::path_with_double_slashes(),
            1 => Self::path_with_dot_segments(),
            1 => Self::traversal_path(),
            1 => Self::windows_illegal_path(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_path_traversal, validate_path, TargetOs, ValidationOptions};

    proptest! {
        #[test]
        fn safe_paths_validate_cleanly(
            path in PathGenerators::safe_relative_path()
        ) {
            let result = validate_path(&path, &ValidationOptions::for_os(TargetOs::Posix));
            prop_assert!(result.is_valid(), "expected {:?} to validate", path);
        }

        #[test]
        fn safe_paths_are_not_traversal(
            path in PathGenerators::safe_relative_path()
        ) {
            prop_assert!(!is_path_traversal(&path));
        }

        #[test]
        fn traversal_paths_contain_dot_dot(
            path in PathGenerators::traversal_path()
        ) {
            prop_assert!(path.contains(".."));
        }

        #[test]
        fn windows_illegal_paths_are_rejected_on_windows(
            path in PathGenerators::windows_illegal_path()
        ) {
            let result = validate_path(&path, &ValidationOptions::for_os(TargetOs::Windows));
            prop_assert!(!result.is_valid(), "expected {:?} to be rejected", path);
        }

        #[test]
        fn generators_dont_panic(
            _any_path in PathGenerators::any_path()
        ) {
            // This test just ensures our generators don't panic
        }
    }
}
