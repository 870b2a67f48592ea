//! # pathvet
//!
//! OS-aware validation, normalization, and sanitization of filesystem path
//! strings.
//!
//! This crate vets untrusted path input against the syntactic rules of a
//! target platform (Windows or Posix) without ever touching the filesystem:
//! no existence checks, no symlink resolution, no globbing. Everything is
//! computed over plain strings, so every operation is pure, synchronous, and
//! safe to call from any number of threads.
//!
//! ## Features
//!
//! - **Validation**: ordered, accumulating checks for emptiness, length,
//!   illegal characters, `..` traversal, and absolute/relative policy
//! - **Normalization**: lexical `.`/`..` resolution, separator conversion,
//!   trailing-slash and case handling
//! - **Sanitization**: best-effort removal of characters the target OS forbids
//! - **Cross-platform**: validate against Windows rules from a Posix host and
//!   vice versa, or let `Auto` follow the runtime environment
//! - **Optional serde**: enable the `serde` feature to serialize findings
//!
//! ## Examples
//!
//! ### Vetting untrusted input
//!
//! ```rust
//! use pathvet::{validate_path, ErrorCode, TargetOs, ValidationOptions};
//!
//! let options = ValidationOptions::for_os(TargetOs::Windows);
//!
//! let ok = validate_path("uploads/report.txt", &options);
//! assert_eq!(ok.normalized(), Some("uploads/report.txt"));
//!
//! let bad = validate_path("../uploads/report?.txt", &options);
//! let codes: Vec<_> = bad.errors().iter().map(|e| e.code()).collect();
//! assert_eq!(codes, vec![ErrorCode::Traversal, ErrorCode::IllegalChar]);
//! ```
//!
//! ### Normalization and traversal detection
//!
//! ```rust
//! use pathvet::{is_path_traversal, normalize_path, NormalizationOptions};
//!
//! let options = NormalizationOptions::default();
//! assert_eq!(normalize_path("a//b/./c", &options), "a/b/c");
//!
//! // Resolution happens before the check, so hidden escapes are caught.
//! assert!(is_path_traversal("safe/./looking/../../../file.txt"));
//! assert!(!is_path_traversal("safe/looking/file.txt"));
//! ```
//!
//! ### Best-effort sanitization
//!
//! ```rust
//! use pathvet::{sanitize_path, TargetOs};
//!
//! let cleaned = sanitize_path("path/to/<file>:*.txt", TargetOs::Windows);
//! assert_eq!(cleaned, "path/to/file.txt");
//! ```

mod error;
mod normalize;
mod os;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use error::{ErrorCode, ValidationError, ValidationResult};
pub use normalize::{
    is_path_traversal, join_paths, normalize_path, relative_path, sanitize_path,
    NormalizationOptions,
};
pub use os::{current_os, Platform, RuleSet, TargetOs};
pub use validate::{is_valid_path, validate_path, ValidationOptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
