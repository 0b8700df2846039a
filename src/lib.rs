//! cimeta - Normalized build metadata from CI environments.
//!
//! cimeta identifies which Continuous Integration provider the current
//! build is running under from environment variables alone, and extracts
//! three normalized fields: build identifier, branch name, and commit hash.
//! Callers get provider-agnostic metadata without coupling to any single
//! vendor's variable naming.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Provider matching and field extraction
//! - [`env`] - Environment snapshots
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use cimeta::{detect, merge, BuildMeta, EnvSnapshot};
//!
//! let env: EnvSnapshot = [
//!     ("CIRCLECI", "true"),
//!     ("CIRCLE_BUILD_NUM", "128"),
//!     ("CIRCLE_BRANCH", "main"),
//!     ("CIRCLE_SHA1", "abc123"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let meta = detect(&env);
//! assert_eq!(meta.branch.as_deref(), Some("main"));
//!
//! // Caller-supplied values are preserved; detection only fills gaps.
//! let mut target = BuildMeta {
//!     branch: Some("release".to_string()),
//!     ..Default::default()
//! };
//! merge(&env, &mut target);
//! assert_eq!(target.branch.as_deref(), Some("release"));
//! assert_eq!(target.build.as_deref(), Some("128"));
//! ```

pub mod cli;
pub mod detection;
pub mod env;
pub mod error;

pub use detection::{detect, detect_provider, merge, BuildMeta, Provider};
pub use env::EnvSnapshot;
pub use error::{CimetaError, Result};
