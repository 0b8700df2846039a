//! CI provider detection.
//!
//! Identifies which CI vendor the current process is running under from
//! environment variables alone, and extracts normalized build metadata
//! (build identifier, branch name, commit hash). Detection is table-driven:
//! a fixed priority-ordered list of provider descriptors, each a marker
//! predicate plus the variable names the vendor publishes its fields under.

pub mod matcher;
pub mod providers;

pub use matcher::{detect, detect_provider, merge, BuildMeta};
pub use providers::{Marker, Provider, ProviderDescriptor, PROVIDERS};
