//! Provider matching and field extraction.
//!
//! The matcher walks the descriptor table in priority order, stops at the
//! first provider whose marker holds, and reads that provider's fields from
//! the snapshot. [`merge`] folds detected values into a caller-supplied
//! [`BuildMeta`] without clobbering values the caller already set.

use serde::{Deserialize, Serialize};

use super::providers::{Provider, ProviderDescriptor, PROVIDERS};
use crate::env::EnvSnapshot;

/// Normalized metadata for the current build.
///
/// A field is `None` when no provider matched, or when the matched provider
/// does not supply it (Bitbucket Pipelines has no build number). Detection
/// never produces `Some("")`. JSON serialization omits absent fields, so an
/// empty result serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMeta {
    /// Provider-assigned build identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    /// Branch name the build was triggered from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Commit hash the build is running against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

impl BuildMeta {
    /// Whether no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.build.is_none() && self.branch.is_none() && self.commit.is_none()
    }
}

/// Identify the active provider and extract its fields.
///
/// Descriptors are tried in priority order; the first whose marker holds
/// wins, even when a later provider's marker would also match. Returns
/// `None` when no marker is present.
pub fn detect_provider(env: &EnvSnapshot) -> Option<(Provider, BuildMeta)> {
    let descriptor = PROVIDERS.iter().find(|d| d.is_active(env))?;
    Some((descriptor.provider, extract_fields(descriptor, env)))
}

/// Extract normalized build metadata from the snapshot.
///
/// Returns an empty [`BuildMeta`] when no provider marker is present.
/// Absence of CI context is the normal non-CI case, not an error.
pub fn detect(env: &EnvSnapshot) -> BuildMeta {
    detect_provider(env)
        .map(|(_, meta)| meta)
        .unwrap_or_default()
}

/// Fold detected values into `target`, filling gaps only.
///
/// A target field already holding a non-empty value is preserved; a field
/// that is `None` or `Some("")` is overwritten with the detected value when
/// the detector produced one. Merging twice with the same snapshot is a
/// no-op the second time.
pub fn merge(env: &EnvSnapshot, target: &mut BuildMeta) {
    let detected = detect(env);
    merge_field(&mut target.build, detected.build);
    merge_field(&mut target.branch, detected.branch);
    merge_field(&mut target.commit, detected.commit);
}

fn extract_fields(descriptor: &ProviderDescriptor, env: &EnvSnapshot) -> BuildMeta {
    BuildMeta {
        build: extract(env, descriptor.build),
        branch: extract(env, descriptor.branch),
        commit: extract(env, descriptor.commit),
    }
}

/// `Some` only when the variable is present with a non-empty value.
fn extract(env: &EnvSnapshot, var: Option<&str>) -> Option<String> {
    var.and_then(|key| env.get(key))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// A caller value counts as set only when non-empty; `None` and `Some("")`
/// both mean "fill me from detection".
fn merge_field(target: &mut Option<String>, detected: Option<String>) {
    let meaningfully_set = target.as_deref().is_some_and(|value| !value.is_empty());
    if !meaningfully_set {
        if let Some(value) = detected {
            *target = Some(value);
        }
    }
}
