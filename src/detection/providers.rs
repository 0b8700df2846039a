//! The provider descriptor table.
//!
//! Each supported CI vendor is one row: a marker predicate deciding whether
//! the vendor's variables should be trusted, and the variable names its
//! build/branch/commit fields are read from.

use std::fmt;

use crate::env::EnvSnapshot;

/// A supported CI vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Jenkins,
    CircleCi,
    Travis,
    Codeship,
    BitbucketPipelines,
    Drone,
    Semaphore,
    GitLabCi,
    Buildkite,
}

impl Provider {
    /// Stable lowercase name, used in logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jenkins => "jenkins",
            Self::CircleCi => "circleci",
            Self::Travis => "travis",
            Self::Codeship => "codeship",
            Self::BitbucketPipelines => "bitbucket",
            Self::Drone => "drone",
            Self::Semaphore => "semaphore",
            Self::GitLabCi => "gitlab",
            Self::Buildkite => "buildkite",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker predicate deciding whether a provider's variables are trusted.
#[derive(Debug, Clone, Copy)]
pub enum Marker {
    /// The variable must be present with a non-empty value.
    Set(&'static str),
    /// The variable must equal a specific literal value.
    Equals(&'static str, &'static str),
}

impl Marker {
    /// Evaluate the predicate against a snapshot.
    pub fn matches(&self, env: &EnvSnapshot) -> bool {
        match *self {
            Self::Set(key) => env.is_set(key),
            Self::Equals(key, expected) => env.get(key) == Some(expected),
        }
    }
}

/// One row of the provider table.
///
/// Field entries name the environment variable the vendor publishes the
/// field under; `None` means the vendor has no such field (Bitbucket
/// Pipelines exposes no numeric build id).
#[derive(Debug, Clone, Copy)]
pub struct ProviderDescriptor {
    pub provider: Provider,
    pub marker: Marker,
    pub build: Option<&'static str>,
    pub branch: Option<&'static str>,
    pub commit: Option<&'static str>,
}

impl ProviderDescriptor {
    /// Whether this provider's variables should be trusted for the snapshot.
    pub fn is_active(&self, env: &EnvSnapshot) -> bool {
        self.marker.matches(env)
    }
}

/// The provider table, in priority order.
///
/// Order matters: Codeship and GitLab reuse generic `CI_*` names, and
/// several vendors export plain `BUILD_NUMBER`/`BRANCH_NAME`, so rows with
/// narrow vendor-specific markers sit ahead of rows whose variables overlap
/// with them. A plain `CI=true` matches nothing here.
pub static PROVIDERS: &[ProviderDescriptor] = &[
    ProviderDescriptor {
        provider: Provider::Jenkins,
        marker: Marker::Set("JENKINS_URL"),
        build: Some("BUILD_NUMBER"),
        branch: Some("GIT_BRANCH"),
        commit: Some("GIT_COMMIT"),
    },
    ProviderDescriptor {
        provider: Provider::CircleCi,
        marker: Marker::Set("CIRCLECI"),
        build: Some("CIRCLE_BUILD_NUM"),
        branch: Some("CIRCLE_BRANCH"),
        commit: Some("CIRCLE_SHA1"),
    },
    ProviderDescriptor {
        provider: Provider::Travis,
        marker: Marker::Set("TRAVIS"),
        build: Some("TRAVIS_BUILD_NUMBER"),
        branch: Some("TRAVIS_BRANCH"),
        commit: Some("TRAVIS_COMMIT"),
    },
    ProviderDescriptor {
        provider: Provider::Codeship,
        marker: Marker::Equals("CI_NAME", "codeship"),
        build: Some("CI_BUILD_NUMBER"),
        branch: Some("CI_BRANCH"),
        commit: Some("CI_COMMIT_ID"),
    },
    ProviderDescriptor {
        provider: Provider::BitbucketPipelines,
        marker: Marker::Set("BITBUCKET_COMMIT"),
        build: None,
        branch: Some("BITBUCKET_BRANCH"),
        commit: Some("BITBUCKET_COMMIT"),
    },
    ProviderDescriptor {
        provider: Provider::Drone,
        marker: Marker::Set("DRONE"),
        build: Some("DRONE_BUILD_NUMBER"),
        branch: Some("DRONE_BRANCH"),
        commit: Some("DRONE_COMMIT"),
    },
    ProviderDescriptor {
        provider: Provider::Semaphore,
        marker: Marker::Set("SEMAPHORE"),
        build: Some("SEMAPHORE_BUILD_NUMBER"),
        branch: Some("BRANCH_NAME"),
        commit: Some("REVISION"),
    },
    ProviderDescriptor {
        provider: Provider::GitLabCi,
        marker: Marker::Set("GITLAB_CI"),
        build: Some("CI_JOB_ID"),
        branch: Some("CI_COMMIT_REF_NAME"),
        commit: Some("CI_COMMIT_SHA"),
    },
    ProviderDescriptor {
        provider: Provider::Buildkite,
        marker: Marker::Set("BUILDKITE"),
        build: Some("BUILDKITE_BUILD_NUMBER"),
        branch: Some("BUILDKITE_BRANCH"),
        commit: Some("BUILDKITE_COMMIT"),
    },
];
