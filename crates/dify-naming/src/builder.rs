use crate::utils::{
    build_parameter_path, build_resource_name, build_scoped_name, pad_bucket_name, sanitize,
};
use dify_config::constants::{
    DEFAULT_ENVIRONMENT, MAX_BUCKET_NAME, MAX_CLUSTER_NAME, MAX_PARAMETER_PATH, RESOURCE_PREFIX,
};
use serde::Serialize;
use tracing::debug;

/// An account or region value that may not be known until the provisioning
/// collaborator resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Resolved(String),
    Deferred,
}

impl Segment {
    /// Treats missing, blank, and unresolved `${...}` placeholder values as deferred.
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() && !v.contains("${") => Segment::Resolved(v),
            _ => Segment::Deferred,
        }
    }

    pub fn resolved(&self) -> Option<&str> {
        match self {
            Segment::Resolved(v) => Some(v),
            Segment::Deferred => None,
        }
    }
}

/// Derives names for one environment. The effective environment and the
/// shared prefix are computed once, at construction.
#[derive(Debug, Clone)]
pub struct NameBuilder {
    environment: String,
    prefix: String,
}

impl NameBuilder {
    pub fn new(label: &str) -> Self {
        let mut environment = sanitize(label);
        if environment.is_empty() {
            debug!("Environment label {:?} sanitized to nothing, using {}", label, DEFAULT_ENVIRONMENT);
            environment = DEFAULT_ENVIRONMENT.to_string();
        }

        let prefix = build_resource_name(&[RESOURCE_PREFIX, environment.as_str()], MAX_CLUSTER_NAME);
        Self { environment, prefix }
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The prefix is shortened before `suffix` is, so names for different
    /// suffixes never collapse into one.
    pub fn name(&self, suffix: &str, max_length: usize) -> String {
        build_scoped_name(&self.prefix, &[suffix], max_length)
    }

    /// Resolved account and region segments are kept ahead of the prefix
    /// when the bucket ceiling forces truncation.
    pub fn bucket(&self, suffix: &str, account: &Segment, region: &Segment) -> String {
        let tail = [account.resolved(), region.resolved(), Some(suffix)];
        let tail = tail.into_iter().flatten().collect::<Vec<_>>();
        pad_bucket_name(build_scoped_name(&self.prefix, &tail, MAX_BUCKET_NAME))
    }

    pub fn parameter_path(&self, suffix: &str) -> String {
        build_parameter_path(&[self.prefix.as_str(), suffix], MAX_PARAMETER_PATH)
    }
}
