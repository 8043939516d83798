use dify_config::Target;
use thiserror::Error;

/// A contradictory combination of configuration options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    #[error("vpc_id {vpc_id} imports an existing VPC; use_nat_instance only applies to a newly created VPC")]
    ImportedVpcWithNatInstance { vpc_id: String },

    #[error("vpc_id {vpc_id} imports an existing VPC; vpc_isolated only applies to a newly created VPC")]
    ImportedVpcIsolated { vpc_id: String },

    #[error("use_cloud_front requires a public origin; internal_alb must be false")]
    CloudFrontWithInternalAlb,

    #[error("sub_domain {sub_domain} requires domain_name")]
    SubDomainWithoutDomain { sub_domain: String },

    #[error("setup_email requires domain_name")]
    EmailWithoutDomain,

    #[error(
        "secret names must not end with a hyphen followed by six characters, found: {}",
        .names.join(", ")
    )]
    ReservedSecretSuffix { names: Vec<String> },

    #[error("additional environment variable with an empty key")]
    EmptyEnvironmentKey,

    #[error("additional environment variable {key} is defined more than once for {target}")]
    DuplicateEnvironmentKey { key: String, target: Target },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "invalid configuration: {}",
    .conflicts.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
)]
pub struct ValidationError {
    pub conflicts: Vec<Conflict>,
}

impl ValidationError {
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
