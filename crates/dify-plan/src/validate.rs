use crate::error::{Conflict, Result, ValidationError};
use crate::normalize::ResolvedProps;
use dify_config::constants::SECRET_SUFFIX_LEN;
use dify_config::{EnvValue, Target};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// A non-fatal finding surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    UnencryptedPublicEndpoint,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::UnencryptedPublicEndpoint => {
                "the public load balancer serves plain HTTP; enable use_cloud_front or set domain_name to encrypt traffic"
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Checks every cross-field rule and reports all violations together.
pub fn validate(props: &ResolvedProps) -> Result<Vec<Advisory>> {
    let mut conflicts = Vec::new();

    if let Some(vpc_id) = &props.vpc_id {
        if props.use_nat_instance {
            conflicts.push(Conflict::ImportedVpcWithNatInstance {
                vpc_id: vpc_id.clone(),
            });
        }
        if props.vpc_isolated {
            conflicts.push(Conflict::ImportedVpcIsolated {
                vpc_id: vpc_id.clone(),
            });
        }
    }

    if props.use_cloud_front && props.internal_alb {
        conflicts.push(Conflict::CloudFrontWithInternalAlb);
    }

    if props.domain_name.is_none() {
        if let Some(sub_domain) = &props.sub_domain {
            conflicts.push(Conflict::SubDomainWithoutDomain {
                sub_domain: sub_domain.clone(),
            });
        }
        if props.setup_email {
            conflicts.push(Conflict::EmailWithoutDomain);
        }
    }

    let reserved = reserved_secret_names(props);
    if !reserved.is_empty() {
        conflicts.push(Conflict::ReservedSecretSuffix { names: reserved });
    }

    conflicts.extend(environment_key_conflicts(props));

    if !conflicts.is_empty() {
        return Err(ValidationError { conflicts });
    }

    let mut advisories = Vec::new();
    if !props.use_cloud_front && props.domain_name.is_none() && !props.internal_alb {
        advisories.push(Advisory::UnencryptedPublicEndpoint);
    }

    Ok(advisories)
}

/// The secret store appends `-XXXXXX` to generated names, so a name already
/// ending that way resolves ambiguously.
fn has_reserved_suffix(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() <= SECRET_SUFFIX_LEN {
        return false;
    }

    let (head, tail) = bytes.split_at(bytes.len() - SECRET_SUFFIX_LEN);
    head.last() == Some(&b'-') && tail.iter().all(u8::is_ascii_alphanumeric)
}

fn reserved_secret_names(props: &ResolvedProps) -> Vec<String> {
    let mut seen = HashSet::new();
    props
        .additional_environment_variables
        .iter()
        .filter_map(|var| match &var.value {
            EnvValue::Secret(secret) => Some(&secret.secret_name),
            _ => None,
        })
        .filter(|name| has_reserved_suffix(name))
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

fn environment_key_conflicts(props: &ResolvedProps) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let mut reported = BTreeSet::new();

    if props
        .additional_environment_variables
        .iter()
        .any(|var| var.key.trim().is_empty())
    {
        conflicts.push(Conflict::EmptyEnvironmentKey);
    }

    for target in Target::ALL {
        let mut keys = HashSet::new();
        for var in &props.additional_environment_variables {
            if var.key.trim().is_empty() || !var.applies_to(target) {
                continue;
            }
            if !keys.insert(var.key.as_str()) && reported.insert(var.key.clone()) {
                conflicts.push(Conflict::DuplicateEnvironmentKey {
                    key: var.key.clone(),
                    target,
                });
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use dify_config::{DifyProps, EnvironmentVariable, SecretRef};

    fn resolve(props: DifyProps) -> ResolvedProps {
        ResolvedProps::from_props(props)
    }

    fn secret(key: &str, secret_name: &str) -> EnvironmentVariable {
        EnvironmentVariable {
            key: key.to_string(),
            value: EnvValue::Secret(SecretRef {
                secret_name: secret_name.to_string(),
                field: None,
            }),
            targets: None,
        }
    }

    fn plain(key: &str, targets: Option<Vec<Target>>) -> EnvironmentVariable {
        EnvironmentVariable {
            key: key.to_string(),
            value: EnvValue::Plain("value".to_string()),
            targets,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let advisories = validate(&resolve(DifyProps::default())).unwrap();
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_imported_vpc_with_nat_instance() {
        let err = validate(&resolve(DifyProps {
            vpc_id: Some("vpc-0abc".to_string()),
            use_nat_instance: Some(true),
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(
            err.conflicts(),
            &[Conflict::ImportedVpcWithNatInstance {
                vpc_id: "vpc-0abc".to_string()
            }]
        );
        assert!(err.to_string().contains("vpc-0abc"));
    }

    #[test]
    fn test_imported_vpc_isolated() {
        let err = validate(&resolve(DifyProps {
            vpc_id: Some("vpc-0abc".to_string()),
            vpc_isolated: Some(true),
            ..Default::default()
        }))
        .unwrap_err();

        assert!(matches!(
            err.conflicts(),
            [Conflict::ImportedVpcIsolated { .. }]
        ));
    }

    #[test]
    fn test_cloud_front_with_internal_alb() {
        let err = validate(&resolve(DifyProps {
            use_cloud_front: Some(true),
            internal_alb: Some(true),
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(err.conflicts(), &[Conflict::CloudFrontWithInternalAlb]);
    }

    #[test]
    fn test_sub_domain_without_domain() {
        let err = validate(&resolve(DifyProps {
            sub_domain: Some("app".to_string()),
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(
            err.conflicts(),
            &[Conflict::SubDomainWithoutDomain {
                sub_domain: "app".to_string()
            }]
        );
    }

    #[test]
    fn test_email_without_domain() {
        let err = validate(&resolve(DifyProps {
            setup_email: Some(true),
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(err.conflicts(), &[Conflict::EmailWithoutDomain]);
    }

    #[test]
    fn test_email_with_domain() {
        let advisories = validate(&resolve(DifyProps {
            setup_email: Some(true),
            domain_name: Some("example.com".to_string()),
            sub_domain: Some("app".to_string()),
            ..Default::default()
        }))
        .unwrap();
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_reserved_secret_suffix_lists_every_name() {
        let err = validate(&resolve(DifyProps {
            additional_environment_variables: vec![
                secret("A", "mysecret-ab12cd"),
                secret("B", "other-secret-name"),
                secret("C", "prod-XY98zz"),
                secret("D", "mysecret-ab12cd"),
            ],
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(
            err.conflicts(),
            &[Conflict::ReservedSecretSuffix {
                names: vec!["mysecret-ab12cd".to_string(), "prod-XY98zz".to_string()]
            }]
        );
        let message = err.to_string();
        assert!(message.contains("mysecret-ab12cd"));
        assert!(message.contains("prod-XY98zz"));
    }

    #[test]
    fn test_has_reserved_suffix() {
        assert!(has_reserved_suffix("mysecret-ab12cd"));
        assert!(has_reserved_suffix("a-ABCDEF"));
        assert!(!has_reserved_suffix("abcdef"));
        assert!(!has_reserved_suffix("mysecret-ab12c"));
        assert!(!has_reserved_suffix("mysecret-ab12cde"));
        assert!(!has_reserved_suffix("mysecret_ab12cd"));
        assert!(!has_reserved_suffix("mysecret-ab-12c"));
    }

    #[test]
    fn test_conflicts_are_collected_independently() {
        let err = validate(&resolve(DifyProps {
            vpc_id: Some("vpc-1".to_string()),
            use_nat_instance: Some(true),
            internal_alb: Some(true),
            sub_domain: Some("app".to_string()),
            setup_email: Some(true),
            additional_environment_variables: vec![secret("A", "db-123456")],
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(err.conflicts().len(), 5);
    }

    #[test]
    fn test_duplicate_environment_key() {
        let err = validate(&resolve(DifyProps {
            additional_environment_variables: vec![
                plain("LOG_LEVEL", Some(vec![Target::Api])),
                plain("LOG_LEVEL", Some(vec![Target::Web])),
                plain("TIMEOUT", None),
                plain("TIMEOUT", Some(vec![Target::Worker])),
            ],
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(
            err.conflicts(),
            &[Conflict::DuplicateEnvironmentKey {
                key: "TIMEOUT".to_string(),
                target: Target::Worker,
            }]
        );
    }

    #[test]
    fn test_empty_environment_key() {
        let err = validate(&resolve(DifyProps {
            additional_environment_variables: vec![plain(" ", None)],
            ..Default::default()
        }))
        .unwrap_err();

        assert_eq!(err.conflicts(), &[Conflict::EmptyEnvironmentKey]);
    }

    #[test]
    fn test_unencrypted_public_endpoint_advisory() {
        let advisories = validate(&resolve(DifyProps {
            use_cloud_front: Some(false),
            internal_alb: Some(false),
            ..Default::default()
        }))
        .unwrap();

        assert_eq!(advisories, vec![Advisory::UnencryptedPublicEndpoint]);
    }

    #[test]
    fn test_no_advisory_for_internal_or_custom_domain() {
        let internal = validate(&resolve(DifyProps {
            use_cloud_front: Some(false),
            internal_alb: Some(true),
            ..Default::default()
        }))
        .unwrap();
        assert!(internal.is_empty());

        let with_domain = validate(&resolve(DifyProps {
            use_cloud_front: Some(false),
            domain_name: Some("example.com".to_string()),
            ..Default::default()
        }))
        .unwrap();
        assert!(with_domain.is_empty());
    }
}
