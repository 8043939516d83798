use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Operator-supplied deployment options. Every field is optional; defaults
/// are applied later by a single normalization pass.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DifyProps {
    pub environment: Option<String>,

    pub domain_name: Option<String>,
    pub sub_domain: Option<String>,
    pub hosted_zone_id: Option<String>,

    pub vpc_id: Option<String>,
    pub vpc_isolated: Option<bool>,
    pub use_nat_instance: Option<bool>,

    pub use_cloud_front: Option<bool>,
    pub internal_alb: Option<bool>,
    pub allowed_ipv4_cidrs: Option<Vec<String>>,
    pub allowed_ipv6_cidrs: Option<Vec<String>>,

    pub setup_email: Option<bool>,

    pub is_redis_multi_az: Option<bool>,
    pub enable_aurora_scales_to_zero: Option<bool>,
    pub use_fargate_spot: Option<bool>,

    pub dify_image_tag: Option<String>,
    pub dify_sandbox_image_tag: Option<String>,
    pub dify_plugin_daemon_image_tag: Option<String>,
    pub custom_ecr_repository_name: Option<String>,

    pub allow_any_syscalls: Option<bool>,
    pub auto_migration: Option<bool>,

    pub additional_environment_variables: Vec<EnvironmentVariable>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentVariable {
    pub key: String,
    pub value: EnvValue,

    /// Containers receiving the variable. `None` means all of them.
    #[serde(default)]
    pub targets: Option<Vec<Target>>,
}

// serde has no per-variant deny_unknown_fields, so the untagged
// references are their own structs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum EnvValue {
    Plain(String),
    Secret(SecretRef),
    Parameter(ParameterRef),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SecretRef {
    pub secret_name: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParameterRef {
    pub parameter_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Web,
    Api,
    Worker,
    Sandbox,
    PluginDaemon,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::Web,
        Target::Api,
        Target::Worker,
        Target::Sandbox,
        Target::PluginDaemon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Web => "web",
            Target::Api => "api",
            Target::Worker => "worker",
            Target::Sandbox => "sandbox",
            Target::PluginDaemon => "plugin_daemon",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl EnvironmentVariable {
    pub fn applies_to(&self, target: Target) -> bool {
        self.targets
            .as_ref()
            .is_none_or(|targets| targets.contains(&target))
    }
}

pub fn parse_props(content: &str, path: &Path) -> Result<DifyProps> {
    toml::from_str(content).map_err(|source| ConfigError::Toml {
        path: path.display().to_string(),
        source,
    })
}

pub async fn load_props(path: &Path) -> Result<DifyProps> {
    if !path.exists() {
        info!("No {} found, using default configuration", path.display());
        return Ok(DifyProps::default());
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

    parse_props(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> DifyProps {
        parse_props(toml_str, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let props = parse("");
        assert_eq!(props, DifyProps::default());
        assert!(props.additional_environment_variables.is_empty());
    }

    #[test]
    fn test_parse_network_and_ingress() {
        let props = parse(
            r#"
environment = "staging-2"
domain_name = "example.com"
sub_domain = "dify"
vpc_id = "vpc-0123456789abcdef0"
use_cloud_front = false
internal_alb = true
allowed_ipv4_cidrs = ["10.0.0.0/8"]
"#,
        );
        assert_eq!(props.environment.as_deref(), Some("staging-2"));
        assert_eq!(props.domain_name.as_deref(), Some("example.com"));
        assert_eq!(props.sub_domain.as_deref(), Some("dify"));
        assert_eq!(props.vpc_id.as_deref(), Some("vpc-0123456789abcdef0"));
        assert_eq!(props.use_cloud_front, Some(false));
        assert_eq!(props.internal_alb, Some(true));
        assert_eq!(
            props.allowed_ipv4_cidrs,
            Some(vec!["10.0.0.0/8".to_string()])
        );
        assert!(props.use_nat_instance.is_none());
    }

    #[test]
    fn test_parse_environment_variables() {
        let props = parse(
            r#"
[[additional_environment_variables]]
key = "LOG_LEVEL"
value = "DEBUG"

[[additional_environment_variables]]
key = "OPENAI_API_KEY"
value = { secret_name = "openai", field = "key" }
targets = ["api", "worker"]

[[additional_environment_variables]]
key = "FEATURE_FLAGS"
value = { parameter_name = "/dify/flags" }
targets = ["plugin_daemon"]
"#,
        );
        let vars = &props.additional_environment_variables;
        assert_eq!(vars.len(), 3);

        assert_eq!(vars[0].value, EnvValue::Plain("DEBUG".to_string()));
        assert!(vars[0].applies_to(Target::Sandbox));

        assert_eq!(
            vars[1].value,
            EnvValue::Secret(SecretRef {
                secret_name: "openai".to_string(),
                field: Some("key".to_string()),
            })
        );
        assert!(vars[1].applies_to(Target::Api));
        assert!(!vars[1].applies_to(Target::Web));

        assert_eq!(
            vars[2].value,
            EnvValue::Parameter(ParameterRef {
                parameter_name: "/dify/flags".to_string(),
            })
        );
        assert!(vars[2].applies_to(Target::PluginDaemon));
    }

    #[test]
    fn test_mixed_secret_and_parameter_rejected() {
        let result = parse_props(
            r#"
[[additional_environment_variables]]
key = "AMBIGUOUS"
value = { secret_name = "x", parameter_name = "y" }
"#,
            Path::new("dify.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = parse_props("use_cloudfront = true", Path::new("dify.toml"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("dify.toml"));
    }

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let props = load_props(&dir.path().join("dify.toml")).await.unwrap();
        assert_eq!(props, DifyProps::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dify.toml");
        std::fs::write(&path, "environment = \"dev\"\nsetup_email = true\n").unwrap();

        let props = load_props(&path).await.unwrap();
        assert_eq!(props.environment.as_deref(), Some("dev"));
        assert_eq!(props.setup_email, Some(true));
    }
}
