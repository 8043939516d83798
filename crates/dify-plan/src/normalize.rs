use dify_config::constants;
use dify_config::{DifyProps, EnvironmentVariable};
use serde::Serialize;

/// `DifyProps` with every default applied. Downstream code never sees an
/// unset option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProps {
    pub environment: String,

    pub domain_name: Option<String>,
    pub sub_domain: Option<String>,
    pub hosted_zone_id: Option<String>,

    pub vpc_id: Option<String>,
    pub vpc_isolated: bool,
    pub use_nat_instance: bool,

    pub use_cloud_front: bool,
    pub internal_alb: bool,
    pub allowed_ipv4_cidrs: Vec<String>,
    pub allowed_ipv6_cidrs: Vec<String>,

    pub setup_email: bool,

    pub is_redis_multi_az: bool,
    pub enable_aurora_scales_to_zero: bool,
    pub use_fargate_spot: bool,

    pub dify_image_tag: String,
    pub dify_sandbox_image_tag: String,
    pub dify_plugin_daemon_image_tag: String,
    pub custom_ecr_repository_name: Option<String>,

    pub allow_any_syscalls: bool,
    pub auto_migration: bool,

    pub additional_environment_variables: Vec<EnvironmentVariable>,
}

// Blank strings count as unset.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

impl ResolvedProps {
    pub fn from_props(props: DifyProps) -> Self {
        Self {
            environment: props.environment.unwrap_or_default(),

            domain_name: present(props.domain_name),
            sub_domain: present(props.sub_domain),
            hosted_zone_id: present(props.hosted_zone_id),

            vpc_id: present(props.vpc_id),
            vpc_isolated: props.vpc_isolated.unwrap_or(false),
            use_nat_instance: props.use_nat_instance.unwrap_or(false),

            use_cloud_front: props
                .use_cloud_front
                .unwrap_or(constants::DEFAULT_USE_CLOUD_FRONT),
            internal_alb: props.internal_alb.unwrap_or(false),
            allowed_ipv4_cidrs: props
                .allowed_ipv4_cidrs
                .unwrap_or_else(|| vec![constants::DEFAULT_IPV4_CIDR.to_string()]),
            allowed_ipv6_cidrs: props
                .allowed_ipv6_cidrs
                .unwrap_or_else(|| vec![constants::DEFAULT_IPV6_CIDR.to_string()]),

            setup_email: props.setup_email.unwrap_or(false),

            is_redis_multi_az: props
                .is_redis_multi_az
                .unwrap_or(constants::DEFAULT_REDIS_MULTI_AZ),
            enable_aurora_scales_to_zero: props.enable_aurora_scales_to_zero.unwrap_or(false),
            use_fargate_spot: props.use_fargate_spot.unwrap_or(false),

            dify_image_tag: or_default(props.dify_image_tag, constants::DEFAULT_DIFY_IMAGE_TAG),
            dify_sandbox_image_tag: or_default(
                props.dify_sandbox_image_tag,
                constants::DEFAULT_SANDBOX_IMAGE_TAG,
            ),
            dify_plugin_daemon_image_tag: or_default(
                props.dify_plugin_daemon_image_tag,
                constants::DEFAULT_PLUGIN_DAEMON_IMAGE_TAG,
            ),
            custom_ecr_repository_name: present(props.custom_ecr_repository_name),

            allow_any_syscalls: props.allow_any_syscalls.unwrap_or(false),
            auto_migration: props
                .auto_migration
                .unwrap_or(constants::DEFAULT_AUTO_MIGRATION),

            additional_environment_variables: props.additional_environment_variables,
        }
    }

    /// Public hostname: `sub_domain.domain_name`, or the bare domain.
    pub fn fqdn(&self) -> Option<String> {
        match (&self.sub_domain, &self.domain_name) {
            (Some(sub), Some(domain)) => Some(format!("{sub}.{domain}")),
            (None, Some(domain)) => Some(domain.clone()),
            _ => None,
        }
    }
}
