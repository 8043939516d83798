pub const RESOURCE_PREFIX: &str = "dify";
pub const DEFAULT_ENVIRONMENT: &str = "env";
pub const DEFAULT_CONFIG_PATH: &str = "dify.toml";

pub const DEFAULT_DIFY_IMAGE_TAG: &str = "latest";
pub const DEFAULT_SANDBOX_IMAGE_TAG: &str = "latest";
pub const DEFAULT_PLUGIN_DAEMON_IMAGE_TAG: &str = "main-local";

pub const DEFAULT_USE_CLOUD_FRONT: bool = true;
pub const DEFAULT_REDIS_MULTI_AZ: bool = true;
pub const DEFAULT_AUTO_MIGRATION: bool = true;
pub const DEFAULT_IPV4_CIDR: &str = "0.0.0.0/0";
pub const DEFAULT_IPV6_CIDR: &str = "::/0";

// Identifier ceilings per resource type.
pub const MAX_CLUSTER_NAME: usize = 255;
pub const MAX_TASK_FAMILY: usize = 255;
pub const MAX_SERVICE_NAME: usize = 255;
pub const MAX_SUBNET_GROUP_NAME: usize = 255;
pub const MAX_REPLICATION_GROUP_ID: usize = 40;
pub const MAX_SECRET_NAME: usize = 512;
pub const MAX_PARAMETER_PATH: usize = 1011;
pub const MAX_LOAD_BALANCER_NAME: usize = 32;

pub const MIN_BUCKET_NAME: usize = 3;
pub const MAX_BUCKET_NAME: usize = 63;
pub const BUCKET_FILLER: char = '0';

/// Length of the random suffix the secret store appends to secret names.
pub const SECRET_SUFFIX_LEN: usize = 6;

pub const ENV_CONFIG_PATH: &str = "DIFY_CONFIG_PATH";
pub const ENV_ACCOUNT: &str = "DIFY_ACCOUNT";
pub const ENV_REGION: &str = "DIFY_REGION";
pub const ENV_FALLBACK_ACCOUNT: &str = "CDK_DEFAULT_ACCOUNT";
pub const ENV_FALLBACK_REGION: &str = "CDK_DEFAULT_REGION";
