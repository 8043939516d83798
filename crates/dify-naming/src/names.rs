use crate::builder::{NameBuilder, Segment};
use dify_config::constants::{
    MAX_CLUSTER_NAME, MAX_LOAD_BALANCER_NAME, MAX_REPLICATION_GROUP_ID, MAX_SECRET_NAME,
    MAX_SERVICE_NAME, MAX_SUBNET_GROUP_NAME, MAX_TASK_FAMILY,
};
use serde::Serialize;

/// Every identifier handed to the provisioning collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceNames {
    pub cluster: String,
    pub api_task_family: String,
    pub worker_task_family: String,
    pub web_task_family: String,
    pub api_service: String,
    pub worker_service: String,
    pub web_service: String,
    pub db_subnet_group: String,
    pub cache_subnet_group: String,
    pub replication_group_id: String,
    pub db_secret_name: String,
    pub app_secret_name: String,
    pub parameter_path: String,
    pub load_balancer: String,
    pub storage_bucket: String,
    pub access_log_bucket: String,
}

impl ResourceNames {
    pub fn derive(builder: &NameBuilder, account: &Segment, region: &Segment) -> Self {
        Self {
            cluster: builder.name("cluster", MAX_CLUSTER_NAME),
            api_task_family: builder.name("api", MAX_TASK_FAMILY),
            worker_task_family: builder.name("worker", MAX_TASK_FAMILY),
            web_task_family: builder.name("web", MAX_TASK_FAMILY),
            api_service: builder.name("api-service", MAX_SERVICE_NAME),
            worker_service: builder.name("worker-service", MAX_SERVICE_NAME),
            web_service: builder.name("web-service", MAX_SERVICE_NAME),
            db_subnet_group: builder.name("db-subnets", MAX_SUBNET_GROUP_NAME),
            cache_subnet_group: builder.name("cache-subnets", MAX_SUBNET_GROUP_NAME),
            replication_group_id: builder.name("redis", MAX_REPLICATION_GROUP_ID),
            db_secret_name: builder.name("db-credentials", MAX_SECRET_NAME),
            app_secret_name: builder.name("app-secrets", MAX_SECRET_NAME),
            parameter_path: builder.parameter_path("config"),
            load_balancer: builder.name("alb", MAX_LOAD_BALANCER_NAME),
            storage_bucket: builder.bucket("storage", account, region),
            access_log_bucket: builder.bucket("access-logs", account, region),
        }
    }
}
