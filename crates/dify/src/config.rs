use dify_config::constants;
use dify_plan::PlanContext;
use std::path::PathBuf;

/// First CLI argument, then `DIFY_CONFIG_PATH`, then `dify.toml`.
pub fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var(constants::ENV_CONFIG_PATH).ok())
        .unwrap_or_else(|| constants::DEFAULT_CONFIG_PATH.into())
        .into()
}

pub fn create_plan_context() -> PlanContext {
    PlanContext::new(
        env_with_fallback(constants::ENV_ACCOUNT, constants::ENV_FALLBACK_ACCOUNT),
        env_with_fallback(constants::ENV_REGION, constants::ENV_FALLBACK_REGION),
    )
}

fn env_with_fallback(primary: &str, fallback: &str) -> Option<String> {
    first_present(std::env::var(primary).ok(), || std::env::var(fallback).ok())
}

// A blank primary value counts as unset.
fn first_present(
    primary: Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    primary
        .filter(|v| !v.trim().is_empty())
        .or_else(fallback)
}
