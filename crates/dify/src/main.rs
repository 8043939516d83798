mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries the plan, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();

    let config_path = config::config_path();
    let props = dify_config::load_props(&config_path).await?;
    let context = config::create_plan_context();

    tracing::info!("Evaluating deployment plan from {}", config_path.display());

    let plan = match dify_plan::evaluate(props, &context) {
        Ok(plan) => plan,
        Err(e) => {
            for conflict in e.conflicts() {
                tracing::error!("Configuration conflict: {}", conflict);
            }
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
