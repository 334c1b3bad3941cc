use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use site_dispatch_core::contract::{InvocationContext, ResponseEnvelope};
use site_dispatch_lambda::adapters::asset_store::FsAssetStore;
use site_dispatch_lambda::config::HandlerConfig;
use site_dispatch_lambda::handlers::site::handle_site_event;
use tracing::info;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &HandlerConfig,
    assets: &FsAssetStore,
) -> Result<ResponseEnvelope, Error> {
    let context = InvocationContext::new(event.context.request_id);
    Ok(handle_site_event(&event.payload, &context, config, assets, Utc::now()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    lambda_runtime::tracing::init_default_subscriber();

    let config = HandlerConfig::from_env();
    let assets = FsAssetStore::new(config.asset_path.clone());
    info!(
        environment = %config.environment,
        asset_path = %assets.path().display(),
        "site dispatcher configured"
    );

    let config = &config;
    let assets = &assets;
    lambda_runtime::run(service_fn(move |event| handle_request(event, config, assets))).await
}
