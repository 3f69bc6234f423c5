use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aws_apigateway_local::apigateway::{server, state::ApiGatewayState};

#[derive(Parser)]
#[command(name = "aws-apigateway-local", about = "Local Amazon API Gateway management service")]
struct Args {
    #[arg(long, default_value = "4567")]
    port: u16,
    #[arg(long, default_value = "us-east-1")]
    region: String,
    #[arg(long, default_value = "123456789012")]
    account_id: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = Arc::new(ApiGatewayState::new(args.account_id, args.region.clone()));
    let app = server::create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .unwrap();
    tracing::info!(port = args.port, region = %args.region, "aws-apigateway-local listening");
    axum::serve(listener, app).await.unwrap();
}
