use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use image_relay::config::Config;
use image_relay::llm::OpenAiClient;
use image_relay::server::{auth, json_config, routes, AppState};
use std::sync::Arc;
use std::{env, process};
use tracing::info;

const USAGE: &str = "usage: ./image-relay [config file]";

fn get_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => None,
        2 => Some(args[1].clone()),
        _ => {
            println!("{USAGE}");
            process::exit(1);
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_file = get_args();
    let config =
        Config::load(config_file.as_deref()).context("failed to load configuration")?;

    let client = Arc::new(OpenAiClient::new(&config));
    let state = web::Data::new(AppState::new(&config, client));

    info!(
        "relaying /analyze-image requests for model {} to {}",
        config.model, config.openai_endpoint
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config())
            .wrap(middleware::from_fn(auth::bearer_auth))
            .wrap(middleware::Logger::default())
            .service(routes::analyze_image)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
