use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

mod api;
mod config;
mod errors;
mod models;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use models::api_response::{action_headers, cors};
use services::{blockchain_service::SolanaRpcClient, wallet_service::StaticRecipient};
use state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(io::Error::other)?;
    let rpc = SolanaRpcClient::new(&config.network.rpc_url, config.rpc_timeout);

    info!(
        "using {} cluster via {}, default recipient {}",
        config.network.cluster,
        rpc.rpc_url(),
        config.default_recipient
    );

    let state = web::Data::new(AppState {
        network: Arc::new(rpc),
        recipients: Arc::new(StaticRecipient(config.default_recipient)),
        discovery: config.discovery.clone(),
        default_amount: config.default_amount,
    });
    let blockchain_id = config.network.blockchain_id.clone();

    info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::config)
            .wrap(cors())
            .wrap(action_headers(&blockchain_id))
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
