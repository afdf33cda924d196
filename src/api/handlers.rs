use actix_web::{get, options, post, web, HttpRequest, HttpResponse};
use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    errors::CustomError,
    models::{
        action::ActionPostResponse, api_response::success_response, transfer::TransferRequest,
    },
    services::{
        blockchain_service::fetch_snapshot,
        discovery_service::DiscoveryService,
        transaction_service::TransactionService,
        validation_service::{ActionQuery, ValidationService},
    },
    state::AppState,
};

pub const DONATE_PATH: &str = "/api/donate";

fn parse_query(req: &HttpRequest) -> Result<ActionQuery, CustomError> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|pairs| ActionQuery::from_pairs(pairs.into_inner()))
        .map_err(|e| {
            warn!("unreadable query string {:?}: {}", req.query_string(), e);
            CustomError::UnknownError
        })
}

#[get("/donate")]
async fn describe_donation(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
    let query = parse_query(&req)?;
    let params =
        ValidationService::validate_query(&query, state.recipients.as_ref(), state.default_amount)
            .await
            .map_err(|e| {
                warn!("rejected discovery request: {:?}", e);
                e
            })?;

    let base_url = {
        let info = req.connection_info();
        format!("{}://{}{}", info.scheme(), info.host(), req.path())
    };

    Ok(success_response(DiscoveryService::describe(
        &state.discovery,
        &base_url,
        &params.recipient,
    )))
}

// Answers browser preflights and wallets probing the endpoint alike; the
// CORS headers come from the app-wide default header set.
#[options("/donate")]
async fn donation_preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[post("/donate")]
async fn create_donation_transaction(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
    let request_id = Uuid::new_v4();

    match build_donation(&req, &body, &state).await {
        Ok(response) => {
            info!("[{}] built transaction: {}", request_id, response.message);
            Ok(success_response(response))
        }
        Err(e @ CustomError::NetworkUnavailable(_)) => {
            error!("[{}] {:?}", request_id, e);
            Err(e)
        }
        Err(e) => {
            warn!("[{}] rejected: {:?}", request_id, e);
            Err(e)
        }
    }
}

async fn build_donation(
    req: &HttpRequest,
    body: &[u8],
    state: &AppState,
) -> Result<ActionPostResponse, CustomError> {
    let query = parse_query(req)?;
    let params =
        ValidationService::validate_query(&query, state.recipients.as_ref(), state.default_amount)
            .await?;
    let sender = ValidationService::validate_account(body)?;
    let transfer = TransferRequest::new(sender, params);

    let snapshot = fetch_snapshot(state.network.as_ref()).await?;
    debug!(
        "blockhash {} valid until height {}, rent minimum {} (read {})",
        snapshot.blockhash,
        snapshot.last_valid_block_height,
        snapshot.min_rent_exempt_lamports,
        snapshot.fetched_at.to_rfc3339()
    );
    let tx = TransactionService::build(&transfer, &snapshot)?;

    TransactionService::serialize(tx, transfer.describe())
}

#[get("/actions.json")]
async fn actions_json() -> HttpResponse {
    success_response(DiscoveryService::actions_json(DONATE_PATH))
}
