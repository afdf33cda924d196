use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::describe_donation)
            .service(handlers::donation_preflight)
            .service(handlers::create_donation_transaction),
    )
    .service(handlers::actions_json);
}
