mod boot;
mod failover;
mod key;
mod order;
mod rdns;
mod server;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{error::ApiError, state::Db};

pub fn router() -> Router<Db> {
    Router::new()
        .route("/server", get(server::list))
        .route("/server/{ip}", get(server::get_one).post(server::rename))
        .route("/failover", get(failover::list))
        .route("/failover/{ip}", get(failover::get_one).post(failover::route))
        .route(
            "/rdns/{ip}",
            get(rdns::get_one)
                .put(rdns::create)
                .post(rdns::update)
                .delete(rdns::remove),
        )
        .route("/key", get(key::list).post(key::create))
        .route("/key/{fingerprint}", get(key::get_one).post(key::rename).delete(key::remove))
        .route(
            "/boot/{ip}/rescue",
            get(boot::rescue_get)
                .post(boot::rescue_activate)
                .delete(boot::rescue_deactivate),
        )
        .route("/boot/{ip}/rescue/last", get(boot::rescue_last))
        .route("/order/server/transaction", post(order::create).get(order::list))
        .route("/order/server/transaction/{id}", get(order::get_one))
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::not_found("NOT_FOUND", "Not found")
}
