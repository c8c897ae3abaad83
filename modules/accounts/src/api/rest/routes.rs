use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::service::{AddressesService, AuthService, UsersService};

use super::handlers::{addresses, auth, users};

pub fn register_routes(
    router: Router,
    users_svc: Arc<UsersService>,
    addresses_svc: Arc<AddressesService>,
    auth_svc: Arc<AuthService>,
) -> Router {
    let users_routes = Router::new()
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .layer(Extension(users_svc));

    let addresses_routes = Router::new()
        .route(
            "/api/addresses",
            get(addresses::list_addresses).post(addresses::create_address),
        )
        .route(
            "/api/addresses/{id}",
            get(addresses::get_address)
                .patch(addresses::update_address)
                .delete(addresses::delete_address),
        )
        .layer(Extension(addresses_svc));

    let auth_routes = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .layer(Extension(auth_svc));

    router
        .merge(users_routes)
        .merge(addresses_routes)
        .merge(auth_routes)
}
