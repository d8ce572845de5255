//! Application state and router wiring

use crate::handlers;
use crate::middleware::rate_limit::{create_rate_limiter, rate_limit_middleware};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use labarchive_common::{
    auth::{require_admin, require_auth, JwtManager},
    config::AppConfig,
    db::DbPool,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DbPool,
    pub jwt: JwtManager,
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    let users_routes = Router::new()
        .route("/", get(handlers::users::list_users))
        .route("/projects", post(handlers::users::create_user_project))
        .route("/{id}", get(handlers::users::get_user));

    let papers_routes = Router::new()
        .route(
            "/",
            get(handlers::papers::list_papers).post(handlers::papers::create_paper),
        )
        .route("/years", get(handlers::papers::years))
        .route("/authors", get(handlers::papers::author_options))
        .route("/new-id", get(handlers::papers::next_id))
        .route("/tags", get(handlers::papers::tags))
        .route("/search", get(handlers::papers::search))
        .route("/user", post(handlers::papers::create_user))
        .route(
            "/{id}",
            get(handlers::papers::get_paper)
                .patch(handlers::papers::update_paper)
                .delete(handlers::papers::delete_paper),
        );

    let projects_routes = Router::new()
        .route(
            "/",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route("/{id}", get(handlers::projects::get_project));

    // Admin dashboard sits behind the auth guard and the role check;
    // layers run outside-in, so require_auth is added last
    let admin_routes = Router::new()
        .route("/", get(handlers::admin::dashboard))
        .layer(axum_middleware::from_fn(require_admin))
        .layer(axum_middleware::from_fn_with_state(
            state.jwt.clone(),
            require_auth,
        ));

    let api_routes = Router::new()
        .nest("/users", users_routes)
        .nest("/papers", papers_routes)
        .nest("/projects", projects_routes)
        .nest("/admin", admin_routes)
        .route("/login", post(handlers::login::login));

    let mut app = Router::new()
        // Health endpoints (no auth)
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .nest("/api", api_routes);

    if state.config.rate_limit.enabled {
        let limiter = create_rate_limiter(
            state.config.rate_limit.requests_per_second,
            state.config.rate_limit.burst,
        );
        app = app.layer(axum_middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .with_state(state)
}
