use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::{HeaderName, Request, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{middlewares::admin_auth_middleware, state::AppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Uploads may carry the cover as a data URL.
const UPLOAD_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn init_router(app_state: AppState) -> Router {
    let state = Arc::new(app_state);

    let app = Router::new()
        .route("/", get(crate::controllers::home::index))
        .route("/health", get(crate::controllers::home::health))
        .route("/genres", get(crate::controllers::home::genres));

    let comics_route = Router::new()
        .route("/", get(crate::controllers::comics::index))
        .route("/{id}", get(crate::controllers::comics::show))
        .route(
            "/{id}/chapters/{number}",
            get(crate::controllers::comics::read),
        );

    let recommendations_route = Router::new().route(
        "/",
        get(crate::controllers::recommendations::index)
            .post(crate::controllers::recommendations::store)
            .delete(crate::controllers::recommendations::destroy),
    );

    let auth_route = Router::new()
        .route("/session", get(crate::controllers::auth::show))
        .route("/logout", post(crate::controllers::auth::destroy))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .route("/", post(crate::controllers::auth::store));

    let admin_route = Router::new()
        .route(
            "/comics",
            get(crate::controllers::admin::index).post(crate::controllers::admin::store),
        )
        .route(
            "/comics/{id}",
            get(crate::controllers::admin::edit)
                .put(crate::controllers::admin::update)
                .delete(crate::controllers::admin::destroy),
        )
        .route(
            "/comics/{id}/chapters",
            post(crate::controllers::admin::add_chapter),
        )
        .route(
            "/comics/{id}/chapters/{chapter_id}",
            delete(crate::controllers::admin::remove_chapter),
        )
        .route(
            "/comics/{id}/genres/{genre}",
            put(crate::controllers::admin::toggle_genre),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    let x_request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let request_id_middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            x_request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|val| val.to_str().ok())
                    .unwrap_or("");
                let user_agent = request
                    .headers()
                    .get(header::USER_AGENT)
                    .and_then(|val| val.to_str().ok())
                    .unwrap_or("");

                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                tracing::info_span!(
                    "http_request",
                    request_id,
                    method = ?request.method(),
                    uri = ?request.uri(),
                    path = matched_path,
                    version = ?request.version(),
                    user_agent,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id_header));

    app.nest("/comics", comics_route)
        .nest("/recommendations", recommendations_route)
        .nest("/auth", auth_route)
        .nest("/admin", admin_route)
        .layer(CompressionLayer::new())
        .layer(request_id_middleware)
        .with_state(state)
}
