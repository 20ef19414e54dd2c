use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use cinegraph_store::store::CatalogStore;
use tower_http::cors::{Any, CorsLayer};

use crate::graphql::CatalogSchema;

/// Per-process handles shared by every request: the executable schema and the
/// store the health endpoint pings.
#[derive(Clone)]
pub struct AppState {
    pub schema: CatalogSchema,
    pub store: Arc<dyn CatalogStore>,
}

/// The whole HTTP surface: the graph endpoint with its interactive page on
/// the same path, and a health probe. Cross-origin requests are allowed from
/// anywhere with the common methods and headers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .with_state(state)
}

async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health(State(state): State<AppState>) -> StatusCode {
    match state.store.ping().await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
