//! Construction of the HTTP router serving the schema.
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use bookshelf::BookSchema;
use tower_http::trace::TraceLayer;

/// Where GraphQL requests are accepted.
const GRAPHQL_PATH: &str = "/graphql";
/// Where the GraphiQL IDE is served.
const SANDBOX_PATH: &str = "/sandbox";

/// The handler. It's the function that's run when there's a GraphQL request.
async fn handler(
    State(schema): State<BookSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(graphql_request.into_inner()).await.into()
}

/// Serves an in-browser IDE for trying out queries.
async fn sandbox() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Builder function for the Router app.
pub(crate) fn build_app(schema: BookSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, post(handler))
        .route(SANDBOX_PATH, get(sandbox))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
