use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::auth::authorize;
use crate::backend::ContentApi;
use crate::config::GatewayConfig;
use crate::handlers;
use crate::protocol::{parse_request, JsonRpcError, JsonRpcResponse};
use crate::registry::ToolRegistry;
use crate::schema::SchemaValidationError;

/// Route the gateway answers on.
pub const MCP_PATH: &str = "/mcp";

const X_MCP_SERVER: HeaderName = HeaderName::from_static("x-mcp-server");
const X_MCP_VERSION: HeaderName = HeaderName::from_static("x-mcp-version");
const X_MCP_AUTHENTICATED: HeaderName = HeaderName::from_static("x-mcp-authenticated");

/// MCP gateway that serves JSON-RPC 2.0 over HTTP `POST`.
///
/// Holds only state resolved at startup; it is shared read-only across
/// requests.
pub struct McpGateway {
    pub config: GatewayConfig,
    pub registry: ToolRegistry,
    pub backend: ContentApi,
}

impl McpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, SchemaValidationError> {
        let backend = ContentApi::new(&config.backend_url);
        Ok(Self {
            config,
            registry: ToolRegistry::new()?,
            backend,
        })
    }

    /// Build the axum router for this gateway.
    ///
    /// The body size limit is disabled so every request, whatever its size,
    /// is answered with a JSON-RPC envelope rather than a bare 413.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(MCP_PATH, any(handle_mcp_request))
            .layer(DefaultBodyLimit::disable())
            .layer(TraceLayer::new_for_http())
            .with_state(self)
    }

    /// Bind and serve until interrupted.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_addr;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, backend = %self.config.backend_url, auth = self.config.api_key.is_some(), "MCP gateway listening");

        axum::serve(listener, Arc::new(self).router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Process one HTTP exchange: method check, auth, parse, dispatch.
    pub async fn handle(&self, method: &Method, headers: &HeaderMap, body: &[u8]) -> Response {
        if *method == Method::OPTIONS {
            return preflight_response();
        }

        if *method != Method::POST {
            return self.envelope(
                StatusCode::METHOD_NOT_ALLOWED,
                &JsonRpcResponse::error(
                    None,
                    JsonRpcError::invalid_request_with("Method not allowed. Use POST."),
                ),
                false,
            );
        }

        let auth = authorize(headers, self.config.api_key.as_deref());
        if !auth.valid {
            warn!("rejected request with invalid API key");
            return self.envelope(
                StatusCode::UNAUTHORIZED,
                &JsonRpcResponse::error(None, JsonRpcError::invalid_request_with("Invalid API key")),
                false,
            );
        }

        let req = match parse_request(body) {
            Ok(r) => r,
            Err(resp) => {
                debug!("rejected malformed JSON-RPC envelope");
                return self.envelope(StatusCode::BAD_REQUEST, &resp, auth.authenticated);
            }
        };

        debug!(method = %req.method, authenticated = auth.authenticated, "dispatching");
        let resp = handlers::dispatch(&req, self).await;
        self.envelope(StatusCode::OK, &resp, auth.authenticated)
    }

    /// Serialize a response envelope with the gateway's standard headers.
    fn envelope(&self, status: StatusCode, resp: &JsonRpcResponse, authenticated: bool) -> Response {
        let (status, body) = match serde_json::to_vec(resp) {
            Ok(bytes) => (status, bytes),
            Err(e) => {
                warn!(error = %e, "failed to serialize response");
                let fallback = br#"{"jsonrpc":"2.0","id":null,"error":{"code":-32000,"message":"Internal error"}}"#;
                (StatusCode::INTERNAL_SERVER_ERROR, fallback.to_vec())
            }
        };

        let mut response = (status, body).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(X_MCP_SERVER, HeaderValue::from_static(crate::SERVER_NAME));
        headers.insert(X_MCP_VERSION, HeaderValue::from_static(crate::SERVER_VERSION));
        if authenticated {
            headers.insert(X_MCP_AUTHENTICATED, HeaderValue::from_static("true"));
        }
        response
    }
}

/// CORS preflight answer. Independent of auth configuration.
fn preflight_response() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("86400"));
    response
}

async fn handle_mcp_request(
    State(gateway): State<Arc<McpGateway>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    gateway.handle(&method, &headers, &body).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
