use serde_json::{json, Value};
use tracing::warn;

use crate::backend::{BackendError, ContentApi};
use crate::config::GatewayConfig;
use crate::error::ToolError;
use crate::protocol::SlugArgs;

/// Slugs of the static pages the site ships with.
const KNOWN_PAGE_SLUGS: [&str; 6] = [
    "about",
    "docs",
    "contact",
    "newsletter",
    "projects",
    "changelog-page",
];

/// Handle a `list_pages` tool call.
///
/// The content API has no page-listing endpoint, so this returns an empty
/// list and points the agent at `get_page` with the known slugs. It never
/// touches the backend.
pub async fn list(config: &GatewayConfig) -> Result<Value, ToolError> {
    Ok(json!({
        "site": config.site_name,
        "url": config.site_url,
        "pages": [],
        "note": format!("Use get_page with specific slugs: {}", KNOWN_PAGE_SLUGS.join(", ")),
    }))
}

/// Handle a `get_page` tool call.
///
/// Pages resolve through the same slug lookup as posts.
pub async fn get(
    args: SlugArgs,
    config: &GatewayConfig,
    api: &ContentApi,
) -> Result<Value, ToolError> {
    let page = api.get_by_slug(&args.slug).await.map_err(|e| match e {
        BackendError::NotFound => ToolError::NotFound(format!("Page not found: {}", args.slug)),
        e => {
            warn!(error = %e, slug = %args.slug, "get_page backend call failed");
            ToolError::Backend("Failed to fetch page from backend".into())
        }
    })?;

    Ok(json!({
        "site": config.site_name,
        "url": format!("{}/{}", config.site_url, args.slug),
        "page": page,
    }))
}
