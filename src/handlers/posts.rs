use serde_json::{json, Value};
use tracing::warn;

use crate::backend::{BackendError, ContentApi};
use crate::config::GatewayConfig;
use crate::error::ToolError;
use crate::protocol::SlugArgs;

/// Handle a `list_posts` tool call.
pub async fn list(config: &GatewayConfig, api: &ContentApi) -> Result<Value, ToolError> {
    let list = api.list_posts().await.map_err(|e| {
        warn!(error = %e, "list_posts backend call failed");
        ToolError::Backend("Failed to fetch posts from backend".into())
    })?;

    Ok(json!({
        "site": config.site_name,
        "url": config.site_url,
        "posts": list.posts,
    }))
}

/// Handle a `get_post` tool call.
pub async fn get(
    args: SlugArgs,
    config: &GatewayConfig,
    api: &ContentApi,
) -> Result<Value, ToolError> {
    let post = api.get_by_slug(&args.slug).await.map_err(|e| match e {
        BackendError::NotFound => ToolError::NotFound(format!("Post not found: {}", args.slug)),
        e => {
            warn!(error = %e, slug = %args.slug, "get_post backend call failed");
            ToolError::Backend("Failed to fetch post from backend".into())
        }
    })?;

    Ok(json!({
        "site": config.site_name,
        "url": format!("{}/{}", config.site_url, args.slug),
        "post": post,
    }))
}
