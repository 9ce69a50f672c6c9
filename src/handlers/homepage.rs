use serde_json::{json, Value};
use tracing::warn;

use crate::backend::ContentApi;
use crate::config::GatewayConfig;
use crate::error::ToolError;

/// Number of posts surfaced as `recentPosts`.
const RECENT_POSTS: usize = 5;

/// Handle a `get_homepage` tool call.
pub async fn handle(config: &GatewayConfig, api: &ContentApi) -> Result<Value, ToolError> {
    let list = api.list_posts().await.map_err(|e| {
        warn!(error = %e, "get_homepage backend call failed");
        ToolError::Backend("Failed to fetch homepage data from backend".into())
    })?;

    let total = list.posts.len();
    let recent: Vec<_> = list.posts.into_iter().take(RECENT_POSTS).collect();

    Ok(json!({
        "site": config.site_name,
        "url": config.site_url,
        "description": list.description,
        "recentPosts": recent,
        "totalPosts": total,
    }))
}
