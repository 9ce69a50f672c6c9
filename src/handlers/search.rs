use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::backend::{ContentApi, PostSummary};
use crate::config::GatewayConfig;
use crate::error::ToolError;
use crate::protocol::SearchArgs;

/// Maximum number of hits returned.
pub const MAX_RESULTS: usize = 15;

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'a str,
    slug: &'a str,
    description: &'a str,
    url: String,
}

/// Handle a `search_content` tool call.
///
/// A blank query short-circuits without a backend call. Otherwise the query,
/// untrimmed, is matched as a case-insensitive substring of the title,
/// description or any tag, in backend order, capped at [`MAX_RESULTS`].
pub async fn handle(
    args: SearchArgs,
    config: &GatewayConfig,
    api: &ContentApi,
) -> Result<Value, ToolError> {
    if args.query.trim().is_empty() {
        return Ok(json!({
            "site": config.site_name,
            "query": "",
            "resultCount": 0,
            "results": [],
        }));
    }

    let list = api.list_posts().await.map_err(|e| {
        warn!(error = %e, "search_content backend call failed");
        ToolError::Backend("Failed to fetch posts for search".into())
    })?;

    let needle = args.query.to_lowercase();
    let results: Vec<SearchHit<'_>> = list
        .posts
        .iter()
        .filter(|post| matches(post, &needle))
        .take(MAX_RESULTS)
        .map(|post| SearchHit {
            kind: "post",
            title: &post.title,
            slug: &post.slug,
            description: &post.description,
            url: format!("{}/{}", config.site_url, post.slug),
        })
        .collect();

    Ok(json!({
        "site": config.site_name,
        "query": args.query,
        "resultCount": results.len(),
        "results": results,
    }))
}

fn matches(post: &PostSummary, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.description.to_lowercase().contains(needle)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
