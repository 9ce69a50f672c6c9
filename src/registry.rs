//! The fixed tool catalog.
//!
//! Every tool is a variant of [`ToolName`]; the dispatcher matches on it, so
//! a tool cannot be listed without also being handled.

use jsonschema::Validator;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ToolError;
use crate::schema::{self, SchemaValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListPosts,
    GetPost,
    ListPages,
    GetPage,
    GetHomepage,
    SearchContent,
    ExportAll,
}

impl ToolName {
    /// Catalog order, as advertised by `tools/list`.
    pub const ALL: [ToolName; 7] = [
        Self::ListPosts,
        Self::GetPost,
        Self::ListPages,
        Self::GetPage,
        Self::GetHomepage,
        Self::SearchContent,
        Self::ExportAll,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListPosts => "list_posts",
            Self::GetPost => "get_post",
            Self::ListPages => "list_pages",
            Self::GetPage => "get_page",
            Self::GetHomepage => "get_homepage",
            Self::SearchContent => "search_content",
            Self::ExportAll => "export_all",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    fn description(self) -> &'static str {
        match self {
            Self::ListPosts => "Get all published blog posts with metadata (no content). Returns title, slug, description, date, tags, and read time.",
            Self::GetPost => "Get a single blog post by slug with full content.",
            Self::ListPages => "Get all published pages with metadata (no content). Returns title, slug, and order.",
            Self::GetPage => "Get a single page by slug with full content.",
            Self::GetHomepage => "Get homepage data including featured posts, featured pages, and recent posts.",
            Self::SearchContent => "Full text search across all posts and pages. Returns matching results with snippets.",
            Self::ExportAll => "Export all posts and pages with full content. Useful for bulk content retrieval.",
        }
    }

    fn input_schema(self) -> Value {
        match self {
            Self::GetPost => object_schema(
                json!({ "slug": string_property("The URL slug of the post to retrieve") }),
                &["slug"],
            ),
            Self::GetPage => object_schema(
                json!({ "slug": string_property("The URL slug of the page to retrieve") }),
                &["slug"],
            ),
            Self::SearchContent => object_schema(
                json!({ "query": string_property("The search query string") }),
                &["query"],
            ),
            Self::ListPosts | Self::ListPages | Self::GetHomepage | Self::ExportAll => {
                object_schema(json!({}), &[])
            }
        }
    }
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

fn string_property(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

struct Entry {
    tool: ToolName,
    definition: ToolDefinition,
    validator: Validator,
}

/// Immutable catalog of tool definitions and their compiled argument validators.
pub struct ToolRegistry {
    entries: Vec<Entry>,
}

impl ToolRegistry {
    pub fn new() -> Result<Self, SchemaValidationError> {
        let entries = ToolName::ALL
            .into_iter()
            .map(|tool| {
                let input_schema = tool.input_schema();
                let validator = schema::compile(&input_schema)?;
                Ok(Entry {
                    tool,
                    definition: ToolDefinition {
                        name: tool.as_str(),
                        description: tool.description(),
                        input_schema,
                    },
                    validator,
                })
            })
            .collect::<Result<Vec<_>, SchemaValidationError>>()?;

        Ok(Self { entries })
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.entries.iter().map(|e| &e.definition)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a tool by name and check `arguments` against its input schema.
    pub fn resolve(&self, name: &str, arguments: &Map<String, Value>) -> Result<ToolName, ToolError> {
        let entry = ToolName::parse(name)
            .and_then(|tool| self.entries.iter().find(|e| e.tool == tool))
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let instance = Value::Object(arguments.clone());
        schema::check(&entry.validator, &instance).map_err(|e| {
            ToolError::InvalidParams(format!("Invalid arguments for {name}: {e}"))
        })?;

        Ok(entry.tool)
    }
}
