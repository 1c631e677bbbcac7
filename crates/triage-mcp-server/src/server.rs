// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The MCP server handler: four triage tools plus the configuration
//! resources an external decision-maker reads before picking a category.
//!
//! Every tool call loads a fresh profile snapshot and works against that
//! snapshot alone, so concurrent calls share no mutable state and a
//! mid-flight profile edit is never observed partially.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, ListResourcesResult, PaginatedRequestParam, RawResource,
        ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceContents, ServerCapabilities, ServerInfo,
    },
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use serde_json::json;
use tracing::debug;
use triage_config::{ConfigStore, ProfileLocator, SeverityDoc, TaxonomyDoc, TriageConfig};
use triage_engine::TriagePipeline;

use crate::envelope;

pub const TAXONOMY_URI: &str = "config://taxonomy";
pub const SEVERITY_URI: &str = "config://severity_rules";
pub const ROUTING_URI: &str = "config://routing";
pub const ACTIVE_PROFILE_URI: &str = "server://active_profile";

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyIntakeRequest {
    #[schemars(description = "Free-form intake text to classify")]
    pub text: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreSeverityRequest {
    #[schemars(description = "Free-form intake text to score")]
    pub text: String,
    #[schemars(description = "Optional category context from a prior classification")]
    pub category: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct RouteCaseRequest {
    #[schemars(description = "Category the case was classified as, if any")]
    pub category: Option<String>,
    #[schemars(description = "Severity score from score_severity")]
    pub score: i64,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TriageIntakeRequest {
    #[schemars(description = "Free-form intake text to triage end to end")]
    pub text: String,
}

/// MCP handler exposing the triage pipeline.
#[derive(Clone)]
pub struct IntakeTriageServer {
    store: ConfigStore,
    server_name: String,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl IntakeTriageServer {
    pub fn new(config: &TriageConfig) -> Self {
        let locator = ProfileLocator::from_selection(&config.profile);
        Self {
            store: ConfigStore::new(locator),
            server_name: config.server.name.clone(),
            tool_router: Self::tool_router(),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn pipeline(&self) -> TriagePipeline {
        TriagePipeline::new(self.store.load())
    }

    #[tool(
        description = "Classify intake text against the active taxonomy. Returns the winning category, a confidence in [0,1], the matched keywords, and needs_external_decision=true when the confidence falls below 0.5 and the caller should pick the category itself."
    )]
    pub async fn classify_intake(
        &self,
        Parameters(req): Parameters<ClassifyIntakeRequest>,
    ) -> String {
        envelope::from_result(self.pipeline().classify(&req.text))
    }

    #[tool(
        description = "Score intake text against the active severity rules. Pass the category from classification (or your own choice) so an unmatched emergency case still escalates."
    )]
    pub async fn score_severity(
        &self,
        Parameters(req): Parameters<ScoreSeverityRequest>,
    ) -> String {
        envelope::from_result(
            self.pipeline()
                .score_severity(&req.text, req.category.as_deref()),
        )
    }

    #[tool(
        description = "Route a (category, score) pair to a destination queue using the active routing rules. Always succeeds: unknown or absent categories fall back to the default destination."
    )]
    pub async fn route_case(&self, Parameters(req): Parameters<RouteCaseRequest>) -> String {
        let routing = self.pipeline().route(req.category.as_deref(), req.score);
        envelope::success(&routing)
    }

    #[tool(
        description = "Run the full triage pipeline on intake text: classify, score severity, route. When classification confidence is below 0.5 the response has needs_external_decision=true and no severity/routing; choose a category yourself, then call score_severity and route_case."
    )]
    pub async fn triage_intake(
        &self,
        Parameters(req): Parameters<TriageIntakeRequest>,
    ) -> String {
        envelope::from_result(
            self.pipeline()
                .triage(&req.text)
                .map(|outcome| outcome.into_decision()),
        )
    }

    fn resource_text(&self, uri: &str) -> Result<String, McpError> {
        let snapshot = self.store.load();
        let rendered = match uri {
            TAXONOMY_URI => serde_json::to_string_pretty(&TaxonomyDoc {
                taxonomy: snapshot.taxonomy,
            }),
            SEVERITY_URI => serde_json::to_string_pretty(&SeverityDoc {
                severity_rules: snapshot.severity_rules,
            }),
            ROUTING_URI => serde_json::to_string_pretty(&snapshot.routing),
            ACTIVE_PROFILE_URI => serde_json::to_string_pretty(&json!({
                "name": self.store.locator().name(),
                "dir": self.store.locator().dir().display().to_string(),
            })),
            _ => {
                return Err(McpError::resource_not_found(
                    "unknown resource",
                    Some(json!({ "uri": uri })),
                ))
            }
        };
        rendered.map_err(|err| McpError::internal_error(err.to_string(), None))
    }
}

fn resource(uri: &str, name: &str) -> Resource {
    RawResource::new(uri, name.to_string()).no_annotation()
}

#[tool_handler]
impl ServerHandler for IntakeTriageServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = format!(
            "{} -- intake classification, severity scoring, and queue routing.\n\
             Call triage_intake(text) first. If it returns needs_external_decision=true,\n\
             pick the best category yourself using the config://taxonomy resource, then\n\
             call score_severity(text, category) and route_case(category, score).\n\
             Resources: config://taxonomy, config://severity_rules, config://routing,\n\
             server://active_profile.",
            self.server_name
        );
        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                resource(TAXONOMY_URI, "taxonomy"),
                resource(SEVERITY_URI, "severity_rules"),
                resource(ROUTING_URI, "routing"),
                resource(ACTIVE_PROFILE_URI, "active_profile"),
            ],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri, .. }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!(uri = %uri, "reading config resource");
        let text = self.resource_text(&uri)?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
