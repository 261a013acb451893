//! Knowledge search tools - search and list host knowledge bases

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::formatting;
use crate::domain::{
    AccessPermission, CollectionQuery, EmbeddingFunction, EmbeddingProvider, KnowledgeBase,
    KnowledgeBaseRegistry, RetrievalProvider, SearchKnowledgeArgs, ToolCall, ToolContext,
    ToolError, ToolEvent, ToolValves, User, UserRepository, LIST_KNOWLEDGE_BASES_TOOL,
    SEARCH_KNOWLEDGE_TOOL,
};
use crate::domain::tool::split_ids;

/// The two knowledge tools, bound to the host capabilities they delegate to.
///
/// Every entry point returns plain text. Failures are rendered into the
/// response instead of being returned as `Err`.
pub struct KnowledgeSearchTools {
    valves: ToolValves,
    retrieval: Arc<dyn RetrievalProvider>,
    embeddings: Arc<dyn EmbeddingProvider>,
    users: Arc<dyn UserRepository>,
    registry: Arc<dyn KnowledgeBaseRegistry>,
}

impl std::fmt::Debug for KnowledgeSearchTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeSearchTools")
            .field("valves", &self.valves)
            .finish()
    }
}

impl KnowledgeSearchTools {
    pub fn new(
        valves: ToolValves,
        retrieval: Arc<dyn RetrievalProvider>,
        embeddings: Arc<dyn EmbeddingProvider>,
        users: Arc<dyn UserRepository>,
        registry: Arc<dyn KnowledgeBaseRegistry>,
    ) -> Self {
        Self {
            valves,
            retrieval,
            embeddings,
            users,
            registry,
        }
    }

    pub fn valves(&self) -> &ToolValves {
        &self.valves
    }

    /// Search organizational knowledge bases and return citation-tagged context
    pub async fn search_knowledge(
        &self,
        query: &str,
        knowledge_base_ids: Option<&str>,
        ctx: &ToolContext,
    ) -> String {
        let kb_ids = match self.resolve_knowledge_base_ids(knowledge_base_ids) {
            Ok(ids) => ids,
            Err(error) => {
                warn!(%error, "Knowledge search rejected");
                return formatting::request_error(&error);
            }
        };

        info!(query, knowledge_bases = ?kb_ids, "Searching knowledge bases");

        match self.run_search(query, kb_ids, ctx).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, external = error.is_external(), "Knowledge search failed");
                let message = formatting::search_error(&error);

                if let Err(emit_error) = ctx.emit(ToolEvent::done(&message)).await {
                    warn!(error = %emit_error, "Failed to emit search failure status");
                }

                message
            }
        }
    }

    /// List the knowledge bases the caller may read
    pub async fn list_available_knowledge_bases(&self, ctx: &ToolContext) -> String {
        match self.fetch_knowledge_bases(ctx).await {
            Ok(knowledge_bases) => {
                debug!(count = knowledge_bases.len(), "Listing knowledge bases");
                formatting::knowledge_base_list(&knowledge_bases)
            }
            Err(error) => {
                warn!(%error, external = error.is_external(), "Listing knowledge bases failed");
                formatting::list_error(&error)
            }
        }
    }

    /// Route an orchestrator tool call to the matching tool
    pub async fn invoke(&self, call: &ToolCall, ctx: &ToolContext) -> String {
        match call.name.as_str() {
            SEARCH_KNOWLEDGE_TOOL => match parse_search_args(&call.arguments) {
                Ok(args) => {
                    self.search_knowledge(&args.query, args.knowledge_base_ids.as_deref(), ctx)
                        .await
                }
                Err(error) => formatting::request_error(&error),
            },
            LIST_KNOWLEDGE_BASES_TOOL => self.list_available_knowledge_bases(ctx).await,
            other => {
                warn!(tool = other, "Unknown tool requested");
                formatting::request_error(&ToolError::UnknownTool(other.to_string()))
            }
        }
    }

    /// Caller-supplied ids win; otherwise the configured defaults
    fn resolve_knowledge_base_ids(&self, selector: Option<&str>) -> Result<Vec<String>, ToolError> {
        let requested = selector.map(split_ids).unwrap_or_default();

        let ids = if requested.is_empty() {
            self.valves.default_knowledge_base_ids()
        } else {
            requested
        };

        if ids.is_empty() {
            return Err(ToolError::NoKnowledgeBases);
        }

        Ok(ids)
    }

    async fn run_search(
        &self,
        query: &str,
        kb_ids: Vec<String>,
        ctx: &ToolContext,
    ) -> Result<String, ToolError> {
        ctx.emit(ToolEvent::in_progress(formatting::SEARCHING_STATUS))
            .await
            .map_err(ToolError::Event)?;

        let user = self.resolve_user(ctx).await?;
        let embedding_function = EmbeddingFunction::new(self.embeddings.clone(), user);

        debug!(
            relevance_threshold = self.valves.relevance_threshold(),
            top_k = self.valves.top_k(),
            streaming = ctx.has_emitter(),
            "Querying retrieval backend; relevance threshold is not applied"
        );

        let result = self
            .retrieval
            .query_collection(CollectionQuery {
                collection_names: kb_ids,
                queries: vec![query.to_string()],
                embedding_function,
                k: self.valves.top_k(),
            })
            .await
            .map_err(ToolError::Retrieval)?;

        let result = match result {
            Some(result) if !result.is_empty() => result,
            _ => {
                info!(query, "No relevant knowledge found");
                ctx.emit(ToolEvent::done(formatting::NO_RESULTS_STATUS))
                    .await
                    .map_err(ToolError::Event)?;
                return Ok(formatting::no_results(query));
            }
        };

        let mut blocks = String::new();

        for (index, document) in result.first_query().into_iter().enumerate() {
            let citation_id = index + 1;
            let source_name = document
                .metadata
                .source()
                .unwrap_or_else(|| format!("Source {}", citation_id));
            let file_id = document.metadata.file_id().unwrap_or_default();

            ctx.emit(ToolEvent::citation(
                &document.text,
                &source_name,
                file_id,
                formatting::round_score(document.distance),
            ))
            .await
            .map_err(ToolError::Event)?;

            formatting::push_source_block(&mut blocks, citation_id, &source_name, &document.text);
        }

        let found = result.first_query_documents().len();

        ctx.emit(ToolEvent::done(formatting::found_status(found)))
            .await
            .map_err(ToolError::Event)?;

        info!(found, "Knowledge search complete");

        Ok(formatting::wrap_context(&blocks))
    }

    async fn resolve_user(&self, ctx: &ToolContext) -> Result<Option<User>, ToolError> {
        let Some(user_id) = ctx.user_id() else {
            return Ok(None);
        };

        let user = self
            .users
            .get(user_id)
            .await
            .map_err(ToolError::UserResolution)?;

        if user.is_none() {
            debug!(user_id = %user_id, "Caller not found, using default embedding scope");
        }

        Ok(user)
    }

    async fn fetch_knowledge_bases(
        &self,
        ctx: &ToolContext,
    ) -> Result<Vec<KnowledgeBase>, ToolError> {
        let knowledge_bases = match ctx.user_id() {
            Some(user_id) => {
                self.registry
                    .list_for_user(user_id, AccessPermission::Read)
                    .await
            }
            None => self.registry.list_all().await,
        };

        knowledge_bases.map_err(ToolError::Registry)
    }
}

/// Arguments may arrive as an object or as a JSON-encoded string
fn parse_search_args(arguments: &Value) -> Result<SearchKnowledgeArgs, ToolError> {
    let invalid = |reason: String| ToolError::invalid_arguments(SEARCH_KNOWLEDGE_TOOL, reason);

    let args: SearchKnowledgeArgs = match arguments {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?,
        other => serde_json::from_value(other.clone()).map_err(|e| invalid(e.to_string()))?,
    };

    if args.query.trim().is_empty() {
        return Err(invalid("query must not be empty".to_string()));
    }

    Ok(args)
}
