//! Shared bootstrap for the CLI commands

use std::sync::Arc;

use anyhow::Context;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::{ToolContext, UserId};
use crate::infrastructure::embedding::create_embedding_provider;
use crate::infrastructure::events::{channel, ChannelEventEmitter};
use crate::infrastructure::knowledge_base::HostCatalog;
use crate::infrastructure::logging;
use crate::infrastructure::tools::KnowledgeSearchTools;

const EVENT_BUFFER: usize = 64;

/// Load `.env` and layered config, then install logging
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Build the tools over the in-memory backends described by the catalog
pub async fn build_tools(
    config: &AppConfig,
    catalog_override: Option<&str>,
) -> anyhow::Result<KnowledgeSearchTools> {
    let catalog = match catalog_override.or(config.catalog_path.as_deref()) {
        Some(path) => HostCatalog::from_path(path).await?,
        None => {
            warn!("No catalog configured, starting with an empty host");
            HostCatalog::default()
        }
    };

    let backends = catalog.into_backends().await;
    let embeddings = create_embedding_provider(&config.embedding)?;

    info!(
        provider = embeddings.provider_name(),
        model = embeddings.model(),
        "Embedding provider ready"
    );

    let tools = KnowledgeSearchTools::new(
        config.tools.clone(),
        backends.retrieval,
        embeddings,
        backends.users,
        backends.registry,
    );

    info!(
        defaults = tools.valves().default_knowledge_bases(),
        top_k = tools.valves().top_k(),
        "Knowledge tools ready"
    );

    Ok(tools)
}

pub fn parse_user(user: Option<&str>) -> anyhow::Result<Option<UserId>> {
    user.map(UserId::new)
        .transpose()
        .context("Invalid user id")
}

/// Streams tool events to stderr as JSON lines while a tool runs
pub struct EventPrinter {
    emitter: Arc<ChannelEventEmitter>,
    handle: JoinHandle<()>,
}

impl EventPrinter {
    pub fn start() -> Self {
        let (emitter, mut receiver) = channel(EVENT_BUFFER);

        let handle = tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                match serde_json::to_string(&event) {
                    Ok(line) => eprintln!("{}", line),
                    Err(e) => warn!(error = %e, "Failed to serialize event"),
                }
            }
        });

        Self {
            emitter: Arc::new(emitter),
            handle,
        }
    }

    pub fn context(&self, user: Option<UserId>) -> ToolContext {
        let ctx = ToolContext::new().with_emitter(self.emitter.clone());

        match user {
            Some(user) => ctx.with_user(user),
            None => ctx,
        }
    }

    /// Wait until every emitted event is printed. Contexts handed out by
    /// [`EventPrinter::context`] must be dropped first.
    pub async fn finish(self) {
        drop(self.emitter);

        if let Err(e) = self.handle.await {
            warn!(error = %e, "Event printer task failed");
        }
    }
}
