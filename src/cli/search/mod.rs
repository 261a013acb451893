//! Search command - runs `search_knowledge` once

use clap::Args;

use super::host::{self, EventPrinter};

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Search query
    #[arg(long)]
    pub query: String,

    /// Comma-separated knowledge base ids (defaults to configured ones)
    #[arg(long)]
    pub kb: Option<String>,

    /// Caller user id
    #[arg(long)]
    pub user: Option<String>,
}

pub async fn run(args: SearchArgs, catalog: Option<String>) -> anyhow::Result<()> {
    let config = host::load_config()?;
    let tools = host::build_tools(&config, catalog.as_deref()).await?;
    let user = host::parse_user(args.user.as_deref())?;

    let printer = EventPrinter::start();
    let ctx = printer.context(user);
    let output = tools
        .search_knowledge(&args.query, args.kb.as_deref(), &ctx)
        .await;
    drop(ctx);
    printer.finish().await;

    println!("{}", output);

    Ok(())
}
