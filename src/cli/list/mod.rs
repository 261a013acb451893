//! List command - runs `list_available_knowledge_bases` once

use clap::Args;

use super::host::{self, EventPrinter};

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Caller user id; without it every knowledge base is listed
    #[arg(long)]
    pub user: Option<String>,
}

pub async fn run(args: ListArgs, catalog: Option<String>) -> anyhow::Result<()> {
    let config = host::load_config()?;
    let tools = host::build_tools(&config, catalog.as_deref()).await?;
    let user = host::parse_user(args.user.as_deref())?;

    let printer = EventPrinter::start();
    let ctx = printer.context(user);
    let output = tools.list_available_knowledge_bases(&ctx).await;
    drop(ctx);
    printer.finish().await;

    println!("{}", output);

    Ok(())
}
