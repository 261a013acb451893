//! Call command - dispatches a raw tool call by name

use anyhow::Context;
use clap::Args;
use serde_json::Value;

use super::host::{self, EventPrinter};
use crate::domain::ToolCall;

#[derive(Args, Clone)]
pub struct CallArgs {
    /// Tool name
    #[arg(long)]
    pub name: String,

    /// Arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,

    /// Caller user id
    #[arg(long)]
    pub user: Option<String>,
}

pub async fn run(args: CallArgs, catalog: Option<String>) -> anyhow::Result<()> {
    let config = host::load_config()?;
    let arguments: Value =
        serde_json::from_str(&args.args).context("Tool arguments must be valid JSON")?;
    let tools = host::build_tools(&config, catalog.as_deref()).await?;
    let user = host::parse_user(args.user.as_deref())?;

    let call = ToolCall::new(args.name, arguments);

    let printer = EventPrinter::start();
    let ctx = printer.context(user);
    let output = tools.invoke(&call, &ctx).await;
    drop(ctx);
    printer.finish().await;

    println!("{}", output);

    Ok(())
}
