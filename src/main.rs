use clap::Parser;
use kb_search_tools::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Search(args) => cli::search::run(args, cli.catalog).await,
        Command::List(args) => cli::list::run(args, cli.catalog).await,
        Command::Specs => cli::specs::run(),
        Command::Call(args) => cli::call::run(args, cli.catalog).await,
    }
}
