use anyhow::Result;
use clap::{Parser, Subcommand};
use tasklist_core::{DEFAULT_API_URL, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Paginated todo list server and terminal client", long_about = None)]
struct Cli {
    /// Base URL of a running tasklist server (client commands only)
    #[arg(long, global = true, env = "TASKLIST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep todos in memory even if DATABASE_URL is set
        #[arg(long)]
        memory: bool,
    },
    /// Show one page of todos
    List {
        #[command(flatten)]
        paging: Paging,
    },
    /// Add a todo and show the first page
    Add { title: String },
    /// Flip a todo between pending and done
    Toggle { id: i64 },
    /// Delete a todo and show the page it was on
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        #[command(flatten)]
        paging: Paging,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct Paging {
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory } => commands::serve::run(port, host, memory).await,
        Commands::List { paging } => {
            commands::client::list(&cli.api_url, paging.page, paging.page_size).await
        },
        Commands::Add { title } => commands::client::add(&cli.api_url, &title).await,
        Commands::Toggle { id } => commands::client::toggle(&cli.api_url, id).await,
        Commands::Delete { id, yes, paging } => {
            commands::client::delete(&cli.api_url, id, yes, paging.page, paging.page_size).await
        },
    }
}
