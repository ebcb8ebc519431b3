use clap::Parser;
use nota::cli::{
    handle_add, handle_archive, handle_delete, handle_list, handle_search, handle_shell, Cli,
    Commands,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url;
    let max_title_len = cli.max_title_len;

    let result = match cli.command {
        None | Some(Commands::Shell) => handle_shell(base_url, max_title_len).await,
        Some(Commands::List) => handle_list(base_url).await,
        Some(Commands::Add { title, body }) => {
            handle_add(base_url, max_title_len, title, body).await
        }
        Some(Commands::Delete { id, force }) => handle_delete(base_url, id, force).await,
        Some(Commands::Archive { id }) => handle_archive(base_url, id).await,
        Some(Commands::Search { term }) => handle_search(base_url, term).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
