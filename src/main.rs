//! projectflow CLI - Project lifecycle service and local tooling

use clap::Parser;
use projectflow::cli::{Cli, Commands};
use projectflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // config.json may also ask for JSON logs; a missing workspace just means "no"
    let json = cli.json_logs || workspace_wants_json_logs(cli);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn workspace_wants_json_logs(cli: &Cli) -> bool {
    let cwd = projectflow::fs::resolve_cwd(cli.cwd.as_deref());
    projectflow::fs::find_workspace_root(&cwd)
        .and_then(|root| projectflow::config::load_config(&root))
        .map(|config| config.log_json)
        .unwrap_or(false)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> projectflow::Result<()> {
    let cwd = cli.cwd.as_deref();
    match cli.command {
        Some(Commands::Init { force }) => projectflow::cli::commands::init::run(cwd, force).await,
        Some(Commands::Serve { listen }) => {
            projectflow::cli::commands::serve::run(cwd, listen.as_deref()).await
        }
        Some(Commands::States { json }) => projectflow::cli::commands::states::run(json).await,
        Some(Commands::Check { from, to }) => {
            projectflow::cli::commands::check::run(&from, to.as_deref()).await
        }
        Some(Commands::List { json, status }) => {
            projectflow::cli::commands::list::run(cwd, json, status.as_deref()).await
        }
        Some(Commands::Show { id, json }) => {
            projectflow::cli::commands::show::run(cwd, &id, json).await
        }
        Some(Commands::Transition { id, state }) => {
            projectflow::cli::commands::transition::run(cwd, &id, &state).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
