use clap::{CommandFactory, Parser, Subcommand};
use mindset_core::Config;

mod commands;
mod logging;
mod web;

#[derive(Parser)]
#[command(name = "mindset", version, about = "Growth Mindset Challenge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the widget over HTTP
    Serve(commands::serve::ServeArgs),
    /// Interactive session in the terminal
    Shell(commands::shell::ShellArgs),
    /// Render one menu section once
    Show(commands::show::ShowArgs),
    /// Compute a streak from a list of dates
    Streak(commands::streak::StreakArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Reading never writes; only commands that use the config create it.
    let config = Config::read();
    let level = config
        .as_ref()
        .map_or_else(|_| Config::default().log.level, |cfg| cfg.log.level.clone());
    logging::init(&level);
    if let Err(e) = &config {
        tracing::warn!("using default log level: {e}");
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(args),
        Commands::Shell(args) => commands::shell::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Streak(args) => commands::streak::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mindset", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
