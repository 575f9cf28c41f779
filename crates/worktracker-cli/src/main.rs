use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "worktracker", version, about = "WorkTracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Recorded work sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Point reports and the monthly calendar
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Reward store
    Reward {
        #[command(subcommand)]
        action: commands::reward::RewardAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Backup and restore of the data document
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Report { action } => commands::report::run(action),
        Commands::Reward { action } => commands::reward::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
