use clap::Parser;
use oddswise::cli::{self, CheckCommand, Cli, Commands};
use oddswise::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // `check config` diagnoses broken files, so it must not go through the
    // normal load-and-init path below.
    if let Commands::Check(CheckCommand::Config(args)) = &cli.command {
        if cli::check::execute_config(&args.config).is_err() {
            std::process::exit(1);
        }
        return;
    }

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };
    config.init_logging();

    let result = match cli.command {
        Commands::Board(args) => cli::board::execute(&args),
        Commands::Markets(args) => cli::markets::execute(&args),
        Commands::Alerts(args) => cli::alerts::execute(&config, &args),
        Commands::Suggest(args) => cli::suggest::execute(&config, &args).await,
        // Handled above.
        Commands::Check(_) => Ok(()),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
