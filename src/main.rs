use clap::Parser;
use coverage::config::Command;
use coverage::domain::model::Response;
use coverage::utils::error::ErrorCategory;
use coverage::utils::logger;
use coverage::utils::validation::is_valid_zip_code;
use coverage::{CliConfig, CoverageApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coverage CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let zipcode = match &config.command {
        Command::Check { zipcode, .. } | Command::Csa { zipcode } => zipcode,
    };
    if !is_valid_zip_code(zipcode) {
        eprintln!("Illegal value for property zipcode: {}", zipcode);
        std::process::exit(2);
    }

    let app = match CoverageApp::init(&settings).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("unable to configure application: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let result = match &config.command {
        Command::Check { zipcode, carrierid } => app
            .coverage()
            .verify(zipcode, carrierid)
            .await
            .and_then(|response| Response::result(response).to_json_pretty()),
        Command::Csa { zipcode } => app
            .csa()
            .get_csa(zipcode)
            .await
            .and_then(|response| Response::result(response).to_json_pretty()),
    };

    match result {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Query failed: {} (Category: {:?})", e, e.category());
            eprintln!("{}", e);

            let exit_code = match e.category() {
                ErrorCategory::Client => 2,
                ErrorCategory::Server | ErrorCategory::Configuration => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
