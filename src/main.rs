use clap::Parser;
use gauge_adapter::app::{demo, self_check};
use gauge_adapter::utils::logger;
use gauge_adapter::{CliConfig, RailwayAdapterFacade, RunMode};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting gauge-adapter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.mode() {
        RunMode::Test => {
            if config.format != demo::OutputFormat::Text {
                tracing::warn!("--format only applies to the demo; printing text report");
            }

            let report = self_check::run_all();
            println!("{}", report);

            if report.all_passed() {
                tracing::info!("✅ All {} checks passed", report.passed());
            } else {
                tracing::warn!("❌ {} of {} checks failed", report.failed(), report.outcomes.len());
            }
        }
        RunMode::Demo => {
            let facade = RailwayAdapterFacade::with_default_tracks();
            let output = demo::render(&facade, config.format)?;
            println!("{}", output);
            tracing::info!("✅ Demonstration completed");
        }
    }

    Ok(())
}
