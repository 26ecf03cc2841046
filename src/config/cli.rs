use crate::app::demo::OutputFormat;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Print the comparison and adapter demonstration
    Demo,
    /// Run the self-check suite
    Test,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "gauge-adapter")]
#[command(about = "Adapter demonstration for European and wide railway gauges")]
pub struct CliConfig {
    /// What to run (defaults to the demonstration)
    #[arg(value_enum)]
    pub mode: Option<RunMode>,

    #[arg(short, long, help = "Run the self-check suite instead of the demo")]
    pub test: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// `--test` wins over the positional mode.
    pub fn mode(&self) -> RunMode {
        if self.test {
            RunMode::Test
        } else {
            self.mode.unwrap_or(RunMode::Demo)
        }
    }
}
