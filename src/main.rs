use clap::Parser;
use std::process::ExitCode;
use twin_precheck::{CliArgs, LoggingConfig, PrecheckConfig, init_logging, run_cli};

fn main() -> anyhow::Result<ExitCode> {
    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(logging_config)?;

    let cli = CliArgs::parse();
    let config = PrecheckConfig::from_args(cli)?;

    // Validate configuration before reading any input (fail-fast)
    config.validate()?;

    let clean = run_cli(&config, &mut std::io::stdout().lock())?;
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
