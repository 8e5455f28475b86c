use anyhow::Context;
use clap::Parser;
use janis::utils::{logger, validation::Validate};
use janis::{CliConfig, JanisError};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let plain = config.is_plain(std::env::var_os("NO_COLOR").as_deref());

    if let Err(e) = run(&config, plain) {
        tracing::error!("janis failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(janis_error) = e.downcast_ref::<JanisError>() {
            eprintln!("💡 {}", janis_error.recovery_suggestion());
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig, plain: bool) -> anyhow::Result<()> {
    let lines = config.render_lines(plain).with_context(|| match &config.theme {
        Some(path) => format!("failed to style text with theme '{}'", path),
        None => "failed to style text".to_string(),
    })?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
