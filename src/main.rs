use clap::Parser;

use version_kit::cli::{self, Cli};
use version_kit::logging;
use version_kit::platform::PlatformRegistry;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    logging::init(&config.log)?;

    let registry = PlatformRegistry::with_builtins();
    let output = cli::execute(&cli.command, &config, &registry)?;
    println!("{output}");
    Ok(())
}
