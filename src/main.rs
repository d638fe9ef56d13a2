use anyhow::Result;

use gcode_translate::config::Config;
use gcode_translate::driver;

fn main() -> Result<()> {
    // Parse configuration from command line and config files
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    driver::run(&config)?;

    Ok(())
}
