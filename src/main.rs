use anyhow::Context;
use byte_formatter::{config::Config, format_size};
use log::debug;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse(std::env::args_os()).unwrap_or_else(|err| err.exit());
    debug!("size={} options={:?}", config.size, config.options);

    let formatted = format_size(config.size, &config.options)
        .with_context(|| format!("cannot format size {}", config.size))?;
    println!("{formatted}");

    Ok(())
}
