use anyhow::Result;
use owo_colors::OwoColorize;
use wushu_core::config::WushuConfig;

pub fn run(config: &WushuConfig) -> Result<()> {
    let config_path = WushuConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", config.storage_path().display());

    Ok(())
}
