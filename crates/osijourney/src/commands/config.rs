use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => {
            let path = Config::path()?;
            Config::set_in(&path, &key, &value)?;
            println!("{} {key} = {value}", "Set".green().bold());
            println!("  {}", path.display().to_string().dimmed());
            Ok(())
        }
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_existing(&path)?;
    let defaults = config.defaults.unwrap_or_default();

    println!("{}", "Configuration".bold());
    println!("  {} {}", "file:".dimmed(), path.display());
    println!();
    print_value("defaults.level", defaults.level.as_deref(), "info");
    print_value("defaults.autoplay", defaults.autoplay.as_deref(), "off");
    let start = defaults.start_slide.map(|n| n.to_string());
    print_value("defaults.start_slide", start.as_deref(), "1");
    Ok(())
}

fn print_value(key: &str, value: Option<&str>, default: &str) {
    match value {
        Some(v) => println!("  {key:<22} {}", v.cyan()),
        None => println!("  {key:<22} {} {}", default, "(default)".dimmed()),
    }
}
