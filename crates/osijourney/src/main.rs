mod app;
mod banner;
mod cli;
mod commands;
mod config;
mod controller;
mod deck;
mod render;
mod theme;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose, cli.quiet))),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    cli.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_maps_to_filter() {
        assert_eq!(default_filter(0, false), "warn");
        assert_eq!(default_filter(1, false), "debug");
        assert_eq!(default_filter(2, false), "trace");
        assert_eq!(default_filter(2, true), "error");
    }
}
