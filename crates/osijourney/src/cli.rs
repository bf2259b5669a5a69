use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deck::FeatureLevel;

#[derive(Parser)]
#[command(name = "osijourney")]
#[command(author, version, about)]
#[command(long_about = "Il Viaggio del Messaggio: a classroom slideshow that follows \
    the chat message \"ciao\" down the ISO/OSI stack, across the Internet and back up.\n\n\
    Examples:\n  \
    osijourney                     Present fullscreen\n  \
    osijourney --windowed          Present in a window\n  \
    osijourney --level base        The core twelve slides\n  \
    osijourney outline             Print the slide table")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Deck edition to present
    #[arg(long, value_enum, global = false)]
    pub level: Option<Level>,

    /// Start with autoplay running
    #[arg(long, global = false)]
    pub autoplay: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Export every slide as a PNG image
    Export {
        /// Output directory for PNG files
        #[arg(short, long, default_value = "export")]
        output_dir: PathBuf,

        /// Export width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,

        /// Export height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,

        /// Deck edition to export
        #[arg(long, value_enum)]
        level: Option<Level>,
    },

    /// Print the slide table
    Outline {
        /// Print the full content table as JSON
        #[arg(long)]
        json: bool,

        /// Deck edition to print
        #[arg(long, value_enum)]
        level: Option<Level>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.level, defaults.autoplay, defaults.start_slide)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    /// The core twelve slides
    Base,
    /// Twelve slides with larger type for projectors
    Large,
    /// Sixteen slides with info panels
    Info,
}

impl From<Level> for FeatureLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Base => FeatureLevel::Base,
            Level::Large => FeatureLevel::LargeDisplay,
            Level::Info => FeatureLevel::InfoPanels,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Export {
                output_dir,
                width,
                height,
                level,
            }) => {
                let level = resolve_level(level);
                crate::commands::export::run(level, output_dir, width, height, self.quiet)
            }
            Some(Commands::Outline { json, level }) => {
                crate::commands::outline::run(resolve_level(level), json)
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if self.slide == Some(0) {
                    anyhow::bail!("Slide numbers start at 1");
                }
                let config = crate::config::Config::load_or_default();
                let launch = crate::app::resolve_launch(
                    self.level.map(FeatureLevel::from),
                    self.slide,
                    self.autoplay,
                    &config,
                );
                crate::app::run(launch, self.windowed)
            }
        }
    }
}

/// Flag, then config, then the default edition.
fn resolve_level(level: Option<Level>) -> FeatureLevel {
    match level {
        Some(level) => level.into(),
        None => {
            let config = crate::config::Config::load_or_default();
            crate::app::resolve_launch(None, None, false, &config).level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_presentation_flags() {
        let cli = Cli::try_parse_from([
            "osijourney",
            "--windowed",
            "--slide",
            "3",
            "--level",
            "large",
            "--autoplay",
            "-vv",
        ])
        .unwrap();
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(3));
        assert_eq!(cli.level, Some(Level::Large));
        assert!(cli.autoplay);
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_outline_subcommand() {
        let cli =
            Cli::try_parse_from(["osijourney", "outline", "--json", "--level", "base"]).unwrap();
        match cli.command {
            Some(Commands::Outline { json, level }) => {
                assert!(json);
                assert_eq!(level, Some(Level::Base));
            }
            _ => panic!("expected outline"),
        }
    }

    #[test]
    fn test_quiet_applies_to_export() {
        let cli = Cli::try_parse_from(["osijourney", "export", "-q", "--width", "800"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Export { width: 800, .. })));
    }

    #[test]
    fn test_level_maps_to_feature_level() {
        assert_eq!(FeatureLevel::from(Level::Base), FeatureLevel::Base);
        assert_eq!(FeatureLevel::from(Level::Large), FeatureLevel::LargeDisplay);
        assert_eq!(FeatureLevel::from(Level::Info), FeatureLevel::InfoPanels);
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["osijourney", "--level", "deluxe"]).is_err());
    }
}
