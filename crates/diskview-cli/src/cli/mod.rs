//! CLI for diskview.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use diskview_core::config;

use commands::{run_completions, run_inspect, run_last, run_man, run_play, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "diskview")]
#[command(about = "diskview: play Yandex.Disk public video links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a public share link and print the direct media URL.
    Resolve {
        /// Public link, e.g. https://disk.yandex.ru/d/<key>/video.mov
        url: String,
    },

    /// Open a link for playback: resolve it if needed and hand it to the player.
    ///
    /// Without URL, the last opened link (or `default_link` from config) is used.
    Play {
        /// Public share link or direct video URL.
        url: Option<String>,

        /// Player command to run with the direct URL (overrides `player` in config).
        #[arg(long, value_name = "CMD")]
        player: Option<String>,

        /// Only print the URL, even if a player is configured.
        #[arg(long, conflicts_with = "player")]
        no_player: bool,
    },

    /// Show how a link would be handled, without contacting the API.
    Inspect {
        /// Link to inspect.
        url: String,
    },

    /// Print the last opened link.
    Last,

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page (roff) on stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { url } => run_resolve(&cfg, url).await?,
            CliCommand::Play {
                url,
                player,
                no_player,
            } => run_play(&cfg, url, player, no_player).await?,
            CliCommand::Inspect { url } => run_inspect(&cfg, &url)?,
            CliCommand::Last => run_last()?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
