//! `diskview play [url]` – open a link, remembering it for next time.

use anyhow::{Context, Result};
use diskview_core::config::DiskviewConfig;
use diskview_core::session::{self, Session};
use diskview_core::store::FileLinkStore;
use diskview_core::Resolver;
use std::process::Command;

pub async fn run_play(
    cfg: &DiskviewConfig,
    url: Option<String>,
    player: Option<String>,
    no_player: bool,
) -> Result<()> {
    let store = FileLinkStore::open_default()?;
    let link = match url {
        Some(u) => u,
        None => session::initial_link(&store, cfg.default_link.as_deref())
            .context("no link given and none saved yet; pass a URL")?,
    };

    let session = Session::new(Resolver::from_config(cfg), store);
    let playback = tokio::task::spawn_blocking(move || session.open(&link))
        .await
        .context("play task join")??;
    let playback = match playback {
        Some(p) => p,
        None => anyhow::bail!("empty link"),
    };

    println!("{}", playback.url);

    let player = if no_player {
        None
    } else {
        player.or_else(|| cfg.player.clone())
    };
    if let Some(cmd) = player {
        launch_player(&cmd, &playback.url)?;
    }
    Ok(())
}

/// Splits a player command line into program and leading arguments, honoring
/// shell-style quoting (`mpv --title="my clip"`).
fn split_player_command(cmd: &str) -> Result<(String, Vec<String>)> {
    let mut words = shell_words::split(cmd)
        .with_context(|| format!("parse player command: {}", cmd))?
        .into_iter();
    let program = words.next().context("player command is empty")?;
    Ok((program, words.collect()))
}

fn launch_player(cmd: &str, url: &str) -> Result<()> {
    let (program, args) = split_player_command(cmd)?;
    let child = Command::new(&program)
        .args(&args)
        .arg(url)
        .spawn()
        .with_context(|| format!("start player: {}", program))?;
    tracing::info!(pid = child.id(), player = %program, "player started");
    Ok(())
}
