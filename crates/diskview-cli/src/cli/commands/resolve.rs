//! `diskview resolve <url>` – print the direct media URL for a public link.

use anyhow::{Context, Result};
use diskview_core::config::DiskviewConfig;
use diskview_core::Resolver;

pub async fn run_resolve(cfg: &DiskviewConfig, url: String) -> Result<()> {
    let resolver = Resolver::from_config(cfg);
    let href = tokio::task::spawn_blocking(move || resolver.resolve(url.trim()))
        .await
        .context("resolve task join")??;
    println!("{}", href);
    Ok(())
}
