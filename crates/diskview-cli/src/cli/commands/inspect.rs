//! `diskview inspect <url>` – show classification and the planned lookups.

use anyhow::Result;
use diskview_core::config::DiskviewConfig;
use diskview_core::share_link::extract_key_and_path;
use diskview_core::{media, provider, session, Resolver};

pub fn run_inspect(cfg: &DiskviewConfig, url: &str) -> Result<()> {
    let url = url.trim();
    let supported = provider::is_supported_host(url);
    println!("Link:            {}", url);
    println!("Yandex.Disk:     {}", yes_no(supported));
    println!("Direct media:    {}", yes_no(media::looks_like_direct_media(url)));
    println!("Needs resolving: {}", yes_no(session::needs_resolution(url)));

    match extract_key_and_path(url) {
        Some(share) => {
            println!("Share key:       {}", share.key);
            println!("Sub-path:        {}", share.path.as_deref().unwrap_or("(share root)"));
            println!("Origin:          {}", share.origin);
        }
        None => println!("Share key:       (no /d/<key> segment)"),
    }

    if !supported {
        return Ok(());
    }

    let resolver = Resolver::from_config(cfg);
    let attempts = resolver.attempts_for(url);
    println!("Lookups ({}):", attempts.len());
    for (i, query) in attempts.iter().enumerate() {
        let request = query.to_url(&resolver.options().api_base)?;
        println!("  {}. {}", i + 1, query);
        println!("     GET {}", request);
    }
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
