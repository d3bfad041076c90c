//! `diskview last` – print the last opened link.

use anyhow::Result;
use diskview_core::store::{FileLinkStore, LinkStore};

pub fn run_last() -> Result<()> {
    let store = FileLinkStore::open_default()?;
    match store.load_last()? {
        Some(link) => println!("{}", link),
        None => println!("No link saved yet ({}).", store.path().display()),
    }
    Ok(())
}
