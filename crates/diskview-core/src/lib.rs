pub mod config;
pub mod logging;

// Resolver pipeline
pub mod error;
pub mod lookup;
pub mod media;
pub mod provider;
pub mod resolve;
pub mod share_link;

// Caller side: last-link persistence and the play-or-resolve decision
pub mod session;
pub mod store;

pub use error::ResolveError;
pub use resolve::Resolver;
