//! Impls - adapters implementing the ports.
//!
//! - **MokaCache**: bounded cache with optional per-entry TTL
//! - **InMemoryStyleRepository**: style store over a bounded cache plus key index
//! - **StubPlaylistGateway** / **SpotifyPlaylistGateway**: playlist providers
//! - **CachedPlaylistGateway**: TTL cache in front of a provider

pub mod cached_gateway;
pub mod inmem_styles;
pub mod moka_cache;
pub mod spotify;
pub mod stub_gateway;

pub use self::cached_gateway::CachedPlaylistGateway;
pub use self::inmem_styles::InMemoryStyleRepository;
pub use self::moka_cache::MokaCache;
pub use self::spotify::{SpotifyClient, SpotifyError, SpotifyPlaylistGateway};
pub use self::stub_gateway::StubPlaylistGateway;
