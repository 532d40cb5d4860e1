//! Ports - the seams between the core and its infrastructure.
//!
//! Each trait hides one collaborator so that implementations can be swapped
//! at startup (real playlist provider vs stand-in) or in tests (fake caches,
//! counting gateways).

pub mod cache;
pub mod clock;
pub mod id_generator;
pub mod playlist_gateway;
pub mod playlist_search;
pub mod style_repository;

pub use self::cache::{BoundedCache, TtlCache};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::playlist_gateway::PlaylistGateway;
pub use self::playlist_search::{PlaylistSearch, PlaylistSummary};
pub use self::style_repository::StyleRepository;
