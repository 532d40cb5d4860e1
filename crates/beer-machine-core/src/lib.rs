//! beer-machine-core
//!
//! Recommends a beer style for a temperature and pairs it with a playlist.
//!
//! # Modules
//! - **domain**: styles, selection, playlists, errors (no I/O)
//! - **ports**: traits for the store, caches, playlist providers, clock, ids
//! - **impls**: moka-backed caches and store, Spotify and stub providers,
//!   the caching gateway decorator
//! - **app**: use cases and wiring
//! - **config**: environment configuration

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
