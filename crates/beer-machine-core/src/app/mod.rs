//! App - use cases built on top of the ports.
//!
//! - **StyleCatalog**: validated style CRUD
//! - **Recommender**: temperature to style and playlist
//! - **seed**: the default catalogue
//! - **AppBuilder**: configuration to wired use cases

pub mod builder;
pub mod catalog;
pub mod recommend;
pub mod seed;

pub use self::builder::{App, AppBuilder, ProviderKind};
pub use self::catalog::{NewStyle, StyleCatalog, StyleFields};
pub use self::recommend::Recommender;
pub use self::seed::{default_styles, seed_defaults};
