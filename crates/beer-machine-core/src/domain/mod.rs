//! Domain model (ids, styles, selection, playlists, errors).
//!
//! Nothing in here performs I/O. Infrastructure lives behind the traits in
//! [`crate::ports`].

pub mod errors;
pub mod ids;
pub mod playlist;
pub mod selection;
pub mod style;

pub use self::errors::{BeerError, ErrorKind};
pub use self::ids::StyleId;
pub use self::playlist::{Playlist, Recommendation, Track};
pub use self::selection::select_best;
pub use self::style::BeerStyle;
