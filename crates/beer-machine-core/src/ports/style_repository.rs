//! StyleRepository port - the beer style store.
//!
//! The repository only persists and indexes. Validation happens one layer
//! above (the style is built through [`BeerStyle::new`] before it gets here).

use async_trait::async_trait;

use crate::domain::{BeerError, BeerStyle, StyleId};

/// StyleRepository stores beer styles by id.
///
/// # Contract
/// - `create` overwrites a style that already uses the same id.
/// - `update` / `delete` fail with [`BeerError::StyleNotFound`] for an id that
///   is not tracked.
/// - `find_all` order is unspecified; callers that need determinism sort.
/// - Returned styles are copies; nothing hands out references into storage.
#[async_trait]
pub trait StyleRepository: Send + Sync {
    async fn create(&self, style: BeerStyle) -> Result<(), BeerError>;

    async fn update(&self, style: BeerStyle) -> Result<(), BeerError>;

    async fn delete(&self, id: &StyleId) -> Result<(), BeerError>;

    async fn find_by_id(&self, id: &StyleId) -> Result<BeerStyle, BeerError>;

    async fn find_all(&self) -> Result<Vec<BeerStyle>, BeerError>;
}
