//! StyleCatalog - validated CRUD over the style store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BeerError, BeerStyle, StyleId};
use crate::ports::{IdGenerator, StyleRepository};

/// Input of [`StyleCatalog::create`]. A missing id is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStyle {
    #[serde(default)]
    pub id: Option<StyleId>,
    pub name: String,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl NewStyle {
    pub fn new(name: impl Into<String>, min_temp: f64, max_temp: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            min_temp,
            max_temp,
        }
    }

    pub fn with_id(mut self, id: impl Into<StyleId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Replacement fields of [`StyleCatalog::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFields {
    pub name: String,
    pub min_temp: f64,
    pub max_temp: f64,
}

#[derive(Clone)]
pub struct StyleCatalog {
    styles: Arc<dyn StyleRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl StyleCatalog {
    pub fn new(styles: Arc<dyn StyleRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { styles, ids }
    }

    /// Validate and store a style. An existing style with the same id is
    /// overwritten.
    pub async fn create(&self, new: NewStyle) -> Result<BeerStyle, BeerError> {
        let id = new.id.unwrap_or_else(|| self.ids.generate_style_id());
        let style = BeerStyle::new(id, new.name, new.min_temp, new.max_temp)?;
        self.styles.create(style.clone()).await?;
        debug!(id = %style.id(), name = style.name(), "style created");
        Ok(style)
    }

    pub async fn update(&self, id: &StyleId, fields: StyleFields) -> Result<BeerStyle, BeerError> {
        let style = BeerStyle::new(id.clone(), fields.name, fields.min_temp, fields.max_temp)?;
        self.styles.update(style.clone()).await?;
        debug!(id = %style.id(), name = style.name(), "style updated");
        Ok(style)
    }

    pub async fn delete(&self, id: &StyleId) -> Result<(), BeerError> {
        self.styles.delete(id).await?;
        debug!(%id, "style deleted");
        Ok(())
    }

    pub async fn get(&self, id: &StyleId) -> Result<BeerStyle, BeerError> {
        self.styles.find_by_id(id).await
    }

    /// All styles, sorted by name then id.
    pub async fn list(&self) -> Result<Vec<BeerStyle>, BeerError> {
        let mut styles = self.styles.find_all().await?;
        styles.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::impls::InMemoryStyleRepository;
    use crate::ports::{FixedClock, UlidGenerator};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn catalog() -> StyleCatalog {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        StyleCatalog::new(
            Arc::new(InMemoryStyleRepository::new()),
            Arc::new(UlidGenerator::new(clock)),
        )
    }

    #[tokio::test]
    async fn create_generates_missing_id() {
        let catalog = catalog();
        let style = catalog.create(NewStyle::new("IPA", -7.0, 10.0)).await.unwrap();

        assert!(style.id().as_str().starts_with(crate::domain::ids::GENERATED_PREFIX));
        assert_eq!(catalog.get(style.id()).await.unwrap(), style);
    }

    #[tokio::test]
    async fn create_keeps_given_id() {
        let catalog = catalog();
        let style = catalog
            .create(NewStyle::new("Dunkel", -8.0, 2.0).with_id("6"))
            .await
            .unwrap();
        assert_eq!(style.id().as_str(), "6");
    }

    #[rstest]
    #[case::empty_name("", 0.0, 1.0)]
    #[case::inverted_range("Pilsens", 4.0, -2.0)]
    #[case::not_a_number("Pilsens", f64::NAN, 1.0)]
    #[tokio::test]
    async fn create_rejects_invalid_styles(#[case] name: &str, #[case] min: f64, #[case] max: f64) {
        let catalog = catalog();
        let err = catalog.create(NewStyle::new(name, min, max)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let catalog = catalog();
        let style = catalog
            .create(NewStyle::new("Red Ale", -5.0, 5.0).with_id("4"))
            .await
            .unwrap();

        let fields = StyleFields {
            name: "Red Ale".into(),
            min_temp: -4.0,
            max_temp: 6.0,
        };
        let updated = catalog.update(style.id(), fields).await.unwrap();
        assert_eq!(updated.min_temp(), -4.0);
        assert_eq!(catalog.get(style.id()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_are_not_found() {
        let catalog = catalog();
        let id = StyleId::new("missing");
        let fields = StyleFields {
            name: "IPA".into(),
            min_temp: 0.0,
            max_temp: 1.0,
        };

        assert_eq!(
            catalog.update(&id, fields).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(catalog.delete(&id).await.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn list_is_sorted_by_name_then_id() {
        let catalog = catalog();
        for (id, name) in [("b", "Weissbier"), ("c", "IPA"), ("a", "Weissbier")] {
            catalog
                .create(NewStyle::new(name, 0.0, 1.0).with_id(id))
                .await
                .unwrap();
        }

        let listed: Vec<_> = catalog
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id().as_str().to_string())
            .collect();
        assert_eq!(listed, ["c", "a", "b"]);
    }
}
