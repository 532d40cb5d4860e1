//! Default style catalogue.

use tracing::info;

use super::catalog::{NewStyle, StyleCatalog};
use crate::domain::{BeerError, BeerStyle};

/// The eight stock styles, ids "1" to "8".
pub fn default_styles() -> Vec<NewStyle> {
    [
        ("Weissbier", -1.0, 3.0),
        ("Pilsens", -2.0, 4.0),
        ("Weizenbier", -4.0, 6.0),
        ("Red Ale", -5.0, 5.0),
        ("IPA", -7.0, 10.0),
        ("Dunkel", -8.0, 2.0),
        ("Imperial Stouts", -10.0, 13.0),
        ("Brown Ale", 0.0, 14.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, min, max))| NewStyle::new(name, min, max).with_id((i + 1).to_string()))
    .collect()
}

/// Store the default styles. Running it twice leaves the same catalogue.
pub async fn seed_defaults(catalog: &StyleCatalog) -> Result<Vec<BeerStyle>, BeerError> {
    let mut seeded = Vec::new();
    for style in default_styles() {
        seeded.push(catalog.create(style).await?);
    }
    info!(count = seeded.len(), "default styles seeded");
    Ok(seeded)
}
