//! BeerStyle entity.
//!
//! A style can only be obtained through [`BeerStyle::new`] (or by
//! deserializing, which goes through the same checks), so every value in
//! circulation satisfies: non-empty name, finite temperatures, and
//! `min_temp <= max_temp`.

use serde::{Deserialize, Serialize};

use super::errors::BeerError;
use super::ids::StyleId;

/// A named beer category with an inclusive ideal serving range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StyleRecord", rename_all = "camelCase")]
pub struct BeerStyle {
    id: StyleId,
    name: String,
    min_temp: f64,
    max_temp: f64,
}

/// Unvalidated wire shape of a style.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StyleRecord {
    id: StyleId,
    name: String,
    min_temp: f64,
    max_temp: f64,
}

impl TryFrom<StyleRecord> for BeerStyle {
    type Error = BeerError;

    fn try_from(record: StyleRecord) -> Result<Self, Self::Error> {
        BeerStyle::new(record.id, record.name, record.min_temp, record.max_temp)
    }
}

impl BeerStyle {
    pub fn new(
        id: StyleId,
        name: impl Into<String>,
        min_temp: f64,
        max_temp: f64,
    ) -> Result<Self, BeerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BeerError::InvalidStyle("name must not be empty".to_string()));
        }
        if !min_temp.is_finite() || !max_temp.is_finite() {
            return Err(BeerError::InvalidStyle(format!(
                "temperatures must be finite (min={min_temp}, max={max_temp})"
            )));
        }
        if min_temp > max_temp {
            return Err(BeerError::InvalidStyle(format!(
                "min temperature {min_temp} is above max temperature {max_temp}"
            )));
        }
        Ok(Self {
            id,
            name,
            min_temp,
            max_temp,
        })
    }

    pub fn id(&self) -> &StyleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    /// Midpoint of the serving range.
    pub fn average_temperature(&self) -> f64 {
        (self.min_temp + self.max_temp) / 2.0
    }

    /// Selection distance: `|average - target|`.
    pub fn distance_to(&self, target_temp: f64) -> f64 {
        (self.average_temperature() - target_temp).abs()
    }
}
