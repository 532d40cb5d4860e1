//! IdGenerator port - mints ids for styles created without one.
//!
//! # Implementation
//! - **UlidGenerator**: ULID from a [`Clock`] timestamp plus random bits

use crate::domain::StyleId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator produces fresh style ids.
///
/// # Thread Safety
/// - `Send + Sync` so one generator can be shared by every request
pub trait IdGenerator: Send + Sync {
    fn generate_style_id(&self) -> StyleId;
}

/// UlidGenerator builds `style-<ULID>` ids.
///
/// The timestamp part comes from the clock, so a [`crate::ports::FixedClock`]
/// pins it in tests while the random part keeps ids unique.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_style_id(&self) -> StyleId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        StyleId::from_ulid(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn ulid_generator_generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_style_id();
        let id2 = id_gen.generate_style_id();
        let id3 = id_gen.generate_style_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn ulid_generator_with_fixed_clock_shares_the_timestamp() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_style_id();
        let id2 = id_gen.generate_style_id();
        assert_ne!(id1, id2);

        let ulid1 = Ulid::from_string(id1.as_str().trim_start_matches("style-")).unwrap();
        let ulid2 = Ulid::from_string(id2.as_str().trim_start_matches("style-")).unwrap();
        assert_eq!(ulid1.timestamp_ms(), ulid2.timestamp_ms());
        assert_eq!(ulid1.timestamp_ms(), fixed_time.timestamp_millis() as u64);
    }
}
