//! Seeded value source shared by all builders.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::Password;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 123;

/// Textual form of generated timestamps.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Midnight UTC of the current day.
///
/// Used as the default anchor for future dates so that repeated runs on the
/// same day produce identical rows.
pub fn default_anchor() -> NaiveDateTime {
    Utc::now().date_naive().and_time(NaiveTime::MIN)
}

/// Deterministic source of fake field values.
///
/// Every method consumes the next value(s) from the seeded rng. Calling the
/// same methods in the same order on two generators built with the same
/// seed and anchor yields identical results.
pub struct DataGenerator {
    seed: u64,
    rng: StdRng,
    /// Reference instant for `future_timestamp`, whole seconds.
    anchor: NaiveDateTime,
}

impl DataGenerator {
    /// Create a new generator.
    ///
    /// Sub-second precision is dropped from `anchor`.
    pub fn new(seed: u64, anchor: NaiveDateTime) -> Self {
        let anchor = anchor.with_nanosecond(0).unwrap_or(anchor);
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            anchor,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    /// House number followed by a street name.
    pub fn street_address(&mut self) -> String {
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        format!("{number} {street}")
    }

    pub fn city(&mut self) -> String {
        CityName().fake_with_rng(&mut self.rng)
    }

    pub fn password(&mut self) -> String {
        Password(10..17).fake_with_rng(&mut self.rng)
    }

    /// Lorem sentence of 3 to 8 words.
    pub fn sentence(&mut self) -> String {
        Sentence(3..9).fake_with_rng(&mut self.rng)
    }

    /// Lorem paragraph of 3 to 6 sentences.
    pub fn paragraph(&mut self) -> String {
        Paragraph(3..7).fake_with_rng(&mut self.rng)
    }

    /// Uniform integer in `min..=max`. Returns `min` when `max < min`.
    pub fn int_in_range(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform choice from `items`, `None` if empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Whole-second timestamp strictly after the anchor and at most
    /// `within_years` years (of 365 days) later.
    pub fn future_timestamp(&mut self, within_years: u32) -> NaiveDateTime {
        let max_offset = (i64::from(within_years) * SECONDS_PER_YEAR).max(1);
        let offset = self.rng.random_range(1..=max_offset);
        self.anchor + Duration::seconds(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_deterministic_sequence() {
        let mut gen1 = DataGenerator::new(DEFAULT_SEED, anchor());
        let mut gen2 = DataGenerator::new(DEFAULT_SEED, anchor());

        for _ in 0..20 {
            assert_eq!(gen1.first_name(), gen2.first_name());
            assert_eq!(gen1.company_name(), gen2.company_name());
            assert_eq!(gen1.paragraph(), gen2.paragraph());
            assert_eq!(gen1.int_in_range(1, 1000), gen2.int_in_range(1, 1000));
            assert_eq!(gen1.future_timestamp(1), gen2.future_timestamp(1));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut gen1 = DataGenerator::new(1, anchor());
        let mut gen2 = DataGenerator::new(2, anchor());

        let a: Vec<u64> = (0..16).map(|_| gen1.int_in_range(0, u64::MAX)).collect();
        let b: Vec<u64> = (0..16).map(|_| gen2.int_in_range(0, u64::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_int_in_range_bounds() {
        let mut generator = DataGenerator::new(42, anchor());

        for _ in 0..500 {
            let v = generator.int_in_range(1, 12);
            assert!((1..=12).contains(&v));
        }
        assert_eq!(generator.int_in_range(5, 5), 5);
        assert_eq!(generator.int_in_range(9, 3), 9);
    }

    #[test]
    fn test_future_timestamp_window() {
        let mut generator = DataGenerator::new(42, anchor());
        let limit = anchor() + Duration::days(365);

        for _ in 0..500 {
            let ts = generator.future_timestamp(1);
            assert!(ts > anchor());
            assert!(ts <= limit);
            assert_eq!(ts.nanosecond(), 0);
        }
    }

    #[test]
    fn test_anchor_drops_subseconds() {
        let anchor = anchor() + Duration::milliseconds(750);
        let generator = DataGenerator::new(1, anchor);
        assert_eq!(generator.anchor().nanosecond(), 0);
    }

    #[test]
    fn test_pick() {
        let mut generator = DataGenerator::new(42, anchor());
        let empty: [u8; 0] = [];

        assert!(generator.pick(&empty).is_none());
        assert!(matches!(generator.pick(&["a", "b"]), Some(&"a") | Some(&"b")));
    }
}
