// dataforge-core/src/domain/dates.rs

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Inclusive calendar-day window for date sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds a validated window; an inverted window fails fast.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.start > self.end {
            return Err(DomainError::InvalidDateWindow {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    /// Number of whole days spanned (0 for a single-day window).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// One date drawn uniformly over the inclusive day range.
    pub fn sample(&self, rng: &mut impl Rng) -> NaiveDate {
        let offset = rng.random_range(0..=self.span_days());
        self.start + Duration::days(offset)
    }

    /// `count` independent uniform draws. With a fixed rng state the
    /// returned sequence is bit-for-bit reproducible.
    pub fn sample_n(&self, count: usize, rng: &mut impl Rng) -> Vec<NaiveDate> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = DateWindow::new(d(2024, 1, 1), d(2022, 1, 1));
        assert!(matches!(err, Err(DomainError::InvalidDateWindow { .. })));
    }

    #[test]
    fn test_samples_stay_inside_window() {
        let window = DateWindow::new(d(2022, 1, 1), d(2022, 1, 10)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for date in window.sample_n(500, &mut rng) {
            assert!(window.contains(date), "{date} escaped the window");
        }
    }

    #[test]
    fn test_single_day_window() {
        let window = DateWindow::new(d(2023, 6, 15), d(2023, 6, 15)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(window.sample(&mut rng), d(2023, 6, 15));
        assert_eq!(window.span_days(), 0);
    }

    #[test]
    fn test_sequence_reproducible_from_seed() {
        let window = DateWindow::new(d(2022, 1, 1), d(2024, 12, 31)).unwrap();
        let a = window.sample_n(100, &mut ChaCha8Rng::seed_from_u64(42));
        let b = window.sample_n(100, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
