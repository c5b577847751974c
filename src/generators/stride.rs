//! Fixed-step generator over strideable values.

use crate::core::{Generator, Strideable};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::mem;

/// Yields the current value, then advances it by a fixed step.
///
/// No constraint is placed on the step: a zero step yields the start value
/// forever, a negative one walks backwards.
///
/// # Example
///
/// ```rust
/// use endless::generators::StrideForeverGen;
/// use endless::Generator;
///
/// let mut gen = StrideForeverGen::new(10u8, -4);
/// assert_eq!(gen.pull(), 10);
/// assert_eq!(gen.pull(), 6);
/// assert_eq!(gen.pull(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize, T::Stride: Serialize",
    deserialize = "T: Deserialize<'de>, T::Stride: Deserialize<'de>"
))]
pub struct StrideForeverGen<T: Strideable> {
    current: T,
    step: T::Stride,
}

impl<T: Strideable> StrideForeverGen<T> {
    pub fn new(start: T, step: T::Stride) -> Self {
        Self {
            current: start,
            step,
        }
    }

    /// The value the next pull will return.
    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn step(&self) -> &T::Stride {
        &self.step
    }
}

impl<T: Strideable> Generator for StrideForeverGen<T> {
    type Item = T;

    fn pull(&mut self) -> T {
        let next = self.current.advanced_by(&self.step);
        mem::replace(&mut self.current, next)
    }
}

impl<T: Strideable> Iterator for StrideForeverGen<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.pull())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Strideable> FusedIterator for StrideForeverGen<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn first_value_is_start() {
        let mut gen = StrideForeverGen::new(0i32, 3);
        assert_eq!(gen.pull(), 0);
        assert_eq!(gen.pull(), 3);
        assert_eq!(gen.pull(), 6);
        assert_eq!(*gen.current(), 9);
    }

    #[test]
    fn zero_step_is_constant() {
        let values: Vec<i64> = StrideForeverGen::new(5i64, 0).take(100).collect();
        assert!(values.iter().all(|&v| v == 5));
        assert_eq!(values.len(), 100);
    }

    #[test]
    fn float_steps_accumulate() {
        let values: Vec<f64> = StrideForeverGen::new(0.0f64, 0.5).take(4).collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn datetime_steps_by_duration() {
        let start = Utc.with_ymd_and_hms(2024, 2, 28, 0, 0, 0).unwrap();
        let days: Vec<u32> = StrideForeverGen::new(start, chrono::Duration::days(1))
            .take(3)
            .map(|dt| chrono::Datelike::day(&dt))
            .collect();
        assert_eq!(days, vec![28, 29, 1]);
    }

    #[test]
    fn time_stride_past_range_end_keeps_yielding() {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let values: Vec<chrono::NaiveDateTime> =
            StrideForeverGen::new(start, chrono::Duration::days(36_500))
                .take(3_000)
                .collect();

        assert_eq!(values.len(), 3_000);
        assert_eq!(values[0], start);
        assert_eq!(values[2_998], values[2_999]);
    }

    #[test]
    fn generator_state_serializes() {
        let gen = StrideForeverGen::new(1u16, -1i16);
        let json = serde_json::to_string(&gen).unwrap();
        assert_eq!(json, r#"{"current":1,"step":-1}"#);

        let restored: StrideForeverGen<u16> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, gen);
    }
}
