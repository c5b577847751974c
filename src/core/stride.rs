//! Strideable values: types that advance by a fixed distance.
//!
//! The distance type may differ from the value type, e.g. a point in time
//! advances by a duration, and an unsigned counter advances by a signed step.

use std::time::{Duration, Instant, SystemTime};

/// A value that can be advanced by a fixed distance.
///
/// Integers wrap at their bounds. Time values (`Instant`, `SystemTime` and the
/// chrono date-times) hold at their current value when a step would overflow
/// their range.
///
/// # Example
///
/// ```rust
/// use endless::core::Strideable;
/// use std::time::{Duration, Instant};
///
/// assert_eq!(10u32.advanced_by(&-3), 7);
/// assert_eq!(1.5f64.advanced_by(&0.25), 1.75);
///
/// let now = Instant::now();
/// assert_eq!(now.advanced_by(&Duration::from_secs(1)), now + Duration::from_secs(1));
/// ```
pub trait Strideable: Clone {
    /// Distance type used to advance values.
    type Stride: Clone;

    /// Return this value moved forward by `stride`.
    fn advanced_by(&self, stride: &Self::Stride) -> Self;
}

macro_rules! signed_strideable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Strideable for $ty {
                type Stride = $ty;

                #[inline]
                fn advanced_by(&self, stride: &$ty) -> Self {
                    self.wrapping_add(*stride)
                }
            }
        )*
    };
}

macro_rules! unsigned_strideable {
    ($($ty:ty => $stride:ty),* $(,)?) => {
        $(
            impl Strideable for $ty {
                type Stride = $stride;

                #[inline]
                fn advanced_by(&self, stride: &$stride) -> Self {
                    self.wrapping_add_signed(*stride)
                }
            }
        )*
    };
}

macro_rules! float_strideable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Strideable for $ty {
                type Stride = $ty;

                #[inline]
                fn advanced_by(&self, stride: &$ty) -> Self {
                    self + stride
                }
            }
        )*
    };
}

signed_strideable!(i8, i16, i32, i64, i128, isize);
unsigned_strideable!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128, usize => isize);
float_strideable!(f32, f64);

// Time values cannot wrap. Once a step would leave the representable range
// they hold at their current value, so `advanced_by` stays total.

impl Strideable for Instant {
    type Stride = Duration;

    fn advanced_by(&self, stride: &Duration) -> Self {
        self.checked_add(*stride).unwrap_or(*self)
    }
}

impl Strideable for SystemTime {
    type Stride = Duration;

    fn advanced_by(&self, stride: &Duration) -> Self {
        self.checked_add(*stride).unwrap_or(*self)
    }
}

impl<Tz: chrono::TimeZone> Strideable for chrono::DateTime<Tz> {
    type Stride = chrono::Duration;

    fn advanced_by(&self, stride: &chrono::Duration) -> Self {
        self.clone()
            .checked_add_signed(*stride)
            .unwrap_or_else(|| self.clone())
    }
}

impl Strideable for chrono::NaiveDateTime {
    type Stride = chrono::Duration;

    fn advanced_by(&self, stride: &chrono::Duration) -> Self {
        self.checked_add_signed(*stride).unwrap_or(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn signed_integers_advance_in_both_directions() {
        assert_eq!(0i32.advanced_by(&3), 3);
        assert_eq!(0i32.advanced_by(&-3), -3);
        assert_eq!(i8::MAX.advanced_by(&1), i8::MIN);
    }

    #[test]
    fn unsigned_integers_take_signed_steps() {
        assert_eq!(5u8.advanced_by(&-2), 3);
        assert_eq!(0usize.advanced_by(&-1), usize::MAX);
        assert_eq!(u64::MAX.advanced_by(&1), 0);
    }

    #[test]
    fn zero_stride_is_identity() {
        assert_eq!(42u16.advanced_by(&0), 42);
        assert_eq!(2.5f32.advanced_by(&0.0), 2.5);
    }

    #[test]
    fn system_time_advances_by_duration() {
        let epoch = SystemTime::UNIX_EPOCH;
        let later = epoch.advanced_by(&Duration::from_secs(60));
        assert_eq!(later.duration_since(epoch).ok(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn chrono_datetime_advances_by_signed_duration() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let next = start.advanced_by(&chrono::Duration::days(1));
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());

        let back = start.advanced_by(&chrono::Duration::hours(-12));
        assert_eq!(back, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn naive_datetime_advances_by_duration() {
        let start = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let next = start.advanced_by(&chrono::Duration::minutes(45));
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        assert_eq!(next, expected);
    }

    #[test]
    fn naive_datetime_holds_at_range_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let step = chrono::Duration::days(36_500);

        let mut current = start;
        for _ in 0..3_000 {
            current = current.advanced_by(&step);
        }

        assert!(current > start);
        assert_eq!(current.advanced_by(&step), current);
        assert!(current.checked_add_signed(step).is_none());
    }

    #[test]
    fn datetime_holds_at_range_start_with_negative_step() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let step = chrono::Duration::days(-36_500);

        let mut current = start;
        for _ in 0..3_000 {
            current = current.advanced_by(&step);
        }

        assert!(current < start);
        assert_eq!(current.advanced_by(&step), current);
    }

    #[test]
    fn system_time_holds_when_duration_overflows() {
        let step = Duration::from_secs(u64::MAX / 4);

        let mut current = SystemTime::UNIX_EPOCH;
        for _ in 0..10 {
            current = current.advanced_by(&step);
        }

        assert!(current >= SystemTime::UNIX_EPOCH);
        assert_eq!(current.advanced_by(&step), current);
    }

    #[test]
    fn instant_holds_when_duration_overflows() {
        let now = Instant::now();
        let huge = Duration::MAX;
        assert_eq!(now.advanced_by(&huge), now);
    }
}
