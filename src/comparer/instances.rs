//! Canonical comparers for primitive and standard library types.
//!
//! - [`OrderingComparer::natural`]: the [`Ord`] order of the type. Integers
//!   ascend numerically, `str`/`String` ascend lexicographically by byte, and
//!   [`SystemTime`] ascends chronologically.
//! - [`OrderingComparer::float`]: floats ordered by `total_cmp`.
//! - [`OrderingComparer::system_time`]: chronological order of wall-clock
//!   instants.
//! - `OrderingComparer::date` / `OrderingComparer::date_time`: chronological
//!   order of `chrono` dates (requires the `chrono` feature).

use std::time::SystemTime;

use super::OrderingComparer;

impl<A: Ord + ?Sized + 'static> OrderingComparer<A> {
    /// The canonical ascending order given by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(OrderingComparer::<i32>::natural().compare(&-3, &2), Ordering::Less);
    /// assert_eq!(OrderingComparer::<str>::natural().compare("b", "a"), Ordering::Greater);
    /// ```
    pub fn natural() -> Self {
        Self::of_compare(|first, second| first.cmp(second))
    }
}

impl<A: Ord + ?Sized + 'static> Default for OrderingComparer<A> {
    fn default() -> Self {
        Self::natural()
    }
}

impl OrderingComparer<f64> {
    /// Ascending numeric order for `f64` using [`f64::total_cmp`].
    ///
    /// This is a total order: `-0.0` sorts before `0.0` and `NaN` sorts after
    /// positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::comparer::OrderingComparer;
    ///
    /// let mut values = vec![2.5, f64::NAN, -1.0, f64::INFINITY];
    /// OrderingComparer::<f64>::float().sort(&mut values);
    /// assert_eq!(&values[..3], &[-1.0, 2.5, f64::INFINITY]);
    /// assert!(values[3].is_nan());
    /// ```
    pub fn float() -> Self {
        Self::of_compare(f64::total_cmp)
    }
}

impl OrderingComparer<f32> {
    /// Ascending numeric order for `f32` using [`f32::total_cmp`].
    pub fn float() -> Self {
        Self::of_compare(f32::total_cmp)
    }
}

impl OrderingComparer<SystemTime> {
    /// Chronological order, earliest first.
    pub fn system_time() -> Self {
        Self::natural()
    }
}

#[cfg(feature = "chrono")]
mod chrono_instances {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

    use super::OrderingComparer;

    impl OrderingComparer<NaiveDate> {
        /// Chronological order of calendar dates, earliest first.
        pub fn date() -> Self {
            Self::natural()
        }
    }

    impl OrderingComparer<NaiveDateTime> {
        /// Chronological order of local date-times, earliest first.
        pub fn naive_date_time() -> Self {
            Self::natural()
        }
    }

    impl<Tz> OrderingComparer<DateTime<Tz>>
    where
        Tz: TimeZone + 'static,
    {
        /// Chronological order of instants, earliest first.
        ///
        /// Values in different time zones are compared by the instant they
        /// denote.
        pub fn date_time() -> Self {
            Self::of_compare(|first: &DateTime<Tz>, second: &DateTime<Tz>| first.cmp(second))
        }
    }
}
