use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Anything placed on the trip calendar at a specific instant.
pub trait Timestamped {
    fn occurs_at(&self) -> DateTime<Utc>;
}

impl Timestamped for DateTime<Utc> {
    fn occurs_at(&self) -> DateTime<Utc> {
        *self
    }
}

/// The period a trip covers, from its start instant to its end instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl TripWindow {
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self { starts_at, ends_at }
    }

    /// Number of calendar days touched by the window, both ends included.
    ///
    /// Compares calendar dates rather than elapsed time, so a window from
    /// 23:00 to 01:00 the next morning covers two days.
    pub fn day_count(&self) -> Result<usize, InvalidRangeError> {
        if self.ends_at < self.starts_at {
            return Err(InvalidRangeError {
                starts_at: self.starts_at,
                ends_at: self.ends_at,
            });
        }
        let days = (self.ends_at.date_naive() - self.starts_at.date_naive()).num_days();
        // `days` is non-negative once the instants are ordered
        Ok(days as usize + 1)
    }
}

/// Raised when a window ends before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("window ends at {ends_at} before it starts at {starts_at}")]
pub struct InvalidRangeError {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Items falling on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<T> {
    pub date: NaiveDate,
    pub items: Vec<T>,
}

/// Group `items` into one bucket per calendar day of `window`.
///
/// Every day from the start date through the end date gets a bucket, empty or
/// not, in ascending order. Items keep their relative input order within a
/// bucket. Items dated outside the window are dropped.
///
/// A reversed window is rejected with [`InvalidRangeError`] instead of
/// producing an empty calendar.
pub fn bucket_by_day<T, I>(
    window: &TripWindow,
    items: I,
) -> Result<Vec<DayBucket<T>>, InvalidRangeError>
where
    T: Timestamped,
    I: IntoIterator<Item = T>,
{
    let day_count = window.day_count()?;
    let first_day = window.starts_at.date_naive();

    let mut buckets: Vec<DayBucket<T>> = first_day
        .iter_days()
        .take(day_count)
        .map(|date| DayBucket {
            date,
            items: Vec::new(),
        })
        .collect();

    for item in items {
        let offset = (item.occurs_at().date_naive() - first_day).num_days();
        if let Ok(index) = usize::try_from(offset)
            && let Some(bucket) = buckets.get_mut(index)
        {
            bucket.items.push(item);
        }
    }

    Ok(buckets)
}
