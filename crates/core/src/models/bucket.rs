use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month used as the aggregation unit for every series.
///
/// Ordering is chronological: the derived `Ord` compares `year` first, then `month`.
/// The month is always within `1..=12`; deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawBucket")]
pub struct Bucket {
    year: i32,
    month: u32,
}

/// Unchecked wire form of a [`Bucket`].
#[derive(Deserialize)]
struct RawBucket {
    year: i32,
    month: u32,
}

impl TryFrom<RawBucket> for Bucket {
    type Error = String;

    fn try_from(raw: RawBucket) -> Result<Self, Self::Error> {
        Bucket::new(raw.year, raw.month)
            .ok_or_else(|| format!("month must be within 1..=12, got {}", raw.month))
    }
}

/// Map a date to the month bucket it falls in.
#[must_use]
pub fn bucket_of(date: NaiveDate) -> Bucket {
    Bucket::of(date)
}

impl Bucket {
    /// Build a bucket from a year and a 1-based month.
    /// Returns `None` when `month` is outside `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The bucket a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year (e.g., 2024)
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1-based (1 = January)
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months since year 0, used for offset arithmetic.
    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }

    /// Shift by a signed number of months.
    #[must_use]
    pub fn offset(&self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal() + months)
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Signed number of months from `self` to `other` (`other - self`).
    #[must_use]
    pub fn months_until(&self, other: Bucket) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Number of days in this month (28 to 31), taken from chrono's calendar.
    ///
    /// Falls back to 31 only for years outside chrono's supported range.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let next = self.offset(1);
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|first| first.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// All buckets from `self` to `end`, inclusive. Empty when `end < self`.
    #[must_use]
    pub fn range_to(&self, end: Bucket) -> Vec<Bucket> {
        let span = self.months_until(end);
        if span < 0 {
            return Vec::new();
        }
        (0..=span).map(|i| self.offset(i)).collect()
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Trailing window selector for bucketed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WindowLength {
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
    ThreeYears,
    /// From the earliest known activity up to the window end.
    All,
}

impl WindowLength {
    /// Fixed month count, or `None` for `All`.
    #[must_use]
    pub fn months(&self) -> Option<usize> {
        match self {
            WindowLength::SixMonths => Some(6),
            WindowLength::OneYear => Some(12),
            WindowLength::TwoYears => Some(24),
            WindowLength::ThreeYears => Some(36),
            WindowLength::All => None,
        }
    }

    /// Resolve the selector to a bucket count ending at `window_end`.
    ///
    /// `All` spans from the bucket of `earliest` to `window_end`; it is at least
    /// one bucket, including when there is no history or the earliest date lies
    /// after `window_end`.
    #[must_use]
    pub fn resolve(&self, earliest: Option<NaiveDate>, window_end: Bucket) -> usize {
        match self.months() {
            Some(months) => months,
            None => earliest
                .map(|date| Bucket::of(date).months_until(window_end) + 1)
                .filter(|span| *span > 0)
                .map_or(1, |span| span as usize),
        }
    }
}

impl std::fmt::Display for WindowLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowLength::SixMonths => write!(f, "6M"),
            WindowLength::OneYear => write!(f, "1Y"),
            WindowLength::TwoYears => write!(f, "2Y"),
            WindowLength::ThreeYears => write!(f, "3Y"),
            WindowLength::All => write!(f, "All"),
        }
    }
}
