use std::collections::{BTreeMap, HashMap};

use crate::models::aggregation::{AggregatedWindow, BucketAggregate, CategoryShare};
use crate::models::bucket::Bucket;
use crate::models::record::{MonetaryRecord, RecordKind};

/// Buckets raw income/expense records into calendar months.
///
/// Pure business logic: no I/O, no clock.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate records over the trailing `window_len` months ending at `window_end`.
    ///
    /// Produces one aggregate per month (oldest first, empty months included)
    /// and the net of all records dated before the first month, so cumulative
    /// series started mid-history are seeded correctly.
    ///
    /// Records after `window_end` fall outside the window and are ignored.
    /// A zero-length window yields no buckets; everything up to and including
    /// `window_end` then counts as carry-forward.
    pub fn aggregate(
        &self,
        records: &[MonetaryRecord],
        window_end: Bucket,
        window_len: usize,
    ) -> AggregatedWindow {
        let window_start = window_end.offset(1 - window_len as i64);

        let mut buckets: Vec<BucketAggregate> = window_start
            .range_to(window_end)
            .into_iter()
            .map(BucketAggregate::empty)
            .collect();

        // Index buckets for O(1) lookup per record
        let index: HashMap<Bucket, usize> = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.bucket, i))
            .collect();

        let mut carry_forward = 0.0;
        let mut outside = 0usize;

        for record in records {
            let bucket = Bucket::of(record.occurred_on);
            if bucket < window_start {
                carry_forward += record.signed_amount();
                continue;
            }
            let Some(&i) = index.get(&bucket) else {
                outside += 1;
                continue;
            };
            let aggregate = &mut buckets[i];
            match record.kind {
                RecordKind::Income => aggregate.income_total += record.amount,
                RecordKind::Expense => {
                    aggregate.expense_total += record.amount;
                    *aggregate
                        .per_category_expense
                        .entry(record.category.clone())
                        .or_insert(0.0) += record.amount;
                }
            }
        }

        tracing::debug!(
            window_end = %window_end,
            buckets = buckets.len(),
            records = records.len(),
            after_window = outside,
            carry_forward,
            "aggregated record window"
        );

        AggregatedWindow {
            buckets,
            carry_forward,
        }
    }

    /// Sum expenses by category, bucket-agnostic.
    ///
    /// Income records are skipped. Used for the current/prior month inputs of
    /// the forecaster and the comparator.
    pub fn expenses_by_category(&self, records: &[MonetaryRecord]) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for record in records.iter().filter(|r| r.is_expense()) {
            *totals.entry(record.category.clone()).or_insert(0.0) += record.amount;
        }
        totals
    }

    /// Records dated within `first..=last` (inclusive month range).
    pub fn records_between(
        &self,
        records: &[MonetaryRecord],
        first: Bucket,
        last: Bucket,
    ) -> Vec<MonetaryRecord> {
        records
            .iter()
            .filter(|r| {
                let bucket = Bucket::of(r.occurred_on);
                bucket >= first && bucket <= last
            })
            .cloned()
            .collect()
    }

    /// Expense total and share per category over a window of aggregates.
    ///
    /// Sorted by total, largest first (ties alphabetical).
    pub fn category_breakdown(&self, aggregates: &[BucketAggregate]) -> Vec<CategoryShare> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for aggregate in aggregates {
            for (category, amount) in &aggregate.per_category_expense {
                *totals.entry(category.as_str()).or_insert(0.0) += amount;
            }
        }

        let window_expense: f64 = totals.values().sum();

        let mut shares: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, total)| CategoryShare {
                category: category.to_string(),
                total,
                share_pct: if window_expense > 0.0 {
                    (total / window_expense) * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        // BTreeMap order is alphabetical; a stable sort keeps it for ties
        shares.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        shares
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
