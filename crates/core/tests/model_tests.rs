use chrono::NaiveDate;
use finance_tracker_core::errors::CoreError;
use finance_tracker_core::models::bucket::{bucket_of, Bucket, WindowLength};
use finance_tracker_core::models::export::ExportTable;
use finance_tracker_core::models::investment::InvestmentLot;
use finance_tracker_core::models::record::{MonetaryRecord, RecordKind};
use finance_tracker_core::models::settings::{ForecastPolicy, Settings};
use std::io::Write;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn b(y: i32, m: u32) -> Bucket {
    Bucket::new(y, m).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Bucket
// ═══════════════════════════════════════════════════════════════════

mod bucket {
    use super::*;

    #[test]
    fn bucket_of_maps_date_to_year_and_month() {
        assert_eq!(bucket_of(d(2024, 1, 5)), b(2024, 1));
        assert_eq!(bucket_of(d(2024, 12, 31)), b(2024, 12));
        assert_eq!(Bucket::of(d(2023, 2, 28)), b(2023, 2));
    }

    #[test]
    fn new_rejects_out_of_range_month() {
        assert!(Bucket::new(2024, 0).is_none());
        assert!(Bucket::new(2024, 13).is_none());
        assert!(Bucket::new(2024, 12).is_some());
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(b(2023, 12) < b(2024, 1));
        assert!(b(2024, 2) > b(2024, 1));
        let mut buckets = vec![b(2024, 3), b(2023, 11), b(2024, 1)];
        buckets.sort();
        assert_eq!(buckets, vec![b(2023, 11), b(2024, 1), b(2024, 3)]);
    }

    #[test]
    fn offset_crosses_year_boundaries() {
        assert_eq!(b(2024, 1).offset(-1), b(2023, 12));
        assert_eq!(b(2024, 12).offset(1), b(2025, 1));
        assert_eq!(b(2024, 1).offset(-13), b(2022, 12));
        assert_eq!(b(2024, 6).offset(24), b(2026, 6));
        assert_eq!(b(2024, 6).prev(), b(2024, 5));
    }

    #[test]
    fn months_until_is_signed() {
        assert_eq!(b(2024, 1).months_until(b(2024, 12)), 11);
        assert_eq!(b(2024, 12).months_until(b(2024, 1)), -11);
        assert_eq!(b(2023, 11).months_until(b(2024, 2)), 3);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(b(2024, 2).days_in_month(), 29);
        assert_eq!(b(2023, 2).days_in_month(), 28);
        assert_eq!(b(1900, 2).days_in_month(), 28);
        assert_eq!(b(2000, 2).days_in_month(), 29);
        assert_eq!(b(2024, 4).days_in_month(), 30);
        assert_eq!(b(2024, 1).days_in_month(), 31);
    }

    #[test]
    fn range_to_is_inclusive() {
        let range = b(2023, 11).range_to(b(2024, 2));
        assert_eq!(range, vec![b(2023, 11), b(2023, 12), b(2024, 1), b(2024, 2)]);
        assert_eq!(b(2024, 1).range_to(b(2024, 1)), vec![b(2024, 1)]);
        assert!(b(2024, 2).range_to(b(2024, 1)).is_empty());
    }

    #[test]
    fn display_and_accessors() {
        assert_eq!(b(2024, 3).to_string(), "2024-03");
        assert_eq!(b(2009, 12).to_string(), "2009-12");
        assert_eq!(b(2024, 3).year(), 2024);
        assert_eq!(b(2024, 3).month(), 3);
    }

    #[test]
    fn serde_roundtrip_json() {
        let json = serde_json::to_string(&b(2024, 7)).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":7}"#);
        let back: Bucket = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b(2024, 7));
    }

    #[test]
    fn deserialize_rejects_out_of_range_month() {
        for json in [r#"{"year":2024,"month":0}"#, r#"{"year":2024,"month":13}"#] {
            let err = serde_json::from_str::<Bucket>(json).unwrap_err();
            assert!(err.to_string().contains("1..=12"), "{err}");
        }
    }

    #[test]
    fn days_in_month_across_year_end() {
        assert_eq!(b(2023, 12).days_in_month(), 31);
        assert_eq!(b(2100, 2).days_in_month(), 28);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  WindowLength
// ═══════════════════════════════════════════════════════════════════

mod window_length {
    use super::*;

    #[test]
    fn fixed_windows() {
        let end = b(2024, 6);
        assert_eq!(WindowLength::SixMonths.resolve(None, end), 6);
        assert_eq!(WindowLength::OneYear.resolve(None, end), 12);
        assert_eq!(WindowLength::TwoYears.resolve(None, end), 24);
        assert_eq!(WindowLength::ThreeYears.resolve(Some(d(2000, 1, 1)), end), 36);
    }

    #[test]
    fn all_spans_from_earliest_record() {
        let end = b(2024, 6);
        assert_eq!(WindowLength::All.resolve(Some(d(2024, 1, 20)), end), 6);
        assert_eq!(WindowLength::All.resolve(Some(d(2024, 6, 2)), end), 1);
        assert_eq!(WindowLength::All.resolve(Some(d(2021, 6, 30)), end), 37);
    }

    #[test]
    fn all_is_at_least_one_bucket() {
        let end = b(2024, 6);
        assert_eq!(WindowLength::All.resolve(None, end), 1);
        assert_eq!(WindowLength::All.resolve(Some(d(2025, 1, 1)), end), 1);
    }

    #[test]
    fn default_is_one_year() {
        assert_eq!(WindowLength::default(), WindowLength::OneYear);
    }

    #[test]
    fn display() {
        assert_eq!(WindowLength::SixMonths.to_string(), "6M");
        assert_eq!(WindowLength::All.to_string(), "All");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonetaryRecord / InvestmentLot
// ═══════════════════════════════════════════════════════════════════

mod record {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let income = MonetaryRecord::income("Salary", 1000.0, d(2024, 1, 5));
        let expense = MonetaryRecord::expense("Food", 300.0, d(2024, 1, 10));
        assert_eq!(income.kind, RecordKind::Income);
        assert_eq!(expense.kind, RecordKind::Expense);
        assert!(expense.is_expense());
        assert!(!income.is_expense());
        assert_ne!(income.id, expense.id);
    }

    #[test]
    fn signed_amount() {
        assert_eq!(MonetaryRecord::income("Salary", 1000.0, d(2024, 1, 5)).signed_amount(), 1000.0);
        assert_eq!(MonetaryRecord::expense("Food", 300.0, d(2024, 1, 5)).signed_amount(), -300.0);
    }

    #[test]
    fn with_description() {
        let r = MonetaryRecord::expense("Housing", 2000.0, d(2024, 1, 1)).with_description("Rent");
        assert_eq!(r.description.as_deref(), Some("Rent"));
    }

    #[test]
    fn description_defaults_when_missing_in_json() {
        let r = MonetaryRecord::expense("Food", 12.5, d(2024, 3, 2));
        let mut value = serde_json::to_value(&r).unwrap();
        value.as_object_mut().unwrap().remove("description");
        let back: MonetaryRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.description, None);
        assert_eq!(back.amount, 12.5);
    }

    #[test]
    fn kind_display() {
        assert_eq!(RecordKind::Income.to_string(), "Income");
        assert_eq!(RecordKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn lot_values() {
        let lot = InvestmentLot::new("ACME", "Stocks", 10.0, 20.0, 25.0, d(2024, 1, 1));
        assert_eq!(lot.cost_basis(), 200.0);
        assert_eq!(lot.market_value(), 250.0);
        assert_eq!(lot.gain(), 50.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults_match_forecast_policy_constants() {
        let s = Settings::default();
        assert_eq!(s.currency, "USD");
        assert_eq!(s.default_window, WindowLength::OneYear);
        assert_eq!(s.forecast.pace_weight, 0.6);
        assert_eq!(s.forecast.history_weight, 0.4);
        assert_eq!(s.forecast.min_days_for_pace, 7);
        assert_eq!(s.forecast.history_months, 3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let s = Settings::from_json(r#"{"currency":"BRL"}"#).unwrap();
        assert_eq!(s.currency, "BRL");
        assert_eq!(s.forecast, ForecastPolicy::default());
    }

    #[test]
    fn from_json_partial_policy() {
        let s = Settings::from_json(
            r#"{"forecast":{"pace_weight":0.5,"history_weight":0.5},"default_window":"SixMonths"}"#,
        )
        .unwrap();
        assert_eq!(s.forecast.pace_weight, 0.5);
        assert_eq!(s.forecast.min_days_for_pace, 7);
        assert_eq!(s.default_window, WindowLength::SixMonths);
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let err = Settings::from_json(r#"{"forecast":{"pace_weight":0.7}}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn rejects_zero_history_months() {
        let err = Settings::from_json(r#"{"forecast":{"history_months":0}}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn rejects_bad_currency() {
        let err = Settings::from_json(r#"{"currency":"EURO"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = Settings::from_json("{").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn json_roundtrip() {
        let s = Settings::default();
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"currency":"EUR","default_window":"TwoYears"}}"#).unwrap();
        let s = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(s.currency, "EUR");
        assert_eq!(s.default_window, WindowLength::TwoYears);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ExportTable
// ═══════════════════════════════════════════════════════════════════

mod export_table {
    use super::*;

    fn table() -> ExportTable {
        ExportTable {
            title: "Test".into(),
            headers: vec!["Category".into(), "Amount".into()],
            rows: vec![
                vec!["Food".into(), "300.00".into()],
                vec!["Bars, pubs".into(), "12.50".into()],
            ],
        }
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = table().to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Category,Amount");
        assert_eq!(lines[1], "Food,300.00");
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        let csv = table().to_csv().unwrap();
        assert!(csv.contains("\"Bars, pubs\",12.50"));
    }

    #[test]
    fn json_roundtrip() {
        let json = table().to_json().unwrap();
        let back: ExportTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table());
        assert_eq!(back.row_count(), 2);
    }
}
