//! Holiday window segmentation.
//!
//! Off-day overrides from today onward are grouped into maximal runs of
//! consecutive dates. Each run becomes a [`HolidaySegment`] carrying one
//! label, even when the source table labels adjacent days differently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{HolidaySummary, OverrideRecord};

/// Whether a record dated exactly today is part of the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodayBoundary {
    /// Keep records with `date >= today`.
    #[default]
    Inclusive,
    /// Keep records with `date > today`.
    Exclusive,
}

impl TodayBoundary {
    fn admits(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            TodayBoundary::Inclusive => date >= today,
            TodayBoundary::Exclusive => date > today,
        }
    }
}

/// A contiguous run of off-days treated as one holiday window.
///
/// `dates` is never empty, ascending, and free of gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySegment {
    /// The label chosen for the whole run.
    pub label: String,
    /// Every date in the run.
    pub dates: Vec<NaiveDate>,
    /// `dates[0]`.
    pub start_date: NaiveDate,
    /// `dates[dates.len() - 1]`.
    pub end_date: NaiveDate,
}

impl HolidaySegment {
    /// Length of the run in days.
    pub fn days(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if `date` lies inside the run (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Converts the segment into its summary form.
    pub fn to_summary(&self) -> HolidaySummary {
        HolidaySummary {
            label: self.label.clone(),
            dates: self.dates.clone(),
            days: self.days(),
        }
    }
}

/// Label frequency count that remembers first-seen order.
///
/// The winning label is the most frequent one. On a tie, the label that was
/// recorded first wins.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::LabelTally;
///
/// let mut tally = LabelTally::default();
/// tally.record("Mid-autumn Festival");
/// tally.record("National Day");
/// assert_eq!(tally.winner(), Some("Mid-autumn Festival"));
///
/// tally.record("National Day");
/// assert_eq!(tally.winner(), Some("National Day"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelTally {
    counts: Vec<(String, usize)>,
}

impl LabelTally {
    /// Counts one occurrence of `label`.
    pub fn record(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.to_string(), 1)),
        }
    }

    /// Returns the winning label, or `None` if nothing was recorded.
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.counts {
            // strict `>` keeps the earlier label on ties
            if best.is_none_or(|b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(label, _)| label.as_str())
    }
}

/// Run under construction.
struct OpenSegment {
    dates: Vec<NaiveDate>,
    tally: LabelTally,
}

impl OpenSegment {
    fn start(record: &OverrideRecord) -> Self {
        let mut tally = LabelTally::default();
        tally.record(&record.label);
        Self {
            dates: vec![record.date],
            tally,
        }
    }

    fn end_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    fn extends_with(&self, date: NaiveDate) -> bool {
        self.end_date().succ_opt() == Some(date)
    }

    fn push(&mut self, record: &OverrideRecord) {
        self.dates.push(record.date);
        self.tally.record(&record.label);
    }

    fn close(self) -> HolidaySegment {
        let label = self.tally.winner().unwrap_or_default().to_string();
        let start_date = self.dates[0];
        let end_date = self.end_date();
        HolidaySegment {
            label,
            dates: self.dates,
            start_date,
            end_date,
        }
    }
}

/// Groups future off-day overrides into contiguous holiday windows.
///
/// # Arguments
///
/// * `records` - The raw override list, in any order
/// * `today` - The query date
/// * `boundary` - Whether a record dated `today` is kept
///
/// # Returns
///
/// The windows in ascending date order. Only records with `is_off_day` take
/// part; natural weekends do not extend a window. Duplicate dates keep the
/// first record. An empty result means no known holidays.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{build_future_segments, TodayBoundary};
/// use holiday_engine::models::OverrideRecord;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let records = vec![
///     OverrideRecord::off_day(d("2026-10-02"), "National Day"),
///     OverrideRecord::off_day(d("2026-10-01"), "National Day"),
///     OverrideRecord::work_day(d("2026-10-10"), "National Day"),
///     OverrideRecord::off_day(d("2026-12-25"), "Winter Break"),
/// ];
///
/// let segments = build_future_segments(&records, d("2026-09-01"), TodayBoundary::Inclusive);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].start_date, d("2026-10-01"));
/// assert_eq!(segments[0].days(), 2);
/// assert_eq!(segments[1].label, "Winter Break");
/// ```
pub fn build_future_segments(
    records: &[OverrideRecord],
    today: NaiveDate,
    boundary: TodayBoundary,
) -> Vec<HolidaySegment> {
    let mut admitted: Vec<&OverrideRecord> = records
        .iter()
        .filter(|r| boundary.admits(r.date, today))
        .collect();
    // stable sort keeps the first record per date ahead of later ones
    admitted.sort_by_key(|r| r.date);
    admitted.dedup_by_key(|r| r.date);
    let off_days = admitted.into_iter().filter(|r| r.is_off_day);

    let mut segments = Vec::new();
    let mut current: Option<OpenSegment> = None;

    for record in off_days {
        match current.as_mut() {
            Some(open) if open.extends_with(record.date) => open.push(record),
            _ => {
                if let Some(done) = current.replace(OpenSegment::start(record)) {
                    segments.push(done.close());
                }
            }
        }
    }

    if let Some(done) = current {
        segments.push(done.close());
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn off(date_str: &str, label: &str) -> OverrideRecord {
        OverrideRecord::off_day(make_date(date_str), label)
    }

    fn work(date_str: &str, label: &str) -> OverrideRecord {
        OverrideRecord::work_day(make_date(date_str), label)
    }

    // ==========================================================================
    // Grouping
    // ==========================================================================

    #[test]
    fn test_empty_input_yields_no_segments() {
        let segments = build_future_segments(&[], make_date("2026-01-01"), TodayBoundary::Inclusive);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_only_work_day_overrides_yield_no_segments() {
        let records = vec![work("2026-02-14", "Spring Festival")];
        let segments =
            build_future_segments(&records, make_date("2026-01-01"), TodayBoundary::Inclusive);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_consecutive_days_form_one_segment() {
        let records = vec![
            off("2026-05-01", "Labour Day"),
            off("2026-05-02", "Labour Day"),
            off("2026-05-03", "Labour Day"),
            off("2026-05-04", "Labour Day"),
            off("2026-05-05", "Labour Day"),
        ];
        let segments =
            build_future_segments(&records, make_date("2026-04-20"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "Labour Day");
        assert_eq!(segments[0].start_date, make_date("2026-05-01"));
        assert_eq!(segments[0].end_date, make_date("2026-05-05"));
        assert_eq!(segments[0].days(), 5);
    }

    #[test]
    fn test_gap_splits_segments() {
        let records = vec![
            off("2026-06-19", "Dragon Boat Festival"),
            off("2026-06-20", "Dragon Boat Festival"),
            off("2026-06-22", "Dragon Boat Festival"),
        ];
        let segments =
            build_future_segments(&records, make_date("2026-06-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].days(), 2);
        assert_eq!(segments[1].dates, vec![make_date("2026-06-22")]);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let records = vec![
            off("2026-10-03", "National Day"),
            off("2026-04-05", "Tomb-sweeping Day"),
            off("2026-10-01", "National Day"),
            off("2026-10-02", "National Day"),
        ];
        let segments =
            build_future_segments(&records, make_date("2026-01-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].label, "Tomb-sweeping Day");
        assert_eq!(
            segments[1].dates,
            vec![
                make_date("2026-10-01"),
                make_date("2026-10-02"),
                make_date("2026-10-03")
            ]
        );
    }

    #[test]
    fn test_duplicate_dates_are_collapsed() {
        let records = vec![
            off("2026-01-01", "New Year"),
            off("2026-01-01", "New Year"),
            off("2026-01-02", "New Year"),
        ];
        let segments =
            build_future_segments(&records, make_date("2025-12-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].days(), 2);
    }

    #[test]
    fn test_duplicate_date_keeps_first_record_kind() {
        let records = vec![
            work("2026-01-01", "New Year"),
            off("2026-01-01", "New Year"),
            off("2026-01-02", "New Year"),
        ];
        let segments =
            build_future_segments(&records, make_date("2025-12-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_date, make_date("2026-01-02"));
        assert_eq!(segments[0].days(), 1);
    }

    #[test]
    fn test_segment_crosses_month_and_year() {
        let records = vec![
            off("2025-12-31", "Winter Break"),
            off("2026-01-01", "New Year"),
            off("2026-01-02", "New Year"),
        ];
        let segments =
            build_future_segments(&records, make_date("2025-12-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "New Year");
        assert_eq!(segments[0].days(), 3);
    }

    // ==========================================================================
    // Today boundary
    // ==========================================================================

    #[test]
    fn test_inclusive_boundary_keeps_today() {
        let records = vec![off("2026-10-05", "National Day"), off("2026-10-06", "National Day")];
        let segments =
            build_future_segments(&records, make_date("2026-10-05"), TodayBoundary::Inclusive);

        assert_eq!(segments[0].start_date, make_date("2026-10-05"));
        assert_eq!(segments[0].days(), 2);
    }

    #[test]
    fn test_exclusive_boundary_drops_today() {
        let records = vec![off("2026-10-05", "National Day"), off("2026-10-06", "National Day")];
        let segments =
            build_future_segments(&records, make_date("2026-10-05"), TodayBoundary::Exclusive);

        assert_eq!(segments[0].start_date, make_date("2026-10-06"));
        assert_eq!(segments[0].days(), 1);
    }

    #[test]
    fn test_past_records_are_ignored() {
        let records = vec![off("2026-01-01", "New Year"), off("2026-10-01", "National Day")];
        let segments =
            build_future_segments(&records, make_date("2026-06-01"), TodayBoundary::Inclusive);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "National Day");
    }

    // ==========================================================================
    // Label resolution
    // ==========================================================================

    #[test]
    fn test_majority_label_wins() {
        let records = vec![
            off("2026-09-25", "Mid-autumn Festival"),
            off("2026-09-26", "National Day"),
            off("2026-09-27", "National Day"),
        ];
        let segments =
            build_future_segments(&records, make_date("2026-09-01"), TodayBoundary::Inclusive);

        assert_eq!(segments[0].label, "National Day");
    }

    #[test]
    fn test_tie_goes_to_first_seen_label() {
        let records = vec![
            off("2026-09-26", "National Day"),
            off("2026-09-25", "Mid-autumn Festival"),
        ];
        let segments =
            build_future_segments(&records, make_date("2026-09-01"), TodayBoundary::Inclusive);

        // Scan order is date order, so the 25th is seen first
        assert_eq!(segments[0].label, "Mid-autumn Festival");
    }

    #[test]
    fn test_label_tally_empty() {
        assert_eq!(LabelTally::default().winner(), None);
    }

    #[test]
    fn test_segment_helpers() {
        let records = vec![off("2026-04-04", "Tomb-sweeping Day"), off("2026-04-05", "Tomb-sweeping Day")];
        let segments =
            build_future_segments(&records, make_date("2026-04-01"), TodayBoundary::Inclusive);
        let segment = &segments[0];

        assert!(segment.contains(make_date("2026-04-04")));
        assert!(segment.contains(make_date("2026-04-05")));
        assert!(!segment.contains(make_date("2026-04-06")));

        let summary = segment.to_summary();
        assert_eq!(summary.days, 2);
        assert_eq!(summary.label, "Tomb-sweeping Day");
    }
}
