//! Period-label parsing and named date-range filters for the reporting
//! screens. The Indian financial year (April to March) anchors the FY
//! ranges; "today" is always an explicit parameter so every predicate is
//! deterministic under test.

use crate::error::GstCoreError;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A parsed `Mon'YY` label. Parsed fresh on every filter evaluation, never
/// persisted in this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPeriod {
    /// 0-based (Jan = 0).
    pub month_index: u32,
    /// Full 4-digit year (`'YY` is 2000 + YY).
    pub year: i32,
}

impl ParsedPeriod {
    fn first_of_month(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1).unwrap()
    }
}

/// Parses a `Mon'YY` label (e.g. `Feb'26`) against the fixed abbreviation
/// table. Anything unparseable yields `None`, and every range predicate
/// excludes `None` rather than erroring.
pub fn parse_period(label: &str) -> Option<ParsedPeriod> {
    let (mon, yy) = label.trim().split_once('\'')?;
    let month_index = MONTH_ABBREVS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(mon.trim()))? as u32;

    let yy = yy.trim();
    if yy.len() != 2 {
        return None;
    }
    let yy: i32 = yy.parse().ok()?;

    Some(ParsedPeriod {
        month_index,
        year: 2000 + yy,
    })
}

/// Named reporting windows selectable on the investor report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRange {
    All,
    ThisYear,
    LastYear,
    ThisMonth,
    /// Three months including the current one.
    LastThree,
    ThisFy,
    LastFy,
    /// Quarter 1–4 of the financial year containing "today". Not
    /// parameterized by a selectable FY.
    FyQuarter(u8),
    /// Calendar quarter (Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec) of an explicit
    /// year, from selectors like `q2_2025`.
    CalendarQuarter { quarter: u8, year: i32 },
}

impl FromStr for ReportRange {
    type Err = GstCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => return Ok(ReportRange::All),
            "this_year" => return Ok(ReportRange::ThisYear),
            "last_year" => return Ok(ReportRange::LastYear),
            "this_month" => return Ok(ReportRange::ThisMonth),
            "last_3" => return Ok(ReportRange::LastThree),
            "this_fy" => return Ok(ReportRange::ThisFy),
            "last_fy" => return Ok(ReportRange::LastFy),
            "q1_fy" => return Ok(ReportRange::FyQuarter(1)),
            "q2_fy" => return Ok(ReportRange::FyQuarter(2)),
            "q3_fy" => return Ok(ReportRange::FyQuarter(3)),
            "q4_fy" => return Ok(ReportRange::FyQuarter(4)),
            _ => {}
        }

        // q<N>_<YYYY>
        if let Some(rest) = s.strip_prefix('q') {
            if let Some((q, year)) = rest.split_once('_') {
                if q.len() == 1 && year.len() == 4 {
                    if let (Ok(quarter), Ok(year)) = (q.parse::<u8>(), year.parse::<i32>()) {
                        if (1..=4).contains(&quarter) {
                            return Ok(ReportRange::CalendarQuarter { quarter, year });
                        }
                    }
                }
            }
        }

        Err(GstCoreError::UnknownRange(s.to_string()))
    }
}

/// Start year of the financial year containing `today`: the calendar year
/// itself from April onward, the previous one before April.
pub fn fy_start_year(today: NaiveDate) -> i32 {
    if today.month() >= 4 {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Inclusive date window of the financial year starting in `start_year`.
/// March range ends use day 28, not 31; the filter compares first-of-month
/// period dates so months are unaffected, but the truncated tail is kept
/// as-is pending a product decision.
pub fn fy_window(start_year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(start_year, 4, 1).unwrap(),
        NaiveDate::from_ymd_opt(start_year + 1, 3, 28).unwrap(),
    )
}

fn fy_quarter_window(start_year: i32, quarter: u8) -> (NaiveDate, NaiveDate) {
    match quarter {
        1 => (
            NaiveDate::from_ymd_opt(start_year, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(start_year, 6, 30).unwrap(),
        ),
        2 => (
            NaiveDate::from_ymd_opt(start_year, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(start_year, 9, 30).unwrap(),
        ),
        3 => (
            NaiveDate::from_ymd_opt(start_year, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(start_year, 12, 31).unwrap(),
        ),
        // Q4 ends in March, so the day-28 truncation applies here too.
        _ => (
            NaiveDate::from_ymd_opt(start_year + 1, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(start_year + 1, 3, 28).unwrap(),
        ),
    }
}

fn first_of_month_back(today: NaiveDate, months: i32) -> NaiveDate {
    let total = today.year() * 12 + today.month0() as i32 - months;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1).unwrap()
}

impl ReportRange {
    /// Pure membership predicate over a period label and an injected
    /// "today". `All` applies no filtering; every other range excludes
    /// unparseable labels.
    pub fn contains(&self, label: &str, today: NaiveDate) -> bool {
        if *self == ReportRange::All {
            return true;
        }

        let period = match parse_period(label) {
            Some(p) => p,
            None => return false,
        };

        match *self {
            ReportRange::All => true,
            ReportRange::ThisYear => period.year == today.year(),
            ReportRange::LastYear => period.year == today.year() - 1,
            ReportRange::ThisMonth => {
                period.year == today.year() && period.month_index + 1 == today.month()
            }
            ReportRange::LastThree => period.first_of_month() >= first_of_month_back(today, 2),
            ReportRange::ThisFy => {
                let (start, end) = fy_window(fy_start_year(today));
                let date = period.first_of_month();
                date >= start && date <= end
            }
            ReportRange::LastFy => {
                let (start, end) = fy_window(fy_start_year(today) - 1);
                let date = period.first_of_month();
                date >= start && date <= end
            }
            ReportRange::FyQuarter(quarter) => {
                let (start, end) = fy_quarter_window(fy_start_year(today), quarter);
                let date = period.first_of_month();
                date >= start && date <= end
            }
            ReportRange::CalendarQuarter { quarter, year } => {
                period.year == year && period.month_index / 3 + 1 == quarter as u32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_period() {
        let p = parse_period("Feb'26").unwrap();
        assert_eq!(p.month_index, 1);
        assert_eq!(p.year, 2026);

        let p = parse_period(" apr'25 ").unwrap();
        assert_eq!(p.month_index, 3);
        assert_eq!(p.year, 2025);
    }

    #[test]
    fn test_parse_period_rejects_garbage() {
        assert!(parse_period("").is_none());
        assert!(parse_period("Feb26").is_none());
        assert!(parse_period("Feb'2026").is_none());
        assert!(parse_period("Xyz'26").is_none());
        assert!(parse_period("Feb'xx").is_none());
    }

    #[test]
    fn test_range_selector_parsing() {
        assert_eq!("all".parse::<ReportRange>().unwrap(), ReportRange::All);
        assert_eq!(
            "this_fy".parse::<ReportRange>().unwrap(),
            ReportRange::ThisFy
        );
        assert_eq!(
            "q3_fy".parse::<ReportRange>().unwrap(),
            ReportRange::FyQuarter(3)
        );
        assert_eq!(
            "q2_2025".parse::<ReportRange>().unwrap(),
            ReportRange::CalendarQuarter {
                quarter: 2,
                year: 2025
            }
        );

        assert!("this_quarter".parse::<ReportRange>().is_err());
        assert!("q5_2025".parse::<ReportRange>().is_err());
        assert!("q2_25".parse::<ReportRange>().is_err());
    }

    #[test]
    fn test_this_fy_window() {
        let today = date(2026, 2, 15);

        assert!(ReportRange::ThisFy.contains("Apr'25", today));
        assert!(ReportRange::ThisFy.contains("Sep'25", today));
        assert!(ReportRange::ThisFy.contains("Mar'26", today));
        assert!(!ReportRange::ThisFy.contains("Mar'25", today));
        assert!(!ReportRange::ThisFy.contains("Apr'26", today));
    }

    #[test]
    fn test_last_fy_window() {
        let today = date(2026, 2, 15);

        assert!(ReportRange::LastFy.contains("Apr'24", today));
        assert!(ReportRange::LastFy.contains("Mar'25", today));
        assert!(!ReportRange::LastFy.contains("Apr'25", today));
    }

    #[test]
    fn test_fy_start_year_anchors_on_april() {
        assert_eq!(fy_start_year(date(2026, 2, 15)), 2025);
        assert_eq!(fy_start_year(date(2026, 3, 31)), 2025);
        assert_eq!(fy_start_year(date(2026, 4, 1)), 2026);
        assert_eq!(fy_start_year(date(2026, 12, 1)), 2026);
    }

    // The FY window deliberately ends on March 28, not March 31. Any fix to
    // day 31 needs product sign-off and must update this assertion.
    #[test]
    fn fy_window_ends_march_28() {
        let (start, end) = fy_window(2025);
        assert_eq!(start, date(2025, 4, 1));
        assert_eq!(end, date(2026, 3, 28));
        assert!(date(2026, 3, 29) > end);
    }

    #[test]
    fn test_calendar_year_ranges() {
        let today = date(2026, 2, 15);

        assert!(ReportRange::ThisYear.contains("Jan'26", today));
        assert!(!ReportRange::ThisYear.contains("Dec'25", today));
        assert!(ReportRange::LastYear.contains("Dec'25", today));
        assert!(!ReportRange::LastYear.contains("Jan'26", today));
    }

    #[test]
    fn test_this_month() {
        let today = date(2026, 2, 15);

        assert!(ReportRange::ThisMonth.contains("Feb'26", today));
        assert!(!ReportRange::ThisMonth.contains("Jan'26", today));
        assert!(!ReportRange::ThisMonth.contains("Feb'25", today));
    }

    #[test]
    fn test_last_three_includes_current_month() {
        let today = date(2026, 2, 15);

        assert!(ReportRange::LastThree.contains("Feb'26", today));
        assert!(ReportRange::LastThree.contains("Jan'26", today));
        assert!(ReportRange::LastThree.contains("Dec'25", today));
        assert!(!ReportRange::LastThree.contains("Nov'25", today));
    }

    #[test]
    fn test_last_three_across_year_boundary() {
        let today = date(2026, 1, 5);

        assert!(ReportRange::LastThree.contains("Nov'25", today));
        assert!(!ReportRange::LastThree.contains("Oct'25", today));
    }

    #[test]
    fn test_fy_quarters_follow_current_fy() {
        // FY 2025-26 as of Feb 2026.
        let today = date(2026, 2, 15);

        assert!(ReportRange::FyQuarter(1).contains("Apr'25", today));
        assert!(ReportRange::FyQuarter(1).contains("Jun'25", today));
        assert!(!ReportRange::FyQuarter(1).contains("Jul'25", today));

        assert!(ReportRange::FyQuarter(4).contains("Jan'26", today));
        assert!(ReportRange::FyQuarter(4).contains("Mar'26", today));
        assert!(!ReportRange::FyQuarter(4).contains("Dec'25", today));
    }

    #[test]
    fn test_calendar_quarter_with_explicit_year() {
        let today = date(2026, 2, 15);
        let q2_2025 = ReportRange::CalendarQuarter {
            quarter: 2,
            year: 2025,
        };

        assert!(q2_2025.contains("Apr'25", today));
        assert!(q2_2025.contains("Jun'25", today));
        assert!(!q2_2025.contains("Jul'25", today));
        assert!(!q2_2025.contains("Apr'26", today));
    }

    #[test]
    fn test_unparseable_labels_excluded_by_predicates() {
        let today = date(2026, 2, 15);

        for range in [
            ReportRange::ThisYear,
            ReportRange::ThisMonth,
            ReportRange::LastThree,
            ReportRange::ThisFy,
            ReportRange::FyQuarter(1),
        ] {
            assert!(!range.contains("totals", today));
            assert!(!range.contains("", today));
        }

        // `all` performs no filtering at all.
        assert!(ReportRange::All.contains("totals", today));
    }
}
