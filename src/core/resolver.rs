use crate::domain::model::{CardTable, ResolvedCard};
use crate::utils::error::{AppError, Result};
use chrono::{Datelike, NaiveDate};

pub const SUPPORTED_YEAR: i32 = 2026;

const DATE_FORMAT: &str = "%A, %B %d, %Y";

/// 例如 "Thursday, January 15, 2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Last day of `month` in `year` (Gregorian), or `None` when the month does not exist.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

/// Optionally signed decimal integer. Values beyond `i64` saturate so they
/// still fail the range checks instead of the format check.
fn parse_component(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardResolver {
    year: i32,
}

impl Default for CardResolver {
    fn default() -> Self {
        Self::new(SUPPORTED_YEAR)
    }
}

impl CardResolver {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Card for `now`, or the table's first card when `now` has no entry.
    ///
    /// The fallback keeps `now` as its date, so the label, month and day always
    /// describe today even when the content comes from another day.
    pub fn resolve_today(&self, table: &CardTable, now: NaiveDate) -> Result<ResolvedCard> {
        let month = format!("{:02}", now.month());
        let day = format!("{:02}", now.day());

        let (card, is_fallback) = match table.get(self.year, &month, &day) {
            Some(card) => (card, false),
            None => {
                let (_, _, first) = table
                    .first_entry(self.year)
                    .ok_or(AppError::EmptyTable { year: self.year })?;
                (first, true)
            }
        };

        Ok(ResolvedCard {
            card: card.clone(),
            date: now,
            month,
            day,
            year: self.year,
            is_fallback,
        })
    }

    /// Card for an explicit month/day given as raw strings. Misses are errors, never fallbacks.
    pub fn resolve_explicit(&self, table: &CardTable, month: &str, day: &str) -> Result<ResolvedCard> {
        let (month_num, day_num) = match (parse_component(month), parse_component(day)) {
            (Some(m), Some(d)) => (m, d),
            _ => {
                return Err(AppError::InvalidFormat {
                    month: month.to_string(),
                    day: day.to_string(),
                })
            }
        };

        let month_out_of_range = || AppError::OutOfRange {
            field: "Month",
            value: month_num,
            max: 12,
        };
        let month_u32 = u32::try_from(month_num)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(month_out_of_range)?;
        let last_day = last_day_of_month(self.year, month_u32).ok_or_else(month_out_of_range)?;

        let day_out_of_range = || AppError::OutOfRange {
            field: "Day",
            value: day_num,
            max: last_day,
        };
        let day_u32 = u32::try_from(day_num)
            .ok()
            .filter(|d| (1..=last_day).contains(d))
            .ok_or_else(day_out_of_range)?;
        let date = NaiveDate::from_ymd_opt(self.year, month_u32, day_u32).ok_or_else(day_out_of_range)?;

        let month_key = format!("{:02}", month_u32);
        let day_key = format!("{:02}", day_u32);

        let card = table
            .get(self.year, &month_key, &day_key)
            .ok_or_else(|| AppError::NotFound {
                month: month_key.clone(),
                day: day_key.clone(),
            })?;

        Ok(ResolvedCard {
            card: card.clone(),
            date,
            month: month_key,
            day: day_key,
            year: self.year,
            is_fallback: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Card;

    fn card(text: &str) -> Card {
        Card {
            text: text.to_string(),
            translation: format!("{}-tr", text),
        }
    }

    fn sample_table() -> CardTable {
        let mut table = CardTable::new();
        table.insert(2026, 1, 1, card("new year"));
        table.insert(2026, 1, 15, card("mid january"));
        table.insert(2026, 2, 28, card("end of february"));
        table
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 1, 15)), "Thursday, January 15, 2026");
        assert_eq!(format_date(date(2026, 4, 5)), "Sunday, April 05, 2026");
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2026, 2), Some(28));
        assert_eq!(last_day_of_month(2028, 2), Some(29));
        assert_eq!(last_day_of_month(1900, 2), Some(28));
        assert_eq!(last_day_of_month(2000, 2), Some(29));
        assert_eq!(last_day_of_month(2026, 4), Some(30));
        assert_eq!(last_day_of_month(2026, 12), Some(31));
        assert_eq!(last_day_of_month(2026, 0), None);
        assert_eq!(last_day_of_month(2026, 13), None);
    }

    #[test]
    fn test_resolve_today_exact_match() {
        let resolver = CardResolver::default();
        let resolved = resolver
            .resolve_today(&sample_table(), date(2026, 1, 15))
            .unwrap();

        assert_eq!(resolved.card.text, "mid january");
        assert_eq!(resolved.label(), "Thursday, January 15, 2026");
        assert_eq!((resolved.month.as_str(), resolved.day.as_str()), ("01", "15"));
        assert!(!resolved.is_fallback);
    }

    #[test]
    fn test_resolve_today_fallback_keeps_today_label() {
        let mut table = CardTable::new();
        table.insert(2026, 1, 1, card("card a"));

        let resolved = CardResolver::default()
            .resolve_today(&table, date(2026, 4, 5))
            .unwrap();

        assert_eq!(resolved.card.text, "card a");
        assert_eq!(resolved.month, "04");
        assert_eq!(resolved.day, "05");
        assert_eq!(resolved.label(), "Sunday, April 05, 2026");
        assert!(resolved.is_fallback);
    }

    #[test]
    fn test_resolve_today_looks_up_supported_year_only() {
        // 今天是 2027 年，但查表只看設定年份
        let resolved = CardResolver::default()
            .resolve_today(&sample_table(), date(2027, 2, 28))
            .unwrap();

        assert_eq!(resolved.card.text, "end of february");
        assert_eq!(resolved.year, 2026);
        assert_eq!(resolved.label(), "Sunday, February 28, 2027");
    }

    #[test]
    fn test_resolve_today_fallback_follows_file_order() {
        let table: CardTable = serde_json::from_str(
            r#"{"2026": {
                "03": {"09": {"text": "march-first-in-file", "translation": "marzo"}},
                "01": {"05": {"text": "jan", "translation": "enero"}}
            }}"#,
        )
        .unwrap();

        let resolved = CardResolver::default()
            .resolve_today(&table, date(2026, 6, 1))
            .unwrap();

        assert!(resolved.is_fallback);
        assert_eq!(resolved.card.text, "march-first-in-file");
        assert_eq!((resolved.month.as_str(), resolved.day.as_str()), ("06", "01"));
    }

    #[test]
    fn test_resolve_today_empty_table() {
        let err = CardResolver::default()
            .resolve_today(&CardTable::new(), date(2026, 1, 1))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyTable { year: 2026 }));
    }

    #[test]
    fn test_resolve_explicit_hit() {
        let resolved = CardResolver::default()
            .resolve_explicit(&sample_table(), "1", "15")
            .unwrap();

        assert_eq!(resolved.card.text, "mid january");
        assert_eq!(resolved.month, "01");
        assert_eq!(resolved.day, "15");
        assert_eq!(resolved.label(), "Thursday, January 15, 2026");
    }

    #[test]
    fn test_resolve_explicit_accepts_padded_and_signed_numbers() {
        let resolver = CardResolver::default();
        assert!(resolver.resolve_explicit(&sample_table(), "01", "01").is_ok());
        assert!(resolver.resolve_explicit(&sample_table(), "+1", " 1 ").is_ok());
    }

    #[test]
    fn test_resolve_explicit_invalid_format() {
        let resolver = CardResolver::default();
        for (m, d) in [("jan", "1"), ("1", "first"), ("", "1"), ("1.5", "2"), ("+", "1"), ("1", "9a9999999999999999999")] {
            let err = resolver.resolve_explicit(&sample_table(), m, d).unwrap_err();
            assert!(matches!(err, AppError::InvalidFormat { .. }), "{}/{}", m, d);
        }
    }

    #[test]
    fn test_resolve_explicit_month_out_of_range() {
        let resolver = CardResolver::default();
        for m in ["0", "13", "-1"] {
            let err = resolver.resolve_explicit(&sample_table(), m, "1").unwrap_err();
            assert!(matches!(err, AppError::OutOfRange { field: "Month", .. }));
            assert_eq!(err.to_string(), "Month must be between 1 and 12");
        }
    }

    #[test]
    fn test_resolve_explicit_huge_numbers_are_out_of_range() {
        let resolver = CardResolver::default();

        let err = resolver
            .resolve_explicit(&sample_table(), "99999999999999999999", "1")
            .unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { field: "Month", .. }));
        assert_eq!(err.to_string(), "Month must be between 1 and 12");

        let err = resolver
            .resolve_explicit(&sample_table(), "-99999999999999999999", "1")
            .unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { field: "Month", .. }));

        let err = resolver
            .resolve_explicit(&sample_table(), "1", "99999999999999999999")
            .unwrap_err();
        assert_eq!(err.to_string(), "Day must be between 1 and 31");
    }

    #[test]
    fn test_last_day_of_month_at_year_limit() {
        assert_eq!(last_day_of_month(i32::MAX, 12), None);
        assert_eq!(last_day_of_month(i32::MAX, 11), None);

        let err = CardResolver::new(i32::MAX)
            .resolve_explicit(&sample_table(), "12", "1")
            .unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { .. }));
    }

    #[test]
    fn test_resolve_explicit_day_out_of_range() {
        let resolver = CardResolver::default();

        let err = resolver.resolve_explicit(&sample_table(), "2", "30").unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { field: "Day", max: 28, .. }));
        assert_eq!(err.to_string(), "Day must be between 1 and 28");

        let err = resolver.resolve_explicit(&sample_table(), "4", "31").unwrap_err();
        assert_eq!(err.to_string(), "Day must be between 1 and 30");

        let err = resolver.resolve_explicit(&sample_table(), "1", "0").unwrap_err();
        assert_eq!(err.to_string(), "Day must be between 1 and 31");
    }

    #[test]
    fn test_resolve_explicit_leap_year() {
        let mut table = CardTable::new();
        table.insert(2028, 2, 29, card("leap"));
        let resolver = CardResolver::new(2028);

        let resolved = resolver.resolve_explicit(&table, "2", "29").unwrap();
        assert_eq!(resolved.card.text, "leap");
        assert_eq!(resolved.label(), "Tuesday, February 29, 2028");

        let err = resolver.resolve_explicit(&table, "2", "30").unwrap_err();
        assert_eq!(err.to_string(), "Day must be between 1 and 29");
    }

    #[test]
    fn test_resolve_explicit_not_found_never_falls_back() {
        let err = CardResolver::default()
            .resolve_explicit(&sample_table(), "3", "7")
            .unwrap_err();

        match err {
            AppError::NotFound { month, day } => {
                assert_eq!(month, "03");
                assert_eq!(day, "07");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
