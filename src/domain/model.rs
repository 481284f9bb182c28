use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::resolver::format_date;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub text: String,
    pub translation: String,
}

pub type DayCards = IndexMap<String, Card>;
pub type MonthCards = IndexMap<String, DayCards>;

/// year -> month -> day -> card, 全部鍵值都是字串 (例如 "2026" / "01" / "15")
///
/// Keys keep the order they were inserted in (file order when deserialized).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardTable {
    years: IndexMap<String, MonthCards>,
}

impl CardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, year: i32, month: u32, day: u32, card: Card) {
        self.years
            .entry(year.to_string())
            .or_default()
            .entry(format!("{:02}", month))
            .or_default()
            .insert(format!("{:02}", day), card);
    }

    pub fn get(&self, year: i32, month: &str, day: &str) -> Option<&Card> {
        self.years.get(&year.to_string())?.get(month)?.get(day)
    }

    /// 該年份第一個月份中的第一張卡 (today 查詢的預設卡)，依插入順序
    pub fn first_entry(&self, year: i32) -> Option<(&str, &str, &Card)> {
        let months = self.years.get(&year.to_string())?;
        months.iter().find_map(|(month, days)| {
            days.iter()
                .next()
                .map(|(day, card)| (month.as_str(), day.as_str(), card))
        })
    }

    pub fn card_count(&self, year: i32) -> usize {
        self.years
            .get(&year.to_string())
            .map(|months| months.values().map(|days| days.len()).sum())
            .unwrap_or(0)
    }

    /// Years must be four digits, months and days two zero-padded digits.
    pub fn check_keys(&self) -> Result<(), String> {
        for (year, months) in &self.years {
            if !is_numeric_key(year, 4) {
                return Err(format!("invalid year key '{}'", year));
            }
            for (month, days) in months {
                if !is_numeric_key(month, 2) {
                    return Err(format!("invalid month key '{}' in {}", month, year));
                }
                for day in days.keys() {
                    if !is_numeric_key(day, 2) {
                        return Err(format!("invalid day key '{}' in {}/{}", day, year, month));
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_numeric_key(key: &str, width: usize) -> bool {
    key.len() == width && key.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    pub card: Card,
    /// The date the label is rendered from; for a fallback this is still today.
    pub date: NaiveDate,
    pub month: String,
    pub day: String,
    pub year: i32,
    pub is_fallback: bool,
}

impl ResolvedCard {
    pub fn label(&self) -> String {
        format_date(self.date)
    }

    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    pub date: String,
    pub month: String,
    pub day: String,
    pub text: String,
    pub translation: String,
    pub year: i32,
}

impl From<&ResolvedCard> for CardResponse {
    fn from(resolved: &ResolvedCard) -> Self {
        Self {
            date: resolved.label(),
            month: resolved.month.clone(),
            day: resolved.day.clone(),
            text: resolved.card.text.clone(),
            translation: resolved.card.translation.clone(),
            year: resolved.year,
        }
    }
}
