//! Month-key handling. A month-key is a `"<Year>-<MonthName>"` string such as
//! `"2025-Janeiro"`, with the month name taken from the plan's configured
//! language.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display language for a plan. Controls which month-name list is used when
/// building and ordering month-keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

const MONTHS_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const MONTHS_EN_US: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Language {
    pub fn month_names(&self) -> &'static [&'static str; 12] {
        match self {
            Language::PtBr => &MONTHS_PT_BR,
            Language::EnUs => &MONTHS_EN_US,
        }
    }

    /// Position of `name` in this language's month list, or -1 when the name
    /// is not recognized. Unknown names therefore sort before January.
    fn month_index(&self, name: &str) -> i32 {
        self.month_names()
            .iter()
            .position(|m| *m == name)
            .map(|i| i as i32)
            .unwrap_or(-1)
    }
}

/// Build a month-key for `year` and zero-based `month` (clamped to December).
pub fn month_key(language: Language, year: i32, month: usize) -> String {
    let names = language.month_names();
    format!("{}-{}", year, names[month.min(11)])
}

/// Split a month-key into its year and month-name parts. A key without a `-`
/// is treated as year 0 with the whole string as the month name; a
/// non-numeric year also coerces to 0.
fn split_key(key: &str) -> (i32, &str) {
    match key.split_once('-') {
        Some((year, name)) => (year.parse().unwrap_or(0), name),
        None => (0, key),
    }
}

/// Total order over month-keys: numeric year first, then the month's index in
/// the configured language's list.
pub fn sort_month_keys(language: Language, a: &str, b: &str) -> Ordering {
    let (year_a, name_a) = split_key(a);
    let (year_b, name_b) = split_key(b);

    year_a
        .cmp(&year_b)
        .then_with(|| language.month_index(name_a).cmp(&language.month_index(name_b)))
}
