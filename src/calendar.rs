use chrono::{Local, NaiveDate};

use crate::error::ValidationError;

const YMD: &str = "%Y-%m-%d";

pub trait DateLabels {
    /// Human readable form, e.g. `Wed Jan 03 2024`.
    fn label(&self) -> String;

    /// Date without dashes, e.g. `20240103`.
    fn compact(&self) -> String;
}

impl DateLabels for NaiveDate {
    fn label(&self) -> String {
        self.format("%a %b %d %Y").to_string()
    }

    fn compact(&self) -> String {
        self.format("%Y%m%d").to_string()
    }
}

pub fn parse_ymd(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), YMD).map_err(|_| {
        ValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}

pub fn today() -> String {
    Local::now().date_naive().format(YMD).to_string()
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn label() {
        assert_eq!(ymd(2024, 1, 3).label(), "Wed Jan 03 2024");
        assert_eq!(ymd(2024, 1, 4).label(), "Thu Jan 04 2024");
        assert_eq!(ymd(2024, 2, 29).label(), "Thu Feb 29 2024");
        assert_eq!(ymd(2023, 12, 31).label(), "Sun Dec 31 2023");
    }

    #[test]
    fn compact() {
        assert_eq!(ymd(2024, 5, 3).compact(), "20240503");
    }

    #[test]
    fn parse() {
        assert_eq!(parse_ymd("2024-01-03"), Ok(ymd(2024, 1, 3)));
        assert_eq!(parse_ymd(" 2024-01-03 "), Ok(ymd(2024, 1, 3)));
        assert!(parse_ymd("2024-02-30").is_err());
        assert!(parse_ymd("03/01/2024").is_err());
        assert!(parse_ymd("").is_err());
    }

    #[test]
    fn today_round_trips() {
        assert!(parse_ymd(&today()).is_ok());
    }
}
