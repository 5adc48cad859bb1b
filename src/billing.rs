use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use strum_macros::{Display, EnumString};

use crate::calendar::parse_ymd;
use crate::currencies::Currency;
use crate::error::ValidationError;

/// Prefix on a rate marking it as an amount in the source currency.
pub const CONVERSION_MARKER: &str = "convert:";

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Period {
    pub from: NaiveDate,
    pub until: NaiveDate,
}

impl Period {
    pub fn new(from: NaiveDate, until: NaiveDate) -> Self {
        Self { from, until }
    }

    /// Smallest period covering every date, `None` when there are none.
    pub fn spanning<'a, I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a NaiveDate>,
    {
        dates.into_iter().fold(None, |span, &date| {
            Some(match span {
                None => Self::new(date, date),
                Some(Self { from, until }) => {
                    Self::new(from.min(date), until.max(date))
                }
            })
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.until)
    }
}

#[derive(Display, EnumString, Debug, PartialEq, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum Interval {
    #[strum(serialize = "d", to_string = "day")]
    Day,
    #[strum(serialize = "h", serialize = "hr", to_string = "hour")]
    Hour,
    #[strum(
        serialize = "m",
        serialize = "mo",
        serialize = "mon",
        to_string = "month"
    )]
    Month,
    #[strum(serialize = "w", serialize = "wk", to_string = "week")]
    Week,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Money(&'static Currency, Decimal);

impl Money {
    pub fn new(currency: &'static Currency, amount: Decimal) -> Self {
        Self(currency, amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.0.symbol, two_places(self.1))
    }
}

/// Fixed two decimal rendering used by every money label.
pub fn two_places(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// `0.13` becomes `13%`, with no forced decimal places.
pub fn percent_label(rate: Decimal) -> Result<String, ValidationError> {
    let percent = rate
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(ValidationError::Overflow { field: "tax rate" })?;
    Ok(format!("{}%", percent.normalize()))
}

pub fn parse_decimal(
    field: &'static str,
    value: &str,
) -> Result<Decimal, ValidationError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

#[derive(Debug, PartialEq, Clone)]
pub struct TaxRate {
    pub rate: Decimal,
    pub label: String,
}

impl TaxRate {
    pub fn none() -> Self {
        Self {
            rate: Decimal::ZERO,
            label: "0%".to_string(),
        }
    }

    /// Accepts either a fraction (`0.13`) or a percentage (`13%`).
    pub fn parse(segment: &str) -> Result<Self, ValidationError> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return Ok(Self::none());
        }

        if let Some((percent, _)) = trimmed.split_once('%') {
            let rate = parse_decimal("tax rate", percent)? / Decimal::ONE_HUNDRED;
            return Ok(Self {
                rate,
                label: segment.to_string(),
            });
        }

        let rate = parse_decimal("tax rate", trimmed)?;
        Ok(Self {
            rate,
            label: percent_label(rate)?,
        })
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct TaxInfo {
    pub rate: TaxRate,
    pub kind: Option<String>,
    pub number: Option<String>,
}

impl TaxInfo {
    pub fn parse(info: &str, delimiter: char) -> Result<Self, ValidationError> {
        let mut segments = info.split(delimiter);
        let rate = TaxRate::parse(segments.next().unwrap_or_default())?;
        let mut next_text = || {
            segments
                .next()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        let kind = next_text();
        let number = next_text();

        Ok(Self { rate, kind, number })
    }
}

/// A line item as typed: `service|units|rate[/interval][|date]`.
#[derive(Debug, PartialEq, Clone)]
pub struct LineSpec {
    pub service: String,
    pub units: Decimal,
    pub is_flat: bool,
    pub rate: Decimal,
    pub convert: bool,
    pub interval: Option<Interval>,
    pub date: Option<NaiveDate>,
}

impl LineSpec {
    pub fn parse(item: &str, delimiter: char) -> Result<Self, ValidationError> {
        let segments: Vec<&str> = item.split(delimiter).collect();
        let [service, units, rate_interval, rest @ ..] = segments.as_slice()
        else {
            return Err(ValidationError::MalformedItem {
                item: item.to_string(),
            });
        };

        let raw_units = if units.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_decimal("units", units)?
        };
        let is_flat = raw_units < Decimal::ONE;

        let mut rate_parts = rate_interval.split('/').map(str::trim);
        let rate_text = rate_parts.next().unwrap_or_default();
        let (convert, literal) = match rate_text.strip_prefix(CONVERSION_MARKER)
        {
            Some(literal) => (true, literal.trim()),
            None => (false, rate_text),
        };
        let rate = parse_decimal("rate", literal)?;

        let interval = rate_parts
            .next()
            .filter(|token| !token.is_empty())
            .map(|token| {
                Interval::from_str(token).map_err(|_| {
                    ValidationError::UnknownInterval {
                        value: token.to_string(),
                        item: item.to_string(),
                    }
                })
            })
            .transpose()?;

        let date = rest
            .first()
            .filter(|d| !d.trim().is_empty())
            .map(|d| parse_ymd(d))
            .transpose()?;

        Ok(Self {
            service: service.to_string(),
            units: raw_units.max(Decimal::ONE),
            is_flat,
            rate,
            convert,
            interval,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies;
    use rust_decimal_macros::dec;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn money_labels() {
        let usd = currencies::lookup("USD").unwrap();
        let cad = currencies::lookup("CAD").unwrap();
        assert_eq!(Money::new(usd, dec!(45)).to_string(), "$45.00");
        assert_eq!(Money::new(cad, dec!(61.04)).to_string(), "CA$61.04");
        assert_eq!(Money::new(usd, dec!(13.7852)).to_string(), "$13.79");
        assert_eq!(Money::new(usd, dec!(0.125)).to_string(), "$0.13");
        assert_eq!(Money::new(usd, dec!(-5)).to_string(), "$-5.00");
    }

    #[test]
    fn percent_round_trip() {
        assert_eq!(percent_label(dec!(0.13)).unwrap(), "13%");
        assert_eq!(percent_label(dec!(0.135)).unwrap(), "13.5%");
        assert_eq!(TaxRate::parse("13%").unwrap().rate, dec!(0.13));
        assert_eq!(TaxRate::parse("0.13").unwrap().label, "13%");
    }

    #[test]
    fn tax_rate_forms() {
        assert_eq!(TaxRate::parse("").unwrap(), TaxRate::none());
        assert_eq!(TaxRate::parse("  ").unwrap().label, "0%");
        let pct = TaxRate::parse("11%").unwrap();
        assert_eq!(pct.rate, dec!(0.11));
        assert_eq!(pct.label, "11%");
        assert!(matches!(
            TaxRate::parse("lots"),
            Err(ValidationError::InvalidNumber { field: "tax rate", .. })
        ));
    }

    #[test]
    fn tax_rate_too_large_for_a_percentage() {
        assert_eq!(
            TaxRate::parse("79228162514264337593543950335"),
            Err(ValidationError::Overflow { field: "tax rate" })
        );
        let pct = TaxRate::parse("79228162514264337593543950335%").unwrap();
        assert_eq!(pct.label, "79228162514264337593543950335%");
    }

    #[test]
    fn tax_info_segments() {
        let info = TaxInfo::parse("0.13|GST|1234RT001", '|').unwrap();
        assert_eq!(info.rate.label, "13%");
        assert_eq!(info.kind.as_deref(), Some("GST"));
        assert_eq!(info.number.as_deref(), Some("1234RT001"));

        let info = TaxInfo::parse("11%||88881514", '|').unwrap();
        assert_eq!(info.kind, None);
        assert_eq!(info.number.as_deref(), Some("88881514"));

        let info = TaxInfo::parse("", '|').unwrap();
        assert_eq!(info.rate, TaxRate::none());
        assert_eq!(info.kind, None);
        assert_eq!(info.number, None);

        let info = TaxInfo::parse("5%;VAT", ';').unwrap();
        assert_eq!(info.kind.as_deref(), Some("VAT"));
    }

    #[test]
    fn intervals() {
        for token in ["d", "day", "DAY"] {
            assert_eq!(Interval::from_str(token), Ok(Interval::Day));
        }
        for token in ["h", "hr", "hour"] {
            assert_eq!(Interval::from_str(token), Ok(Interval::Hour));
        }
        for token in ["m", "mo", "mon", "month"] {
            assert_eq!(Interval::from_str(token), Ok(Interval::Month));
        }
        for token in ["w", "wk", "week"] {
            assert_eq!(Interval::from_str(token), Ok(Interval::Week));
        }
        assert!(Interval::from_str("fortnight").is_err());
        assert_eq!(Interval::Hour.to_string(), "hour");
    }

    #[test]
    fn unit_item() {
        let spec = LineSpec::parse("Work Stuff|1|45/hr", '|').unwrap();
        assert_eq!(
            spec,
            LineSpec {
                service: "Work Stuff".to_string(),
                units: dec!(1),
                is_flat: false,
                rate: dec!(45),
                convert: false,
                interval: Some(Interval::Hour),
                date: None,
            }
        );
    }

    #[test]
    fn flat_items() {
        for units in ["", "0", "0.5", " "] {
            let item = format!("Setup|{}|375", units);
            let spec = LineSpec::parse(&item, '|').unwrap();
            assert!(spec.is_flat, "units '{}'", units);
            assert_eq!(spec.units, dec!(1));
            assert_eq!(spec.interval, None);
        }
        let spec = LineSpec::parse("Work|2.5|10", '|').unwrap();
        assert!(!spec.is_flat);
        assert_eq!(spec.units, dec!(2.5));
    }

    #[test]
    fn conversion_marker_and_date() {
        let spec =
            LineSpec::parse("Work Stuff|1|convert:45/hr|2024-01-03", '|')
                .unwrap();
        assert!(spec.convert);
        assert_eq!(spec.rate, dec!(45));
        assert_eq!(spec.date, Some(ymd(2024, 1, 3)));

        let spec = LineSpec::parse("Work|1| convert: 30 / day |", '|').unwrap();
        assert!(spec.convert);
        assert_eq!(spec.rate, dec!(30));
        assert_eq!(spec.interval, Some(Interval::Day));
        assert_eq!(spec.date, None);
    }

    #[test]
    fn bad_items() {
        assert!(matches!(
            LineSpec::parse("Work|1", '|'),
            Err(ValidationError::MalformedItem { .. })
        ));
        assert!(matches!(
            LineSpec::parse("Work|one|45", '|'),
            Err(ValidationError::InvalidNumber { field: "units", .. })
        ));
        assert!(matches!(
            LineSpec::parse("Work|1|abc/hr", '|'),
            Err(ValidationError::InvalidNumber { field: "rate", .. })
        ));
        assert!(matches!(
            LineSpec::parse("Work|1|45/yr", '|'),
            Err(ValidationError::UnknownInterval { .. })
        ));
        assert!(matches!(
            LineSpec::parse("Work|1|45|2024-13-01", '|'),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn period_spanning() {
        let dates = [ymd(2024, 1, 4), ymd(2024, 1, 2), ymd(2024, 1, 9)];
        assert_eq!(
            Period::spanning(&dates),
            Some(Period::new(ymd(2024, 1, 2), ymd(2024, 1, 9)))
        );
        assert_eq!(Period::spanning(std::iter::empty()), None);
    }
}
