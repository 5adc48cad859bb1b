//! Turns a raw request into a fully resolved, render ready document.
//!
//! Everything is validated before the rate provider is consulted, and the
//! provider is asked at most once, for the span of dates the converted items
//! need.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::debug;

use crate::billing::{two_places, LineSpec, Money, Period, TaxInfo};
use crate::calendar::{parse_ymd, DateLabels};
use crate::currencies::{self, Currency};
use crate::document::{output_path, ResolvedDocument, ResolvedLineItem};
use crate::error::{ConversionError, ProcessError, ValidationError};
use crate::historical::Historical;
use crate::rates::{RateProvider, RateQuery};
use crate::request::{RawDocumentRequest, RawLineItem};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Whether `convert:` rates are looked up or taken literally.
#[derive(Clone, Copy)]
pub enum Conversion<'a> {
    Enabled(&'a dyn RateProvider),
    DryRun,
}

/// `<YYYYMMDD><six uppercase hex digits>`.
pub fn generate_document_id<R: Rng + ?Sized>(
    date: NaiveDate,
    rng: &mut R,
) -> String {
    let suffix: String = (0..6)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect();
    format!("{}{}", date.compact(), suffix)
}

struct Party {
    name: String,
    details: Vec<String>,
}

impl Party {
    fn parse(
        value: &str,
        delimiter: char,
        field: &'static str,
    ) -> Result<Self, ValidationError> {
        let mut segments = value.split(delimiter).map(str::to_string);
        let name = segments.next().unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName { field });
        }
        Ok(Self {
            name,
            details: segments.collect(),
        })
    }
}

struct ParsedItem<'a> {
    spec: LineSpec,
    details: &'a [String],
    effective: NaiveDate,
}

struct Converter {
    from: &'static Currency,
    rates: Historical<Decimal>,
}

impl Converter {
    fn convert(
        &self,
        to: &'static Currency,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Decimal, ConversionError> {
        let rate = self.rates.on(date).ok_or_else(|| {
            ConversionError::MissingRate {
                from: self.from.code.to_string(),
                to: to.code.to_string(),
                date,
            }
        })?;
        amount
            .checked_mul(*rate)
            .ok_or_else(|| ConversionError::Overflow {
                amount,
                from: self.from.code.to_string(),
                to: to.code.to_string(),
                date,
            })
    }
}

fn parse_items(
    raw: &[RawLineItem],
    delimiter: char,
    document_date: NaiveDate,
) -> Result<Vec<ParsedItem>, ValidationError> {
    raw.iter()
        .map(|RawLineItem { item, details }| {
            let spec = LineSpec::parse(item, delimiter)?;
            let effective = spec.date.unwrap_or(document_date);
            Ok(ParsedItem {
                spec,
                details,
                effective,
            })
        })
        .collect()
}

async fn load_converter(
    conversion: Conversion<'_>,
    from: Option<&'static Currency>,
    to: &'static Currency,
    items: &[ParsedItem<'_>],
) -> Result<Option<Converter>, ProcessError> {
    let (Conversion::Enabled(provider), Some(from)) = (conversion, from) else {
        return Ok(None);
    };
    if !items.iter().any(|item| item.spec.convert) {
        return Ok(None);
    }

    let dates: Vec<NaiveDate> = items
        .iter()
        .filter(|item| item.spec.convert)
        .map(|item| item.effective)
        .collect();
    let period = Period::spanning(&dates).ok_or_else(|| {
        ValidationError::NoConversionDates {
            from: from.code.to_string(),
            to: to.code.to_string(),
        }
    })?;

    let query = RateQuery {
        period,
        from: from.code,
        to: to.code,
    };
    let rates = provider.fetch_rates(&query).await?;
    if rates.is_empty() {
        return Err(ConversionError::NoRates {
            from: from.code.to_string(),
            to: to.code.to_string(),
        }
        .into());
    }
    Ok(Some(Converter { from, rates }))
}

fn resolve_item(
    parsed: ParsedItem,
    currency: &'static Currency,
    converter: Option<&Converter>,
) -> Result<ResolvedLineItem, ProcessError> {
    let ParsedItem {
        spec,
        details,
        effective,
    } = parsed;
    let mut details = details.to_vec();

    let rate = match converter {
        Some(converter) if spec.convert => {
            let converted = converter.convert(currency, spec.rate, effective)?;
            details.push(format!(
                "{} {} = {} {} on {}",
                two_places(spec.rate),
                converter.from.code,
                two_places(converted),
                currency.code,
                effective
            ));
            converted
        }
        _ => spec.rate,
    };

    let interval_label = spec
        .interval
        .map(|interval| format!(" / {}", interval))
        .unwrap_or_default();
    let total = spec
        .units
        .checked_mul(rate)
        .ok_or(ValidationError::Overflow { field: "item total" })?;

    Ok(ResolvedLineItem {
        service: spec.service,
        units: spec.units,
        is_flat: spec.is_flat,
        rate,
        rate_label: format!("{}{}", Money::new(currency, rate), interval_label),
        total,
        total_label: Money::new(currency, total).to_string(),
        date: spec.date.map(|date| date.to_string()),
        date_label: spec.date.map(|date| date.label()),
        details,
    })
}

/// Resolves a request, generating a document id if none was given.
pub async fn process(
    request: &RawDocumentRequest,
    conversion: Conversion<'_>,
) -> Result<ResolvedDocument, ProcessError> {
    process_with_rng(request, conversion, &mut StdRng::from_entropy()).await
}

pub async fn process_with_rng<R: Rng + ?Sized>(
    request: &RawDocumentRequest,
    conversion: Conversion<'_>,
    rng: &mut R,
) -> Result<ResolvedDocument, ProcessError> {
    let delimiter = request.delimiter;
    let currency = currencies::lookup(&request.currency)?;
    let from_currency = request
        .from_currency
        .as_deref()
        .map(currencies::lookup)
        .transpose()?;
    let date = parse_ymd(&request.date)?;

    let business = Party::parse(&request.business, delimiter, "business")?;
    let client = Party::parse(&request.client, delimiter, "client")?;
    let tax = TaxInfo::parse(&request.tax_info, delimiter)?;
    let parsed = parse_items(&request.line_items, delimiter, date)?;

    let converter =
        load_converter(conversion, from_currency, currency, &parsed).await?;

    let items = parsed
        .into_iter()
        .map(|item| resolve_item(item, currency, converter.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let overflow = |field: &'static str| ValidationError::Overflow { field };
    let subtotal = items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.total))
        .ok_or_else(|| overflow("subtotal"))?;
    let taxes = subtotal
        .checked_mul(tax.rate.rate)
        .ok_or_else(|| overflow("taxes"))?;
    let total = subtotal
        .checked_add(taxes)
        .ok_or_else(|| overflow("total"))?;

    let document_id = match &request.document_id {
        Some(id) => id.clone(),
        None => generate_document_id(date, rng),
    };
    let path = output_path(
        &business.name,
        request.document_type,
        request.output_name.as_deref(),
        &document_id,
    );

    debug!(
        id = %document_id,
        items = items.len(),
        subtotal = %subtotal,
        total = %total,
        "processed document"
    );

    Ok(ResolvedDocument {
        document_type: request.document_type,
        document_type_label: request.document_type.label(),
        document_id,
        date: request.date.clone(),
        currency,
        from_currency: converter.as_ref().map(|c| c.from.code),
        business_name: business.name,
        business_details: business.details,
        client_name: client.name,
        client_details: client.details,
        tax_rate: tax.rate.rate,
        tax_rate_label: tax.rate.label,
        tax_type_label: tax.kind,
        tax_number: tax.number,
        items,
        subtotal,
        subtotal_label: Money::new(currency, subtotal).to_string(),
        taxes,
        taxes_label: Money::new(currency, taxes).to_string(),
        total,
        total_label: Money::new(currency, total).to_string(),
        notes: request.notes.clone(),
        path,
    })
}
