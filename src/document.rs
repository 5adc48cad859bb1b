use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Serialize;
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};

use crate::currencies::Currency;
use crate::error::ValidationError;

#[derive(
    Display,
    EnumString,
    VariantNames,
    Serialize,
    Debug,
    PartialEq,
    Clone,
    Copy,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    #[strum(serialize = "invoice-paid", to_string = "invoicepaid")]
    InvoicePaid,
    Quote,
    Receipt,
}

impl DocumentType {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value.trim().parse().map_err(|_| {
            ValidationError::UnknownDocumentType {
                value: value.to_string(),
                expected: Self::VARIANTS.join(", "),
            }
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "Invoice",
            DocumentType::InvoicePaid => "Invoice (Paid)",
            DocumentType::Quote => "Quote",
            DocumentType::Receipt => "Receipt",
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ResolvedLineItem {
    pub service: String,
    pub units: Decimal,
    pub is_flat: bool,
    pub rate: Decimal,
    pub rate_label: String,
    pub total: Decimal,
    pub total_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ResolvedLineItem {
    /// Units as shown in the table, blank for flat charges.
    pub fn units_label(&self) -> String {
        if self.is_flat {
            String::new()
        } else {
            self.units.normalize().to_string()
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ResolvedDocument {
    pub document_type: DocumentType,
    pub document_type_label: &'static str,
    pub document_id: String,
    pub date: String,
    pub currency: &'static Currency,
    pub from_currency: Option<&'static str>,
    pub business_name: String,
    pub business_details: Vec<String>,
    pub client_name: String,
    pub client_details: Vec<String>,
    pub tax_rate: Decimal,
    pub tax_rate_label: String,
    pub tax_type_label: Option<String>,
    pub tax_number: Option<String>,
    pub items: Vec<ResolvedLineItem>,
    pub subtotal: Decimal,
    pub subtotal_label: String,
    pub taxes: Decimal,
    pub taxes_label: String,
    pub total: Decimal,
    pub total_label: String,
    pub notes: Vec<String>,
    pub path: PathBuf,
}

/// Lower-cases and collapses every run of characters outside `[a-z0-9]`
/// into a single hyphen, with no hyphen at either end.
pub fn kebab_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_hyphen = false;
    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

pub fn output_path(
    business_name: &str,
    document_type: DocumentType,
    output_name: Option<&str>,
    document_id: &str,
) -> PathBuf {
    let extra = output_name
        .map(|name| format!("-{}", kebab_case(name)))
        .unwrap_or_default();
    PathBuf::from(format!(
        "{}-{}{}-{}.pdf",
        kebab_case(business_name),
        document_type,
        extra,
        document_id
    ))
}
