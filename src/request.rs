use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::calendar;
use crate::cli::Opts;
use crate::document::DocumentType;
use crate::error::ValidationError;

#[derive(Debug, PartialEq, Clone)]
pub struct RawLineItem {
    pub item: String,
    pub details: Vec<String>,
}

/// Everything needed to produce one document, exactly as it was typed.
#[derive(Debug, PartialEq, Clone)]
pub struct RawDocumentRequest {
    pub document_type: DocumentType,
    pub document_id: Option<String>,
    pub delimiter: char,
    pub currency: String,
    pub from_currency: Option<String>,
    pub date: String,
    pub business: String,
    pub client: String,
    pub tax_info: String,
    pub line_items: Vec<RawLineItem>,
    pub notes: Vec<String>,
    pub output_name: Option<String>,
}

/// Collects items in order; a detail always belongs to the latest item.
#[derive(Debug, Default)]
pub struct LineItemsBuilder {
    items: Vec<RawLineItem>,
}

impl LineItemsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&mut self, item: impl Into<String>) -> &mut Self {
        self.items.push(RawLineItem {
            item: item.into(),
            details: Vec::new(),
        });
        self
    }

    pub fn detail(
        &mut self,
        detail: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let detail = detail.into();
        match self.items.last_mut() {
            Some(last) => last.details.push(detail),
            None => return Err(ValidationError::DetailWithoutItem { detail }),
        }
        Ok(self)
    }

    pub fn build(self) -> Vec<RawLineItem> {
        self.items
    }
}

enum ItemArg<'a> {
    Item(&'a String),
    Detail(&'a String),
}

/// Occurrences of `id` paired with their position on the command line.
fn indexed<'a>(
    matches: &'a ArgMatches,
    id: &str,
) -> impl Iterator<Item = (usize, &'a String)> {
    let indices = matches.indices_of(id).into_iter().flatten();
    let values = matches.get_many::<String>(id).into_iter().flatten();
    indices.zip(values)
}

fn line_items(
    matches: &ArgMatches,
) -> Result<Vec<RawLineItem>, ValidationError> {
    let mut args: Vec<(usize, ItemArg)> = indexed(matches, "item")
        .map(|(i, v)| (i, ItemArg::Item(v)))
        .chain(indexed(matches, "detail").map(|(i, v)| (i, ItemArg::Detail(v))))
        .collect();
    args.sort_by_key(|(index, _)| *index);

    let mut builder = LineItemsBuilder::new();
    for (_, arg) in args {
        match arg {
            ItemArg::Item(item) => {
                builder.item(item.as_str());
            }
            ItemArg::Detail(detail) => {
                builder.detail(detail.as_str())?;
            }
        }
    }
    Ok(builder.build())
}

fn delimiter(value: &str) -> Result<char, ValidationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}

impl RawDocumentRequest {
    /// Builds the request from parsed arguments. The matches are needed to
    /// recover the order of `--item` and `--detail` flags.
    pub fn from_matches(
        opts: &Opts,
        matches: &ArgMatches,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            document_type: DocumentType::parse(&opts.document_type)?,
            document_id: opts.document_id.clone(),
            delimiter: delimiter(&opts.delimiter)?,
            currency: opts.currency.clone(),
            from_currency: opts.from_currency.clone(),
            date: opts.date.clone().unwrap_or_else(calendar::today),
            business: opts.business.clone(),
            client: opts.client.clone(),
            tax_info: opts.tax_info.clone().unwrap_or_default(),
            line_items: line_items(matches)?,
            notes: opts.note.clone(),
            output_name: opts.output.clone(),
        })
    }
}

/// Parses the process arguments into options and the document request.
pub fn from_args() -> Result<(Opts, RawDocumentRequest), ValidationError> {
    let matches = Opts::command().get_matches();
    let opts = Opts::from_arg_matches(&matches)
        .unwrap_or_else(|error| error.exit());
    let request = RawDocumentRequest::from_matches(&opts, &matches)?;
    Ok((opts, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<RawDocumentRequest, ValidationError> {
        let matches = Opts::command()
            .try_get_matches_from(
                std::iter::once("billgen").chain(args.iter().copied()),
            )
            .unwrap();
        let opts = Opts::from_arg_matches(&matches).unwrap();
        RawDocumentRequest::from_matches(&opts, &matches)
    }

    #[test]
    fn full_command_line() {
        let request = parse(&[
            "-b",
            "Nafeu Nasir Media Solutions|9-4123 Racoon Street|Toronto, ON, Canada|M6H 4K1",
            "-c",
            "Client A|5 ABC Avenue|Funtown, MI, US|44124",
            "-i",
            "Work Stuff|1|45/hr|2024-01-03",
            "-i",
            "More Work Stuff|2|30/day|2024-01-04",
            "-s",
            "Task1",
            "-s",
            "Task2",
            "-s",
            "Task3",
            "-r",
            "CAD",
            "-f",
            "USD",
            "-x",
            "0.13|GST|1234RT001",
            "-u",
            "NN0141232",
            "-n",
            "Please pay all invoices within <strong>15 days</strong> of receiving this.",
            "-n",
            "If you have any questions about this invoice please contact us",
            "-t",
            "invoicepaid",
            "-y",
            "-d",
            "2024-05-03",
        ])
        .unwrap();

        assert_eq!(
            request,
            RawDocumentRequest {
                document_type: DocumentType::InvoicePaid,
                document_id: Some("NN0141232".to_string()),
                delimiter: '|',
                currency: "CAD".to_string(),
                from_currency: Some("USD".to_string()),
                date: "2024-05-03".to_string(),
                business: "Nafeu Nasir Media Solutions|9-4123 Racoon Street|Toronto, ON, Canada|M6H 4K1".to_string(),
                client: "Client A|5 ABC Avenue|Funtown, MI, US|44124".to_string(),
                tax_info: "0.13|GST|1234RT001".to_string(),
                line_items: vec![
                    RawLineItem {
                        item: "Work Stuff|1|45/hr|2024-01-03".to_string(),
                        details: vec![],
                    },
                    RawLineItem {
                        item: "More Work Stuff|2|30/day|2024-01-04".to_string(),
                        details: vec![
                            "Task1".to_string(),
                            "Task2".to_string(),
                            "Task3".to_string(),
                        ],
                    },
                ],
                notes: vec![
                    "Please pay all invoices within <strong>15 days</strong> of receiving this.".to_string(),
                    "If you have any questions about this invoice please contact us".to_string(),
                ],
                output_name: None,
            }
        );
    }

    #[test]
    fn details_follow_their_item() {
        let request = parse(&[
            "-b",
            "Acme",
            "-i",
            "A|1|1",
            "-s",
            "a1",
            "-i",
            "B|1|1",
            "-i",
            "C|1|1",
            "-s",
            "c1",
            "-s",
            "c2",
        ])
        .unwrap();
        let details: Vec<Vec<String>> = request
            .line_items
            .into_iter()
            .map(|item| item.details)
            .collect();
        assert_eq!(
            details,
            vec![
                vec!["a1".to_string()],
                vec![],
                vec!["c1".to_string(), "c2".to_string()],
            ]
        );
    }

    #[test]
    fn defaults() {
        let request = parse(&["-b", "Acme"]).unwrap();
        assert_eq!(request.document_type, DocumentType::Invoice);
        assert_eq!(request.delimiter, '|');
        assert_eq!(request.currency, "USD");
        assert_eq!(request.date, calendar::today());
        assert_eq!(request.tax_info, "");
        assert!(request.line_items.is_empty());
        assert!(request.notes.is_empty());
    }

    #[test]
    fn detail_before_item() {
        assert_eq!(
            parse(&["-b", "Acme", "-s", "orphan", "-i", "A|1|1"]),
            Err(ValidationError::DetailWithoutItem {
                detail: "orphan".to_string()
            })
        );
    }

    #[test]
    fn bad_delimiter_and_type() {
        assert!(matches!(
            parse(&["-b", "Acme", "-e", "||"]),
            Err(ValidationError::InvalidDelimiter { .. })
        ));
        assert!(matches!(
            parse(&["-b", "Acme", "-t", "bill"]),
            Err(ValidationError::UnknownDocumentType { .. })
        ));
    }

    #[test]
    fn builder_chains() {
        let mut builder = LineItemsBuilder::new();
        builder.item("A|1|1").detail("first").unwrap().detail("second").unwrap();
        builder.item("B||5");
        let items = builder.build();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].details, vec!["first", "second"]);
        assert!(items[1].details.is_empty());
    }
}
