use clap::{Parser, ValueHint};
use std::path::PathBuf;

/* Argument Structure
 *
 * billgen -b <business> [-c <client>] [-t <type>]
 *      (-i <item> [-s <detail>]...)...
 *      [-n <note>]... [-x <tax info>] [-r <currency>] [-f <currency>]
 *      [-d <date>] [-u <id>] [-o <name>] [-e <delimiter>]
 *      [--dry-run] [--log] [--html]
 *
 * Each --detail belongs to the closest --item before it.
 */

/// Generate invoices, quotes and receipts as PDFs
#[derive(Parser)]
#[clap(name = "billgen", version)]
pub struct Opts {
    /// Unique ID for the document, generated from the date when omitted
    #[clap(short = 'u', long)]
    pub document_id: Option<String>,

    /// Character splitting business, client, item and tax info fields
    #[clap(short = 'e', long, default_value = "|")]
    pub delimiter: String,

    /// Document type: invoice, invoicepaid, quote or receipt
    #[clap(short = 't', long = "type", default_value = "invoice")]
    pub document_type: String,

    /// Business name followed by detail lines: name|line|line...
    #[clap(short, long)]
    pub business: String,

    /// Client name followed by detail lines: name|line|line...
    #[clap(short, long, default_value = "")]
    pub client: String,

    /// Line item: service|units|rate[/interval][|YYYY-MM-DD]
    #[clap(short, long)]
    pub item: Vec<String>,

    /// Extra detail line for the most recent item
    #[clap(short = 's', long)]
    pub detail: Vec<String>,

    /// Note printed at the bottom of the document
    #[clap(short, long)]
    pub note: Vec<String>,

    /// Three letter currency code of the document
    #[clap(short = 'r', long, default_value = "USD")]
    pub currency: String,

    /// Currency to convert 'convert:' rates from using historical rates
    #[clap(short, long)]
    pub from_currency: Option<String>,

    /// Tax info: rate|type|number (rate as 0.13 or 13%)
    #[clap(short = 'x', long)]
    pub tax_info: Option<String>,

    /// Date of the document in YYYY-MM-DD format, defaults to today
    #[clap(short, long)]
    pub date: Option<String>,

    /// Extra name added to the output file
    #[clap(short, long)]
    pub output: Option<String>,

    /// Directory the document is written to
    #[clap(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,

    /// Only check that the options can be processed, no conversion or output
    #[clap(short = 'y', long)]
    pub dry_run: bool,

    /// Print the processed document
    #[clap(short, long)]
    pub log: bool,

    /// Write the rendered HTML instead of a PDF
    #[clap(long)]
    pub html: bool,

    /// API key for the exchange rates service
    #[clap(long, env = "EXCHANGE_RATES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chrome or Chromium executable used to print PDFs
    #[clap(long, env = "CHROME_PATH", value_hint = ValueHint::ExecutablePath)]
    pub chrome: Option<PathBuf>,

    /// Show debug logging
    #[clap(short, long)]
    pub verbose: bool,
}
