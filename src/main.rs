/*
 * Generate invoices, quotes and receipts from the command line
 *
 * Flow for every run:
 *  - Collect the flags into a raw request, pairing --detail with the
 *    --item before it
 *  - Process the request:
 *      - resolve currencies, parties and tax info
 *      - parse line items: service|units|rate[/interval][|date]
 *      - when converting, fetch one historical rate series covering every
 *        converted item's date and convert the 'convert:' rates
 *      - total everything and format the labels
 *  - Stop here on a dry run (optionally printing the processed document)
 *  - Render HTML and print it to PDF with a headless Chrome
 */

mod billing;
mod calendar;
mod cli;
mod currencies;
mod document;
mod error;
mod historical;
mod pdf;
mod processor;
mod rates;
mod request;
mod run;
mod templates;

use std::io;
use std::process::ExitCode;

use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let (opts, request) = match request::from_args() {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(error) = run::run(&opts, &request).await {
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
