//! List command implementation
//!
//! `--list` prints the profiles and rule sources of the (possibly layered)
//! catalog. Listing does not validate.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, RunOptions, load_catalog};
use crate::output::{ListingHumanFormatter, ListingJsonlFormatter};

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Catalog error
pub fn run_list(options: &RunOptions) -> i32 {
    let catalog = match load_catalog(options) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: Catalog error: {}", e);
            return EXIT_ERROR;
        }
    };

    match options.format {
        OutputFormat::Human => ListingHumanFormatter::new().write_to_stdout(&catalog),
        OutputFormat::Jsonl => ListingJsonlFormatter::new().write_to_stdout(&catalog),
    }

    EXIT_SUCCESS
}
