//! Demo entry point for the company/customer directory.
//!
//! # Responsibility
//! - Run the fixed create/update/list sequence against `./db`.
//! - Print every listing followed by a separator line.
//!
//! Errors from the store end the run unhandled.

use companydb_core::{init_logging, DirectoryService, RepoError, StoreConfig};
use log::info;
use std::fmt::Display;

const SEPARATOR: &str = "------------------------------------------------------";

fn main() -> Result<(), RepoError> {
    let config = StoreConfig::default();
    start_logging(&config);

    let directory = DirectoryService::from_config(&config);
    info!(
        "event=cli_run module=cli status=start db_path={}",
        directory.db_path().display()
    );

    print!("{}", run_demo(&directory)?);

    info!("event=cli_run module=cli status=ok");
    Ok(())
}

/// Runs the fixed sequence and returns the three listings as printed text.
fn run_demo(directory: &DirectoryService) -> Result<String, RepoError> {
    directory.create_table_companies()?;
    directory.create_table_customers()?;

    directory.create_company("Feniksas", "Petrausko 5")?;
    directory.create_company("IBM", "Miško 12")?;

    directory.create_customer("Jonas", "Jonaitis", 123)?;
    directory.update_customer_name("Jonas", "Petras")?;

    let mut output = render_listing(&directory.get_companies()?);
    output.push_str(&render_listing(&directory.get_customers()?));
    output.push_str(&render_listing(&directory.join_customers_companies()?));
    Ok(output)
}

fn start_logging(config: &StoreConfig) {
    let log_dir = match std::env::current_dir() {
        Ok(dir) => dir.join("logs"),
        Err(err) => {
            eprintln!("logging disabled: cannot resolve working directory: {err}");
            return;
        }
    };
    if let Err(err) = init_logging(&config.log_level, log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

/// One record per line, then the separator.
fn render_listing<T: Display>(records: &[T]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::{render_listing, run_demo, SEPARATOR};
    use companydb_core::DirectoryService;

    #[test]
    fn separator_is_fifty_four_dashes() {
        assert_eq!(SEPARATOR.len(), 54);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn empty_listing_is_only_the_separator() {
        let rendered = render_listing::<String>(&[]);
        assert_eq!(rendered, format!("{SEPARATOR}\n"));
    }

    #[test]
    fn listing_prints_one_record_per_line() {
        let rendered = render_listing(&["a", "b"]);
        assert_eq!(rendered, format!("a\nb\n{SEPARATOR}\n"));
    }

    #[test]
    fn demo_prints_companies_customers_then_join() {
        let dir = tempfile::tempdir().unwrap();
        let directory = DirectoryService::new(dir.path().join("db"));

        let output = run_demo(&directory).unwrap();

        let expected = format!(
            "(1, 'Feniksas', 'Petrausko 5')\n\
             (2, 'IBM', 'Miško 12')\n\
             {SEPARATOR}\n\
             (1, 'Petras', 'Jonaitis', 123)\n\
             {SEPARATOR}\n\
             {SEPARATOR}\n"
        );
        assert_eq!(output, expected);
    }
}
