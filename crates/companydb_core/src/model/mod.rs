//! Record types for companies, customers, and their join.
//!
//! # Responsibility
//! - Define the row shapes returned by the repositories.
//! - Render rows as one-line tuples for listings.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never chosen by callers.
//! - `Customer::company_id` may point at a company that does not exist.

pub mod company;
pub mod customer;

use std::fmt::{Display, Formatter, Write};

/// Single-quoted text with `\\` and `'` backslash-escaped, so a rendered
/// row splits back into the same fields.
pub(crate) struct Quoted<'a>(pub(crate) &'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('\'')?;
        for c in self.0.chars() {
            if c == '\'' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('\'')
    }
}
