//! SQLite storage bootstrap and scoped connection entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for companydb core.
//! - Create the `Companies`/`Customers` tables idempotently.
//! - Run one unit of work per short-lived connection.
//!
//! # Invariants
//! - No connection outlives the operation that opened it.
//! - Connections switch `foreign_keys` OFF; `Customers.company_id` is declared,
//!   not enforced.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;
pub mod scope;

pub use open::{open_db, open_db_in_memory};
pub use scope::with_scoped_connection;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
