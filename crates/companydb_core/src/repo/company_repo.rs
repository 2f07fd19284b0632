//! Company repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `Companies` table keyed by natural `name`.
//! - Own the repository error type shared with the customer repository.
//!
//! # Invariants
//! - No uniqueness is assumed for `name`; writes touch every matching row.
//! - Read paths reject NULL text columns instead of masking them.

use crate::db::schema::{table_exists, COMPANIES_TABLE};
use crate::db::DbError;
use crate::model::company::{Company, CompanyId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COMPANY_SELECT_SQL: &str = "SELECT
    company_id,
    name,
    address
FROM Companies";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for company/customer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    MissingRequiredTable(&'static str),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for company operations.
pub trait CompanyRepository {
    /// Inserts one company and returns its store-assigned id.
    fn create_company(&self, name: &str, address: &str) -> RepoResult<CompanyId>;
    /// Renames every company called `old_name`; returns affected rows.
    fn update_company_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize>;
    /// Deletes every company called `name`; returns affected rows.
    fn delete_company(&self, name: &str) -> RepoResult<usize>;
    /// Lists all companies in id order.
    fn get_companies(&self) -> RepoResult<Vec<Company>>;
    /// Returns the lowest-id company called `name`, if any.
    fn get_company_by_name(&self, name: &str) -> RepoResult<Option<Company>>;
}

/// SQLite-backed company repository.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    /// Wraps a connection whose schema already contains `Companies`.
    ///
    /// # Errors
    /// - `MissingRequiredTable("Companies")` when the table was never created.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, COMPANIES_TABLE)? {
            return Err(RepoError::MissingRequiredTable(COMPANIES_TABLE));
        }
        Ok(Self { conn })
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn create_company(&self, name: &str, address: &str) -> RepoResult<CompanyId> {
        self.conn.execute(
            "INSERT INTO Companies (name, address) VALUES (?1, ?2);",
            params![name, address],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_company_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE Companies
             SET name = ?1
             WHERE name = ?2;",
            params![new_name, old_name],
        )?;
        Ok(changed)
    }

    fn delete_company(&self, name: &str) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM Companies WHERE name = ?1;", [name])?;
        Ok(changed)
    }

    fn get_companies(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} ORDER BY company_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut companies = Vec::new();

        while let Some(row) = rows.next()? {
            companies.push(parse_company_row(row)?);
        }

        Ok(companies)
    }

    fn get_company_by_name(&self, name: &str) -> RepoResult<Option<Company>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COMPANY_SELECT_SQL}
             WHERE name = ?1
             ORDER BY company_id ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_company_row(row)?));
        }

        Ok(None)
    }
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    Ok(Company {
        company_id: row.get("company_id")?,
        name: required_text(row, COMPANIES_TABLE, "name")?,
        address: required_text(row, COMPANIES_TABLE, "address")?,
    })
}

/// Reads a text column that the layer always writes, rejecting NULL.
pub(crate) fn required_text(row: &Row<'_>, table: &str, column: &str) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL value in {table}.{column}")))
}

/// Reads an integer column that the layer always writes, rejecting NULL.
pub(crate) fn required_integer(row: &Row<'_>, table: &str, column: &str) -> RepoResult<i64> {
    row.get::<_, Option<i64>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL value in {table}.{column}")))
}
