//! Table definitions for companies and customers.
//!
//! Both statements are `CREATE TABLE IF NOT EXISTS`, so running them against
//! an initialized database is a no-op.

use super::DbResult;
use log::debug;
use rusqlite::Connection;

pub const COMPANIES_TABLE: &str = "Companies";
pub const CUSTOMERS_TABLE: &str = "Customers";

/// SQL to create the companies table
pub const CREATE_COMPANIES_TABLE: &str = "CREATE TABLE IF NOT EXISTS Companies(
    company_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    address TEXT)";

/// SQL to create the customers table.
/// The reference to `Companies` is declarative only; `open_db` disables
/// foreign key enforcement on every connection.
pub const CREATE_CUSTOMERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS Customers(
    customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    surname TEXT,
    company_id INTEGER,
    FOREIGN KEY (company_id) REFERENCES Companies(company_id))";

pub fn create_table_companies(conn: &Connection) -> DbResult<()> {
    conn.execute(CREATE_COMPANIES_TABLE, [])?;
    debug!("event=schema_ensure module=db status=ok table={COMPANIES_TABLE}");
    Ok(())
}

pub fn create_table_customers(conn: &Connection) -> DbResult<()> {
    conn.execute(CREATE_CUSTOMERS_TABLE, [])?;
    debug!("event=schema_ensure module=db status=ok table={CUSTOMERS_TABLE}");
    Ok(())
}

/// Creates every table the repositories need.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    create_table_companies(conn)?;
    create_table_customers(conn)
}

/// Returns whether a table named `table` exists in the main schema.
pub fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
