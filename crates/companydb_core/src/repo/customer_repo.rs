//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD over the `Customers` table keyed by natural `name`.
//! - Provide the inner join of customers with their companies.
//!
//! # Invariants
//! - `company_id` is stored as given; the referenced company need not exist.
//! - The join never yields customers whose company is missing.

use crate::db::schema::{table_exists, COMPANIES_TABLE, CUSTOMERS_TABLE};
use crate::model::company::{Company, CompanyId};
use crate::model::customer::{Customer, CustomerCompany, CustomerId};
use crate::repo::company_repo::{required_integer, required_text, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    customer_id,
    name,
    surname,
    company_id
FROM Customers";

// Aliases keep the duplicate `name`/`company_id` columns addressable.
const CUSTOMER_COMPANY_JOIN_SQL: &str = "SELECT
    Customers.customer_id AS customer_id,
    Customers.name AS customer_name,
    Customers.surname AS customer_surname,
    Customers.company_id AS customer_company_id,
    Companies.company_id AS company_id,
    Companies.name AS company_name,
    Companies.address AS company_address
FROM Customers
JOIN Companies
    ON Customers.company_id = Companies.company_id
ORDER BY Customers.customer_id ASC, Companies.company_id ASC;";

/// Repository interface for customer operations.
pub trait CustomerRepository {
    /// Inserts one customer and returns its store-assigned id.
    fn create_customer(
        &self,
        name: &str,
        surname: &str,
        company_id: CompanyId,
    ) -> RepoResult<CustomerId>;
    /// Renames every customer called `old_name`; returns affected rows.
    fn update_customer_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize>;
    /// Deletes every customer called `name`; returns affected rows.
    fn delete_customer(&self, name: &str) -> RepoResult<usize>;
    /// Lists all customers in id order.
    fn get_customers(&self) -> RepoResult<Vec<Customer>>;
    /// Inner join of customers and companies on `company_id`.
    fn join_customers_companies(&self) -> RepoResult<Vec<CustomerCompany>>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Wraps a connection whose schema already contains `Customers`.
    ///
    /// `Companies` is only read by the join; without it the join fails with
    /// the store's own error.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, CUSTOMERS_TABLE)? {
            return Err(RepoError::MissingRequiredTable(CUSTOMERS_TABLE));
        }
        Ok(Self { conn })
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn create_customer(
        &self,
        name: &str,
        surname: &str,
        company_id: CompanyId,
    ) -> RepoResult<CustomerId> {
        self.conn.execute(
            "INSERT INTO Customers (name, surname, company_id) VALUES (?1, ?2, ?3);",
            params![name, surname, company_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_customer_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE Customers
             SET name = ?1
             WHERE name = ?2;",
            params![new_name, old_name],
        )?;
        Ok(changed)
    }

    fn delete_customer(&self, name: &str) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM Customers WHERE name = ?1;", [name])?;
        Ok(changed)
    }

    fn get_customers(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} ORDER BY customer_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();

        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn join_customers_companies(&self) -> RepoResult<Vec<CustomerCompany>> {
        let mut stmt = self.conn.prepare(CUSTOMER_COMPANY_JOIN_SQL)?;
        let mut rows = stmt.query([])?;
        let mut joined = Vec::new();

        while let Some(row) = rows.next()? {
            joined.push(parse_join_row(row)?);
        }

        Ok(joined)
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        customer_id: row.get("customer_id")?,
        name: required_text(row, CUSTOMERS_TABLE, "name")?,
        surname: required_text(row, CUSTOMERS_TABLE, "surname")?,
        company_id: required_integer(row, CUSTOMERS_TABLE, "company_id")?,
    })
}

fn parse_join_row(row: &Row<'_>) -> RepoResult<CustomerCompany> {
    let customer = Customer {
        customer_id: row.get("customer_id")?,
        name: required_text(row, CUSTOMERS_TABLE, "customer_name")?,
        surname: required_text(row, CUSTOMERS_TABLE, "customer_surname")?,
        company_id: required_integer(row, CUSTOMERS_TABLE, "customer_company_id")?,
    };
    let company = Company {
        company_id: row.get("company_id")?,
        name: required_text(row, COMPANIES_TABLE, "company_name")?,
        address: required_text(row, COMPANIES_TABLE, "company_address")?,
    };
    Ok(CustomerCompany { customer, company })
}
