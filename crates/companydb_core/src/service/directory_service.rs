//! Company/customer directory facade.
//!
//! # Responsibility
//! - Provide one method per data access operation.
//! - Open a scoped connection for every call and release it afterwards.
//!
//! # Invariants
//! - The service holds only a database path; no connection is kept.
//! - Each method runs exactly one repository statement, committed on success.
//! - Multi-call sequences are not transactional.

use crate::config::StoreConfig;
use crate::db::schema;
use crate::db::with_scoped_connection;
use crate::model::company::{Company, CompanyId};
use crate::model::customer::{Customer, CustomerCompany, CustomerId};
use crate::repo::company_repo::{CompanyRepository, RepoResult, SqliteCompanyRepository};
use crate::repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Use-case service over the database file at `db_path`.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    db_path: PathBuf,
}

impl DirectoryService {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.db_path)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates `Companies` if it does not exist yet.
    pub fn create_table_companies(&self) -> RepoResult<()> {
        self.scoped("create_table_companies", |conn| {
            Ok(schema::create_table_companies(conn)?)
        })
    }

    /// Creates `Customers` if it does not exist yet.
    pub fn create_table_customers(&self) -> RepoResult<()> {
        self.scoped("create_table_customers", |conn| {
            Ok(schema::create_table_customers(conn)?)
        })
    }

    /// Creates both tables, one scoped connection each.
    pub fn create_tables(&self) -> RepoResult<()> {
        self.create_table_companies()?;
        self.create_table_customers()
    }

    pub fn create_company(&self, name: &str, address: &str) -> RepoResult<CompanyId> {
        self.with_companies("create_company", |repo| {
            repo.create_company(name, address)
        })
    }

    /// Renames all companies called `old_name`. Zero matches is not an error.
    pub fn update_company_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize> {
        self.with_companies("update_company_name", |repo| {
            repo.update_company_name(old_name, new_name)
        })
    }

    pub fn delete_company(&self, name: &str) -> RepoResult<usize> {
        self.with_companies("delete_company", |repo| repo.delete_company(name))
    }

    pub fn get_companies(&self) -> RepoResult<Vec<Company>> {
        self.with_companies("get_companies", |repo| repo.get_companies())
    }

    pub fn get_company_by_name(&self, name: &str) -> RepoResult<Option<Company>> {
        self.with_companies("get_company_by_name", |repo| {
            repo.get_company_by_name(name)
        })
    }

    /// Inserts a customer. `company_id` is not checked against `Companies`.
    pub fn create_customer(
        &self,
        name: &str,
        surname: &str,
        company_id: CompanyId,
    ) -> RepoResult<CustomerId> {
        self.with_customers("create_customer", |repo| {
            repo.create_customer(name, surname, company_id)
        })
    }

    pub fn update_customer_name(&self, old_name: &str, new_name: &str) -> RepoResult<usize> {
        self.with_customers("update_customer_name", |repo| {
            repo.update_customer_name(old_name, new_name)
        })
    }

    pub fn delete_customer(&self, name: &str) -> RepoResult<usize> {
        self.with_customers("delete_customer", |repo| repo.delete_customer(name))
    }

    pub fn get_customers(&self) -> RepoResult<Vec<Customer>> {
        self.with_customers("get_customers", |repo| repo.get_customers())
    }

    /// Customers paired with their company; customers without one are skipped.
    pub fn join_customers_companies(&self) -> RepoResult<Vec<CustomerCompany>> {
        self.with_customers("join_customers_companies", |repo| {
            repo.join_customers_companies()
        })
    }

    fn scoped<T>(&self, op: &str, f: impl FnOnce(&Connection) -> RepoResult<T>) -> RepoResult<T> {
        with_scoped_connection(&self.db_path, op, f)
    }

    fn with_companies<T>(
        &self,
        op: &str,
        f: impl FnOnce(&SqliteCompanyRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        self.scoped(op, |conn| f(&SqliteCompanyRepository::try_new(conn)?))
    }

    fn with_customers<T>(
        &self,
        op: &str,
        f: impl FnOnce(&SqliteCustomerRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        self.scoped(op, |conn| f(&SqliteCustomerRepository::try_new(conn)?))
    }
}
