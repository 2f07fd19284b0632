//! Core data access for the company/customer directory.
//! Every public operation runs on its own short-lived SQLite connection.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, DEFAULT_DB_PATH};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{Company, CompanyId};
pub use model::customer::{Customer, CustomerCompany, CustomerId};
pub use repo::company_repo::{CompanyRepository, RepoError, RepoResult, SqliteCompanyRepository};
pub use repo::customer_repo::{CustomerRepository, SqliteCustomerRepository};
pub use service::directory_service::DirectoryService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
