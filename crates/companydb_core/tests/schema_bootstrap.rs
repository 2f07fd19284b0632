use companydb_core::db::schema::{create_table_customers, ensure_schema, table_exists};
use companydb_core::db::{open_db, open_db_in_memory};
use companydb_core::{
    CompanyRepository, CustomerRepository, DirectoryService, RepoError, SqliteCompanyRepository,
    SqliteCustomerRepository,
};
use rusqlite::Connection;

#[test]
fn ensure_schema_creates_both_tables() {
    let conn = open_db_in_memory().unwrap();
    ensure_schema(&conn).unwrap();

    assert!(table_exists(&conn, "Companies").unwrap());
    assert!(table_exists(&conn, "Customers").unwrap());
}

#[test]
fn ensure_schema_twice_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    assert_eq!(table_definitions(&conn, "Companies"), 1);
    assert_eq!(table_definitions(&conn, "Customers"), 1);
}

#[test]
fn rerunning_schema_keeps_existing_rows() {
    let conn = open_db_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    SqliteCompanyRepository::try_new(&conn)
        .unwrap()
        .create_company("Feniksas", "Petrausko 5")
        .unwrap();

    ensure_schema(&conn).unwrap();

    let companies = SqliteCompanyRepository::try_new(&conn)
        .unwrap()
        .get_companies()
        .unwrap();
    assert_eq!(companies.len(), 1);
}

#[test]
fn service_table_creation_is_idempotent_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    let directory = DirectoryService::new(&path);

    directory.create_tables().unwrap();
    directory.create_table_companies().unwrap();
    directory.create_table_customers().unwrap();

    let conn = open_db(&path).unwrap();
    assert_eq!(table_definitions(&conn, "Companies"), 1);
    assert_eq!(table_definitions(&conn, "Customers"), 1);
}

#[test]
fn repositories_reject_connection_without_tables() {
    let conn = Connection::open_in_memory().unwrap();

    assert!(matches!(
        SqliteCompanyRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("Companies"))
    ));
    assert!(matches!(
        SqliteCustomerRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("Customers"))
    ));
}

#[test]
fn customer_repository_works_without_companies_table_except_join() {
    let conn = open_db_in_memory().unwrap();
    create_table_customers(&conn).unwrap();
    let repo = SqliteCustomerRepository::try_new(&conn).unwrap();

    repo.create_customer("Jonas", "Jonaitis", 123).unwrap();
    assert_eq!(repo.update_customer_name("Jonas", "Petras").unwrap(), 1);
    assert_eq!(repo.get_customers().unwrap()[0].name, "Petras");

    let err = repo.join_customers_companies().unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    assert_eq!(repo.delete_customer("Petras").unwrap(), 1);
}

#[test]
fn service_customer_calls_need_only_customers_table() {
    let dir = tempfile::tempdir().unwrap();
    let directory = DirectoryService::new(dir.path().join("db"));
    directory.create_table_customers().unwrap();

    directory.create_customer("Jonas", "Jonaitis", 123).unwrap();

    let customers = directory.get_customers().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].company_id, 123);
}

fn table_definitions(conn: &Connection, table_name: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1;",
        [table_name],
        |row| row.get(0),
    )
    .unwrap()
}
