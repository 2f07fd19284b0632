//! One connection per unit of work.
//!
//! # Responsibility
//! - Open a connection, run one operation inside a transaction, commit it,
//!   and close the connection.
//!
//! # Invariants
//! - The connection is released on every exit path, including errors.
//! - Work is committed only when the operation returns `Ok`; an `Err`
//!   rolls the transaction back when it is dropped.
//! - Nothing is cached between calls.

use super::{open_db, DbError};
use log::{debug, error, warn};
use rusqlite::Connection;
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;

/// Runs `f` against a fresh connection to the database at `path`.
///
/// `op` is a short label used only for diagnostics.
///
/// # Errors
/// - Returns open/begin/commit failures converted into `E`.
/// - Returns whatever `f` returns, after rolling back.
pub fn with_scoped_connection<T, E, F>(path: impl AsRef<Path>, op: &str, f: F) -> Result<T, E>
where
    E: From<DbError> + Display,
    F: FnOnce(&Connection) -> Result<T, E>,
{
    let started_at = Instant::now();
    let mut conn = open_db(path.as_ref())?;

    let result = run_in_transaction(&mut conn, f);
    close_connection(conn, op);

    match &result {
        Ok(_) => debug!(
            "event=scoped_op module=db status=ok op={} duration_ms={}",
            op,
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event=scoped_op module=db status=error op={} duration_ms={} error={}",
            op,
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

fn run_in_transaction<T, E, F>(conn: &mut Connection, f: F) -> Result<T, E>
where
    E: From<DbError>,
    F: FnOnce(&Connection) -> Result<T, E>,
{
    let tx = conn.transaction().map_err(DbError::from)?;
    let value = f(&tx)?;
    tx.commit().map_err(DbError::from)?;
    Ok(value)
}

fn close_connection(conn: Connection, op: &str) {
    if let Err((_conn, err)) = conn.close() {
        // The handle is dropped here, which retries the close.
        error!("event=db_close module=db status=error op={op} error={err}");
    }
}

#[cfg(test)]
mod tests {
    use super::with_scoped_connection;
    use crate::db::{open_db, DbError};
    use rusqlite::Connection;

    fn count_rows(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn committed_work_is_visible_to_later_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoped.db");

        with_scoped_connection(&path, "setup", |conn| -> Result<(), DbError> {
            conn.execute_batch("CREATE TABLE items (value TEXT);")?;
            conn.execute("INSERT INTO items (value) VALUES ('a')", [])?;
            Ok(())
        })
        .unwrap();

        let conn = open_db(&path).unwrap();
        assert_eq!(count_rows(&conn), 1);
    }

    #[test]
    fn failed_work_is_rolled_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoped.db");

        with_scoped_connection(&path, "setup", |conn| -> Result<(), DbError> {
            conn.execute_batch("CREATE TABLE items (value TEXT);")?;
            Ok(())
        })
        .unwrap();

        let result = with_scoped_connection(&path, "insert", |conn| -> Result<(), DbError> {
            conn.execute("INSERT INTO items (value) VALUES ('a')", [])?;
            conn.execute("INSERT INTO missing_table (value) VALUES ('b')", [])?;
            Ok(())
        });
        assert!(matches!(result, Err(DbError::Sqlite(_))));

        let conn = open_db(&path).unwrap();
        assert_eq!(count_rows(&conn), 0);
    }

    #[test]
    fn connection_is_released_after_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoped.db");

        let first = with_scoped_connection(&path, "broken", |conn| -> Result<(), DbError> {
            conn.execute("DELETE FROM nowhere", [])?;
            Ok(())
        });
        assert!(first.is_err());

        let value = with_scoped_connection(&path, "follow_up", |conn| -> Result<i64, DbError> {
            conn.execute_batch("CREATE TABLE items (value TEXT);")?;
            Ok(count_rows(conn))
        })
        .unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn open_failure_is_reported_as_db_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("scoped.db");

        let result = with_scoped_connection(&path, "open", |_conn| -> Result<(), DbError> {
            Ok(())
        });
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }
}
