pub mod board_ordering_service;
pub mod project_service;

use crate::Result as DbErrorResult;

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Open a write transaction holding the database write lock from the start.
///
/// A deferred `BEGIN` only upgrades to a writer at its first write, and a
/// competing writer committing in between makes that upgrade fail with a
/// stale snapshot. `BEGIN IMMEDIATE` queues writers behind the busy timeout
/// instead, so their reads and writes never interleave.
pub(crate) async fn begin_write(
    pool: &SqlitePool,
) -> DbErrorResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}
