use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240301_0001_create_spaces",
        description: "Created spaces table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS spaces (
            id          INTEGER PRIMARY KEY,
            location    TEXT NOT NULL,
            seats       INTEGER NOT NULL CHECK (seats >= 1),
            outlets     INTEGER NOT NULL DEFAULT 0,
            accessible  INTEGER NOT NULL DEFAULT 0,
            quiet       INTEGER NOT NULL DEFAULT 0,
            private     INTEGER NOT NULL DEFAULT 0,
            media       INTEGER NOT NULL DEFAULT 0
        );
        "#,
    },
    Migration {
        version: "20240301_0002_create_bookings",
        description: "Created bookings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id        INTEGER PRIMARY KEY,
            space_id  INTEGER NOT NULL,          -- may dangle after a space is deleted
            user_id   TEXT NOT NULL,             -- user email
            start_at  TEXT NOT NULL,             -- RFC 3339, UTC
            end_at    TEXT NOT NULL              -- RFC 3339, UTC
        );
        "#,
    },
    Migration {
        version: "20240301_0003_create_storage_keys",
        description: "Created storage_keys table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS storage_keys (
            key         TEXT PRIMARY KEY,
            written_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240415_0004_index_bookings_space_start",
        description: "Indexed bookings by space and start",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_space_start ON bookings(space_id, start_at);
        CREATE INDEX IF NOT EXISTS idx_bookings_user ON bookings(user_id);
        "#,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    Ok(())
}

/// Versions of every known migration that has not been applied yet.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
///
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    if applied > 0 {
        success(format!("Applied {} database migration(s).", applied));
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert!(pending_migrations(&conn).unwrap().is_empty());
    }
}
