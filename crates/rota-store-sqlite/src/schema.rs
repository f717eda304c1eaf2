//! SQL schema for the rota SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Assignments are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS assignments (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    device_a     TEXT NOT NULL,
    device_b     TEXT NOT NULL,
    period_start TEXT NOT NULL,   -- ISO 8601 date, YYYY-MM-DD
    recorded_at  TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

PRAGMA user_version = 1;
";
