use rusqlite::Connection;

// AUTOINCREMENT keeps deleted ids from ever being handed out again.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS supplier (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name   TEXT NOT NULL,
    last_name    TEXT,
    national_id  TEXT NOT NULL UNIQUE,
    father_name  TEXT NOT NULL,
    mother_name  TEXT NOT NULL,
    address      TEXT NOT NULL,
    postal_code  TEXT
);
";

/// Applies the schema. Safe to run on every open; existing tables are
/// left untouched.
pub fn ensure_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)
}
