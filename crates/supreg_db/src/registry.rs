use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use supreg_core::error::{RegistryError, Result};
use supreg_core::model::{SupplierDraft, SupplierRecord};
use supreg_core::validation::rules::is_valid_national_id;
use supreg_core::draft_validator;

use crate::schema::ensure_schema;

/// The registry owns its store handle for its whole lifetime. Opened once
/// at startup, closed when the value drops.
pub struct SupplierRegistry {
    conn: Connection,
}

impl SupplierRegistry {
    /// Opens (creating if needed) the database at `path` and applies the
    /// schema idempotently.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(store_err)?;
        ensure_schema(&conn).map_err(store_err)?;
        Ok(Self { conn })
    }

    /// In-memory registry, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        ensure_schema(&conn).map_err(store_err)?;
        Ok(Self { conn })
    }

    /// Validates the draft, then inserts it. Returns the generated id.
    ///
    /// The duplicate pre-check only buys a cleaner error before touching
    /// the row; the UNIQUE index on national_id is the real enforcement
    /// point, and its violation at insert time maps to the same error.
    pub fn register(&self, draft: &SupplierDraft) -> Result<i64> {
        draft_validator().run(draft)?;

        if self.national_id_exists(&draft.national_id)? {
            return Err(RegistryError::DuplicateNationalId);
        }

        self.conn
            .execute(
                "INSERT INTO supplier
                 (first_name, last_name, national_id, father_name, mother_name, address, postal_code)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    draft.first_name,
                    draft.last_name_opt(),
                    draft.national_id,
                    draft.father_name,
                    draft.mother_name,
                    draft.address,
                    draft.postal_code_opt(),
                ],
            )
            .map_err(insert_err)?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, national_id = %draft.national_id, "supplier registered");
        Ok(id)
    }

    /// Looks up the record with the given national id. Malformed input is
    /// rejected before the store is queried; a missing record is `None`,
    /// not an error.
    pub fn fetch_by_id(&self, national_id: &str) -> Result<Option<SupplierRecord>> {
        if !is_valid_national_id(national_id) {
            return Err(RegistryError::InvalidNationalId);
        }

        self.conn
            .query_row(
                "SELECT id, first_name, last_name, national_id,
                        father_name, mother_name, address, postal_code
                 FROM supplier WHERE national_id = ?1",
                params![national_id],
                |row| {
                    Ok(SupplierRecord {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        national_id: row.get(3)?,
                        father_name: row.get(4)?,
                        mother_name: row.get(5)?,
                        address: row.get(6)?,
                        postal_code: row.get(7)?,
                    })
                },
            )
            .optional()
            .map_err(store_err)
    }

    /// All record ids in store order. Empty store yields an empty vec.
    pub fn list_ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM supplier")
            .map_err(store_err)?;
        let ids = stmt
            .query_map([], |row| row.get(0))
            .map_err(store_err)?
            .collect::<std::result::Result<Vec<i64>, _>>()
            .map_err(store_err)?;
        Ok(ids)
    }

    /// Deletes at most one record. Deleting an absent id is not an error;
    /// the returned row count is simply zero.
    pub fn delete_by_id(&self, national_id: &str) -> Result<usize> {
        if !is_valid_national_id(national_id) {
            return Err(RegistryError::InvalidNationalId);
        }

        let affected = self
            .conn
            .execute("DELETE FROM supplier WHERE national_id = ?1", params![national_id])
            .map_err(store_err)?;
        tracing::debug!(national_id, affected, "supplier deleted");
        Ok(affected)
    }

    /// Unconditionally empties the table and returns the deleted count.
    /// Confirmation is the caller's job; none happens here.
    pub fn delete_all(&self) -> Result<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM supplier", [])
            .map_err(store_err)?;
        tracing::debug!(affected, "all suppliers deleted");
        Ok(affected)
    }

    fn national_id_exists(&self, national_id: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM supplier WHERE national_id = ?1")
            .map_err(store_err)?;
        stmt.exists(params![national_id]).map_err(store_err)
    }
}

fn store_err(err: rusqlite::Error) -> RegistryError {
    RegistryError::Store(err.to_string())
}

/// Insert-time errors additionally recognize the UNIQUE index firing for a
/// national id that slipped past the pre-check.
fn insert_err(err: rusqlite::Error) -> RegistryError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RegistryError::DuplicateNationalId
        }
        _ => store_err(err),
    }
}
