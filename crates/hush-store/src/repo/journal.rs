use crate::error::{Result, StoreError};
use hush_core::domain::JournalEntryId;
use rusqlite::{params, Connection};

/// One screened-and-terminated call, kept for the user's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub time: i64,
    pub caller: String,
    pub number: Option<String>,
    pub text: Option<String>,
}

pub struct JournalRepo<'a> {
    conn: &'a Connection,
}

impl<'a> JournalRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn add(
        &self,
        time: i64,
        caller: &str,
        number: Option<&str>,
        text: Option<&str>,
    ) -> Result<JournalEntry> {
        self.conn.execute(
            "INSERT INTO journal (time, caller, number, text) VALUES (?1, ?2, ?3, ?4);",
            params![time, caller, number, text],
        )?;
        Ok(JournalEntry {
            id: JournalEntryId::from_i64(self.conn.last_insert_rowid()),
            time,
            caller: caller.to_string(),
            number: number.map(str::to_string),
            text: text.map(str::to_string),
        })
    }

    pub fn list_all(&self) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, time, caller, number, text FROM journal
             ORDER BY time DESC, id DESC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(JournalEntry {
                id: JournalEntryId::from_i64(row.get(0)?),
                time: row.get(1)?,
                caller: row.get(2)?,
                number: row.get(3)?,
                text: row.get(4)?,
            });
        }
        Ok(entries)
    }

    pub fn delete(&self, id: JournalEntryId) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM journal WHERE id = ?1;", [id.as_i64()])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM journal;", [])?;
        Ok(())
    }
}
