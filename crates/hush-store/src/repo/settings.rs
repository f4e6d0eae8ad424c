use crate::error::Result;
use rusqlite::{params, Connection};

pub struct SettingsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM settings WHERE name = ?1;")?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            Ok(row.get(0)?)
        } else {
            Ok(None)
        }
    }

    pub fn set(&self, name: &str, value: &str) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE settings SET value = ?2 WHERE name = ?1;",
            params![name, value],
        )?;
        if updated == 0 {
            self.conn.execute(
                "INSERT INTO settings (name, value) VALUES (?1, ?2);",
                params![name, value],
            )?;
        }
        Ok(())
    }
}
