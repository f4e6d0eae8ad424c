use crate::error::{Result, StoreError};
use hush_core::domain::{
    normalize_number, Contact, ContactId, ContactKind, ContactNumber, ContactNumberId, MatchKind,
};
use hush_core::CoreError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone)]
pub struct ContactNew {
    pub name: String,
    pub kind: ContactKind,
    pub numbers: Vec<NumberNew>,
}

#[derive(Debug, Clone)]
pub struct NumberNew {
    pub number: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub kind: Option<ContactKind>,
}

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn create(&self, input: ContactNew) -> Result<Contact> {
        let tx = self.conn.unchecked_transaction()?;
        let contact = create_inner(&tx, input)?;
        tx.commit()?;
        Ok(contact)
    }

    pub fn get(&self, id: ContactId, with_numbers: bool) -> Result<Option<Contact>> {
        get_inner(self.conn, id, with_numbers)
    }

    pub fn list_all(&self, with_numbers: bool) -> Result<Vec<Contact>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, type FROM contact ORDER BY name COLLATE NOCASE ASC, id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            let mut contact = contact_from_row(row)?;
            if with_numbers {
                contact.numbers = numbers_for_contact_inner(self.conn, contact.id)?;
            }
            contacts.push(contact);
        }
        Ok(contacts)
    }

    pub fn update(&self, id: ContactId, update: ContactUpdate) -> Result<Contact> {
        let mut contact = get_inner(self.conn, id, false)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            contact.name = name;
        }
        if let Some(kind) = update.kind {
            contact.kind = kind;
        }

        contact.validate()?;

        self.conn.execute(
            "UPDATE contact SET name = ?2, type = ?3 WHERE id = ?1;",
            params![contact.id.as_i64(), contact.name, contact.kind.as_i64()],
        )?;

        Ok(contact)
    }

    pub fn delete(&self, id: ContactId) -> Result<()> {
        // Owned numbers go with the contact via the FK cascade.
        self.conn
            .execute("DELETE FROM contact WHERE id = ?1;", [id.as_i64()])?;
        Ok(())
    }

    pub fn add_number(&self, contact_id: ContactId, input: NumberNew) -> Result<ContactNumber> {
        if get_inner(self.conn, contact_id, false)?.is_none() {
            return Err(StoreError::NotFound(contact_id.to_string()));
        }
        add_number_inner(self.conn, contact_id, input)
    }

    pub fn remove_number(&self, id: ContactNumberId) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM contact_number WHERE id = ?1;", [id.as_i64()])?;
        if removed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn numbers_for_contact(&self, contact_id: ContactId) -> Result<Vec<ContactNumber>> {
        numbers_for_contact_inner(self.conn, contact_id)
    }

    /// Resolves an incoming normalized number to the stored rules it
    /// satisfies, evaluating each row's match kind against the stored
    /// pattern. Order follows row ids; no further guarantee.
    pub fn find_numbers_by_number(&self, number: &str) -> Result<Vec<ContactNumber>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, number, type, contact_id FROM contact_number ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut matches = Vec::new();
        while let Some(row) = rows.next()? {
            let stored = number_from_row(row)?;
            if stored.kind.matches(&stored.number, number) {
                matches.push(stored);
            }
        }
        Ok(matches)
    }

    /// Loads the owning contact of every rule matched by
    /// [`find_numbers_by_number`]. A contact whose numbers match more than
    /// once appears once per matching number.
    pub fn find_contacts_by_number(&self, number: &str, with_numbers: bool) -> Result<Vec<Contact>> {
        let numbers = self.find_numbers_by_number(number)?;
        let mut contacts = Vec::with_capacity(numbers.len());
        for matched in numbers {
            if let Some(contact) = get_inner(self.conn, matched.contact_id, with_numbers)? {
                contacts.push(contact);
            }
        }
        Ok(contacts)
    }
}

fn create_inner(conn: &Connection, input: ContactNew) -> Result<Contact> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::EmptyName.into());
    }

    conn.execute(
        "INSERT INTO contact (name, type) VALUES (?1, ?2);",
        params![name, input.kind.as_i64()],
    )?;
    let id = ContactId::from_i64(conn.last_insert_rowid());

    let mut numbers = Vec::with_capacity(input.numbers.len());
    for number in input.numbers {
        numbers.push(add_number_inner(conn, id, number)?);
    }
    numbers.sort_by(|a, b| a.number.cmp(&b.number));

    Ok(Contact {
        id,
        name,
        kind: input.kind,
        numbers,
    })
}

fn add_number_inner(
    conn: &Connection,
    contact_id: ContactId,
    input: NumberNew,
) -> Result<ContactNumber> {
    // Rules are stored pre-normalized so lookups compare like with like.
    let number = normalize_number(&input.number);
    if number.is_empty() {
        return Err(CoreError::EmptyNumber.into());
    }

    conn.execute(
        "INSERT INTO contact_number (number, type, contact_id) VALUES (?1, ?2, ?3);",
        params![number, input.kind.as_i64(), contact_id.as_i64()],
    )?;

    Ok(ContactNumber {
        id: ContactNumberId::from_i64(conn.last_insert_rowid()),
        number,
        kind: input.kind,
        contact_id,
    })
}

fn get_inner(conn: &Connection, id: ContactId, with_numbers: bool) -> Result<Option<Contact>> {
    let mut stmt = conn.prepare("SELECT id, name, type FROM contact WHERE id = ?1;")?;
    let mut rows = stmt.query([id.as_i64()])?;
    if let Some(row) = rows.next()? {
        let mut contact = contact_from_row(row)?;
        if with_numbers {
            contact.numbers = numbers_for_contact_inner(conn, contact.id)?;
        }
        Ok(Some(contact))
    } else {
        Ok(None)
    }
}

fn numbers_for_contact_inner(conn: &Connection, contact_id: ContactId) -> Result<Vec<ContactNumber>> {
    let mut stmt = conn.prepare(
        "SELECT id, number, type, contact_id FROM contact_number
         WHERE contact_id = ?1
         ORDER BY number ASC;",
    )?;
    let mut rows = stmt.query([contact_id.as_i64()])?;
    let mut numbers = Vec::new();
    while let Some(row) = rows.next()? {
        numbers.push(number_from_row(row)?);
    }
    Ok(numbers)
}

fn contact_from_row(row: &rusqlite::Row<'_>) -> Result<Contact> {
    Ok(Contact {
        id: ContactId::from_i64(row.get(0)?),
        name: row.get(1)?,
        kind: ContactKind::from_i64(row.get(2)?),
        numbers: Vec::new(),
    })
}

fn number_from_row(row: &rusqlite::Row<'_>) -> Result<ContactNumber> {
    let kind = MatchKind::from_i64(row.get(2)?).map_err(StoreError::Core)?;
    Ok(ContactNumber {
        id: ContactNumberId::from_i64(row.get(0)?),
        number: row.get(1)?,
        kind,
        contact_id: ContactId::from_i64(row.get(3)?),
    })
}
