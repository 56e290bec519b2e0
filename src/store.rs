use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::model::{IconSlot, IconText};

/// Storage bucket holding the icon texts
pub const BUCKET: &str = "icon_texts";

/// Entry inside the bucket whose members are the encoded texts
pub const ENTRY: &str = "texts";

/// Separator between slot number and text in an encoded entry
pub const DELIMITER: char = ':';

/// Encode one slot/text pair as `"<slot>:<text>"`
pub fn encode_entry(slot: IconSlot, text: &str) -> String {
    format!("{}{}{}", slot.number(), DELIMITER, text)
}

/// Decode an entry, splitting on the first delimiter only
///
/// Returns `None` for entries without a delimiter, with a non-numeric key,
/// or with a slot outside 1..=6.
pub fn decode_entry(entry: &str) -> Option<(IconSlot, String)> {
    let (key, text) = entry.split_once(DELIMITER)?;
    let slot = key.trim().parse::<u8>().ok().and_then(IconSlot::new)?;
    Some((slot, text.to_string()))
}

/// Local key-value store for icon texts, backed by SQLite
///
/// Mirrors a preference bucket: each (bucket, name) pair holds an unordered
/// set of string members.
pub struct TextStore {
    conn: Connection,
}

impl TextStore {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("opening text store at {}", path.display()))?;

        let mut store = TextStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Store that lives only as long as this value
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = TextStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Default database location under the platform data directory
    pub fn default_path() -> PathBuf {
        if let Some(data_dir) = dirs::data_dir() {
            data_dir.join("emojicon").join("emojicon.db")
        } else {
            // Fallback to the temp dir if no data dir available
            crate::utils::get_data_fallback_path().join("emojicon.db")
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS string_sets (
                bucket TEXT NOT NULL,
                name TEXT NOT NULL,
                member TEXT NOT NULL,
                PRIMARY KEY (bucket, name, member)
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    /// Raw members of the texts entry
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT member FROM string_sets WHERE bucket = ?1 AND name = ?2",
        )?;

        let members = stmt
            .query_map(params![BUCKET, ENTRY], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(members)
    }

    /// Replace the raw members of the texts entry in one transaction
    pub fn replace_entries(&self, members: &[String]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM string_sets WHERE bucket = ?1 AND name = ?2",
            params![BUCKET, ENTRY],
        )?;

        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO string_sets (bucket, name, member) VALUES (?1, ?2, ?3)",
            )?;

            for member in members {
                stmt.execute(params![BUCKET, ENTRY, member])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Load every stored text
    ///
    /// Never fails: storage errors yield an empty mapping and malformed
    /// entries are skipped.
    pub fn load(&self) -> IconText {
        let entries = match self.entries() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to read icon texts: {}", e);
                return IconText::new();
            }
        };

        entries
            .iter()
            .filter_map(|entry| {
                let decoded = decode_entry(entry);
                if decoded.is_none() {
                    log::debug!("Skipping malformed icon text entry: {:?}", entry);
                }
                decoded
            })
            .collect()
    }

    /// Replace the whole persisted mapping with `texts`
    pub fn save(&self, texts: &IconText) -> Result<()> {
        let members: Vec<String> = texts
            .iter()
            .map(|(slot, text)| encode_entry(slot, text))
            .collect();

        self.replace_entries(&members)
    }
}
