/// Persisted token catalog (SQLite)
///
/// Simple put/get-all store keyed by contract id so the full catalog does
/// not have to be re-fetched every session. No eviction policy.
use crate::config::TOKENS_DATABASE;
use crate::logger::{self, LogTag};
use crate::tokens::{Token, TokenMetadata};

use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct TokenStore {
    connection: Arc<Mutex<Connection>>,
}

impl TokenStore {
    /// Open (or create) the on-disk catalog at the default path
    pub fn open_default() -> Result<Self, rusqlite::Error> {
        Self::open(TOKENS_DATABASE)
    }

    pub fn open(path: &str) -> Result<Self, rusqlite::Error> {
        let connection = Connection::open(path)?;
        // WAL for concurrency, only meaningful for file-backed stores
        connection.pragma_update(None, "journal_mode", "WAL")?;
        connection.busy_timeout(std::time::Duration::from_millis(5_000))?;
        Self::from_connection(connection)
    }

    /// In-memory store for tests
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(connection: Connection) -> Result<Self, rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS tokens (
                contract_id TEXT PRIMARY KEY,
                display_name TEXT NOT NULL,
                is_native INTEGER NOT NULL DEFAULT 0,
                name TEXT,
                symbol TEXT,
                decimals INTEGER,
                icon TEXT
            )",
            [],
        )?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Insert or replace a catalog entry
    pub fn put(&self, token: &Token) -> Result<(), rusqlite::Error> {
        let connection = self.connection.lock().unwrap();
        Self::put_with(&connection, token)
    }

    /// Insert or replace a batch of entries in one transaction
    pub fn put_many(&self, tokens: &[Token]) -> Result<(), rusqlite::Error> {
        let mut connection = self.connection.lock().unwrap();
        let tx = connection.transaction()?;
        for token in tokens {
            Self::put_with(&tx, token)?;
        }
        tx.commit()?;

        logger::debug(
            LogTag::Cache,
            "STORE_PUT",
            &format!("persisted {} token(s)", tokens.len()),
        );
        Ok(())
    }

    fn put_with(connection: &Connection, token: &Token) -> Result<(), rusqlite::Error> {
        let metadata = token.metadata.as_ref();
        connection.execute(
            "INSERT OR REPLACE INTO tokens
                (contract_id, display_name, is_native, name, symbol, decimals, icon)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                token.contract_id,
                token.display_name,
                token.is_native as i64,
                metadata.map(|m| m.name.clone()),
                metadata.map(|m| m.symbol.clone()),
                metadata.map(|m| m.decimals as i64),
                metadata.and_then(|m| m.icon.clone()),
            ],
        )?;
        Ok(())
    }

    /// All persisted catalog entries
    pub fn get_all(&self) -> Result<Vec<Token>, rusqlite::Error> {
        let connection = self.connection.lock().unwrap();
        let mut statement = connection.prepare(
            "SELECT contract_id, display_name, is_native, name, symbol, decimals, icon
             FROM tokens ORDER BY contract_id",
        )?;

        let rows = statement.query_map([], |row| {
            let name: Option<String> = row.get(3)?;
            let symbol: Option<String> = row.get(4)?;
            let decimals: Option<i64> = row.get(5)?;
            let icon: Option<String> = row.get(6)?;

            let metadata = match (name, symbol, decimals) {
                (Some(name), Some(symbol), Some(decimals)) => Some(TokenMetadata {
                    name,
                    symbol,
                    decimals: decimals as u32,
                    icon,
                }),
                _ => None,
            };

            Ok(Token {
                contract_id: row.get(0)?,
                display_name: row.get(1)?,
                is_native: row.get::<_, i64>(2)? != 0,
                metadata,
            })
        })?;

        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> Token {
        Token {
            contract_id: "usdt.tether-token.near".to_string(),
            display_name: "USDT".to_string(),
            is_native: false,
            metadata: Some(TokenMetadata {
                name: "Tether USD".to_string(),
                symbol: "USDT".to_string(),
                decimals: 6,
                icon: None,
            }),
        }
    }

    #[test]
    fn round_trips_tokens_with_and_without_metadata() {
        let store = TokenStore::open_in_memory().unwrap();

        let with_metadata = sample_token();
        let bare = Token {
            contract_id: "crans.tkn.near".to_string(),
            display_name: "CRANS".to_string(),
            is_native: false,
            metadata: None,
        };

        store.put_many(&[with_metadata.clone(), bare.clone()]).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&with_metadata));
        assert!(all.contains(&bare));
    }

    #[test]
    fn put_replaces_existing_entries() {
        let store = TokenStore::open_in_memory().unwrap();

        let mut token = sample_token();
        store.put(&token).unwrap();

        token.display_name = "Tether".to_string();
        store.put(&token).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].display_name, "Tether");
    }
}
