//! Cookie store adapter - named string values with an expiry
//!
//! Behaves like a browser cookie jar scoped to path `/`: values are opaque strings,
//! reads go through the raw `name=value; other=value` header so expired entries
//! simply disappear. Write failures are logged and swallowed.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection};
use std::path::Path;

const COOKIE_PATH: &str = "/";

pub trait CookieStore {
    /// Store `value` under `name`, expiring `ttl_days` days from now
    fn set_value(&mut self, name: &str, value: &str, ttl_days: i64);

    /// Raw header of all live cookies, `a=1; b=2`
    fn raw_header(&self) -> String;

    fn get_value(&self, name: &str) -> Option<String> {
        find_cookie(&self.raw_header(), name)
    }
}

/// Scan a cookie header for `name=` and return its value
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    header
        .split(';')
        .map(|entry| entry.trim_start_matches(' '))
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(str::to_string)
}

fn expiry_from_now(ttl_days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(ttl_days)
}

#[derive(Debug, Clone)]
struct CookieEntry {
    name: String,
    value: String,
    #[allow(dead_code)]
    path: String,
    expires: DateTime<Utc>,
}

/// Cookie jar kept in process memory, lost on exit
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    entries: Vec<CookieEntry>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn upsert(&mut self, name: &str, value: &str, expires: DateTime<Utc>) {
        let entry = CookieEntry {
            name: name.to_string(),
            value: value.to_string(),
            path: COOKIE_PATH.to_string(),
            expires,
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn set_value(&mut self, name: &str, value: &str, ttl_days: i64) {
        self.upsert(name, value, expiry_from_now(ttl_days));
    }

    fn raw_header(&self) -> String {
        let now = Utc::now();
        self.entries
            .iter()
            .filter(|e| e.expires > now)
            .map(|e| format!("{}={}", e.name, e.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Cookie jar persisted in a SQLite file so ratings survive restarts
pub struct SqliteCookieStore {
    conn: Connection,
}

impl SqliteCookieStore {
    /// Open (or create) the cookie database at `path`
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("[Cookies] Could not create {}: {}", parent.display(), e);
            }
        }
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS cookies (
                name       TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                path       TEXT NOT NULL,
                expires_at INTEGER NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    fn write(&self, name: &str, value: &str, expires: DateTime<Utc>) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO cookies (name, value, path, expires_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value,
                 path = excluded.path, expires_at = excluded.expires_at",
            params![name, value, COOKIE_PATH, expires.timestamp()],
        )?;
        Ok(())
    }

    fn read_live(&self) -> rusqlite::Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, value FROM cookies WHERE expires_at > ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![Utc::now().timestamp()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let pairs = rows.collect::<rusqlite::Result<Vec<_>>>();
        pairs
    }

    /// Expiry stored for `name`, if any (expired or not)
    #[cfg(test)]
    pub fn expires_at(&self, name: &str) -> Option<DateTime<Utc>> {
        use chrono::TimeZone;

        self.conn
            .query_row(
                "SELECT expires_at FROM cookies WHERE name = ?1",
                params![name],
                |row| row.get::<_, i64>(0),
            )
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }
}

impl CookieStore for SqliteCookieStore {
    fn set_value(&mut self, name: &str, value: &str, ttl_days: i64) {
        if let Err(e) = self.write(name, value, expiry_from_now(ttl_days)) {
            log::warn!("[Cookies] Failed to store cookie '{}': {}", name, e);
        }
    }

    fn raw_header(&self) -> String {
        match self.read_live() {
            Ok(pairs) => pairs
                .into_iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
            Err(e) => {
                log::warn!("[Cookies] Failed to read cookies: {}", e);
                String::new()
            }
        }
    }
}
