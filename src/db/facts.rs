//! Fact rows and queries

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Fact row from database
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactRow {
    pub id: i64,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
}

impl FactRow {
    fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            content: row.get("content")?,
            category: row.get("category")?,
            image_url: row.get("image_url")?,
            source: row.get("source")?,
        })
    }
}

/// Input for seeding a fact
#[derive(Debug, Clone)]
pub struct NewFact {
    pub content: &'static str,
    pub category: &'static str,
    pub image_url: Option<&'static str>,
}

/// List all facts in insertion order
pub fn list_facts(conn: &Connection) -> Result<Vec<FactRow>, ApiError> {
    let mut stmt = conn.prepare("SELECT * FROM facts ORDER BY id")?;
    let facts = stmt
        .query_map([], FactRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(facts)
}

/// Get a fact by id
pub fn get_fact(conn: &Connection, id: i64) -> Result<Option<FactRow>, ApiError> {
    let mut stmt = conn.prepare("SELECT * FROM facts WHERE id = ?")?;
    let mut rows = stmt.query(params![id])?;

    match rows.next()? {
        Some(row) => Ok(Some(FactRow::from_row(row)?)),
        None => Ok(None),
    }
}

/// Count seeded facts
pub fn count_facts(conn: &Connection) -> Result<u64, ApiError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))?;
    Ok(count as u64)
}

/// Insert one seed fact
pub fn insert_fact(conn: &Connection, fact: &NewFact) -> Result<(), ApiError> {
    conn.execute(
        "INSERT INTO facts (content, category, image_url) VALUES (?, ?, ?)",
        params![fact.content, fact.category, fact.image_url],
    )?;
    Ok(())
}
