//! SQLite storage layer for facts and votes
//!
//! ## Tables
//!
//! - `facts` - Seeded trivia items (insertion order drives daily selection)
//! - `votes` - Append-only reaction log, aggregated at read time
//!
//! The storage capability surface is `get_all_facts`, `get_fact_of_the_day`,
//! `create_vote`, and `seed_facts`; handlers receive a shared handle rather
//! than reaching for a module-level singleton.

pub mod facts;
pub mod schema;
pub mod votes;

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::selector;
use crate::vote::{VoteStats, VoteType};

pub use facts::{FactRow, NewFact};

/// A fact joined with its recomputed vote aggregates.
///
/// Derived on every read from the vote log, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactWithStats {
    #[serde(flatten)]
    pub fact: FactRow,
    pub stats: VoteStats,
    pub total_votes: u64,
}

/// SQLite database for facts and votes
pub struct FactDb {
    conn: Mutex<Connection>,
}

impl FactDb {
    /// Open or create the fact database
    pub fn open(data_dir: &Path) -> Result<Self, ApiError> {
        let db_path = data_dir.join("facts.db");
        info!("Opening SQLite database at {:?}", db_path);

        let conn = Connection::open(&db_path)?;

        // WAL keeps aggregate reads cheap while votes append
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, ApiError> {
        debug!("Opening in-memory SQLite database");

        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.init_schema()?;

        Ok(db)
    }

    fn init_schema(&self) -> Result<(), ApiError> {
        self.with_conn(|conn| schema::init_schema(conn))
    }

    /// Run a closure against the connection
    fn with_conn<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> Result<T, ApiError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ApiError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Run a closure with exclusive access (for transactions)
    fn with_conn_mut<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ApiError>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| ApiError::Internal(format!("Lock poisoned: {}", e)))?;
        f(&mut conn)
    }

    /// All seeded facts in insertion order
    pub fn get_all_facts(&self) -> Result<Vec<FactRow>, ApiError> {
        self.with_conn(facts::list_facts)
    }

    /// The fact selected for the given date, with fresh aggregates.
    ///
    /// `None` only when the fact table is empty.
    pub fn get_fact_of_the_day(&self, date: NaiveDate) -> Result<Option<FactWithStats>, ApiError> {
        self.with_conn(|conn| {
            let all = facts::list_facts(conn)?;
            let Some(index) = selector::fact_index(date, all.len()) else {
                return Ok(None);
            };

            let fact = all[index].clone();
            let stats = votes::vote_stats(conn, fact.id)?;
            Ok(Some(FactWithStats {
                total_votes: stats.total(),
                fact,
                stats,
            }))
        })
    }

    /// Append a vote and return the fact's recomputed aggregates.
    ///
    /// Rejects votes referencing a fact that does not exist; nothing is
    /// written on rejection.
    pub fn create_vote(&self, fact_id: i64, vote_type: VoteType) -> Result<VoteOutcome, ApiError> {
        self.with_conn(|conn| {
            if facts::get_fact(conn, fact_id)?.is_none() {
                return Err(ApiError::invalid_field(
                    format!("No fact with id {}", fact_id),
                    "factId",
                ));
            }

            votes::insert_vote(conn, fact_id, vote_type)?;
            let stats = votes::vote_stats(conn, fact_id)?;
            Ok(VoteOutcome {
                total_votes: stats.total(),
                stats,
            })
        })
    }

    /// Insert the seed facts if the table is empty; no-op otherwise.
    ///
    /// Returns the number of facts inserted (0 when already seeded).
    pub fn seed_facts(&self, seed: &[NewFact]) -> Result<usize, ApiError> {
        self.with_conn_mut(|conn| {
            if facts::count_facts(conn)? > 0 {
                debug!("Fact table already seeded, skipping");
                return Ok(0);
            }

            let tx = conn.transaction()?;
            for fact in seed {
                facts::insert_fact(&tx, fact)?;
            }
            tx.commit()?;

            info!("Seeded {} facts", seed.len());
            Ok(seed.len())
        })
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats, ApiError> {
        self.with_conn(|conn| {
            let fact_count = facts::count_facts(conn)?;
            let vote_count: i64 =
                conn.query_row("SELECT COUNT(*) FROM votes", [], |row| row.get(0))?;

            Ok(DbStats {
                fact_count,
                vote_count: vote_count as u64,
            })
        })
    }
}

/// Aggregates returned after recording a vote
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub stats: VoteStats,
    pub total_votes: u64,
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DbStats {
    pub fact_count: u64,
    pub vote_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_two() -> [NewFact; 2] {
        [
            NewFact {
                content: "Fact A",
                category: "tech",
                image_url: None,
            },
            NewFact {
                content: "Fact B",
                category: "nature",
                image_url: Some("https://example.com/b.jpg"),
            },
        ]
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_is_idempotent() {
        let db = FactDb::open_in_memory().unwrap();
        assert_eq!(db.seed_facts(&seed_two()).unwrap(), 2);
        assert_eq!(db.seed_facts(&seed_two()).unwrap(), 0);
        assert_eq!(db.get_all_facts().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_store_has_no_fact_of_the_day() {
        let db = FactDb::open_in_memory().unwrap();
        assert!(db.get_fact_of_the_day(date(2024, 1, 1)).unwrap().is_none());
    }

    #[test]
    fn test_day_of_year_selection_cycles() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();

        // Day 3 of the year, 2 facts: 3 mod 2 = 1 selects the second fact
        let fact = db.get_fact_of_the_day(date(2024, 1, 3)).unwrap().unwrap();
        assert_eq!(fact.fact.content, "Fact B");

        // Day 4: wraps back to the first
        let fact = db.get_fact_of_the_day(date(2024, 1, 4)).unwrap().unwrap();
        assert_eq!(fact.fact.content, "Fact A");
    }

    #[test]
    fn test_selection_is_stable_for_a_date() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();

        let d = date(2025, 6, 15);
        let first = db.get_fact_of_the_day(d).unwrap().unwrap();
        for _ in 0..5 {
            let again = db.get_fact_of_the_day(d).unwrap().unwrap();
            assert_eq!(again.fact.id, first.fact.id);
        }
    }

    #[test]
    fn test_vote_aggregation() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();
        let facts = db.get_all_facts().unwrap();
        let b = facts[1].id;

        let outcome = db.create_vote(b, VoteType::Radical).unwrap();
        assert_eq!(outcome.stats.radical, 1);
        assert_eq!(outcome.stats.ok, 0);
        assert_eq!(outcome.total_votes, 1);

        db.create_vote(b, VoteType::Radical).unwrap();
        let outcome = db.create_vote(b, VoteType::HolyCow).unwrap();
        assert_eq!(outcome.stats.radical, 2);
        assert_eq!(outcome.stats.holy_cow, 1);
        assert_eq!(outcome.total_votes, 3);
    }

    #[test]
    fn test_votes_do_not_leak_across_facts() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();
        let facts = db.get_all_facts().unwrap();

        db.create_vote(facts[0].id, VoteType::Ok).unwrap();
        let outcome = db.create_vote(facts[1].id, VoteType::ButterBackside).unwrap();
        assert_eq!(outcome.total_votes, 1);
        assert_eq!(outcome.stats.ok, 0);
        assert_eq!(outcome.stats.butter_backside, 1);
    }

    #[test]
    fn test_vote_on_unknown_fact_rejected_and_not_written() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();

        let err = db.create_vote(999, VoteType::Ok).unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
        assert_eq!(db.stats().unwrap().vote_count, 0);
    }

    #[test]
    fn test_total_votes_matches_stats_sum() {
        let db = FactDb::open_in_memory().unwrap();
        db.seed_facts(&seed_two()).unwrap();
        let id = db.get_all_facts().unwrap()[0].id;

        for vt in VoteType::ALL {
            db.create_vote(id, vt).unwrap();
        }
        let outcome = db.create_vote(id, VoteType::Ok).unwrap();
        assert_eq!(outcome.total_votes, 5);
        assert_eq!(outcome.stats.total(), outcome.total_votes);
    }
}
