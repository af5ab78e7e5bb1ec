//! Vote inserts and read-time aggregation

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::ApiError;
use crate::vote::{VoteStats, VoteType};

/// Append one vote to the log
pub fn insert_vote(conn: &Connection, fact_id: i64, vote_type: VoteType) -> Result<(), ApiError> {
    conn.execute(
        "INSERT INTO votes (fact_id, vote_type) VALUES (?, ?)",
        params![fact_id, vote_type.as_str()],
    )?;
    debug!(fact_id, vote_type = vote_type.as_str(), "Vote recorded");
    Ok(())
}

/// Recompute per-category counts for one fact.
///
/// A grouped count over the append-only log; order-insensitive and safe to
/// recompute on every read. Rows with a vote type outside the closed set
/// cannot exist (inserts go through [`VoteType`]), but are skipped if the
/// database was written by hand.
pub fn vote_stats(conn: &Connection, fact_id: i64) -> Result<VoteStats, ApiError> {
    let mut stmt = conn.prepare(
        "SELECT vote_type, COUNT(*) FROM votes WHERE fact_id = ? GROUP BY vote_type",
    )?;

    let rows = stmt.query_map(params![fact_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut stats = VoteStats::default();
    for row in rows {
        let (vote_type, count) = row?;
        if let Some(vt) = VoteType::parse(&vote_type) {
            stats.record(vt, count as u64);
        }
    }

    Ok(stats)
}
