//! Vote reactions and per-fact aggregate counts

use serde::{Deserialize, Serialize};

/// Reaction a visitor can cast on the daily fact.
///
/// Closed set; the wire contract does not extend without a schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteType {
    Ok,
    Radical,
    HolyCow,
    ButterBackside,
}

impl VoteType {
    pub const ALL: [VoteType; 4] = [
        VoteType::Ok,
        VoteType::Radical,
        VoteType::HolyCow,
        VoteType::ButterBackside,
    ];

    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Ok => "ok",
            VoteType::Radical => "radical",
            VoteType::HolyCow => "holy_cow",
            VoteType::ButterBackside => "butter_backside",
        }
    }

    /// Parse the wire representation; `None` for anything outside the set
    pub fn parse(s: &str) -> Option<VoteType> {
        match s {
            "ok" => Some(VoteType::Ok),
            "radical" => Some(VoteType::Radical),
            "holy_cow" => Some(VoteType::HolyCow),
            "butter_backside" => Some(VoteType::ButterBackside),
            _ => None,
        }
    }
}

/// Per-category vote counts for one fact, recomputed on every read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStats {
    pub ok: u64,
    pub radical: u64,
    pub holy_cow: u64,
    pub butter_backside: u64,
}

impl VoteStats {
    pub fn count(&self, vote_type: VoteType) -> u64 {
        match vote_type {
            VoteType::Ok => self.ok,
            VoteType::Radical => self.radical,
            VoteType::HolyCow => self.holy_cow,
            VoteType::ButterBackside => self.butter_backside,
        }
    }

    pub fn record(&mut self, vote_type: VoteType, count: u64) {
        match vote_type {
            VoteType::Ok => self.ok = count,
            VoteType::Radical => self.radical = count,
            VoteType::HolyCow => self.holy_cow = count,
            VoteType::ButterBackside => self.butter_backside = count,
        }
    }

    /// Total votes across all categories
    pub fn total(&self) -> u64 {
        self.ok + self.radical + self.holy_cow + self.butter_backside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_type_round_trip() {
        for vt in VoteType::ALL {
            assert_eq!(VoteType::parse(vt.as_str()), Some(vt));
        }
    }

    #[test]
    fn test_unknown_vote_type_rejected() {
        assert_eq!(VoteType::parse("bogus"), None);
        assert_eq!(VoteType::parse(""), None);
        assert_eq!(VoteType::parse("OK"), None);
    }

    #[test]
    fn test_stats_total_is_sum_of_categories() {
        let stats = VoteStats {
            ok: 3,
            radical: 1,
            holy_cow: 0,
            butter_backside: 2,
        };
        assert_eq!(stats.total(), 6);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&VoteType::ButterBackside).unwrap();
        assert_eq!(json, "\"butter_backside\"");
        let back: VoteType = serde_json::from_str("\"holy_cow\"").unwrap();
        assert_eq!(back, VoteType::HolyCow);
    }
}
