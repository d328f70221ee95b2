//! Team and aggregate statistics models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales agent on a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub member_id: Uuid,
    pub name: String,
    pub email: String,
}

/// Headline totals over a set of sale entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub total_mrr: f64,
    pub total_tcv: f64,
    pub sales_count: usize,
}

/// Per-agent totals within a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStats {
    pub member_id: Uuid,
    pub name: String,
    pub email: String,
    pub total_mrr: f64,
    pub total_tcv: f64,
    pub sales_count: usize,
}

/// Team-wide statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStats {
    pub agent_stats: Vec<AgentStats>,
    pub team_total_mrr: f64,
    pub team_total_tcv: f64,
    pub team_avg_mrr: f64,
    pub team_avg_tcv: f64,
}

/// One leaderboard row, ranked by MRR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    /// Share of team total MRR, as a percentage.
    pub mrr_share: f64,
    pub stats: AgentStats,
}

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month label, e.g. `"Aug 2026"`.
    pub month: String,
    pub mrr: f64,
    pub tcv: f64,
    pub sales: usize,
}
