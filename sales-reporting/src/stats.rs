//! Aggregation over recorded sales: headline totals, team statistics,
//! leaderboards, and monthly roll-ups.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::date_range::DateRange;
use crate::models::{
    AgentStats, LeaderboardEntry, MonthlyTotals, SaleEntry, SalesTotals, TeamMember, TeamStats,
};

/// Headline totals over a set of entries.
pub fn sales_totals(entries: &[SaleEntry]) -> SalesTotals {
    SalesTotals {
        total_mrr: entries.iter().map(|e| e.mrr).sum(),
        total_tcv: entries.iter().map(|e| e.tcv).sum(),
        sales_count: entries.len(),
    }
}

/// Per-agent and team-wide totals.
///
/// Entries whose agent is not in `members` are ignored. Averages over an
/// empty team are zero.
pub fn team_stats(members: &[TeamMember], entries: &[SaleEntry]) -> TeamStats {
    let agent_stats: Vec<AgentStats> = members
        .iter()
        .map(|member| {
            let mut total_mrr = 0.0;
            let mut total_tcv = 0.0;
            let mut sales_count = 0;
            for entry in entries.iter().filter(|e| e.agent_id == member.member_id) {
                total_mrr += entry.mrr;
                total_tcv += entry.tcv;
                sales_count += 1;
            }
            AgentStats {
                member_id: member.member_id,
                name: member.name.clone(),
                email: member.email.clone(),
                total_mrr,
                total_tcv,
                sales_count,
            }
        })
        .collect();

    let team_total_mrr: f64 = agent_stats.iter().map(|a| a.total_mrr).sum();
    let team_total_tcv: f64 = agent_stats.iter().map(|a| a.total_tcv).sum();
    let member_count = agent_stats.len();

    let (team_avg_mrr, team_avg_tcv) = if member_count == 0 {
        (0.0, 0.0)
    } else {
        let count = member_count as f64;
        (team_total_mrr / count, team_total_tcv / count)
    };

    TeamStats {
        agent_stats,
        team_total_mrr,
        team_total_tcv,
        team_avg_mrr,
        team_avg_tcv,
    }
}

/// Rank agents by total MRR, descending. Ties keep member order. Each
/// row carries the agent's share of team MRR as a percentage; shares are
/// zero when the team has no MRR yet.
pub fn leaderboard(stats: &TeamStats) -> Vec<LeaderboardEntry> {
    let mut ranked = stats.agent_stats.clone();
    ranked.sort_by(|a, b| b.total_mrr.total_cmp(&a.total_mrr));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, agent)| {
            let mrr_share = if stats.team_total_mrr > 0.0 {
                agent.total_mrr / stats.team_total_mrr * 100.0
            } else {
                0.0
            };
            LeaderboardEntry {
                rank: index + 1,
                mrr_share,
                stats: agent,
            }
        })
        .collect()
}

/// Roll entries up per calendar month, oldest first, keeping the most
/// recent `last_n` months that have entries.
pub fn monthly_totals(entries: &[SaleEntry], last_n: usize) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<(i32, u32), MonthlyTotals> = BTreeMap::new();

    for entry in entries {
        let key = (entry.date.year(), entry.date.month());
        let totals = months.entry(key).or_insert_with(|| MonthlyTotals {
            month: month_label(entry.date),
            mrr: 0.0,
            tcv: 0.0,
            sales: 0,
        });
        totals.mrr += entry.mrr;
        totals.tcv += entry.tcv;
        totals.sales += 1;
    }

    let grouped: Vec<MonthlyTotals> = months.into_values().collect();
    let skip = grouped.len().saturating_sub(last_n);
    grouped.into_iter().skip(skip).collect()
}

/// Entries falling inside the reporting window, both ends inclusive.
pub fn entries_in_range<'a>(entries: &'a [SaleEntry], range: &DateRange) -> Vec<&'a SaleEntry> {
    entries.iter().filter(|e| range.contains(e.date)).collect()
}

fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
