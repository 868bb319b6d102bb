//! Presenting a raffle outcome: terminal summary and JSON report file.

use rarelink_raffle::{ParticipantTotal, WinnerResult};
use rarelink_types::Submission;
use rarelink_utils::format_duration;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Everything the caller learns from one draw.
#[derive(Debug, Serialize)]
pub struct RaffleReport {
    pub result: WinnerResult,
    pub random_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beacon_commitment: Option<String>,
    /// The winner's most recent submissions, newest first.
    pub winner_history: Vec<Submission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leaderboard: Vec<ParticipantTotal>,
}

impl RaffleReport {
    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        let r = &self.result;
        println!("Winner selected for {}", r.window);
        println!("  window length:       {}", format_duration(r.window.duration()));
        println!("  wallet address:      {}", r.winning_user_id);
        if let Some(id) = &r.winning_submission_id {
            println!("  submission id:       {id}");
        }
        println!("  winning entries:     {}", r.winning_entries);
        println!(
            "  winner total:        {} ({:.2}% chance)",
            r.winning_user_total_entries,
            r.winner_probability() * 100.0
        );
        println!("  drawn slot:          {} of {}", r.winning_slot, r.total_entries);
        println!("  total submissions:   {}", r.total_submissions);
        println!("  unique participants: {}", r.unique_participants);
        println!("  random source:       {}", self.random_source);
        if let Some(commitment) = &self.beacon_commitment {
            println!("  seed commitment:     {commitment}");
        }

        if !self.winner_history.is_empty() {
            println!();
            println!("Recent submissions by winner:");
            for sub in &self.winner_history {
                let id = sub
                    .submission_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {}  {:>8}  {} props",
                    sub.timestamp.format("%Y-%m-%d %H:%M"),
                    id,
                    sub.prop_count()
                );
            }
        }

        if !self.leaderboard.is_empty() {
            println!();
            println!("Top {} participants by entries:", self.leaderboard.len());
            for (rank, p) in self.leaderboard.iter().enumerate() {
                println!(
                    "  {:2}. {} - {} entries over {} submissions",
                    rank + 1,
                    p.user_id.abbreviated(),
                    p.entries,
                    p.submissions
                );
            }
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
