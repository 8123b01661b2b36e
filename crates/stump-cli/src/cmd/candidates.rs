use crate::output::{print_json, print_table};
use clap::Subcommand;
use std::path::Path;
use stump_core::{followup::count_follow_ups, StumpError};

#[derive(Subcommand)]
pub enum CandidatesSubcommand {
    /// List all candidates in document order
    List,
    /// Show one candidate and its talking points
    Show {
        /// Candidate id
        id: String,
    },
}

pub fn run(
    root: &Path,
    content: Option<&Path>,
    subcmd: CandidatesSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root, content)?;

    match subcmd {
        CandidatesSubcommand::List => {
            let candidates = dataset.all_candidates();
            if json {
                return print_json(&candidates);
            }
            if candidates.is_empty() {
                println!("No candidates.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = candidates
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.party.clone(),
                        c.talking_points.len().to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "PARTY", "POINTS"], &rows);
            println!("\n{} candidate(s)", dataset.candidate_count());
            Ok(())
        }

        CandidatesSubcommand::Show { id } => {
            let candidate = dataset
                .candidate_by_id(&id)
                .ok_or_else(|| StumpError::CandidateNotFound(id.clone()))?;
            if json {
                return print_json(candidate);
            }

            println!("{} ({})", candidate.name, candidate.party);
            println!("id: {}", candidate.id);
            if let Some(headshot) = candidate.headshot.as_deref() {
                println!("headshot: {headshot}");
            }
            if let Some(summary) = candidate.summary.as_deref() {
                println!("\n{summary}");
            }
            if !candidate.issues.is_empty() {
                println!("\nIssues: {}", candidate.issues.join(", "));
            }

            if candidate.talking_points.is_empty() {
                println!("\nNo talking points.");
            } else {
                println!("\nTalking points:");
                for tp in &candidate.talking_points {
                    let follow_ups = count_follow_ups(&tp.follow_ups);
                    if follow_ups > 0 {
                        println!("  {}  {} ({follow_ups} follow-ups)", tp.id, tp.title);
                    } else {
                        println!("  {}  {}", tp.id, tp.title);
                    }
                }
            }
            Ok(())
        }
    }
}
