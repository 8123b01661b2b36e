use crate::output::{print_json, print_table};
use clap::Subcommand;
use std::path::Path;
use stump_core::{followup::count_follow_ups, StumpError};

#[derive(Subcommand)]
pub enum PointsSubcommand {
    /// List a candidate's top-level talking points
    List {
        /// Candidate id
        candidate: String,
    },
    /// List every deep-link anchor across all candidates
    Anchors,
    /// Resolve an anchor id to its candidate and talking point
    Find {
        /// Anchor id (<candidate>-<talking point>)
        anchor: String,
    },
}

pub fn run(
    root: &Path,
    content: Option<&Path>,
    subcmd: PointsSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root, content)?;

    match subcmd {
        PointsSubcommand::List { candidate } => {
            if dataset.candidate_by_id(&candidate).is_none() {
                return Err(StumpError::CandidateNotFound(candidate).into());
            }
            let points = dataset.talking_points_by_candidate(&candidate);
            if json {
                return print_json(&points);
            }
            if points.is_empty() {
                println!("No talking points for {candidate}.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = points
                .iter()
                .map(|tp| {
                    vec![
                        tp.id.clone(),
                        tp.title.clone(),
                        tp.sources.len().to_string(),
                        count_follow_ups(&tp.follow_ups).to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "SOURCES", "FOLLOW-UPS"], &rows);
            Ok(())
        }

        PointsSubcommand::Anchors => {
            let entries = dataset.all_candidate_talking_points();
            if json {
                let out: Vec<_> = entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "anchorId": e.anchor_id,
                            "candidateId": e.candidate_id,
                            "title": e.talking_point.title,
                        })
                    })
                    .collect();
                return print_json(&out);
            }
            let rows: Vec<Vec<String>> = entries
                .iter()
                .map(|e| {
                    vec![
                        e.anchor_id.clone(),
                        e.candidate_name.to_string(),
                        e.talking_point.title.clone(),
                    ]
                })
                .collect();
            print_table(&["ANCHOR", "CANDIDATE", "TITLE"], &rows);
            Ok(())
        }

        PointsSubcommand::Find { anchor } => {
            let entry = dataset
                .find_candidate_talking_point(&anchor)
                .ok_or_else(|| StumpError::TalkingPointNotFound(anchor.clone()))?;
            if json {
                return print_json(&entry);
            }
            let tp = entry.talking_point;
            println!("{}: {}", entry.candidate_name, tp.title);
            println!("anchor: {}", entry.anchor_id);
            if !tp.summary.is_empty() {
                println!("\n{}", tp.summary);
            }
            if let Some(details) = tp.details.as_deref() {
                println!("\n{details}");
            }
            for s in &tp.sources {
                println!("  - {}: {}", s.label, s.url);
            }
            Ok(())
        }
    }
}
