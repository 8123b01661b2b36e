use crate::output::{print_json, print_table, yes_no};
use clap::Subcommand;
use std::path::Path;
use stump_core::qa::{
    candidate_qa_stats, qa_issue_groups, qa_summary_metrics, CandidateQaStat, QaIssueGroups,
    QaMetric, QaReport,
};

#[derive(Subcommand)]
pub enum QaSubcommand {
    /// Dataset-wide metrics with ok/warning/critical status
    Summary,
    /// Per-candidate field coverage
    Candidates,
    /// Grouped content issues
    Issues,
    /// Metrics, candidate coverage and issues together
    Report,
    /// Exit non-zero when any critical issue exists (for CI)
    Check,
}

pub fn run(
    root: &Path,
    content: Option<&Path>,
    subcmd: QaSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let (config, dataset) = super::load(root, content)?;
    let qa = &config.qa;

    match subcmd {
        QaSubcommand::Summary => {
            let metrics = qa_summary_metrics(&dataset, qa);
            if json {
                return print_json(&metrics);
            }
            print_metrics(&metrics);
            Ok(())
        }
        QaSubcommand::Candidates => {
            let stats = candidate_qa_stats(&dataset, qa);
            if json {
                return print_json(&stats);
            }
            print_candidate_stats(&stats);
            Ok(())
        }
        QaSubcommand::Issues => {
            let groups = qa_issue_groups(&dataset, qa);
            if json {
                return print_json(&groups);
            }
            print_issue_groups(&groups);
            Ok(())
        }
        QaSubcommand::Report => {
            let report = QaReport::build(&dataset, qa);
            if json {
                return print_json(&report);
            }
            println!("== Summary");
            print_metrics(&report.metrics);
            println!("\n== Candidates");
            print_candidate_stats(&report.candidates);
            println!("\n== Issues");
            print_issue_groups(&report.issues);
            Ok(())
        }
        QaSubcommand::Check => check(&qa_issue_groups(&dataset, qa), json),
    }
}

fn check(groups: &QaIssueGroups, json: bool) -> anyhow::Result<()> {
    let total = groups.total();
    let critical = groups.critical_count();

    if json {
        print_json(&serde_json::json!({
            "total": total,
            "critical": critical,
            "warnings": total - critical,
            "ok": critical == 0,
        }))?;
    } else if total == 0 {
        println!("No content issues.");
    } else {
        println!("{total} issue(s), {critical} critical");
        for (name, issues) in groups.iter_groups() {
            if !issues.is_empty() {
                println!("  {name}: {}", issues.len());
            }
        }
    }

    if critical > 0 {
        anyhow::bail!("{critical} critical content issue(s)");
    }
    Ok(())
}

fn print_metrics(metrics: &[QaMetric]) {
    let rows: Vec<Vec<String>> = metrics
        .iter()
        .map(|m| {
            vec![
                m.label.to_string(),
                m.value.to_string(),
                m.target.clone().unwrap_or_default(),
                m.status.to_string(),
            ]
        })
        .collect();
    print_table(&["METRIC", "VALUE", "TARGET", "STATUS"], &rows);
}

fn print_candidate_stats(stats: &[CandidateQaStat]) {
    if stats.is_empty() {
        println!("No candidates.");
        return;
    }
    let rows: Vec<Vec<String>> = stats
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.talking_point_count.to_string(),
                yes_no(s.missing_summary).to_string(),
                yes_no(s.missing_headshot).to_string(),
                yes_no(s.uses_placeholder_headshot).to_string(),
                s.missing_details_count.to_string(),
                s.missing_sources_count.to_string(),
            ]
        })
        .collect();
    print_table(
        &[
            "CANDIDATE",
            "POINTS",
            "NO SUMMARY",
            "NO HEADSHOT",
            "PLACEHOLDER",
            "NO DETAILS",
            "NO SOURCES",
        ],
        &rows,
    );
}

fn print_issue_groups(groups: &QaIssueGroups) {
    if groups.total() == 0 {
        println!("No content issues.");
        return;
    }
    for (name, issues) in groups.iter_groups() {
        if issues.is_empty() {
            continue;
        }
        println!("\n{name} ({})", issues.len());
        for issue in issues {
            println!("  [{}] {}", issue.severity, issue.description);
        }
    }
}
