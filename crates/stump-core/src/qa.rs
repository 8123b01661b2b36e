use crate::config::QaConfig;
use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Status / Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QaStatus {
    Ok,
    Warning,
    Critical,
}

impl QaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            QaStatus::Ok => "ok",
            QaStatus::Warning => "warning",
            QaStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for QaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QaMetric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// One dashboard figure with its health status.
#[derive(Debug, Clone, Serialize)]
pub struct QaMetric {
    pub id: &'static str,
    pub label: &'static str,
    pub value: MetricValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub status: QaStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// CandidateQaStat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateQaStat {
    pub id: String,
    pub name: String,
    pub talking_point_count: usize,
    pub missing_summary: bool,
    pub missing_headshot: bool,
    pub uses_placeholder_headshot: bool,
    pub missing_details_count: usize,
    pub missing_sources_count: usize,
}

// ---------------------------------------------------------------------------
// QaIssue / QaIssueGroups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaIssue {
    pub id: String,
    pub label: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaIssueGroups {
    pub candidates_without_talking_points: Vec<QaIssue>,
    pub talking_points_missing_details: Vec<QaIssue>,
    pub talking_points_missing_sources: Vec<QaIssue>,
    pub duplicate_talking_point_ids: Vec<QaIssue>,
    pub placeholder_headshots: Vec<QaIssue>,
}

impl QaIssueGroups {
    /// Groups with their display names, in report order.
    pub fn iter_groups(&self) -> impl Iterator<Item = (&'static str, &[QaIssue])> {
        [
            (
                "Candidates without talking points",
                self.candidates_without_talking_points.as_slice(),
            ),
            (
                "Talking points missing details",
                self.talking_points_missing_details.as_slice(),
            ),
            (
                "Talking points missing sources",
                self.talking_points_missing_sources.as_slice(),
            ),
            (
                "Duplicate talking point ids",
                self.duplicate_talking_point_ids.as_slice(),
            ),
            ("Placeholder headshots", self.placeholder_headshots.as_slice()),
        ]
        .into_iter()
    }

    pub fn total(&self) -> usize {
        self.iter_groups().map(|(_, issues)| issues.len()).sum()
    }

    pub fn critical_count(&self) -> usize {
        self.iter_groups()
            .flat_map(|(_, issues)| issues.iter())
            .filter(|i| i.severity == Severity::Critical)
            .count()
    }
}

// ---------------------------------------------------------------------------
// QaReport
// ---------------------------------------------------------------------------

/// Everything the QA dashboard shows, computed in one pass per section.
#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub metrics: Vec<QaMetric>,
    pub candidates: Vec<CandidateQaStat>,
    pub issues: QaIssueGroups,
}

impl QaReport {
    pub fn build(dataset: &Dataset, config: &QaConfig) -> Self {
        Self {
            metrics: qa_summary_metrics(dataset, config),
            candidates: candidate_qa_stats(dataset, config),
            issues: qa_issue_groups(dataset, config),
        }
    }
}

// ---------------------------------------------------------------------------
// Field tests
// ---------------------------------------------------------------------------

/// Absent, empty, or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Blank, or the URL mentions one of the known placeholder-image hosts
/// (case-insensitive).
pub fn is_placeholder_headshot(url: Option<&str>, placeholder_hosts: &[String]) -> bool {
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        return true;
    };
    let lower = url.to_lowercase();
    placeholder_hosts
        .iter()
        .filter(|h| !h.trim().is_empty())
        .any(|h| lower.contains(&h.to_lowercase()))
}

// ---------------------------------------------------------------------------
// Summary metrics
// ---------------------------------------------------------------------------

/// Format with one decimal, rounding to nearest with exact ties going up
/// (2.25 shows as "2.3"). Plain `{:.1}` sends exact ties to the even digit.
fn one_decimal(value: f64) -> String {
    // A tie at the second decimal is exactly representable only as x.25 or
    // x.75, i.e. when `value * 4` is an odd integer.
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

pub fn qa_summary_metrics(dataset: &Dataset, config: &QaConfig) -> Vec<QaMetric> {
    let candidates = dataset.all_candidates();
    let total_candidates = candidates.len();

    let mut total_talking_points = 0;
    let mut candidates_without_talking_points = 0;
    let mut talking_points_with_sources = 0;

    for c in candidates {
        total_talking_points += c.talking_points.len();
        if c.talking_points.is_empty() {
            candidates_without_talking_points += 1;
        }
        for tp in &c.talking_points {
            if !tp.sources.is_empty() {
                talking_points_with_sources += 1;
            }
        }
    }
    let total_follow_ups = dataset.count_all_follow_ups();

    let avg = if total_candidates > 0 {
        total_talking_points as f64 / total_candidates as f64
    } else {
        0.0
    };
    let avg_text = one_decimal(avg);
    // Compare the rounded figure that is displayed, not the raw ratio.
    let avg_shown: f64 = avg_text.parse().unwrap_or(0.0);

    vec![
        QaMetric {
            id: "total-candidates",
            label: "Total Candidates",
            value: MetricValue::Count(total_candidates),
            target: None,
            status: if total_candidates > 0 {
                QaStatus::Ok
            } else {
                QaStatus::Warning
            },
            description: Some("Total number of candidates in the system"),
        },
        QaMetric {
            id: "total-talking-points",
            label: "Total Talking Points",
            value: MetricValue::Count(total_talking_points),
            target: None,
            status: if total_talking_points > 0 {
                QaStatus::Ok
            } else {
                QaStatus::Warning
            },
            description: Some("Total number of talking points across all candidates"),
        },
        QaMetric {
            id: "total-follow-ups",
            label: "Total Follow-Up Questions",
            value: MetricValue::Count(total_follow_ups),
            target: None,
            status: QaStatus::Ok,
            description: Some(
                "Total number of follow-up questions across all topics (recursive count)",
            ),
        },
        QaMetric {
            id: "avg-talking-points",
            label: "Avg Talking Points",
            value: MetricValue::Text(avg_text),
            target: Some(format!("{}+ per candidate", config.min_avg_talking_points)),
            status: if avg_shown >= config.min_avg_talking_points {
                QaStatus::Ok
            } else {
                QaStatus::Warning
            },
            description: Some("Average number of talking points per candidate"),
        },
        QaMetric {
            id: "candidates-no-talking-points",
            label: "Candidates w/o Talking Points",
            value: MetricValue::Count(candidates_without_talking_points),
            target: None,
            status: if candidates_without_talking_points == 0 {
                QaStatus::Ok
            } else {
                QaStatus::Critical
            },
            description: Some("Candidates with zero talking points"),
        },
        QaMetric {
            id: "talking-points-with-sources",
            label: "Talking Points w/ Sources",
            value: MetricValue::Count(talking_points_with_sources),
            target: Some(format!("{total_talking_points} total")),
            status: if talking_points_with_sources == total_talking_points {
                QaStatus::Ok
            } else {
                QaStatus::Warning
            },
            description: Some("Number of talking points that have at least one source"),
        },
    ]
}

// ---------------------------------------------------------------------------
// Per-candidate stats
// ---------------------------------------------------------------------------

pub fn candidate_qa_stats(dataset: &Dataset, config: &QaConfig) -> Vec<CandidateQaStat> {
    dataset
        .all_candidates()
        .iter()
        .map(|c| {
            let headshot = c.headshot.as_deref();
            CandidateQaStat {
                id: c.id.clone(),
                name: c.name.clone(),
                talking_point_count: c.talking_points.len(),
                missing_summary: is_blank(c.summary.as_deref()),
                missing_headshot: is_blank(headshot),
                uses_placeholder_headshot: is_placeholder_headshot(
                    headshot,
                    &config.placeholder_hosts,
                ),
                missing_details_count: c
                    .talking_points
                    .iter()
                    .filter(|tp| is_blank(tp.details.as_deref()))
                    .count(),
                missing_sources_count: c
                    .talking_points
                    .iter()
                    .filter(|tp| tp.sources.is_empty())
                    .count(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Issue groups
// ---------------------------------------------------------------------------

pub fn qa_issue_groups(dataset: &Dataset, config: &QaConfig) -> QaIssueGroups {
    let mut groups = QaIssueGroups::default();

    // Talking point id -> names of the candidates using it, in first-seen order.
    let mut id_index: HashMap<&str, usize> = HashMap::new();
    let mut id_users: Vec<(&str, Vec<&str>)> = Vec::new();

    for c in dataset.all_candidates() {
        if c.talking_points.is_empty() {
            groups.candidates_without_talking_points.push(QaIssue {
                id: format!("no-tp-{}", c.id),
                label: c.name.clone(),
                description: format!("{} has no talking points defined", c.name),
                severity: Severity::Critical,
            });
        }

        let headshot = c.headshot.as_deref();
        if is_placeholder_headshot(headshot, &config.placeholder_hosts) {
            let shown = headshot.filter(|h| !h.is_empty()).unwrap_or("empty");
            groups.placeholder_headshots.push(QaIssue {
                id: format!("placeholder-{}", c.id),
                label: c.name.clone(),
                description: format!("{} uses a placeholder headshot ({shown})", c.name),
                severity: Severity::Warning,
            });
        }

        for tp in &c.talking_points {
            let slot = *id_index.entry(tp.id.as_str()).or_insert_with(|| {
                id_users.push((tp.id.as_str(), Vec::new()));
                id_users.len() - 1
            });
            id_users[slot].1.push(c.name.as_str());

            if is_blank(tp.details.as_deref()) {
                groups.talking_points_missing_details.push(QaIssue {
                    id: format!("missing-details-{}", tp.id),
                    label: tp.title.clone(),
                    description: format!(
                        "\"{}\" ({}) is missing details field",
                        tp.title, c.name
                    ),
                    severity: Severity::Warning,
                });
            }

            if tp.sources.is_empty() {
                groups.talking_points_missing_sources.push(QaIssue {
                    id: format!("missing-sources-{}", tp.id),
                    label: tp.title.clone(),
                    description: format!("\"{}\" ({}) has no sources", tp.title, c.name),
                    severity: Severity::Warning,
                });
            }
        }
    }

    for (tp_id, names) in id_users {
        if names.len() > 1 {
            groups.duplicate_talking_point_ids.push(QaIssue {
                id: format!("duplicate-{tp_id}"),
                label: tp_id.to_string(),
                description: format!(
                    "Talking point ID \"{tp_id}\" is used by multiple candidates: {}",
                    names.join(", ")
                ),
                severity: Severity::Critical,
            });
        }
    }

    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> QaConfig {
        QaConfig::default()
    }

    fn metric<'m>(metrics: &'m [QaMetric], id: &str) -> &'m QaMetric {
        metrics.iter().find(|m| m.id == id).unwrap()
    }

    fn sourced_point(id: &str) -> String {
        format!(
            r#"{{"id": "{id}", "title": "{id} title", "summary": "s", "details": "d",
                "sources": [{{"label": "ref", "url": "https://example.org/{id}"}}]}}"#
        )
    }

    fn healthy_dataset() -> Dataset {
        let points = [sourced_point("a"), sourced_point("b"), sourced_point("c")].join(",");
        Dataset::from_json_str(&format!(
            r#"{{"candidates": [{{"id": "jane-doe", "name": "Jane Doe",
                "headshot": "https://example.org/jane.jpg", "summary": "Bio",
                "talkingPoints": [{points}]}}]}}"#
        ))
        .unwrap()
    }

    /// One candidate per entry, each with that many sourced talking points.
    fn dataset_with_counts(counts: &[usize]) -> Dataset {
        let candidates: Vec<String> = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let points: Vec<String> =
                    (0..n).map(|j| sourced_point(&format!("c{i}-{j}"))).collect();
                format!(
                    r#"{{"id": "c{i}", "name": "C{i}", "talkingPoints": [{}]}}"#,
                    points.join(",")
                )
            })
            .collect();
        Dataset::from_json_str(&format!(r#"{{"candidates": [{}]}}"#, candidates.join(","))).unwrap()
    }

    #[test]
    fn one_decimal_rounds_ties_up() {
        assert_eq!(one_decimal(2.25), "2.3");
        assert_eq!(one_decimal(0.75), "0.8");
        assert_eq!(one_decimal(2.5), "2.5");
        assert_eq!(one_decimal(1.0 / 3.0), "0.3");
        // 23 / 20 is stored just below 1.15, so it is not a tie.
        assert_eq!(one_decimal(23.0 / 20.0), "1.1");
    }

    #[test]
    fn average_of_nine_over_four_shows_two_point_three() {
        let ds = dataset_with_counts(&[3, 2, 2, 2]);
        let cfg = QaConfig {
            min_avg_talking_points: 2.3,
            ..QaConfig::default()
        };
        let metrics = qa_summary_metrics(&ds, &cfg);
        let avg = metric(&metrics, "avg-talking-points");
        assert_eq!(avg.value, MetricValue::Text("2.3".to_string()));
        assert_eq!(avg.status, QaStatus::Ok);
    }

    #[test]
    fn blank_and_placeholder_helpers() {
        let hosts = config().placeholder_hosts;
        assert!(is_blank(None));
        assert!(is_blank(Some("   \t")));
        assert!(!is_blank(Some(" x ")));

        assert!(is_placeholder_headshot(None, &hosts));
        assert!(is_placeholder_headshot(Some(" "), &hosts));
        assert!(is_placeholder_headshot(
            Some("https://VIA.PLACEHOLDER.COM/150"),
            &hosts
        ));
        assert!(!is_placeholder_headshot(
            Some("https://example.org/a.jpg"),
            &hosts
        ));
    }

    #[test]
    fn empty_dataset_metrics() {
        let metrics = qa_summary_metrics(&Dataset::default(), &config());
        let avg = metric(&metrics, "avg-talking-points");
        assert_eq!(avg.value, MetricValue::Text("0.0".to_string()));
        assert_eq!(avg.status, QaStatus::Warning);

        let total = metric(&metrics, "total-candidates");
        assert_eq!(total.value, MetricValue::Count(0));
        assert_eq!(total.status, QaStatus::Warning);

        assert_eq!(metric(&metrics, "total-talking-points").status, QaStatus::Warning);
        assert_eq!(
            metric(&metrics, "candidates-no-talking-points").status,
            QaStatus::Ok
        );
        // 0 of 0 sourced counts as all sourced.
        assert_eq!(
            metric(&metrics, "talking-points-with-sources").status,
            QaStatus::Ok
        );
    }

    #[test]
    fn healthy_dataset_is_all_ok() {
        let metrics = qa_summary_metrics(&healthy_dataset(), &config());
        assert_eq!(metrics.len(), 6);
        for m in &metrics {
            assert_eq!(m.status, QaStatus::Ok, "metric {} not ok", m.id);
        }
        assert_eq!(
            metric(&metrics, "avg-talking-points").value,
            MetricValue::Text("3.0".to_string())
        );
        assert_eq!(
            metric(&metrics, "talking-points-with-sources").target.as_deref(),
            Some("3 total")
        );
    }

    #[test]
    fn metric_statuses_flag_gaps() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [
                {"id": "a", "name": "A", "talkingPoints": [
                    {"id": "x", "title": "X", "followUps": [
                        {"id": "f", "prompt": "F?", "followUps": [{"id": "g", "prompt": "G?"}]}
                    ]},
                    {"id": "y", "title": "Y", "sources": [{"label": "l", "url": "u"}]}
                ]},
                {"id": "b", "name": "B"}
            ]}"#,
        )
        .unwrap();
        let metrics = qa_summary_metrics(&ds, &config());
        assert_eq!(
            metric(&metrics, "avg-talking-points").value,
            MetricValue::Text("1.0".to_string())
        );
        assert_eq!(metric(&metrics, "avg-talking-points").status, QaStatus::Warning);
        assert_eq!(
            metric(&metrics, "candidates-no-talking-points").status,
            QaStatus::Critical
        );
        assert_eq!(
            metric(&metrics, "talking-points-with-sources").value,
            MetricValue::Count(1)
        );
        assert_eq!(
            metric(&metrics, "talking-points-with-sources").status,
            QaStatus::Warning
        );
        assert_eq!(
            metric(&metrics, "total-follow-ups").value,
            MetricValue::Count(2)
        );
    }

    #[test]
    fn placeholder_headshot_is_not_missing() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [{"id": "p", "name": "P", "summary": " ",
                "headshot": "https://via.placeholder.com/150"}]}"#,
        )
        .unwrap();
        let stats = candidate_qa_stats(&ds, &config());
        assert!(stats[0].uses_placeholder_headshot);
        assert!(!stats[0].missing_headshot);
        assert!(stats[0].missing_summary);
    }

    #[test]
    fn per_candidate_counts() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [{"id": "a", "name": "A", "talkingPoints": [
                {"id": "x", "details": "  "},
                {"id": "y", "details": "full", "sources": [{"label": "l", "url": "u"}]},
                {"id": "z"}
            ]}]}"#,
        )
        .unwrap();
        let stat = &candidate_qa_stats(&ds, &config())[0];
        assert_eq!(stat.talking_point_count, 3);
        assert_eq!(stat.missing_details_count, 2);
        assert_eq!(stat.missing_sources_count, 2);
        assert!(stat.missing_headshot);
        assert!(stat.uses_placeholder_headshot);
    }

    #[test]
    fn duplicate_ids_reported_once_with_both_names() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [
                {"id": "a", "name": "Alice", "talkingPoints": [{"id": "budget", "title": "Budget"}]},
                {"id": "b", "name": "Bob", "talkingPoints": [{"id": "budget", "title": "Budget"},
                                                             {"id": "parks", "title": "Parks"}]}
            ]}"#,
        )
        .unwrap();
        let groups = qa_issue_groups(&ds, &config());
        assert_eq!(groups.duplicate_talking_point_ids.len(), 1);
        let issue = &groups.duplicate_talking_point_ids[0];
        assert_eq!(issue.id, "duplicate-budget");
        assert_eq!(issue.label, "budget");
        assert_eq!(issue.severity, Severity::Critical);
        assert!(issue.description.contains("Alice, Bob"));
    }

    #[test]
    fn shared_talking_point_id_yields_shared_issue_ids() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [
                {"id": "a", "name": "Alice", "talkingPoints": [{"id": "budget", "title": "Budget"}]},
                {"id": "b", "name": "Bob", "talkingPoints": [{"id": "budget", "title": "Budget"}]}
            ]}"#,
        )
        .unwrap();
        let groups = qa_issue_groups(&ds, &config());
        let ids: Vec<&str> = groups
            .talking_points_missing_details
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["missing-details-budget", "missing-details-budget"]);
        assert!(groups.talking_points_missing_details[0].description.contains("Alice"));
        assert!(groups.talking_points_missing_details[1].description.contains("Bob"));
        assert_eq!(groups.duplicate_talking_point_ids.len(), 1);
    }

    #[test]
    fn issue_groups_name_offenders() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [
                {"id": "a", "name": "Alice"},
                {"id": "b", "name": "Bob", "headshot": "https://example.org/bob.jpg",
                 "talkingPoints": [{"id": "tax", "title": "Taxes"}]}
            ]}"#,
        )
        .unwrap();
        let groups = qa_issue_groups(&ds, &config());

        assert_eq!(groups.candidates_without_talking_points.len(), 1);
        assert_eq!(groups.candidates_without_talking_points[0].id, "no-tp-a");
        assert_eq!(
            groups.candidates_without_talking_points[0].description,
            "Alice has no talking points defined"
        );

        assert_eq!(groups.placeholder_headshots.len(), 1);
        assert_eq!(
            groups.placeholder_headshots[0].description,
            "Alice uses a placeholder headshot (empty)"
        );

        assert_eq!(groups.talking_points_missing_details[0].id, "missing-details-tax");
        assert_eq!(
            groups.talking_points_missing_details[0].description,
            "\"Taxes\" (Bob) is missing details field"
        );
        assert_eq!(groups.talking_points_missing_sources[0].id, "missing-sources-tax");

        assert!(groups.duplicate_talking_point_ids.is_empty());
        assert_eq!(groups.total(), 4);
        assert_eq!(groups.critical_count(), 1);
    }

    #[test]
    fn custom_placeholder_hosts() {
        let ds = Dataset::from_json_str(
            r#"{"candidates": [{"id": "a", "name": "A",
                "headshot": "https://cdn.example.org/default-avatar.png"}]}"#,
        )
        .unwrap();
        assert!(qa_issue_groups(&ds, &config()).placeholder_headshots.is_empty());

        let custom = QaConfig {
            placeholder_hosts: vec!["default-avatar".to_string()],
            ..QaConfig::default()
        };
        assert_eq!(qa_issue_groups(&ds, &custom).placeholder_headshots.len(), 1);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = QaReport::build(&healthy_dataset(), &config());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["metrics"][0]["id"], "total-candidates");
        assert_eq!(json["metrics"][0]["value"], 1);
        assert_eq!(json["metrics"][3]["value"], "3.0");
        assert_eq!(json["candidates"][0]["talkingPointCount"], 3);
        assert!(json["issues"]["duplicateTalkingPointIds"].is_array());
    }
}
