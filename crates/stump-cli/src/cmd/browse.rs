use crate::output::print_json;
use serde::Serialize;
use std::path::Path;
use stump_core::{
    navigation::{NavigationNode, NavigationStack},
    types::{FollowUp, Source},
    StumpError,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrowseOutput<'a> {
    anchor_id: &'a str,
    depth: Option<usize>,
    breadcrumbs: Vec<&'a str>,
    back_to: Option<&'a str>,
    current: Option<NavigationNode<'a>>,
}

pub fn run(
    root: &Path,
    content: Option<&Path>,
    anchor: &str,
    path: &[String],
    back: usize,
    json: bool,
) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root, content)?;
    let entry = dataset
        .find_candidate_talking_point(anchor)
        .ok_or_else(|| StumpError::TalkingPointNotFound(anchor.to_string()))?;

    let mut nav = NavigationStack::new();
    nav.open_topic(entry.talking_point);

    for id in path {
        let children = nav.current_follow_ups().unwrap_or(&[]);
        let next = children.iter().find(|f| f.id == *id).ok_or_else(|| {
            anyhow::Error::new(StumpError::FollowUpNotFound(id.clone()))
                .context(format!("no follow-up '{id}' under \"{}\"", nav.current_title()))
        })?;
        nav.open_follow_up(next);
    }

    for _ in 0..back {
        if !nav.go_back() {
            break;
        }
    }

    if json {
        return print_json(&BrowseOutput {
            anchor_id: &entry.anchor_id,
            depth: nav.depth(),
            breadcrumbs: nav.breadcrumbs(),
            back_to: nav.previous_node().map(|n| n.title()),
            current: nav.current_node().copied(),
        });
    }

    println!("{}", nav.breadcrumbs().join(" > "));
    if let Some(prev) = nav.previous_node() {
        println!("(back: {})", prev.title());
    }
    println!("\n{}", nav.current_title());
    let summary = nav.current_summary();
    if !summary.is_empty() {
        println!("{summary}");
    }
    if let Some(details) = nav.current_details() {
        println!("\n{details}");
    }
    print_sources(nav.current_sources().unwrap_or(&[]));
    print_follow_ups(nav.current_follow_ups().unwrap_or(&[]));
    Ok(())
}

fn print_sources(sources: &[Source]) {
    if sources.is_empty() {
        return;
    }
    println!("\nSources:");
    for s in sources {
        println!("  - {}: {}", s.label, s.url);
    }
}

fn print_follow_ups(follow_ups: &[FollowUp]) {
    if follow_ups.is_empty() {
        return;
    }
    println!("\nFollow-ups:");
    for f in follow_ups {
        println!("  {}  {}", f.id, f.prompt);
    }
}
