use crate::output::print_json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use stump_core::{spin::SpinState, StumpError};

pub fn run(
    root: &Path,
    content: Option<&Path>,
    candidate: &str,
    times: usize,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root, content)?;
    if dataset.candidate_by_id(candidate).is_none() {
        return Err(StumpError::CandidateNotFound(candidate.to_string()).into());
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut state = SpinState::new(&dataset, candidate);
    let picks: Vec<_> = (0..times)
        .map_while(|_| state.spin_with(&mut rng))
        .collect();

    if json {
        return print_json(&picks);
    }
    if picks.is_empty() {
        println!("No talking points for {candidate}.");
        return Ok(());
    }
    for (i, tp) in picks.iter().enumerate() {
        println!("{:>3}. {}  {}", i + 1, tp.id, tp.title);
    }
    Ok(())
}
