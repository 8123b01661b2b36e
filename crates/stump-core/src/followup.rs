use crate::types::FollowUp;

/// Deepest level any follow-up walk will visit. Forests at depth
/// `MAX_FOLLOW_UP_DEPTH` and below are not visited: nodes at depth
/// `MAX_FOLLOW_UP_DEPTH - 1` are counted but their children are ignored.
///
/// This is a safety cap against runaway authored nesting, not a content
/// rule. Legitimate trees deeper than this are silently truncated.
pub const MAX_FOLLOW_UP_DEPTH: usize = 10;

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Count every node in a follow-up forest, starting at depth 0.
pub fn count_follow_ups(follow_ups: &[FollowUp]) -> usize {
    count_follow_ups_from(follow_ups, 0)
}

/// Count every node in a follow-up forest that sits at `depth`.
pub fn count_follow_ups_from(follow_ups: &[FollowUp], depth: usize) -> usize {
    if depth >= MAX_FOLLOW_UP_DEPTH {
        return 0;
    }
    follow_ups
        .iter()
        .map(|f| 1 + count_follow_ups_from(&f.follow_ups, depth + 1))
        .sum()
}

// ---------------------------------------------------------------------------
// Flattening
// ---------------------------------------------------------------------------

/// Pre-order flattening of a follow-up forest, starting at depth 0.
pub fn flatten_follow_ups(follow_ups: &[FollowUp]) -> Vec<&FollowUp> {
    flatten_follow_ups_from(follow_ups, 0)
}

/// Pre-order flattening of a follow-up forest that sits at `depth`.
/// Applies the same ceiling as [`count_follow_ups_from`], so the two always
/// agree on length.
pub fn flatten_follow_ups_from(follow_ups: &[FollowUp], depth: usize) -> Vec<&FollowUp> {
    let mut out = Vec::new();
    collect(follow_ups, depth, &mut out);
    out
}

fn collect<'a>(follow_ups: &'a [FollowUp], depth: usize, out: &mut Vec<&'a FollowUp>) {
    if depth >= MAX_FOLLOW_UP_DEPTH {
        return;
    }
    for f in follow_ups {
        out.push(f);
        collect(&f.follow_ups, depth + 1, out);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
