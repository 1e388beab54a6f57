//! Edge selection among valid candidates.

use super::types::{Candidate, EdgePolicy};

/// Index of the candidate to melt under `policy`; `None` for an empty list.
///
/// Ties go to the earliest candidate in generation order.
pub fn pick(policy: EdgePolicy, cands: &[Candidate]) -> Option<usize> {
    match policy {
        EdgePolicy::Long => first_extremum(cands, |c| -c.length),
        EdgePolicy::Round => first_extremum(cands, |c| c.error),
        EdgePolicy::Acute => first_extremum(cands, Candidate::min_angle_before),
    }
}

fn first_extremum<F>(cands: &[Candidate], score: F) -> Option<usize>
where
    F: Fn(&Candidate) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in cands.iter().enumerate() {
        let s = score(c);
        let better = match best {
            None => true,
            Some((_, b)) => s < b,
        };
        if better {
            best = Some((i, s));
        }
    }
    best.map(|(i, _)| i)
}
