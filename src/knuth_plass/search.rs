//! Breakpoint search.
//!
//! One left-to-right pass over the fragments. Each position right after a
//! box may end a line; every active candidate tries to reach it, and the
//! survivors are pruned back to one per key (see [`PruneStrategy`]). The
//! cheapest candidate covering the final box is then backtracked through
//! its predecessor chain.
//!
//! Candidates live in an arena and name their predecessor by index, so the
//! chain is a simple backward-pointing list that is dropped wholesale when
//! the search returns.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use super::evaluate::{self, FITNESS_MISMATCH_DEMERITS, FitnessClass, INFEASIBLE_BADNESS};
use super::fragment::Fragment;
use super::{KnuthPlassOptions, PruneStrategy};

/// A chosen line ending, as reported by [`find_breakpoints`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    /// Number of fragments consumed once this line is set.
    pub position: usize,
    /// 1-based line number ending here.
    pub line: usize,
    /// Adjustment ratio of the line ending here.
    pub ratio: f64,
    /// Fitness class of that ratio.
    pub fitness: FitnessClass,
    /// Demerits accumulated from the paragraph start through this line.
    pub demerits: f64,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    index: usize,
    demerits: f64,
    ratio: f64,
    line: usize,
    fitness: FitnessClass,
    prev: Option<usize>,
}

impl Candidate {
    const START: Self = Self {
        index: 0,
        demerits: 0.0,
        ratio: 0.0,
        line: 0,
        fitness: FitnessClass::Normal,
        prev: None,
    };
}

type PruneKey = (usize, Option<FitnessClass>);

impl PruneStrategy {
    fn key(self, candidate: &Candidate) -> PruneKey {
        match self {
            Self::LineNumber => (candidate.line, None),
            Self::LineAndFitness => (candidate.line, Some(candidate.fitness)),
        }
    }
}

/// Find the break positions of the cheapest paragraph.
///
/// Returns the strictly increasing fragment counts at which lines end,
/// excluding the implicit start at 0 and ending with the position after the
/// last box. `None` means no feasible paragraph exists under `options`, or
/// there are no boxes at all.
#[must_use]
pub fn search(fragments: &[Fragment<'_>], options: &KnuthPlassOptions) -> Option<Vec<usize>> {
    find_breakpoints(fragments, options)
        .map(|breakpoints| breakpoints.iter().map(|b| b.position).collect())
}

/// Like [`search`], reporting ratio, fitness and demerits for every line.
#[must_use]
pub fn find_breakpoints(
    fragments: &[Fragment<'_>],
    options: &KnuthPlassOptions,
) -> Option<Vec<Breakpoint>> {
    let Some(last_box) = fragments.iter().rposition(|f| !f.is_glue) else {
        debug!(fragments = fragments.len(), "no boxes to break");
        return None;
    };

    let prefix = prefix_widths(fragments);
    let mut arena = vec![Candidate::START];
    let mut active = vec![0usize];
    let mut terminal = 0..0;

    for (i, fragment) in fragments.iter().enumerate().take(last_box + 1) {
        if fragment.is_glue {
            continue;
        }

        let break_penalty = if fragment.ends_with_hyphen() {
            options.hyphen_penalty
        } else {
            fragment.penalty
        };

        let first_new = arena.len();
        for &id in &active {
            let from = arena[id];
            let line_width = prefix[i + 1] - prefix[from.index];
            let ratio = (options.max_width - line_width) / options.max_width;
            if ratio < -1.0 {
                continue;
            }

            let badness = evaluate::badness(ratio, options.tolerance);
            if badness >= INFEASIBLE_BADNESS {
                continue;
            }

            let fitness = FitnessClass::from_ratio(ratio);
            let mut demerits = evaluate::demerits(options.line_penalty, badness, break_penalty);
            if options.fitness_class && !fitness.is_compatible_with(from.fitness) {
                demerits += FITNESS_MISMATCH_DEMERITS;
            }

            arena.push(Candidate {
                index: i + 1,
                demerits: from.demerits + demerits,
                ratio,
                line: from.line + 1,
                fitness,
                prev: Some(id),
            });
        }

        let emitted = first_new..arena.len();
        if emitted.is_empty() {
            continue;
        }
        if i == last_box {
            // Pruning must not hide a paragraph ending from the final choice.
            terminal = emitted.clone();
        }

        active.extend(emitted);
        active = prune(&arena, &active, options.prune);
        trace!(position = i + 1, active = active.len(), "pruned active set");
    }

    let Some(best) = terminal.min_by(|&a, &b| arena[a].demerits.total_cmp(&arena[b].demerits))
    else {
        debug!(
            fragments = fragments.len(),
            candidates = arena.len(),
            "no feasible paragraph"
        );
        return None;
    };

    let breakpoints = backtrack(&arena, best);
    debug!(
        fragments = fragments.len(),
        candidates = arena.len(),
        lines = breakpoints.len(),
        demerits = arena[best].demerits,
        "knuth-plass search complete"
    );
    Some(breakpoints)
}

/// `prefix[k]` is the total width of the first `k` fragments.
fn prefix_widths(fragments: &[Fragment<'_>]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(fragments.len() + 1);
    let mut total = 0.0;
    prefix.push(total);
    for fragment in fragments {
        total += fragment.width;
        prefix.push(total);
    }
    prefix
}

/// Keep the cheapest candidate per key. Ties keep the earlier candidate.
fn prune(arena: &[Candidate], active: &[usize], strategy: PruneStrategy) -> Vec<usize> {
    let mut best: BTreeMap<PruneKey, usize> = BTreeMap::new();
    for &id in active {
        match best.entry(strategy.key(&arena[id])) {
            Entry::Vacant(slot) => {
                slot.insert(id);
            }
            Entry::Occupied(mut slot) => {
                if arena[id].demerits < arena[*slot.get()].demerits {
                    slot.insert(id);
                }
            }
        }
    }
    best.into_values().collect()
}

fn backtrack(arena: &[Candidate], best: usize) -> Vec<Breakpoint> {
    let mut breakpoints = Vec::with_capacity(arena[best].line);
    let mut node = Some(best);
    while let Some(id) = node {
        let candidate = arena[id];
        if candidate.index > 0 {
            breakpoints.push(Breakpoint {
                position: candidate.index,
                line: candidate.line,
                ratio: candidate.ratio,
                fitness: candidate.fitness,
                demerits: candidate.demerits,
            });
        }
        node = candidate.prev;
    }
    breakpoints.reverse();
    breakpoints
}
