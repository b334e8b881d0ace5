//! Exhaustive game-tree enumeration.
//!
//! Every reachable line of play from a root state is walked depth-first
//! with an explicit stack. Each child is a clone of its parent with one
//! move applied, so sibling branches never share mutable state.
//!
//! The parallel drivers expand the root once and hand each child subtree
//! to a rayon worker. Workers walk their subtree sequentially; results are
//! concatenated (or their statistics merged) once every worker is done.
//! There is no ordering guarantee between subtrees, no cancellation, and a
//! panicking worker takes the whole batch down.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, trace};

use crate::error::Result;
use crate::rules::RulesEngine;

use super::config::EnumerationConfig;
use super::stats::EnumerationStats;

/// Walk every line of play from `root`, handing each terminal state to `visit`.
///
/// A root that is already terminal is its own single terminal state.
fn walk<E, F>(root: E, stats: &mut EnumerationStats, mut visit: F) -> Result<()>
where
    E: RulesEngine,
    F: FnMut(E),
{
    if let Some(result) = root.result() {
        stats.record_terminal(result, root.depth());
        visit(root);
        return Ok(());
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        stats.nodes_expanded += 1;
        for mv in node.legal_moves() {
            let (child, result) = node.branch(&mv)?;
            match result {
                Some(result) => {
                    stats.record_terminal(result, child.depth());
                    visit(child);
                }
                None => stack.push(child),
            }
        }
        if stats.nodes_expanded % 100_000 == 0 {
            trace!(frontier = stack.len(), expanded = stats.nodes_expanded, "walking");
        }
    }
    Ok(())
}

/// Every terminal state reachable from `root`, sequentially.
pub fn enumerate_terminal<E: RulesEngine>(root: E) -> Result<Vec<E>> {
    let mut completed = Vec::new();
    let mut stats = EnumerationStats::new();
    walk(root, &mut stats, |game| completed.push(game))?;
    Ok(completed)
}

/// Statistics over every terminal state reachable from `root`, sequentially.
///
/// Keeps only counts, so trees too large to hold in memory can be walked.
pub fn summarize<E: RulesEngine>(root: E) -> Result<EnumerationStats> {
    let start = Instant::now();
    let mut stats = EnumerationStats::new();
    walk(root, &mut stats, drop)?;
    stats.time_us = start.elapsed().as_micros() as u64;
    Ok(stats)
}

/// Expand `root` one level: the children still in play, plus the statistics
/// and states of any that ended immediately.
fn split_root<E: RulesEngine>(root: E) -> Result<(Vec<E>, Vec<E>, EnumerationStats)> {
    let mut stats = EnumerationStats::new();
    if let Some(result) = root.result() {
        stats.record_terminal(result, root.depth());
        return Ok((Vec::new(), vec![root], stats));
    }

    stats.nodes_expanded += 1;
    let mut branches = Vec::new();
    let mut finished = Vec::new();
    for mv in root.legal_moves() {
        let (child, result) = root.branch(&mv)?;
        match result {
            Some(result) => {
                stats.record_terminal(result, child.depth());
                finished.push(child);
            }
            None => branches.push(child),
        }
    }
    Ok((branches, finished, stats))
}

/// Every terminal state reachable from `root`, one worker per root move.
pub fn enumerate_parallel<E>(root: E, config: &EnumerationConfig) -> Result<Vec<E>>
where
    E: RulesEngine + Send,
{
    let pool = config.thread_pool()?;
    let (branches, mut completed, _) = split_root(root)?;
    info!(branches = branches.len(), workers = pool.current_num_threads(), "enumerating");

    let per_branch: Vec<Vec<E>> = pool.install(|| {
        branches
            .into_par_iter()
            .map(enumerate_terminal)
            .collect::<Result<_>>()
    })?;

    completed.extend(per_branch.into_iter().flatten());
    info!(terminal = completed.len(), "enumeration finished");
    Ok(completed)
}

/// Statistics over every terminal state reachable from `root`, one worker
/// per root move. `time_us` is wall time.
pub fn summarize_parallel<E>(root: E, config: &EnumerationConfig) -> Result<EnumerationStats>
where
    E: RulesEngine + Send,
{
    let start = Instant::now();
    let pool = config.thread_pool()?;
    let (branches, _, mut stats) = split_root(root)?;
    info!(branches = branches.len(), workers = pool.current_num_threads(), "summarizing");

    let per_branch: Vec<EnumerationStats> = pool.install(|| {
        branches
            .into_par_iter()
            .map(summarize)
            .collect::<Result<_>>()
    })?;

    for branch in &per_branch {
        stats.merge(branch);
    }
    stats.time_us = start.elapsed().as_micros() as u64;
    info!(
        terminal = stats.terminal_games,
        expanded = stats.nodes_expanded,
        time_us = stats.time_us,
        "summary finished"
    );
    Ok(stats)
}
