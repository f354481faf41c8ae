//! Plain-text rendering of rank vectors.

use std::io::Write;

use crate::error::Result;
use crate::pagerank::PageRankResult;

/// Write one `pr(node<i>) = <value>` line per node
pub fn write_ranks<W: Write>(writer: &mut W, scores: &[f64]) -> Result<()> {
    for (i, score) in scores.iter().enumerate() {
        writeln!(writer, "pr(node{}) = {}", i, score)?;
    }
    Ok(())
}

/// Render the same lines as [`write_ranks`] into a string
pub fn format_ranks(scores: &[f64]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| format!("pr(node{}) = {}\n", i, score))
        .collect()
}

/// Write the `k` highest-ranked nodes as `p[<i>] = <value>`, then the solve
/// time as `time = <seconds>`
pub fn write_top_k<W: Write>(writer: &mut W, result: &PageRankResult, k: usize) -> Result<()> {
    for (node, score) in result.top_n(k) {
        writeln!(writer, "p[{}] = {}", node, score)?;
    }
    writeln!(writer, "time = {}", result.elapsed.as_secs_f64())?;
    Ok(())
}
