//! Fan-out layout planning
//!
//! Turns a corpus token count and a per-agent context budget into a segment
//! plan, contiguous worker assignments and a critic count. Rounding is
//! explicit throughout: budgets and strides are floored, counts are ceiled.

use crate::domain::{
    AgentContextProfile, LayoutResult, SegmentPlan, SegmentingParameters, LAYOUT_SCHEMA_VERSION,
    SUMMARIZER_COUNT,
};
use crate::error::{LayoutError, Result};

pub mod assign;

pub use assign::{allocate_critics, assign_workers, ordinal_names, ordinal_width};

/// Largest segment count a layout may materialize. Every segment is listed in
/// a worker assignment, so larger plans are rejected as [`LayoutError::InvalidInput`].
pub const MAX_SEGMENTS: usize = 1_000_000;

/// Compute the full fan-out layout for `corpus_tokens` tokens.
///
/// Pure and deterministic: identical inputs always give identical output.
pub fn plan_layout(
    corpus_tokens: u64,
    params: &SegmentingParameters,
    profile: &AgentContextProfile,
) -> Result<LayoutResult> {
    validate(params, profile)?;

    let available = profile.available_tokens();
    let segments = plan_segments(corpus_tokens, available, params)?;

    let workers = assign_workers(segments.segment_count, params.segments_per_worker);
    let critics = allocate_critics(
        segments.segment_count,
        params.reviews_per_segment,
        params.segments_per_worker,
    )?;
    let worker_count = workers.len();
    let total_agents = worker_count + critics.critic_count + SUMMARIZER_COUNT;

    tracing::debug!(
        "Planned {} segments for {} tokens: {} workers, {} critics",
        segments.segment_count,
        corpus_tokens,
        worker_count,
        critics.critic_count
    );

    Ok(LayoutResult {
        schema_version: LAYOUT_SCHEMA_VERSION.to_string(),
        corpus_tokens,
        profile: *profile,
        available_per_agent: available,
        parameters: *params,
        segments,
        worker_count,
        workers,
        critics,
        total_agents,
    })
}

/// Size segments so that `segments_per_worker` of them fit in `available`
/// tokens, then count how many strides it takes to cover the corpus.
fn plan_segments(
    corpus_tokens: u64,
    available: u64,
    params: &SegmentingParameters,
) -> Result<SegmentPlan> {
    let segment_budget = available / params.segments_per_worker as u64;
    if segment_budget == 0 {
        return Err(LayoutError::BudgetTooSmall {
            available,
            segments_per_worker: params.segments_per_worker,
        });
    }

    let raw_stride = (segment_budget as f64 * (1.0 - params.overlap_fraction)).floor() as u64;
    if raw_stride == 0 {
        // Keeps the segment count finite for one-token budgets.
        tracing::debug!(
            "Stride for {}-token segments rounds to 0 at overlap {}; using 1",
            segment_budget,
            params.overlap_fraction
        );
    }
    let stride = raw_stride.clamp(1, segment_budget);

    let segment_count = if corpus_tokens <= segment_budget {
        1
    } else {
        let strides = (corpus_tokens - segment_budget).div_ceil(stride);
        usize::try_from(strides).ok().and_then(|n| n.checked_add(1)).ok_or_else(|| {
            LayoutError::InvalidInput(format!(
                "corpus of {corpus_tokens} tokens needs more segments than can be addressed"
            ))
        })?
    };
    if segment_count > MAX_SEGMENTS {
        return Err(LayoutError::InvalidInput(format!(
            "corpus of {corpus_tokens} tokens needs {segment_count} segments of {segment_budget} \
             tokens, more than the limit of {MAX_SEGMENTS}"
        )));
    }

    Ok(SegmentPlan {
        segment_budget,
        stride,
        overlap_tokens: segment_budget - stride,
        segment_count,
    })
}

fn validate(params: &SegmentingParameters, profile: &AgentContextProfile) -> Result<()> {
    if params.segments_per_worker == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "segments_per_worker must be at least 1".to_string(),
        ));
    }
    if params.reviews_per_segment == 0 {
        return Err(LayoutError::InvalidConfiguration(
            "reviews_per_segment must be at least 1".to_string(),
        ));
    }
    check_fraction("overlap_fraction", params.overlap_fraction)?;
    check_fraction("reserved_fraction", profile.reserved_fraction)?;
    Ok(())
}

fn check_fraction(name: &str, value: f64) -> Result<()> {
    // NaN fails the range check too.
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(LayoutError::InvalidConfiguration(format!("{name} must be in [0, 1), got {value}")))
    }
}
