//! Worker assignment and critic sizing.

use crate::domain::{CriticAllocation, WorkerAssignment};
use crate::error::{LayoutError, Result};

/// Zero-padding width for `count` ordinals: at least two digits, wider when
/// the count needs it, so every name in one list has the same length.
pub fn ordinal_width(count: usize) -> usize {
    count.to_string().len().max(2)
}

/// `W01, W02, ...` style names for `count` agents.
pub fn ordinal_names(prefix: char, count: usize) -> Vec<String> {
    let width = ordinal_width(count);
    (1..=count).map(|i| format!("{prefix}{i:0width$}")).collect()
}

/// Split segments `1..=segment_count` into consecutive runs of
/// `segments_per_worker`, one run per worker in ordinal order.
pub fn assign_workers(segment_count: usize, segments_per_worker: usize) -> Vec<WorkerAssignment> {
    let segments_per_worker = segments_per_worker.max(1);
    let worker_count = segment_count.div_ceil(segments_per_worker);

    ordinal_names('W', worker_count)
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            // `i * segments_per_worker < segment_count` for every worker index.
            let offset = i * segments_per_worker;
            let start = offset + 1;
            let end = offset.saturating_add(segments_per_worker).min(segment_count);
            WorkerAssignment { name, segments: (start..=end).collect() }
        })
        .collect()
}

/// Critics share the workers' grouping capacity: each reviews up to
/// `segments_per_worker` segment reports.
pub fn allocate_critics(
    segment_count: usize,
    reviews_per_segment: usize,
    segments_per_worker: usize,
) -> Result<CriticAllocation> {
    let total_assignments = segment_count.checked_mul(reviews_per_segment).ok_or_else(|| {
        LayoutError::InvalidInput(format!(
            "{segment_count} segments x {reviews_per_segment} reviews overflows"
        ))
    })?;
    let critic_count = total_assignments.div_ceil(segments_per_worker.max(1));

    Ok(CriticAllocation {
        total_assignments,
        critic_count,
        names: ordinal_names('C', critic_count),
    })
}
