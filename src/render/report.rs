//! Human-readable layout report.

use crate::domain::{LayoutResult, SUMMARIZER_COUNT};
use crate::layout::ordinal_width;
use crate::utils::{format_percent, format_with_commas};

/// Markdown report covering sizing, agent context, worker assignments and agent totals.
pub fn render_report(layout: &LayoutResult) -> String {
    let segments = &layout.segments;
    let overlap_share = segments.overlap_tokens as f64 / segments.segment_budget as f64;
    let reserved = layout.profile.reserved_fraction;

    let mut lines = vec![
        "# Fan-Out Layout Report".to_string(),
        String::new(),
        "## Corpus".to_string(),
        format!("- Total tokens: {}", format_with_commas(layout.corpus_tokens)),
        format!("- Segment budget: {} tokens each", format_with_commas(segments.segment_budget)),
        format!("- Stride: {} tokens", format_with_commas(segments.stride)),
        format!(
            "- Overlap: {} tokens ({})",
            format_with_commas(segments.overlap_tokens),
            format_percent(overlap_share)
        ),
        format!("- Total segments: {}", segments.segment_count),
        String::new(),
        "## Workers".to_string(),
        format!("- Segments per worker: {}", layout.parameters.segments_per_worker),
        format!("- Total workers: {}", layout.worker_count),
        format!("- Names: {}", join_names(layout.workers.iter().map(|w| w.name.as_str()))),
        String::new(),
        "## Critics".to_string(),
        format!("- Reviews per segment: {}", layout.parameters.reviews_per_segment),
        format!("- Total critic assignments: {}", layout.critics.total_assignments),
        format!("- Total critics: {}", layout.critics.critic_count),
        format!("- Names: {}", join_names(layout.critics.names.iter().map(String::as_str))),
        String::new(),
        "## Agent Context".to_string(),
        format!("- Context window: {} tokens", format_with_commas(layout.profile.context_window)),
        format!(
            "- Available for input: {} tokens ({})",
            format_with_commas(layout.available_per_agent),
            format_percent(1.0 - reserved)
        ),
        format!(
            "- Reserved for prompt/output: {} tokens ({})",
            format_with_commas(layout.reserved_tokens()),
            format_percent(reserved)
        ),
        String::new(),
        "## Worker Assignments".to_string(),
    ];

    let width = ordinal_width(segments.segment_count);
    for worker in &layout.workers {
        let names = worker
            .segments
            .iter()
            .map(|s| format!("S{s:0width$}"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut line = format!("- {}: [{}]", worker.name, names);
        if let Some(span) = layout.worker_span(worker) {
            line.push_str(&format!(
                " (tokens {}..{})",
                format_with_commas(span.start),
                format_with_commas(span.end)
            ));
        }
        lines.push(line);
    }

    lines.extend([
        String::new(),
        "## Total Agents".to_string(),
        format!("- Workers: {}", layout.worker_count),
        format!("- Critics: {}", layout.critics.critic_count),
        format!("- Summarizer: {}", SUMMARIZER_COUNT),
        format!("- **Total: {}**", layout.total_agents),
    ]);

    lines.join("\n")
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::render_report;
    use crate::domain::{AgentContextProfile, SegmentingParameters};
    use crate::layout::plan_layout;

    #[test]
    fn report_for_default_budget() {
        let layout = plan_layout(
            200_000,
            &SegmentingParameters { segments_per_worker: 3, reviews_per_segment: 2, overlap_fraction: 0.1 },
            &AgentContextProfile { context_window: 200_000, reserved_fraction: 0.35 },
        )
        .expect("layout");

        let expected = "\
# Fan-Out Layout Report

## Corpus
- Total tokens: 200,000
- Segment budget: 43,333 tokens each
- Stride: 38,999 tokens
- Overlap: 4,334 tokens (10%)
- Total segments: 6

## Workers
- Segments per worker: 3
- Total workers: 2
- Names: W01, W02

## Critics
- Reviews per segment: 2
- Total critic assignments: 12
- Total critics: 4
- Names: C01, C02, C03, C04

## Agent Context
- Context window: 200,000 tokens
- Available for input: 130,000 tokens (65%)
- Reserved for prompt/output: 70,000 tokens (35%)

## Worker Assignments
- W01: [S01, S02, S03] (tokens 0..121,331)
- W02: [S04, S05, S06] (tokens 116,997..200,000)

## Total Agents
- Workers: 2
- Critics: 4
- Summarizer: 1
- **Total: 7**";

        similar_asserts::assert_eq!(render_report(&layout), expected);
    }

    #[test]
    fn report_uses_actual_reserved_fraction() {
        let layout = plan_layout(
            10_000,
            &SegmentingParameters { segments_per_worker: 2, reviews_per_segment: 1, overlap_fraction: 0.0 },
            &AgentContextProfile { context_window: 100_000, reserved_fraction: 0.2 },
        )
        .expect("layout");

        let report = render_report(&layout);
        assert!(report.contains("- Available for input: 80,000 tokens (80%)"));
        assert!(report.contains("- Reserved for prompt/output: 20,000 tokens (20%)"));
        assert!(report.contains("- Overlap: 0 tokens (0%)"));
        assert!(report.contains("- W01: [S01] (tokens 0..10,000)"));
    }
}
