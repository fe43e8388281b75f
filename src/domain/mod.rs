//! Core data types shared by the estimator, planner and renderers.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Version of the structured (JSON) layout record.
pub const LAYOUT_SCHEMA_VERSION: &str = "1.0.0";

/// Every layout ends in exactly one summarizer agent.
pub const SUMMARIZER_COUNT: usize = 1;

pub const DEFAULT_CONTEXT_WINDOW: u64 = 200_000;
pub const DEFAULT_RESERVED_FRACTION: f64 = 0.35;
pub const DEFAULT_OVERLAP_FRACTION: f64 = 0.10;
pub const DEFAULT_CHARS_PER_TOKEN_PROSE: u64 = 4;
pub const DEFAULT_CHARS_PER_TOKEN_CODE: u64 = 3;

/// Kind of corpus content, selecting the characters-per-token ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Prose,
    Code,
}

impl ContentKind {
    pub fn from_code_flag(is_code: bool) -> Self {
        if is_code {
            ContentKind::Code
        } else {
            ContentKind::Prose
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Prose => "prose",
            ContentKind::Code => "code",
        }
    }
}

/// Characters-per-token ratios used when no tokenizer is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsPerToken {
    pub prose: u64,
    pub code: u64,
}

impl Default for CharsPerToken {
    fn default() -> Self {
        Self { prose: DEFAULT_CHARS_PER_TOKEN_PROSE, code: DEFAULT_CHARS_PER_TOKEN_CODE }
    }
}

impl CharsPerToken {
    pub fn ratio_for(&self, kind: ContentKind) -> u64 {
        match kind {
            ContentKind::Prose => self.prose,
            ContentKind::Code => self.code,
        }
    }
}

/// Planner settings that used to be process-wide constants.
///
/// Loaded from defaults, an optional config file, `FANOUT_*` environment
/// variables and CLI flags (see [`crate::config`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Total token capacity of one agent invocation.
    pub context_window: u64,
    /// Fraction of the window kept for prompt, reasoning and output.
    pub reserved_fraction: f64,
    /// Fraction of each segment shared with its successor.
    pub overlap_fraction: f64,
    pub chars_per_token: CharsPerToken,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            reserved_fraction: DEFAULT_RESERVED_FRACTION,
            overlap_fraction: DEFAULT_OVERLAP_FRACTION,
            chars_per_token: CharsPerToken::default(),
        }
    }
}

impl PlannerConfig {
    pub fn profile(&self) -> AgentContextProfile {
        AgentContextProfile {
            context_window: self.context_window,
            reserved_fraction: self.reserved_fraction,
        }
    }

    pub fn parameters(
        &self,
        segments_per_worker: usize,
        reviews_per_segment: usize,
    ) -> SegmentingParameters {
        SegmentingParameters {
            segments_per_worker,
            reviews_per_segment,
            overlap_fraction: self.overlap_fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentContextProfile {
    pub context_window: u64,
    pub reserved_fraction: f64,
}

impl AgentContextProfile {
    /// Tokens left for corpus input: `floor(context_window * (1 - reserved_fraction))`.
    pub fn available_tokens(&self) -> u64 {
        (self.context_window as f64 * (1.0 - self.reserved_fraction)).floor() as u64
    }

    pub fn reserved_tokens(&self) -> u64 {
        self.context_window.saturating_sub(self.available_tokens())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentingParameters {
    pub segments_per_worker: usize,
    pub reviews_per_segment: usize,
    pub overlap_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPlan {
    /// Tokens per segment.
    pub segment_budget: u64,
    /// Tokens advanced between segment starts.
    pub stride: u64,
    /// `segment_budget - stride`
    pub overlap_tokens: u64,
    pub segment_count: usize,
}

impl SegmentPlan {
    /// Token range covered by the 1-based segment `index` of a corpus of
    /// `corpus_tokens` tokens. `None` when `index` is outside the plan.
    pub fn span(&self, index: usize, corpus_tokens: u64) -> Option<Range<u64>> {
        if index == 0 || index > self.segment_count {
            return None;
        }
        let start = (index as u64 - 1).saturating_mul(self.stride).min(corpus_tokens);
        let end = start.saturating_add(self.segment_budget).min(corpus_tokens);
        Some(start..end)
    }
}

/// One worker and the contiguous run of segments it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub name: String,
    /// 1-based segment indices, ascending and contiguous.
    pub segments: Vec<usize>,
}

impl WorkerAssignment {
    pub fn first_segment(&self) -> Option<usize> {
        self.segments.first().copied()
    }

    pub fn last_segment(&self) -> Option<usize> {
        self.segments.last().copied()
    }
}

/// Critic sizing. Count-only: critics are not mapped to concrete segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticAllocation {
    /// `segment_count * reviews_per_segment`
    pub total_assignments: usize,
    pub critic_count: usize,
    pub names: Vec<String>,
}

/// A complete fan-out layout. Built fresh by [`crate::layout::plan_layout`]
/// and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub schema_version: String,
    pub corpus_tokens: u64,
    pub profile: AgentContextProfile,
    pub available_per_agent: u64,
    pub parameters: SegmentingParameters,
    pub segments: SegmentPlan,
    pub worker_count: usize,
    pub workers: Vec<WorkerAssignment>,
    pub critics: CriticAllocation,
    pub total_agents: usize,
}

impl LayoutResult {
    pub fn critic_count(&self) -> usize {
        self.critics.critic_count
    }

    pub fn reserved_tokens(&self) -> u64 {
        self.profile.context_window.saturating_sub(self.available_per_agent)
    }

    pub fn segment_span(&self, index: usize) -> Option<Range<u64>> {
        self.segments.span(index, self.corpus_tokens)
    }

    /// Token range read by a worker: from its first segment's start to its
    /// last segment's end.
    pub fn worker_span(&self, worker: &WorkerAssignment) -> Option<Range<u64>> {
        let first = self.segment_span(worker.first_segment()?)?;
        let last = self.segment_span(worker.last_segment()?)?;
        Some(first.start..last.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_reserves_35_percent() {
        let profile = PlannerConfig::default().profile();
        assert_eq!(profile.available_tokens(), 130_000);
        assert_eq!(profile.reserved_tokens(), 70_000);
    }

    #[test]
    fn chars_per_token_selects_by_kind() {
        let ratios = CharsPerToken::default();
        assert_eq!(ratios.ratio_for(ContentKind::Prose), 4);
        assert_eq!(ratios.ratio_for(ContentKind::Code), 3);
        assert_eq!(ContentKind::from_code_flag(true), ContentKind::Code);
    }

    #[test]
    fn span_clips_last_segment_to_corpus_end() {
        let plan = SegmentPlan { segment_budget: 50, stride: 40, overlap_tokens: 10, segment_count: 3 };
        assert_eq!(plan.span(1, 120), Some(0..50));
        assert_eq!(plan.span(2, 120), Some(40..90));
        assert_eq!(plan.span(3, 120), Some(80..120));
        assert_eq!(plan.span(0, 120), None);
        assert_eq!(plan.span(4, 120), None);
    }

    #[test]
    fn span_of_empty_corpus_is_empty() {
        let plan = SegmentPlan { segment_budget: 50, stride: 45, overlap_tokens: 5, segment_count: 1 };
        assert_eq!(plan.span(1, 0), Some(0..0));
    }
}
