//! fanout-layout: plan two-stage fan-out layouts for corpus analysis
//!
//! Given a corpus size in tokens and a per-agent context window, computes how
//! the corpus is cut into overlapping segments, how those segments are grouped
//! onto worker agents, and how many critic agents are needed to review them.

pub mod config;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod layout;
pub mod render;
pub mod utils;

pub use domain::{
    AgentContextProfile, CharsPerToken, ContentKind, CriticAllocation, LayoutResult,
    PlannerConfig, SegmentPlan, SegmentingParameters, WorkerAssignment,
};
pub use error::LayoutError;
pub use estimate::TokenEstimator;
pub use layout::plan_layout;
