//! Structured JSON rendering of a layout.

use crate::domain::LayoutResult;
use anyhow::{Context, Result};

/// Pretty-printed JSON carrying every field of `layout`.
pub fn render_layout_json(layout: &LayoutResult) -> Result<String> {
    serde_json::to_string_pretty(layout).context("Failed to serialize layout")
}

/// Decode a layout previously written by [`render_layout_json`].
pub fn parse_layout_json(content: &str) -> Result<LayoutResult> {
    serde_json::from_str(content).context("Invalid layout JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgentContextProfile, SegmentingParameters};
    use crate::layout::plan_layout;
    use serde_json::{json, Value};

    fn sample_layout() -> LayoutResult {
        plan_layout(
            200_000,
            &SegmentingParameters { segments_per_worker: 3, reviews_per_segment: 2, overlap_fraction: 0.1 },
            &AgentContextProfile { context_window: 200_000, reserved_fraction: 0.35 },
        )
        .expect("layout")
    }

    #[test]
    fn json_round_trips_every_field() {
        let layout = sample_layout();
        let rendered = render_layout_json(&layout).expect("render");
        let parsed = parse_layout_json(&rendered).expect("parse");
        assert_eq!(parsed, layout);
    }

    #[test]
    fn json_uses_named_fields() {
        let rendered = render_layout_json(&sample_layout()).expect("render");
        let v: Value = serde_json::from_str(&rendered).expect("json");

        assert_eq!(v["schema_version"], json!("1.0.0"));
        assert_eq!(v["corpus_tokens"], json!(200_000));
        assert_eq!(v["available_per_agent"], json!(130_000));
        assert_eq!(v["profile"]["reserved_fraction"], json!(0.35));
        assert_eq!(v["parameters"]["segments_per_worker"], json!(3));
        assert_eq!(v["segments"]["segment_budget"], json!(43_333));
        assert_eq!(v["segments"]["segment_count"], json!(6));
        assert_eq!(v["workers"][1], json!({"name": "W02", "segments": [4, 5, 6]}));
        assert_eq!(v["critics"]["names"], json!(["C01", "C02", "C03", "C04"]));
        assert_eq!(v["total_agents"], json!(7));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_layout_json("{\"corpus_tokens\": 1}").is_err());
    }
}
