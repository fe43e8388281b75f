//! Output rendering (narrative Markdown report, structured JSON)

pub mod json;
pub mod report;

pub use json::{parse_layout_json, render_layout_json};
pub use report::render_report;

/// How a computed layout is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Report,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Report
        }
    }
}
