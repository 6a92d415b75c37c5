//! Constants shared by the classifier and the report writers.

/// File name used when no `--output` is given
pub const DEFAULT_OUTPUT_FILE: &str = "yaml_comparison_results.csv";

/// CSV header, in column order
pub const REPORT_HEADERS: [&str; 7] = [
    "TYPE",
    "API",
    "SECTION",
    "PATH",
    "OLD VALUE",
    "NEW VALUE",
    "REMARKS",
];

// Top-level sections whose paths carry extra structure.
// Flow paths resolve their API through the left document; example and
// attribute paths take it from the fourth path group.
pub const FLOWS_SECTION: &str = "x-flows";
pub const EXAMPLES_SECTION: &str = "x-examples";
pub const ATTRIBUTES_SECTION: &str = "x-attributes";

pub const FLOW_STEPS_FIELD: &str = "steps";
pub const STEP_API_FIELD: &str = "api";

/// Maximum characters shown per value in the terminal summary
pub const DEFAULT_PREVIEW_LENGTH: usize = 60;
