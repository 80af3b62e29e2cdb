//! Rendering of run outcomes for stdout.
//!
//! Both renderers are pure: the caller supplies the outcome and, for JSON,
//! the completion timestamp.

use std::fmt::Display;

use nodes::or_dash;
use pipeline::{Timestamp, WorkflowError, WorkflowState};
use serde::Serialize;

/// Outcome of one engine run.
pub type RunOutcome = Result<WorkflowState, WorkflowError>;

const TRACE_HEADER: &str = "=== Procurement Workflow Trace ===";
const OUTCOME_HEADER: &str = "=== Final Outcome ===";
const FAILURE_HEADER: &str = "=== Run Failed ===";

/// Renders the trace followed by either the final outcome or the failure.
pub fn render_text(outcome: &RunOutcome) -> String {
    let logs = match outcome {
        Ok(state) => state.logs(),
        Err(err) => err.logs(),
    };

    let mut out = String::new();
    out.push_str(TRACE_HEADER);
    out.push('\n');
    for entry in logs {
        out.push_str("- ");
        out.push_str(entry);
        out.push('\n');
    }
    out.push('\n');

    match outcome {
        Ok(state) => {
            out.push_str(OUTCOME_HEADER);
            out.push('\n');
            push_line(&mut out, "Item", or_dash(state.item()));
            push_line(&mut out, "Quantity", or_dash(state.quantity()));
            push_line(&mut out, "Supplier", or_dash(state.supplier()));
            push_line(&mut out, "Approved", or_dash(state.approved()));
            push_line(&mut out, "Reason", or_dash(state.reason()));
        }
        Err(err) => {
            out.push_str(FAILURE_HEADER);
            out.push('\n');
            push_line(&mut out, "Stage", err.stage());
            push_line(&mut out, "Cause", err.cause());
        }
    }
    out
}

/// Renders one run as a single-line JSON document.
pub fn render_json(
    request: &str,
    outcome: &RunOutcome,
    completed_at: Timestamp,
) -> serde_json::Result<String> {
    let report = match outcome {
        Ok(state) => RunReport {
            request,
            status: RunStatus::Completed,
            logs: state.logs(),
            state: Some(StateSummary::from(state)),
            error: None,
            completed_at,
        },
        Err(err) => RunReport {
            request,
            status: RunStatus::Failed,
            logs: err.logs(),
            state: None,
            error: Some(ErrorSummary {
                stage: err.stage(),
                cause: err.cause(),
            }),
            completed_at,
        },
    };
    serde_json::to_string(&report)
}

fn push_line(out: &mut String, label: &str, value: impl Display) {
    out.push_str(&format!("{label}: {value}\n"));
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum RunStatus {
    Completed,
    Failed,
}

#[derive(Debug, Serialize)]
struct StateSummary<'a> {
    item: Option<&'a str>,
    quantity: Option<u32>,
    supplier: Option<&'a str>,
    approved: Option<bool>,
    reason: Option<&'a str>,
}

impl<'a> From<&'a WorkflowState> for StateSummary<'a> {
    fn from(state: &'a WorkflowState) -> Self {
        Self {
            item: state.item().map(|i| i.as_str()),
            quantity: state.quantity().map(|q| q.as_u32()),
            supplier: state.supplier().map(|s| s.as_str()),
            approved: state.approved(),
            reason: state.reason(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorSummary<'a> {
    stage: &'a str,
    cause: String,
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    request: &'a str,
    status: RunStatus,
    logs: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<StateSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorSummary<'a>>,
    completed_at: Timestamp,
}
