//! Structured record of what each rule did.
//!
//! Every entry is also emitted as a `tracing` event by the engine; nothing
//! reads the log back to make decisions.

use serde::Serialize;

use crate::rule_types::RuleId;

/// Why an emission was not applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Target day falls outside `1..=duration`.
    DayOutOfRange { day: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Day added to the festival's days.
    Emitted,
    /// Festival's days replaced by this day.
    Assigned,
    /// Day moved from this festival to `to`.
    Reclassified { to: String },
    Skipped { reason: SkipReason },
    /// Evaluator returned an error for this day.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleDiagnostic {
    pub rule: RuleId,
    /// Day the outcome refers to (the evaluated day for failures).
    pub day: i64,
    pub festival: Option<String>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<RuleDiagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, entry: RuleDiagnostic) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RuleDiagnostic] {
        &self.entries
    }

    pub fn for_rule(&self, rule: RuleId) -> impl Iterator<Item = &RuleDiagnostic> {
        self.entries.iter().filter(move |e| e.rule == rule)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RuleDiagnostic> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Failed { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &RuleDiagnostic> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Skipped { .. }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
