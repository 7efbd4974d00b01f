//! Festival assignment over a computed panchanga year.
//!
//! Rules are plain functions in a fixed registry ([`rules::registry`]),
//! tagged by [`RuleFamily`]. [`FestivalRuleEngine`] evaluates them in order
//! against an immutable [`YearTable`](panchanga_calendar::YearTable) and
//! owns the resulting [`FestivalDayMap`]. [`AnnualPanchanga`] ties the year
//! build and the rule run together.

pub mod annual;
pub mod config;
pub mod day_map;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod names;
pub mod rule_types;
pub mod rules;

pub use annual::{AnnualPanchanga, DayRecord};
pub use config::{FestivalConfig, PanchangaConfig};
pub use day_map::FestivalDayMap;
pub use diagnostics::{Diagnostics, Outcome, RuleDiagnostic, SkipReason};
pub use engine::FestivalRuleEngine;
pub use error::FestivalError;
pub use rule_types::{
    Amendment, DailyEvaluator, EmitMode, Emission, Reclassifier, Rule, RuleContext, RuleFamily,
    RuleId, RuleKind,
};
