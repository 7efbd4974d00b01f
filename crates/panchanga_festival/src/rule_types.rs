//! Rule registry types: identities, families, evaluator signatures.

use std::fmt;

use panchanga_anga::{AngaSpanFinder, Ayanamsha};
use panchanga_calendar::YearTable;
use panchanga_time::HourFormat;
use serde::{Deserialize, Serialize};

use crate::day_map::FestivalDayMap;
use crate::error::FestivalError;

/// Group a rule belongs to; configuration enables rules by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFamily {
    /// Driven by solar months and sankrantis.
    Solar,
    /// Driven by lunar months, tithis and yogas.
    Lunar,
    /// Coincidence of several independent spans.
    Combined,
    /// Rewrites earlier assignments.
    Reclassification,
}

impl RuleFamily {
    pub const ALL: [RuleFamily; 4] = [
        RuleFamily::Solar,
        RuleFamily::Lunar,
        RuleFamily::Combined,
        RuleFamily::Reclassification,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    KaradaiyanNombu,
    KuchelaDinam,
    MeshaSankranti,
    VyatipataShraddham,
    MahodayaArdhodaya,
    Ayana,
    Gajachhaya,
    VisheshaVyatipata,
}

/// Whether an emission adds a day or replaces the festival's days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitMode {
    Add,
    Assign,
}

/// A festival placed on a day; `day` may fall outside the year and is then
/// skipped by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emission {
    pub festival: String,
    pub day: i64,
    pub mode: EmitMode,
}

impl Emission {
    pub fn add(festival: impl Into<String>, day: i64) -> Self {
        Self {
            festival: festival.into(),
            day,
            mode: EmitMode::Add,
        }
    }

    pub fn assign(festival: impl Into<String>, day: i64) -> Self {
        Self {
            festival: festival.into(),
            day,
            mode: EmitMode::Assign,
        }
    }
}

/// Move `day` from festival `from` to festival `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amendment {
    pub from: String,
    pub to: String,
    pub day: usize,
}

/// Read-only view handed to every evaluator.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub table: &'a YearTable,
    pub finder: AngaSpanFinder<'a>,
}

impl RuleContext<'_> {
    /// Sidereal frame of the year table.
    pub fn frame(&self) -> Ayanamsha {
        self.table.config.ayanamsha
    }

    pub fn hour_format(&self) -> HourFormat {
        self.table.config.hour_format
    }
}

pub type DailyEvaluator = fn(&RuleContext<'_>, usize) -> Result<Vec<Emission>, FestivalError>;
pub type Reclassifier = fn(&RuleContext<'_>, &FestivalDayMap) -> Vec<Amendment>;

#[derive(Clone, Copy)]
pub enum RuleKind {
    /// Evaluated once for each day `1..=duration`.
    Daily(DailyEvaluator),
    /// Evaluated once against the map built so far.
    Reclassify(Reclassifier),
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub family: RuleFamily,
    pub kind: RuleKind,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RuleKind::Daily(_) => "daily",
            RuleKind::Reclassify(_) => "reclassify",
        };
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("kind", &kind)
            .finish()
    }
}
