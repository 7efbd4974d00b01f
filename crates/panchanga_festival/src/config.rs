//! Festival and top-level configuration.

use std::collections::BTreeSet;

use panchanga_calendar::CalendarConfig;
use serde::{Deserialize, Serialize};

use crate::rule_types::RuleFamily;

/// Which rule families run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalConfig {
    pub families: BTreeSet<RuleFamily>,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            families: RuleFamily::ALL.into_iter().collect(),
        }
    }
}

impl FestivalConfig {
    pub fn only(families: impl IntoIterator<Item = RuleFamily>) -> Self {
        Self {
            families: families.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, family: RuleFamily) -> bool {
        self.families.contains(&family)
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.families.is_empty() {
            return Err("at least one rule family must be enabled");
        }
        Ok(())
    }
}

/// Everything needed to compute one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanchangaConfig {
    pub calendar: CalendarConfig,
    pub festivals: FestivalConfig,
}

impl PanchangaConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        self.calendar.validate()?;
        self.festivals.validate()
    }
}
