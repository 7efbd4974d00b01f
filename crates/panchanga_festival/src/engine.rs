//! Runs the registered rules over a year table.

use panchanga_anga::{AngaSpanFinder, EphemerisProvider};
use panchanga_calendar::YearTable;
use tracing::{debug, info, instrument, warn};

use crate::config::FestivalConfig;
use crate::day_map::FestivalDayMap;
use crate::diagnostics::{Diagnostics, Outcome, RuleDiagnostic, SkipReason};
use crate::error::FestivalError;
use crate::rule_types::{EmitMode, Emission, Rule, RuleContext, RuleId, RuleKind};
use crate::rules::registry;

/// Owns the festival map while the rules run; the year table is read-only.
pub struct FestivalRuleEngine<'a> {
    ctx: RuleContext<'a>,
    rules: Vec<Rule>,
}

impl<'a> FestivalRuleEngine<'a> {
    /// Engine with the registry rules of every enabled family.
    pub fn new(
        table: &'a YearTable,
        provider: &'a dyn EphemerisProvider,
        config: &FestivalConfig,
    ) -> Result<Self, FestivalError> {
        config.validate().map_err(FestivalError::InvalidConfig)?;
        let finder = AngaSpanFinder::new(provider, table.config.search)?;
        let rules = registry()
            .into_iter()
            .filter(|rule| config.is_enabled(rule.family))
            .collect();
        Ok(Self::with_rules(table, finder, rules))
    }

    /// Engine running exactly `rules`, in the given order.
    pub fn with_rules(table: &'a YearTable, finder: AngaSpanFinder<'a>, rules: Vec<Rule>) -> Self {
        Self {
            ctx: RuleContext { table, finder },
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule; an evaluator error is recorded for its day and
    /// the run continues.
    #[instrument(skip_all, fields(year = self.ctx.table.days.year, rules = self.rules.len()))]
    pub fn run(&self) -> (FestivalDayMap, Diagnostics) {
        let mut map = FestivalDayMap::new();
        let mut diagnostics = Diagnostics::default();

        for rule in &self.rules {
            match rule.kind {
                RuleKind::Daily(evaluate) => {
                    for d in 1..=self.ctx.table.duration() {
                        match evaluate(&self.ctx, d) {
                            Ok(emissions) => {
                                for emission in emissions {
                                    self.apply(rule.id, emission, &mut map, &mut diagnostics);
                                }
                            }
                            Err(err) => {
                                warn!(rule = ?rule.id, day = d, %err, "rule evaluation failed");
                                diagnostics.push(RuleDiagnostic {
                                    rule: rule.id,
                                    day: d as i64,
                                    festival: None,
                                    outcome: Outcome::Failed {
                                        error: err.to_string(),
                                    },
                                });
                            }
                        }
                    }
                }
                RuleKind::Reclassify(reclassify) => {
                    for amendment in reclassify(&self.ctx, &map) {
                        map.remove_day(&amendment.from, amendment.day);
                        map.add(amendment.to.clone(), amendment.day);
                        debug!(
                            rule = ?rule.id,
                            day = amendment.day,
                            from = %amendment.from,
                            to = %amendment.to,
                            "reclassified"
                        );
                        diagnostics.push(RuleDiagnostic {
                            rule: rule.id,
                            day: amendment.day as i64,
                            festival: Some(amendment.from),
                            outcome: Outcome::Reclassified { to: amendment.to },
                        });
                    }
                }
            }
        }

        info!(
            festivals = map.len(),
            failures = diagnostics.failures().count(),
            "festival rules applied"
        );
        (map, diagnostics)
    }

    fn apply(
        &self,
        rule: RuleId,
        emission: Emission,
        map: &mut FestivalDayMap,
        diagnostics: &mut Diagnostics,
    ) {
        let Emission {
            festival,
            day,
            mode,
        } = emission;
        let outcome = match usize::try_from(day) {
            Ok(d) if self.ctx.table.in_year(day) => {
                debug!(rule = ?rule, day = d, festival = %festival, ?mode, "festival placed");
                match mode {
                    EmitMode::Add => {
                        map.add(festival.clone(), d);
                        Outcome::Emitted
                    }
                    EmitMode::Assign => {
                        map.assign(festival.clone(), d);
                        Outcome::Assigned
                    }
                }
            }
            _ => {
                debug!(rule = ?rule, day, festival = %festival, "emission outside year skipped");
                Outcome::Skipped {
                    reason: SkipReason::DayOutOfRange { day },
                }
            }
        };
        diagnostics.push(RuleDiagnostic {
            rule,
            day,
            festival: Some(festival),
            outcome,
        });
    }
}
