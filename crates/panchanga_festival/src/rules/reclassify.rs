//! Vishesha vyatipata: shraddhams falling in Dhanus or Kanya are renamed.

use crate::day_map::FestivalDayMap;
use crate::names::{MAHA_VYATIPATA_SHRADDHAM, MAHADHANUR_VYATIPATA_SHRADDHAM, VYATIPATA_SHRADDHAM};
use crate::rule_types::{Amendment, RuleContext};

/// Reads a snapshot of the generic days; the engine applies the moves.
pub(crate) fn vishesha_vyatipata(ctx: &RuleContext<'_>, map: &FestivalDayMap) -> Vec<Amendment> {
    let Some(days) = map.days(VYATIPATA_SHRADDHAM) else {
        return Vec::new();
    };
    days.iter()
        .filter_map(|&day| {
            let to = match ctx.table.solar_month(day)? {
                9 => MAHADHANUR_VYATIPATA_SHRADDHAM,
                6 => MAHA_VYATIPATA_SHRADDHAM,
                _ => return None,
            };
            Some(Amendment {
                from: VYATIPATA_SHRADDHAM.to_string(),
                to: to.to_string(),
                day,
            })
        })
        .collect()
}
