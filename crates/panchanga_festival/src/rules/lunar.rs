//! Yoga- and tithi-driven rules.

use panchanga_anga::{AngaType, overlap_days};
use tracing::trace;

use crate::error::FestivalError;
use crate::names::{ARDHODAYA, MAHODAYA, VYATIPATA_SHRADDHAM};
use crate::rule_types::{Emission, RuleContext};

const VYATIPATA_YOGA: u32 = 17;
const SHRAVANA: u32 = 22;
const AMAVASYA: u32 = 30;
/// Longer than any yoga, so the span around a day is always closed.
const YOGA_REACH_DAYS: f64 = 1.5;

/// Vyatipata shraddham on the day whose aparahna holds the most of the
/// vyatipata yoga; ties go to the earlier day. A yoga that misses every
/// aparahna falls on the day it starts.
pub(crate) fn vyatipata_shraddham(
    ctx: &RuleContext<'_>,
    d: usize,
) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    let Some(day) = t.day(d) else {
        return Ok(Vec::new());
    };
    let span = ctx.finder.find(
        AngaType::Yoga,
        VYATIPATA_YOGA,
        day.sunrise - YOGA_REACH_DAYS,
        day.next_sunrise + YOGA_REACH_DAYS,
        ctx.frame(),
    )?;
    let Some((start, end)) = span.bounds() else {
        return Ok(Vec::new());
    };
    if !(start < day.next_sunrise && end > day.sunrise) {
        return Ok(Vec::new());
    }

    let first = t.days.sunrise_day_index(start, day.utc_offset_hours);
    let last = t.days.sunrise_day_index(end, day.utc_offset_hours);
    let mut best: Option<(i64, f64)> = None;
    for k in first..=last {
        let Some(candidate) = usize::try_from(k).ok().and_then(|k| t.day(k)) else {
            continue;
        };
        let overlap = overlap_days((start, end), candidate.aparahna());
        if overlap > 0.0 && best.is_none_or(|(_, b)| overlap > b) {
            best = Some((k, overlap));
        }
    }
    let chosen = best.map_or(first, |(k, _)| k);
    trace!(day = d, start, end, chosen, "vyatipata");
    if chosen == d as i64 {
        Ok(vec![Emission::add(VYATIPATA_SHRADDHAM, chosen)])
    } else {
        Ok(Vec::new())
    }
}

/// Amavasya at sunrise in Pausha or Magha with vyatipata yoga and Shravana
/// at sunrise or sunset: mahodaya on a Monday, ardhodaya on a Sunday.
pub(crate) fn mahodaya_ardhodaya(
    ctx: &RuleContext<'_>,
    d: usize,
) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    let Some(day) = t.day(d) else {
        return Ok(Vec::new());
    };
    let festival = match day.weekday {
        1 => MAHODAYA,
        0 => ARDHODAYA,
        _ => return Ok(Vec::new()),
    };
    if !matches!(t.lunar_month(d), Some(10 | 11)) || day.angas.tithi.index != AMAVASYA {
        return Ok(Vec::new());
    }

    let frame = ctx.frame();
    let yoga_ok = day.angas.yoga.index == VYATIPATA_YOGA
        || ctx.finder.index_at(AngaType::Yoga, day.sunset, frame)? == VYATIPATA_YOGA;
    let nakshatra_ok = day.angas.nakshatra.index == SHRAVANA
        || ctx.finder.index_at(AngaType::Nakshatra, day.sunset, frame)? == SHRAVANA;
    if yoga_ok && nakshatra_ok {
        Ok(vec![Emission::add(festival, d as i64)])
    } else {
        Ok(Vec::new())
    }
}
