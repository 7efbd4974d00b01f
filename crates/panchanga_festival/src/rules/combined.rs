//! Gajachhaya: Sun in Hasta coinciding with Moon in Magha on the 28th
//! tithi, or with Moon in Hasta on amavasya.

use panchanga_anga::{AngaSpan, AngaType, conjunction_window};
use panchanga_time::{Hour, HourFormat};
use tracing::debug;

use crate::error::FestivalError;
use crate::names::{GAJACHHAYA, TIME_ARROW};
use crate::rule_types::{Emission, RuleContext};

const MAGHA: u32 = 10;
const HASTA: u32 = 13;
/// Days searched for the Sun's entry into Hasta from the start of Kanya.
const SUN_HASTA_WINDOW_DAYS: f64 = 30.0;

/// `gajacchAyA-yOgaH-<t1>►<t2>`.
pub fn gajachhaya_name(start: Hour, end: Hour, fmt: HourFormat) -> String {
    format!(
        "{GAJACHHAYA}-{}{TIME_ARROW}{}",
        start.format(fmt),
        end.format(fmt)
    )
}

pub(crate) fn gajachhaya(ctx: &RuleContext<'_>, d: usize) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    if !(t.solar_month(d) == Some(6) && t.solar_month_day(d) == Some(1)) {
        return Ok(Vec::new());
    }
    let Some(day) = t.day(d) else {
        return Ok(Vec::new());
    };
    let (finder, frame) = (ctx.finder, ctx.frame());

    let sun_hasta = finder.find(
        AngaType::SolarNakshatra,
        HASTA,
        day.sunrise,
        day.sunrise + SUN_HASTA_WINDOW_DAYS,
        frame,
    )?;
    let Some((sh_start, sh_end)) = sun_hasta.bounds() else {
        debug!(day = d, "sun not in hasta within window");
        return Ok(Vec::new());
    };

    let moon_magha = finder.find(AngaType::Nakshatra, MAGHA, sh_start - 2.0, sh_end + 2.0, frame)?;
    let tithi_28 = match moon_magha.bounds() {
        Some((s, e)) => finder.find(AngaType::Tithi, 28, s - 3.0, e + 3.0, frame)?,
        None => AngaSpan::not_found(AngaType::Tithi, 28),
    };

    let moon_hasta = finder.find(AngaType::Nakshatra, HASTA, sh_start - 1.0, sh_end + 1.0, frame)?;
    let tithi_30 = if moon_hasta.is_resolved() {
        finder.find(AngaType::Tithi, 30, sh_start - 1.0, sh_end + 1.0, frame)?
    } else {
        AngaSpan::not_found(AngaType::Tithi, 30)
    };

    let mut out = Vec::new();
    for spans in [
        [sun_hasta, moon_magha, tithi_28],
        [sun_hasta, moon_hasta, tithi_30],
    ] {
        if let Some(window) = conjunction_window(&spans) {
            out.push(emission(ctx, day.utc_offset_hours, window));
        }
    }
    Ok(out)
}

/// Placed on the civil day of the local start; the end reads past 24h when
/// it falls on a later date.
fn emission(ctx: &RuleContext<'_>, utc_offset_hours: f64, (start, end): (f64, f64)) -> Emission {
    let days = &ctx.table.days;
    let offset = utc_offset_hours / 24.0;
    let civil_day = days.civil_day_index(start + offset);
    let midnight = days.jd_start_utc + (civil_day - 1) as f64;
    let hour = |jd: f64| Hour((jd + offset - midnight) * 24.0);
    let name = gajachhaya_name(hour(start), hour(end), ctx.hour_format());
    Emission::assign(name, civil_day)
}
