//! Solar-month rules: fixed days of sidereal months and the ayanas.

use panchanga_anga::AngaType;
use panchanga_anga::names::{RTU_MASA_NAMES, name_at};
use tracing::trace;

use crate::error::FestivalError;
use crate::names::{
    DAKSHINAYANA, KARADAIYAN_NOMBU, KUCHELA_DINAM, PANCHANGA_PATHANAM, TIME_ARROW, UTTARAYANA,
    mesha_sankranti_name,
};
use crate::rule_types::{Emission, RuleContext};

fn is_month_start(ctx: &RuleContext<'_>, d: usize, month: u32) -> bool {
    ctx.table.solar_month(d) == Some(month) && ctx.table.solar_month_day(d) == Some(1)
}

/// First day of Meena, or the day before when the sankranti falls more than
/// a fifteenth of a day ahead of that sunrise.
pub(crate) fn karadaiyan_nombu(
    ctx: &RuleContext<'_>,
    d: usize,
) -> Result<Vec<Emission>, FestivalError> {
    if !is_month_start(ctx, d, 12) {
        return Ok(Vec::new());
    }
    let (Some(prev), Some(day)) = (ctx.table.day(d - 1), ctx.table.day(d)) else {
        return Ok(Vec::new());
    };
    let cutoff = day.sunrise - (day.sunrise - prev.sunrise) / 15.0;
    let sign = ctx.finder.index_at(AngaType::SolarRaashi, cutoff, ctx.frame())?;
    let target = if sign == 12 { d - 1 } else { d };
    trace!(day = d, cutoff, sign, target, "karadaiyan cutoff");
    Ok(vec![Emission::assign(KARADAIYAN_NOMBU, target as i64)])
}

/// First Wednesday of Dhanus.
pub(crate) fn kuchela_dinam(
    ctx: &RuleContext<'_>,
    d: usize,
) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    let first_week = t.solar_month_day(d).is_some_and(|dom| dom <= 7);
    let wednesday = t.day(d).is_some_and(|day| day.weekday == 3);
    if t.solar_month(d) == Some(9) && first_week && wednesday {
        Ok(vec![Emission::assign(KUCHELA_DINAM, d as i64)])
    } else {
        Ok(Vec::new())
    }
}

pub(crate) fn mesha_sankranti(
    ctx: &RuleContext<'_>,
    d: usize,
) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    if !(t.solar_month(d) == Some(1) && t.solar_month(d - 1) == Some(12)) {
        return Ok(Vec::new());
    }
    Ok(vec![
        Emission::add(mesha_sankranti_name(t.days.year), d as i64),
        Emission::add(PANCHANGA_PATHANAM, d as i64),
    ])
}

/// Tropical month ends found from sidereal month start `d`, plus the
/// dakshinayana and uttarayana punyakalas.
pub(crate) fn ayana(ctx: &RuleContext<'_>, d: usize) -> Result<Vec<Emission>, FestivalError> {
    let t = ctx.table;
    let mut out = Vec::new();
    for transit in t.tropical_transits.iter().filter(|tr| tr.trigger_day == d) {
        let fday = transit.day as i64;
        let Some(rtu) = name_at(&RTU_MASA_NAMES, transit.ending_month) else {
            continue;
        };
        out.push(Emission::add(
            format!("{rtu}{TIME_ARROW}{}", transit.display_hour.format(ctx.hour_format())),
            fday,
        ));

        let after_sunset = match (t.day(transit.day), t.day(transit.day + 1)) {
            (Some(day), Some(next)) => day.sunset < transit.jd && transit.jd < next.sunset,
            _ => false,
        };
        match transit.ending_month {
            3 => out.push(Emission::add(
                DAKSHINAYANA,
                if after_sunset { fday } else { fday - 1 },
            )),
            9 => out.push(Emission::add(
                UTTARAYANA,
                if after_sunset { fday + 1 } else { fday },
            )),
            _ => {}
        }
    }
    Ok(out)
}
