//! Festival rules against pinned mean-motion ephemerides.
//!
//! Location 82.5 E with IST puts local mean noon at 12:00; the default
//! 12-hour day gives sunrise 06:00 and sunset 18:00 every day.

use chrono::FixedOffset;
use panchanga_anga::{Ayanamsha, GeoLocation, MeanMotionEphemeris};
use panchanga_festival::names::{
    ARDHODAYA, DAKSHINAYANA, KARADAIYAN_NOMBU, KUCHELA_DINAM, MAHODAYA, PANCHANGA_PATHANAM,
    UTTARAYANA,
};
use panchanga_festival::{AnnualPanchanga, Outcome, PanchangaConfig, RuleId, SkipReason};
use panchanga_time::utc_gregorian_to_jd;

const IST_HOURS: f64 = 5.5;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}

fn ist_jd(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    utc_gregorian_to_jd(year, month, day, hour - IST_HOURS)
}

fn compute(eph: &MeanMotionEphemeris, year: i32) -> AnnualPanchanga {
    let location = GeoLocation::new(13.08, 82.5, 0.0);
    AnnualPanchanga::compute(eph, location, &ist(), year, &PanchangaConfig::default()).unwrap()
}

fn days_of(year: &AnnualPanchanga, name: &str) -> Vec<usize> {
    year.festivals
        .days(name)
        .map(|days| days.iter().copied().collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Fixed solar days
// ---------------------------------------------------------------------------

#[test]
fn mesha_sankranti_names_the_samvatsara() {
    let eph = MeanMotionEphemeris::pinned(ist_jd(2024, 4, 13, 7.25), Ayanamsha::Lahiri, 0.0, 123.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, "mESa-saGkrAntiH~(krOdhI-saMvatsaraH)"), vec![104]);
    assert_eq!(days_of(&year, PANCHANGA_PATHANAM), vec![104]);
}

#[test]
fn karadaiyan_moves_back_for_early_sankranti() {
    // Meena sankranti at 03:00 IST on 14 March: before the 04:24 cutoff.
    let eph = MeanMotionEphemeris::pinned(ist_jd(2024, 3, 14, 3.0), Ayanamsha::Lahiri, 330.0, 10.0);
    let year = compute(&eph, 2024);
    assert_eq!(year.table.solar_month_day(74), Some(1));
    assert_eq!(days_of(&year, KARADAIYAN_NOMBU), vec![73]);
}

#[test]
fn karadaiyan_stays_for_late_sankranti() {
    let eph = MeanMotionEphemeris::pinned(ist_jd(2024, 3, 14, 5.0), Ayanamsha::Lahiri, 330.0, 10.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, KARADAIYAN_NOMBU), vec![74]);
}

#[test]
fn kuchela_is_first_wednesday_of_dhanus() {
    // Dhanus begins Sunday 15 December 2024 (day 350).
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 12, 15, 10.0), Ayanamsha::Lahiri, 240.0, 50.0);
    let year = compute(&eph, 2024);
    assert_eq!(year.table.solar_month_day(350), Some(1));
    assert_eq!(days_of(&year, KUCHELA_DINAM), vec![353]);
    assert_eq!(year.table.day(353).unwrap().weekday, 3);
}

// ---------------------------------------------------------------------------
// Ayanas
// ---------------------------------------------------------------------------

#[test]
fn dakshinayana_after_sunset_stays_on_transit_day() {
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 6, 20, 20.0), Ayanamsha::Tropical, 90.0, 0.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, "zukraH►20:00"), vec![172]);
    assert_eq!(days_of(&year, DAKSHINAYANA), vec![172]);
}

#[test]
fn dakshinayana_before_sunset_moves_back() {
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 6, 20, 10.0), Ayanamsha::Tropical, 90.0, 0.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, "zukraH►10:00"), vec![172]);
    assert_eq!(days_of(&year, DAKSHINAYANA), vec![171]);
}

#[test]
fn uttarayana_after_sunset_moves_forward() {
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 12, 21, 20.0), Ayanamsha::Tropical, 270.0, 0.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, "sahaH►20:00"), vec![356]);
    assert_eq!(days_of(&year, UTTARAYANA), vec![357]);
}

#[test]
fn uttarayana_past_year_end_is_skipped() {
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 12, 31, 20.0), Ayanamsha::Tropical, 270.0, 0.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, "sahaH►20:00"), vec![366]);
    assert!(year.festivals.days(UTTARAYANA).is_none());

    let skipped: Vec<_> = year
        .diagnostics
        .skipped()
        .filter(|e| e.festival.as_deref() == Some(UTTARAYANA))
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].rule, RuleId::Ayana);
    assert_eq!(
        skipped[0].outcome,
        Outcome::Skipped {
            reason: SkipReason::DayOutOfRange { day: 367 }
        }
    );
}

// ---------------------------------------------------------------------------
// Lunar
// ---------------------------------------------------------------------------

#[test]
fn mahodaya_on_monday_amavasya_in_pausha() {
    // New moon at 12:00 IST on Monday 8 January 2024 with both bodies at
    // 290 deg: Shravana and vyatipata at sunrise.
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 1, 8, 12.0), Ayanamsha::Lahiri, 290.0, 290.0);
    let year = compute(&eph, 2024);
    let day = year.table.day(8).unwrap();
    assert_eq!(day.weekday, 1);
    assert_eq!(day.angas.tithi.index, 30);
    assert_eq!(year.table.lunar_month(8), Some(10));
    assert_eq!(days_of(&year, MAHODAYA), vec![8]);
    assert!(year.festivals.days(ARDHODAYA).is_none());
}

#[test]
fn ardhodaya_on_sunday() {
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 1, 7, 12.0), Ayanamsha::Lahiri, 290.0, 290.0);
    let year = compute(&eph, 2024);
    assert_eq!(days_of(&year, ARDHODAYA), vec![7]);
    assert!(year.festivals.days(MAHODAYA).is_none());
}

#[test]
fn vyatipata_on_day_holding_it_at_aparahna() {
    // Yoga 17 runs 00:42 to 23:18 IST on 8 January around the new moon.
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 1, 8, 12.0), Ayanamsha::Lahiri, 290.0, 290.0);
    let year = compute(&eph, 2024);
    assert!(year.festivals.contains("vyatIpAta-zrAddham", 8));
    assert!(!year.festivals.contains("vyatIpAta-zrAddham", 7));
    assert!(!year.festivals.contains("vyatIpAta-zrAddham", 9));
}

// ---------------------------------------------------------------------------
// Gajachhaya
// ---------------------------------------------------------------------------

#[test]
fn gajachhaya_windows_for_both_pairings() {
    // New moon at 12:00 IST on 25 September 2024 with Sun and Moon at
    // 165 deg (Hasta). Moon in Magha overlaps tithi 28 three days earlier.
    let eph =
        MeanMotionEphemeris::pinned(ist_jd(2024, 9, 25, 12.0), Ayanamsha::Lahiri, 165.0, 165.0);
    let year = compute(&eph, 2024);
    assert_eq!(year.table.solar_month(254), Some(6));
    assert_eq!(year.table.solar_month_day(254), Some(1));

    let gajachhaya: Vec<(&str, Vec<usize>)> = year
        .festivals
        .iter()
        .filter(|(name, _)| name.starts_with("gajacchAyA-yOgaH"))
        .map(|(name, days)| (name, days.iter().copied().collect()))
        .collect();
    assert_eq!(
        gajachhaya,
        vec![
            ("gajacchAyA-yOgaH-02:53►12:00", vec![269]),
            ("gajacchAyA-yOgaH-13:07►26:19", vec![266]),
        ]
    );
}

#[test]
fn gajachhaya_name_formats_hours() {
    use panchanga_festival::rules::gajachhaya_name;
    use panchanga_time::{Hour, HourFormat};
    assert_eq!(
        gajachhaya_name(Hour(23.5), Hour(25.25), HourFormat::HhMm),
        "gajacchAyA-yOgaH-23:30►25:15"
    );
}
