//! Integration tests for day boundaries and month systems.
//!
//! Uses the mean-motion ephemeris at longitude 82.5 E with IST, so local
//! mean noon is 12:00 and a 12-hour day gives sunrise 06:00, sunset 18:00.

use chrono::FixedOffset;
use panchanga_anga::{Ayanamsha, GeoLocation, MeanMotionEphemeris};
use panchanga_calendar::{CalendarConfig, CalendarError, MonthSystem, YearTable};
use panchanga_time::{HourFormat, utc_gregorian_to_jd};

const IST_HOURS: f64 = 5.5;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
}

fn location() -> GeoLocation {
    GeoLocation::new(13.08, 82.5, 0.0)
}

/// JD UT of a local IST wall time.
fn ist_jd(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    utc_gregorian_to_jd(year, month, day, hour - IST_HOURS)
}

fn build(eph: &MeanMotionEphemeris, year: i32) -> YearTable {
    YearTable::build(eph, location(), &ist(), year, CalendarConfig::default()).unwrap()
}

// ---------------------------------------------------------------------------
// Day boundaries
// ---------------------------------------------------------------------------

#[test]
fn sunrise_sunset_order_and_local_times() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    assert_eq!(table.duration(), 366);
    assert_eq!(table.days.len(), 368);
    for day in table.days.all() {
        assert!(day.sunrise < day.sunset, "day {}", day.index);
        assert!(day.sunset < day.next_sunrise, "day {}", day.index);
        assert_eq!(day.local_hour(day.sunrise).to_string(), "06:00");
        assert_eq!(day.local_hour(day.sunset).to_string(), "18:00");
        assert!((day.utc_offset_hours - IST_HOURS).abs() < 1e-12);
    }
    for pair in table.days.all().windows(2) {
        assert!((pair[0].next_sunrise - pair[1].sunrise).abs() < 1e-12);
    }
}

#[test]
fn weekdays_follow_civil_dates() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    // 2024-01-01 was a Monday
    assert_eq!(table.day(1).unwrap().weekday, 1);
    for pair in table.days.all().windows(2) {
        assert_eq!(pair[1].weekday, (pair[0].weekday + 1) % 7);
    }
}

#[test]
fn hours_before_next_sunrise_read_past_24() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    let day = table.day(10).unwrap();
    let late = day.next_sunrise - 1.0 / 24.0; // 05:00 next morning
    assert_eq!(day.local_hour(late).to_string(), "29:00");
    assert_eq!(day.local_hour(late).format(HourFormat::HhMmStar), "05:00*");
}

#[test]
fn sunrise_angas_contain_sunrise() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    for day in table.days.year_days() {
        for span in [
            day.angas.tithi,
            day.angas.karana,
            day.angas.yoga,
            day.angas.nakshatra,
            day.angas.raashi,
        ] {
            assert!(span.is_resolved(), "day {} {:?}", day.index, span.anga_type);
            assert!(span.contains(day.sunrise), "day {} {:?}", day.index, span.anga_type);
        }
    }
}

#[test]
fn sunrise_day_lookup_matches_table() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    let day = table.day(200).unwrap();
    assert_eq!(table.days.sunrise_day_of(day.sunrise + 0.3), Some(200));
    assert_eq!(table.days.sunrise_day_of(day.next_sunrise - 1e-6), Some(200));
}

#[test]
fn polar_night_is_an_error() {
    let eph = MeanMotionEphemeris::default().with_day_length(0.0);
    let err = YearTable::build(&eph, location(), &ist(), 2024, CalendarConfig::default())
        .unwrap_err();
    assert!(matches!(err, CalendarError::SunNeverRises { .. }), "{err}");
}

#[test]
fn tropical_frame_config_is_rejected() {
    let cfg = CalendarConfig {
        ayanamsha: Ayanamsha::Tropical,
        ..CalendarConfig::default()
    };
    let err = YearTable::build(&MeanMotionEphemeris::default(), location(), &ist(), 2024, cfg)
        .unwrap_err();
    assert!(matches!(err, CalendarError::InvalidConfig(_)));
}

// ---------------------------------------------------------------------------
// Sidereal solar months
// ---------------------------------------------------------------------------

#[test]
fn mesha_sankranti_after_sunrise_starts_month_that_day() {
    // Sun enters sidereal Mesha at 07:15 IST on 13 April 2024 (day 104).
    let jd = ist_jd(2024, 4, 13, 7.25);
    let eph = MeanMotionEphemeris::pinned(jd, Ayanamsha::Lahiri, 0.0, 123.0);
    let table = build(&eph, 2024);

    assert_eq!(table.day(104).unwrap().date.to_string(), "2024-04-13");
    assert_eq!(table.solar_month(104), Some(1));
    assert_eq!(table.solar_month_day(104), Some(1));
    assert_eq!(table.solar_month(103), Some(12));
    assert!(table.solar_month_day(103).unwrap() >= 29);
    assert_eq!(table.solar_month_day(105), Some(2));
}

#[test]
fn sankranti_after_sunset_starts_month_next_day() {
    // 19:00 IST is after the 18:00 sunset.
    let jd = ist_jd(2024, 4, 13, 19.0);
    let eph = MeanMotionEphemeris::pinned(jd, Ayanamsha::Lahiri, 0.0, 123.0);
    let table = build(&eph, 2024);
    assert_eq!(table.solar_month(104), Some(12));
    assert_eq!(table.solar_month(105), Some(1));
    assert_eq!(table.solar_month_day(105), Some(1));
}

// ---------------------------------------------------------------------------
// Tropical solar months
// ---------------------------------------------------------------------------

#[test]
fn tropical_transit_before_sunrise_goes_to_previous_day() {
    // Tropical Mesha ingress at 05:30 IST on 20 March 2024 (day 80),
    // half an hour before sunrise.
    let jd = ist_jd(2024, 3, 20, 5.5);
    let eph = MeanMotionEphemeris::pinned(jd, Ayanamsha::Tropical, 0.0, 40.0);
    let table = build(&eph, 2024);

    let transit = table
        .tropical_transits
        .iter()
        .find(|t| t.ending_month == 12)
        .expect("Meena transit recorded");
    assert_eq!(transit.day, 79);
    assert_eq!(transit.display_hour.to_string(), "29:30");
    assert!((transit.jd - jd).abs() < 1e-5);
    assert_eq!(table.solar_month(transit.trigger_day), Some(12));
    assert_eq!(table.solar_month_day(transit.trigger_day), Some(1));

    assert_eq!(table.tropical_solar.month(79), Some(12));
    assert_eq!(table.tropical_solar.month(80), Some(1));
    assert_eq!(table.tropical_solar.day(80), Some(1));
}

#[test]
fn tropical_transit_after_sunrise_stays_on_its_day() {
    let jd = ist_jd(2024, 3, 20, 9.0);
    let eph = MeanMotionEphemeris::pinned(jd, Ayanamsha::Tropical, 0.0, 40.0);
    let table = build(&eph, 2024);
    let transit = table
        .tropical_transits
        .iter()
        .find(|t| t.ending_month == 12)
        .unwrap();
    assert_eq!(transit.day, 80);
    assert_eq!(transit.display_hour.to_string(), "09:00");
    assert_eq!(table.tropical_solar.month(80), Some(12));
    assert_eq!(table.tropical_solar.month(81), Some(1));
}

#[test]
fn tropical_transits_are_ordered_and_monthly() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    let transits = &table.tropical_transits;
    assert!(transits.len() >= 11, "{} transits", transits.len());
    for pair in transits.windows(2) {
        assert!(pair[0].day < pair[1].day);
        assert_eq!(pair[1].ending_month, pair[0].ending_month % 12 + 1);
    }
}

// ---------------------------------------------------------------------------
// All systems
// ---------------------------------------------------------------------------

#[test]
fn every_system_is_total_and_contiguous() {
    let table = build(&MeanMotionEphemeris::default(), 2023);
    for system in [
        MonthSystem::SiderealSolar,
        MonthSystem::TropicalSolar,
        MonthSystem::Lunar,
        MonthSystem::Islamic,
    ] {
        let dates = table.months(system).dates();
        assert_eq!(dates.len(), table.days.len(), "{system:?}");
        for (d, pair) in dates.windows(2).enumerate() {
            let (prev, cur) = (pair[0], pair[1]);
            assert!((1..=12).contains(&cur.month), "{system:?} day {}", d + 1);
            if (prev.month, prev.adhika) == (cur.month, cur.adhika) {
                if system != MonthSystem::Lunar {
                    assert_eq!(cur.day, prev.day + 1, "{system:?} day {}", d + 1);
                }
            } else if prev.adhika {
                assert_eq!(cur.month, prev.month, "{system:?} day {}", d + 1);
                assert!(!cur.adhika);
            } else {
                assert_eq!(cur.month, prev.month % 12 + 1, "{system:?} day {}", d + 1);
            }
        }
    }
}

#[test]
fn solar_month_lengths_are_plausible() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    let starts: Vec<usize> = (1..=table.duration())
        .filter(|&d| table.solar_month_day(d) == Some(1))
        .collect();
    assert_eq!(starts.len(), 12);
    for pair in starts.windows(2) {
        let len = pair[1] - pair[0];
        assert!((29..=32).contains(&len), "solar month of {len} days");
    }
}

#[test]
fn lunar_days_follow_sunrise_tithi() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    for day in table.days.all() {
        let date = table.month_date(MonthSystem::Lunar, day.index).unwrap();
        assert_eq!(date.day, day.angas.tithi.index);
    }
    for d in 1..=table.duration() {
        let prev = table.lunar.get(d - 1).unwrap();
        let cur = table.lunar.get(d).unwrap();
        if (prev.month, prev.adhika) != (cur.month, cur.adhika) {
            assert!(cur.day <= 2, "month starts on tithi {}", cur.day);
        }
    }
}

#[test]
fn islamic_dates_match_tabular_calendar() {
    let table = build(&MeanMotionEphemeris::default(), 2024);
    // 2024-03-11 = 1 Ramadan 1445 (day 71)
    let date = table.month_date(MonthSystem::Islamic, 71).unwrap();
    assert_eq!((date.month, date.day), (9, 1));
}
