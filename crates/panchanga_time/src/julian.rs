//! Julian Date <-> Gregorian calendar conversions (UT).

/// Julian Date of J2000.0 (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Gregorian calendar date (with fractional day) to Julian Date.
///
/// `day_frac` carries the time of day, e.g. `1.5` is noon on the 1st.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Julian Date to Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;
    (year, month, day_frac)
}

/// Julian Date to `(year, month, day, hour)` where `hour` is fractional in [0, 24).
///
/// Feed it a JD already shifted by a zone offset to obtain local wall time.
pub fn jd_to_utc_gregorian(jd: f64) -> (i32, u32, u32, f64) {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor();
    let hour = ((day_frac - day) * 24.0).clamp(0.0, 24.0);
    (year, month, day as u32, hour)
}

/// `(year, month, day, hour)` to Julian Date.
pub fn utc_gregorian_to_jd(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    calendar_to_jd(year, month, day as f64 + hour / 24.0)
}

/// Julian Day Number (integer, noon-based) of the date containing `jd`.
pub fn jd_to_jdn(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}

/// Weekday of a Julian Day Number, 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jdn(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}
