//! Anga span and transit search.
//!
//! Scans a window in steps of a quarter of the shortest possible anga and
//! watches the 1-based index. Each detected change is refined by bisection
//! on f(t) = normalize(lon(t) - boundary), where `boundary` is the arc edge
//! being crossed; the ±180 wrap keeps the 0/360 edge continuous. All angas
//! advance monotonically, so one step contains at most one change.

use tracing::{debug, trace};

use crate::anga::{anga_index_at, anga_longitude_at};
use crate::anga_types::{AngaSpan, AngaType, SearchConfig, Transit};
use crate::ayanamsha::Ayanamsha;
use crate::ephemeris::{Body, EphemerisProvider};
use crate::error::AngaError;
use crate::search_util::{bisect_zero, normalize_to_pm180};

/// Span and transit searches against one ephemeris provider.
#[derive(Clone, Copy)]
pub struct AngaSpanFinder<'a> {
    provider: &'a dyn EphemerisProvider,
    config: SearchConfig,
}

impl std::fmt::Debug for AngaSpanFinder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AngaSpanFinder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> AngaSpanFinder<'a> {
    pub fn new(
        provider: &'a dyn EphemerisProvider,
        config: SearchConfig,
    ) -> Result<Self, AngaError> {
        config.validate().map_err(AngaError::InvalidConfig)?;
        Ok(Self { provider, config })
    }

    pub fn provider(&self) -> &'a dyn EphemerisProvider {
        self.provider
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// 1-based index of `anga` at `jd_ut`.
    pub fn index_at(&self, anga: AngaType, jd_ut: f64, frame: Ayanamsha) -> Result<u32, AngaError> {
        Ok(anga_index_at(self.provider, anga, jd_ut, frame)?)
    }

    /// First occurrence of `target` of `anga` within `[jd_start, jd_end]`.
    ///
    /// If the target already holds at `jd_start` the start is open; if it
    /// still holds at `jd_end` the end is open. A target that never holds in
    /// the window yields [`AngaSpan::not_found`].
    pub fn find(
        &self,
        anga: AngaType,
        target: u32,
        jd_start: f64,
        jd_end: f64,
        frame: Ayanamsha,
    ) -> Result<AngaSpan, AngaError> {
        let max = anga.num_angas();
        if target == 0 || target > max {
            return Err(AngaError::InvalidTarget {
                anga,
                target,
                max,
            });
        }
        check_window(jd_start, jd_end)?;

        let step = anga.scan_step_days();
        let mut t_prev = jd_start;
        let mut idx_prev = self.index_at(anga, t_prev, frame)?;
        // None: not yet inside; Some(None): inside since window start.
        let mut entry: Option<Option<f64>> = (idx_prev == target).then_some(None);

        while t_prev < jd_end {
            let t_next = (t_prev + step).min(jd_end);
            let idx_next = self.index_at(anga, t_next, frame)?;

            if idx_next != idx_prev {
                match entry {
                    None if idx_next == target => {
                        let t_in = self.refine_exit(anga, idx_prev, t_prev, t_next, frame)?;
                        entry = Some(Some(t_in));
                    }
                    Some(start) => {
                        let t_out = self.refine_exit(anga, target, t_prev, t_next, frame)?;
                        trace!(anga = anga.name(), target, ?start, t_out, "span resolved");
                        return Ok(AngaSpan {
                            anga_type: anga,
                            index: target,
                            start,
                            end: Some(t_out),
                        });
                    }
                    None => {}
                }
            }

            t_prev = t_next;
            idx_prev = idx_next;
        }

        match entry {
            Some(start) => Ok(AngaSpan {
                anga_type: anga,
                index: target,
                start,
                end: None,
            }),
            None => {
                debug!(
                    anga = anga.name(),
                    target, jd_start, jd_end, "anga not found in window"
                );
                Ok(AngaSpan::not_found(anga, target))
            }
        }
    }

    /// The occurrence of `anga` that contains `jd_ut`, with both bounds
    /// resolved when the anga lasts no longer than its usual maximum.
    pub fn span_at(
        &self,
        anga: AngaType,
        jd_ut: f64,
        frame: Ayanamsha,
    ) -> Result<AngaSpan, AngaError> {
        let idx = self.index_at(anga, jd_ut, frame)?;
        let reach = anga.max_span_days();
        self.find(anga, idx, jd_ut - reach, jd_ut + reach, frame)
    }

    /// First change of `anga` within `[jd_start, jd_end]`.
    pub fn next_transit(
        &self,
        anga: AngaType,
        jd_start: f64,
        jd_end: f64,
        frame: Ayanamsha,
    ) -> Result<Option<Transit>, AngaError> {
        check_window(jd_start, jd_end)?;

        let step = anga.scan_step_days();
        let mut t_prev = jd_start;
        let mut idx_prev = self.index_at(anga, t_prev, frame)?;

        while t_prev < jd_end {
            let t_next = (t_prev + step).min(jd_end);
            let idx_next = self.index_at(anga, t_next, frame)?;
            if idx_next != idx_prev {
                let jd = self.refine_exit(anga, idx_prev, t_prev, t_next, frame)?;
                return Ok(Some(Transit {
                    anga_type: anga,
                    jd,
                    from_index: idx_prev,
                    to_index: idx_next,
                }));
            }
            t_prev = t_next;
            idx_prev = idx_next;
        }
        Ok(None)
    }

    /// Start of the occurrence of `anga` holding at `jd_ut`, looking back at
    /// most `lookback_days`.
    pub fn previous_transit(
        &self,
        anga: AngaType,
        jd_ut: f64,
        lookback_days: f64,
        frame: Ayanamsha,
    ) -> Result<Option<f64>, AngaError> {
        let idx = self.index_at(anga, jd_ut, frame)?;
        let span = self.find(anga, idx, jd_ut - lookback_days, jd_ut, frame)?;
        Ok(span.start)
    }

    /// Refine the instant at which `anga` leaves `from_index`, bracketed by
    /// `[t_a, t_b]` with `from_index` holding at `t_a` and not at `t_b`.
    fn refine_exit(
        &self,
        anga: AngaType,
        from_index: u32,
        t_a: f64,
        t_b: f64,
        frame: Ayanamsha,
    ) -> Result<f64, AngaError> {
        let boundary = f64::from(from_index) * anga.arc_deg();
        let f_at = |t: f64| -> Result<f64, AngaError> {
            let lon = anga_longitude_at(self.provider, anga, t, frame)?;
            Ok(normalize_to_pm180(lon - boundary))
        };
        let f_a = f_at(t_a)?;
        bisect_zero(t_a, f_a, t_b, &self.config, f_at)
    }
}

fn check_window(jd_start: f64, jd_end: f64) -> Result<(), AngaError> {
    if jd_end > jd_start {
        Ok(())
    } else {
        Err(AngaError::InvalidWindow {
            start: jd_start,
            end: jd_end,
        })
    }
}

/// Next zodiac-sign change of `body` within `[jd_start, jd_end]` in `frame`.
pub fn next_sign_transit(
    provider: &dyn EphemerisProvider,
    body: Body,
    jd_start: f64,
    jd_end: f64,
    frame: Ayanamsha,
    config: SearchConfig,
) -> Result<Option<Transit>, AngaError> {
    let anga = match body {
        Body::Sun => AngaType::SolarRaashi,
        Body::Moon => AngaType::Raashi,
    };
    AngaSpanFinder::new(provider, config)?.next_transit(anga, jd_start, jd_end, frame)
}

/// Convenience wrapper around [`AngaSpanFinder::find`] with default settings.
pub fn find_anga_span(
    provider: &dyn EphemerisProvider,
    anga: AngaType,
    target: u32,
    jd_start: f64,
    jd_end: f64,
    frame: Ayanamsha,
) -> Result<AngaSpan, AngaError> {
    AngaSpanFinder::new(provider, SearchConfig::default())?
        .find(anga, target, jd_start, jd_end, frame)
}
