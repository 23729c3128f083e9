//! Solar boundary time resolution.
//!
//! Produces the three local boundary times (sunrise, solar noon, sunset)
//! the monitor classifies against. Sunrise and sunset come from the
//! external time-service keyed by the acquired position; solar noon is
//! always the fallback constant. Every failure mode degrades to the
//! fallback times and is logged, never propagated: the caller starts
//! monitoring with whatever this module returns.

pub mod api;
pub mod location;

pub use api::{SolarInstants, SolarTimeService, SunriseSunsetApi};
pub use location::{Coordinates, IpLocationProvider, LocationProvider};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveTime;
use chrono_tz::Tz;

use crate::constants::{DEFAULT_NOON, DEFAULT_SUNRISE, DEFAULT_SUNSET};

/// The three local boundary times the day is classified against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryTimes {
    pub sunrise: NaiveTime,
    /// Immutable after initialization; never updated from the time-service.
    pub noon: NaiveTime,
    pub sunset: NaiveTime,
}

impl BoundaryTimes {
    /// The compile-time fallback boundaries (06:00 / 12:00 / 18:00).
    pub fn fallback() -> Self {
        Self {
            sunrise: NaiveTime::parse_from_str(DEFAULT_SUNRISE, "%H:%M:%S").unwrap(),
            noon: NaiveTime::parse_from_str(DEFAULT_NOON, "%H:%M:%S").unwrap(),
            sunset: NaiveTime::parse_from_str(DEFAULT_SUNSET, "%H:%M:%S").unwrap(),
        }
    }

    /// Boundaries with a resolved sunrise/sunset pair and the fixed noon.
    ///
    /// The pair is applied as a unit; there is no path that overwrites only
    /// one of the two.
    fn with_solar_pair(sunrise: NaiveTime, sunset: NaiveTime) -> Self {
        Self {
            sunrise,
            sunset,
            ..Self::fallback()
        }
    }
}

/// Resolve the boundary times, degrading to the fallback constants on any
/// failure.
///
/// `provider` is `None` when the location capability is unavailable. All
/// paths return usable times; callers start the monitor unconditionally with
/// the result.
pub fn resolve_boundary_times(
    provider: Option<&dyn LocationProvider>,
    service: &dyn SolarTimeService,
) -> BoundaryTimes {
    let Some(provider) = provider else {
        log_pipe!();
        log_warning!("Location lookup unavailable, using fallback times");
        return BoundaryTimes::fallback();
    };

    let coords = match provider.current_position() {
        Ok(coords) => coords,
        Err(e) => {
            log_pipe!();
            log_warning!("Failed to acquire position: {e}");
            log_indented!("Using fallback sunrise/sunset times");
            return BoundaryTimes::fallback();
        }
    };

    match fetch_local_solar_pair(coords, service) {
        Ok((sunrise, sunset)) => {
            log_block_start!("Solar times set from {}", service.service_name());
            log_indented!(
                "Sunrise {}, sunset {}",
                sunrise.format("%H:%M"),
                sunset.format("%H:%M")
            );
            BoundaryTimes::with_solar_pair(sunrise, sunset)
        }
        Err(e) => {
            log_pipe!();
            log_warning!("Solar time lookup failed: {e}");
            log_indented!("Using fallback sunrise/sunset times");
            BoundaryTimes::fallback()
        }
    }
}

/// Fetch the UTC solar instants and convert both to the local zone.
fn fetch_local_solar_pair(
    coords: Coordinates,
    service: &dyn SolarTimeService,
) -> Result<(NaiveTime, NaiveTime)> {
    let instants = service.solar_instants(coords)?;
    let tz = local_timezone()?;
    Ok(local_solar_pair(instants, tz))
}

/// Convert UTC instants to local wall-clock times in the given zone.
fn local_solar_pair(instants: SolarInstants, tz: Tz) -> (NaiveTime, NaiveTime) {
    (
        instants.sunrise.with_timezone(&tz).time(),
        instants.sunset.with_timezone(&tz).time(),
    )
}

/// Resolve the IANA identifier of the ambient local time zone.
fn local_timezone() -> Result<Tz> {
    let name =
        iana_time_zone::get_timezone().context("could not determine the local time zone")?;
    name.parse::<Tz>()
        .map_err(|e| anyhow!("unrecognized time zone {name:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Log;
    use chrono::{TimeZone, Timelike, Utc};

    struct FixedLocation(Coordinates);

    impl LocationProvider for FixedLocation {
        fn current_position(&self) -> Result<Coordinates> {
            Ok(self.0)
        }
    }

    struct FailingLocation;

    impl LocationProvider for FailingLocation {
        fn current_position(&self) -> Result<Coordinates> {
            Err(anyhow!("position acquisition timed out"))
        }
    }

    struct FixedService(SolarInstants);

    impl SolarTimeService for FixedService {
        fn solar_instants(&self, _coords: Coordinates) -> Result<SolarInstants> {
            Ok(self.0)
        }

        fn service_name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingService;

    impl SolarTimeService for FailingService {
        fn solar_instants(&self, _coords: Coordinates) -> Result<SolarInstants> {
            Err(anyhow!("connection reset by peer"))
        }

        fn service_name(&self) -> &'static str {
            "failing"
        }
    }

    fn berlin() -> Coordinates {
        Coordinates {
            latitude: 52.52,
            longitude: 13.405,
        }
    }

    #[test]
    fn fallback_times_match_the_constants() {
        let times = BoundaryTimes::fallback();
        assert_eq!(times.sunrise, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(times.noon, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(times.sunset, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn missing_capability_yields_fallback() {
        Log::set_enabled(false);
        let times = resolve_boundary_times(None, &FailingService);
        assert_eq!(times, BoundaryTimes::fallback());
    }

    #[test]
    fn acquisition_failure_yields_fallback() {
        Log::set_enabled(false);
        let times = resolve_boundary_times(Some(&FailingLocation), &FixedService(SolarInstants {
            sunrise: Utc.with_ymd_and_hms(2026, 6, 21, 3, 47, 33).unwrap(),
            sunset: Utc.with_ymd_and_hms(2026, 6, 21, 19, 47, 33).unwrap(),
        }));
        assert_eq!(times, BoundaryTimes::fallback());
    }

    #[test]
    fn fetch_failure_leaves_the_pair_untouched() {
        Log::set_enabled(false);
        let times = resolve_boundary_times(Some(&FixedLocation(berlin())), &FailingService);
        assert_eq!(times, BoundaryTimes::fallback());
    }

    #[test]
    fn successful_fetch_overwrites_sunrise_and_sunset_but_not_noon() {
        Log::set_enabled(false);
        let instants = SolarInstants {
            sunrise: Utc.with_ymd_and_hms(2026, 6, 21, 3, 47, 33).unwrap(),
            sunset: Utc.with_ymd_and_hms(2026, 6, 21, 19, 47, 33).unwrap(),
        };
        let times = resolve_boundary_times(Some(&FixedLocation(berlin())), &FixedService(instants));

        let fallback = BoundaryTimes::fallback();
        assert_eq!(times.noon, fallback.noon);

        match local_timezone() {
            Ok(tz) => {
                let (sunrise, sunset) = local_solar_pair(instants, tz);
                assert_eq!(times.sunrise, sunrise);
                assert_eq!(times.sunset, sunset);
            }
            // Without a resolvable local zone the fetch degrades to fallback.
            Err(_) => assert_eq!(times, fallback),
        }
    }

    #[test]
    fn conversion_respects_the_given_zone() {
        let instants = SolarInstants {
            sunrise: Utc.with_ymd_and_hms(2026, 6, 21, 10, 26, 14).unwrap(),
            sunset: Utc.with_ymd_and_hms(2026, 6, 22, 0, 30, 51).unwrap(),
        };

        // New York observes EDT (UTC-4) on that date.
        let (sunrise, sunset) = local_solar_pair(instants, chrono_tz::America::New_York);
        assert_eq!((sunrise.hour(), sunrise.minute()), (6, 26));
        assert_eq!((sunset.hour(), sunset.minute()), (20, 30));

        // A sunset that crosses midnight in UTC stays on the local clock.
        let (sunrise_utc, sunset_utc) = local_solar_pair(instants, chrono_tz::Tz::UTC);
        assert_eq!((sunrise_utc.hour(), sunrise_utc.minute()), (10, 26));
        assert_eq!((sunset_utc.hour(), sunset_utc.minute()), (0, 30));
    }
}
