//! Shared constants: fallback boundary times, scheduling cadence, and
//! external service endpoints.

/// Fallback sunrise time, used until (and unless) real solar times resolve
pub const DEFAULT_SUNRISE: &str = "06:00:00";

/// Solar noon boundary. Never fetched from the time-service; always this value
pub const DEFAULT_NOON: &str = "12:00:00";

/// Fallback sunset time, used until (and unless) real solar times resolve
pub const DEFAULT_SUNSET: &str = "18:00:00";

/// Seconds between classify-and-apply passes in the monitor loop
pub const CHECK_INTERVAL_SECS: u64 = 60;

/// Acquisition timeout for the position lookup, in seconds
pub const GEOLOCATION_TIMEOUT_SECS: u64 = 5;

/// IP geolocation endpoint (unauthenticated)
pub const GEOLOCATION_URL: &str = "http://ip-api.com/json";

/// Sunrise/sunset time-service endpoint (unauthenticated)
pub const SOLAR_API_URL: &str = "https://api.sunrise-sunset.org/json";
