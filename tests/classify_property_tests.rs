use chrono::{NaiveTime, Timelike};
use proptest::prelude::*;

use greetr::monitor::{TimeOfDay, classify};
use greetr::solar::BoundaryTimes;

/// Generate any minute-resolution wall-clock time
fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60)
        .prop_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

/// Generate arbitrary boundary triples, ordered or not
fn boundary_strategy() -> impl Strategy<Value = BoundaryTimes> {
    (time_strategy(), time_strategy(), time_strategy()).prop_map(|(sunrise, noon, sunset)| {
        BoundaryTimes {
            sunrise,
            noon,
            sunset,
        }
    })
}

proptest! {
    /// classify returns exactly one label for every instant and boundary
    /// triple, including malformed orderings.
    #[test]
    fn classify_is_total(now in time_strategy(), times in boundary_strategy()) {
        let label = classify(now, &times);
        prop_assert!(matches!(
            label,
            TimeOfDay::Morning | TimeOfDay::Afternoon | TimeOfDay::Night
        ));
    }

    /// With the default boundaries the three intervals partition the day.
    #[test]
    fn default_boundaries_partition_the_day(now in time_strategy()) {
        let times = BoundaryTimes::fallback();
        let minutes = now.hour() * 60 + now.minute();

        let expected = if (360..720).contains(&minutes) {
            TimeOfDay::Morning
        } else if (720..1080).contains(&minutes) {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Night
        };

        prop_assert_eq!(classify(now, &times), expected);
    }

    /// A boundary instant belongs to the interval that boundary opens, for
    /// any properly ordered triple.
    #[test]
    fn boundary_instants_open_their_interval(times in boundary_strategy()) {
        prop_assume!(times.sunrise < times.noon && times.noon < times.sunset);

        prop_assert_eq!(classify(times.sunrise, &times), TimeOfDay::Morning);
        prop_assert_eq!(classify(times.noon, &times), TimeOfDay::Afternoon);
        prop_assert_eq!(classify(times.sunset, &times), TimeOfDay::Night);
    }

    /// Fully reversed boundaries leave both intervals empty, so every
    /// instant classifies as Night.
    #[test]
    fn reversed_boundaries_classify_everything_as_night(now in time_strategy()) {
        let times = BoundaryTimes {
            sunrise: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            noon: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        };

        prop_assert_eq!(classify(now, &times), TimeOfDay::Night);
    }
}
