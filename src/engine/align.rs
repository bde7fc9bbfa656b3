use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::engine::time::parse_on;

/// Actual and scheduled shift bounds normalized onto one anchor date.
/// After alignment the two intervals are directly comparable even when
/// either one crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedShift {
    pub actual_in: NaiveDateTime,
    pub actual_out: NaiveDateTime,
    pub sched_in: NaiveDateTime,
    pub sched_out: NaiveDateTime,
}

/// Resolve midnight crossing for the actual and scheduled pairs
/// independently: an out-time earlier than its in-time belongs to the
/// next calendar day, so it gets +24h. Fails if any of the four inputs
/// does not parse; callers degrade to zero metrics.
pub fn align(
    time_in: &str,
    time_out: &str,
    sched_in: &str,
    sched_out: &str,
    date: NaiveDate,
) -> Option<AlignedShift> {
    let actual_in = parse_on(time_in, date)?;
    let mut actual_out = parse_on(time_out, date)?;
    let sched_in = parse_on(sched_in, date)?;
    let mut sched_out = parse_on(sched_out, date)?;

    if actual_out < actual_in {
        actual_out += Duration::hours(24);
    }
    if sched_out < sched_in {
        sched_out += Duration::hours(24);
    }

    Some(AlignedShift {
        actual_in,
        actual_out,
        sched_in,
        sched_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn day_shift_stays_on_anchor_date() {
        let a = align("08:00", "17:00", "08:00", "17:00", day()).unwrap();
        assert_eq!(a.actual_in, day().and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(a.actual_out, day().and_hms_opt(17, 0, 0).unwrap());
        assert_eq!((a.sched_out - a.sched_in).num_minutes(), 540);
    }

    #[test]
    fn night_shift_out_rolls_to_next_day() {
        let a = align("22:00", "06:00", "22:00", "06:00", day()).unwrap();
        let next = day().succ_opt().unwrap();
        assert_eq!(a.actual_out, next.and_hms_opt(6, 0, 0).unwrap());
        assert_eq!(a.sched_out, next.and_hms_opt(6, 0, 0).unwrap());
        assert_eq!((a.actual_out - a.actual_in).num_minutes(), 480);
    }

    #[test]
    fn pairs_roll_independently() {
        // actual ended before midnight, schedule runs past it
        let a = align("22:00", "23:30", "22:00", "06:00", day()).unwrap();
        assert_eq!(a.actual_out, day().and_hms_opt(23, 30, 0).unwrap());
        assert_eq!(
            a.sched_out,
            day().succ_opt().unwrap().and_hms_opt(6, 0, 0).unwrap()
        );
    }

    #[test]
    fn any_unparseable_input_fails_alignment() {
        assert!(align("-", "17:00", "08:00", "17:00", day()).is_none());
        assert!(align("08:00", "17:00", "08:00", "bogus", day()).is_none());
    }
}
