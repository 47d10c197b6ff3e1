use chrono::{Local, NaiveTime, Timelike};

pub const CLOCK_PLACEHOLDER: &str = "--:--";

pub trait Clock {
    fn now(&self) -> NaiveTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Formats a time the way ko-KR shows a two-digit hour and minute:
/// a 12-hour clock with an 오전/오후 prefix.
pub fn format_clock(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let period = if pm { "오후" } else { "오전" };
    format!("{} {:02}:{:02}", period, hour, time.minute())
}

pub fn read_clock(clock: &impl Clock) -> String {
    format_clock(clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(NaiveTime);

    impl Clock for Fixed {
        fn now(&self) -> NaiveTime {
            self.0
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn evening_is_pm_with_padded_hour() {
        assert_eq!(format_clock(at(19, 30)), "오후 07:30");
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(format_clock(at(0, 5)), "오전 12:05");
        assert_eq!(format_clock(at(12, 0)), "오후 12:00");
    }

    #[test]
    fn reads_from_injected_clock() {
        assert_eq!(read_clock(&Fixed(at(9, 7))), "오전 09:07");
    }
}
