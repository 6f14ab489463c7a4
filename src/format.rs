//! Time and date string formatting.
//!
//! Strings are built into fixed-size `heapless::String` buffers with
//! `core::fmt::Write`, so a tick never allocates. Month and weekday names
//! come from match tables rather than locale data; the face only ever shows
//! English three-letter abbreviations.

use core::fmt::Write;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use heapless::String;

/// Capacity of the time string buffer ("HH:MM" plus slack).
pub const TIME_STR_LEN: usize = 8;

/// Capacity of the date string buffer ("Dow Mon D" plus slack).
pub const DATE_STR_LEN: usize = 16;

/// Hour presentation preference, the watch equivalent of the host locale's
/// 12/24-hour setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockStyle {
    /// 12-hour clock, zero-padded hour, no AM/PM suffix.
    H12,
    /// 24-hour clock.
    H24,
}

impl ClockStyle {
    /// Switch between the two presentations.
    pub const fn toggle(self) -> Self {
        match self {
            Self::H12 => Self::H24,
            Self::H24 => Self::H12,
        }
    }
}

/// Format an instant as "HH:MM" according to the clock style.
///
/// The 12-hour form keeps the zero-padded two-digit hour (07:09, 12:00);
/// there is no room for an AM/PM marker on the face.
pub fn time_string(time: &NaiveDateTime, style: ClockStyle) -> String<TIME_STR_LEN> {
    let hour = match style {
        ClockStyle::H24 => time.hour(),
        ClockStyle::H12 => time.hour12().1,
    };
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}", hour, time.minute());
    s
}

/// Format an instant as "Dow Mon D", e.g. "Tue Mar 5".
///
/// The day of month is unpadded.
pub fn date_string(time: &NaiveDateTime) -> String<DATE_STR_LEN> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{} {} {}",
        weekday_name(time.weekday()),
        month_name(time.month0()),
        time.day()
    );
    s
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn month_name(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        _ => "Dec",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    // -------------------------------------------------------------------------
    // Time Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_time_string_24h() {
        let t = instant(2024, 3, 5, 7, 9);
        assert_eq!(
            time_string(&t, ClockStyle::H24).as_str(),
            "07:09",
            "24h morning time should be zero-padded"
        );
    }

    #[test]
    fn test_time_string_12h_morning() {
        let t = instant(2024, 3, 5, 7, 9);
        assert_eq!(
            time_string(&t, ClockStyle::H12).as_str(),
            "07:09",
            "12h morning time matches the 24h rendering before noon"
        );
    }

    #[test]
    fn test_time_string_12h_evening() {
        let t = instant(2024, 3, 5, 19, 9);
        assert_eq!(
            time_string(&t, ClockStyle::H12).as_str(),
            "07:09",
            "12h clock should wrap 19:09 to 07:09"
        );
        assert_eq!(
            time_string(&t, ClockStyle::H24).as_str(),
            "19:09",
            "24h clock should not wrap"
        );
    }

    #[test]
    fn test_time_string_12h_midnight_and_noon() {
        let midnight = instant(2024, 3, 5, 0, 0);
        let noon = instant(2024, 3, 5, 12, 0);
        assert_eq!(
            time_string(&midnight, ClockStyle::H12).as_str(),
            "12:00",
            "12h midnight is hour 12"
        );
        assert_eq!(
            time_string(&noon, ClockStyle::H12).as_str(),
            "12:00",
            "12h noon is hour 12"
        );
        assert_eq!(
            time_string(&midnight, ClockStyle::H24).as_str(),
            "00:00",
            "24h midnight is 00:00"
        );
    }

    #[test]
    fn test_time_string_fits_buffer() {
        // "HH:MM" is 5 chars; the write must never be truncated
        let t = instant(2024, 12, 31, 23, 59);
        let s = time_string(&t, ClockStyle::H24);
        assert_eq!(s.len(), 5, "time string should be exactly 5 chars");
        assert_eq!(s.as_str(), "23:59");
    }

    // -------------------------------------------------------------------------
    // Date Formatting Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_date_string() {
        // 2024-03-05 was a Tuesday
        let t = instant(2024, 3, 5, 7, 9);
        assert_eq!(
            date_string(&t).as_str(),
            "Tue Mar 5",
            "date should render as Dow Mon D with unpadded day"
        );
    }

    #[test]
    fn test_date_string_two_digit_day() {
        // 2024-12-25 was a Wednesday
        let t = instant(2024, 12, 25, 0, 0);
        assert_eq!(date_string(&t).as_str(), "Wed Dec 25");
    }

    #[test]
    fn test_date_string_fits_buffer() {
        // Longest possible form is "Dow Mon DD" = 10 chars
        let t = instant(2024, 9, 28, 0, 0);
        let s = date_string(&t);
        assert!(
            s.len() <= DATE_STR_LEN,
            "date string should fit the fixed buffer"
        );
        assert_eq!(s.as_str(), "Sat Sep 28");
    }

    #[test]
    fn test_month_names_cover_year() {
        let expected = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (month0, name) in expected.iter().enumerate() {
            assert_eq!(
                month_name(month0 as u32),
                *name,
                "month0 {month0} should map to {name}"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Clock Style Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_clock_style_toggle() {
        assert_eq!(ClockStyle::H24.toggle(), ClockStyle::H12);
        assert_eq!(ClockStyle::H12.toggle(), ClockStyle::H24);
        assert_eq!(
            ClockStyle::H24.toggle().toggle(),
            ClockStyle::H24,
            "toggle should be an involution"
        );
    }
}
