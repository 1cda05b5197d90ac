use chrono::NaiveDateTime;

/// Year placed on `DD-MM_HH-MM` run names, which carry none of their own.
///
/// Short names therefore always order before any `RUN_` name, and comparisons between two short
/// names only hold within a single calendar year.
pub const IMPLICIT_YEAR: i32 = 1900;

const RUN_PREFIX: &str = "RUN_";
const FULL_FORMAT: &str = "%Y.%m.%d_%H.%M.%S";
const SHORT_FORMAT: &str = "%Y/%d-%m_%H-%M";

/// Parse the timestamp embedded in a run directory name.
///
/// Two layouts are recognised:
///     - `RUN_<year>.<month>.<day>_<hour>.<minute>.<second>` with a four digit year
///     - `<day>-<month>_<hour>-<minute>`, placed in [IMPLICIT_YEAR]
///
/// Anything else yields `None`, which orders before every parsed timestamp.
pub fn parse_run_timestamp(name: &str) -> Option<NaiveDateTime> {
    match name.strip_prefix(RUN_PREFIX) {
        Some(stamp) => parse_full(stamp),
        None => parse_short(name),
    }
}

fn parse_full(stamp: &str) -> Option<NaiveDateTime> {
    let (date, time) = stamp.split_once('_')?;
    let year = date.split('.').next()?;
    if year.len() != 4 || !all_digit_groups(date, '.') || !all_digit_groups(time, '.') {
        return None;
    }
    NaiveDateTime::parse_from_str(stamp, FULL_FORMAT).ok()
}

fn parse_short(name: &str) -> Option<NaiveDateTime> {
    let (date, time) = name.split_once('_')?;
    if !all_digit_groups(date, '-') || !all_digit_groups(time, '-') {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{IMPLICIT_YEAR}/{name}"), SHORT_FORMAT).ok()
}

/// `true` when `s` is non-empty digit runs joined by `sep`.
fn all_digit_groups(s: &str, sep: char) -> bool {
    s.split(sep)
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_should_parse_full_run_name() {
        assert_eq!(
            parse_run_timestamp("RUN_2024.03.17_09.41.07"),
            Some(at(2024, 3, 17, 9, 41, 7))
        );
    }

    #[test]
    fn test_should_parse_short_run_name_in_implicit_year() {
        assert_eq!(
            parse_run_timestamp("17-03_09-41"),
            Some(at(IMPLICIT_YEAR, 3, 17, 9, 41, 0))
        );
    }

    #[test]
    fn test_should_not_parse_unrecognised_names() {
        for name in [
            "my_experiment",
            "RUN_latest",
            "RUN_24.03.17_09.41.07",
            "RUN_2024.03.17_09.41.07_extra",
            "RUN_2024.13.17_09.41.07",
            "17-03_09-41-55",
            "17-03",
            "",
        ] {
            assert_eq!(parse_run_timestamp(name), None, "{name}");
        }
    }

    #[test]
    fn test_should_order_unparsed_before_any_timestamp() {
        let unparsed = parse_run_timestamp("scratch");
        let short = parse_run_timestamp("01-01_00-00");
        let full = parse_run_timestamp("RUN_2020.01.01_00.00.00");
        assert!(unparsed < short);
        assert!(short < full);
    }
}
