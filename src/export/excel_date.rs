use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Try to interpret a cell as a date or a time in the sheet formats,
/// returning the Excel serial plus a number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(("dd/mm/yyyy", naive_datetime_to_excel_serial(&dt)));
    }

    let time_formats = ["%H:%M:%S", "%H:%M"];

    for fmt in time_formats.iter() {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            let seconds = t.num_seconds_from_midnight() as f64;
            let num_format = if *fmt == "%H:%M:%S" { "h:mm:ss" } else { "hh:mm" };
            return Some((num_format, seconds / 86400.0));
        }
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
