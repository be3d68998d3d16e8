use chrono::{DateTime, Utc};

/// Returns the current UTC datetime formatted as an RFC 9557 style string
/// with millisecond precision, e.g. `2026-08-05T14:07:02.123Z`.
pub fn current_datetime_rfc9557() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc9557_timestamp_has_expected_shape() {
        let ts = current_datetime_rfc9557();
        // 2026-08-05T14:07:02.123Z
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }
}
