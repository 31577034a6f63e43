const MS_PER_DAY: u64 = 86_400_000;

/// Title given to a painting completed at `created_ms` (Unix epoch, UTC)
///
/// Formats as `Painting YYYY-MM-DD`.
pub fn default_title(created_ms: u64) -> String {
    let (year, month, day) = civil_from_days((created_ms / MS_PER_DAY) as i64);
    format!("Painting {year:04}-{month:02}-{day:02}")
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(default_title(0), "Painting 1970-01-01");
    }

    #[test]
    fn test_known_dates() {
        // 2000-02-29 00:00:00 UTC
        assert_eq!(default_title(951_782_400_000), "Painting 2000-02-29");
        // 2024-12-31 23:59:59 UTC
        assert_eq!(default_title(1_735_689_599_000), "Painting 2024-12-31");
    }
}
