/// Current UTC time in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for seating table IDs.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the UI
/// can keep treating ids as numbers):
///   - 41 bits: milliseconds since 2024-01-01 UTC
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000);
    (ts << 12) | rand_bits
}

/// `count` distinct snowflake ids, for bulk imports within one millisecond
pub fn snowflake_ids(count: usize) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let id = snowflake_id();
        if seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    const JS_MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

    #[test]
    fn test_snowflake_fits_js_number() {
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= JS_MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_snowflake_ids_are_distinct() {
        let ids = snowflake_ids(200);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 200);
    }
}
