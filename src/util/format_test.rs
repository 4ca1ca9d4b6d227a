use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn native_fallback_prints_raw_seconds() {
    assert_eq!(format_unix_seconds(1_700_000_600), "1700000600");
    assert_eq!(format_unix_seconds(0), "0");
}
