use super::*;

#[test]
fn utc_clock_formats_epoch_as_midnight() {
    assert_eq!(utc_clock(0.0), "00:00:00");
}

#[test]
fn utc_clock_wraps_days() {
    // 1970-01-02T13:45:07.250Z
    let ms = (86_400.0 + 13.0 * 3600.0 + 45.0 * 60.0 + 7.0) * 1000.0 + 250.0;
    assert_eq!(utc_clock(ms), "13:45:07");
}

#[test]
fn utc_clock_treats_invalid_as_epoch() {
    assert_eq!(utc_clock(f64::NAN), "00:00:00");
    assert_eq!(utc_clock(-5.0), "00:00:00");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
