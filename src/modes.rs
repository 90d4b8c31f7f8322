//! Flight-mode label translation.
//!
//! The log emits localized mode labels; downstream consumers expect the
//! canonical English names. Labels missing from the table pass through
//! unchanged so an unrecognized mode is still visible in the output.

/// Localized flight-mode labels and their canonical names
const MODE_TABLE: &[(&str, &str)] = &[
    ("手动模式", "Manual"),
    ("定点模式", "Position Hold"),
    ("GPS模式", "GPS Mode"),
    ("返航模式", "Return Home"),
    ("起飞", "Takeoff"),
    ("降落", "Landing"),
    ("智能", "Smart Mode"),
    ("跟随", "Follow Me"),
    ("环绕", "Orbit"),
    ("航点", "Waypoint"),
    ("姿态模式", "Attitude Mode"),
];

/// Translate a raw mode label to its canonical name
pub fn translate(raw: &str) -> &str {
    MODE_TABLE
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(raw)
}
