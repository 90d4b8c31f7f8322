//! Labeled-field extraction from raw log lines.
//!
//! The log interleaves telemetry facts with free-form noise; labels are
//! localized, order varies line to line, and several lines carry more than
//! one fact. Extraction runs a declarative catalog of patterns over each
//! line: one compiled regex per pattern family, with one `(name, decode)`
//! entry per capture group. Logically paired values (a coordinate pair, the
//! attitude triple) are captured by a single pattern spanning the whole
//! sub-string so a latitude can never be paired with a longitude from a
//! different update.
//!
//! Extraction is total: a line matching nothing yields an empty set, and a
//! capture that fails to decode rejects its whole pattern rather than the
//! line or the run.

use crate::constants::fields;
use crate::models::FieldValue;
use crate::modes;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// How one capture group decodes into a [`FieldValue`]
#[derive(Debug, Clone, Copy)]
enum Decode {
    Float,
    Int,
    Text,
    /// Mode token: trimmed of separator punctuation, then translated
    Mode,
}

/// One entry of the pattern catalog: a regex whose capture groups map
/// positionally onto canonical field names
struct FieldPattern {
    regex: Regex,
    captures: &'static [(&'static str, Decode)],
}

lazy_static! {
    static ref BOUNDARY_RE: Regex =
        Regex::new(r"(\d{4}:\d{2}:\d{2} \d{2}:\d{2}:\d{2}\.\d+)").unwrap();
    static ref CATALOG: Vec<FieldPattern> = build_catalog();
}

fn entry(pattern: &str, captures: &'static [(&'static str, Decode)]) -> FieldPattern {
    let regex = Regex::new(pattern).expect("field pattern must compile");
    assert_eq!(
        regex.captures_len() - 1,
        captures.len(),
        "capture arity mismatch in field pattern"
    );
    FieldPattern { regex, captures }
}

/// The full catalog, evaluated in this order on every line. Adding a field
/// family is one new entry; control flow never changes.
fn build_catalog() -> Vec<FieldPattern> {
    vec![
        entry(
            r"气压高度[:：](\d+)",
            &[(fields::PRESSURE_ALTITUDE, Decode::Float)],
        ),
        entry(
            r"IMU温度[:：](\d+)",
            &[(fields::IMU_TEMPERATURE, Decode::Float)],
        ),
        entry(
            r"气压温度[:：](\d+)",
            &[(fields::BARO_TEMPERATURE, Decode::Float)],
        ),
        entry(
            r"飞行模式\s*[:：]\s*([^\s-]+)",
            &[(fields::FLIGHT_MODE, Decode::Mode)],
        ),
        entry(
            r"GPS卫星数[:：](\d+),\s*精度[:：]([\d.]+)",
            &[
                (fields::GPS_SATELLITES, Decode::Int),
                (fields::GPS_PRECISION, Decode::Float),
            ],
        ),
        entry(
            r"飞机坐标:\(Lat:([\d.\-]+),Lon:([\d.\-]+)",
            &[
                (fields::AIRCRAFT_LAT, Decode::Float),
                (fields::AIRCRAFT_LON, Decode::Float),
            ],
        ),
        entry(
            r"遥控器坐标:\(Lat:([\d.\-]+), Lon:([\d.\-]+)",
            &[
                (fields::REMOTE_LAT, Decode::Float),
                (fields::REMOTE_LON, Decode::Float),
            ],
        ),
        entry(
            r"俯仰角[:：]([\-\d.]+)\s+横滚角[:：]([\-\d.]+)\s+偏航角[:：]([\-\d.]+)",
            &[
                (fields::PITCH, Decode::Float),
                (fields::ROLL, Decode::Float),
                (fields::YAW, Decode::Float),
            ],
        ),
        entry(
            r"地磁干扰量[:：](\d+)",
            &[(fields::MAGNETIC_INTERFERENCE, Decode::Int)],
        ),
        // Unit suffixes are anchored in the pattern but dropped from the value
        entry(
            r"飞机电压[:：]([\d.]+)V",
            &[(fields::BATTERY_VOLTAGE, Decode::Float)],
        ),
        entry(r"飞行高度[:：](\d+)m", &[(fields::ALTITUDE, Decode::Float)]),
        entry(
            r"最大飞行高度[:：](\d+)",
            &[(fields::MAX_FLIGHT_ALTITUDE, Decode::Float)],
        ),
        entry(
            r"最大飞行距离[:：](\d+)",
            &[(fields::MAX_FLIGHT_DISTANCE, Decode::Float)],
        ),
        entry(
            r"最低返航高度[:：](\d+)",
            &[(fields::RETURN_ALTITUDE, Decode::Float)],
        ),
        entry(
            r"左右[:：](\d+),\s*前后[:：](\d+),\s*油门[:：](\d+),\s*旋转[:：](\d+)",
            &[
                (fields::STICK_LEFT_RIGHT, Decode::Int),
                (fields::STICK_FORWARD_BACK, Decode::Int),
                (fields::STICK_THROTTLE, Decode::Int),
                (fields::STICK_YAW, Decode::Int),
            ],
        ),
        entry(
            r"飞机型号[:：](\S+),\s*版本号[:：]\s*([\w.]+)",
            &[
                (fields::AIRCRAFT_MODEL, Decode::Text),
                (fields::FIRMWARE_VERSION, Decode::Text),
            ],
        ),
    ]
}

/// Timestamp marker that opens a new record, if present on the line
pub fn boundary_timestamp(line: &str) -> Option<&str> {
    BOUNDARY_RE.find(line).map(|m| m.as_str())
}

/// Extract every labeled field present on one physical line.
///
/// All capture groups of a pattern decode together or the pattern
/// contributes nothing; a partial compound never escapes.
pub fn extract(line: &str) -> Vec<(&'static str, FieldValue)> {
    let mut extracted = Vec::new();

    for pattern in CATALOG.iter() {
        let Some(caps) = pattern.regex.captures(line) else {
            continue;
        };

        let mut decoded = Vec::with_capacity(pattern.captures.len());
        for (position, (name, kind)) in pattern.captures.iter().enumerate() {
            let value = caps
                .get(position + 1)
                .and_then(|m| decode(m.as_str(), *kind));
            match value {
                Some(value) => decoded.push((*name, value)),
                None => {
                    trace!(field = name, line, "undecodable capture, skipping pattern");
                    decoded.clear();
                    break;
                }
            }
        }
        extracted.append(&mut decoded);
    }

    extracted
}

fn decode(text: &str, kind: Decode) -> Option<FieldValue> {
    match kind {
        Decode::Float => text.parse::<f64>().ok().map(FieldValue::Float),
        Decode::Int => text.parse::<i64>().ok().map(FieldValue::Int),
        Decode::Text => Some(FieldValue::Text(text.to_string())),
        Decode::Mode => {
            let token = text.trim_matches(|c: char| matches!(c, ':' | '：' | '-'));
            Some(FieldValue::Text(modes::translate(token).to_string()))
        }
    }
}
