//! Application constants for the geotagging pipeline.
//!
//! Placeholder image geometry, output naming conventions, and the
//! canonical field names produced by the extractor catalog.

// =============================================================================
// Placeholder Images
// =============================================================================

/// Pixel dimensions of the blank placeholder images (4:3 still-camera
/// resolution, so the embedded tags look plausible downstream)
pub const PLACEHOLDER_WIDTH: u32 = 4000;
pub const PLACEHOLDER_HEIGHT: u32 = 3000;

/// Directory created under the output root to hold the placeholders
pub const DUMMY_DIR_NAME: &str = "dummies";

/// Placeholder file naming: IMG_0001.JPG, IMG_0002.JPG, ...
pub const IMAGE_FILE_PREFIX: &str = "IMG_";
pub const IMAGE_FILE_EXTENSION: &str = "JPG";

// =============================================================================
// Export
// =============================================================================

/// Suffix appended to the log file stem for the cleaned CSV
pub const CSV_SUFFIX: &str = "_cleaned.csv";

/// Fixed export column order; ExifTool reads these tag names verbatim
pub const CSV_HEADER: [&str; 4] = ["SourceFile", "GPSLatitude", "GPSLongitude", "GPSAltitude"];

/// Default embedding executable, resolved via PATH
pub const DEFAULT_EXIFTOOL: &str = "exiftool";

// =============================================================================
// Log Format
// =============================================================================

/// chrono format of the record-boundary timestamps (`2024:01:01 10:00:00.000000`)
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y:%m:%d %H:%M:%S%.f";

/// Canonical field names assembled into flight records
pub mod fields {
    pub const PRESSURE_ALTITUDE: &str = "PressureAltitude";
    pub const IMU_TEMPERATURE: &str = "IMUTemperature";
    pub const BARO_TEMPERATURE: &str = "BaroTemperature";
    pub const FLIGHT_MODE: &str = "FlightMode";
    pub const GPS_SATELLITES: &str = "GPSSatellites";
    pub const GPS_PRECISION: &str = "GPSPrecision";
    pub const AIRCRAFT_LAT: &str = "AircraftLat";
    pub const AIRCRAFT_LON: &str = "AircraftLon";
    pub const REMOTE_LAT: &str = "RemoteLat";
    pub const REMOTE_LON: &str = "RemoteLon";
    pub const PITCH: &str = "Pitch";
    pub const ROLL: &str = "Roll";
    pub const YAW: &str = "Yaw";
    pub const MAGNETIC_INTERFERENCE: &str = "MagneticInterference";
    pub const BATTERY_VOLTAGE: &str = "BatteryVoltage";
    pub const ALTITUDE: &str = "Altitude";
    pub const MAX_FLIGHT_ALTITUDE: &str = "MaxFlightAltitude";
    pub const MAX_FLIGHT_DISTANCE: &str = "MaxFlightDistance";
    pub const RETURN_ALTITUDE: &str = "ReturnAltitude";
    pub const STICK_LEFT_RIGHT: &str = "StickLeftRight";
    pub const STICK_FORWARD_BACK: &str = "StickForwardBack";
    pub const STICK_THROTTLE: &str = "StickThrottle";
    pub const STICK_YAW: &str = "StickYaw";
    pub const AIRCRAFT_MODEL: &str = "AircraftModel";
    pub const FIRMWARE_VERSION: &str = "FirmwareVersion";
}
