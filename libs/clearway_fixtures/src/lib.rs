//! Route and location-trace fixtures shared by the workspace tests.

/// Seoul City Hall to Seoul Station, fully populated instructions.
pub const CITY_HALL_TO_SEOUL_STATION: &str = "city_hall_to_seoul_station.json";
/// A route whose backend returned a path but no instructions.
pub const PATH_ONLY: &str = "path_only.json";
/// Alternate keys, wrong types and malformed entries.
pub const IRREGULAR_PAYLOAD: &str = "irregular_payload.json";
/// Walking trace along [`CITY_HALL_TO_SEOUL_STATION`], as `[lat, lng]` pairs.
pub const CITY_HALL_TRACE: &str = "city_hall_trace.json";

/// Absolute path of a fixture file.
pub fn fixture_path(file: &str) -> String {
    format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), file)
}

/// Reads a fixture into a string, panicking with the path on failure.
pub fn read_fixture(file: &str) -> String {
    let path = fixture_path(file);
    std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("cannot read {path}: {err}"))
}
