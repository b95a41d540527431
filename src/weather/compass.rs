const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a wind bearing in degrees to a 16-point compass label
///
/// Sectors are 22.5 degrees wide and centered on each point, so 11 is still
/// "N" and 12 is "NNE". Any integer is accepted; values wrap around.
pub fn compass_direction(degrees: i32) -> &'static str {
    let sector = (f64::from(degrees) / 22.5 + 0.5).floor() as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}
