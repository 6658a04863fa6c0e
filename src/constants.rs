//! Unit conversions and the supported practice-distance range.

/// Conversion factor: miles per hour to feet per second.
///
/// Rounded to three decimals (exact value is 22/15 ≈ 1.46667). Every
/// conversion in the crate uses this value so results stay consistent
/// with published pitching-distance charts.
pub const FEET_PER_SECOND_PER_MPH: f64 = 1.467;

/// Shortest supported practice distance in feet (short-toss batting practice).
pub const MIN_DISTANCE_FT: f64 = 15.0;

/// Longest supported distance in feet (regulation mound to plate).
pub const MAX_DISTANCE_FT: f64 = 60.5;

/// Spacing between rows of the equivalency table.
pub const DISTANCE_STEP_FT: f64 = 0.5;

/// Number of rows in the equivalency table: 15.0 through 60.5 inclusive.
pub const TABLE_LEN: usize = 92;

/// Default reference speed offered to a new session.
pub const DEFAULT_SPEED_MPH: f64 = 90.0;

/// Default reference distance offered to a new session.
pub const DEFAULT_DISTANCE_FT: f64 = MAX_DISTANCE_FT;

/// Most digits after the decimal point a displayed speed may carry.
pub const MAX_SPEED_DECIMALS: u8 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_len_matches_range() {
        let steps = ((MAX_DISTANCE_FT - MIN_DISTANCE_FT) / DISTANCE_STEP_FT) as usize + 1;
        assert_eq!(steps, TABLE_LEN);
    }

    #[test]
    fn default_distance_is_regulation() {
        assert_eq!(DEFAULT_DISTANCE_FT, 60.5);
    }
}
