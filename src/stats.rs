//! Session counters and the stat formatting used by the HUD, end screen,
//! and leaderboard.

use bevy::prelude::*;

/// Per-session counters, mutated by the gameplay systems and read by every
/// stats view.  Reset when a new session starts.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SessionStats {
    /// Seconds of gameplay, accumulated per fixed tick.
    pub elapsed: f64,
    /// Targets clicked before they expired.
    pub hits: u32,
    /// Total left-button clicks, on target or not.
    pub clicks: u32,
    /// Targets that decayed to zero unclicked.
    pub misses: u32,
}

impl SessionStats {
    /// Hit percentage over all clicks, rounded to one decimal.
    /// Zero clicks yields 0.0 rather than an error.
    pub fn accuracy(&self) -> f32 {
        if self.clicks == 0 {
            return 0.0;
        }
        round1(self.hits as f32 / self.clicks as f32 * 100.0)
    }

    /// Hits per second of elapsed play, rounded to one decimal.
    /// Zero elapsed time yields 0.0.
    pub fn speed(&self) -> f32 {
        if self.elapsed <= 0.0 {
            return 0.0;
        }
        round1(self.hits as f32 / self.elapsed as f32)
    }

    /// Lives left before the session ends, clamped at zero.
    pub fn lives_left(&self, lives_limit: u32) -> u32 {
        lives_limit.saturating_sub(self.misses)
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Format elapsed seconds as `MM:SS.d`.
///
/// Reproduces the quirky original rounding exactly: the seconds field is
/// `secs mod 60` rounded to one decimal (ties to even) then truncated to an
/// integer, and the trailing decigit is derived from the millisecond count
/// independently.  Near a minute boundary this can display `SS` as `60`
/// (e.g. 59.96 s → `"00:60.9"`); downstream consumers treat the string as
/// opaque, so the historical format is preserved.
pub fn format_time(secs: f64) -> String {
    let minutes = (secs / 60.0).floor() as u32;
    let seconds = (((secs % 60.0) * 10.0).round_ties_even() / 10.0) as u32;
    let decigit = ((secs * 1000.0 % 1000.0).trunc() / 100.0).floor() as u32;
    format!("{minutes:02}:{seconds:02}.{decigit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_zero() {
        assert_eq!(format_time(0.0), "00:00.0");
    }

    #[test]
    fn format_time_minutes_and_decigit() {
        assert_eq!(format_time(65.25), "01:05.2");
        assert_eq!(format_time(125.999), "02:06.9");
        assert_eq!(format_time(600.0), "10:00.0");
    }

    #[test]
    fn format_time_truncates_sub_decigit() {
        // 3.19 s: the decigit truncates the raw milliseconds, so .19 renders
        // as 1, never rounding up to 2.
        assert_eq!(format_time(3.19), "00:03.1");
    }

    #[test]
    fn accuracy_is_zero_without_clicks() {
        let stats = SessionStats::default();
        assert_eq!(stats.accuracy(), 0.0);
    }

    #[test]
    fn accuracy_rounds_to_one_decimal() {
        let stats = SessionStats {
            hits: 2,
            clicks: 3,
            ..Default::default()
        };
        assert_eq!(stats.accuracy(), 66.7);
    }

    #[test]
    fn speed_is_zero_without_elapsed_time() {
        let stats = SessionStats {
            hits: 5,
            ..Default::default()
        };
        assert_eq!(stats.speed(), 0.0);
    }

    #[test]
    fn speed_is_hits_per_second() {
        let stats = SessionStats {
            hits: 9,
            elapsed: 6.0,
            ..Default::default()
        };
        assert_eq!(stats.speed(), 1.5);
    }

    #[test]
    fn lives_left_clamps_at_zero() {
        let stats = SessionStats {
            misses: 5,
            ..Default::default()
        };
        assert_eq!(stats.lives_left(3), 0);
        assert_eq!(stats.lives_left(8), 3);
    }
}
