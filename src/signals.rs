/// Player activity signals: the raw record a caller hands in, and the clamped
/// form every scoring step reads.
///
/// Ranges after clamping:
///   login_frequency_per_week    0 – 14
///   avg_daily_playtime_minutes  0 – 600
///   levels_gained_last_7d       0 – 100
///
/// Out-of-range numbers are never rejected; they are pinned to the nearest
/// bound. A blank character class becomes "Unknown".
use serde::{Deserialize, Serialize};

pub const MAX_LOGINS_PER_WEEK:   i64 = 14;
pub const MAX_PLAYTIME_MINUTES:  i64 = 600;
pub const MAX_LEVELS_PER_WEEK:   i64 = 100;
pub const UNKNOWN_CLASS:         &str = "Unknown";

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSignals {
    pub login_frequency_per_week:   i64,
    pub avg_daily_playtime_minutes: i64,
    pub levels_gained_last_7d:      i64,
    #[serde(default)]
    pub character_class:            String,
}

impl PlayerSignals {
    pub fn new(logins: i64, playtime: i64, levels: i64, class: impl Into<String>) -> Self {
        Self {
            login_frequency_per_week:   logins,
            avg_daily_playtime_minutes: playtime,
            levels_gained_last_7d:      levels,
            character_class:            class.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSignals {
    pub logins:   i64,
    pub playtime: i64,
    pub levels:   i64,
    pub class:    String,
}

pub fn clamp_to_range(value: i64, lo: i64, hi: i64) -> i64 {
    value.max(lo).min(hi)
}

impl From<&PlayerSignals> for NormalizedSignals {
    fn from(raw: &PlayerSignals) -> Self {
        let trimmed = raw.character_class.trim();
        let class = if trimmed.is_empty() { UNKNOWN_CLASS } else { trimmed };

        Self {
            logins:   clamp_to_range(raw.login_frequency_per_week, 0, MAX_LOGINS_PER_WEEK),
            playtime: clamp_to_range(raw.avg_daily_playtime_minutes, 0, MAX_PLAYTIME_MINUTES),
            levels:   clamp_to_range(raw.levels_gained_last_7d, 0, MAX_LEVELS_PER_WEEK),
            class:    class.to_owned(),
        }
    }
}

impl NormalizedSignals {
    /// Any one weak signal is enough.
    pub fn low_engagement(&self) -> bool {
        self.logins <= 2 || self.levels == 0 || self.playtime <= 15
    }

    /// All three signals must be healthy.
    pub fn high_engagement(&self) -> bool {
        self.logins >= 6 && self.levels >= 2 && self.playtime >= 45
    }
}
