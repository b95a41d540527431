/// One row of the WMO weather code table used by Open-Meteo
#[derive(Debug)]
pub struct ConditionRow {
    pub codes: &'static [i32],
    pub label: &'static str,
    pub day_emoji: &'static str,
    /// Only clear and mainly-clear skies look different at night
    pub night_emoji: Option<&'static str>,
}

/// Human-readable condition derived from a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const UNKNOWN: Condition = Condition {
    label: "Unknown",
    emoji: "❓",
};

pub static CONDITIONS: &[ConditionRow] = &[
    ConditionRow {
        codes: &[0],
        label: "Clear sky",
        day_emoji: "☀️",
        night_emoji: Some("🌙"),
    },
    ConditionRow {
        codes: &[1],
        label: "Mainly clear",
        day_emoji: "🌤️",
        night_emoji: Some("🌙"),
    },
    ConditionRow {
        codes: &[2],
        label: "Partly cloudy",
        day_emoji: "⛅",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[3],
        label: "Overcast",
        day_emoji: "☁️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[45, 48],
        label: "Foggy",
        day_emoji: "🌫️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[51, 53, 55],
        label: "Drizzle",
        day_emoji: "🌧️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[56, 57],
        label: "Freezing drizzle",
        day_emoji: "🌧️❄️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[61, 63, 65],
        label: "Rain",
        day_emoji: "🌧️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[66, 67],
        label: "Freezing rain",
        day_emoji: "🌧️❄️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[71, 73, 75],
        label: "Snow",
        day_emoji: "🌨️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[77],
        label: "Snow grains",
        day_emoji: "🌨️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[80, 81, 82],
        label: "Rain showers",
        day_emoji: "🌦️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[85, 86],
        label: "Snow showers",
        day_emoji: "🌨️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[95],
        label: "Thunderstorm",
        day_emoji: "⛈️",
        night_emoji: None,
    },
    ConditionRow {
        codes: &[96, 99],
        label: "Thunderstorm with hail",
        day_emoji: "⛈️",
        night_emoji: None,
    },
];

/// Look up the label and emoji for a provider weather code
///
/// Total over `i32`: codes missing from [`CONDITIONS`] map to [`UNKNOWN`].
pub fn condition_for(code: i32, is_day: bool) -> Condition {
    let Some(row) = CONDITIONS.iter().find(|row| row.codes.contains(&code)) else {
        return UNKNOWN;
    };

    let emoji = match row.night_emoji {
        Some(night) if !is_day => night,
        _ => row.day_emoji,
    };

    Condition {
        label: row.label,
        emoji,
    }
}
