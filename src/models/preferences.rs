use serde::{Deserialize, Serialize};

/// Text size options for accessibility
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Color mode options for accessibility
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Normal,
    HighContrast,
}

/// Accessibility preferences consumed by the rendering layer
///
/// Memory-only: these reset on every launch, matching the app they came
/// from where only the tutorial flags persist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Text size used across all screens
    pub text_size: TextSize,
    /// Color mode used across all screens
    pub color_mode: ColorMode,
    /// Whether spoken guidance is enabled
    pub voice_guide: bool,
    /// Whether haptic feedback is enabled
    pub haptics: bool,
    /// Whether the simplified navigation layout is enabled
    pub simplified_navigation: bool,
}

impl Preferences {
    /// Creates preferences with all defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::new();

        assert_eq!(prefs.text_size, TextSize::Medium);
        assert_eq!(prefs.color_mode, ColorMode::Normal);
        assert!(!prefs.voice_guide);
        assert!(!prefs.haptics);
        assert!(!prefs.simplified_navigation);
    }

    #[test]
    fn test_serde_round_trip() {
        let prefs = Preferences {
            text_size: TextSize::Large,
            color_mode: ColorMode::HighContrast,
            voice_guide: true,
            haptics: false,
            simplified_navigation: true,
        };

        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"large\""));
        assert!(json.contains("\"high_contrast\""));

        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
