// Window resolution derived from the adaptive resolution picker

use serde::{Deserialize, Serialize};

pub const FALLBACK_SIZE: (i32, i32) = (1920, 1080);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    Off,
    Auto,
    #[default]
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "4k")]
    P4k,
    Custom,
}

impl ResolutionMode {
    pub const ALL: [ResolutionMode; 6] = [
        ResolutionMode::Off,
        ResolutionMode::Auto,
        ResolutionMode::P1080,
        ResolutionMode::P1440,
        ResolutionMode::P4k,
        ResolutionMode::Custom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResolutionMode::Off => "Off",
            ResolutionMode::Auto => "Auto (display size)",
            ResolutionMode::P1080 => "1080p",
            ResolutionMode::P1440 => "1440p",
            ResolutionMode::P4k => "4K",
            ResolutionMode::Custom => "Custom",
        }
    }

    /// Fixed output height for the preset modes.
    pub fn preset_height(&self) -> Option<i32> {
        match self {
            ResolutionMode::P1080 => Some(1080),
            ResolutionMode::P1440 => Some(1440),
            ResolutionMode::P4k => Some(2160),
            _ => None,
        }
    }

    pub fn uses_aspect_ratio(&self) -> bool {
        self.preset_height().is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[serde(rename = "4:3")]
    Standard4x3,
    #[default]
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "16:10")]
    Wide16x10,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Standard4x3,
        AspectRatio::Wide16x9,
        AspectRatio::Wide16x10,
    ];

    /// (width ratio, height ratio)
    pub fn ratio(&self) -> (i32, i32) {
        match self {
            AspectRatio::Standard4x3 => (4, 3),
            AspectRatio::Wide16x9 => (16, 9),
            AspectRatio::Wide16x10 => (16, 10),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Standard4x3 => "4:3",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Wide16x10 => "16:10",
        }
    }

    /// Width for `height`, dividing before multiplying.
    pub fn width_for(&self, height: i32) -> i32 {
        let (width_ratio, height_ratio) = self.ratio();
        (height / height_ratio) * width_ratio
    }
}

/// Compute the window size to store for the current picker state.
///
/// `screen` is the visible display size used by [`ResolutionMode::Auto`].
pub fn resolve(
    mode: ResolutionMode,
    aspect: AspectRatio,
    custom: (i32, i32),
    screen: Option<(i32, i32)>,
) -> (i32, i32) {
    match mode {
        ResolutionMode::Off => FALLBACK_SIZE,
        ResolutionMode::Auto => screen.unwrap_or(FALLBACK_SIZE),
        ResolutionMode::Custom => custom,
        preset => {
            let height = preset.preset_height().unwrap_or(FALLBACK_SIZE.1);
            (aspect.width_for(height), height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_follow_aspect_ratio() {
        let custom = (800, 600);
        let cases = [
            (ResolutionMode::P1080, AspectRatio::Wide16x9, (1920, 1080)),
            (ResolutionMode::P1440, AspectRatio::Wide16x9, (2560, 1440)),
            (ResolutionMode::P4k, AspectRatio::Wide16x9, (3840, 2160)),
            (ResolutionMode::P1080, AspectRatio::Standard4x3, (1440, 1080)),
            (ResolutionMode::P1440, AspectRatio::Standard4x3, (1920, 1440)),
            (ResolutionMode::P1080, AspectRatio::Wide16x10, (1728, 1080)),
            (ResolutionMode::P4k, AspectRatio::Wide16x10, (3456, 2160)),
        ];
        for (mode, aspect, expected) in cases {
            assert_eq!(resolve(mode, aspect, custom, None), expected, "{mode:?} {aspect:?}");
        }
    }

    #[test]
    fn test_off_and_auto() {
        let aspect = AspectRatio::Standard4x3;
        assert_eq!(resolve(ResolutionMode::Off, aspect, (1, 1), Some((2560, 1600))), (1920, 1080));
        assert_eq!(resolve(ResolutionMode::Auto, aspect, (1, 1), Some((2560, 1600))), (2560, 1600));
        assert_eq!(resolve(ResolutionMode::Auto, aspect, (1, 1), None), FALLBACK_SIZE);
    }

    #[test]
    fn test_custom_is_verbatim() {
        assert_eq!(
            resolve(ResolutionMode::Custom, AspectRatio::Wide16x9, (1234, 567), None),
            (1234, 567)
        );
    }

    #[test]
    fn test_width_uses_integer_division() {
        // 1000 / 9 truncates to 111 before scaling
        assert_eq!(AspectRatio::Wide16x9.width_for(1000), 1776);
    }

    #[test]
    fn test_only_presets_use_aspect_ratio() {
        let with_aspect: Vec<_> = ResolutionMode::ALL
            .into_iter()
            .filter(ResolutionMode::uses_aspect_ratio)
            .collect();
        assert_eq!(
            with_aspect,
            vec![ResolutionMode::P1080, ResolutionMode::P1440, ResolutionMode::P4k]
        );
    }
}
