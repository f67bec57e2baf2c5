//! Emulator configuration

/// Configuration for the emulated panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Panel width in pixels.
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Clip writes to the inscribed circle, like a round wearable panel.
    /// Pixels outside the circle are silently dropped.
    pub round_mask: bool,
}

impl EmulatorConfig {
    /// 1.3" round wearable panel, 240×240.
    pub const WATCH_240: Self = Self {
        width: 240,
        height: 240,
        round_mask: true,
    };

    /// Small square panel, no mask (component-level tests).
    pub const SQUARE_64: Self = Self {
        width: 64,
        height: 64,
        round_mask: false,
    };

    /// Rectangular panel of the given size, no mask.
    pub const fn rect(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            round_mask: false,
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::WATCH_240
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_round_watch_panel() {
        let config = EmulatorConfig::default();
        assert_eq!(config.width, 240);
        assert_eq!(config.height, 240);
        assert!(config.round_mask);
    }

    #[test]
    fn test_rect_has_no_mask() {
        let config = EmulatorConfig::rect(80, 40);
        assert_eq!((config.width, config.height), (80, 40));
        assert!(!config.round_mask);
    }
}
