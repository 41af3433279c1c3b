use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config;

// Layout and interaction behavior branch on one explicit input mode,
// resolved from the viewport width whenever it is observed, never inferred
// per event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Touch,
}

impl InputMode {
    pub fn from_width(width: f64) -> Self {
        if width <= config::MOBILE_BREAKPOINT_PX {
            InputMode::Touch
        } else {
            InputMode::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        matches!(self, InputMode::Touch)
    }
}

pub fn past_scroll_threshold(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_THRESHOLD_PX
}

#[hook]
pub fn use_input_mode() -> InputMode {
    let size = use_window_size();
    InputMode::from_width(size.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_touch_from_pointer() {
        assert_eq!(InputMode::from_width(320.0), InputMode::Touch);
        assert_eq!(InputMode::from_width(991.0), InputMode::Touch);
        assert_eq!(InputMode::from_width(992.0), InputMode::Pointer);
        assert_eq!(InputMode::from_width(1920.0), InputMode::Pointer);
    }

    #[test]
    fn scroll_threshold_transitions_without_flicker() {
        assert!(!past_scroll_threshold(0.0));
        assert!(past_scroll_threshold(51.0));
        assert!(!past_scroll_threshold(49.0));
        // values strictly inside either region keep their answer
        for y in [0.0, 10.0, 25.0, 49.9, 50.0] {
            assert!(!past_scroll_threshold(y));
        }
        for y in [50.1, 51.0, 600.0, 10_000.0] {
            assert!(past_scroll_threshold(y));
        }
    }
}
