//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to window-level actions like Exit and ToggleAnimation.
//! Brush and rotation keys are NOT mapped here - they go directly to CanvasController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by window-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Pause or resume the figure animation (Space)
    ToggleAnimation,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Remove every placed shape (Delete)
    ClearCanvas,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for window-level keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Space => Some(InputAction::ToggleAnimation),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Delete => Some(InputAction::ClearCanvas),
            _ => None, // Brush and rotation keys handled by controller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_controller_keys_not_mapped() {
        for key in [
            KeyCode::Digit1,
            KeyCode::Digit3,
            KeyCode::BracketLeft,
            KeyCode::KeyC,
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
        ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Space, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed),
            Some(InputAction::ToggleAnimation)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Delete, ElementState::Pressed),
            Some(InputAction::ClearCanvas)
        );
    }
}
