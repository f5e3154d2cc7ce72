mod button;

pub use button::Button;

use crate::application::Command;

pub const BUTTON_WIDTH: f32 = 80.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_TOP: f32 = 10.0;

/// Left edges of Play, Pause and Clear
const BUTTON_LEFTS: [f32; 3] = [10.0, 130.0, 240.0];

/// The control affordances as last drawn, in hit-test priority order.
#[derive(Clone, Debug)]
pub struct Controls {
    buttons: Vec<Button>,
}

impl Controls {
    /// Standard layout along the top-left of the window
    pub fn layout() -> Self {
        let entries = [("Play", Command::Play), ("Pause", Command::Pause), ("Clear", Command::Clear)];
        let buttons = BUTTON_LEFTS
            .into_iter()
            .zip(entries)
            .map(|(x, (text, action))| {
                Button::new(x, BUTTON_TOP, BUTTON_WIDTH, BUTTON_HEIGHT, text, action)
            })
            .collect();
        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Action of the first button under the pointer
    pub fn hit(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        self.buttons
            .iter()
            .find(|b| b.is_hovered(mouse_pos))
            .map(Button::action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_order_and_labels() {
        let controls = Controls::layout();
        let labels: Vec<_> = controls.buttons().iter().map(Button::text).collect();
        assert_eq!(labels, ["Play", "Pause", "Clear"]);
    }

    #[test]
    fn test_hit_maps_each_button() {
        let controls = Controls::layout();
        assert_eq!(controls.hit((50.0, 30.0)), Some(Command::Play));
        assert_eq!(controls.hit((170.0, 30.0)), Some(Command::Pause));
        assert_eq!(controls.hit((280.0, 30.0)), Some(Command::Clear));
    }

    #[test]
    fn test_gaps_between_buttons_miss() {
        let controls = Controls::layout();
        assert_eq!(controls.hit((100.0, 30.0)), None);
        assert_eq!(controls.hit((225.0, 30.0)), None);
        assert_eq!(controls.hit((50.0, 60.0)), None);
    }
}
