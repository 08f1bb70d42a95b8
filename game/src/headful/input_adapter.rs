use engine::app::InputFrame;
use winit::event::VirtualKeyCode;

use crate::input::InputEvent;

/// Fixed key bindings.
pub fn map_key(key: VirtualKeyCode) -> Option<InputEvent> {
    match key {
        VirtualKeyCode::Left => Some(InputEvent::Left),
        VirtualKeyCode::Right => Some(InputEvent::Right),
        VirtualKeyCode::Down => Some(InputEvent::Down),
        VirtualKeyCode::Up => Some(InputEvent::Up),
        VirtualKeyCode::Return | VirtualKeyCode::NumpadEnter => Some(InputEvent::Confirm),
        VirtualKeyCode::Escape => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Logical events for one tick, in press order. A window close becomes a trailing `Quit`.
pub fn events_from_frame(input: &InputFrame) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = input
        .keys_pressed
        .iter()
        .filter_map(|&key| map_key(key))
        .collect();
    if input.close_requested {
        events.push(InputEvent::Quit);
    }
    events
}
