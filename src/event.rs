//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::{
    app::{gauge::GaugeId, App},
    measurement::runner::RunnerEvent,
};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum SpeedEvent {
    Resize,
    KeyInput(KeyEvent),
    MouseInput(MouseEvent),
    Runner { run_id: u64, event: RunnerEvent },
    GaugeTick { gauge: GaugeId, generation: u64 },
    Terminate,
}

/// Handle a [`MouseEvent`].
pub fn handle_mouse_event(event: MouseEvent, app: &mut App) {
    if let MouseEventKind::Down(crossterm::event::MouseButton::Left) = event.kind {
        if !app.app_config_fields.disable_click {
            app.on_left_mouse_up(event.column, event.row);
        }
    }
}

/// Handle a [`KeyEvent`]. Returns `true` if the program should exit.
pub fn handle_key_event_or_break(event: KeyEvent, app: &mut App) -> bool {
    crate::c_debug!("KeyEvent: {event:?}");

    if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
                app.on_action();
            }
            _ => {}
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        if let KeyCode::Char('c') = event.code {
            return true;
        }
    }

    false
}
