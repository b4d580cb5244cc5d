//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, SETPOINT_STEP_C};
use crate::home::types::Command;

/// Maps a key event to an engine command.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('l') => app.dispatch(Command::ToggleLight),
        KeyCode::Char('d') => app.dispatch(Command::ToggleLock),
        KeyCode::Char('t') => app.dispatch(Command::ToggleThermostatPower),
        KeyCode::Up => app.nudge_setpoint(SETPOINT_STEP_C),
        KeyCode::Down => app.nudge_setpoint(-SETPOINT_STEP_C),
        KeyCode::Char(c @ '0'..='3') => {
            let speed = f32::from(c as u8 - b'0');
            app.dispatch(Command::SetFanSpeed { speed });
        }
        _ => {}
    }
}
