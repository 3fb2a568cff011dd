use iced::mouse;
use iced::widget::canvas;
use iced::{Rectangle, Vector};

use super::model::{InteractionConfig, InteractionState};
use crate::message::Message;

/// Direction the wheel moves the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelZoom {
    /// Scrolling up magnifies.
    UpZoomsIn,
    /// Scrolling up widens the visible data range.
    UpZoomsOut,
}

/// Shared mouse handling for every chart: wheel zoom, right-drag pan and
/// left-drag selection.
pub fn handle_event(
    config: &InteractionConfig,
    state: &mut InteractionState,
    wheel: WheelZoom,
    event: &canvas::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<canvas::Action<Message>> {
    match event {
        canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            if state.selection_start.is_some() {
                state.selection_end = cursor.position_in(bounds).or(Some(*position));
            }
            if let Some(pan_start) = state.pan_start {
                if let Some(position) = cursor.position_in(bounds) {
                    let delta = Vector::new(position.x - pan_start.x, position.y - pan_start.y);
                    state.pan = state.pan_origin + delta;
                }
            }
            config
                .enable_hover
                .then(canvas::Action::request_redraw)
        }
        canvas::Event::Mouse(mouse::Event::CursorEntered)
        | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            if !config.enable_zoom || cursor.position_in(bounds).is_none() {
                return None;
            }
            let scroll = match delta {
                mouse::ScrollDelta::Lines { y, .. } => *y,
                mouse::ScrollDelta::Pixels { y, .. } => *y / 60.0,
            };
            let factor = match (wheel, scroll > 0.0) {
                (WheelZoom::UpZoomsIn, true) | (WheelZoom::UpZoomsOut, false) => 1.1,
                _ => 0.9,
            };
            state.zoom = (state.zoom * factor).clamp(0.5, config.max_zoom);
            Some(canvas::Action::request_redraw().and_capture())
        }
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            if !config.enable_selection {
                return None;
            }
            let start = cursor.position_in(bounds)?;
            state.selection_start = Some(start);
            state.selection_end = None;
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            if !config.enable_selection {
                return None;
            }
            if state.selection_end.is_none() {
                state.selection_start = None;
            }
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right)) => {
            if !config.enable_pan {
                return None;
            }
            state.pan_start = Some(cursor.position_in(bounds)?);
            state.pan_origin = state.pan;
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)) => {
            if !config.enable_pan {
                return None;
            }
            state.pan_start = None;
            Some(canvas::Action::request_redraw())
        }
        canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Middle)) => {
            *state = InteractionState::default();
            Some(canvas::Action::request_redraw())
        }
        _ => None,
    }
}

pub fn hover_interaction(
    bounds: Rectangle,
    cursor: mouse::Cursor,
    inside: mouse::Interaction,
) -> mouse::Interaction {
    if cursor.position_in(bounds).is_some() {
        inside
    } else {
        mouse::Interaction::default()
    }
}
