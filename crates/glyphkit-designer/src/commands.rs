//! Keyboard command table and dispatch.
//!
//! The host maps key events onto [`EditorCommand`] values and passes an
//! explicit `input_captured` flag instead of the core inspecting focus
//! targets: while a text-entry field owns the keyboard, every command is
//! suppressed so Backspace edits text rather than deleting the selection.

use tracing::debug;

use glyphkit_core::Result;

use crate::designer::{Axis, Designer};
use crate::model::DesignObject;

/// A discrete keyboard command. `coarse` is set while a modifier key is
/// held, switching the nudge step from 1 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    RemoveObject,
    MoveLeft { coarse: bool },
    MoveRight { coarse: bool },
    MoveUp { coarse: bool },
    MoveDown { coarse: bool },
    ClosePath,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// True when the command was consumed; the host must then prevent the
    /// originating event's default action (e.g. browser navigation keys).
    pub handled: bool,
    /// The proposed replacement list, when the command mutated it.
    pub update: Option<Vec<DesignObject>>,
}

impl DispatchOutcome {
    fn ignored() -> Self {
        Self {
            handled: false,
            update: None,
        }
    }

    fn handled(update: Option<Vec<DesignObject>>) -> Self {
        Self {
            handled: true,
            update,
        }
    }
}

impl Designer {
    /// Dispatches one keyboard command against the current object list.
    ///
    /// Commands that act on the selection are ignored (not errors) when
    /// nothing is selected; pressing Delete on an empty selection is
    /// ordinary user behavior, not an integration bug.
    pub fn dispatch(
        &mut self,
        objects: &[DesignObject],
        command: EditorCommand,
        input_captured: bool,
    ) -> Result<DispatchOutcome> {
        if input_captured {
            return Ok(DispatchOutcome::ignored());
        }

        if self.selected().is_none() && command != EditorCommand::ClosePath {
            debug!(?command, "command ignored without a selection");
            return Ok(DispatchOutcome::ignored());
        }

        let outcome = match command {
            EditorCommand::RemoveObject => {
                DispatchOutcome::handled(Some(self.delete_selected(objects)?))
            }
            EditorCommand::MoveLeft { coarse } => {
                DispatchOutcome::handled(Some(self.nudge(objects, Axis::X, -1.0, coarse)?))
            }
            EditorCommand::MoveRight { coarse } => {
                DispatchOutcome::handled(Some(self.nudge(objects, Axis::X, 1.0, coarse)?))
            }
            EditorCommand::MoveUp { coarse } => {
                DispatchOutcome::handled(Some(self.nudge(objects, Axis::Y, -1.0, coarse)?))
            }
            EditorCommand::MoveDown { coarse } => {
                DispatchOutcome::handled(Some(self.nudge(objects, Axis::Y, 1.0, coarse)?))
            }
            EditorCommand::ClosePath => {
                self.close_editor();
                DispatchOutcome::handled(None)
            }
        };
        Ok(outcome)
    }
}
