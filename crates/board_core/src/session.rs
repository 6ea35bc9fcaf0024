//! Editing session state machine.
//!
//! The session is layered over a [`Board`]: `Idle`, a transient `Dragging` condition between
//! `drag` and `drop`, and `Editing` with a detached scratch copy of the chip under edit.
//! Every transition that starts something new first commits a pending edit through
//! [`EditorState::apply_editing_chip`].

use shared::{
    chip::Chip,
    domain::{Direction, Position, ProgramType},
    error::ChipError,
    protocol::{ProgramRows, SessionSnapshot},
};
use tracing::debug;

use crate::{board::Board, registry::ChipRegistry};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditingSession {
    #[default]
    Idle,
    /// A chip is being dragged from `source`; nothing is being edited.
    Dragging { source: Position },
    /// `chip` is a scratch copy, never the value stored in the grid.
    Editing { position: Position, chip: Chip },
}

impl EditingSession {
    pub fn target_position(&self) -> Option<Position> {
        match self {
            EditingSession::Idle => None,
            EditingSession::Dragging { source } => Some(*source),
            EditingSession::Editing { position, .. } => Some(*position),
        }
    }

    pub fn editing_chip(&self) -> Option<&Chip> {
        match self {
            EditingSession::Editing { chip, .. } => Some(chip),
            EditingSession::Idle | EditingSession::Dragging { .. } => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditingSession::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditingSession::Editing { .. })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            target_position: self.target_position(),
            editing_chip: self.editing_chip().cloned(),
        }
    }
}

/// What a transition did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The precondition did not hold; the state is unchanged.
    Ignored(&'static str),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Board plus editing session: the whole state a dispatch works on.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub(crate) board: Board,
    pub(crate) session: EditingSession,
}

impl EditorState {
    pub fn new(length: usize) -> Self {
        Self::with_board(Board::new(length))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            session: EditingSession::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &EditingSession {
        &self.session
    }

    /// Commits the scratch chip into the targeted program and returns to `Idle`.
    /// Anything other than `Editing` is left as it is.
    pub(crate) fn apply_editing_chip(&mut self) -> Outcome {
        match std::mem::take(&mut self.session) {
            EditingSession::Editing { position, chip } => {
                if !self.board.target_mut().set(position, Some(chip)) {
                    debug!(
                        x = position.x,
                        y = position.y,
                        "editing target outside grid; edit dropped"
                    );
                }
                Outcome::Applied
            }
            other => {
                self.session = other;
                Outcome::Ignored("nothing to commit")
            }
        }
    }

    /// Opens `position` for editing with a copy of its chip, or a blank chip for an empty cell.
    fn open_editor(&mut self, registry: &ChipRegistry, position: Position) {
        let chip = self
            .board
            .target()
            .get(position)
            .cloned()
            .unwrap_or_else(|| registry.blank());
        self.session = EditingSession::Editing { position, chip };
    }

    pub(crate) fn set_target_program(&mut self, program: ProgramType) -> Outcome {
        self.apply_editing_chip();
        self.board.set_target_program(program);
        self.session = EditingSession::Idle;
        Outcome::Applied
    }

    pub(crate) fn drag(&mut self, source: Position) -> Outcome {
        if !self.board.target().contains(source) {
            return Outcome::Ignored("position outside program");
        }
        self.apply_editing_chip();
        self.session = EditingSession::Dragging { source };
        Outcome::Applied
    }

    pub(crate) fn drop_at(&mut self, registry: &ChipRegistry, destination: Position) -> Outcome {
        let EditingSession::Dragging { source } = self.session else {
            return Outcome::Ignored("no drag in progress");
        };
        if !self.board.target().contains(destination) {
            return Outcome::Ignored("position outside program");
        }

        if self.board.target().is_occupied(destination) {
            // Rejected move: reopen the source for editing instead of cancelling the drag.
            debug!(
                from_x = source.x,
                from_y = source.y,
                to_x = destination.x,
                to_y = destination.y,
                "drop target occupied; reopening source"
            );
            self.open_editor(registry, source);
            return Outcome::Applied;
        }

        let program = self.board.target_mut();
        let chip = program.take(source);
        program.set(destination, chip);
        self.open_editor(registry, destination);
        Outcome::Applied
    }

    pub(crate) fn start_editing(&mut self, registry: &ChipRegistry, position: Position) -> Outcome {
        if !self.board.target().contains(position) {
            return Outcome::Ignored("position outside program");
        }
        self.apply_editing_chip();
        self.open_editor(registry, position);
        Outcome::Applied
    }

    /// Replaces the scratch chip wholesale. Numeric fields are clamped to the registry limits.
    pub(crate) fn update_editing_chip(
        &mut self,
        registry: &ChipRegistry,
        chip: Chip,
    ) -> Result<Outcome, ChipError> {
        let EditingSession::Editing { chip: scratch, .. } = &mut self.session else {
            return Ok(Outcome::Ignored("not editing"));
        };
        if !registry.is_registered(chip.kind()) {
            return Err(ChipError::unknown_type(
                chip.kind().as_str(),
                registry.program(),
            ));
        }
        *scratch = registry.clamp(chip);
        Ok(Outcome::Applied)
    }

    pub(crate) fn change_chip_type(
        &mut self,
        registry: &ChipRegistry,
        chip_type: &str,
    ) -> Result<Outcome, ChipError> {
        let EditingSession::Editing { chip: scratch, .. } = &mut self.session else {
            return Ok(Outcome::Ignored("not editing"));
        };
        let chip = registry.create(chip_type, Some(&*scratch))?;
        *scratch = registry.clamp(chip);
        Ok(Outcome::Applied)
    }

    pub(crate) fn set_next(&mut self, next: Direction) -> Outcome {
        match &mut self.session {
            EditingSession::Editing { chip, .. } => {
                chip.next = next;
                Outcome::Applied
            }
            _ => Outcome::Ignored("not editing"),
        }
    }

    pub(crate) fn set_branch(&mut self, branch: Direction) -> Outcome {
        match &mut self.session {
            EditingSession::Editing { chip, .. } => {
                if chip.set_branch(branch) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored("chip has no branch")
                }
            }
            _ => Outcome::Ignored("not editing"),
        }
    }

    pub(crate) fn finish_editing(&mut self) -> Outcome {
        if !self.session.is_editing() {
            return Outcome::Ignored("not editing");
        }
        self.apply_editing_chip()
    }

    pub(crate) fn cancel(&mut self) -> Outcome {
        if self.session.is_idle() {
            return Outcome::Ignored("already idle");
        }
        self.session = EditingSession::Idle;
        Outcome::Applied
    }

    /// Clears the targeted cell, whether or not it held a chip, and returns to `Idle`.
    pub(crate) fn delete(&mut self) -> Outcome {
        let Some(position) = self.session.target_position() else {
            return Outcome::Ignored("no target");
        };
        self.board.target_mut().set(position, None);
        self.session = EditingSession::Idle;
        Outcome::Applied
    }

    /// Bulk import into the targeted program. `rows` must already be resolved against the
    /// program's registry. The session is left as it is.
    pub(crate) fn override_program(&mut self, rows: ProgramRows) -> Outcome {
        let program = self.board.target_program();
        self.board.replace(program, rows);
        Outcome::Applied
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
