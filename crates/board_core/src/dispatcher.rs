//! Single entry point from a named command to the next editor state.

use shared::{error::ChipError, protocol::Command};
use tracing::debug;

use crate::{
    interchange,
    registry::ChipCatalog,
    session::{EditorState, Outcome},
};

/// Applies `command` to a copy of `state` and returns the copy.
///
/// `state` itself is never modified, so a failed command leaves the caller with exactly the
/// state it had. Commands whose precondition does not hold return an unchanged copy.
pub fn apply(
    catalog: &ChipCatalog,
    state: &EditorState,
    command: Command,
) -> Result<EditorState, ChipError> {
    apply_with_outcome(catalog, state, command).map(|(next, _)| next)
}

pub fn apply_with_outcome(
    catalog: &ChipCatalog,
    state: &EditorState,
    command: Command,
) -> Result<(EditorState, Outcome), ChipError> {
    let name = command.name();
    let registry = catalog.registry(state.board().target_program());
    let mut next = state.clone();

    let outcome = match command {
        Command::SetTargetProgram { program } => next.set_target_program(program),
        Command::Drag { position } => next.drag(position),
        Command::Drop { position } => next.drop_at(registry, position),
        Command::StartEditing { position } => next.start_editing(registry, position),
        Command::UpdateEditingChip { chip } => next.update_editing_chip(registry, chip)?,
        Command::FinishEditing => next.finish_editing(),
        Command::Cancel => next.cancel(),
        Command::Delete => next.delete(),
        Command::OverrideProgram { program } => {
            let rows = interchange::import_program(registry, &program)?.into_rows();
            next.override_program(rows)
        }
        Command::ChangeChipType { chip_type } => next.change_chip_type(registry, &chip_type)?,
        Command::SetNext { next: direction } => next.set_next(direction),
        Command::SetBranch { branch } => next.set_branch(branch),
    };

    match outcome {
        Outcome::Applied => debug!(command = name, "command applied"),
        Outcome::Ignored(reason) => debug!(command = name, reason, "command ignored"),
    }
    Ok((next, outcome))
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
