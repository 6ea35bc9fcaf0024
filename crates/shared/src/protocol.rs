use serde::{Deserialize, Serialize};

use crate::{
    chip::Chip,
    domain::{Direction, Position, ProgramType},
};

/// Row-major interchange form of a program: `rows[y][x]`, `null` for an empty cell.
pub type ProgramRows = Vec<Vec<Option<Chip>>>;

/// One user gesture, as issued by a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    SetTargetProgram {
        program: ProgramType,
    },
    Drag {
        position: Position,
    },
    Drop {
        position: Position,
    },
    StartEditing {
        position: Position,
    },
    UpdateEditingChip {
        chip: Chip,
    },
    FinishEditing,
    Cancel,
    Delete,
    /// Rows in interchange form; resolved against the targeted program's registry on apply.
    OverrideProgram {
        program: serde_json::Value,
    },
    ChangeChipType {
        chip_type: String,
    },
    SetNext {
        next: Direction,
    },
    SetBranch {
        branch: Direction,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetTargetProgram { .. } => "set_target_program",
            Command::Drag { .. } => "drag",
            Command::Drop { .. } => "drop",
            Command::StartEditing { .. } => "start_editing",
            Command::UpdateEditingChip { .. } => "update_editing_chip",
            Command::FinishEditing => "finish_editing",
            Command::Cancel => "cancel",
            Command::Delete => "delete",
            Command::OverrideProgram { .. } => "override_program",
            Command::ChangeChipType { .. } => "change_chip_type",
            Command::SetNext { .. } => "set_next",
            Command::SetBranch { .. } => "set_branch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub target_position: Option<Position>,
    pub editing_chip: Option<Chip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub main: ProgramRows,
    pub missile: ProgramRows,
    pub length: usize,
    pub target_program: ProgramType,
}

/// Read-only view handed to renderers after each dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub board: BoardSnapshot,
    pub session: SessionSnapshot,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn commands_use_tagged_payloads() {
        let cmd: Command = serde_json::from_value(json!({
            "type": "start_editing",
            "payload": { "position": { "x": 1, "y": 2 } }
        }))
        .expect("parse");
        assert_eq!(
            cmd,
            Command::StartEditing {
                position: Position::new(1, 2)
            }
        );

        let finish: Command =
            serde_json::from_value(json!({ "type": "finish_editing" })).expect("parse unit");
        assert_eq!(finish, Command::FinishEditing);
        assert_eq!(finish.name(), "finish_editing");
    }

    #[test]
    fn session_snapshot_uses_camel_case_keys() {
        let snapshot = SessionSnapshot::default();
        let value = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(value, json!({ "targetPosition": null, "editingChip": null }));
    }
}
