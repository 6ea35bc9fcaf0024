//! Owner of the editor state: routes commands through the dispatcher and reports to a sink.

use serde::Serialize;
use shared::{
    error::ChipError,
    protocol::{Command, EditorSnapshot},
};
use tracing::warn;

use crate::{
    dispatcher,
    log::{EventSink, TracingSink},
    registry::ChipCatalog,
    session::{EditingSession, EditorState, Outcome},
};

pub struct Editor<S = TracingSink> {
    catalog: ChipCatalog,
    state: EditorState,
    sink: S,
    debug_snapshots: bool,
}

impl Editor<TracingSink> {
    pub fn new(length: usize) -> Self {
        Self::with_sink(length, TracingSink)
    }
}

impl<S: EventSink> Editor<S> {
    pub fn with_sink(length: usize, sink: S) -> Self {
        Self {
            catalog: ChipCatalog::standard(),
            state: EditorState::new(length),
            sink,
            debug_snapshots: false,
        }
    }

    /// Also record the session and targeted program after every applied command.
    pub fn debug_snapshots(mut self, enabled: bool) -> Self {
        self.debug_snapshots = enabled;
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn catalog(&self) -> &ChipCatalog {
        &self.catalog
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            board: self.state.board().snapshot(),
            session: self.state.session().snapshot(),
        }
    }

    /// Applies `command`. On error the current state is kept untouched.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, ChipError> {
        let name = command.name();
        match dispatcher::apply_with_outcome(&self.catalog, &self.state, command) {
            Ok((next, outcome)) => {
                self.state = next;
                self.sink.record(&self.describe(name, outcome));
                if self.debug_snapshots && outcome.is_applied() {
                    let block = self.debug_block();
                    self.sink.record_block(&block);
                }
                Ok(outcome)
            }
            Err(err) => {
                warn!(command = name, error = %err, "command rejected");
                self.sink.record(&format!("{name}: rejected ({err})"));
                Err(err)
            }
        }
    }

    fn describe(&self, name: &str, outcome: Outcome) -> String {
        match outcome {
            Outcome::Ignored(reason) => format!("{name}: ignored ({reason})"),
            Outcome::Applied => {
                let program = self.state.board().target_program();
                match self.state.session() {
                    EditingSession::Idle => format!("{name}: {program} idle"),
                    EditingSession::Dragging { source } => {
                        format!("{name}: {program} dragging from {source}")
                    }
                    EditingSession::Editing { position, chip } => {
                        format!("{name}: {program} editing {} at {position}", chip.kind())
                    }
                }
            }
        }
    }

    fn debug_block(&self) -> Vec<String> {
        let board = self.state.board();
        vec![
            "----".to_owned(),
            format!("session: {}", to_json(&self.state.session().snapshot())),
            format!(
                "{}: {}",
                board.target_program(),
                to_json(board.target().rows())
            ),
            "----".to_owned(),
        ]
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
