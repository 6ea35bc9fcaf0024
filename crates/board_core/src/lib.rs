//! Editing core for chip programs: registry, grids, session state machine and dispatcher.

pub mod board;
pub mod dispatcher;
pub mod editor;
pub mod interchange;
pub mod log;
pub mod program;
pub mod registry;
pub mod session;

pub use board::Board;
pub use dispatcher::{apply, apply_with_outcome};
pub use editor::Editor;
pub use interchange::{export_program, import_program, parse_program};
pub use log::{EventLog, EventSink, TracingSink};
pub use program::Program;
pub use registry::{ChipCatalog, ChipRegistry};
pub use session::{EditingSession, EditorState, Outcome};
