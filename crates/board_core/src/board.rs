use shared::{
    chip::Chip,
    domain::{Position, ProgramType},
    protocol::{BoardSnapshot, ProgramRows},
};

use crate::program::Program;

/// The main and missile programs plus which of them is being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    main: Program,
    missile: Program,
    length: usize,
    target_program: ProgramType,
}

impl Board {
    pub fn new(length: usize) -> Self {
        Self {
            main: Program::empty(length),
            missile: Program::empty(length),
            length,
            target_program: ProgramType::Main,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn target_program(&self) -> ProgramType {
        self.target_program
    }

    /// Selects the program later grid operations address. Grid contents are not touched.
    pub fn set_target_program(&mut self, program: ProgramType) {
        self.target_program = program;
    }

    pub fn program(&self, program: ProgramType) -> &Program {
        match program {
            ProgramType::Main => &self.main,
            ProgramType::Missile => &self.missile,
        }
    }

    pub fn program_mut(&mut self, program: ProgramType) -> &mut Program {
        match program {
            ProgramType::Main => &mut self.main,
            ProgramType::Missile => &mut self.missile,
        }
    }

    pub fn target(&self) -> &Program {
        self.program(self.target_program)
    }

    pub fn target_mut(&mut self) -> &mut Program {
        self.program_mut(self.target_program)
    }

    pub fn get(&self, program: ProgramType, position: Position) -> Option<&Chip> {
        self.program(program).get(position)
    }

    pub fn set(&mut self, program: ProgramType, position: Position, chip: Option<Chip>) -> bool {
        self.program_mut(program).set(position, chip)
    }

    pub fn replace(&mut self, program: ProgramType, rows: ProgramRows) -> ProgramRows {
        self.program_mut(program).replace(rows)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            main: self.main.rows().clone(),
            missile: self.missile.rows().clone(),
            length: self.length,
            target_program: self.target_program,
        }
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;
