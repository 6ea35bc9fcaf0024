//! Plain-text rendering of a program grid.

use board_core::Program;
use shared::{chip::Chip, domain::Position};

const EMPTY_CELL: &str = ".";

/// One line per row; each cell shows the chip type, its `next` arrow and, for conditional
/// chips, the `branch` arrow.
pub fn render_program(program: &Program) -> String {
    let width = program.width();
    let cells: Vec<Vec<String>> = (0..program.height())
        .map(|y| {
            (0..width)
                .map(|x| {
                    program
                        .get(Position::new(x, y))
                        .map_or_else(|| EMPTY_CELL.to_owned(), cell_label)
                })
                .collect()
        })
        .collect();

    let column_width = cells
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| format!("{label:<column_width$}"))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cell_label(chip: &Chip) -> String {
    match chip.branch() {
        Some(branch) => format!("{} {}{}", chip.kind(), chip.next.arrow(), branch.arrow()),
        None => format!("{} {}", chip.kind(), chip.next.arrow()),
    }
}

#[cfg(test)]
mod tests {
    use board_core::ChipRegistry;
    use shared::domain::{Direction, ProgramType};

    use super::*;

    #[test]
    fn labels_show_wiring_arrows() {
        let registry = ChipRegistry::for_program(ProgramType::Main);
        let mut fuel = registry.create("fuel", None).expect("fuel");
        fuel.next = Direction::Left;
        assert_eq!(cell_label(&fuel), "fuel ←→");
        assert_eq!(cell_label(&registry.blank()), "nop ↓");
    }

    #[test]
    fn renders_aligned_grid() {
        let registry = ChipRegistry::for_program(ProgramType::Main);
        let mut program = Program::empty(2);
        program.set(
            Position::new(0, 0),
            Some(registry.create("ahead", None).expect("ahead")),
        );
        program.set(Position::new(1, 1), Some(registry.blank()));

        assert_eq!(render_program(&program), "ahead ↓ | .\n.       | nop ↓");
    }
}
