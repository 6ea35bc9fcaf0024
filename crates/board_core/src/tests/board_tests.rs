use super::*;
use crate::registry::ChipRegistry;
use shared::domain::Direction;

fn chip(name: &str) -> Chip {
    ChipRegistry::for_program(ProgramType::Main)
        .create(name, None)
        .expect("registered chip")
}

#[test]
fn new_board_has_two_empty_square_programs() {
    let board = Board::new(4);

    assert_eq!(board.length(), 4);
    assert_eq!(board.target_program(), ProgramType::Main);
    for program in ProgramType::ALL {
        let grid = board.program(*program);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.chip_count(), 0);
    }
}

#[test]
fn programs_are_independent() {
    let mut board = Board::new(3);
    let position = Position::new(1, 2);

    assert!(board.set(ProgramType::Missile, position, Some(chip("ahead"))));

    assert!(board.get(ProgramType::Main, position).is_none());
    assert_eq!(
        board.get(ProgramType::Missile, position).map(Chip::kind),
        Some(shared::chip::ChipKind::Ahead)
    );
}

#[test]
fn switching_target_keeps_grid_contents() {
    let mut board = Board::new(2);
    board.target_mut().set(Position::new(0, 0), Some(chip("turn")));

    board.set_target_program(ProgramType::Missile);
    assert!(board.target().get(Position::new(0, 0)).is_none());

    board.set_target_program(ProgramType::Main);
    assert!(board.target().get(Position::new(0, 0)).is_some());
}

#[test]
fn out_of_range_writes_are_refused() {
    let mut program = Program::empty(2);

    assert!(!program.contains(Position::new(2, 0)));
    assert!(!program.set(Position::new(2, 0), Some(chip("nop"))));
    assert!(!program.set(Position::new(0, 5), Some(chip("nop"))));
    assert_eq!(program.chip_count(), 0);
    assert!(program.get(Position::new(9, 9)).is_none());
}

#[test]
fn rows_are_indexed_by_y_then_x() {
    let mut program = Program::empty(3);
    let mut back = chip("back");
    back.next = Direction::Left;
    program.set(Position::new(2, 0), Some(back.clone()));

    assert_eq!(program.rows()[0][2], Some(back));
    assert!(program.rows()[2][0].is_none());
    let placed: Vec<_> = program.chips().map(|(position, _)| position).collect();
    assert_eq!(placed, vec![Position::new(2, 0)]);
}

#[test]
fn take_empties_the_cell() {
    let mut program = Program::empty(2);
    program.set(Position::new(1, 1), Some(chip("descent")));

    let taken = program.take(Position::new(1, 1)).expect("chip");
    assert_eq!(taken.kind(), shared::chip::ChipKind::Descent);
    assert!(!program.is_occupied(Position::new(1, 1)));
}

#[test]
fn replace_swaps_whole_grid_of_one_program() {
    let mut board = Board::new(2);
    let rows = vec![vec![Some(chip("ascent")), None, None]];

    let previous = board.replace(ProgramType::Main, rows.clone());

    assert_eq!(previous, vec![vec![None, None], vec![None, None]]);
    assert_eq!(board.program(ProgramType::Main).rows(), &rows);
    assert_eq!(board.program(ProgramType::Main).width(), 3);
    assert_eq!(board.program(ProgramType::Missile).chip_count(), 0);
}

#[test]
fn snapshot_reflects_both_programs() {
    let mut board = Board::new(1);
    board.set(ProgramType::Missile, Position::new(0, 0), Some(chip("nop")));
    board.set_target_program(ProgramType::Missile);

    let snapshot = board.snapshot();

    assert_eq!(snapshot.length, 1);
    assert_eq!(snapshot.target_program, ProgramType::Missile);
    assert_eq!(snapshot.main, vec![vec![None]]);
    assert_eq!(snapshot.missile[0][0].as_ref().map(Chip::kind), Some(shared::chip::ChipKind::Nop));
}
