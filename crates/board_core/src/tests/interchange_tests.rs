use super::*;
use serde_json::json;
use shared::{
    chip::{ChipBody, ChipKind, LogFields},
    domain::{Comparison, Direction, Position, ProgramType},
};

const SAMPLE: &str = r#"[[{"type":"scanAttack","next":"downright","branch":"right","direction":0,"angle":90,"range":100},{"type":"back","next":"right"},{"type":"descent","next":"up"},null],[{"type":"ascent","next":"left"},{"type":"altitude","next":"down","branch":"left","greaterOrLess":"less","value":100},null,null],[{"type":"turn","next":"left"},{"type":"scanEnemy","next":"left","branch":"down","direction":0,"angle":180,"range":1000},{"type":"random","next":"right","branch":"downright","greaterOrLess":"greater","value":5},{"type":"fireLaser","next":"right","direction":0,"force":8}],[{"type":"ahead","next":"down"},{"type":"scanEnemy","next":"left","branch":"right","direction":0,"angle":60,"range":200},{"type":"temperature","next":"down","branch":"up","greaterOrLess":"less","value":80},{"type":"fireMissile","next":"down"}]]"#;

fn main_registry() -> ChipRegistry {
    ChipRegistry::for_program(ProgramType::Main)
}

#[test]
fn imports_sample_program() {
    let program = parse_program(&main_registry(), SAMPLE).expect("sample");

    assert_eq!(program.height(), 4);
    assert_eq!(program.width(), 4);
    assert_eq!(program.chip_count(), 13);

    let altitude = program.get(Position::new(1, 1)).expect("altitude");
    assert_eq!(altitude.next, Direction::Down);
    match &altitude.body {
        ChipBody::Altitude(fields) => {
            assert_eq!(fields.branch, Direction::Left);
            assert_eq!(fields.greater_or_less, Comparison::Less);
            assert_eq!(fields.value, 100);
        }
        other => panic!("unexpected body: {other:?}"),
    }
    assert!(program.get(Position::new(3, 0)).is_none());
}

#[test]
fn export_then_import_preserves_program() {
    let registry = main_registry();
    let program = parse_program(&registry, SAMPLE).expect("sample");

    let text = export_program(&program).expect("export");
    let again = parse_program(&registry, &text).expect("reimport");

    assert_eq!(again, program);
}

#[test]
fn missing_fields_take_registry_defaults() {
    let cell = import_cell(&main_registry(), &json!({"type": "log", "next": "up"}))
        .expect("log")
        .expect("chip");

    assert_eq!(cell.body, ChipBody::Log(LogFields::default()));

    let fuel = import_cell(&main_registry(), &json!({"type": "fuel", "next": "left"}))
        .expect("fuel")
        .expect("chip");
    assert_eq!(fuel.next, Direction::Left);
    assert_eq!(fuel.branch(), Some(Direction::Right));
}

#[test]
fn cells_without_next_are_rejected() {
    let registry = main_registry();

    let err = import_cell(&registry, &json!({"type": "fuel"})).expect_err("no next");
    assert_eq!(err, ChipError::malformed_chip("missing string field 'next'"));

    let err = parse_program(&registry, r#"[[{"type":"ahead","next":3}]]"#).expect_err("numeric next");
    assert_eq!(
        err,
        ChipError::malformed_chip("cell (0, 0): missing string field 'next'")
    );
}

#[test]
fn unknown_extra_fields_are_ignored() {
    let chip = import_cell(
        &main_registry(),
        &json!({"type": "ahead", "next": "left", "branch": "up", "color": "red"}),
    )
    .expect("ahead")
    .expect("chip");

    assert_eq!(chip.kind(), ChipKind::Ahead);
    assert_eq!(chip.branch(), None);
    assert_eq!(
        serde_json::to_value(&chip).expect("serialize"),
        json!({"type": "ahead", "next": "left"})
    );
}

#[test]
fn import_does_not_clamp() {
    let chip = import_cell(
        &main_registry(),
        &json!({"type": "shield", "next": "down", "value": 500}),
    )
    .expect("shield")
    .expect("chip");

    match chip.body {
        ChipBody::Shield(fields) => assert_eq!(fields.value, 500),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[test]
fn unknown_type_fails_import() {
    let err = parse_program(
        &ChipRegistry::for_program(ProgramType::Missile),
        r#"[[{"type":"shield","next":"down"}]]"#,
    )
    .expect_err("shield is not a missile chip");

    assert_eq!(
        err,
        ChipError::unknown_type("shield", ProgramType::Missile)
    );
}

#[test]
fn malformed_documents_are_reported() {
    let registry = main_registry();

    assert!(matches!(
        parse_program(&registry, "{}"),
        Err(ChipError::MalformedProgram { .. })
    ));
    assert!(matches!(
        parse_program(&registry, "[1]"),
        Err(ChipError::MalformedProgram { .. })
    ));
    assert!(matches!(
        parse_program(&registry, "not json"),
        Err(ChipError::MalformedProgram { .. })
    ));

    let err = parse_program(&registry, r#"[[null, {"next": "up"}]]"#).expect_err("no type");
    assert_eq!(
        err,
        ChipError::malformed_chip("cell (1, 0): missing string field 'type'")
    );

    let err = parse_program(&registry, r#"[[{"type":"wait","next":"sideways"}]]"#)
        .expect_err("bad direction");
    assert!(matches!(err, ChipError::MalformedChip { .. }));
}
