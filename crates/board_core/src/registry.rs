//! Chip type registry: per-program type sets, default field values and numeric limits.
//!
//! This is the only place that knows what a freshly created chip of a given type looks like
//! and which range each numeric field is clamped into.

use shared::{
    chip::{
        CheckFields, Chip, ChipBody, ChipKind, FireLaserFields, LogFields, ScanDebugFields,
        ScanFields, WaitFields,
    },
    domain::{Comparison, Direction, ProgramType},
    error::ChipError,
};

const DEFAULT_NEXT: Direction = Direction::Down;
const DEFAULT_BRANCH: Direction = Direction::Right;

pub const MAIN_KINDS: &[ChipKind] = &[
    ChipKind::Nop,
    ChipKind::Random,
    ChipKind::Frame,
    ChipKind::Altitude,
    ChipKind::Wait,
    ChipKind::Shield,
    ChipKind::Temperature,
    ChipKind::MissileAmmo,
    ChipKind::ScanEnemy,
    ChipKind::ScanAttack,
    ChipKind::Ahead,
    ChipKind::Back,
    ChipKind::Ascent,
    ChipKind::Descent,
    ChipKind::Turn,
    ChipKind::FireLaser,
    ChipKind::FireMissile,
    ChipKind::Fuel,
    ChipKind::Log,
    ChipKind::ScanDebug,
];

pub const MISSILE_KINDS: &[ChipKind] = &[
    ChipKind::Nop,
    ChipKind::Random,
    ChipKind::Frame,
    ChipKind::Altitude,
    ChipKind::Wait,
    ChipKind::Heading,
    ChipKind::ScanEnemy,
    ChipKind::SpeedUp,
    ChipKind::SpeedDown,
    ChipKind::TurnRight,
    ChipKind::TurnLeft,
    ChipKind::Fuel,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipField {
    Value,
    Direction,
    Angle,
    Range,
    Force,
}

impl ChipField {
    pub fn as_str(self) -> &'static str {
        match self {
            ChipField::Value => "value",
            ChipField::Direction => "direction",
            ChipField::Angle => "angle",
            ChipField::Range => "range",
            ChipField::Force => "force",
        }
    }
}

/// Inclusive range for one numeric field. `step` is a hint for editors and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimit {
    pub field: ChipField,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl FieldLimit {
    const fn new(field: ChipField, min: i32, max: i32, step: i32) -> Self {
        Self {
            field,
            min,
            max,
            step,
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

const WAIT_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 1000, 1)];
const FRAME_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 10000, 1)];
const PERCENT_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 100, 5)];
const ALTITUDE_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 1000, 5)];
const MISSILE_AMMO_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 20, 5)];
const RANDOM_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 6, 1)];
const HEADING_LIMITS: &[FieldLimit] = &[FieldLimit::new(ChipField::Value, 0, 360, 5)];
const SCAN_LIMITS: &[FieldLimit] = &[
    FieldLimit::new(ChipField::Direction, 0, 360, 5),
    FieldLimit::new(ChipField::Angle, 0, 360, 5),
    FieldLimit::new(ChipField::Range, 0, 1000, 5),
];
const FIRE_LASER_LIMITS: &[FieldLimit] = &[
    FieldLimit::new(ChipField::Direction, 0, 360, 5),
    FieldLimit::new(ChipField::Force, 3, 8, 1),
];

/// Numeric limits declared for `kind`, empty for types without numeric fields.
pub fn field_limits(kind: ChipKind) -> &'static [FieldLimit] {
    match kind {
        ChipKind::Wait => WAIT_LIMITS,
        ChipKind::Frame => FRAME_LIMITS,
        ChipKind::Fuel | ChipKind::Shield | ChipKind::Temperature => PERCENT_LIMITS,
        ChipKind::Altitude => ALTITUDE_LIMITS,
        ChipKind::MissileAmmo => MISSILE_AMMO_LIMITS,
        ChipKind::Random => RANDOM_LIMITS,
        ChipKind::Heading => HEADING_LIMITS,
        ChipKind::ScanEnemy | ChipKind::ScanAttack | ChipKind::ScanDebug => SCAN_LIMITS,
        ChipKind::FireLaser => FIRE_LASER_LIMITS,
        ChipKind::Nop
        | ChipKind::Ahead
        | ChipKind::Back
        | ChipKind::Ascent
        | ChipKind::Descent
        | ChipKind::Turn
        | ChipKind::FireMissile
        | ChipKind::Log
        | ChipKind::SpeedUp
        | ChipKind::SpeedDown
        | ChipKind::TurnRight
        | ChipKind::TurnLeft => &[],
    }
}

pub fn limit_for(kind: ChipKind, field: ChipField) -> Option<FieldLimit> {
    field_limits(kind)
        .iter()
        .copied()
        .find(|limit| limit.field == field)
}

fn check(branch: Direction, value: i32) -> CheckFields {
    CheckFields {
        branch,
        greater_or_less: Comparison::Greater,
        value,
    }
}

fn default_body(kind: ChipKind, branch: Direction) -> ChipBody {
    match kind {
        ChipKind::Nop => ChipBody::Nop,
        ChipKind::Random => ChipBody::Random(check(branch, 1)),
        ChipKind::Frame => ChipBody::Frame(check(branch, 50)),
        ChipKind::Altitude => ChipBody::Altitude(check(branch, 100)),
        ChipKind::Wait => ChipBody::Wait(WaitFields { value: 0 }),
        ChipKind::Shield => ChipBody::Shield(check(branch, 50)),
        ChipKind::Temperature => ChipBody::Temperature(check(branch, 50)),
        ChipKind::MissileAmmo => ChipBody::MissileAmmo(check(branch, 5)),
        ChipKind::ScanEnemy => ChipBody::ScanEnemy(ScanFields {
            branch,
            direction: 0,
            angle: 90,
            range: 100,
        }),
        ChipKind::ScanAttack => ChipBody::ScanAttack(ScanFields {
            branch,
            direction: 0,
            angle: 90,
            range: 100,
        }),
        ChipKind::Ahead => ChipBody::Ahead,
        ChipKind::Back => ChipBody::Back,
        ChipKind::Ascent => ChipBody::Ascent,
        ChipKind::Descent => ChipBody::Descent,
        ChipKind::Turn => ChipBody::Turn,
        // Strongest shot inside the declared force range.
        ChipKind::FireLaser => ChipBody::FireLaser(FireLaserFields {
            direction: 0,
            force: 8,
        }),
        ChipKind::FireMissile => ChipBody::FireMissile,
        ChipKind::Fuel => ChipBody::Fuel(check(branch, 50)),
        ChipKind::Log => ChipBody::Log(LogFields::default()),
        ChipKind::ScanDebug => ChipBody::ScanDebug(ScanDebugFields {
            direction: 0,
            angle: 90,
            range: 100,
        }),
        ChipKind::Heading => ChipBody::Heading(check(branch, 0)),
        ChipKind::SpeedUp => ChipBody::SpeedUp,
        ChipKind::SpeedDown => ChipBody::SpeedDown,
        ChipKind::TurnRight => ChipBody::TurnRight,
        ChipKind::TurnLeft => ChipBody::TurnLeft,
    }
}

/// Clamps every numeric field of `chip` into the limits declared for its type.
pub fn clamp_chip(mut chip: Chip) -> Chip {
    let kind = chip.kind();
    let bound = |field: ChipField, value: i32| {
        limit_for(kind, field).map_or(value, |limit| limit.clamp(value))
    };

    match &mut chip.body {
        ChipBody::Random(f)
        | ChipBody::Frame(f)
        | ChipBody::Altitude(f)
        | ChipBody::Shield(f)
        | ChipBody::Temperature(f)
        | ChipBody::MissileAmmo(f)
        | ChipBody::Fuel(f)
        | ChipBody::Heading(f) => f.value = bound(ChipField::Value, f.value),
        ChipBody::Wait(f) => f.value = bound(ChipField::Value, f.value),
        ChipBody::ScanEnemy(f) | ChipBody::ScanAttack(f) => {
            f.direction = bound(ChipField::Direction, f.direction);
            f.angle = bound(ChipField::Angle, f.angle);
            f.range = bound(ChipField::Range, f.range);
        }
        ChipBody::ScanDebug(f) => {
            f.direction = bound(ChipField::Direction, f.direction);
            f.angle = bound(ChipField::Angle, f.angle);
            f.range = bound(ChipField::Range, f.range);
        }
        ChipBody::FireLaser(f) => {
            f.direction = bound(ChipField::Direction, f.direction);
            f.force = bound(ChipField::Force, f.force);
        }
        ChipBody::Nop
        | ChipBody::Ahead
        | ChipBody::Back
        | ChipBody::Ascent
        | ChipBody::Descent
        | ChipBody::Turn
        | ChipBody::FireMissile
        | ChipBody::Log(_)
        | ChipBody::SpeedUp
        | ChipBody::SpeedDown
        | ChipBody::TurnRight
        | ChipBody::TurnLeft => {}
    }
    chip
}

/// Chip types accepted by one program, and the constructor for them.
#[derive(Debug, Clone)]
pub struct ChipRegistry {
    program: ProgramType,
    kinds: &'static [ChipKind],
}

impl ChipRegistry {
    pub fn for_program(program: ProgramType) -> Self {
        let kinds = match program {
            ProgramType::Main => MAIN_KINDS,
            ProgramType::Missile => MISSILE_KINDS,
        };
        Self { program, kinds }
    }

    pub fn program(&self) -> ProgramType {
        self.program
    }

    /// Registered types in editor display order.
    pub fn kinds(&self) -> &'static [ChipKind] {
        self.kinds
    }

    pub fn is_registered(&self, kind: ChipKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn lookup(&self, name: &str) -> Result<ChipKind, ChipError> {
        name.parse::<ChipKind>()
            .ok()
            .filter(|kind| self.is_registered(*kind))
            .ok_or_else(|| ChipError::unknown_type(name, self.program))
    }

    /// Builds a chip of type `name` with its defaults. When `previous` is given its `next`
    /// is kept, and so is its `branch` if the new type branches too.
    pub fn create(&self, name: &str, previous: Option<&Chip>) -> Result<Chip, ChipError> {
        let kind = self.lookup(name)?;
        self.create_kind(kind, previous)
    }

    pub fn create_kind(&self, kind: ChipKind, previous: Option<&Chip>) -> Result<Chip, ChipError> {
        if !self.is_registered(kind) {
            return Err(ChipError::unknown_type(kind.as_str(), self.program));
        }

        let next = previous.map_or(DEFAULT_NEXT, |chip| chip.next);
        let branch = previous
            .and_then(Chip::branch)
            .unwrap_or(DEFAULT_BRANCH);
        Ok(Chip {
            body: default_body(kind, branch),
            next,
        })
    }

    /// The chip an empty cell opens with: `nop` pointing down.
    pub fn blank(&self) -> Chip {
        Chip {
            body: ChipBody::Nop,
            next: DEFAULT_NEXT,
        }
    }

    pub fn clamp(&self, chip: Chip) -> Chip {
        clamp_chip(chip)
    }
}

/// Both program registries.
#[derive(Debug, Clone)]
pub struct ChipCatalog {
    main: ChipRegistry,
    missile: ChipRegistry,
}

impl ChipCatalog {
    pub fn standard() -> Self {
        Self {
            main: ChipRegistry::for_program(ProgramType::Main),
            missile: ChipRegistry::for_program(ProgramType::Missile),
        }
    }

    pub fn registry(&self, program: ProgramType) -> &ChipRegistry {
        match program {
            ProgramType::Main => &self.main,
            ProgramType::Missile => &self.missile,
        }
    }
}

impl Default for ChipCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
