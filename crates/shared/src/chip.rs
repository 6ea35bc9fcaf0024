//! Chip model: the closed set of chip types and the per-type field records.
//!
//! A chip serializes as one flat JSON object, e.g.
//! `{"type":"altitude","branch":"left","greaterOrLess":"less","value":100,"next":"down"}`.

use serde::{Deserialize, Serialize};

use crate::domain::{Comparison, Direction};

string_enum! {
    /// Every chip type known to either program. Which of them a program accepts is decided by
    /// the registry, not here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    ChipKind {
        Nop => "nop",
        Random => "random",
        Frame => "frame",
        Altitude => "altitude",
        Wait => "wait",
        Shield => "shield",
        Temperature => "temperature",
        MissileAmmo => "missileAmmo",
        ScanEnemy => "scanEnemy",
        ScanAttack => "scanAttack",
        Ahead => "ahead",
        Back => "back",
        Ascent => "ascent",
        Descent => "descent",
        Turn => "turn",
        FireLaser => "fireLaser",
        FireMissile => "fireMissile",
        Fuel => "fuel",
        Log => "log",
        ScanDebug => "scanDebug",
        Heading => "direction",
        SpeedUp => "speedUp",
        SpeedDown => "speedDown",
        TurnRight => "turnRight",
        TurnLeft => "turnLeft",
    }
}

impl ChipKind {
    /// Conditional chips carry a `branch` successor taken when their test holds.
    pub fn is_conditional(self) -> bool {
        matches!(
            self,
            ChipKind::Random
                | ChipKind::Frame
                | ChipKind::Altitude
                | ChipKind::Shield
                | ChipKind::Temperature
                | ChipKind::MissileAmmo
                | ChipKind::ScanEnemy
                | ChipKind::ScanAttack
                | ChipKind::Fuel
                | ChipKind::Heading
        )
    }
}

/// Threshold test against a sensor value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckFields {
    pub branch: Direction,
    pub greater_or_less: Comparison,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitFields {
    pub value: i32,
}

/// Sector scan; `branch` is taken when something is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFields {
    pub branch: Direction,
    pub direction: i32,
    pub angle: i32,
    pub range: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireLaserFields {
    pub direction: i32,
    pub force: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogFields {
    #[serde(default)]
    pub message: String,
}

/// Debug scan: same sector as [`ScanFields`] but unconditional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanDebugFields {
    pub direction: i32,
    pub angle: i32,
    pub range: i32,
}

/// Type tag plus the fields that type carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChipBody {
    Nop,
    Random(CheckFields),
    Frame(CheckFields),
    Altitude(CheckFields),
    Wait(WaitFields),
    Shield(CheckFields),
    Temperature(CheckFields),
    MissileAmmo(CheckFields),
    ScanEnemy(ScanFields),
    ScanAttack(ScanFields),
    Ahead,
    Back,
    Ascent,
    Descent,
    Turn,
    FireLaser(FireLaserFields),
    FireMissile,
    Fuel(CheckFields),
    Log(LogFields),
    ScanDebug(ScanDebugFields),
    #[serde(rename = "direction")]
    Heading(CheckFields),
    SpeedUp,
    SpeedDown,
    TurnRight,
    TurnLeft,
}

impl ChipBody {
    pub fn kind(&self) -> ChipKind {
        match self {
            ChipBody::Nop => ChipKind::Nop,
            ChipBody::Random(_) => ChipKind::Random,
            ChipBody::Frame(_) => ChipKind::Frame,
            ChipBody::Altitude(_) => ChipKind::Altitude,
            ChipBody::Wait(_) => ChipKind::Wait,
            ChipBody::Shield(_) => ChipKind::Shield,
            ChipBody::Temperature(_) => ChipKind::Temperature,
            ChipBody::MissileAmmo(_) => ChipKind::MissileAmmo,
            ChipBody::ScanEnemy(_) => ChipKind::ScanEnemy,
            ChipBody::ScanAttack(_) => ChipKind::ScanAttack,
            ChipBody::Ahead => ChipKind::Ahead,
            ChipBody::Back => ChipKind::Back,
            ChipBody::Ascent => ChipKind::Ascent,
            ChipBody::Descent => ChipKind::Descent,
            ChipBody::Turn => ChipKind::Turn,
            ChipBody::FireLaser(_) => ChipKind::FireLaser,
            ChipBody::FireMissile => ChipKind::FireMissile,
            ChipBody::Fuel(_) => ChipKind::Fuel,
            ChipBody::Log(_) => ChipKind::Log,
            ChipBody::ScanDebug(_) => ChipKind::ScanDebug,
            ChipBody::Heading(_) => ChipKind::Heading,
            ChipBody::SpeedUp => ChipKind::SpeedUp,
            ChipBody::SpeedDown => ChipKind::SpeedDown,
            ChipBody::TurnRight => ChipKind::TurnRight,
            ChipBody::TurnLeft => ChipKind::TurnLeft,
        }
    }

    pub fn branch(&self) -> Option<Direction> {
        match self {
            ChipBody::Random(f)
            | ChipBody::Frame(f)
            | ChipBody::Altitude(f)
            | ChipBody::Shield(f)
            | ChipBody::Temperature(f)
            | ChipBody::MissileAmmo(f)
            | ChipBody::Fuel(f)
            | ChipBody::Heading(f) => Some(f.branch),
            ChipBody::ScanEnemy(f) | ChipBody::ScanAttack(f) => Some(f.branch),
            _ => None,
        }
    }

    fn branch_mut(&mut self) -> Option<&mut Direction> {
        match self {
            ChipBody::Random(f)
            | ChipBody::Frame(f)
            | ChipBody::Altitude(f)
            | ChipBody::Shield(f)
            | ChipBody::Temperature(f)
            | ChipBody::MissileAmmo(f)
            | ChipBody::Fuel(f)
            | ChipBody::Heading(f) => Some(&mut f.branch),
            ChipBody::ScanEnemy(f) | ChipBody::ScanAttack(f) => Some(&mut f.branch),
            ChipBody::Nop
            | ChipBody::Wait(_)
            | ChipBody::Ahead
            | ChipBody::Back
            | ChipBody::Ascent
            | ChipBody::Descent
            | ChipBody::Turn
            | ChipBody::FireLaser(_)
            | ChipBody::FireMissile
            | ChipBody::Log(_)
            | ChipBody::ScanDebug(_)
            | ChipBody::SpeedUp
            | ChipBody::SpeedDown
            | ChipBody::TurnRight
            | ChipBody::TurnLeft => None,
        }
    }
}

/// One instruction placed in a program cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    #[serde(flatten)]
    pub body: ChipBody,
    pub next: Direction,
}

impl Chip {
    pub fn kind(&self) -> ChipKind {
        self.body.kind()
    }

    pub fn branch(&self) -> Option<Direction> {
        self.body.branch()
    }

    /// Rewires the branch successor. Returns false for chips without one.
    pub fn set_branch(&mut self, direction: Direction) -> bool {
        match self.body.branch_mut() {
            Some(branch) => {
                *branch = direction;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn chip_serializes_as_flat_object() {
        let chip = Chip {
            body: ChipBody::Altitude(CheckFields {
                branch: Direction::Left,
                greater_or_less: Comparison::Less,
                value: 100,
            }),
            next: Direction::Down,
        };

        let value = serde_json::to_value(&chip).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "altitude",
                "branch": "left",
                "greaterOrLess": "less",
                "value": 100,
                "next": "down"
            })
        );
    }

    #[test]
    fn simple_chip_carries_only_type_and_next() {
        let chip: Chip =
            serde_json::from_value(json!({"type": "fireMissile", "next": "upleft"})).expect("parse");
        assert_eq!(chip.kind(), ChipKind::FireMissile);
        assert_eq!(chip.next, Direction::UpLeft);
        assert_eq!(chip.branch(), None);
    }

    #[test]
    fn missile_direction_chip_uses_direction_tag() {
        let chip: Chip = serde_json::from_value(json!({
            "type": "direction",
            "next": "down",
            "branch": "right",
            "greaterOrLess": "greater",
            "value": 90
        }))
        .expect("parse");
        assert_eq!(chip.kind(), ChipKind::Heading);
        assert_eq!(chip.kind().as_str(), "direction");
    }

    #[test]
    fn set_branch_only_applies_to_conditional_chips() {
        let mut scan = Chip {
            body: ChipBody::ScanEnemy(ScanFields {
                branch: Direction::Right,
                direction: 0,
                angle: 90,
                range: 100,
            }),
            next: Direction::Down,
        };
        assert!(scan.set_branch(Direction::Up));
        assert_eq!(scan.branch(), Some(Direction::Up));

        let mut ahead = Chip {
            body: ChipBody::Ahead,
            next: Direction::Down,
        };
        assert!(!ahead.set_branch(Direction::Up));
        assert_eq!(ahead.branch(), None);
    }

    #[test]
    fn conditional_kinds_match_bodies_with_branch() {
        assert!(ChipKind::Random.is_conditional());
        assert!(ChipKind::Heading.is_conditional());
        assert!(!ChipKind::ScanDebug.is_conditional());
        assert!(!ChipKind::Wait.is_conditional());
        assert_eq!("missileAmmo".parse::<ChipKind>(), Ok(ChipKind::MissileAmmo));
        assert!("teleport".parse::<ChipKind>().is_err());
    }
}
