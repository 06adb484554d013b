//! Stellar evolution state machine.
//!
//! Pure functions mapping `(stage, mass)` to the next stage. Physics never
//! writes a stage directly; every mass-increasing event (merge, accretion,
//! explicit edit) funnels through [`advance`], which walks the transition
//! table to a fixpoint. The supernova branch is the one non-monotone event:
//! it sheds mass once and lands on a compact remnant.

use crate::model::config::EvolutionConfig;
use serde::{Deserialize, Serialize};

/// Evolutionary classification of a body.
///
/// Ordering in `rank` is monotone along the main sequence; the remnant
/// stages sit above the giants so that post-supernova bodies never regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Planet,
    BrownDwarf,
    RedDwarf,
    WhiteDwarf,
    Star,
    Giant,
    RedGiant,
    BlueGiant,
    NeutronStar,
    BlackHole,
}

impl Stage {
    /// Monotonicity rank; stage transitions outside the supernova branch
    /// only ever increase this.
    pub fn rank(self) -> u8 {
        match self {
            Stage::Planet => 0,
            Stage::BrownDwarf | Stage::RedDwarf => 1,
            Stage::WhiteDwarf => 2,
            Stage::Star => 2,
            Stage::Giant | Stage::RedGiant => 3,
            Stage::BlueGiant => 4,
            Stage::NeutronStar => 5,
            Stage::BlackHole => 6,
        }
    }

    /// Fixed display color for the stage, or `None` for planets, which
    /// keep their originally assigned color.
    pub fn color(self) -> Option<(u8, u8, u8)> {
        match self {
            Stage::Planet => None,
            Stage::BrownDwarf => Some((139, 69, 19)),
            Stage::RedDwarf => Some((205, 92, 92)),
            Stage::WhiteDwarf => Some((240, 240, 255)),
            Stage::Star => Some((255, 255, 200)),
            Stage::Giant => Some((255, 140, 0)),
            Stage::RedGiant => Some((255, 69, 0)),
            Stage::BlueGiant => Some((120, 160, 255)),
            Stage::NeutronStar => Some((200, 220, 255)),
            Stage::BlackHole => Some((0, 0, 0)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Planet => "Planet",
            Stage::BrownDwarf => "Brown Dwarf",
            Stage::RedDwarf => "Red Dwarf",
            Stage::WhiteDwarf => "White Dwarf",
            Stage::Star => "Star",
            Stage::Giant => "Giant",
            Stage::RedGiant => "Red Giant",
            Stage::BlueGiant => "Blue Giant",
            Stage::NeutronStar => "Neutron Star",
            Stage::BlackHole => "Black Hole",
        }
    }
}

/// Outcome of a stage-table evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Already in the appropriate stage for its mass.
    None,
    /// Ordinary forward transition.
    Advanced { from: Stage, to: Stage },
    /// Supernova fired: body must freeze, shed mass, and take the remnant
    /// stage with its radius override.
    Supernova { from: Stage, remnant: Remnant },
}

/// Remnant branch of a supernova.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remnant {
    NeutronStar,
    BlackHole,
}

/// Single step of the transition table. Returns the next stage for the
/// current mass, or `None` when no threshold is crossed. Supernova rows
/// are reported separately because they carry side effects.
fn next(stage: Stage, mass: f64, cfg: &EvolutionConfig) -> Option<Stage> {
    match stage {
        Stage::Planet if mass >= cfg.red_dwarf_mass => Some(Stage::RedDwarf),
        Stage::BrownDwarf | Stage::RedDwarf if mass >= cfg.star_mass => Some(Stage::Star),
        Stage::Star if mass >= cfg.red_giant_mass => Some(Stage::RedGiant),
        Stage::RedGiant if mass >= cfg.blue_giant_mass => Some(Stage::BlueGiant),
        // Legacy giant path terminates directly in a black hole.
        Stage::Giant if mass >= cfg.black_hole_mass => Some(Stage::BlackHole),
        Stage::NeutronStar if mass >= cfg.black_hole_mass => Some(Stage::BlackHole),
        _ => None,
    }
}

/// True when `(stage, mass)` sits on a supernova row.
fn supernova_due(stage: Stage, mass: f64, cfg: &EvolutionConfig) -> bool {
    match stage {
        Stage::BlueGiant => mass >= cfg.black_hole_mass,
        Stage::WhiteDwarf => mass >= cfg.chandrasekhar_limit,
        _ => false,
    }
}

/// Evaluates the full transition table for `(stage, mass)`, walking
/// ordinary rows to a fixpoint. Stops at a supernova row without applying
/// it: the caller owns the mass reduction and freeze. Idempotent: a body
/// already in its terminal stage for its mass yields `Transition::None`.
pub fn advance(stage: Stage, mass: f64, cfg: &EvolutionConfig) -> Transition {
    let mut current = stage;
    loop {
        if supernova_due(current, mass, cfg) {
            let remnant = if mass * cfg.supernova_retention >= cfg.black_hole_mass {
                Remnant::BlackHole
            } else {
                Remnant::NeutronStar
            };
            return Transition::Supernova {
                from: current,
                remnant,
            };
        }
        match next(current, mass, cfg) {
            Some(n) => current = n,
            None => break,
        }
    }
    if current == stage {
        Transition::None
    } else {
        Transition::Advanced {
            from: stage,
            to: current,
        }
    }
}
