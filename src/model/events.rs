//! Engine events surfaced to the UI layer each tick.

use crate::model::stage::Stage;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SimEvent {
    /// Two overlapping bodies merged under momentum conservation.
    Merge { survivor: Uuid, absorbed: Uuid },
    /// A black hole swallowed a body inside its event horizon.
    Accretion { black_hole: Uuid, absorbed: Uuid },
    /// Ordinary forward stage transition.
    StageAdvance { id: Uuid, from: Stage, to: Stage },
    /// Supernova fired; the body is frozen until its timer runs out.
    Supernova { id: Uuid, remnant: Stage },
    /// A degenerate body was removed to keep the tick alive.
    FaultRemoved { id: Uuid, reason: String },
}
