//! Per-cast bookkeeping.
//!
//! A [`CastRecord`] exists for every cast a caster has in flight. Hooks see
//! casts through short-lived [`CastContext`] / [`InterruptContext`] values,
//! and HUD code reads them through copied [`CastSnapshot`]s.
mod context;
mod record;
mod snapshot;
mod state;

pub use context::{CastContext, InterruptContext, InterruptSource};
pub use record::{CastHandle, CastRecord};
pub use snapshot::CastSnapshot;
pub use state::CastState;
