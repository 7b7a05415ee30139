//! Standard results produced by the skill system.
//!
//! Skills compare against these values (e.g. to react differently when a cast
//! failed because of cooldown), so every factory returns the same value on
//! every call.

use crate::operation::{OperationResult, ReasonCode, SystemId};

pub const SYSTEM_SKILL: SystemId = SystemId(0x0008);

/// Reserved; the engine reports cooldown rejections as [`cooldown_not_finished`].
pub const ERROR_SKILL_ON_COOLDOWN: ReasonCode = ReasonCode(0x0001);
pub const ERROR_COOLDOWN_NOT_FINISHED: ReasonCode = ReasonCode(0x0002);
pub const ERROR_SKILL_NOT_CASTED: ReasonCode = ReasonCode(0x0003);
pub const ERROR_SKILL_ALREADY_ACTIVE: ReasonCode = ReasonCode(0x0004);

pub const SUCCESS_CAST_STARTED: ReasonCode = ReasonCode(0x0001);

pub const fn permitted() -> OperationResult {
    OperationResult::success(SYSTEM_SKILL, OperationResult::SUCCESS_PERMITTED)
}

pub const fn denied() -> OperationResult {
    OperationResult::failure(SYSTEM_SKILL, OperationResult::ERROR_DENIED)
}

pub const fn cooldown_not_finished() -> OperationResult {
    OperationResult::failure(SYSTEM_SKILL, ERROR_COOLDOWN_NOT_FINISHED)
}

/// The skill has no active cast on this caster.
pub const fn skill_not_casted() -> OperationResult {
    OperationResult::failure(SYSTEM_SKILL, ERROR_SKILL_NOT_CASTED)
}

/// The skill is still charging, channeling or completing on this caster.
pub const fn skill_already_active() -> OperationResult {
    OperationResult::failure(SYSTEM_SKILL, ERROR_SKILL_ALREADY_ACTIVE)
}

/// The cast was accepted and a cast record now tracks it.
pub const fn casted() -> OperationResult {
    OperationResult::success(SYSTEM_SKILL, SUCCESS_CAST_STARTED)
}
