//! Immutable per-skill parameters.

use core::fmt;
use std::sync::Arc;

use super::behavior::{DefaultBehavior, SkillBehavior};

/// Stable identifier of a skill template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Timing variant of a skill.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Completes as soon as charging finishes.
    Plain,

    /// Holds a channel phase after charging. A non-positive duration channels
    /// until the cast is interrupted or cancelled.
    Channeling { duration: f32 },
}

impl SkillKind {
    #[inline]
    pub fn is_channeling(&self) -> bool {
        matches!(self, SkillKind::Channeling { .. })
    }

    /// Returns true for channels without a natural end.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, SkillKind::Channeling { duration } if *duration <= 0.0)
    }
}

/// Template shared by every cast of one skill.
///
/// Timing never changes after [`SkillDescriptorBuilder::build`]; only the
/// answers of the attached [`SkillBehavior`] vary between calls.
pub struct SkillDescriptor<E = ()> {
    id: SkillId,
    name: String,
    charging_time: f32,
    cooldown_time: f32,
    kind: SkillKind,
    behavior: Arc<dyn SkillBehavior<E>>,
}

impl<E> SkillDescriptor<E> {
    pub fn builder(id: SkillId, name: impl Into<String>) -> SkillDescriptorBuilder<E> {
        SkillDescriptorBuilder::new(id, name)
    }

    #[inline]
    pub fn id(&self) -> SkillId {
        self.id
    }

    /// Display name, used for logging only.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds spent charging before the cast starts. Zero means instant.
    #[inline]
    pub fn charging_time(&self) -> f32 {
        self.charging_time
    }

    /// Seconds of lockout after completion. Zero means no cooldown.
    #[inline]
    pub fn cooldown_time(&self) -> f32 {
        self.cooldown_time
    }

    #[inline]
    pub fn has_cooldown(&self) -> bool {
        self.cooldown_time > 0.0
    }

    #[inline]
    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    #[inline]
    pub fn is_channeling(&self) -> bool {
        self.kind.is_channeling()
    }

    /// Channel duration, if this is a channeling skill.
    pub fn channel_duration(&self) -> Option<f32> {
        match self.kind {
            SkillKind::Channeling { duration } => Some(duration),
            SkillKind::Plain => None,
        }
    }

    pub fn behavior(&self) -> &Arc<dyn SkillBehavior<E>> {
        &self.behavior
    }
}

impl<E> fmt::Debug for SkillDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("charging_time", &self.charging_time)
            .field("cooldown_time", &self.cooldown_time)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SkillDescriptor`].
///
/// # Panics
///
/// [`build`](Self::build) panics on negative or non-finite timing values;
/// those come from broken content, not from play.
pub struct SkillDescriptorBuilder<E = ()> {
    id: SkillId,
    name: String,
    charging_time: f32,
    cooldown_time: f32,
    kind: SkillKind,
    behavior: Option<Arc<dyn SkillBehavior<E>>>,
}

impl<E> SkillDescriptorBuilder<E> {
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            charging_time: 0.0,
            cooldown_time: 0.0,
            kind: SkillKind::Plain,
            behavior: None,
        }
    }

    pub fn charging_time(mut self, seconds: f32) -> Self {
        self.charging_time = seconds;
        self
    }

    pub fn cooldown_time(mut self, seconds: f32) -> Self {
        self.cooldown_time = seconds;
        self
    }

    /// Turns the skill into a channeling skill. Pass `0.0` for an infinite channel.
    pub fn channeling(mut self, duration: f32) -> Self {
        self.kind = SkillKind::Channeling { duration };
        self
    }

    pub fn kind(mut self, kind: SkillKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn behavior(mut self, behavior: impl SkillBehavior<E> + 'static) -> Self {
        self.behavior = Some(Arc::new(behavior));
        self
    }

    pub fn shared_behavior(mut self, behavior: Arc<dyn SkillBehavior<E>>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    pub fn build(self) -> SkillDescriptor<E> {
        assert!(
            self.charging_time.is_finite() && self.charging_time >= 0.0,
            "{}: charging time must be finite and non-negative (got {})",
            self.id,
            self.charging_time
        );
        assert!(
            self.cooldown_time.is_finite() && self.cooldown_time >= 0.0,
            "{}: cooldown time must be finite and non-negative (got {})",
            self.id,
            self.cooldown_time
        );
        if let SkillKind::Channeling { duration } = self.kind {
            assert!(
                duration.is_finite(),
                "{}: channel duration must be finite (got {duration})",
                self.id
            );
        }

        SkillDescriptor {
            id: self.id,
            name: self.name,
            charging_time: self.charging_time,
            cooldown_time: self.cooldown_time,
            kind: self.kind,
            behavior: self
                .behavior
                .unwrap_or_else(|| Arc::new(DefaultBehavior)),
        }
    }
}
