//! Id-keyed skill catalog.
//!
//! Descriptors are templates: one shared instance per skill, handed out as
//! `Arc`s to every caster that casts it.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::descriptor::{SkillDescriptor, SkillId};
use crate::error::{ErrorSeverity, SkillError};

/// Errors raised while building or querying a [`SkillCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("skill {0} is not registered")]
    SkillNotFound(SkillId),

    #[error("skill {0} is already registered")]
    DuplicateSkill(SkillId),
}

impl SkillError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::SkillNotFound(_) => "CATALOG_SKILL_NOT_FOUND",
            CatalogError::DuplicateSkill(_) => "CATALOG_DUPLICATE_SKILL",
        }
    }
}

/// Registry of skill descriptors, iterated in id order.
pub struct SkillCatalog<E = ()> {
    skills: BTreeMap<SkillId, Arc<SkillDescriptor<E>>>,
}

impl<E> SkillCatalog<E> {
    pub fn new() -> Self {
        Self {
            skills: BTreeMap::new(),
        }
    }

    /// Adds a descriptor and returns the shared handle to it.
    pub fn register(
        &mut self,
        descriptor: SkillDescriptor<E>,
    ) -> Result<Arc<SkillDescriptor<E>>, CatalogError> {
        let id = descriptor.id();
        if self.skills.contains_key(&id) {
            return Err(CatalogError::DuplicateSkill(id));
        }
        let descriptor = Arc::new(descriptor);
        self.skills.insert(id, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn get(&self, id: SkillId) -> Option<&Arc<SkillDescriptor<E>>> {
        self.skills.get(&id)
    }

    /// Looks up a descriptor, failing with [`CatalogError::SkillNotFound`].
    pub fn resolve(&self, id: SkillId) -> Result<Arc<SkillDescriptor<E>>, CatalogError> {
        self.skills
            .get(&id)
            .cloned()
            .ok_or(CatalogError::SkillNotFound(id))
    }

    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = SkillId> + '_ {
        self.skills.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SkillDescriptor<E>>> + '_ {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<E> Default for SkillCatalog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for SkillCatalog<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.skills.values()).finish()
    }
}
