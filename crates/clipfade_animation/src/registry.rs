//! Clip Registry
//!
//! Holds the fixed set of named clips available to one character. The
//! registry is filled once during setup and handed to a
//! [`ClipController`](crate::controller::ClipController), which owns it
//! read-only from then on.

use std::sync::Arc;

use clipfade_core::errors::{AnimationError, Result};
use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};

use crate::clip::AnimationClip;

new_key_type! {
    /// Stable handle to a registered clip.
    pub struct ClipHandle;
}

#[derive(Debug, Default, Clone)]
pub struct ClipRegistry {
    clips: SlotMap<ClipHandle, Arc<AnimationClip>>,
    by_name: FxHashMap<String, ClipHandle>,
}

impl ClipRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from clips keyed by their own names.
    ///
    /// Fails on the first duplicate name.
    pub fn from_clips(clips: impl IntoIterator<Item = AnimationClip>) -> Result<Self> {
        let mut registry = Self::new();
        for clip in clips {
            let name = clip.name.clone();
            registry.register(name, clip)?;
        }
        Ok(registry)
    }

    /// Registers `clip` under `name`, renaming the clip if its own name differs.
    ///
    /// A duplicate name rejects only this entry; earlier registrations stay.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        mut clip: AnimationClip,
    ) -> Result<ClipHandle> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            log::error!("Clip '{name}' is already registered");
            return Err(AnimationError::duplicate_name(name));
        }

        if clip.name != name {
            log::debug!("Registering clip '{}' as '{name}'", clip.name);
            clip.name.clone_from(&name);
        }

        let handle = self.clips.insert(Arc::new(clip));
        self.by_name.insert(name, handle);
        Ok(handle)
    }

    /// Resolves a clip by name.
    pub fn lookup(&self, name: &str) -> Result<&Arc<AnimationClip>> {
        let handle = self.handle_of(name)?;
        self.get(handle)
            .ok_or_else(|| AnimationError::unknown_clip(name))
    }

    /// Resolves a clip name to its handle.
    pub fn handle_of(&self, name: &str) -> Result<ClipHandle> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AnimationError::unknown_clip(name))
    }

    #[must_use]
    pub fn get(&self, handle: ClipHandle) -> Option<&Arc<AnimationClip>> {
        self.clips.get(handle)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered clip names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.values().map(|clip| clip.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
