//! Lifetimes of cosmetic effects.

use std::collections::BTreeMap;

use battle_core::{Effect, EffectHandle};

/// Tracks running effects and when each one ends.
///
/// Effects expire on their own timers and never touch battle state.
#[derive(Debug, Default)]
pub struct EffectTracker {
    active: BTreeMap<EffectHandle, (u64, Effect)>,
    next_handle: u64,
}

impl EffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `effect` as started at `now_ms`.
    pub fn start(&mut self, now_ms: u64, effect: Effect) -> EffectHandle {
        self.next_handle += 1;
        let handle = EffectHandle(self.next_handle);
        let expires_at = now_ms.saturating_add(effect.duration_ms());
        self.active.insert(handle, (expires_at, effect));
        handle
    }

    /// Remove and return every effect whose lifetime ended by `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> Vec<EffectHandle> {
        let expired: Vec<_> = self
            .active
            .iter()
            .filter(|(_, (expires_at, _))| *expires_at <= now_ms)
            .map(|(handle, _)| *handle)
            .collect();
        for handle in &expired {
            self.active.remove(handle);
        }
        expired
    }

    pub fn get(&self, handle: EffectHandle) -> Option<&Effect> {
        self.active.get(&handle).map(|(_, effect)| effect)
    }

    pub fn active(&self) -> impl Iterator<Item = (EffectHandle, &Effect)> {
        self.active
            .iter()
            .map(|(handle, (_, effect))| (*handle, effect))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
