//! Screen model the runtime writes into and the widgets read from.
use std::collections::BTreeMap;

use battle_core::{Effect, EffectHandle, Side, TextSlot};
use runtime::Presenter;

use crate::message::MessageLog;

/// Latest slot contents, live effects, and narration history.
#[derive(Debug)]
pub struct BattleView {
    hp: String,
    info: String,
    commands: String,
    effects: BTreeMap<EffectHandle, Effect>,
    messages: MessageLog,
    dirty: bool,
}

impl BattleView {
    pub fn new(message_capacity: usize) -> Self {
        Self {
            hp: String::new(),
            info: String::new(),
            commands: String::new(),
            effects: BTreeMap::new(),
            messages: MessageLog::new(message_capacity),
            dirty: true,
        }
    }

    pub fn text(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::Hp => &self.hp,
            TextSlot::Info => &self.info,
            TextSlot::CommandList => &self.commands,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Strongest active camera shake, if any.
    pub fn shake_intensity(&self) -> Option<u8> {
        self.effects
            .values()
            .filter_map(|effect| match effect {
                Effect::CameraShake { intensity, .. } => Some(*intensity),
                _ => None,
            })
            .max()
    }

    /// Floating damage numbers over `side`, oldest first.
    pub fn damage_numbers(&self, side: Side) -> impl Iterator<Item = u32> + '_ {
        self.effects.values().filter_map(move |effect| match effect {
            Effect::DamageNumber { target, amount, .. } if *target == side => Some(*amount),
            _ => None,
        })
    }

    /// Returns whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Presenter for BattleView {
    fn show_text(&mut self, slot: TextSlot, content: &str) {
        if slot == TextSlot::Info && !content.is_empty() && content != self.info {
            self.messages.push_text(content);
        }

        let target = match slot {
            TextSlot::Hp => &mut self.hp,
            TextSlot::Info => &mut self.info,
            TextSlot::CommandList => &mut self.commands,
        };
        target.clear();
        target.push_str(content);
        self.dirty = true;
    }

    fn show_effect(&mut self, handle: EffectHandle, effect: &Effect) {
        self.effects.insert(handle, effect.clone());
        self.dirty = true;
    }

    fn clear_effect(&mut self, handle: EffectHandle) {
        if self.effects.remove(&handle).is_some() {
            self.dirty = true;
        }
    }
}
