use std::collections::{HashMap, VecDeque};

use battle_core::{
    BattleEvent, BattleSession, Deferred, Effect, EffectHandle, PresentationBridge, Resumption,
    TextSlot,
};

/// Bridge that records everything and fires deferred steps in scheduling order.
#[derive(Default)]
pub struct RecordingBridge {
    pub texts: HashMap<TextSlot, String>,
    pub scheduled: VecDeque<(u64, Deferred)>,
    pub effects: Vec<Effect>,
    pub events: Vec<BattleEvent>,
}

impl RecordingBridge {
    pub fn text(&self, slot: TextSlot) -> &str {
        self.texts.get(&slot).map(String::as_str).unwrap_or_default()
    }

    /// Resumes pending steps until the queue is empty.
    pub fn drain(&mut self, session: &mut BattleSession) -> Vec<Resumption> {
        let mut results = Vec::new();
        while let Some((_, deferred)) = self.scheduled.pop_front() {
            results.push(session.resume(deferred, &mut *self));
        }
        results
    }
}

impl PresentationBridge for RecordingBridge {
    fn display_text(&mut self, slot: TextSlot, content: &str) {
        self.texts.insert(slot, content.to_string());
    }

    fn schedule_after(&mut self, delay_ms: u64, deferred: Deferred) {
        self.scheduled.push_back((delay_ms, deferred));
    }

    fn play_effect(&mut self, effect: Effect) -> EffectHandle {
        self.effects.push(effect);
        EffectHandle(self.effects.len() as u64)
    }

    fn on_event(&mut self, event: &BattleEvent) {
        self.events.push(event.clone());
    }
}
