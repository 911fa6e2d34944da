use battle_core::{Effect, EffectHandle, TextSlot};

/// Front-end capability: draws what the battle asks for.
///
/// The runtime owns scheduling and effect lifetimes, so a presenter only
/// has to keep the latest content of each slot and the set of live effects.
pub trait Presenter {
    fn show_text(&mut self, slot: TextSlot, content: &str);

    /// An effect became visible. It stays until [`Presenter::clear_effect`].
    fn show_effect(&mut self, handle: EffectHandle, effect: &Effect);

    fn clear_effect(&mut self, handle: EffectHandle);
}
