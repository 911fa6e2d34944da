//! Turn sequencing for a single battle.
//!
//! [`BattleSession`] is the authoritative state machine. It owns both
//! combatants, the battle state, and the command menu, and advances on two
//! stimuli only: decoded key presses ([`BattleSession::on_key`]) and deferred
//! steps coming back from the scheduler ([`BattleSession::resume`]).
//!
//! ```text
//! START ─start─▶ PLAYER_COMMAND ─attack─▶ PLAYER_TURN ─┬─ enemy down ─▶ WIN
//!                  ▲      │ │                         └─▶ ENEMY_TURN ─┬─ player down ─▶ LOSE
//!                  │      │ └─defend──────────────────────▶ ENEMY_TURN │
//!                  │      └─flee─▶ LOSE                               │
//!                  └──────────────────────────────────────────────────┘
//! ```
//!
//! All waiting is expressed by scheduling a [`Deferred`] through the
//! [`PresentationBridge`]; nothing blocks.

mod deferred;
pub mod messages;

pub use deferred::{Deferred, DiscardReason, Resumption, SessionId, Step};

use crate::bridge::{BattleEvent, Effect, PresentationBridge, TextSlot};
use crate::combatant::{Combatant, Side, Stance};
use crate::config::{BattleConfig, BattleTimings};
use crate::damage;
use crate::error::ConfigError;
use crate::input::{Key, KeyOutcome};
use crate::menu::{Command, CommandMenu};
use crate::state::{BattleState, Outcome};

/// One battle between the player and a single enemy.
///
/// Created once per battle and discarded afterwards; a finished battle is
/// restarted by building a new session, never by rewinding this one.
#[derive(Clone, Debug)]
pub struct BattleSession {
    id: SessionId,
    timings: BattleTimings,
    player: Combatant,
    enemy: Combatant,
    state: BattleState,
    menu: CommandMenu,
    outcome: Option<Outcome>,
}

impl BattleSession {
    /// Creates a battle in the START state.
    pub fn new(id: SessionId, config: &BattleConfig) -> Result<Self, ConfigError> {
        let player = Combatant::from_spec(&config.player).map_err(ConfigError::Player)?;
        let enemy = Combatant::from_spec(&config.enemy).map_err(ConfigError::Enemy)?;

        Ok(Self {
            id,
            timings: config.timings,
            player,
            enemy,
            state: BattleState::Start,
            menu: CommandMenu::default(),
            outcome: None,
        })
    }

    pub const fn id(&self) -> SessionId {
        self.id
    }

    pub const fn state(&self) -> BattleState {
        self.state
    }

    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub const fn timings(&self) -> &BattleTimings {
        &self.timings
    }

    pub const fn player(&self) -> &Combatant {
        &self.player
    }

    pub const fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub const fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub const fn menu(&self) -> &CommandMenu {
        &self.menu
    }

    /// START → PLAYER_COMMAND.
    ///
    /// Resets both combatants and the cursor and shows the opening prompt.
    /// Returns false (and does nothing) if the battle already started.
    pub fn start(&mut self, bridge: &mut (impl PresentationBridge + ?Sized)) -> bool {
        if self.state != BattleState::Start {
            return false;
        }

        self.player.reset();
        self.enemy.reset();
        self.menu.reset();
        self.outcome = None;

        bridge.on_event(&BattleEvent::Started);
        self.transition(BattleState::PlayerCommand, bridge);
        self.refresh_hp(bridge);
        bridge.display_text(TextSlot::Info, messages::PROMPT);
        self.refresh_commands(bridge);
        true
    }

    /// Routes a key press. Keys outside the command phase are dropped, not
    /// queued.
    pub fn on_key(
        &mut self,
        key: Key,
        bridge: &mut (impl PresentationBridge + ?Sized),
    ) -> KeyOutcome {
        if !self.state.accepts_commands() {
            return KeyOutcome::Ignored(self.state);
        }

        match key {
            Key::Up => self.move_selection(-1, bridge),
            Key::Down => self.move_selection(1, bridge),
            Key::Confirm => KeyOutcome::Executed(self.execute_selected(bridge)),
        }
    }

    /// Runs a deferred step if the preconditions it was scheduled under still
    /// hold.
    pub fn resume(
        &mut self,
        deferred: Deferred,
        bridge: &mut (impl PresentationBridge + ?Sized),
    ) -> Resumption {
        if let Some(reason) = self.stale_reason(&deferred) {
            return Resumption::Discarded(reason);
        }

        match deferred.step {
            Step::ApplyDamage {
                attacker,
                damage,
                mitigated,
            } => self.land_hit(attacker, damage, mitigated, bridge),
            Step::FinishTurn { attacker } => self.finish_turn(attacker, bridge),
            Step::EnemyAttack => self.begin_attack(Side::Enemy, bridge),
            Step::AnnounceOutcome => self.announce_outcome(bridge),
        }

        Resumption::Applied(deferred.step)
    }

    fn stale_reason(&self, deferred: &Deferred) -> Option<DiscardReason> {
        if deferred.session != self.id {
            return Some(DiscardReason::ForeignSession(deferred.session));
        }
        if deferred.expected != self.state {
            return Some(DiscardReason::StateChanged {
                expected: deferred.expected,
                actual: self.state,
            });
        }

        match deferred.step {
            Step::AnnounceOutcome => None,
            _ if self.state.is_terminal() => Some(DiscardReason::Finished),
            Step::ApplyDamage { attacker, .. } | Step::FinishTurn { attacker } => {
                self.first_down([attacker, attacker.opponent()])
            }
            Step::EnemyAttack => self.first_down([Side::Enemy, Side::Player]),
        }
    }

    fn first_down(&self, sides: [Side; 2]) -> Option<DiscardReason> {
        sides
            .into_iter()
            .find(|&side| !self.combatant(side).is_alive())
            .map(DiscardReason::CombatantDown)
    }

    fn move_selection(
        &mut self,
        delta: i32,
        bridge: &mut (impl PresentationBridge + ?Sized),
    ) -> KeyOutcome {
        self.menu.move_selection(delta);
        self.refresh_commands(bridge);
        KeyOutcome::SelectionMoved {
            cursor: self.menu.cursor(),
        }
    }

    fn execute_selected(&mut self, bridge: &mut (impl PresentationBridge + ?Sized)) -> Command {
        let command = self.menu.current_command();
        bridge.on_event(&BattleEvent::CommandChosen(command));

        match command {
            Command::Attack => {
                self.transition(BattleState::PlayerTurn, bridge);
                self.begin_attack(Side::Player, bridge);
            }
            Command::Defend => {
                self.player.set_stance(Stance::Defense);
                bridge.display_text(TextSlot::Info, &messages::defend(&self.player));
                self.enter_enemy_turn(bridge);
            }
            Command::Flee => {
                bridge.display_text(TextSlot::Info, &messages::fled(&self.player));
                self.finish(Outcome::Fled, bridge);
            }
        }

        command
    }

    /// Resolve damage, start the effects, and schedule the impact.
    fn begin_attack(&mut self, attacker: Side, bridge: &mut (impl PresentationBridge + ?Sized)) {
        let defender = attacker.opponent();
        let hit = damage::resolve_detailed(self.combatant(attacker), self.combatant(defender));

        bridge.play_effect(Effect::CameraShake {
            duration_ms: self.timings.shake_ms,
            intensity: BattleTimings::SHAKE_INTENSITY,
        });
        bridge.play_effect(Effect::DamageNumber {
            target: defender,
            amount: hit.damage,
            duration_ms: self.timings.damage_number_ms,
        });

        self.schedule(
            self.timings.impact_delay_ms,
            Step::ApplyDamage {
                attacker,
                damage: hit.damage,
                mitigated: hit.mitigated,
            },
            bridge,
        );
    }

    fn land_hit(
        &mut self,
        attacker: Side,
        damage: u32,
        mitigated: bool,
        bridge: &mut (impl PresentationBridge + ?Sized),
    ) {
        let target = attacker.opponent();
        let hp = self.combatant_mut(target).apply_damage(damage);

        bridge.on_event(&BattleEvent::DamageApplied { target, damage, hp });
        self.refresh_hp(bridge);
        let text = messages::attack(
            self.combatant(attacker),
            self.combatant(target),
            damage,
            mitigated,
        );
        bridge.display_text(TextSlot::Info, &text);

        if hp == 0 {
            let outcome = match attacker {
                Side::Player => Outcome::Victory,
                Side::Enemy => Outcome::Defeat,
            };
            self.finish(outcome, bridge);
            self.schedule(self.timings.outcome_delay_ms, Step::AnnounceOutcome, bridge);
        } else {
            self.schedule(
                self.timings.turn_delay_ms,
                Step::FinishTurn { attacker },
                bridge,
            );
        }
    }

    fn finish_turn(&mut self, attacker: Side, bridge: &mut (impl PresentationBridge + ?Sized)) {
        match attacker {
            Side::Player => self.enter_enemy_turn(bridge),
            Side::Enemy => self.enter_command_phase(bridge),
        }
    }

    fn enter_enemy_turn(&mut self, bridge: &mut (impl PresentationBridge + ?Sized)) {
        self.transition(BattleState::EnemyTurn, bridge);
        self.enemy.set_stance(Stance::Normal);
        self.schedule(self.timings.enemy_delay_ms, Step::EnemyAttack, bridge);
    }

    fn enter_command_phase(&mut self, bridge: &mut (impl PresentationBridge + ?Sized)) {
        self.player.set_stance(Stance::Normal);
        self.transition(BattleState::PlayerCommand, bridge);
        self.menu.reset();
        bridge.display_text(TextSlot::Info, messages::PROMPT);
        self.refresh_commands(bridge);
    }

    fn finish(&mut self, outcome: Outcome, bridge: &mut (impl PresentationBridge + ?Sized)) {
        self.outcome = Some(outcome);
        self.transition(outcome.terminal_state(), bridge);
        bridge.on_event(&BattleEvent::Finished(outcome));
    }

    fn announce_outcome(&mut self, bridge: &mut (impl PresentationBridge + ?Sized)) {
        if let Some(outcome) = self.outcome {
            bridge.display_text(TextSlot::Info, &messages::outcome(outcome));
        }
    }

    fn transition(&mut self, to: BattleState, bridge: &mut (impl PresentationBridge + ?Sized)) {
        let from = self.state;
        debug_assert!(
            !from.is_terminal(),
            "{} attempted to leave terminal state {from}",
            self.id
        );
        if from == to {
            return;
        }
        self.state = to;
        bridge.on_event(&BattleEvent::StateChanged { from, to });
    }

    fn schedule(
        &self,
        delay_ms: u64,
        step: Step,
        bridge: &mut (impl PresentationBridge + ?Sized),
    ) {
        bridge.schedule_after(delay_ms, Deferred::new(self.id, self.state, step));
    }

    fn refresh_hp(&self, bridge: &mut (impl PresentationBridge + ?Sized)) {
        bridge.display_text(TextSlot::Hp, &messages::hp_panel(&self.player, &self.enemy));
    }

    fn refresh_commands(&self, bridge: &mut (impl PresentationBridge + ?Sized)) {
        bridge.display_text(TextSlot::CommandList, &self.menu.render());
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }
}
