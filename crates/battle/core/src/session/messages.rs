//! Text written into the battle's slots.

use crate::combatant::Combatant;
use crate::state::Outcome;

pub const PROMPT: &str = "Your turn. Choose a command.";
pub const RESTART_HINT: &str = " (press R to restart)";

pub fn hp_line(combatant: &Combatant) -> String {
    format!(
        "{}'s HP : {} / {}",
        combatant.name(),
        combatant.hp(),
        combatant.max_hp()
    )
}

pub fn hp_panel(player: &Combatant, enemy: &Combatant) -> String {
    format!("{}\n{}", hp_line(player), hp_line(enemy))
}

pub fn attack(attacker: &Combatant, defender: &Combatant, damage: u32, mitigated: bool) -> String {
    let guard = if mitigated { " (guarded)" } else { "" };
    format!(
        "{} attacks! {} takes {} damage{}.",
        attacker.name(),
        defender.name(),
        damage,
        guard
    )
}

pub fn defend(player: &Combatant) -> String {
    format!("{} braces for the next attack.", player.name())
}

pub fn fled(player: &Combatant) -> String {
    format!("{} fled the battle... Defeat.{}", player.name(), RESTART_HINT)
}

pub fn outcome(outcome: Outcome) -> String {
    let headline = match outcome {
        Outcome::Victory => "Victory!",
        Outcome::Defeat | Outcome::Fled => "Defeat...",
    };
    format!("{headline}{RESTART_HINT}")
}
