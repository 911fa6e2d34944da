//! Damage resolution between an attacker and a defender.

use crate::combatant::{Combatant, Stance};

/// Every landed attack deals at least this much damage.
pub const MIN_DAMAGE: u32 = 1;

/// Result of resolving a single attack, before it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    pub damage: u32,
    /// Whether the defender's stance reduced the hit.
    pub mitigated: bool,
}

/// Calculate the damage `attacker` deals to `defender`.
///
/// # Formula
///
/// ```text
/// base = attacker.atk
/// if defender.stance == DEFENSE:
///     base = round(base * 0.5)      // half rounds up
/// damage = max(base, MIN_DAMAGE)
/// ```
///
/// Pure and deterministic; neither combatant is touched.
pub fn resolve(attacker: &Combatant, defender: &Combatant) -> u32 {
    resolve_detailed(attacker, defender).damage
}

/// Same as [`resolve`], also reporting whether the defender's guard applied.
pub fn resolve_detailed(attacker: &Combatant, defender: &Combatant) -> DamageOutcome {
    let base = attacker.atk();

    let (raw, mitigated) = match defender.stance() {
        Stance::Normal => (base, false),
        Stance::Defense => (halve_rounded(base), true),
    };

    DamageOutcome {
        damage: raw.max(MIN_DAMAGE),
        mitigated,
    }
}

/// `round(value * 0.5)` in integer arithmetic, halves rounding up.
const fn halve_rounded(value: u32) -> u32 {
    value / 2 + value % 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::CombatantSpec;

    fn combatant(name: &str, hp: u32, atk: u32) -> Combatant {
        Combatant::from_spec(&CombatantSpec::new(name, hp, atk)).unwrap()
    }

    #[test]
    fn normal_stance_takes_full_attack() {
        let hero = combatant("Hero", 30, 8);
        let slime = combatant("Slime", 20, 5);

        assert_eq!(resolve(&hero, &slime), 8);
        assert!(!resolve_detailed(&hero, &slime).mitigated);
    }

    #[test]
    fn defense_halves_and_rounds_up() {
        let mut hero = combatant("Hero", 30, 8);
        let slime = combatant("Slime", 20, 5);
        hero.set_stance(Stance::Defense);

        let outcome = resolve_detailed(&slime, &hero);
        assert_eq!(outcome.damage, 3);
        assert!(outcome.mitigated);
    }

    #[test]
    fn defended_weak_hit_still_deals_minimum() {
        let gnat = combatant("Gnat", 1, 1);
        let mut hero = combatant("Hero", 30, 8);
        hero.set_stance(Stance::Defense);

        assert_eq!(resolve(&gnat, &hero), MIN_DAMAGE);
    }

    #[test]
    fn resolution_does_not_mutate_inputs() {
        let hero = combatant("Hero", 30, 8);
        let slime = combatant("Slime", 20, 5);
        let (before_hero, before_slime) = (hero.clone(), slime.clone());

        resolve(&hero, &slime);

        assert_eq!(hero, before_hero);
        assert_eq!(slime, before_slime);
    }
}
