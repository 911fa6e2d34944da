mod common;

use battle_core::{
    BattleConfig, BattleEvent, BattleSession, BattleState, Command, CombatantSpec, Key,
    KeyOutcome, Outcome, SessionId, Side, Stance, TextSlot,
};
use common::RecordingBridge;

fn start(config: &BattleConfig) -> (BattleSession, RecordingBridge) {
    let mut session = BattleSession::new(SessionId(7), config).unwrap();
    let mut bridge = RecordingBridge::default();
    session.start(&mut bridge);
    (session, bridge)
}

fn damage_events(bridge: &RecordingBridge, target: Side) -> Vec<(u32, u32)> {
    bridge
        .events
        .iter()
        .filter_map(|event| match event {
            BattleEvent::DamageApplied {
                target: hit,
                damage,
                hp,
            } if *hit == target => Some((*damage, *hp)),
            _ => None,
        })
        .collect()
}

#[test]
fn opening_screen_shows_hp_prompt_and_highlight() {
    let (session, bridge) = start(&BattleConfig::default());

    assert_eq!(session.state(), BattleState::PlayerCommand);
    assert_eq!(
        bridge.text(TextSlot::Hp),
        "Hero's HP : 30 / 30\nSlime's HP : 20 / 20"
    );
    assert_eq!(bridge.text(TextSlot::Info), "Your turn. Choose a command.");
    assert_eq!(bridge.text(TextSlot::CommandList), "▶ Attack\n  Defend\n  Flee");
    assert_eq!(
        &bridge.events[..2],
        &[
            BattleEvent::Started,
            BattleEvent::StateChanged {
                from: BattleState::Start,
                to: BattleState::PlayerCommand,
            },
        ]
    );
}

#[test]
fn repeated_attacks_win_on_third_hit_without_enemy_reply() {
    let (mut session, mut bridge) = start(&BattleConfig::default());

    for _ in 0..5 {
        if session.state().is_terminal() {
            assert!(session.on_key(Key::Confirm, &mut bridge).is_ignored());
            continue;
        }
        assert_eq!(
            session.on_key(Key::Confirm, &mut bridge),
            KeyOutcome::Executed(Command::Attack)
        );
        bridge.drain(&mut session);
    }

    assert_eq!(damage_events(&bridge, Side::Enemy), vec![(8, 12), (8, 4), (8, 0)]);
    // The enemy answered the first two hits only.
    assert_eq!(damage_events(&bridge, Side::Player), vec![(5, 25), (5, 20)]);
    assert_eq!(session.state(), BattleState::Win);
    assert_eq!(session.outcome(), Some(Outcome::Victory));
    assert_eq!(session.enemy().hp(), 0);
    assert_eq!(
        bridge.text(TextSlot::Info),
        "Victory! (press R to restart)"
    );
}

#[test]
fn defend_halves_the_enemy_reply_and_expires_before_next_command() {
    let (mut session, mut bridge) = start(&BattleConfig::default());

    session.on_key(Key::Down, &mut bridge);
    assert_eq!(
        session.on_key(Key::Confirm, &mut bridge),
        KeyOutcome::Executed(Command::Defend)
    );
    assert_eq!(session.state(), BattleState::EnemyTurn);
    assert_eq!(session.player().stance(), Stance::Defense);
    assert_eq!(
        bridge.text(TextSlot::Info),
        "Hero braces for the next attack."
    );
    // Defending does not hit anyone.
    assert!(damage_events(&bridge, Side::Enemy).is_empty());

    // Enemy attack starts, the guard is still up when damage is resolved.
    let (_, attack) = bridge.scheduled.pop_front().unwrap();
    session.resume(attack, &mut bridge);
    assert_eq!(session.player().stance(), Stance::Defense);

    bridge.drain(&mut session);

    assert_eq!(damage_events(&bridge, Side::Player), vec![(3, 27)]);
    assert_eq!(session.state(), BattleState::PlayerCommand);
    assert_eq!(session.player().stance(), Stance::Normal);
    assert_eq!(session.menu().cursor(), 0);
    assert_eq!(bridge.text(TextSlot::Info), "Your turn. Choose a command.");
}

#[test]
fn flee_loses_immediately_and_stays_lost() {
    let (mut session, mut bridge) = start(&BattleConfig::default());

    session.on_key(Key::Up, &mut bridge);
    assert_eq!(
        session.on_key(Key::Confirm, &mut bridge),
        KeyOutcome::Executed(Command::Flee)
    );

    assert_eq!(session.state(), BattleState::Lose);
    assert_eq!(session.outcome(), Some(Outcome::Fled));
    assert!(bridge.scheduled.is_empty());
    assert!(bridge.events.contains(&BattleEvent::Finished(Outcome::Fled)));

    for key in [Key::Up, Key::Down, Key::Confirm] {
        assert_eq!(
            session.on_key(key, &mut bridge),
            KeyOutcome::Ignored(BattleState::Lose)
        );
    }
    assert_eq!(session.player().hp(), 30);
    assert_eq!(session.enemy().hp(), 20);
    assert!(damage_events(&bridge, Side::Player).is_empty());
    assert!(damage_events(&bridge, Side::Enemy).is_empty());
}

#[test]
fn enemy_killing_blow_ends_in_defeat() {
    let config = BattleConfig::new(
        CombatantSpec::new("Squire", 4, 1),
        CombatantSpec::new("Ogre", 50, 9),
    );
    let (mut session, mut bridge) = start(&config);

    session.on_key(Key::Confirm, &mut bridge);
    bridge.drain(&mut session);

    assert_eq!(session.state(), BattleState::Lose);
    assert_eq!(session.outcome(), Some(Outcome::Defeat));
    assert_eq!(session.player().hp(), 0);
    assert_eq!(bridge.text(TextSlot::Info), "Defeat... (press R to restart)");
}

#[test]
fn attacks_trigger_shake_and_damage_number() {
    let (mut session, mut bridge) = start(&BattleConfig::default());

    session.on_key(Key::Confirm, &mut bridge);

    assert_eq!(
        bridge.effects,
        vec![
            battle_core::Effect::CameraShake {
                duration_ms: 250,
                intensity: 3,
            },
            battle_core::Effect::DamageNumber {
                target: Side::Enemy,
                amount: 8,
                duration_ms: 900,
            },
        ]
    );
}

#[test]
fn independent_sessions_do_not_share_state() {
    let config = BattleConfig::default();
    let mut first = BattleSession::new(SessionId(1), &config).unwrap();
    let mut second = BattleSession::new(SessionId(2), &config).unwrap();
    let mut first_bridge = RecordingBridge::default();
    let mut second_bridge = RecordingBridge::default();
    first.start(&mut first_bridge);
    second.start(&mut second_bridge);

    first.on_key(Key::Confirm, &mut first_bridge);
    first_bridge.drain(&mut first);

    // Feeding the first battle's steps to the second has no effect.
    first.on_key(Key::Confirm, &mut first_bridge);
    let stray = first_bridge.scheduled.pop_front().unwrap().1;
    assert!(!second.resume(stray, &mut second_bridge).is_applied());

    assert_eq!(first.enemy().hp(), 12);
    assert_eq!(second.enemy().hp(), 20);
    assert_eq!(second.state(), BattleState::PlayerCommand);
}
