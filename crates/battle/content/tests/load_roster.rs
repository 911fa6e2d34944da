use std::io::Write;
use std::path::Path;

use battle_content::{DEFAULT_ROSTER, RosterLoader};
use battle_core::{BattleConfig, BattleSession, BattleState, SessionId};

#[test]
fn shipped_roster_matches_built_in_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ROSTER);

    let config = RosterLoader::load(&path).unwrap();

    assert_eq!(config, BattleConfig::default());
}

#[test]
fn loaded_roster_builds_a_session() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[player]\nname = \"Mage\"\nmax_hp = 18\natk = 11\n\n[enemy]\nname = \"Golem\"\nmax_hp = 60\natk = 4"
    )
    .unwrap();

    let config = RosterLoader::load(file.path()).unwrap();
    let session = BattleSession::new(SessionId(1), &config).unwrap();

    assert_eq!(session.state(), BattleState::Start);
    assert_eq!(session.player().name(), "Mage");
    assert_eq!(session.enemy().hp(), 60);
}

#[test]
fn missing_file_reports_path() {
    let err = RosterLoader::load(Path::new("/definitely/not/here.ron")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.ron"));
}
