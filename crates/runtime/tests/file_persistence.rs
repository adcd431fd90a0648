use progression_core::StatKey;
use progression_runtime::{FileBackedEngine, ProgressStore, RuntimeConfig};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> RuntimeConfig {
    RuntimeConfig {
        save_dir: dir.path().join("saves"),
        ..RuntimeConfig::default()
    }
}

fn open(config: &RuntimeConfig) -> FileBackedEngine {
    let mut engine = FileBackedEngine::open(config).expect("open save store");
    engine.init();
    engine
}

#[test]
fn progress_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir);

    let expected = {
        let mut engine = open(&config);
        assert!(!engine.has_character());
        engine.create_character("Al");
        engine.add_xp(250);
        engine.add_stat(StatKey::Wis, 2);
        engine.record_battle(true);
        engine.character().cloned().unwrap()
    };

    assert!(config.save_dir.join("rpg-learning-save.json").exists());

    let engine = open(&config);
    assert_eq!(engine.character(), Some(&expected));
    assert!(engine.persistence_health().is_healthy());
}

#[test]
fn storage_key_selects_save_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_in(&temp_dir);
    config.storage_key = "slot-2".to_string();

    let mut engine = open(&config);
    engine.create_character("Bea");

    assert!(config.save_dir.join("slot-2.json").exists());
    assert!(!config.save_dir.join("rpg-learning-save.json").exists());

    let default_slot = open(&config_in(&temp_dir));
    assert!(!default_slot.has_character());
}

#[test]
fn export_moves_progress_between_directories() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();

    let mut source = open(&config_in(&source_dir));
    source.create_character("Al");
    source.add_xp(2_000);
    let exported = source.store().export().unwrap();

    let target_config = config_in(&target_dir);
    {
        let target = open(&target_config);
        target.store().import(&exported).unwrap();
    }

    let target = open(&target_config);
    assert_eq!(target.character(), source.character());
}

#[test]
fn invalid_storage_key_reports_load_failure() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_in(&temp_dir);
    config.storage_key = "../escape".to_string();

    let mut engine = open(&config);
    assert!(!engine.has_character());
    assert!(!engine.persistence_health().is_healthy());

    engine.create_character("Al");
    assert!(engine.has_character());
    assert!(!temp_dir.path().join("escape.json").exists());
}
