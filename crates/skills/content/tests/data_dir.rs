use std::fs;

use skill_content::{BehaviorRegistry, ConfigLoader, ContentFactory, SkillLoader};
use skill_core::{
    ActionSource, CastFlags, CastState, Caster, CasterId, InterruptFlags, InterruptSource,
    SkillId, ops,
};
use tempfile::TempDir;

const SKILLS: &str = r#"
SkillFile(
    skills: [
        (id: 1, name: "strike", charging_time: 0.25, cooldown_time: 1.0, behavior: "passive"),
        (id: 2, name: "focus", channel_duration: Some(1.0), cooldown_time: 2.0, behavior: "interruptible"),
    ],
)
"#;

const CONFIG: &str = r#"
fixed_step = 0.05
max_steps_per_frame = 4
"#;

fn write_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("skills.ron"), SKILLS).unwrap();
    fs::write(dir.path().join("config.toml"), CONFIG).unwrap();
    dir
}

#[test]
fn factory_loads_config_and_catalog_from_directory() {
    let dir = write_data_dir();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().unwrap();
    assert_eq!(config.fixed_step, 0.05);
    assert_eq!(config.max_steps_per_frame, 4);
    assert_eq!(config.max_active_casts, 16);

    let catalog = factory
        .load_catalog(&BehaviorRegistry::<()>::with_builtins())
        .unwrap();
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec![SkillId(1), SkillId(2)]);
}

#[test]
fn loaded_catalog_drives_a_caster() {
    let dir = write_data_dir();
    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let catalog = factory
        .load_catalog(&BehaviorRegistry::<()>::with_builtins())
        .unwrap();
    let mut caster = Caster::from_config(CasterId(1), (), &config);

    assert_eq!(
        caster.try_cast_by_id(&catalog, SkillId(2), CastFlags::empty(), ActionSource::External),
        ops::casted()
    );
    caster.tick(config.fixed_step);
    assert_eq!(
        caster.cast_for(SkillId(2)).unwrap().state(),
        CastState::Channeling
    );

    // "interruptible" accepts world interrupts; "passive" keeps the default refusal.
    assert_eq!(
        caster.try_interrupt_by_id(
            &catalog,
            SkillId(2),
            InterruptSource::World,
            InterruptFlags::empty(),
            ActionSource::External,
        ),
        ops::permitted()
    );
    caster.try_cast_by_id(&catalog, SkillId(1), CastFlags::empty(), ActionSource::External);
    assert_eq!(
        caster.try_cancel_by_id(&catalog, SkillId(1), InterruptFlags::empty(), ActionSource::External),
        ops::denied()
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("skills.ron");

    let err = SkillLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("Failed to read file"));
    assert!(err.to_string().contains("skills.ron"));
}

#[test]
fn invalid_config_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "fixed_step = 0.0\n").unwrap();

    let err = ConfigLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("Invalid config"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_behavior_in_file_fails_catalog_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("skills.ron"),
        r#"(skills: [(id: 5, name: "hex", behavior: "cursed")])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path())
        .load_catalog(&BehaviorRegistry::<()>::with_builtins())
        .unwrap_err();

    assert!(err.to_string().contains("unknown behavior 'cursed'"));
}
