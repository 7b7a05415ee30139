//! Runs the bundled skills for a few simulated seconds and logs every change.
//!
//! `RUST_LOG=debug cargo run -p skill-runtime` shows each phase transition.
use anyhow::Result;
use skill_content::{BehaviorRegistry, ContentFactory};
use skill_core::{CastFlags, CastState, InterruptFlags, InterruptSource, SkillId};
use skill_runtime::{SkillRuntime, init_tracing};

const FRAME: f32 = 1.0 / 30.0;
const FRAMES: u32 = 300;

fn main() -> Result<()> {
    init_tracing()?;

    let behaviors = BehaviorRegistry::<()>::with_builtins();
    let mut runtime = SkillRuntime::builder()
        .content(&ContentFactory::bundled(), &behaviors)?
        .build()?;

    let mage = runtime.spawn(());
    let monk = runtime.spawn(());
    let skills: Vec<SkillId> = runtime.catalog().ids().collect();

    let mut last: Vec<Option<CastState>> = vec![None; skills.len() * 2];
    for frame in 0..FRAMES {
        if frame % 60 == 0 {
            for &skill in &skills {
                let result = runtime.cast(mage, skill, CastFlags::empty())?;
                tracing::debug!("mage casts {}: {}", skill, result);
            }
            let result = runtime.cast(monk, SkillId(4), CastFlags::empty())?;
            tracing::debug!("monk casts {}: {}", SkillId(4), result);
        }
        if frame == 90 {
            let result = runtime.cancel(mage, SkillId(2), InterruptFlags::empty())?;
            tracing::info!("mage cancels {}: {}", SkillId(2), result);
        }
        if frame == 150 {
            let result = runtime.interrupt(
                monk,
                SkillId(4),
                InterruptSource::Entity(mage),
                InterruptFlags::empty(),
            )?;
            tracing::info!("mage interrupts monk: {}", result);
        }

        runtime.advance(FRAME);

        for (slot, (caster, skill)) in [mage, monk]
            .into_iter()
            .flat_map(|caster| skills.iter().map(move |&skill| (caster, skill)))
            .enumerate()
        {
            let state = runtime.snapshot(caster, skill)?.map(|snapshot| snapshot.state);
            if state != last[slot] {
                tracing::info!(
                    t = runtime.elapsed(),
                    "{} {}: {:?} -> {:?}",
                    caster,
                    skill,
                    last[slot],
                    state
                );
                last[slot] = state;
            }
        }
    }

    Ok(())
}
