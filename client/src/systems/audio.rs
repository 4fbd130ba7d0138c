use bevy::{audio::Volume, prelude::*};

use crate::{
    constants::SOUND_VOLUME,
    resources::{ActiveSounds, SoundAssets},
};
use sim::SoundEffect;

// ============================================================================
// Audio System
// ============================================================================

// Play requested effects. A still-playing instance of the same effect is
// stopped first so rapid repeats restart instead of stacking.
pub fn audio_system(
    mut commands: Commands,
    mut requests: MessageReader<SoundEffect>,
    sounds: Res<SoundAssets>,
    mut active: ResMut<ActiveSounds>,
) {
    // Repeats within one frame restart at the same instant, so one instance covers them
    let mut effects: Vec<SoundEffect> = Vec::new();
    for &effect in requests.read() {
        if !effects.contains(&effect) {
            effects.push(effect);
        }
    }

    for effect in effects {
        // Finished instances despawn themselves, so the previous one may be gone
        if let Some(previous) = active.0.remove(&effect)
            && let Ok(mut entity) = commands.get_entity(previous)
        {
            entity.try_despawn();
        }

        let entity = commands
            .spawn((
                AudioPlayer::new(sounds.handle(effect)),
                PlaybackSettings::DESPAWN.with_volume(Volume::Linear(SOUND_VOLUME)),
            ))
            .id();
        trace!("playing {} sound", effect.name());
        active.0.insert(effect, entity);
    }
}
