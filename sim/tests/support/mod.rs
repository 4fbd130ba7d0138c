// Headless frame-loop harness shared by the integration tests.
#![allow(dead_code)]

use std::time::Duration;

use bevy_ecs::{message::Messages, prelude::*};
use bevy_time::Time;

use sim::{
    ControlEvent, InputState, SimConfig, SoundEffect, TargetRng, collision_system,
    control_events_system, delayed_tasks_system, locomotion_system, projectiles_system,
};

pub struct Harness {
    pub world: World,
    schedule: Schedule,
}

impl Harness {
    pub fn new(seed: u64) -> Self {
        Self::with_config(SimConfig::default(), seed)
    }

    pub fn with_config(config: SimConfig, seed: u64) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.init_resource::<Messages<ControlEvent>>();
        world.init_resource::<Messages<SoundEffect>>();
        sim::init_world(&mut world, config, InputState::default(), TargetRng::seeded(seed));

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                delayed_tasks_system,
                control_events_system,
                locomotion_system,
                projectiles_system,
                collision_system,
            )
                .chain(),
        );

        Self { world, schedule }
    }

    pub fn send(&mut self, event: ControlEvent) {
        self.world.write_message(event);
    }

    // Advance the clock by `millis` and run one frame.
    pub fn step_millis(&mut self, millis: u64) {
        self.world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        self.schedule.run(&mut self.world);
    }

    pub fn take_sounds(&mut self) -> Vec<SoundEffect> {
        self.world
            .resource_mut::<Messages<SoundEffect>>()
            .drain()
            .collect()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.world.resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.world.resource_mut::<R>()
    }
}
