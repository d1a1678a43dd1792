//! Single-owner game session
//!
//! Host callbacks (pointer listeners, the spawn interval) only enqueue
//! events. The frame callback is the one consumer: it applies queued
//! events in arrival order, steps the simulation, publishes score text
//! and draws. State is never touched from two places at once.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::renderer::{Surface, draw_scene};
use crate::scoreboard::{ScoreSink, format_current, format_highest};
use crate::sim::{GameState, PointerEvent, handle_pointer, spawn_target, tick};

/// Something the host reported between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Pointer(PointerEvent),
    /// The spawn interval elapsed
    SpawnTimer,
}

/// Game state plus its pending host events
pub struct Session {
    pub state: GameState,
    queue: VecDeque<HostEvent>,
}

impl Session {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::with_config(seed, config),
            queue: VecDeque::new(),
        }
    }

    /// Queue an event for the next frame
    pub fn push(&mut self, event: HostEvent) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Show the initial `Score: 0` / `Highest: 0` labels
    pub fn publish_scores(&self, sink: &mut impl ScoreSink) {
        sink.set_current(&format_current(self.state.score.current()));
        sink.set_highest(&format_highest(self.state.score.highest()));
    }

    /// Run one frame: drain events, update, publish score changes, render
    pub fn frame(&mut self, surface: &mut impl Surface, sink: &mut impl ScoreSink) {
        while let Some(event) = self.queue.pop_front() {
            match event {
                HostEvent::Pointer(pointer) => handle_pointer(&mut self.state, pointer),
                HostEvent::SpawnTimer => {
                    spawn_target(&mut self.state);
                }
            }
        }

        for update in tick(&mut self.state) {
            update.publish(sink);
        }

        draw_scene(&self.state, surface);
    }
}
