//! Frame loop state machine
//!
//! Owns the game state and decides, once per display frame, whether to tick
//! and whether to schedule another frame. Rendering and the actual frame
//! scheduling belong to the browser front end.

use crate::assets::{AssetError, AssetGate, AssetId, GateState};
use crate::sim::{GameState, TickInput, populate, tick};

/// Lifecycle of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Waiting on the asset barrier; no frames run
    Loading,
    /// Ticking once per frame
    Running,
    /// Not rescheduled; terminal
    Stopped,
}

/// Result of one frame callback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The simulation advanced, so the frame should be drawn
    pub ticked: bool,
    /// Score changed during this frame's tick
    pub score_changed: bool,
    /// Request another frame
    pub reschedule: bool,
}

pub struct LoopDriver {
    phase: LoopPhase,
    gate: AssetGate,
    state: GameState,
    /// Pending one-shot input, cleared after each tick
    input: TickInput,
}

impl LoopDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: LoopPhase::Loading,
            gate: AssetGate::new(),
            state: GameState::new(seed),
            input: TickInput::default(),
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn gate(&self) -> &AssetGate {
        &self.gate
    }

    /// An asset finished loading. Returns true if this started the loop.
    pub fn asset_loaded(&mut self, asset: AssetId) -> Result<bool, AssetError> {
        let gate = self.gate.loaded(asset)?;
        Ok(self.on_gate(gate))
    }

    /// An asset failed to load. Returns true if this started the loop.
    pub fn asset_failed(&mut self, asset: AssetId) -> Result<bool, AssetError> {
        let gate = self.gate.failed(asset)?;
        Ok(self.on_gate(gate))
    }

    fn on_gate(&mut self, gate: GateState) -> bool {
        match gate {
            GateState::Opened if self.phase == LoopPhase::Loading => {
                populate(&mut self.state);
                self.phase = LoopPhase::Running;
                log::info!(
                    "All assets settled ({} failed), game running with seed {}",
                    self.gate.failures().len(),
                    self.state.seed
                );
                true
            }
            GateState::Opened => false,
            GateState::Waiting { remaining } => {
                log::debug!("Waiting on {} asset(s)", remaining);
                false
            }
        }
    }

    /// Queue a jump for the next tick. Presses while loading or stopped are
    /// dropped; several presses within one frame collapse into one.
    pub fn request_jump(&mut self) {
        if self.phase == LoopPhase::Running {
            self.input.jump = true;
        }
    }

    /// One display frame: tick if running, then report what the caller should do
    pub fn frame(&mut self) -> FrameOutcome {
        if self.phase != LoopPhase::Running {
            return FrameOutcome::default();
        }

        let score_before = self.state.score;
        let input = std::mem::take(&mut self.input);
        let report = tick(&mut self.state, &input);
        if report.jumped {
            log::trace!("Jump at tick {}", self.state.time_ticks);
        }

        FrameOutcome {
            ticked: true,
            score_changed: self.state.score != score_before,
            reschedule: true,
        }
    }

    /// Halt the loop; the next frame callback will not reschedule
    pub fn stop(&mut self) {
        if self.phase != LoopPhase::Stopped {
            log::warn!(
                "Loop stopped at tick {} with score {}",
                self.state.time_ticks,
                self.state.score
            );
            self.phase = LoopPhase::Stopped;
        }
    }
}
