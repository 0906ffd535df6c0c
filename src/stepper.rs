//! Fixed timestep accumulator
//!
//! Frame times from a render loop are irregular; the simulation wants the
//! same small `dt` every step. The stepper banks frame time and spends it in
//! whole `sim_dt` steps.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::Simulation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStepper {
    /// Banked time not yet simulated (seconds)
    pub accumulator: f64,
    pub sim_dt: f64,
    /// Cap on steps per `advance` call
    pub max_substeps: u32,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepper {
    pub fn new(sim_dt: f64, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            sim_dt,
            max_substeps: max_substeps.max(1),
        }
    }

    /// Bank `frame_dt` and run as many fixed steps as it covers
    ///
    /// Returns the number of steps taken. Time left over after hitting
    /// `max_substeps` is dropped rather than carried into the next frame.
    pub fn advance(&mut self, sim: &mut Simulation, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < self.max_substeps {
            sim.step(self.sim_dt);
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }

        if self.accumulator >= self.sim_dt {
            log::debug!(
                "Substep cap {} hit, dropping {:.4}s of simulation time",
                self.max_substeps,
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Fraction of a step banked, for render interpolation
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.sim_dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
