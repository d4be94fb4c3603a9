//! Drift engine simulation
//!
//! One parameterized engine covers the constant-tweaked variants of the
//! drift demo: the sine phase step and the starting drift arrive through
//! `EngineParams` instead of being baked in per copy.

/// Engine tuning parameters
#[derive(Clone, Copy, Debug)]
pub struct EngineParams {
    /// Radians advanced per cycle index in the sine series
    pub phase_step: f64,

    /// Drift reported before the first cycle
    pub initial_drift: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            phase_step: 0.1,
            initial_drift: 0.5,
        }
    }
}

/// Cycle-counting engine with a recomputed drift metric
pub struct Engine {
    params: EngineParams,
    cycle_count: u32,
    drift: f64,
}

impl Engine {
    /// Create an engine that has not yet run a cycle
    pub fn new(params: EngineParams) -> Self {
        Engine {
            params,
            cycle_count: 0,
            drift: params.initial_drift,
        }
    }

    /// Advance one cycle and recompute the drift
    ///
    /// Drift after n cycles is Σ sin(i·phase_step)/(i + 1) for i in 1..=n.
    pub fn run(&mut self) -> f64 {
        self.cycle_count += 1;
        self.drift = self.recalculate_drift(self.cycle_count);
        self.drift
    }

    /// Cycles run so far
    pub fn cycles(&self) -> u32 {
        self.cycle_count
    }

    /// Most recent drift value
    pub fn drift(&self) -> f64 {
        self.drift
    }

    fn recalculate_drift(&self, n: u32) -> f64 {
        let mut sum = 0.0;
        for i in 1..=n {
            let i = i as f64;
            sum += (i * self.params.phase_step).sin() / (i + 1.0);
        }
        sum
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let engine = Engine::default();
        assert_eq!(engine.cycles(), 0);
        assert!((engine.drift() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_drift_series() {
        let mut engine = Engine::default();

        assert!((engine.run() - 0.04991670832341408).abs() < 1e-12);
        assert_eq!(engine.cycles(), 1);

        for _ in 0..4 {
            engine.run();
        }
        assert!((engine.drift() - 0.3478077951495333).abs() < 1e-12);

        for _ in 0..5 {
            engine.run();
        }
        assert_eq!(engine.cycles(), 10);
        assert!((engine.drift() - 0.7435345020794306).abs() < 1e-12);
    }

    #[test]
    fn test_phase_step_parameterized() {
        let mut slow = Engine::new(EngineParams {
            phase_step: 0.05,
            initial_drift: 0.0,
        });
        let mut fast = Engine::default();

        // sin is near-linear at small phases, so the halved step roughly
        // halves the first-cycle drift
        let slow_drift = slow.run();
        let fast_drift = fast.run();
        assert!(slow_drift < fast_drift);
        assert!((slow_drift * 2.0 - fast_drift).abs() < 1e-3);
    }
}
