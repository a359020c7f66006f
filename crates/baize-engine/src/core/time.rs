/// Maximum simulation frames issued for a single host tick.
const MAX_FRAMES_PER_TICK: u32 = 10;

/// Frame clock for frame-driven simulations.
///
/// Physics in this engine treats one frame as one implicit time unit, so the
/// host's variable tick interval is converted into a whole number of nominal
/// frames. Leftover time carries over to the next tick.
pub struct FrameClock {
    /// Nominal duration of one simulation frame, in seconds.
    frame_dt: f32,
    /// Host time not yet turned into frames.
    accumulator: f32,
    /// Total frames issued since creation.
    frames: u64,
}

impl FrameClock {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Add host time and return how many simulation frames to run now.
    pub fn advance(&mut self, host_dt: f32) -> u32 {
        if host_dt.is_nan() || host_dt <= 0.0 {
            return 0;
        }
        // Cap backlog so a stalled tab does not replay seconds of simulation
        self.accumulator = (self.accumulator + host_dt).min(self.frame_dt * MAX_FRAMES_PER_TICK as f32);
        let steps = (self.accumulator / self.frame_dt) as u32;
        self.accumulator -= steps as f32 * self.frame_dt;
        self.frames += steps as u64;
        steps
    }

    /// Fraction of a frame carried over (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.frame_dt
    }

    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Total number of frames issued so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
