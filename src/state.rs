// Shared motion state between the command listener and the control loop

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Target motion shared by the two runtime tasks.
///
/// Both the listener and the control loop may touch these fields, so each is
/// an independent atomic cell. There is deliberately no compound update of
/// (velocity, moving) together: a reader can observe a new velocity with the
/// old moving flag (or the reverse) for at most one control-loop tick, and
/// the robot tolerates a single 20 ms inconsistency window. Keep it that way
/// rather than adding a lock.
pub struct MotionState {
    // f64 bit pattern, so velocity stores/loads stay lock-free
    velocity_x: AtomicU64,
    moving: AtomicBool,
}

impl MotionState {
    /// Stationary state: zero velocity, not moving
    pub fn new() -> Self {
        Self {
            velocity_x: AtomicU64::new(0.0f64.to_bits()),
            moving: AtomicBool::new(false),
        }
    }

    /// Set target forward velocity in m/s (negative = backward)
    pub fn set_velocity(&self, velocity_x: f64) {
        self.velocity_x.store(velocity_x.to_bits(), Ordering::Relaxed);
    }

    /// Set whether the control loop should stream velocity frames
    pub fn set_moving(&self, moving: bool) {
        self.moving.store(moving, Ordering::Relaxed);
    }

    /// Read (velocity, moving). The two loads are independent; see the type
    /// docs for the consistency contract.
    pub fn snapshot(&self) -> (f64, bool) {
        let velocity_x = f64::from_bits(self.velocity_x.load(Ordering::Relaxed));
        let moving = self.moving.load(Ordering::Relaxed);
        (velocity_x, moving)
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
