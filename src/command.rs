// Voice command alphabet and the timed step plans they expand to
//
// Each inbound byte maps to one command, and each command expands to an
// explicit ordered list of steps (frames to send, settle pauses, state
// writes). Keeping the plan as data makes the frame order and the mode-switch
// timing assumptions visible and testable instead of buried in a socket loop.

use std::time::Duration;

use crate::config::{CRUISE_VELOCITY_X, SETTLE_DELAY};
use crate::protocol::{CMD_HELLO, CMD_MOVE_MODE, CMD_NAV_MODE, CMD_STAND_SIT, CMD_VEL_X};

/// Recognized single-byte commands from the voice front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 'K' — stand up (toggles, entered via navigation mode)
    StandToggle,
    /// 'O' — sit down (same toggle, no mode switch first)
    SitToggle,
    /// 'I' — walk forward at cruise speed
    Forward,
    /// 'G' — walk backward at cruise speed
    Backward,
    /// '0' — stop
    Stop,
    /// 'H' — greeting gesture
    Greet,
}

/// One step of a command plan, executed in order by the listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Send a header-only frame (parameter 0)
    SendSimple(u32),
    /// Send a frame carrying a velocity payload
    SendVelocity(u32, f64),
    /// Pause for a mode transition to settle
    Settle(Duration),
    SetVelocity(f64),
    SetMoving(bool),
}

impl Command {
    /// Map an inbound byte to a command; unknown bytes are not commands
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'K' => Some(Self::StandToggle),
            b'O' => Some(Self::SitToggle),
            b'I' => Some(Self::Forward),
            b'G' => Some(Self::Backward),
            b'0' => Some(Self::Stop),
            b'H' => Some(Self::Greet),
            _ => None,
        }
    }

    /// The ordered steps this command performs.
    ///
    /// Frame order and the placement of state writes relative to the frames
    /// match what the controller expects: posture commands halt the velocity
    /// stream before touching modes, while forward/backward finish both mode
    /// switches before enabling the stream.
    pub fn steps(self) -> Vec<Step> {
        match self {
            Self::StandToggle => vec![
                Step::SetMoving(false),
                Step::SetVelocity(0.0),
                // Navigation mode first so the controller listens to us
                Step::SendSimple(CMD_NAV_MODE),
                Step::Settle(SETTLE_DELAY),
                Step::SendSimple(CMD_STAND_SIT),
            ],
            Self::SitToggle => vec![
                Step::SetMoving(false),
                Step::SetVelocity(0.0),
                Step::SendSimple(CMD_STAND_SIT),
            ],
            Self::Forward => Self::walk_steps(CRUISE_VELOCITY_X),
            Self::Backward => Self::walk_steps(-CRUISE_VELOCITY_X),
            Self::Stop => vec![
                Step::SetVelocity(0.0),
                Step::SetMoving(false),
                // One explicit zero-velocity frame in case the next control
                // loop tick is late
                Step::SendVelocity(CMD_VEL_X, 0.0),
            ],
            Self::Greet => vec![Step::SetMoving(false), Step::SendSimple(CMD_HELLO)],
        }
    }

    /// Shared mode-switch sequence for forward/backward
    fn walk_steps(velocity_x: f64) -> Vec<Step> {
        vec![
            Step::SendSimple(CMD_NAV_MODE),
            Step::Settle(SETTLE_DELAY),
            Step::SendSimple(CMD_MOVE_MODE),
            Step::Settle(SETTLE_DELAY),
            Step::SetVelocity(velocity_x),
            Step::SetMoving(true),
        ]
    }
}
