// Ports, loop rate, and motion tuning
use std::time::Duration;

// Control loop frequency (heartbeat + velocity stream)
pub const LOOP_HZ: u64 = 50;

// Pause between two mode-switch commands. The controller never acknowledges
// a mode switch on this channel; 50 ms is an empirical bound on how long the
// robot needs to finish the transition, to be replaced with a real handshake
// if the protocol ever exposes one.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);

// Cruise speed commanded by the forward/backward voice commands (m/s)
pub const CRUISE_VELOCITY_X: f64 = 0.3;

// UDP port the voice front end sends single-byte commands to
pub const DEFAULT_LISTEN_PORT: u16 = 5001;

// Motion controller address on the robot network
pub const DEFAULT_MOTION_ADDR: &str = "192.168.1.120:43893";

// Inbound datagram buffer (commands are 1 byte, but don't choke on noise)
pub const RECV_BUFFER_SIZE: usize = 1024;
