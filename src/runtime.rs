// Bridge runtime: one UDP socket, two loops.
//
// The command listener blocks on inbound datagrams from the voice front end
// and executes each command's step plan. The control loop wakes at 50 Hz and
// keeps the motion controller fed with heartbeats (and velocity while
// moving). They share only the MotionState; there is no queue and no lock,
// and a state write becomes visible to the loop within one tick.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::{interval, sleep};
use tracing::{debug, info, warn};

use crate::command::{Command, Step};
use crate::config::{LOOP_HZ, RECV_BUFFER_SIZE};
use crate::protocol::{self, CMD_HEARTBEAT, CMD_VEL_X};
use crate::state::MotionState;

/// Fatal bridge errors. Anything here means the process must not continue:
/// the robot depends on the listener and the heartbeat stream being alive.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to open UDP socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("receive failed on command socket: {0}")]
    Recv(#[source] std::io::Error),
}

/// The motion-control bridge: holds the socket, the controller address, and
/// the shared motion state for the process lifetime.
pub struct Bridge {
    socket: Arc<UdpSocket>,
    motion_addr: SocketAddr,
    state: Arc<MotionState>,
}

impl Bridge {
    /// Open the UDP socket. The same socket receives voice commands on the
    /// listen port and sends frames toward the controller. A bind failure is
    /// fatal; there is no retry.
    pub async fn bind(listen: SocketAddr, motion_addr: SocketAddr) -> Result<Self, BridgeError> {
        let socket = UdpSocket::bind(listen).await.map_err(BridgeError::Bind)?;
        let local = socket.local_addr().map_err(BridgeError::Bind)?;
        info!("Bridge up: listening on {}, controller at {}", local, motion_addr);

        Ok(Self {
            socket: Arc::new(socket),
            motion_addr,
            state: Arc::new(MotionState::new()),
        })
    }

    /// Actual bound address (useful when binding to port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Spawn the control loop and run the command listener until a receive
    /// error kills it. Neither loop terminates on its own; shutdown is
    /// process kill.
    pub async fn run(self) -> Result<(), BridgeError> {
        tokio::spawn(control_loop(
            Arc::clone(&self.socket),
            self.motion_addr,
            Arc::clone(&self.state),
        ));
        self.listen().await
    }

    /// Blocking receive loop over inbound command datagrams. Only the first
    /// byte matters; empty datagrams and unknown bytes are no-ops.
    async fn listen(&self) -> Result<(), BridgeError> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];

        loop {
            let (len, from) = self
                .socket
                .recv_from(&mut buf)
                .await
                .map_err(BridgeError::Recv)?;
            if len == 0 {
                continue;
            }

            match Command::from_byte(buf[0]) {
                Some(cmd) => {
                    info!("Command {:?} from {}", cmd, from);
                    self.execute(cmd).await;
                }
                None => debug!("Ignoring byte 0x{:02X} from {}", buf[0], from),
            }
        }
    }

    /// Run a command's step plan in order. Settle pauses happen here, on the
    /// listener task: a second command cannot preempt a sequence mid-flight,
    /// which bounds command latency at ~100 ms and is fine at voice rates.
    async fn execute(&self, cmd: Command) {
        for step in cmd.steps() {
            match step {
                Step::SendSimple(code) => self.send(&protocol::encode_simple(code, 0)).await,
                Step::SendVelocity(code, v) => self.send(&protocol::encode_velocity(code, v)).await,
                Step::Settle(delay) => sleep(delay).await,
                Step::SetVelocity(v) => self.state.set_velocity(v),
                Step::SetMoving(m) => self.state.set_moving(m),
            }
        }
    }

    /// Fire-and-forget frame send: the heartbeat/velocity stream repeats
    /// every tick, so a lost frame is superseded within 20 ms.
    async fn send(&self, frame: &[u8]) {
        if let Err(e) = self.socket.send_to(frame, self.motion_addr).await {
            warn!("Frame send failed: {}", e);
        }
    }
}

/// Frames one control tick puts on the wire: always exactly one heartbeat,
/// plus one velocity frame while the moving flag is set.
fn tick_frames(snapshot: (f64, bool)) -> Vec<Vec<u8>> {
    let (velocity_x, moving) = snapshot;
    let mut frames = vec![protocol::encode_simple(CMD_HEARTBEAT, 0).to_vec()];
    if moving {
        frames.push(protocol::encode_velocity(CMD_VEL_X, velocity_x).to_vec());
    }
    frames
}

/// 50 Hz loop feeding the controller. The heartbeat keeps the controller's
/// safety timeout from tripping, so nothing long-running may ever run on
/// this task.
async fn control_loop(socket: Arc<UdpSocket>, motion_addr: SocketAddr, state: Arc<MotionState>) {
    let mut tick = interval(Duration::from_millis(1000 / LOOP_HZ));
    info!("Control loop started: {}Hz heartbeat", LOOP_HZ);

    loop {
        tick.tick().await;
        for frame in tick_frames(state.snapshot()) {
            if let Err(e) = socket.send_to(&frame, motion_addr).await {
                warn!("Frame send failed: {}", e);
            }
        }
    }
}

/// Entry point used by main: bind once, run until a fatal error
pub async fn run(listen: SocketAddr, motion_addr: SocketAddr) -> Result<(), BridgeError> {
    let bridge = Bridge::bind(listen, motion_addr).await?;
    bridge.run().await
}
