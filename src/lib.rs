// Lite3 motion-control bridge
//
// Turns single-byte voice commands (already authenticated upstream) into the
// controller's binary frame protocol: mode-switch handshakes on command, a
// 50 Hz heartbeat, and a continuous velocity stream while moving.

pub mod command;
pub mod config;
pub mod protocol;
pub mod runtime;
pub mod state;
