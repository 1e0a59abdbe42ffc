// Lite3 motion controller UDP frame encoding
//
// Frame format: 12-byte header of three 32-bit words (code, payload size,
// payload type), followed by `payload size` bytes of payload. The controller
// never replies on this channel, so only encoding is implemented.

/// Command codes from the motion controller documentation
pub const CMD_HEARTBEAT: u32 = 0x2104_0001;
pub const CMD_STAND_SIT: u32 = 0x2101_0202; // stand/sit toggle
pub const CMD_MOVE_MODE: u32 = 0x2101_0D06; // walking mode
pub const CMD_NAV_MODE: u32 = 0x2101_0C03; // accept external velocity commands
pub const CMD_VEL_X: u32 = 0x0140; // forward/backward velocity
pub const CMD_HELLO: u32 = 0x2101_0507; // greeting gesture

/// Header length on the wire: code, payload size, payload type
pub const HEADER_LEN: usize = 12;

/// Payload capacity of a controller frame
pub const MAX_PAYLOAD: usize = 1024;

/// Payload type tags
const TYPE_NONE: u32 = 0;
const TYPE_DATA: u32 = 1;

/// Encode a header-only frame.
///
/// Quirk preserved from the controller documentation: parameterless commands
/// carry their small integer parameter in the payload-size field, with payload
/// type 0 and no payload bytes. The field is NOT a byte count for these
/// frames. Do not "fix" this; the controller's handling of the field for
/// simple commands is unverified.
pub fn encode_simple(code: u32, value: u32) -> [u8; HEADER_LEN] {
    let mut frame = [0u8; HEADER_LEN];
    frame[0..4].copy_from_slice(&code.to_ne_bytes());
    frame[4..8].copy_from_slice(&value.to_ne_bytes());
    frame[8..12].copy_from_slice(&TYPE_NONE.to_ne_bytes());
    frame
}

/// Encode a frame carrying one 64-bit float payload.
///
/// The payload is the platform's native byte representation of the value; the
/// original sender performed no byte-order conversion and neither do we, which
/// assumes the controller shares our byte order.
pub fn encode_velocity(code: u32, velocity: f64) -> [u8; HEADER_LEN + 8] {
    let mut frame = [0u8; HEADER_LEN + 8];
    frame[0..4].copy_from_slice(&code.to_ne_bytes());
    frame[4..8].copy_from_slice(&8u32.to_ne_bytes());
    frame[8..12].copy_from_slice(&TYPE_DATA.to_ne_bytes());
    frame[12..20].copy_from_slice(&velocity.to_ne_bytes());
    frame
}

/// Read the command code back out of an encoded frame (test/diagnostic aid)
pub fn frame_code(frame: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = frame.get(0..4)?.try_into().ok()?;
    Some(u32::from_ne_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_frame_layout() {
        let frame = encode_simple(CMD_HEARTBEAT, 0);
        assert_eq!(frame.len(), HEADER_LEN);
        assert_eq!(frame[0..4], CMD_HEARTBEAT.to_ne_bytes());
        assert_eq!(frame[4..8], 0u32.to_ne_bytes());
        assert_eq!(frame[8..12], 0u32.to_ne_bytes());
    }

    #[test]
    fn test_simple_frame_value_rides_in_size_field() {
        // Parameterless commands stash their parameter in the size field
        // and still encode as a bare 12-byte header.
        let frame = encode_simple(CMD_STAND_SIT, 7);
        assert_eq!(frame.len(), HEADER_LEN);
        assert_eq!(frame[4..8], 7u32.to_ne_bytes());
    }

    #[test]
    fn test_velocity_frame_layout() {
        let frame = encode_velocity(CMD_VEL_X, 0.3);
        assert_eq!(frame.len(), HEADER_LEN + 8);
        assert_eq!(frame[0..4], CMD_VEL_X.to_ne_bytes());
        assert_eq!(frame[4..8], 8u32.to_ne_bytes());
        assert_eq!(frame[8..12], 1u32.to_ne_bytes());
    }

    #[test]
    fn test_velocity_payload_round_trip() {
        for v in [0.0, 0.3, -0.3, 1.25e-3, -17.5] {
            let frame = encode_velocity(CMD_VEL_X, v);
            let payload: [u8; 8] = frame[HEADER_LEN..].try_into().unwrap();
            assert_eq!(f64::from_ne_bytes(payload), v);
        }
    }

    #[test]
    fn test_frame_code() {
        assert_eq!(frame_code(&encode_simple(CMD_NAV_MODE, 0)), Some(CMD_NAV_MODE));
        assert_eq!(frame_code(&encode_velocity(CMD_VEL_X, 0.1)), Some(CMD_VEL_X));
        assert_eq!(frame_code(&[0u8; 2]), None);
    }
}
