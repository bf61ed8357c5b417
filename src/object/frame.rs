//! The canonical byte framing shared by every object kind:
//!
//! ```text
//! <kind> SP <decimal length> NUL <payload>
//! ```
//!
//! The whole frame is hashed to produce the object ID and is what gets
//! compressed into a loose object file.

use thiserror::Error;

use super::kind::{Kind, UnknownKindError};
use super::parse_utils::split_once;

/// Reasons a byte sequence is not a well-formed object frame.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FrameError {
    #[error("header has no space after the object kind")]
    MissingKindDelimiter,

    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),

    #[error("header has no NUL after the length")]
    MissingLengthTerminator,

    #[error("invalid length field `{0}`")]
    InvalidLength(String),

    #[error("bad length: header declares {declared} bytes but {actual} follow")]
    LengthMismatch { declared: usize, actual: usize },
}

/// Encode `payload` as a frame of the given kind.
pub fn encode(kind: Kind, payload: &[u8]) -> Vec<u8> {
    let len = payload.len().to_string();
    let name = kind.as_bytes();

    let mut frame = Vec::with_capacity(name.len() + len.len() + 2 + payload.len());
    frame.extend_from_slice(name);
    frame.push(b' ');
    frame.extend_from_slice(len.as_bytes());
    frame.push(0);
    frame.extend_from_slice(payload);
    frame
}

/// Parse a frame into its kind and payload.
///
/// The declared length must exactly match the bytes following the NUL, so
/// truncated and over-long frames are both rejected.
pub fn decode(frame: &[u8]) -> Result<(Kind, &[u8]), FrameError> {
    let space = frame
        .iter()
        .position(|b| *b == b' ')
        .ok_or(FrameError::MissingKindDelimiter)?;

    let (name, rest) = (&frame[..space], &frame[space + 1..]);
    let kind = Kind::from_bytes(name)?;

    if !rest.contains(&0) {
        return Err(FrameError::MissingLengthTerminator);
    }

    let (len, payload) = split_once(rest, &0);
    let declared = parse_length(len)?;

    if declared != payload.len() {
        return Err(FrameError::LengthMismatch {
            declared,
            actual: payload.len(),
        });
    }

    Ok((kind, payload))
}

// Only canonical decimal: ASCII digits, no sign, no leading zeros.
fn parse_length(len: &[u8]) -> Result<usize, FrameError> {
    let invalid = || FrameError::InvalidLength(String::from_utf8_lossy(len).into_owned());

    if len.is_empty() || !len.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    if len.len() > 1 && len[0] == b'0' {
        return Err(invalid());
    }

    len.iter().try_fold(0usize, |acc, d| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add((d - b'0') as usize))
            .ok_or_else(invalid)
    })
}
