//! Binary snapshots of states and moves.
//!
//! Frames are `bincode` encodings of the serde data. Decoded states are
//! validated before they are returned, so a frame from an untrusted peer can
//! never produce a state whose board and registries disagree.

use crate::core::{GameState, Move};
use crate::error::CodecError;

/// Encode a state.
///
/// # Errors
///
/// Fails only if bincode cannot serialize the value.
pub fn encode_state(state: &GameState) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(state)?)
}

/// Decode and validate a state.
///
/// # Errors
///
/// [`CodecError::Frame`] for malformed bytes, [`CodecError::Invalid`] for a
/// well-formed frame holding an inconsistent state.
pub fn decode_state(bytes: &[u8]) -> Result<GameState, CodecError> {
    let state: GameState = bincode::deserialize(bytes)?;
    state.validate()?;
    Ok(state)
}

/// Encode a move.
///
/// # Errors
///
/// Fails only if bincode cannot serialize the value.
pub fn encode_move(mv: &Move) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(mv)?)
}

/// Decode a move. Legality is checked when the move is played, not here.
///
/// # Errors
///
/// [`CodecError::Frame`] for malformed bytes.
pub fn decode_move(bytes: &[u8]) -> Result<Move, CodecError> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceKind, Position};
    use crate::error::StateError;

    #[test]
    fn test_state_frame() {
        let mut state = GameState::initial();
        state
            .apply_move(Move::capture(Position::new(1, 2), Position::new(3, 2)))
            .unwrap();
        state.selected = Some(Position::new(3, 0));

        let bytes = encode_state(&state).unwrap();
        assert_eq!(decode_state(&bytes).unwrap(), state);
    }

    #[test]
    fn test_move_frame() {
        let mv = Move::capture(Position::new(0, 0), Position::new(2, 0));
        let bytes = encode_move(&mv).unwrap();
        assert_eq!(decode_move(&bytes).unwrap(), mv);
    }

    #[test]
    fn test_truncated_frame() {
        let bytes = encode_state(&GameState::initial()).unwrap();
        let err = decode_state(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, CodecError::Frame(_)));
    }

    #[test]
    fn test_inconsistent_state_rejected() {
        let mut state = GameState::initial();
        state.board.set(Position::new(0, 0), Some(PieceKind::Cannon));

        let bytes = encode_state(&state).unwrap();
        let err = decode_state(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::Invalid(StateError::UnregisteredPiece)));
    }
}
