//! URL state persistence for mock pages
//!
//! Control values that differ from their defaults are stored in the `state`
//! query parameter as URL-safe base64 JSON, so every configuration of a mock
//! has a shareable link.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::warn;

pub type StateMap = BTreeMap<String, String>;

/// Decode the `state` query parameter. Anything unreadable yields an empty
/// map, which means "all defaults".
pub fn decode_state(encoded: &str) -> StateMap {
    if encoded.is_empty() {
        return StateMap::new();
    }

    let bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Ignoring mock state that is not base64: {}", e);
            return StateMap::new();
        }
    };

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        warn!("Ignoring mock state that is not a JSON object of strings: {}", e);
        StateMap::new()
    })
}

/// Encode non-default control values. `None` when everything is at its
/// default, so the URL stays clean.
pub fn encode_state(state: &StateMap) -> Option<String> {
    if state.is_empty() {
        return None;
    }
    match serde_json::to_vec(state) {
        Ok(json) => Some(URL_SAFE_NO_PAD.encode(json)),
        Err(e) => {
            warn!("Failed to encode mock state: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_has_no_param() {
        assert_eq!(encode_state(&StateMap::new()), None);
        assert!(decode_state("").is_empty());
    }

    #[test]
    fn test_state_survives_the_url() {
        let mut state = StateMap::new();
        state.insert("status".to_string(), "weeks".to_string());
        state.insert("name".to_string(), "Orbit & Co / ünïcode".to_string());

        let encoded = encode_state(&state).unwrap();
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('='));
        assert_eq!(decode_state(&encoded), state);
    }

    #[test]
    fn test_garbage_decodes_to_defaults() {
        assert!(decode_state("!!not base64!!").is_empty());
        // valid base64, but not a JSON object
        assert!(decode_state(&URL_SAFE_NO_PAD.encode("[1,2]")).is_empty());
    }
}
