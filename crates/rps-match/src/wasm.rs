//! WASM bindings for front-end match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{run_match, MatchConfig, Move};

/// Replay a match with full round-by-round details
///
/// # Arguments
/// * `config_json` - JSON serialized MatchConfig (missing fields use defaults)
/// * `moves_json` - JSON array of move pairs, e.g. `[["Rock", "Paper"], ["None", "Scissors"]]`
///
/// # Returns
/// JSON serialized MatchRecord
#[wasm_bindgen]
pub fn replay_match(config_json: &str, moves_json: &str) -> Result<JsValue, JsError> {
    let config = MatchConfig::from_json(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;
    let moves: Vec<(Move, Move)> = serde_json::from_str(moves_json)
        .map_err(|e| JsError::new(&format!("Invalid moves: {}", e)))?;

    let record = run_match(config, &moves)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&record)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Play one move against another: 1 if the first wins, -1 if it loses, 0 on a tie
#[wasm_bindgen]
pub fn play_moves(move_one: &str, move_two: &str) -> Result<i8, JsError> {
    let move_one = move_one.parse::<Move>().map_err(|e| JsError::new(&e.to_string()))?;
    let move_two = move_two.parse::<Move>().map_err(|e| JsError::new(&e.to_string()))?;

    Ok(move_one.play_against(move_two))
}

#[derive(Debug, serde::Serialize)]
struct MoveInfo {
    id: Move,
    name: &'static str,
    beats: Option<Move>,
}

fn move_types() -> Vec<MoveInfo> {
    Move::PLAYABLE
        .into_iter()
        .map(|m| MoveInfo {
            id: m,
            name: m.name(),
            beats: m.beats(),
        })
        .collect()
}

/// Get all playable moves and what each one beats
#[wasm_bindgen]
pub fn get_move_types() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&move_types())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
