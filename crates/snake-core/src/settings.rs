//! Game settings sent with player registration

use serde::{Deserialize, Serialize};

/// Optional game configuration a client may request when registering.
///
/// Every field is optional; unset fields are left out of the wire
/// object entirely and the server applies its own defaults. Mostly
/// relevant for training games — tournament servers ignore these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_noof_players: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_snake_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_ms_per_tick: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub obstacles_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_to_tail_consumes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail_consume_grows: Option<bool>,
}
