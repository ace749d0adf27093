//! `/bridges` resource.
//!
//! Bridge ids are substituted into the path verbatim. Parameters follow the
//! upstream names (`type`, `bridgeId`, `channel`, `mohClass`, `media`, ...).

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    /// All active bridges.
    pub fn bridges_list(&self) -> AriResult<Value> {
        self.get("bridges", &Params::new())
    }

    /// Create a bridge. Accepts `type`, `bridgeId` and `name`.
    pub fn bridges_create(&self, params: &Params) -> AriResult<Value> {
        self.post("bridges", params)
    }

    /// Create a bridge with a caller-chosen id, or update the one that has it.
    pub fn bridges_create_or_update_with_id(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}"), params)
    }

    pub fn bridges_get(&self, bridge_id: &str) -> AriResult<Value> {
        self.get(&format!("bridges/{bridge_id}"), &Params::new())
    }

    /// Shut a bridge down.
    pub fn bridges_destroy(&self, bridge_id: &str) -> AriResult<Value> {
        self.delete(&format!("bridges/{bridge_id}"), &Params::new())
    }

    /// Requires `channel` (comma separated ids); `role` is optional.
    pub fn bridges_add_channel(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/addChannel"), params)
    }

    /// Requires `channel` (comma separated ids).
    pub fn bridges_remove_channel(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/removeChannel"), params)
    }

    pub fn bridges_start_moh(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/moh"), params)
    }

    pub fn bridges_stop_moh(&self, bridge_id: &str) -> AriResult<Value> {
        self.delete(&format!("bridges/{bridge_id}/moh"), &Params::new())
    }

    /// Play media to every channel in the bridge. Requires `media`.
    pub fn bridges_play(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/play"), params)
    }

    pub fn bridges_play_with_id(&self, bridge_id: &str, playback_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/play/{playback_id}"), params)
    }

    /// Record the mixed audio of the bridge. Requires `name` and `format`.
    pub fn bridges_record(&self, bridge_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("bridges/{bridge_id}/record"), params)
    }
}
