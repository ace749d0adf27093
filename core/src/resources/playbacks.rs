use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn playbacks_get(&self, playback_id: &str) -> AriResult<Value> {
        self.get(&format!("playbacks/{playback_id}"), &Params::new())
    }

    pub fn playbacks_stop(&self, playback_id: &str) -> AriResult<Value> {
        self.delete(&format!("playbacks/{playback_id}"), &Params::new())
    }

    /// Requires `operation`: `restart`, `pause`, `unpause`, `reverse` or
    /// `forward`.
    pub fn playbacks_control(&self, playback_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("playbacks/{playback_id}/control"), params)
    }
}
