use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    /// Installed sounds, filtered by `lang` and `format`.
    pub fn sounds_list(&self, params: &Params) -> AriResult<Value> {
        self.get("sounds", params)
    }

    pub fn sounds_get(&self, sound_id: &str) -> AriResult<Value> {
        self.get(&format!("sounds/{sound_id}"), &Params::new())
    }
}
