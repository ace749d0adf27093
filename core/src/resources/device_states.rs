//! `/deviceStates` resource. Only states created through ARI (`Stasis:`
//! devices) can be updated or deleted.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn device_states_list(&self) -> AriResult<Value> {
        self.get("deviceStates", &Params::new())
    }

    pub fn device_states_get(&self, device_name: &str) -> AriResult<Value> {
        self.get(&format!("deviceStates/{device_name}"), &Params::new())
    }

    /// Requires `deviceState`, e.g. `INUSE`.
    pub fn device_states_update(&self, device_name: &str, params: &Params) -> AriResult<Value> {
        self.put(&format!("deviceStates/{device_name}"), params)
    }

    pub fn device_states_delete(&self, device_name: &str) -> AriResult<Value> {
        self.delete(&format!("deviceStates/{device_name}"), &Params::new())
    }
}
