//! `/applications` resource: Stasis applications and their subscriptions.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn applications_list(&self) -> AriResult<Value> {
        self.get("applications", &Params::new())
    }

    pub fn applications_get(&self, application_name: &str) -> AriResult<Value> {
        self.get(&format!("applications/{application_name}"), &Params::new())
    }

    /// Requires `eventSource`, e.g. `channel:1409624128.10`.
    pub fn applications_subscribe(&self, application_name: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("applications/{application_name}/subscription"), params)
    }

    pub fn applications_unsubscribe(&self, application_name: &str, params: &Params) -> AriResult<Value> {
        self.delete(&format!("applications/{application_name}/subscription"), params)
    }
}
