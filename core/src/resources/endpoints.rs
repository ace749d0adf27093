//! `/endpoints` resource.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn endpoints_list(&self) -> AriResult<Value> {
        self.get("endpoints", &Params::new())
    }

    /// Send a text message. Requires `to` and `from`; accepts `body` and
    /// `variables`.
    pub fn endpoints_send_message(&self, params: &Params) -> AriResult<Value> {
        self.put("endpoints/sendMessage", params)
    }

    /// Endpoints of one technology, e.g. `PJSIP`.
    pub fn endpoints_list_by_tech(&self, tech: &str) -> AriResult<Value> {
        self.get(&format!("endpoints/{tech}"), &Params::new())
    }

    pub fn endpoints_get(&self, tech: &str, resource: &str) -> AriResult<Value> {
        self.get(&format!("endpoints/{tech}/{resource}"), &Params::new())
    }

    pub fn endpoints_send_message_to_endpoint(&self, tech: &str, resource: &str, params: &Params) -> AriResult<Value> {
        self.put(&format!("endpoints/{tech}/{resource}/sendMessage"), params)
    }
}
