//! `/events` resource. Only user events are bound; the event WebSocket is
//! not part of this client.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    /// Raise a user event. Requires `application`; `source` and
    /// `variables` are optional.
    pub fn events_user_event(&self, event_name: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("events/user/{event_name}"), params)
    }
}
