use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn mailboxes_list(&self) -> AriResult<Value> {
        self.get("mailboxes", &Params::new())
    }

    pub fn mailboxes_get(&self, mailbox_name: &str) -> AriResult<Value> {
        self.get(&format!("mailboxes/{mailbox_name}"), &Params::new())
    }

    /// Requires `oldMessages` and `newMessages` counts.
    pub fn mailboxes_update(&self, mailbox_name: &str, params: &Params) -> AriResult<Value> {
        self.put(&format!("mailboxes/{mailbox_name}"), params)
    }

    pub fn mailboxes_delete(&self, mailbox_name: &str) -> AriResult<Value> {
        self.delete(&format!("mailboxes/{mailbox_name}"), &Params::new())
    }
}
