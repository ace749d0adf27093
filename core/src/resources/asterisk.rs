//! `/asterisk` resource: system information and global variables.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    /// Asterisk system information. `only` narrows the sections returned
    /// (comma separated: `build`, `system`, `config`, `status`).
    pub fn asterisk_get_info(&self, params: &Params) -> AriResult<Value> {
        self.get("asterisk/info", params)
    }

    /// Value of a global dialplan variable. Requires `variable`.
    pub fn asterisk_get_global_var(&self, params: &Params) -> AriResult<Value> {
        self.get("asterisk/variable", params)
    }

    /// Set a global dialplan variable. Requires `variable`; `value` is
    /// optional.
    pub fn asterisk_set_global_var(&self, params: &Params) -> AriResult<Value> {
        self.post("asterisk/variable", params)
    }
}
