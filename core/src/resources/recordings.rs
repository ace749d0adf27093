//! `/recordings` resource: stored (finished) and live recordings.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn recordings_list_stored(&self) -> AriResult<Value> {
        self.get("recordings/stored", &Params::new())
    }

    pub fn recordings_get_stored(&self, recording_name: &str) -> AriResult<Value> {
        self.get(&format!("recordings/stored/{recording_name}"), &Params::new())
    }

    pub fn recordings_delete_stored(&self, recording_name: &str) -> AriResult<Value> {
        self.delete(&format!("recordings/stored/{recording_name}"), &Params::new())
    }

    /// Requires `destinationRecordingName`.
    pub fn recordings_copy_stored(&self, recording_name: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("recordings/stored/{recording_name}/copy"), params)
    }

    pub fn recordings_get_live(&self, recording_name: &str) -> AriResult<Value> {
        self.get(&format!("recordings/live/{recording_name}"), &Params::new())
    }

    /// Stop and discard a live recording.
    pub fn recordings_cancel(&self, recording_name: &str) -> AriResult<Value> {
        self.delete(&format!("recordings/live/{recording_name}"), &Params::new())
    }

    /// Stop and store a live recording.
    pub fn recordings_stop(&self, recording_name: &str) -> AriResult<Value> {
        self.post(&format!("recordings/live/{recording_name}/stop"), &Params::new())
    }

    pub fn recordings_pause(&self, recording_name: &str) -> AriResult<Value> {
        self.post(&format!("recordings/live/{recording_name}/pause"), &Params::new())
    }

    pub fn recordings_unpause(&self, recording_name: &str) -> AriResult<Value> {
        self.delete(&format!("recordings/live/{recording_name}/pause"), &Params::new())
    }

    pub fn recordings_mute(&self, recording_name: &str) -> AriResult<Value> {
        self.post(&format!("recordings/live/{recording_name}/mute"), &Params::new())
    }

    pub fn recordings_unmute(&self, recording_name: &str) -> AriResult<Value> {
        self.delete(&format!("recordings/live/{recording_name}/mute"), &Params::new())
    }
}
