//! `/channels` resource.
//!
//! Originate requests take a `variables` parameter holding a map of channel
//! variables; pass it as a `ParamValue::Map` and it is sent as JSON text.

use serde_json::Value;

use crate::client::AriClient;
use crate::error::AriResult;
use crate::http::Transport;
use crate::params::Params;

impl<T: Transport> AriClient<T> {
    pub fn channels_list(&self) -> AriResult<Value> {
        self.get("channels", &Params::new())
    }

    /// Originate a channel. Requires `endpoint`; commonly also `extension`,
    /// `context`, `priority` or `app`, `appArgs`, `callerId`, `timeout`,
    /// `channelId`, `otherChannelId` and `variables`.
    pub fn channels_originate(&self, params: &Params) -> AriResult<Value> {
        self.post("channels", params)
    }

    pub fn channels_get(&self, channel_id: &str) -> AriResult<Value> {
        self.get(&format!("channels/{channel_id}"), &Params::new())
    }

    /// Originate with a caller-chosen channel id.
    pub fn channels_originate_with_id(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}"), params)
    }

    /// Hang up. Accepts `reason`.
    pub fn channels_hangup(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}"), params)
    }

    /// Leave Stasis and continue in the dialplan at `context`, `extension`,
    /// `priority`.
    pub fn channels_continue_in_dialplan(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/continue"), params)
    }

    pub fn channels_answer(&self, channel_id: &str) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/answer"), &Params::new())
    }

    /// Indicate ringing.
    pub fn channels_ring(&self, channel_id: &str) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/ring"), &Params::new())
    }

    pub fn channels_ring_stop(&self, channel_id: &str) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}/ring"), &Params::new())
    }

    /// Send `dtmf` digits, with optional `before`, `between`, `duration`
    /// and `after` timings in milliseconds.
    pub fn channels_send_dtmf(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/dtmf"), params)
    }

    /// Mute. `direction` is `both`, `in` or `out`.
    pub fn channels_mute(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/mute"), params)
    }

    pub fn channels_unmute(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}/mute"), params)
    }

    pub fn channels_hold(&self, channel_id: &str) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/hold"), &Params::new())
    }

    pub fn channels_unhold(&self, channel_id: &str) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}/hold"), &Params::new())
    }

    /// Play music on hold. Accepts `mohClass`.
    pub fn channels_start_moh(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/moh"), params)
    }

    pub fn channels_stop_moh(&self, channel_id: &str) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}/moh"), &Params::new())
    }

    pub fn channels_start_silence(&self, channel_id: &str) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/silence"), &Params::new())
    }

    pub fn channels_stop_silence(&self, channel_id: &str) -> AriResult<Value> {
        self.delete(&format!("channels/{channel_id}/silence"), &Params::new())
    }

    /// Start playback. Requires `media` (e.g. `sound:tt-monkeys`).
    pub fn channels_play(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/play"), params)
    }

    pub fn channels_play_with_id(&self, channel_id: &str, playback_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/play/{playback_id}"), params)
    }

    /// Start a live recording. Requires `name` and `format`.
    pub fn channels_record(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/record"), params)
    }

    /// Requires `variable`.
    pub fn channels_get_channel_var(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.get(&format!("channels/{channel_id}/variable"), params)
    }

    /// Requires `variable`; `value` is optional.
    pub fn channels_set_channel_var(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/variable"), params)
    }

    /// Spy on or whisper to a channel. Requires `app`.
    pub fn channels_snoop_channel(&self, channel_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/snoop"), params)
    }

    pub fn channels_snoop_channel_with_id(&self, channel_id: &str, snoop_id: &str, params: &Params) -> AriResult<Value> {
        self.post(&format!("channels/{channel_id}/snoop/{snoop_id}"), params)
    }
}
