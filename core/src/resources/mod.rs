//! One method per ARI endpoint, grouped by upstream resource.
//!
//! Every method is a thin wrapper over `AriClient::{get, post, put,
//! delete}`: the verb and the path template are the whole contract.
//! Identifiers are substituted into the path as given, so callers must
//! percent-encode anything that is not path-safe.

mod applications;
mod asterisk;
mod bridges;
mod channels;
mod device_states;
mod endpoints;
mod events;
mod mailboxes;
mod playbacks;
mod recordings;
mod sounds;
