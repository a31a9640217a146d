//! JSON API
//!
//! String-in/string-out boundary for engine hosts (Godot, Flutter, web
//! views). Requests carry a `schema_version`; responses are the serialized
//! next state.

pub mod match_json;

pub use match_json::{apply_action_json, new_match_json, DispatchRequest, NewMatchRequest};
