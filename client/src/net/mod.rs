//! Outbound network layer for the assistant endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST to the remote completion endpoint, and
//! `types` defines the wire schema plus the reply extractor. This is the
//! only wire contact the site makes; everything else is static markup.

pub mod api;
pub mod types;
