//! Flutter-facing bindings for the WorkTrack core.

pub mod api;
