//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `assistant` owns the request/response contract with the remote inference
//! endpoint. Nothing else in the widget talks to the network.

pub mod assistant;
