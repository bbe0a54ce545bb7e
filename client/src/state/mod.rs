//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs with transition methods so it can be tested
//! without a browser; components hold it in `RwSignal`s.

pub mod conversation;
