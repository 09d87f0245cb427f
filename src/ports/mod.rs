//! Ports (trait boundaries) for pluggable strategies and sinks.
//!
//! The series pipeline depends only on these traits; agents and observers are
//! the adapters that implement them.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
