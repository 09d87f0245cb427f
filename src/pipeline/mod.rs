//! Series pipeline abstractions
//!
//! This module provides:
//! - Agent adapters (engine difficulty levels, random baseline)
//! - A series runner that plays many games between two agents
//! - Observers recording progress, metrics and game logs

pub mod agents;
pub mod observers;
pub mod series;

pub use agents::{AgentKind, EngineAgent, RandomAgent};
pub use observers::{
    GameObservation, JsonlObserver, MetricsObserver, MetricsSummary, ProgressObserver,
    StepObservation,
};
pub use series::{Series, SeriesConfig, SeriesResult};

pub use crate::ports::{Agent, Observer};
