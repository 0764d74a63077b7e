//! Illustrative "quantum readiness" metrics and the cosmetic live pulse feed.

mod pulse;
mod readiness;

pub use pulse::{
    PULSE_MESSAGES, PulseEvent, PulseKind, generate_live_pulse_data, generate_live_pulse_data_now,
};
pub use readiness::{
    DEFAULT_FUNDING_ALLOCATED, DEFAULT_TEAM_SIZE, ProjectProfile, QuantumMetrics, ResolvedProject,
    calculate_quantum_readiness,
};
