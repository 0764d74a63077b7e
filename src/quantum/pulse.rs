use chrono::{Local, NaiveTime};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const PULSE_MESSAGES: [&str; 6] = [
    "New research match found between a partner college and an industry lab",
    "Post-quantum key rotation completed across collaboration nodes",
    "Milestone verification received from a corporate partner",
    "Anomalous access pattern detected on a shared dataset",
    "Student cohort onboarded to an active research project",
    "Entanglement sync refreshed for cross-institution workspaces",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PulseKind {
    System,
    Alert,
    Match,
    Quantum,
}

impl PulseKind {
    pub const ALL: [PulseKind; 4] = [Self::System, Self::Alert, Self::Match, Self::Quantum];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Alert => "alert",
            Self::Match => "match",
            Self::Quantum => "quantum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseEvent {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: PulseKind,
    /// 24-hour `HH:MM:SS.mmm`.
    pub timestamp: String,
}

/// Picks a message and type uniformly from `rng` and stamps the event with `now`.
///
/// Output is cosmetic and only reproducible when the caller supplies a seeded
/// RNG and a fixed clock.
pub fn generate_live_pulse_data<R: Rng + ?Sized>(rng: &mut R, now: NaiveTime) -> PulseEvent {
    let message = PULSE_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(PULSE_MESSAGES[0]);
    let kind = PulseKind::ALL
        .choose(rng)
        .copied()
        .unwrap_or(PulseKind::System);

    PulseEvent {
        message: message.to_string(),
        kind,
        timestamp: now.format("%H:%M:%S%.3f").to_string(),
    }
}

pub fn generate_live_pulse_data_now() -> PulseEvent {
    generate_live_pulse_data(&mut rand::thread_rng(), Local::now().time())
}
