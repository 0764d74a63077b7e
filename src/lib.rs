//! Heuristic scoring engines for research collaborations between colleges,
//! corporate partners, and students.
//!
//! Every engine is a pure function of its input. The only source of
//! non-determinism is [`quantum::generate_live_pulse_data_now`], which wires the
//! thread RNG and local clock into the injectable [`quantum::generate_live_pulse_data`].

pub mod agreement;
pub mod collaboration;
pub mod model;
pub mod quantum;
