use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use collabsync::quantum::{PulseEvent, generate_live_pulse_data, generate_live_pulse_data_now};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::cli::PulseArgs;

pub fn run(args: PulseArgs) -> Result<()> {
    if args.count == 0 {
        warn!("pulse count is zero; nothing to emit");
        return Ok(());
    }

    let events = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count)
                .map(|_| generate_live_pulse_data(&mut rng, Local::now().time()))
                .collect::<Vec<PulseEvent>>()
        }
        None => (0..args.count)
            .map(|_| generate_live_pulse_data_now())
            .collect::<Vec<PulseEvent>>(),
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    for event in &events {
        let line = serde_json::to_string(event).context("failed to serialize pulse event")?;
        writeln!(output, "{line}")?;
    }
    output.flush()?;

    info!(
        count = events.len(),
        seeded = args.seed.is_some(),
        "emitted pulse events"
    );
    Ok(())
}
