use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::cycle::{run_cycle, CycleError, CycleOptions};
use crate::surface::Document;

/// Steady-state bounds: after the opening full reset, each cycle
/// knocks back between one and seven letters.
const STEADY_MIN: usize = 1;
const STEADY_MAX: usize = 7;

/// Re-runs the decode cycle indefinitely, starting the next cycle only
/// once the previous one has fully settled. An explicit loop rather
/// than completion-callback recursion, so it can actually be stopped:
/// raise the stop flag or pass a cycle limit. In-flight cycles always
/// run to completion.
pub struct DecodeLoop<D: Document> {
    document: D,
    config: Config,
    rng: ChaCha8Rng,
    stop: Arc<AtomicBool>,
}

impl<D: Document> DecodeLoop<D> {
    pub fn new(document: D, config: Config) -> Self {
        Self::with_rng(document, config, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Reproducible runs for tests and demos.
    pub fn with_seed(document: D, config: Config, seed: u64) -> Self {
        Self::with_rng(document, config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(document: D, config: Config, rng: ChaCha8Rng) -> Self {
        Self {
            document,
            config,
            rng,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that ends the loop before the next cycle starts.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run cycles until the stop flag is raised or `limit` cycles have
    /// settled; `None` loops forever. The first cycle resets every
    /// eligible letter, later ones use the steady-state bounds. A
    /// missing container ends the loop with the error instead of
    /// silently breaking the chain. Returns how many cycles settled.
    pub async fn run(&mut self, limit: Option<usize>) -> Result<usize, CycleError> {
        let mut completed = 0;
        loop {
            if self.stop.load(Ordering::SeqCst) {
                debug!("decode loop stopped after {completed} cycles");
                break;
            }
            if limit.is_some_and(|limit| completed >= limit) {
                break;
            }
            let options = if completed == 0 {
                CycleOptions::default()
            } else {
                CycleOptions::bounded(STEADY_MIN, STEADY_MAX)
            };
            let report = run_cycle(&self.document, &self.config, options, &mut self.rng).await?;
            debug!("cycle {completed} settled: {report:?}");
            completed += 1;
        }
        Ok(completed)
    }
}
