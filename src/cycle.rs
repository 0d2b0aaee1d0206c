use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, error, warn};
use rand::Rng;
use tokio::time::sleep;

use crate::animator;
use crate::config::Config;
use crate::random::{between, preseed_state, shuffle};
use crate::surface::{Document, LetterSurface};

/// Per-cycle knobs. `min`/`max` bound how many letters are knocked
/// back to a partial state before the run; both default to the number
/// of eligible letters, so a bare `CycleOptions` resets everything.
/// `on_complete` fires exactly once, after the settle interval.
#[derive(Default)]
pub struct CycleOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub on_complete: Option<Box<dyn FnOnce() + Send>>,
}

impl CycleOptions {
    pub fn bounded(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            on_complete: None,
        }
    }
}

impl fmt::Debug for CycleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleOptions")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// What one cycle actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    /// All child letters of the container, eligible or not
    pub total: usize,
    /// Letters whose animation was launched
    pub animated: usize,
    /// Launched animations that ended in a surface error
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// No container matched the configured selector
    ContainerNotFound(String),
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::ContainerNotFound(selector) => {
                write!(f, "no letter container matches {selector:?}")
            }
        }
    }
}

impl std::error::Error for CycleError {}

/// Run one full decode cycle: resolve the container, knock a random
/// subset of letters back to a partial state, launch every eligible
/// letter's animation on its own random start offset, wait for all of
/// them, settle, then fire `on_complete`.
///
/// A letter whose state write fails does not abort the cycle; the
/// failure is logged and counted in the report, and the barrier still
/// waits for everyone else. Callers must not start a second cycle
/// while one is in flight, or two animations could target the same
/// letter; the loop driver only re-enters after completion.
pub async fn run_cycle<D: Document, R: Rng>(
    document: &D,
    config: &Config,
    options: CycleOptions,
    rng: &mut R,
) -> Result<CycleReport, CycleError> {
    let Some(surface) = document.find_container(&config.selector) else {
        warn!("no letter container matches {:?}", config.selector);
        return Err(CycleError::ContainerNotFound(config.selector.clone()));
    };

    let total = surface.letter_count();
    let eligible_count = (0..total).filter(|&index| surface.is_eligible(index)).count();

    // How many letters to knock back before this run.
    let min = options.min.unwrap_or(eligible_count);
    let max = options.max.unwrap_or(min);
    let count_to_reset = between(min, max, rng);

    // Knock a random subset back to a ragged partial state. Letters
    // outside the subset, and ineligible letters the shuffle happens
    // to pick, stay untouched.
    let mut reset_order: Vec<usize> = (0..total).collect();
    shuffle(&mut reset_order, rng);
    for &index in reset_order.iter().take(count_to_reset) {
        if !surface.is_eligible(index) {
            continue;
        }
        let state = preseed_state(rng);
        if let Err(cause) = surface.set_state(index, state) {
            error!("pre-reset of letter {index} to {state} failed: {cause}");
        }
    }

    // Arm every eligible letter in an independently shuffled order,
    // each with its own random start offset. All timers run together;
    // arming order only decides who draws an offset first.
    let mut launch_order: Vec<usize> = (0..total).collect();
    shuffle(&mut launch_order, rng);
    let mut animations = Vec::new();
    for &index in &launch_order {
        if !surface.is_eligible(index) {
            continue;
        }
        let offset = Duration::from_millis(between(
            config.min_start_delay_ms,
            config.max_start_delay_ms,
            rng,
        ));
        let surface = Arc::clone(&surface);
        let transition_delay = config.transition_delay();
        animations.push(async move {
            sleep(offset).await;
            let outcome = animator::animate(surface.as_ref(), index, transition_delay).await;
            (index, outcome)
        });
    }
    let animated = animations.len();

    // Barrier: the cycle is over only when every letter is done.
    let mut failed = 0;
    for (index, outcome) in join_all(animations).await {
        if let Err(cause) = outcome {
            error!("letter {index} failed to decode: {cause}");
            failed += 1;
        }
    }

    sleep(config.settle_interval()).await;

    debug!("cycle done: {animated} of {total} letters animated, {failed} failed");
    if let Some(on_complete) = options.on_complete {
        on_complete();
    }
    Ok(CycleReport {
        total,
        animated,
        failed,
    })
}
