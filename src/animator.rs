use std::time::Duration;

use tokio::time::sleep;

use crate::surface::LetterState::{State1, State2, State3};
use crate::surface::{LetterSurface, SurfaceError};

/// Walk one letter forward through the three decode states, pausing
/// `transition_delay` between writes. Each write is visible on the
/// surface the moment it happens, not batched. The caller is
/// responsible for only passing eligible letters. A failed write ends
/// this one animation with the error; there is no retry.
pub async fn animate<S: LetterSurface + ?Sized>(
    surface: &S,
    index: usize,
    transition_delay: Duration,
) -> Result<(), SurfaceError> {
    surface.set_state(index, State1)?;
    sleep(transition_delay).await;
    surface.set_state(index, State2)?;
    sleep(transition_delay).await;
    surface.set_state(index, State3)?;
    Ok(())
}
