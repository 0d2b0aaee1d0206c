use std::fmt;
use std::sync::Arc;
use strum::Display;

/// Visual phase of one letter. A letter only ever moves forward
/// through `State1 -> State2 -> State3` while it animates; `Idle`,
/// `State1` and `State2` (never `State3`) may also be forced onto it
/// as pre-seeding when a new cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LetterState {
    Idle,
    State1,
    State2,
    State3,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The letter index does not exist in the container
    LetterOutOfRange { index: usize, count: usize },
    /// The surface refused the state write
    WriteRefused { index: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::LetterOutOfRange { index, count } => {
                write!(f, "letter {index} out of range (container has {count})")
            }
            SurfaceError::WriteRefused { index } => {
                write!(f, "state write refused for letter {index}")
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// One container of animatable letters, owned by the document layer.
/// The engine never creates or destroys letters; it only queries them
/// and writes their state. Writes take effect immediately. Interior
/// mutability is the implementor's concern, which keeps `&self`
/// surfaces usable from many concurrently polled animation futures.
pub trait LetterSurface {
    fn letter_count(&self) -> usize;

    /// Whether this letter carries the animation-trigger marker.
    fn is_eligible(&self, index: usize) -> bool;

    fn state(&self, index: usize) -> Option<LetterState>;

    fn set_state(&self, index: usize, state: LetterState) -> Result<(), SurfaceError>;
}

/// The document layer: resolves a letter container by selector.
pub trait Document {
    type Surface: LetterSurface;

    fn find_container(&self, selector: &str) -> Option<Arc<Self::Surface>>;
}
