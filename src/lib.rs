pub mod animator;
pub mod config;
pub mod cycle;
pub mod driver;
pub mod memory;
pub mod random;
pub mod surface;

pub use config::Config;
pub use cycle::{run_cycle, CycleError, CycleOptions, CycleReport};
pub use driver::DecodeLoop;
pub use surface::{Document, LetterState, LetterSurface, SurfaceError};
