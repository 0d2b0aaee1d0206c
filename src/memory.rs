use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::Config;
use crate::surface::{Document, LetterState, LetterSurface, SurfaceError};

/// One letter as the document layer holds it: a glyph plus the class
/// list the engine writes into.
#[derive(Debug, Clone)]
struct Letter {
    glyph: char,
    classes: Vec<String>,
}

/// In-memory model of the markup the original effect runs against.
/// Eligibility is the presence of the trigger class on a letter, and a
/// state write swaps the configured state class names, so the engine
/// exercises exactly the interface a real document adapter would see.
pub struct MemorySurface {
    trigger_class: String,
    state_classes: [String; 3],
    letters: Mutex<Vec<Letter>>,
}

impl MemorySurface {
    /// Build a line of letters from `text`. Every non-whitespace
    /// character gets the trigger class; whitespace stays in the line
    /// but never animates.
    pub fn from_text(text: &str, config: &Config) -> Arc<Self> {
        let letters = text
            .chars()
            .map(|glyph| Letter {
                glyph,
                classes: if glyph.is_whitespace() {
                    Vec::new()
                } else {
                    vec![config.trigger_class.clone()]
                },
            })
            .collect();
        Arc::new(Self {
            trigger_class: config.trigger_class.clone(),
            state_classes: config.state_classes.clone(),
            letters: Mutex::new(letters),
        })
    }

    fn letters(&self) -> MutexGuard<'_, Vec<Letter>> {
        self.letters.lock().expect("letter list poisoned")
    }

    /// Add or strip the trigger class on one letter, taking it in or
    /// out of the animation without removing it from the line.
    pub fn set_eligible(&self, index: usize, eligible: bool) {
        let mut letters = self.letters();
        let Some(letter) = letters.get_mut(index) else {
            return;
        };
        letter.classes.retain(|class| *class != self.trigger_class);
        if eligible {
            letter.classes.push(self.trigger_class.clone());
        }
    }

    fn class_for(&self, state: LetterState) -> Option<&str> {
        match state {
            LetterState::Idle => None,
            LetterState::State1 => Some(&self.state_classes[0]),
            LetterState::State2 => Some(&self.state_classes[1]),
            LetterState::State3 => Some(&self.state_classes[2]),
        }
    }

    fn state_of(&self, letter: &Letter) -> LetterState {
        for (slot, class) in self.state_classes.iter().enumerate() {
            if letter.classes.contains(class) {
                return match slot {
                    0 => LetterState::State1,
                    1 => LetterState::State2,
                    _ => LetterState::State3,
                };
            }
        }
        LetterState::Idle
    }

    /// The line as currently decoded: finished and ineligible letters
    /// show their real glyph, letters still in flight show the ramp.
    pub fn render_line(&self) -> String {
        let letters = self.letters();
        letters
            .iter()
            .map(|letter| {
                if !letter.classes.contains(&self.trigger_class) {
                    return letter.glyph;
                }
                match self.state_of(letter) {
                    LetterState::Idle => ' ',
                    LetterState::State1 => '░',
                    LetterState::State2 => '▒',
                    LetterState::State3 => letter.glyph,
                }
            })
            .collect()
    }
}

impl LetterSurface for MemorySurface {
    fn letter_count(&self) -> usize {
        self.letters().len()
    }

    fn is_eligible(&self, index: usize) -> bool {
        self.letters()
            .get(index)
            .is_some_and(|letter| letter.classes.contains(&self.trigger_class))
    }

    fn state(&self, index: usize) -> Option<LetterState> {
        let letters = self.letters();
        letters.get(index).map(|letter| self.state_of(letter))
    }

    fn set_state(&self, index: usize, state: LetterState) -> Result<(), SurfaceError> {
        let mut letters = self.letters();
        let count = letters.len();
        let letter = letters
            .get_mut(index)
            .ok_or(SurfaceError::LetterOutOfRange { index, count })?;
        let state_classes = &self.state_classes;
        letter
            .classes
            .retain(|class| !state_classes.contains(class));
        if let Some(class) = self.class_for(state) {
            letter.classes.push(class.to_string());
        }
        Ok(())
    }
}

/// Document layer with selector lookup, the shape a DOM adapter would
/// have. Holds any number of containers; the orchestrator asks for one
/// by selector and may find nothing.
#[derive(Default)]
pub struct MemoryDocument {
    containers: Vec<(String, Arc<MemorySurface>)>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: impl Into<String>, surface: Arc<MemorySurface>) {
        self.containers.push((selector.into(), surface));
    }
}

impl Document for MemoryDocument {
    type Surface = MemorySurface;

    fn find_container(&self, selector: &str) -> Option<Arc<MemorySurface>> {
        self.containers
            .iter()
            .find(|(known, _)| known == selector)
            .map(|(_, surface)| Arc::clone(surface))
    }
}
