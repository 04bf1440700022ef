use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{VitalityError, VitalityResult};
use crate::scene::model::{DeckDef, SlideDef};
use crate::scene::validate::validate_deck;

/// Deck boundary object.
///
/// Wraps the JSON-facing [`DeckDef`] and answers the lookups navigation needs. A deck is
/// immutable once loaded.
#[derive(Debug, Clone)]
pub struct Deck {
    def: DeckDef,
}

impl Deck {
    /// Wrap an already-built deck description. Call [`Deck::validate`] before presenting it.
    pub fn from_def(def: DeckDef) -> Self {
        Self { def }
    }

    /// Parse a deck from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> VitalityResult<Self> {
        let def: DeckDef = serde_json::from_reader(r)
            .map_err(|e| VitalityError::serde(format!("parse deck JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a deck from a JSON string.
    pub fn from_json_str(s: &str) -> VitalityResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a deck from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VitalityResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VitalityError::validation(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the deck.
    pub fn validate(&self) -> VitalityResult<()> {
        validate_deck(&self.def)
    }

    /// Borrow the underlying description.
    pub fn def(&self) -> &DeckDef {
        &self.def
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.def.slides.len()
    }

    /// Index of the last slide.
    pub fn last_index(&self) -> usize {
        self.def.slides.len().saturating_sub(1)
    }

    /// Slide at `idx`, if in range.
    pub fn slide(&self, idx: usize) -> Option<&SlideDef> {
        self.def.slides.get(idx)
    }

    /// Resolve a named jump target through `slide_ids`.
    pub fn resolve_name(&self, name: &str) -> Option<usize> {
        self.def
            .slide_ids
            .get(name)
            .copied()
            .filter(|&idx| idx < self.def.slides.len())
    }

    /// Design size as a geometry value.
    pub fn size(&self) -> kurbo::Size {
        kurbo::Size::new(self.def.size.width, self.def.size.height)
    }
}
