//! Slide deck assembly.
//!
//! Slides are written in input order, one per record. Picture slides embed
//! their screenshot when the file exists and otherwise draw a grey
//! placeholder rectangle carrying the caption.

pub mod builder;
pub mod parts;
pub mod slide;
pub mod style;

pub use builder::{Deck, DeckBuilder};
pub use style::{DeckStyle, PictureFrame};

use crate::error::Result;
use crate::types::SlideSpec;

/// Build a deck from slide records with the given style.
pub fn build_deck(title: &str, slides: Vec<SlideSpec>, style: DeckStyle) -> Result<Deck> {
    DeckBuilder::new(title).with_style(style).with_slides(slides).build()
}
