//! Minimal Office Open XML packaging.
//!
//! Decks and reports are zip containers of XML parts tied together by
//! relationship parts and a content-types manifest. This module writes
//! those containers and reads generated ones back for inspection.

pub mod inspect;
pub mod package;
pub mod rels;
pub mod xml;

pub use package::Package;
pub use rels::Relationships;
