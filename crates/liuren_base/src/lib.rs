//! Symbolic core of the Da Liu Ren (大六壬) chart.
//!
//! This crate provides:
//! - Stems, branches, elements and the 60-term pillar cycle
//! - The twelve spirits and their placement around the branch ring
//! - The four lessons and the three-transmission decision chain
//!
//! Everything here is a pure function of its arguments over fixed tables.

pub mod branch;
pub mod element;
pub mod error;
pub mod lesson;
pub mod pillar;
pub mod placement;
pub mod spirit;
pub mod stem;
pub mod transmission;

pub use branch::{ALL_BRANCHES, Branch, Direction, Season};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::{LiurenError, SymbolKind};
pub use lesson::{FourLessons, Lesson, build_lessons};
pub use pillar::{Pillar, all_pillars};
pub use placement::{
    DaylightWindow, SpiritDirection, SpiritPlacement, is_daytime, noble_branch, noble_branches,
    place_spirits, place_spirits_from,
};
pub use spirit::{ALL_SPIRITS, Nature, REVERSE_SPIRITS, Spirit};
pub use stem::{ALL_STEMS, Stem};
pub use transmission::{
    Classification, Stage, ThreeTransmissions, Transmission, TransmissionMethod, classify,
    select_transmissions,
};
