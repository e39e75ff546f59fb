//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (analytics, page
//! scripts, visibility tracking) and text rendering from component logic so
//! they can be tested natively.

pub mod analytics;
pub mod markup;
pub mod page;
pub mod scripts;
pub mod section_observer;
pub mod style;
