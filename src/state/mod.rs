//! Widget state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure, browser-free state: the capped conversation store, the support
//! draft, and the `ChatSession` transition layer that returns `Effect`s for
//! the component runtime to apply.

pub mod conversation;
pub mod effect;
pub mod session;
pub mod support;
