//! Render functions — pure views over `RosterState` and per-frame view
//! state. The whole frame is redrawn every render tick; nothing diffs.

pub mod detail;
pub mod form;
pub mod modal;
pub mod roster;
