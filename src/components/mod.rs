//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome for the account pages; pages own the
//! state and pass values and callbacks down as props.

pub mod field_input;
pub mod navbar;
