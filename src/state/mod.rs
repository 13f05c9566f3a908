//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages depend on small focused models; the
//! sign-up form model lives in `form`.

pub mod form;
