//! Standings recompute engine.
//!
//! Plain async functions, invoked by the administrative handlers, that
//! recalculate matchday points and rebuild season standings inside
//! database transactions. See [`recompute`].

pub mod recompute;
