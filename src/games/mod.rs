//! Game-state engines.
//!
//! Each game is an independent leaf module: an owned state value plus
//! validation and terminal-detection rules. The engines perform no I/O and
//! hold no global state; the console front end owns each session's state
//! and calls in with one move at a time.

pub mod fourinarow;
pub mod hanoi;
