//! Interactive tutor for regex, grep, awk and sed.
//!
//! Lessons are static text. Practice commands are built from fixed templates
//! and run through [`gate::CommandGate`], the only place a string becomes an
//! OS process. The gate applies a crude complexity filter (length, `;`, `|`)
//! and a wall-clock timeout. It is not a sandbox.

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod gate;
pub mod lessons;
pub mod playground;
pub mod prompt;
pub mod search;
