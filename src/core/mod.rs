//! Core plumbing shared by every stage: slice access macros, errors, logging.

#[macro_use]
#[path = "utils/safety.rs"]
pub mod safety;
pub mod error;
pub mod logging;
