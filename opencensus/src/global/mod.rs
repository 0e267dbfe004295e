//! Process-wide helpers shared by the OpenCensus crates.
//!
//! Currently this only hosts the internal logging macros, see
//! [`oc_debug!`](crate::oc_debug) and [`oc_warn!`](crate::oc_warn).
mod internal_logging;
