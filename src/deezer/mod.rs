//! # Deezer Module
//!
//! Album search against the Deezer public API. Used for two things:
//!
//! - the explicit-content flag shown on album cards ([`album::explicit_flag`])
//! - the relay endpoint of the local server, which forwards browser searches
//!   verbatim because Deezer blocks cross-origin calls ([`album::search`])
//!
//! The explicit flag is an optional enrichment. Its failure never affects cover
//! resolution.

pub mod album;
