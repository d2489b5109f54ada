//! # Cover Resolution Module
//!
//! Finds album artwork in two steps:
//!
//! ```text
//! artist + album
//!      ↓
//! MusicBrainz release search  ──(error)──→ LookupFailed
//!      ↓ (0 releases)         ──────────→ NoReleases
//! N release ids
//!      ↓
//! N concurrent Cover Art Archive probes
//!      ↓ first hit              ────────→ CoverFound(url)
//!      ↓ all 404 / failed       ────────→ NoCoverAvailable
//! ```
//!
//! ## Submodules
//!
//! - [`musicbrainz`] - release search (requires a User-Agent on every request)
//! - [`archive`] - front-cover existence probe
//! - [`resolver`] - [`CoverResolver`], the fan-out race over all candidates
//!
//! ## Probe semantics
//!
//! A 404 from the archive is an expected outcome and is not logged. Any other
//! non-success status, transport error or timeout is logged as a warning and then
//! treated exactly like a 404: it never aborts the sibling probes.

pub mod archive;
pub mod musicbrainz;
pub mod resolver;

pub use resolver::CoverResolver;
