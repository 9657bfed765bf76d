//! Interchange formats of the FSAPT analysis service.
//!
//! The [`api`] module models the request bodies and response envelopes of the
//! service; [`payload`] models the per-atom analysis result that the classifier
//! consumes.

pub mod api;
pub mod payload;
