//! Wire contracts shared between the admin console and the uniform backend.
//!
//! Everything here is plain data plus pure logic (validation, derived values,
//! list envelope decoding), so it builds and tests natively without a browser.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
