//! Content API client and GROQ query definitions.

mod queries;
mod sanity;

pub use queries::*;
pub use sanity::*;
