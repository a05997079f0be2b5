//! Line-oriented config parsing
//!
//! raw line → [`comment`] → [`line`] → [`assignment`] → [`coerce`] + [`state`],
//! all driven by [`driver::Parser`].

pub mod assignment;
pub mod coerce;
pub mod comment;
pub mod driver;
pub mod line;
pub mod state;

pub use driver::Parser;
pub use state::OverrideTag;
