#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
mod heading;
mod normalize;
mod slugger;

// Exports for end-users
pub use heading::strip_heading_marker;
pub use normalize::slugify;
pub use slugger::Slugger;
