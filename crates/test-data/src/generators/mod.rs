//! Entity generators for the research schema.
//!
//! - [`LocationGenerator`]: numbered locations with round-robin countries
//! - [`ExpeditionGenerator`]: expeditions at uniformly drawn locations
//! - [`MemberGenerator`]: numbered members with derived credentials
//! - [`LinkGenerator`]: expedition-member join rows

pub mod expedition;
pub mod link;
pub mod location;
pub mod member;

pub use expedition::{ExpeditionGenerator, GeneratedExpedition};
pub use link::{GeneratedLink, LINKS_PER_EXPEDITION, LinkGenerator};
pub use location::{GeneratedLocation, LocationGenerator};
pub use member::{GeneratedMember, MemberGenerator};
