//! Typed schedule entities assembled from projected XER records.

mod activity;
mod assignment;
mod project;
mod relationship;
mod resource;
mod wbs;

pub use activity::{Activity, ActivityStatus};
pub use assignment::Assignment;
pub use project::Project;
pub use relationship::{Relationship, RelationshipKind};
pub use resource::{Resource, ResourceKind};
pub use wbs::WbsNode;
