extern crate self as warpsigns_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod messages;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{DisplayRecord, SignDisplay, SignReading, SignState, WarpEntry};

pub use error::DomainError;

// Re-export ID types
pub use ids::{OwnerId, WorldId};

pub use messages::{message_keys, Message};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{ArrivalPose, BlockFace, Environment, MaterialId, WarpPoint};
