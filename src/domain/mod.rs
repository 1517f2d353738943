//! Domain layer: entities, value objects, and pure logic.

pub mod foundation;
pub mod taste;
pub mod user;
