/// Dependency discovery domain - pure logic for Swift package pins
///
/// Nothing in this module touches the filesystem or spawns processes;
/// those concerns live behind the outbound ports.
pub mod domain;
pub mod services;
