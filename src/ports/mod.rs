/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven ports exist: the CLI calls use cases directly.
pub mod outbound;
