/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with git, cdxgen, Dependency-Track,
/// the local file system and the console.
pub mod outbound;
