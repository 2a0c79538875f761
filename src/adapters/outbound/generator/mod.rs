/// SBOM generator adapters
mod cdxgen;

pub use cdxgen::{CdxgenGenerator, DEFAULT_CDXGEN_BIN};
