//! npm/pnpm/yarn ecosystem support

pub mod parser;
pub mod workspace;

pub use parser::read_manifest;
pub use workspace::NpmWorkspace;
