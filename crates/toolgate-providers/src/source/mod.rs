//! Source accessor implementations

pub mod filesystem;

pub use filesystem::FilesystemSource;
