//! jsgen core - JavaScript/TypeScript project skeleton generation
//!
//! This library turns a project name, a project type (archetype) and a language
//! variant into a directory of boilerplate files. The `js-project-generator`
//! binary is a thin shell over it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - [`FileTree`] values built by pure per-archetype
//!   template sets, and the [`emitter`] that writes them to disk
//! - **Layer 2: Dispatch** - [`Generator`], [`GeneratorRegistry`] and the
//!   [`ProjectGenerator`] dispatcher with its pre-flight existence check
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use jsgen_core::{Language, ProjectGenerator};
//!
//! let dispatcher = ProjectGenerator::new()?;
//! let report = dispatcher
//!     .generate_project("demo-app", "express", Language::TypeScript)
//!     .await?;
//! println!("wrote {} files", report.files.len());
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod project;
pub mod templates;
pub mod tree;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldDefaults;
pub use error::{Result, ScaffoldError};
pub use generator::{GeneratedProject, Generator, GeneratorRegistry, ProjectGenerator};
pub use manifest::PackageManifest;
pub use project::{Archetype, Language, ProjectDescriptor, ProjectName};
pub use tree::FileTree;

#[cfg(feature = "tui")]
pub use tui::run;
