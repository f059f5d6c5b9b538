//! Generator contract and the archetype dispatcher
//!
//! A [`Generator`] turns one template set into files under a target directory.
//! [`ProjectGenerator`] owns a [`GeneratorRegistry`], runs the pre-flight check
//! and hands the work to the generator registered for the requested archetype.

use crate::emitter;
use crate::error::{Result, ScaffoldError};
use crate::project::{Archetype, Language, ProjectDescriptor};
use crate::templates::{self, BuildFileTree};
use crate::tree::FileTree;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Summary of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    /// Project root that was created
    pub path: PathBuf,
    pub directories: Vec<String>,
    /// Relative paths of the written files, in write order
    pub files: Vec<String>,
}

/// Builds one archetype's tree and writes it out
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    build: BuildFileTree,
}

impl Generator {
    pub fn new(build: BuildFileTree) -> Self {
        Self { build }
    }

    pub fn for_archetype(archetype: Archetype) -> Self {
        Self::new(templates::template_set(archetype))
    }

    pub fn build_file_tree(&self, project_name: &str, language: Language) -> FileTree {
        (self.build)(project_name, language)
    }

    /// Build the tree, then emit it under `target_dir`
    ///
    /// Not transactional: if writing fails halfway, what was written stays on disk.
    pub async fn generate(
        &self,
        target_dir: &Path,
        project_name: &str,
        language: Language,
    ) -> Result<GeneratedProject> {
        let tree = self.build_file_tree(project_name, language);
        let files = emitter::emit(target_dir, &tree).await?;

        tracing::info!(
            path = %target_dir.display(),
            directories = tree.directories.len(),
            files = files.len(),
            "generated project"
        );

        Ok(GeneratedProject {
            path: target_dir.to_path_buf(),
            directories: tree.directories,
            files,
        })
    }
}

/// Archetype id to generator mapping
#[derive(Debug, Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Generator>,
}

impl GeneratorRegistry {
    /// Empty registry, mostly useful for tests and embedding
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in archetype under its canonical id
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for archetype in Archetype::ALL {
            registry.register(archetype.id(), Generator::for_archetype(archetype));
        }
        registry
    }

    /// Register (or replace) the generator for `id`
    pub fn register(&mut self, id: impl Into<String>, generator: Generator) -> &mut Self {
        self.generators.insert(id.into(), generator);
        self
    }

    /// Look up by canonical id first, then by any alias the archetype parser accepts
    pub fn get(&self, id: &str) -> Option<&Generator> {
        self.generators.get(id).or_else(|| {
            id.parse::<Archetype>()
                .ok()
                .and_then(|archetype| self.generators.get(archetype.id()))
        })
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

/// Dispatcher that places new projects under a base directory
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    base_dir: PathBuf,
    registry: GeneratorRegistry,
}

impl ProjectGenerator {
    /// Dispatcher rooted at the process working directory
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ScaffoldError::fs("read current directory", ".", e))?;
        Ok(Self::with_base_dir(cwd))
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            registry: GeneratorRegistry::with_builtin(),
        }
    }

    pub fn with_registry(mut self, registry: GeneratorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn target_dir(&self, project_name: &str) -> PathBuf {
        self.base_dir.join(project_name)
    }

    /// Create `project_name` under the base directory using the `archetype_id` generator
    ///
    /// Fails with [`ScaffoldError::DirectoryAlreadyExists`] before touching the
    /// filesystem when anything already sits at the target path. `project_name`
    /// is joined as-is; validate it with [`crate::ProjectName`] beforehand.
    pub async fn generate_project(
        &self,
        project_name: &str,
        archetype_id: &str,
        language: Language,
    ) -> Result<GeneratedProject> {
        let target_dir = self.target_dir(project_name);

        // symlink_metadata so a dangling link also counts as taken
        match fs::symlink_metadata(&target_dir).await {
            Ok(_) => {
                return Err(ScaffoldError::DirectoryAlreadyExists {
                    name: project_name.to_string(),
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ScaffoldError::fs("inspect", &target_dir, e)),
        }

        create_target_dir(&target_dir, project_name).await?;

        let Some(generator) = self.registry.get(archetype_id) else {
            // Target is still empty here; remove_dir refuses anything else
            if let Err(e) = fs::remove_dir(&target_dir).await {
                tracing::warn!(
                    path = %target_dir.display(),
                    error = %e,
                    "could not remove target directory after unknown project type"
                );
            } else {
                tracing::warn!(
                    path = %target_dir.display(),
                    archetype = archetype_id,
                    "removed empty target directory after unknown project type"
                );
            }
            return Err(ScaffoldError::UnknownArchetype {
                id: archetype_id.to_string(),
            });
        };

        generator.generate(&target_dir, project_name, language).await
    }

    /// Typed entry used once the caller has resolved a full descriptor
    pub async fn generate(&self, descriptor: &ProjectDescriptor) -> Result<GeneratedProject> {
        self.generate_project(
            descriptor.name.as_str(),
            descriptor.archetype.id(),
            descriptor.language,
        )
        .await
    }
}

/// Create the project root itself, refusing one that appeared after the pre-flight check
async fn create_target_dir(target_dir: &Path, project_name: &str) -> Result<()> {
    match fs::create_dir(target_dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(ScaffoldError::DirectoryAlreadyExists {
                name: project_name.to_string(),
            })
        }
        Err(e) => Err(ScaffoldError::fs("create directory", target_dir, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectName;
    use tempfile::TempDir;

    fn tiny_tree(project_name: &str, language: Language) -> FileTree {
        let mut tree = FileTree::new();
        tree.dir("src")
            .file(format!("src/main.{}", language.extension()), project_name);
        tree
    }

    #[test]
    fn test_builtin_registry_covers_every_archetype() {
        let registry = GeneratorRegistry::with_builtin();
        assert_eq!(registry.ids().len(), Archetype::ALL.len());
        for archetype in Archetype::ALL {
            assert!(registry.get(archetype.id()).is_some(), "{archetype}");
        }
    }

    #[test]
    fn test_registry_resolves_aliases() {
        let registry = GeneratorRegistry::with_builtin();
        assert!(registry.get("http-framework").is_some());
        assert!(registry.get("no-such-type").is_none());
    }

    #[test]
    fn test_register_custom_generator() {
        let mut registry = GeneratorRegistry::new();
        registry.register("tiny", Generator::new(tiny_tree));
        assert_eq!(registry.ids(), vec!["tiny"]);
        let tree = registry.get("tiny").unwrap().build_file_tree("x", Language::TypeScript);
        assert!(tree.contains_file("src/main.ts"));
    }

    #[tokio::test]
    async fn test_generate_project_creates_tree() {
        let tmp = TempDir::new().unwrap();
        let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

        let report = dispatcher
            .generate_project("demo-app", "nodejs", Language::JavaScript)
            .await
            .unwrap();

        assert_eq!(report.path, tmp.path().join("demo-app"));
        assert!(report.files.contains(&"package.json".to_string()));
        assert!(tmp.path().join("demo-app/src/index.js").is_file());
    }

    #[tokio::test]
    async fn test_existing_file_blocks_generation() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("taken"), "x").unwrap();
        let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

        let err = dispatcher
            .generate_project("taken", "nodejs", Language::JavaScript)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryAlreadyExists { ref name } if name == "taken"));
        assert_eq!(std::fs::read_to_string(tmp.path().join("taken")).unwrap(), "x");
    }

    #[tokio::test]
    async fn test_create_target_dir_refuses_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("raced");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "mine").unwrap();

        let err = create_target_dir(&target, "raced").await.unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryAlreadyExists { ref name } if name == "raced"));
        assert_eq!(std::fs::read_to_string(target.join("keep.txt")).unwrap(), "mine");
    }

    #[tokio::test]
    async fn test_create_target_dir_needs_existing_base() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("missing/child");

        let err = create_target_dir(&target, "child").await.unwrap_err();

        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
        assert!(!tmp.path().join("missing").exists());
    }

    #[tokio::test]
    async fn test_unknown_archetype_leaves_nothing_behind() {
        let tmp = TempDir::new().unwrap();
        let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

        let err = dispatcher
            .generate_project("x", "no-such-type", Language::JavaScript)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unknown project type: no-such-type");
        assert!(!tmp.path().join("x").exists());
    }

    #[tokio::test]
    async fn test_custom_registry_is_used() {
        let tmp = TempDir::new().unwrap();
        let mut registry = GeneratorRegistry::new();
        registry.register("tiny", Generator::new(tiny_tree));
        let dispatcher = ProjectGenerator::with_base_dir(tmp.path()).with_registry(registry);

        dispatcher
            .generate_project("t", "tiny", Language::JavaScript)
            .await
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("t/src/main.js")).unwrap(),
            "t"
        );

        let err = dispatcher
            .generate_project("n", "nodejs", Language::JavaScript)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownArchetype { .. }));
    }

    #[tokio::test]
    async fn test_generate_from_descriptor_forces_typed_for_nest() {
        let tmp = TempDir::new().unwrap();
        let dispatcher = ProjectGenerator::with_base_dir(tmp.path());
        let descriptor = ProjectDescriptor::new(
            ProjectName::parse("api").unwrap(),
            Archetype::Nest,
            Language::JavaScript,
        );

        let report = dispatcher.generate(&descriptor).await.unwrap();

        assert!(report.files.iter().any(|f| f == "src/main.ts"));
        assert!(!report.files.iter().any(|f| f.ends_with(".js") && f.starts_with("src/")));
    }
}
