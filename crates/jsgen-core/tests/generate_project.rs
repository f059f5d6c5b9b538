//! End-to-end generation into temporary directories

use jsgen_core::{Archetype, Language, ProjectGenerator, ScaffoldError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Every file under `root`, relative path to content
fn snapshot(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = std::fs::read_to_string(entry.path()).unwrap();
            (rel, content)
        })
        .collect()
}

fn directories(root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    dirs.sort();
    dirs
}

/// Script files that belong to the project's own sources
fn is_source_file(archetype: Archetype, path: &str) -> bool {
    let Some((stem, ext)) = path.rsplit_once('.') else {
        return false;
    };
    if !SCRIPT_EXTENSIONS.contains(&ext) {
        return false;
    }
    if path.starts_with("src/") || path.starts_with("test/") {
        return true;
    }
    archetype == Archetype::ReactNative && matches!(stem, "App" | "index")
}

/// Source extension each archetype is expected to use
fn expected_extension(archetype: Archetype, language: Language) -> &'static str {
    match (archetype, language) {
        (Archetype::Nest, _) => "ts",
        (Archetype::NextJs | Archetype::React | Archetype::ReactNative, Language::JavaScript) => "jsx",
        (Archetype::NextJs | Archetype::React | Archetype::ReactNative, Language::TypeScript) => "tsx",
        (_, Language::JavaScript) => "js",
        (_, Language::TypeScript) => "ts",
    }
}

fn read_manifest(project: &Path) -> Value {
    let content = std::fs::read_to_string(project.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn test_plain_runtime_untyped() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

    dispatcher
        .generate_project("demo-app", "plain-runtime", Language::JavaScript)
        .await
        .unwrap();

    let project = tmp.path().join("demo-app");
    assert!(project.is_dir());
    assert!(project.join("package.json").is_file());
    assert!(project.join("src").is_dir());
    assert_eq!(read_manifest(&project)["scripts"]["start"], "node src/index.js");
}

#[tokio::test]
async fn test_http_framework_typed() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

    dispatcher
        .generate_project("demo-app", "http-framework", Language::TypeScript)
        .await
        .unwrap();

    let project = tmp.path().join("demo-app");
    assert!(project.join("src/controllers").is_dir());
    assert!(project.join("tsconfig.json").is_file());

    let manifest = read_manifest(&project);
    assert!(manifest["devDependencies"]["typescript"].is_string());
    assert_eq!(manifest["scripts"]["start"], "node dist/index.js");
    assert!(manifest["scripts"]["build"].is_string());
}

#[tokio::test]
async fn test_second_generation_fails_without_side_effects() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = ProjectGenerator::with_base_dir(tmp.path());
    let project = tmp.path().join("demo-app");

    dispatcher
        .generate_project("demo-app", "nodejs", Language::JavaScript)
        .await
        .unwrap();

    let files_before = snapshot(tmp.path());
    let dirs_before = directories(tmp.path());
    let mtime_before = std::fs::metadata(&project).unwrap().modified().unwrap();

    let err = dispatcher
        .generate_project("demo-app", "express", Language::TypeScript)
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::DirectoryAlreadyExists { ref name } if name == "demo-app"));
    assert_eq!(err.to_string(), "Project directory \"demo-app\" already exists.");
    assert_eq!(snapshot(tmp.path()), files_before);
    assert_eq!(directories(tmp.path()), dirs_before);
    assert_eq!(std::fs::metadata(&project).unwrap().modified().unwrap(), mtime_before);
}

#[tokio::test]
async fn test_structured_backend_forces_typed_sources() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

    dispatcher
        .generate_project("x", "structured-backend-framework", Language::JavaScript)
        .await
        .unwrap();

    let files = snapshot(&tmp.path().join("x"));
    let sources: Vec<&String> = files
        .keys()
        .filter(|path| is_source_file(Archetype::Nest, path))
        .collect();

    assert!(!sources.is_empty());
    for path in sources {
        assert!(path.ends_with(".ts"), "{path} should use the typed extension");
    }
}

#[tokio::test]
async fn test_unknown_archetype_cleans_up_target() {
    let tmp = TempDir::new().unwrap();
    let dispatcher = ProjectGenerator::with_base_dir(tmp.path());

    let err = dispatcher
        .generate_project("x", "no-such-type", Language::JavaScript)
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::UnknownArchetype { ref id } if id == "no-such-type"));
    assert!(!tmp.path().join("x").exists());
    assert!(directories(tmp.path()).is_empty());
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    for archetype in Archetype::ALL {
        for language in Language::ALL {
            let first = TempDir::new().unwrap();
            let second = TempDir::new().unwrap();

            ProjectGenerator::with_base_dir(first.path())
                .generate_project("same-name", archetype.id(), language)
                .await
                .unwrap();
            ProjectGenerator::with_base_dir(second.path())
                .generate_project("same-name", archetype.id(), language)
                .await
                .unwrap();

            assert_eq!(
                snapshot(first.path()),
                snapshot(second.path()),
                "{archetype} {language}"
            );
            assert_eq!(directories(first.path()), directories(second.path()));
        }
    }
}

#[tokio::test]
async fn test_source_extensions_are_consistent() {
    for archetype in Archetype::ALL {
        for language in Language::ALL {
            let tmp = TempDir::new().unwrap();
            ProjectGenerator::with_base_dir(tmp.path())
                .generate_project("app", archetype.id(), language)
                .await
                .unwrap();

            let expected = expected_extension(archetype, language);
            assert_eq!(archetype.source_extension(language), expected, "{archetype} {language}");
            let files = snapshot(&tmp.path().join("app"));
            let sources: Vec<&String> = files
                .keys()
                .filter(|path| is_source_file(archetype, path))
                .collect();

            assert!(!sources.is_empty(), "{archetype} {language} has no sources");
            for path in sources {
                assert!(
                    path.ends_with(&format!(".{expected}")),
                    "{archetype} {language}: {path} should end with .{expected}"
                );
            }
        }
    }
}

#[tokio::test]
async fn test_manifests_are_complete() {
    for archetype in Archetype::ALL {
        for language in Language::ALL {
            let tmp = TempDir::new().unwrap();
            ProjectGenerator::with_base_dir(tmp.path())
                .generate_project("app", archetype.id(), language)
                .await
                .unwrap();

            let manifest = read_manifest(&tmp.path().join("app"));
            let context = format!("{archetype} {language}");

            assert_eq!(manifest["name"], "app", "{context}");
            assert!(manifest["main"].as_str().is_some_and(|s| !s.is_empty()), "{context}");
            assert!(manifest["scripts"]["start"].as_str().is_some_and(|s| !s.is_empty()), "{context}");
            assert!(manifest["dependencies"].is_object(), "{context}");
            assert!(manifest["devDependencies"].is_object(), "{context}");

            if archetype.effective_language(language).is_typed() {
                assert!(manifest["devDependencies"]["typescript"].is_string(), "{context}");
                let scripts = manifest["scripts"].as_object().unwrap();
                assert!(
                    scripts.contains_key("build") || scripts.contains_key("typecheck"),
                    "{context}"
                );
            }
        }
    }
}

/// Untyped projects run their sources directly, so `main` must exist on disk
#[tokio::test]
async fn test_untyped_entry_point_is_generated() {
    for archetype in Archetype::ALL {
        if archetype.forced_language().is_some() {
            continue;
        }
        let tmp = TempDir::new().unwrap();
        ProjectGenerator::with_base_dir(tmp.path())
            .generate_project("app", archetype.id(), Language::JavaScript)
            .await
            .unwrap();

        let project = tmp.path().join("app");
        let main = read_manifest(&project)["main"].as_str().unwrap().to_string();
        assert!(project.join(&main).is_file(), "{archetype}: {main} missing");
    }
}

#[tokio::test]
async fn test_dependency_ranges_are_valid_semver() {
    for archetype in Archetype::ALL {
        for language in Language::ALL {
            let tmp = TempDir::new().unwrap();
            ProjectGenerator::with_base_dir(tmp.path())
                .generate_project("app", archetype.id(), language)
                .await
                .unwrap();

            let manifest = read_manifest(&tmp.path().join("app"));
            for section in ["dependencies", "devDependencies"] {
                for (name, range) in manifest[section].as_object().unwrap() {
                    let range = range.as_str().unwrap();
                    assert!(
                        semver::VersionReq::parse(range).is_ok(),
                        "{archetype} {language}: {name} has invalid range {range}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_every_file_directory_is_declared() {
    for archetype in Archetype::ALL {
        for language in Language::ALL {
            let tree = jsgen_core::templates::template_set(archetype)("app", language);
            assert!(
                tree.undeclared_directories().is_empty(),
                "{archetype} {language}: {:?}",
                tree.undeclared_directories()
            );
        }
    }
}

#[tokio::test]
async fn test_written_content_is_trimmed() {
    let tmp = TempDir::new().unwrap();
    ProjectGenerator::with_base_dir(tmp.path())
        .generate_project("app", "react", Language::TypeScript)
        .await
        .unwrap();

    for (path, content) in snapshot(&tmp.path().join("app")) {
        assert_eq!(content, content.trim(), "{path} was not trimmed");
    }
}
