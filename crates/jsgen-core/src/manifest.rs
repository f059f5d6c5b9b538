//! `package.json` composition

use crate::project::Language;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// TypeScript toolchain version pinned into every typed project
pub const TYPESCRIPT_VERSION: &str = "^5.3.2";

/// Node type definitions version
pub const TYPES_NODE_VERSION: &str = "^20.10.0";

/// The project manifest every archetype emits exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Entry point, relative to the project root
    pub main: String,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub license: String,
}

impl PackageManifest {
    /// A manifest with the default metadata and a `start` script running `src/index.js`
    pub fn new(project_name: &str) -> Self {
        let mut scripts = BTreeMap::new();
        scripts.insert("start".to_string(), "node src/index.js".to_string());

        Self {
            name: project_name.to_string(),
            version: "1.0.0".to_string(),
            description: format!("A {} project", project_name),
            main: "src/index.js".to_string(),
            scripts,
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            keywords: Vec::new(),
            author: String::new(),
            license: "MIT".to_string(),
        }
    }

    pub fn main(mut self, entry: impl Into<String>) -> Self {
        self.main = entry.into();
        self
    }

    pub fn script(mut self, name: &str, command: impl Into<String>) -> Self {
        self.scripts.insert(name.to_string(), command.into());
        self
    }

    pub fn scripts(mut self, scripts: &[(&str, &str)]) -> Self {
        for (name, command) in scripts {
            self.scripts.insert(name.to_string(), command.to_string());
        }
        self
    }

    pub fn dependencies(mut self, deps: &[(&str, &str)]) -> Self {
        for (name, range) in deps {
            self.dependencies.insert(name.to_string(), range.to_string());
        }
        self
    }

    pub fn dev_dependencies(mut self, deps: &[(&str, &str)]) -> Self {
        for (name, range) in deps {
            self.dev_dependencies.insert(name.to_string(), range.to_string());
        }
        self
    }

    /// Dev dependencies that only apply to typed projects
    pub fn typed_dev_dependencies(self, language: Language, deps: &[(&str, &str)]) -> Self {
        if language.is_typed() {
            self.dev_dependencies(deps)
        } else {
            self
        }
    }

    /// Add the TypeScript compiler and a `typecheck` script when `language` is typed
    pub fn type_checked(self, language: Language) -> Self {
        if !language.is_typed() {
            return self;
        }
        let manifest = self.dev_dependencies(&[("typescript", TYPESCRIPT_VERSION)]);
        if manifest.scripts.contains_key("typecheck") {
            manifest
        } else {
            manifest.script("typecheck", "tsc --noEmit")
        }
    }

    /// Pretty-printed JSON, two space indent, keys in declaration order
    pub fn render(&self) -> String {
        let value = json!({
            "name": self.name,
            "version": self.version,
            "description": self.description,
            "main": self.main,
            "scripts": self.scripts,
            "dependencies": self.dependencies,
            "devDependencies": self.dev_dependencies,
            "keywords": self.keywords,
            "author": self.author,
            "license": self.license,
        });
        pretty_json(&value)
    }
}

/// Pretty-print a JSON document the way `JSON.stringify(value, null, 2)` does
pub fn pretty_json(value: &Value) -> String {
    format!("{:#}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest_has_start_script() {
        let manifest = PackageManifest::new("demo-app");
        assert_eq!(manifest.scripts["start"], "node src/index.js");
        assert_eq!(manifest.description, "A demo-app project");
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_render_is_parseable_and_ordered() {
        let rendered = PackageManifest::new("demo-app")
            .dependencies(&[("dotenv", "^16.3.1")])
            .script("dev", "nodemon src/index.js")
            .render();

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["name"], "demo-app");
        assert_eq!(value["dependencies"]["dotenv"], "^16.3.1");
        assert!(value["devDependencies"].as_object().unwrap().is_empty());

        let name_at = rendered.find("\"name\"").unwrap();
        let scripts_at = rendered.find("\"scripts\"").unwrap();
        let license_at = rendered.find("\"license\"").unwrap();
        assert!(name_at < scripts_at && scripts_at < license_at);
        assert!(rendered.contains("\n  \"version\": \"1.0.0\""));
    }

    #[test]
    fn test_round_trips_through_serde() {
        let manifest = PackageManifest::new("demo-app").script("build", "tsc");
        let parsed: PackageManifest = serde_json::from_str(&manifest.render()).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_type_checked_only_for_typescript() {
        let js = PackageManifest::new("a").type_checked(Language::JavaScript);
        assert!(!js.dev_dependencies.contains_key("typescript"));
        assert!(!js.scripts.contains_key("typecheck"));

        let ts = PackageManifest::new("a").type_checked(Language::TypeScript);
        assert_eq!(ts.dev_dependencies["typescript"], TYPESCRIPT_VERSION);
        assert_eq!(ts.scripts["typecheck"], "tsc --noEmit");
    }

    #[test]
    fn test_main_is_always_rendered() {
        let value: Value = serde_json::from_str(&PackageManifest::new("a").render()).unwrap();
        assert_eq!(value["main"], "src/index.js");

        let rendered = PackageManifest::new("a").main("dist/index.js").render();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["main"], "dist/index.js");
        let main_at = rendered.find("\"main\"").unwrap();
        assert!(rendered.find("\"description\"").unwrap() < main_at);
        assert!(main_at < rendered.find("\"scripts\"").unwrap());
    }
}
