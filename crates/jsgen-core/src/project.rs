//! Project descriptor types: archetypes, language variants and project names

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Language variant of the generated sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    /// Short identifier used on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// File extension for plain source files
    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// File extension for source files that contain JSX markup
    pub fn markup_extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "jsx",
            Language::TypeScript => "tsx",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" | "untyped" => Ok(Language::JavaScript),
            "ts" | "typescript" | "typed" => Ok(Language::TypeScript),
            _ => Err(ScaffoldError::UnknownLanguage { id: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = ScaffoldError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The closed set of project layouts the generator knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Archetype {
    NodeJs,
    Express,
    NextJs,
    React,
    Nest,
    Electron,
    ReactNative,
}

impl Archetype {
    pub const ALL: [Archetype; 7] = [
        Archetype::NodeJs,
        Archetype::Express,
        Archetype::NextJs,
        Archetype::React,
        Archetype::Nest,
        Archetype::Electron,
        Archetype::ReactNative,
    ];

    /// Registry identifier (also accepted by `--type`)
    pub fn id(&self) -> &'static str {
        match self {
            Archetype::NodeJs => "nodejs",
            Archetype::Express => "express",
            Archetype::NextJs => "nextjs",
            Archetype::React => "react",
            Archetype::Nest => "nest",
            Archetype::Electron => "electron",
            Archetype::ReactNative => "react-native",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::NodeJs => "Node.js (Basic)",
            Archetype::Express => "Express.js (MVC)",
            Archetype::NextJs => "Next.js",
            Archetype::React => "React",
            Archetype::Nest => "NestJS",
            Archetype::Electron => "Electron",
            Archetype::ReactNative => "React Native",
        }
    }

    /// Language every project of this archetype is generated in, whatever was requested
    pub fn forced_language(&self) -> Option<Language> {
        match self {
            Archetype::Nest => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn effective_language(&self, requested: Language) -> Language {
        self.forced_language().unwrap_or(requested)
    }

    /// Whether this archetype's sources are JSX components
    pub fn uses_markup(&self) -> bool {
        matches!(
            self,
            Archetype::NextJs | Archetype::React | Archetype::ReactNative
        )
    }

    /// Extension shared by every source file the archetype emits for `language`
    pub fn source_extension(&self, language: Language) -> &'static str {
        let language = self.effective_language(language);
        if self.uses_markup() {
            language.markup_extension()
        } else {
            language.extension()
        }
    }

    /// Commands to show once the project has been created
    pub fn next_steps(&self, project_name: &str) -> Vec<String> {
        let mut steps = vec![format!("cd {}", project_name), "npm install".to_string()];
        match self {
            Archetype::NextJs | Archetype::Electron => steps.push("npm run dev".to_string()),
            Archetype::ReactNative => {
                steps.push("npx react-native run-android".to_string());
                steps.push("# or npx react-native run-ios".to_string());
            }
            Archetype::NodeJs | Archetype::Express | Archetype::React | Archetype::Nest => {
                steps.push("npm start".to_string())
            }
        }
        steps
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Archetype {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        let archetype = match s.to_lowercase().as_str() {
            "nodejs" | "node" | "plain-runtime" => Archetype::NodeJs,
            "express" | "http-framework" => Archetype::Express,
            "nextjs" | "next" | "fullstack-framework" => Archetype::NextJs,
            "react" | "frontend-library" => Archetype::React,
            "nest" | "nestjs" | "structured-backend-framework" => Archetype::Nest,
            "electron" | "desktop-shell" => Archetype::Electron,
            "react-native" | "mobile-shell" => Archetype::ReactNative,
            _ => return Err(ScaffoldError::UnknownArchetype { id: s.to_string() }),
        };
        Ok(archetype)
    }
}

impl TryFrom<String> for Archetype {
    type Error = ScaffoldError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A project name that is safe to use as a single directory component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Surrounding whitespace is rejected rather than stripped
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(ScaffoldError::InvalidProjectName {
                name: input.to_string(),
                reason: "Project name is required",
            });
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ScaffoldError::InvalidProjectName {
                name: input.to_string(),
                reason: "Project name can only contain letters, numbers, hyphens, and underscores",
            });
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fully resolved user intent, produced by the entry point before generation starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: ProjectName,
    pub archetype: Archetype,
    pub language: Language,
}

impl ProjectDescriptor {
    pub fn new(name: ProjectName, archetype: Archetype, language: Language) -> Self {
        Self {
            name,
            archetype,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archetype_ids_and_aliases() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.id().parse::<Archetype>().unwrap(), archetype);
        }
        assert_eq!("plain-runtime".parse::<Archetype>().unwrap(), Archetype::NodeJs);
        assert_eq!(
            "structured-backend-framework".parse::<Archetype>().unwrap(),
            Archetype::Nest
        );
        assert_eq!("React-Native".parse::<Archetype>().unwrap(), Archetype::ReactNative);
    }

    #[test]
    fn test_unknown_archetype_names_id() {
        let err = "no-such-type".parse::<Archetype>().unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownArchetype { ref id } if id == "no-such-type"));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("js".parse::<Language>().unwrap(), Language::JavaScript);
        assert_eq!("TypeScript".parse::<Language>().unwrap(), Language::TypeScript);
        assert!("py".parse::<Language>().is_err());
    }

    #[test]
    fn test_nest_forces_typescript() {
        assert_eq!(
            Archetype::Nest.effective_language(Language::JavaScript),
            Language::TypeScript
        );
        assert_eq!(Archetype::Nest.source_extension(Language::JavaScript), "ts");
        assert_eq!(
            Archetype::Express.effective_language(Language::JavaScript),
            Language::JavaScript
        );
    }

    #[test]
    fn test_source_extension_per_archetype() {
        assert_eq!(Archetype::NodeJs.source_extension(Language::JavaScript), "js");
        assert_eq!(Archetype::NodeJs.source_extension(Language::TypeScript), "ts");
        assert_eq!(Archetype::React.source_extension(Language::JavaScript), "jsx");
        assert_eq!(Archetype::ReactNative.source_extension(Language::TypeScript), "tsx");
    }

    #[test]
    fn test_project_name_validation() {
        assert_eq!(ProjectName::parse("demo-app_2").unwrap().as_str(), "demo-app_2");
        assert!(ProjectName::parse("").is_err());
        assert!(ProjectName::parse("   ").is_err());
        assert!(ProjectName::parse("../escape").is_err());
        assert!(ProjectName::parse("with space").is_err());
    }

    #[test]
    fn test_project_name_is_not_trimmed() {
        let err = ProjectName::parse(" demo ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid project name \" demo \": Project name can only contain letters, numbers, hyphens, and underscores"
        );
        assert!(ProjectName::parse("demo\n").is_err());
    }

    #[test]
    fn test_next_steps_start_command() {
        let steps = Archetype::NodeJs.next_steps("demo-app");
        assert_eq!(steps, vec!["cd demo-app", "npm install", "npm start"]);
        assert!(Archetype::NextJs
            .next_steps("x")
            .contains(&"npm run dev".to_string()));
        assert!(Archetype::ReactNative
            .next_steps("x")
            .iter()
            .any(|s| s.contains("run-android")));
    }
}
