//! Per-archetype template sets
//!
//! Each submodule exposes a `build_file_tree(project_name, language)` function that
//! returns the full skeleton for one archetype. Template sets are pure: the same
//! inputs always produce the same tree, and nothing here touches the filesystem.
//!
//! This module also holds the pieces several archetypes share (compiler config,
//! ignore list, README).

pub mod electron;
pub mod express;
pub mod nest;
pub mod nextjs;
pub mod node;
pub mod react;
pub mod react_native;

use crate::manifest::pretty_json;
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

/// Signature shared by every template set
pub type BuildFileTree = fn(&str, Language) -> FileTree;

/// The template set that builds `archetype`
pub fn template_set(archetype: Archetype) -> BuildFileTree {
    match archetype {
        Archetype::NodeJs => node::build_file_tree,
        Archetype::Express => express::build_file_tree,
        Archetype::NextJs => nextjs::build_file_tree,
        Archetype::React => react::build_file_tree,
        Archetype::Nest => nest::build_file_tree,
        Archetype::Electron => electron::build_file_tree,
        Archetype::ReactNative => react_native::build_file_tree,
    }
}

/// Replace `{{key}}` placeholders with known values
///
/// Only literal substitution; unknown placeholders are left untouched.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{}}}}}", key), value)
    })
}

/// Pick the variant of a source file that matches `language`
pub(crate) fn variant<'a>(language: Language, js: &'a str, ts: &'a str) -> &'a str {
    if language.is_typed() {
        ts
    } else {
        js
    }
}

/// `tsconfig.json` for projects compiled by `tsc` from `src/` to `dist/`
pub fn node_tsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "lib": ["ES2020"],
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "declaration": true,
            "declarationMap": true,
            "sourceMap": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist", "**/*.test.ts"]
    }))
}

pub fn gitignore() -> &'static str {
    r#"
node_modules/
.env
.env.local
.env.development.local
.env.test.local
.env.production.local
dist/
build/
.DS_Store
*.log
coverage/
.nyc_output/
.vscode/
.idea/
*.swp
*.swo
"#
}

/// Generic README for server-side projects
pub fn readme(project_name: &str, description: &str, entry_file: &str) -> String {
    fill(
        r#"
# {{project_name}}

{{description}}

## Getting Started

1. Install dependencies:
   ```bash
   npm install
   ```

2. Start the development server:
   ```bash
   npm start
   ```

## Available Scripts

- `npm start` - Start the application
- `npm run dev` - Start with automatic restarts
- `npm run build` - Build the application

## Project Structure

```
src/
├── {{entry_file}}          # Entry point
└── ...
```

## License

MIT
"#,
        &[
            ("project_name", project_name),
            ("description", description),
            ("entry_file", entry_file),
        ],
    )
}
