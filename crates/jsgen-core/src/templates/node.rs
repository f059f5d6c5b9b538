//! Minimal Node.js project

use super::{gitignore, node_tsconfig, readme, variant};
use crate::manifest::{PackageManifest, TYPES_NODE_VERSION};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::NodeJs.source_extension(language);
    let mut tree = FileTree::new();

    tree.dirs(["src", "src/utils", "src/config"]);

    tree.file(format!("src/index.{ext}"), variant(language, INDEX_JS, INDEX_TS))
        .file(format!("src/utils/logger.{ext}"), variant(language, LOGGER_JS, LOGGER_TS))
        .file(format!("src/config/app.{ext}"), variant(language, CONFIG_JS, CONFIG_TS));

    tree.file("package.json", manifest(project_name, language).render());
    if language.is_typed() {
        tree.file("tsconfig.json", node_tsconfig());
    }

    tree.file(".gitignore", gitignore())
        .file(
            "README.md",
            readme(project_name, "A basic Node.js project.", &format!("index.{ext}")),
        )
        .file(".env.example", ENV_EXAMPLE);

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let base = PackageManifest::new(project_name).dependencies(&[("dotenv", "^16.3.1")]);

    if language.is_typed() {
        base.main("dist/index.js")
            .scripts(&[
                ("start", "node dist/index.js"),
                ("dev", "nodemon src/index.ts"),
                ("build", "tsc"),
            ])
            .dev_dependencies(&[
                ("@types/node", TYPES_NODE_VERSION),
                ("nodemon", "^3.0.2"),
                ("ts-node", "^10.9.1"),
            ])
            .type_checked(language)
    } else {
        base.main("src/index.js")
            .scripts(&[
                ("start", "node src/index.js"),
                ("dev", "nodemon src/index.js"),
                ("build", "echo 'No build step needed for JavaScript'"),
            ])
            .dev_dependencies(&[("nodemon", "^3.0.2")])
    }
}

const ENV_EXAMPLE: &str = r#"
NODE_ENV=development
PORT=3000
"#;

const INDEX_JS: &str = r#"
require('dotenv').config();
const { config } = require('./config/app');
const { logger } = require('./utils/logger');

async function main() {
  try {
    logger.info('Starting application...');
    logger.info(`Environment: ${config.env}`);
    logger.info(`Port: ${config.port}`);

    // Your application logic here
    logger.info('Application started successfully!');

    process.on('SIGINT', () => {
      logger.info('Received SIGINT, shutting down gracefully...');
      process.exit(0);
    });
  } catch (error) {
    logger.error('Failed to start application:', error);
    process.exit(1);
  }
}

main();
"#;

const INDEX_TS: &str = r#"
import 'dotenv/config';
import { config } from './config/app';
import { logger } from './utils/logger';

async function main(): Promise<void> {
  try {
    logger.info('Starting application...');
    logger.info(`Environment: ${config.env}`);
    logger.info(`Port: ${config.port}`);

    // Your application logic here
    logger.info('Application started successfully!');

    process.on('SIGINT', () => {
      logger.info('Received SIGINT, shutting down gracefully...');
      process.exit(0);
    });
  } catch (error) {
    logger.error('Failed to start application:', error);
    process.exit(1);
  }
}

main();
"#;

const LOGGER_JS: &str = r#"
// Simple logger utility
const logger = {
  info: (message, meta = {}) => {
    console.log(`[INFO] ${new Date().toISOString()}`, message, meta);
  },

  error: (message, error = null) => {
    console.error(`[ERROR] ${new Date().toISOString()}`, message, error);
  },

  warn: (message, meta = {}) => {
    console.warn(`[WARN] ${new Date().toISOString()}`, message, meta);
  },

  debug: (message, meta = {}) => {
    if (process.env.NODE_ENV === 'development') {
      console.log(`[DEBUG] ${new Date().toISOString()}`, message, meta);
    }
  }
};

module.exports = { logger };
"#;

const LOGGER_TS: &str = r#"
// Simple logger utility
type Meta = Record<string, unknown>;

export const logger = {
  info: (message: string, meta: Meta = {}): void => {
    console.log(`[INFO] ${new Date().toISOString()}`, message, meta);
  },

  error: (message: string, error: unknown = null): void => {
    console.error(`[ERROR] ${new Date().toISOString()}`, message, error);
  },

  warn: (message: string, meta: Meta = {}): void => {
    console.warn(`[WARN] ${new Date().toISOString()}`, message, meta);
  },

  debug: (message: string, meta: Meta = {}): void => {
    if (process.env.NODE_ENV === 'development') {
      console.log(`[DEBUG] ${new Date().toISOString()}`, message, meta);
    }
  },
};
"#;

const CONFIG_JS: &str = r#"
// Application configuration
const config = {
  env: process.env.NODE_ENV || 'development',
  port: process.env.PORT || 3000,
  host: process.env.HOST || 'localhost',

  // Add your configuration here
  app: {
    name: process.env.APP_NAME || 'Node.js App',
    version: process.env.APP_VERSION || '1.0.0'
  }
};

module.exports = { config };
"#;

const CONFIG_TS: &str = r#"
// Application configuration
export interface AppConfig {
  env: string;
  port: number;
  host: string;
  app: {
    name: string;
    version: string;
  };
}

export const config: AppConfig = {
  env: process.env.NODE_ENV || 'development',
  port: Number(process.env.PORT) || 3000,
  host: process.env.HOST || 'localhost',

  // Add your configuration here
  app: {
    name: process.env.APP_NAME || 'Node.js App',
    version: process.env.APP_VERSION || '1.0.0',
  },
};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_layout() {
        let tree = build_file_tree("demo-app", Language::JavaScript);
        assert!(tree.contains_dir("src/utils"));
        assert!(tree.contains_file("src/index.js"));
        assert!(tree.contains_file("src/config/app.js"));
        assert!(!tree.contains_file("tsconfig.json"));
    }

    #[test]
    fn test_typescript_start_points_at_compiled_output() {
        let tree = build_file_tree("demo-app", Language::TypeScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert_eq!(manifest.scripts["start"], "node dist/index.js");
        assert_eq!(manifest.scripts["build"], "tsc");
        assert!(manifest.dev_dependencies.contains_key("typescript"));
        assert!(tree.contains_file("tsconfig.json"));
        assert!(tree.contains_file("src/utils/logger.ts"));
    }

    #[test]
    fn test_readme_names_project() {
        let tree = build_file_tree("demo-app", Language::JavaScript);
        assert!(tree.files["README.md"].contains("# demo-app"));
        assert!(tree.files["README.md"].contains("index.js"));
    }
}
