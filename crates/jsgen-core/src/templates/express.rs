//! Express.js server with an MVC layout

use super::{gitignore, node_tsconfig, readme, variant};
use crate::manifest::{PackageManifest, TYPES_NODE_VERSION};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;

const DEPENDENCIES: &[(&str, &str)] = &[
    ("express", "^4.18.2"),
    ("cors", "^2.8.5"),
    ("helmet", "^7.1.0"),
    ("morgan", "^1.10.0"),
    ("dotenv", "^16.3.1"),
];

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::Express.source_extension(language);
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/controllers",
        "src/models",
        "src/routes",
        "src/middleware",
        "src/config",
        "src/utils",
    ]);

    let sources = [
        ("src/app", APP_JS, APP_TS),
        ("src/index", INDEX_JS, INDEX_TS),
        ("src/controllers/exampleController", CONTROLLER_JS, CONTROLLER_TS),
        ("src/models/exampleModel", MODEL_JS, MODEL_TS),
        ("src/routes/exampleRoute", ROUTE_JS, ROUTE_TS),
        ("src/middleware/errorHandler", ERROR_HANDLER_JS, ERROR_HANDLER_TS),
        ("src/config/database", DATABASE_JS, DATABASE_TS),
        ("src/utils/logger", LOGGER_JS, LOGGER_TS),
    ];
    for (stem, js, ts) in sources {
        tree.file(format!("{stem}.{ext}"), variant(language, js, ts));
    }

    tree.file("package.json", manifest(project_name, language).render());
    if language.is_typed() {
        tree.file("tsconfig.json", node_tsconfig());
    }

    tree.file(".gitignore", gitignore())
        .file(
            "README.md",
            readme(
                project_name,
                "A Node.js Express.js project with MVC structure.",
                &format!("index.{ext}"),
            ),
        )
        .file(".env.example", "PORT=3000\nNODE_ENV=development\n");

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let base = PackageManifest::new(project_name).dependencies(DEPENDENCIES);

    if language.is_typed() {
        base.main("dist/index.js")
            .scripts(&[
                ("start", "node dist/index.js"),
                ("dev", "nodemon src/index.ts"),
                ("build", "tsc"),
            ])
            .dev_dependencies(&[
                ("@types/express", "^4.17.21"),
                ("@types/cors", "^2.8.17"),
                ("@types/morgan", "^1.9.9"),
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

const APP_JS: &str = r#"
const express = require('express');
const cors = require('cors');
const helmet = require('helmet');
const morgan = require('morgan');
require('dotenv').config();

const exampleRoute = require('./routes/exampleRoute');
const errorHandler = require('./middleware/errorHandler');

const app = express();

// Middleware
app.use(helmet());
app.use(cors());
app.use(morgan('combined'));
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Health check
app.get('/health', (req, res) => {
  res.status(200).json({ status: 'OK', timestamp: new Date().toISOString() });
});

// Routes
app.use('/api', exampleRoute);

// Error handling middleware
app.use(errorHandler);

module.exports = app;
"#;

const APP_TS: &str = r#"
import express, { Request, Response } from 'express';
import cors from 'cors';
import helmet from 'helmet';
import morgan from 'morgan';
import 'dotenv/config';

import exampleRoute from './routes/exampleRoute';
import { errorHandler } from './middleware/errorHandler';

const app = express();

// Middleware
app.use(helmet());
app.use(cors());
app.use(morgan('combined'));
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Health check
app.get('/health', (req: Request, res: Response) => {
  res.status(200).json({ status: 'OK', timestamp: new Date().toISOString() });
});

// Routes
app.use('/api', exampleRoute);

// Error handling middleware
app.use(errorHandler);

export default app;
"#;

const INDEX_JS: &str = r#"
const app = require('./app');
const logger = require('./utils/logger');

const PORT = process.env.PORT || 3000;

app.listen(PORT, () => {
  logger.info(`Server running on port ${PORT}`);
  logger.info(`Environment: ${process.env.NODE_ENV || 'development'}`);
});
"#;

const INDEX_TS: &str = r#"
import app from './app';
import { logger } from './utils/logger';

const PORT = Number(process.env.PORT) || 3000;

app.listen(PORT, () => {
  logger.info(`Server running on port ${PORT}`);
  logger.info(`Environment: ${process.env.NODE_ENV || 'development'}`);
});
"#;

const CONTROLLER_JS: &str = r#"
const exampleModel = require('../models/exampleModel');

exports.exampleController = (req, res) => {
  try {
    res.json({
      message: 'Hello from Controller',
      timestamp: new Date().toISOString(),
      method: req.method,
      url: req.url
    });
  } catch (error) {
    res.status(500).json({ error: 'Internal server error' });
  }
};

exports.createExample = (req, res) => {
  try {
    const { name, description } = req.body;

    if (!name) {
      return res.status(400).json({ error: 'Name is required' });
    }

    const created = exampleModel.create({ name, description });
    res.status(201).json({
      message: 'Example created successfully',
      data: created
    });
  } catch (error) {
    res.status(500).json({ error: 'Internal server error' });
  }
};
"#;

const CONTROLLER_TS: &str = r#"
import { Request, Response } from 'express';
import exampleModel from '../models/exampleModel';

export const exampleController = (req: Request, res: Response): void => {
  try {
    res.json({
      message: 'Hello from Controller',
      timestamp: new Date().toISOString(),
      method: req.method,
      url: req.url,
    });
  } catch (error) {
    res.status(500).json({ error: 'Internal server error' });
  }
};

export const createExample = (req: Request, res: Response): void => {
  try {
    const { name, description } = req.body as { name?: string; description?: string };

    if (!name) {
      res.status(400).json({ error: 'Name is required' });
      return;
    }

    const created = exampleModel.create({ name, description });
    res.status(201).json({
      message: 'Example created successfully',
      data: created,
    });
  } catch (error) {
    res.status(500).json({ error: 'Internal server error' });
  }
};
"#;

const MODEL_JS: &str = r#"
// Example model - replace with your actual database model
class ExampleModel {
  constructor() {
    this.data = [];
  }

  findAll() {
    return this.data;
  }

  findById(id) {
    return this.data.find(item => item.id === id);
  }

  create(data) {
    const newItem = {
      id: Date.now().toString(),
      ...data,
      createdAt: new Date().toISOString()
    };
    this.data.push(newItem);
    return newItem;
  }

  update(id, data) {
    const index = this.data.findIndex(item => item.id === id);
    if (index !== -1) {
      this.data[index] = { ...this.data[index], ...data, updatedAt: new Date().toISOString() };
      return this.data[index];
    }
    return null;
  }

  delete(id) {
    const index = this.data.findIndex(item => item.id === id);
    if (index !== -1) {
      return this.data.splice(index, 1)[0];
    }
    return null;
  }
}

module.exports = new ExampleModel();
"#;

const MODEL_TS: &str = r#"
// Example model - replace with your actual database model
export interface Example {
  id: string;
  name: string;
  description?: string;
  createdAt: string;
  updatedAt?: string;
}

export type ExampleInput = Pick<Example, 'name' | 'description'>;

class ExampleModel {
  private data: Example[] = [];

  findAll(): Example[] {
    return this.data;
  }

  findById(id: string): Example | undefined {
    return this.data.find((item) => item.id === id);
  }

  create(data: ExampleInput): Example {
    const newItem: Example = {
      id: Date.now().toString(),
      ...data,
      createdAt: new Date().toISOString(),
    };
    this.data.push(newItem);
    return newItem;
  }

  update(id: string, data: Partial<ExampleInput>): Example | null {
    const index = this.data.findIndex((item) => item.id === id);
    if (index !== -1) {
      this.data[index] = { ...this.data[index], ...data, updatedAt: new Date().toISOString() };
      return this.data[index];
    }
    return null;
  }

  delete(id: string): Example | null {
    const index = this.data.findIndex((item) => item.id === id);
    if (index !== -1) {
      return this.data.splice(index, 1)[0];
    }
    return null;
  }
}

export default new ExampleModel();
"#;

const ROUTE_JS: &str = r#"
const express = require('express');
const router = express.Router();
const { exampleController, createExample } = require('../controllers/exampleController');

// GET /api/example
router.get('/example', exampleController);

// POST /api/example
router.post('/example', createExample);

// GET /api/health
router.get('/health', (req, res) => {
  res.json({ status: 'API is running' });
});

module.exports = router;
"#;

const ROUTE_TS: &str = r#"
import { Router, Request, Response } from 'express';
import { exampleController, createExample } from '../controllers/exampleController';

const router = Router();

// GET /api/example
router.get('/example', exampleController);

// POST /api/example
router.post('/example', createExample);

// GET /api/health
router.get('/health', (req: Request, res: Response) => {
  res.json({ status: 'API is running' });
});

export default router;
"#;

const ERROR_HANDLER_JS: &str = r#"
const logger = require('../utils/logger');

const errorHandler = (err, req, res, next) => {
  logger.error(err.stack);

  const status = err.status || 500;
  const message = err.message || 'Something went wrong!';

  res.status(status).json({
    error: {
      message,
      status,
      timestamp: new Date().toISOString()
    }
  });
};

module.exports = errorHandler;
"#;

const ERROR_HANDLER_TS: &str = r#"
import { Request, Response, NextFunction } from 'express';
import { logger } from '../utils/logger';

export interface HttpError extends Error {
  status?: number;
}

export const errorHandler = (
  err: HttpError,
  req: Request,
  res: Response,
  _next: NextFunction,
): void => {
  logger.error(err.stack ?? err.message);

  const status = err.status || 500;
  const message = err.message || 'Something went wrong!';

  res.status(status).json({
    error: {
      message,
      status,
      timestamp: new Date().toISOString(),
    },
  });
};
"#;

const DATABASE_JS: &str = r#"
// Database configuration
// Replace with your actual database setup (MongoDB, PostgreSQL, etc.)

const config = {
  development: {
    host: process.env.DB_HOST || 'localhost',
    port: process.env.DB_PORT || 5432,
    database: process.env.DB_NAME || 'dev_db',
    username: process.env.DB_USER || 'postgres',
    password: process.env.DB_PASSWORD || 'password'
  },
  production: {
    host: process.env.DB_HOST,
    port: process.env.DB_PORT,
    database: process.env.DB_NAME,
    username: process.env.DB_USER,
    password: process.env.DB_PASSWORD
  }
};

const env = process.env.NODE_ENV || 'development';
module.exports = config[env];
"#;

const DATABASE_TS: &str = r#"
// Database configuration
// Replace with your actual database setup (MongoDB, PostgreSQL, etc.)

export interface DatabaseConfig {
  host?: string;
  port?: number;
  database?: string;
  username?: string;
  password?: string;
}

const configs: Record<string, DatabaseConfig> = {
  development: {
    host: process.env.DB_HOST || 'localhost',
    port: Number(process.env.DB_PORT) || 5432,
    database: process.env.DB_NAME || 'dev_db',
    username: process.env.DB_USER || 'postgres',
    password: process.env.DB_PASSWORD || 'password',
  },
  production: {
    host: process.env.DB_HOST,
    port: Number(process.env.DB_PORT),
    database: process.env.DB_NAME,
    username: process.env.DB_USER,
    password: process.env.DB_PASSWORD,
  },
};

const env = process.env.NODE_ENV || 'development';
export const databaseConfig: DatabaseConfig = configs[env] ?? configs.development;
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
  }
};

module.exports = logger;
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
};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mvc_directories_declared() {
        let tree = build_file_tree("api", Language::JavaScript);
        for dir in ["src/controllers", "src/models", "src/routes", "src/middleware"] {
            assert!(tree.contains_dir(dir), "missing {dir}");
        }
    }

    #[test]
    fn test_typescript_adds_type_packages() {
        let tree = build_file_tree("api", Language::TypeScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert!(manifest.dev_dependencies.contains_key("@types/express"));
        assert!(manifest.dev_dependencies.contains_key("typescript"));
        assert_eq!(manifest.dependencies["express"], "^4.18.2");
        assert!(tree.contains_file("src/controllers/exampleController.ts"));
    }

    #[test]
    fn test_javascript_sources_use_commonjs() {
        let tree = build_file_tree("api", Language::JavaScript);
        assert!(tree.files["src/app.js"].contains("module.exports = app;"));
        assert!(!tree.files["src/app.js"].contains("import "));
    }
}
