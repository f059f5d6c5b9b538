//! React single page app built with Vite

use super::{fill, variant};
use crate::manifest::{pretty_json, PackageManifest};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::React.source_extension(language);
    let values = [("project_name", project_name), ("ext", ext)];
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/components",
        "src/hooks",
        "src/utils",
        "src/styles",
        "public",
    ]);

    tree.file(format!("src/main.{ext}"), variant(language, MAIN_JS, MAIN_TS))
        .file(format!("src/App.{ext}"), fill(APP, &values))
        .file("src/index.css", INDEX_CSS)
        .file("src/styles/App.css", APP_CSS)
        .file(format!("src/components/Header.{ext}"), fill(HEADER, &values))
        .file(format!("src/components/Footer.{ext}"), fill(FOOTER, &values))
        .file(
            format!("src/hooks/useLocalStorage.{ext}"),
            variant(language, USE_LOCAL_STORAGE_JS, USE_LOCAL_STORAGE_TS),
        )
        .file(format!("src/utils/helpers.{ext}"), variant(language, HELPERS_JS, HELPERS_TS));

    tree.file("package.json", manifest(project_name, language).render())
        .file(format!("vite.config.{}", language.extension()), VITE_CONFIG)
        .file("index.html", fill(INDEX_HTML, &values))
        .file(".eslintrc.cjs", variant(language, ESLINT_JS, ESLINT_TS));

    if language.is_typed() {
        tree.file("tsconfig.json", tsconfig())
            .file("tsconfig.node.json", tsconfig_node());
    }

    tree.file(".gitignore", GITIGNORE)
        .file("README.md", fill(README, &values));

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let build = if language.is_typed() {
        "tsc && vite build"
    } else {
        "vite build"
    };
    let lint = if language.is_typed() {
        "eslint . --ext ts,tsx --report-unused-disable-directives --max-warnings 0"
    } else {
        "eslint . --ext js,jsx --report-unused-disable-directives --max-warnings 0"
    };

    PackageManifest::new(project_name)
        .main(format!("src/main.{}", Archetype::React.source_extension(language)))
        .scripts(&[
            ("start", "vite"),
            ("dev", "vite"),
            ("build", build),
            ("preview", "vite preview"),
            ("lint", lint),
        ])
        .dependencies(&[("react", "^18.2.0"), ("react-dom", "^18.2.0")])
        .dev_dependencies(&[
            ("@vitejs/plugin-react", "^4.2.0"),
            ("vite", "^5.0.0"),
            ("eslint", "^8.54.0"),
            ("eslint-plugin-react-hooks", "^4.6.0"),
            ("eslint-plugin-react-refresh", "^0.4.4"),
        ])
        .typed_dev_dependencies(
            language,
            &[
                ("@types/react", "^18.2.0"),
                ("@types/react-dom", "^18.2.0"),
                ("@typescript-eslint/eslint-plugin", "^6.10.0"),
                ("@typescript-eslint/parser", "^6.10.0"),
            ],
        )
        .type_checked(language)
}

fn tsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true
        },
        "include": ["src"],
        "references": [{ "path": "./tsconfig.node.json" }]
    }))
}

fn tsconfig_node() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true
        },
        "include": ["vite.config.ts"]
    }))
}

const VITE_CONFIG: &str = r#"
import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

// https://vitejs.dev/config/
export default defineConfig({
  plugins: [react()],
  server: {
    port: 3000,
    open: true
  }
})
"#;

const MAIN_JS: &str = r#"
import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#;

const MAIN_TS: &str = r#"
import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#;

const APP: &str = r#"
import { useState } from 'react'
import Header from './components/Header'
import Footer from './components/Footer'
import './styles/App.css'

function App() {
  const [count, setCount] = useState(0)

  return (
    <div className="app">
      <Header />
      <main className="content">
        <h1>Welcome to {{project_name}}!</h1>
        <button onClick={() => setCount((count) => count + 1)}>
          Count is {count}
        </button>
        <p>
          Edit <code>src/App.{{ext}}</code> and save to test HMR
        </p>
      </main>
      <Footer />
    </div>
  )
}

export default App
"#;

const INDEX_CSS: &str = r#"
:root {
  font-family: Inter, system-ui, Avenir, Helvetica, Arial, sans-serif;
  line-height: 1.5;
  font-weight: 400;

  color-scheme: light dark;
  color: rgba(255, 255, 255, 0.87);
  background-color: #242424;

  font-synthesis: none;
  text-rendering: optimizeLegibility;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

a {
  font-weight: 500;
  color: #646cff;
  text-decoration: inherit;
}
a:hover {
  color: #535bf2;
}

body {
  margin: 0;
  min-width: 320px;
  min-height: 100vh;
}

button {
  border-radius: 8px;
  border: 1px solid transparent;
  padding: 0.6em 1.2em;
  font-size: 1em;
  font-weight: 500;
  font-family: inherit;
  background-color: #1a1a1a;
  cursor: pointer;
  transition: border-color 0.25s;
}
button:hover {
  border-color: #646cff;
}

@media (prefers-color-scheme: light) {
  :root {
    color: #213547;
    background-color: #ffffff;
  }
  button {
    background-color: #f9f9f9;
  }
}
"#;

const APP_CSS: &str = r#"
.app {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.content {
  flex: 1;
  padding: 2rem;
  text-align: center;
}

.header,
.footer {
  padding: 1rem 2rem;
}

.header nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.header nav a + a {
  margin-left: 1rem;
}

.footer {
  text-align: center;
  font-size: 0.875rem;
  opacity: 0.7;
}
"#;

const HEADER: &str = r#"
export default function Header() {
  return (
    <header className="header">
      <nav>
        <strong>{{project_name}}</strong>
        <div>
          <a href="/">Home</a>
          <a href="/about">About</a>
          <a href="/contact">Contact</a>
        </div>
      </nav>
    </header>
  )
}
"#;

const FOOTER: &str = r#"
export default function Footer() {
  return (
    <footer className="footer">
      <p>&copy; {{project_name}}. All rights reserved.</p>
      <p>Built with React and js-project-generator</p>
    </footer>
  )
}
"#;

const USE_LOCAL_STORAGE_JS: &str = r#"
import { useState } from 'react'

export function useLocalStorage(key, initialValue) {
  const [storedValue, setStoredValue] = useState(() => {
    try {
      const item = window.localStorage.getItem(key)
      return item ? JSON.parse(item) : initialValue
    } catch (error) {
      console.log(error)
      return initialValue
    }
  })

  const setValue = (value) => {
    try {
      const valueToStore = value instanceof Function ? value(storedValue) : value
      setStoredValue(valueToStore)
      window.localStorage.setItem(key, JSON.stringify(valueToStore))
    } catch (error) {
      console.log(error)
    }
  }

  return [storedValue, setValue]
}
"#;

const USE_LOCAL_STORAGE_TS: &str = r#"
import { useState } from 'react'

export function useLocalStorage<T>(
  key: string,
  initialValue: T,
): [T, (value: T | ((current: T) => T)) => void] {
  const [storedValue, setStoredValue] = useState<T>(() => {
    try {
      const item = window.localStorage.getItem(key)
      return item ? (JSON.parse(item) as T) : initialValue
    } catch (error) {
      console.log(error)
      return initialValue
    }
  })

  const setValue = (value: T | ((current: T) => T)) => {
    try {
      const valueToStore = value instanceof Function ? value(storedValue) : value
      setStoredValue(valueToStore)
      window.localStorage.setItem(key, JSON.stringify(valueToStore))
    } catch (error) {
      console.log(error)
    }
  }

  return [storedValue, setValue]
}
"#;

const HELPERS_JS: &str = r#"
// Utility functions

export function formatDate(date) {
  return new Intl.DateTimeFormat('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  }).format(date)
}

export function debounce(func, wait) {
  let timeout
  return (...args) => {
    clearTimeout(timeout)
    timeout = setTimeout(() => func(...args), wait)
  }
}

export function throttle(func, limit) {
  let inThrottle = false
  return (...args) => {
    if (!inThrottle) {
      func(...args)
      inThrottle = true
      setTimeout(() => (inThrottle = false), limit)
    }
  }
}
"#;

const HELPERS_TS: &str = r#"
// Utility functions

export function formatDate(date: Date): string {
  return new Intl.DateTimeFormat('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  }).format(date)
}

export function debounce<A extends unknown[]>(func: (...args: A) => void, wait: number) {
  let timeout: ReturnType<typeof setTimeout> | undefined
  return (...args: A) => {
    clearTimeout(timeout)
    timeout = setTimeout(() => func(...args), wait)
  }
}

export function throttle<A extends unknown[]>(func: (...args: A) => void, limit: number) {
  let inThrottle = false
  return (...args: A) => {
    if (!inThrottle) {
      func(...args)
      inThrottle = true
      setTimeout(() => (inThrottle = false), limit)
    }
  }
}
"#;

const ESLINT_JS: &str = r#"
module.exports = {
  root: true,
  env: { browser: true, es2020: true },
  extends: [
    'eslint:recommended',
    'plugin:react-hooks/recommended',
  ],
  ignorePatterns: ['dist', '.eslintrc.cjs'],
  parserOptions: { ecmaVersion: 'latest', sourceType: 'module', ecmaFeatures: { jsx: true } },
  plugins: ['react-refresh'],
  rules: {
    'react-refresh/only-export-components': [
      'warn',
      { allowConstantExport: true },
    ],
  },
}
"#;

const ESLINT_TS: &str = r#"
module.exports = {
  root: true,
  env: { browser: true, es2020: true },
  extends: [
    'eslint:recommended',
    'plugin:@typescript-eslint/recommended',
    'plugin:react-hooks/recommended',
  ],
  ignorePatterns: ['dist', '.eslintrc.cjs'],
  parser: '@typescript-eslint/parser',
  plugins: ['react-refresh'],
  rules: {
    'react-refresh/only-export-components': [
      'warn',
      { allowConstantExport: true },
    ],
  },
}
"#;

const INDEX_HTML: &str = r#"
<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{project_name}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.{{ext}}"></script>
  </body>
</html>
"#;

const GITIGNORE: &str = r#"
# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.sw?
"#;

const README: &str = r#"
# {{project_name}}

A React single page app powered by [Vite](https://vitejs.dev/), created with js-project-generator.

## Getting Started

```bash
npm install
npm start
```

Open [http://localhost:3000](http://localhost:3000) with your browser to see the result.

You can start editing the page by modifying `src/App.{{ext}}`. The page auto-updates as you edit the file.

## Available Scripts

- `npm start` / `npm run dev` - Start the development server
- `npm run build` - Build the app for production
- `npm run preview` - Preview the production build
- `npm run lint` - Run ESLint

## Learn More

- [React Documentation](https://react.dev/)
- [Vite Documentation](https://vitejs.dev/)
"#;
