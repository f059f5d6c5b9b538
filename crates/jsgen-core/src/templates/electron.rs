//! Electron desktop application

use super::{fill, variant};
use crate::manifest::{pretty_json, PackageManifest, TYPES_NODE_VERSION};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::Electron.source_extension(language);
    let values = [("project_name", project_name), ("ext", ext)];
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/main",
        "src/preload",
        "src/renderer",
        "src/renderer/components",
        "src/renderer/styles",
        "public",
        "build",
    ]);

    tree.file(format!("src/main/main.{ext}"), variant(language, MAIN_JS, MAIN_TS))
        .file(format!("src/preload/preload.{ext}"), variant(language, PRELOAD_JS, PRELOAD_TS))
        .file("src/renderer/index.html", fill(RENDERER_HTML, &values))
        .file(format!("src/renderer/renderer.{ext}"), variant(language, RENDERER_JS, RENDERER_TS))
        .file(
            format!("src/renderer/components/appInfo.{ext}"),
            variant(language, APP_INFO_JS, APP_INFO_TS),
        )
        .file("src/renderer/styles/main.css", RENDERER_CSS);

    tree.file("package.json", manifest(project_name, language).render())
        .file("electron-builder.json", builder_config(project_name, language));
    if language.is_typed() {
        tree.file("tsconfig.json", tsconfig());
    }

    tree.file(".gitignore", GITIGNORE)
        .file("README.md", fill(README, &values));

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let base = PackageManifest::new(project_name)
        .dev_dependencies(&[
            ("electron", "^27.0.0"),
            ("electron-builder", "^24.6.4"),
            ("cross-env", "^7.0.3"),
        ])
        .scripts(&[
            ("dist", "electron-builder"),
            ("dist:win", "electron-builder --win"),
            ("dist:mac", "electron-builder --mac"),
            ("dist:linux", "electron-builder --linux"),
        ]);

    if language.is_typed() {
        base.main("dist/main/main.js")
            .scripts(&[
                ("build", "tsc && npm run copy:assets"),
                ("copy:assets", "copyfiles -u 1 \"src/renderer/**/*.{html,css}\" dist"),
                ("start", "npm run build && electron ."),
                ("dev", "npm run build && cross-env NODE_ENV=development electron ."),
                ("predist", "npm run build"),
            ])
            .dev_dependencies(&[("@types/node", TYPES_NODE_VERSION), ("copyfiles", "^2.4.1")])
            .type_checked(language)
    } else {
        base.main("src/main/main.js").scripts(&[
            ("build", "echo 'No build step needed for JavaScript'"),
            ("start", "electron ."),
            ("dev", "cross-env NODE_ENV=development electron ."),
        ])
    }
}

fn builder_config(project_name: &str, language: Language) -> String {
    let files = if language.is_typed() {
        json!(["dist/**/*", "package.json"])
    } else {
        json!(["src/**/*", "package.json"])
    };
    pretty_json(&json!({
        "appId": format!("com.example.{}", project_name.to_lowercase().replace('_', "-")),
        "productName": project_name,
        "directories": { "output": "release" },
        "files": files,
        "mac": { "category": "public.app-category.utilities", "target": "dmg" },
        "win": { "target": "nsis" },
        "linux": { "target": "AppImage" }
    }))
}

fn tsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "commonjs",
            "lib": ["ES2020", "DOM"],
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "sourceMap": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist", "release"]
    }))
}

const MAIN_JS: &str = r#"
const { app, BrowserWindow, ipcMain } = require('electron');
const path = require('path');

let mainWindow = null;

function createWindow() {
  mainWindow = new BrowserWindow({
    width: 1200,
    height: 800,
    show: false,
    webPreferences: {
      nodeIntegration: false,
      contextIsolation: true,
      preload: path.join(__dirname, '../preload/preload.js')
    }
  });

  mainWindow.loadFile(path.join(__dirname, '../renderer/index.html'));

  if (process.env.NODE_ENV === 'development') {
    mainWindow.webContents.openDevTools();
  }

  // Show window when ready to prevent visual flash
  mainWindow.once('ready-to-show', () => {
    mainWindow.show();
  });

  mainWindow.on('closed', () => {
    mainWindow = null;
  });
}

app.whenReady().then(createWindow);

app.on('window-all-closed', () => {
  // On macOS applications stay active until the user quits explicitly
  if (process.platform !== 'darwin') {
    app.quit();
  }
});

app.on('activate', () => {
  if (BrowserWindow.getAllWindows().length === 0) {
    createWindow();
  }
});

// IPC handlers
ipcMain.handle('app:get-version', () => app.getVersion());
ipcMain.handle('app:get-name', () => app.getName());
ipcMain.handle('app:toggle-devtools', () => {
  if (mainWindow) {
    mainWindow.webContents.toggleDevTools();
  }
});
"#;

const MAIN_TS: &str = r#"
import { app, BrowserWindow, ipcMain } from 'electron';
import * as path from 'path';

let mainWindow: BrowserWindow | null = null;

function createWindow(): void {
  mainWindow = new BrowserWindow({
    width: 1200,
    height: 800,
    show: false,
    webPreferences: {
      nodeIntegration: false,
      contextIsolation: true,
      preload: path.join(__dirname, '../preload/preload.js'),
    },
  });

  mainWindow.loadFile(path.join(__dirname, '../renderer/index.html'));

  if (process.env.NODE_ENV === 'development') {
    mainWindow.webContents.openDevTools();
  }

  // Show window when ready to prevent visual flash
  mainWindow.once('ready-to-show', () => {
    mainWindow?.show();
  });

  mainWindow.on('closed', () => {
    mainWindow = null;
  });
}

app.whenReady().then(createWindow);

app.on('window-all-closed', () => {
  // On macOS applications stay active until the user quits explicitly
  if (process.platform !== 'darwin') {
    app.quit();
  }
});

app.on('activate', () => {
  if (BrowserWindow.getAllWindows().length === 0) {
    createWindow();
  }
});

// IPC handlers
ipcMain.handle('app:get-version', () => app.getVersion());
ipcMain.handle('app:get-name', () => app.getName());
ipcMain.handle('app:toggle-devtools', () => {
  mainWindow?.webContents.toggleDevTools();
});
"#;

const PRELOAD_JS: &str = r#"
const { contextBridge, ipcRenderer } = require('electron');

// Expose a narrow API to the renderer instead of the whole ipcRenderer
contextBridge.exposeInMainWorld('electronAPI', {
  getVersion: () => ipcRenderer.invoke('app:get-version'),
  getName: () => ipcRenderer.invoke('app:get-name'),
  toggleDevTools: () => ipcRenderer.invoke('app:toggle-devtools')
});
"#;

const PRELOAD_TS: &str = r#"
import { contextBridge, ipcRenderer } from 'electron';

// Expose a narrow API to the renderer instead of the whole ipcRenderer
contextBridge.exposeInMainWorld('electronAPI', {
  getVersion: (): Promise<string> => ipcRenderer.invoke('app:get-version'),
  getName: (): Promise<string> => ipcRenderer.invoke('app:get-name'),
  toggleDevTools: (): Promise<void> => ipcRenderer.invoke('app:toggle-devtools'),
});
"#;

const RENDERER_HTML: &str = r#"
<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8" />
    <title>{{project_name}}</title>
    <meta http-equiv="Content-Security-Policy" content="script-src 'self';" />
    <link rel="stylesheet" href="styles/main.css">
  </head>
  <body>
    <div id="root">
      <div class="container">
        <h1>Welcome to {{project_name}}!</h1>
        <p>This is an Electron application created with js-project-generator.</p>
        <div class="info">
          <p><strong>App Name:</strong> <span id="app-name">Loading...</span></p>
          <p><strong>Version:</strong> <span id="app-version">Loading...</span></p>
        </div>
        <div class="actions">
          <button id="reload-btn">Reload</button>
          <button id="devtools-btn">Toggle DevTools</button>
        </div>
      </div>
    </div>
    <script src="components/appInfo.js"></script>
    <script src="renderer.js"></script>
  </body>
</html>
"#;

const APP_INFO_JS: &str = r#"
// Fills the app info panel from the preload API
async function renderAppInfo(nameElement, versionElement) {
  try {
    const name = await window.electronAPI.getName();
    const version = await window.electronAPI.getVersion();

    if (nameElement) nameElement.textContent = name;
    if (versionElement) versionElement.textContent = version;
  } catch (error) {
    console.error('Failed to load app info:', error);
  }
}
"#;

const APP_INFO_TS: &str = r#"
interface ElectronAPI {
  getVersion: () => Promise<string>;
  getName: () => Promise<string>;
  toggleDevTools: () => Promise<void>;
}

interface Window {
  electronAPI: ElectronAPI;
}

// Fills the app info panel from the preload API
async function renderAppInfo(
  nameElement: HTMLElement | null,
  versionElement: HTMLElement | null,
): Promise<void> {
  try {
    const name = await window.electronAPI.getName();
    const version = await window.electronAPI.getVersion();

    if (nameElement) nameElement.textContent = name;
    if (versionElement) versionElement.textContent = version;
  } catch (error) {
    console.error('Failed to load app info:', error);
  }
}
"#;

const RENDERER_JS: &str = r#"
const appNameElement = document.getElementById('app-name');
const appVersionElement = document.getElementById('app-version');
const reloadBtn = document.getElementById('reload-btn');
const devtoolsBtn = document.getElementById('devtools-btn');

if (reloadBtn) {
  reloadBtn.addEventListener('click', () => {
    window.location.reload();
  });
}

if (devtoolsBtn) {
  devtoolsBtn.addEventListener('click', () => {
    window.electronAPI.toggleDevTools();
  });
}

document.addEventListener('DOMContentLoaded', () => {
  renderAppInfo(appNameElement, appVersionElement);
});
"#;

const RENDERER_TS: &str = r#"
const appNameElement = document.getElementById('app-name');
const appVersionElement = document.getElementById('app-version');
const reloadBtn = document.getElementById('reload-btn');
const devtoolsBtn = document.getElementById('devtools-btn');

if (reloadBtn) {
  reloadBtn.addEventListener('click', () => {
    window.location.reload();
  });
}

if (devtoolsBtn) {
  devtoolsBtn.addEventListener('click', () => {
    void window.electronAPI.toggleDevTools();
  });
}

document.addEventListener('DOMContentLoaded', () => {
  void renderAppInfo(appNameElement, appVersionElement);
});
"#;

const RENDERER_CSS: &str = r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: white;
  min-height: 100vh;
}

.container {
  max-width: 800px;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}

h1 {
  font-size: 3rem;
  margin-bottom: 1rem;
}

p {
  font-size: 1.2rem;
  margin-bottom: 2rem;
  line-height: 1.6;
}

.info {
  background: rgba(255, 255, 255, 0.1);
  padding: 2rem;
  border-radius: 10px;
  margin: 2rem 0;
}

.info p {
  margin-bottom: 1rem;
  font-size: 1.1rem;
}

.info strong {
  color: #ffd700;
}

.actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

button {
  background: rgba(255, 255, 255, 0.2);
  border: 2px solid rgba(255, 255, 255, 0.3);
  color: white;
  padding: 0.75rem 1.5rem;
  border-radius: 5px;
  cursor: pointer;
  font-size: 1rem;
}

button:hover {
  background: rgba(255, 255, 255, 0.3);
}

@media (max-width: 768px) {
  .actions {
    flex-direction: column;
    align-items: center;
  }
}
"#;

const GITIGNORE: &str = r#"
# Dependencies
node_modules/

# Build output
dist/
release/

# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Coverage
coverage/

# dotenv environment variables file
.env
.env.test

# OS generated files
.DS_Store
Thumbs.db
"#;

const README: &str = r#"
# {{project_name}}

An [Electron](https://www.electronjs.org/) application created with js-project-generator.

## Getting Started

```bash
npm install
npm run dev
```

## Packaging

```bash
# For all platforms
npm run dist

# For specific platforms
npm run dist:win
npm run dist:mac
npm run dist:linux
```

Installers are written to `release/`.

## Project Structure

```
src/
├── main/           # Main process
│   └── main.{{ext}}
├── preload/        # Preload script exposing the IPC bridge
│   └── preload.{{ext}}
└── renderer/       # Renderer (web page)
    ├── index.html
    ├── renderer.{{ext}}
    ├── components/
    └── styles/
```

## License

MIT
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_entry_is_compiled_main() {
        let tree = build_file_tree("desk", Language::TypeScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert_eq!(manifest.main, "dist/main/main.js");
        assert!(manifest.scripts["start"].contains("npm run build"));
        assert!(manifest.dev_dependencies.contains_key("typescript"));
        assert!(tree.contains_file("src/preload/preload.ts"));
    }

    #[test]
    fn test_untyped_runs_sources_directly() {
        let tree = build_file_tree("desk", Language::JavaScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert_eq!(manifest.main, "src/main/main.js");
        assert_eq!(manifest.scripts["start"], "electron .");
        assert!(!tree.contains_file("tsconfig.json"));
    }

    #[test]
    fn test_builder_config_uses_project_name() {
        let tree = build_file_tree("My_Desk", Language::JavaScript);
        let value: serde_json::Value =
            serde_json::from_str(&tree.files["electron-builder.json"]).unwrap();
        assert_eq!(value["productName"], "My_Desk");
        assert_eq!(value["appId"], "com.example.my-desk");
    }
}
