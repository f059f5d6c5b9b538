//! React Native mobile application

use super::{fill, variant};
use crate::manifest::{pretty_json, PackageManifest};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::ReactNative.source_extension(language);
    let values = [("project_name", project_name), ("ext", ext)];
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/components",
        "src/screens",
        "src/navigation",
        "src/services",
        "src/utils",
        "src/assets",
        "src/assets/images",
        "src/assets/icons",
        "android",
        "ios",
    ]);

    tree.file(format!("App.{ext}"), variant(language, APP_JS, APP_TS))
        .file(format!("index.{ext}"), INDEX)
        .file(format!("src/components/Header.{ext}"), variant(language, HEADER_JS, HEADER_TS))
        .file(
            format!("src/screens/HomeScreen.{ext}"),
            fill(variant(language, HOME_SCREEN_JS, HOME_SCREEN_TS), &values),
        )
        .file(
            format!("src/navigation/AppNavigator.{ext}"),
            variant(language, NAVIGATOR_JS, NAVIGATOR_TS),
        )
        .file(format!("src/services/api.{ext}"), variant(language, API_JS, API_TS))
        .file(format!("src/utils/helpers.{ext}"), variant(language, HELPERS_JS, HELPERS_TS));

    tree.file("package.json", manifest(project_name, language).render())
        .file("app.json", pretty_json(&json!({ "name": project_name, "displayName": project_name })))
        .file("metro.config.js", METRO_CONFIG)
        .file("babel.config.js", BABEL_CONFIG)
        .file("react-native.config.js", RN_CONFIG)
        .file(".eslintrc.js", ESLINT_CONFIG);

    if language.is_typed() {
        tree.file(
            "tsconfig.json",
            pretty_json(&json!({ "extends": "@tsconfig/react-native/tsconfig.json" })),
        );
    }

    tree.file(".gitignore", GITIGNORE)
        .file("README.md", fill(README, &values));

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let ext = Archetype::ReactNative.source_extension(language);
    PackageManifest::new(project_name)
        .main(format!("index.{ext}"))
        .scripts(&[
            ("android", "react-native run-android"),
            ("ios", "react-native run-ios"),
            ("start", "react-native start"),
            ("test", "jest"),
            ("lint", "eslint ."),
        ])
        .dependencies(&[
            ("react", "18.2.0"),
            ("react-native", "0.72.6"),
            ("@react-navigation/native", "^6.1.9"),
            ("@react-navigation/native-stack", "^6.9.17"),
            ("react-native-screens", "^3.27.0"),
            ("react-native-safe-area-context", "^4.7.4"),
        ])
        .dev_dependencies(&[
            ("@babel/core", "^7.20.0"),
            ("@babel/preset-env", "^7.20.0"),
            ("@babel/runtime", "^7.20.0"),
            ("@react-native/eslint-config", "^0.72.2"),
            ("@react-native/metro-config", "^0.72.11"),
            ("babel-jest", "^29.2.1"),
            ("eslint", "^8.19.0"),
            ("jest", "^29.2.1"),
            ("metro-react-native-babel-preset", "0.76.8"),
            ("react-test-renderer", "18.2.0"),
        ])
        .typed_dev_dependencies(
            language,
            &[
                ("@tsconfig/react-native", "^3.0.0"),
                ("@types/react", "^18.0.24"),
                ("@types/react-test-renderer", "^18.0.0"),
            ],
        )
        .type_checked(language)
}

const INDEX: &str = r#"
import { AppRegistry } from 'react-native';
import App from './App';
import { name as appName } from './app.json';

AppRegistry.registerComponent(appName, () => App);
"#;

const APP_JS: &str = r#"
import React from 'react';
import { StatusBar } from 'react-native';
import { NavigationContainer } from '@react-navigation/native';
import AppNavigator from './src/navigation/AppNavigator';

export default function App() {
  return (
    <NavigationContainer>
      <StatusBar barStyle="dark-content" />
      <AppNavigator />
    </NavigationContainer>
  );
}
"#;

const APP_TS: &str = r#"
import React from 'react';
import { StatusBar } from 'react-native';
import { NavigationContainer } from '@react-navigation/native';
import AppNavigator from './src/navigation/AppNavigator';

export default function App(): React.JSX.Element {
  return (
    <NavigationContainer>
      <StatusBar barStyle="dark-content" />
      <AppNavigator />
    </NavigationContainer>
  );
}
"#;

const HEADER_JS: &str = r#"
import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

export default function Header({ title }) {
  return (
    <View style={styles.header}>
      <Text style={styles.title}>{title}</Text>
    </View>
  );
}

const styles = StyleSheet.create({
  header: {
    backgroundColor: '#282c34',
    paddingVertical: 16,
    paddingHorizontal: 20,
  },
  title: {
    color: '#ffffff',
    fontSize: 20,
    fontWeight: 'bold',
  },
});
"#;

const HEADER_TS: &str = r#"
import React from 'react';
import { View, Text, StyleSheet } from 'react-native';

interface HeaderProps {
  title: string;
}

export default function Header({ title }: HeaderProps): React.JSX.Element {
  return (
    <View style={styles.header}>
      <Text style={styles.title}>{title}</Text>
    </View>
  );
}

const styles = StyleSheet.create({
  header: {
    backgroundColor: '#282c34',
    paddingVertical: 16,
    paddingHorizontal: 20,
  },
  title: {
    color: '#ffffff',
    fontSize: 20,
    fontWeight: 'bold',
  },
});
"#;

const HOME_SCREEN_JS: &str = r#"
import React, { useState } from 'react';
import { SafeAreaView, View, Text, TouchableOpacity, StyleSheet } from 'react-native';
import Header from '../components/Header';
import { formatCount } from '../utils/helpers';

export default function HomeScreen() {
  const [count, setCount] = useState(0);

  return (
    <SafeAreaView style={styles.container}>
      <Header title="{{project_name}}" />
      <View style={styles.content}>
        <Text style={styles.welcome}>Welcome to React Native!</Text>
        <Text style={styles.counter}>{formatCount(count)}</Text>
        <TouchableOpacity style={styles.button} onPress={() => setCount(count + 1)}>
          <Text style={styles.buttonText}>Tap me</Text>
        </TouchableOpacity>
      </View>
    </SafeAreaView>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#f5f5f5',
  },
  content: {
    flex: 1,
    alignItems: 'center',
    justifyContent: 'center',
    padding: 20,
  },
  welcome: {
    fontSize: 22,
    fontWeight: '600',
    marginBottom: 16,
  },
  counter: {
    fontSize: 18,
    marginBottom: 24,
  },
  button: {
    backgroundColor: '#61dafb',
    paddingVertical: 12,
    paddingHorizontal: 32,
    borderRadius: 8,
  },
  buttonText: {
    fontSize: 16,
    fontWeight: '600',
    color: '#282c34',
  },
});
"#;

const HOME_SCREEN_TS: &str = r#"
import React, { useState } from 'react';
import { SafeAreaView, View, Text, TouchableOpacity, StyleSheet } from 'react-native';
import Header from '../components/Header';
import { formatCount } from '../utils/helpers';

export default function HomeScreen(): React.JSX.Element {
  const [count, setCount] = useState<number>(0);

  return (
    <SafeAreaView style={styles.container}>
      <Header title="{{project_name}}" />
      <View style={styles.content}>
        <Text style={styles.welcome}>Welcome to React Native!</Text>
        <Text style={styles.counter}>{formatCount(count)}</Text>
        <TouchableOpacity style={styles.button} onPress={() => setCount(count + 1)}>
          <Text style={styles.buttonText}>Tap me</Text>
        </TouchableOpacity>
      </View>
    </SafeAreaView>
  );
}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    backgroundColor: '#f5f5f5',
  },
  content: {
    flex: 1,
    alignItems: 'center',
    justifyContent: 'center',
    padding: 20,
  },
  welcome: {
    fontSize: 22,
    fontWeight: '600',
    marginBottom: 16,
  },
  counter: {
    fontSize: 18,
    marginBottom: 24,
  },
  button: {
    backgroundColor: '#61dafb',
    paddingVertical: 12,
    paddingHorizontal: 32,
    borderRadius: 8,
  },
  buttonText: {
    fontSize: 16,
    fontWeight: '600',
    color: '#282c34',
  },
});
"#;

const NAVIGATOR_JS: &str = r#"
import React from 'react';
import { createNativeStackNavigator } from '@react-navigation/native-stack';
import HomeScreen from '../screens/HomeScreen';

const Stack = createNativeStackNavigator();

export default function AppNavigator() {
  return (
    <Stack.Navigator screenOptions={{ headerShown: false }}>
      <Stack.Screen name="Home" component={HomeScreen} />
    </Stack.Navigator>
  );
}
"#;

const NAVIGATOR_TS: &str = r#"
import React from 'react';
import { createNativeStackNavigator } from '@react-navigation/native-stack';
import HomeScreen from '../screens/HomeScreen';

export type RootStackParamList = {
  Home: undefined;
};

const Stack = createNativeStackNavigator<RootStackParamList>();

export default function AppNavigator(): React.JSX.Element {
  return (
    <Stack.Navigator screenOptions={{ headerShown: false }}>
      <Stack.Screen name="Home" component={HomeScreen} />
    </Stack.Navigator>
  );
}
"#;

const API_JS: &str = r#"
const BASE_URL = 'https://api.example.com';

async function request(path, options = {}) {
  const response = await fetch(`${BASE_URL}${path}`, {
    headers: { 'Content-Type': 'application/json' },
    ...options,
  });

  if (!response.ok) {
    throw new Error(`Request failed with status ${response.status}`);
  }

  return response.json();
}

export const api = {
  get: (path) => request(path),
  post: (path, body) => request(path, { method: 'POST', body: JSON.stringify(body) }),
};
"#;

const API_TS: &str = r#"
const BASE_URL = 'https://api.example.com';

async function request<T>(path: string, options: RequestInit = {}): Promise<T> {
  const response = await fetch(`${BASE_URL}${path}`, {
    headers: { 'Content-Type': 'application/json' },
    ...options,
  });

  if (!response.ok) {
    throw new Error(`Request failed with status ${response.status}`);
  }

  return response.json() as Promise<T>;
}

export const api = {
  get: <T,>(path: string): Promise<T> => request<T>(path),
  post: <T,>(path: string, body: unknown): Promise<T> =>
    request<T>(path, { method: 'POST', body: JSON.stringify(body) }),
};
"#;

const HELPERS_JS: &str = r#"
export function formatCount(count) {
  return count === 1 ? 'Tapped 1 time' : `Tapped ${count} times`;
}

export function capitalize(value) {
  return value.charAt(0).toUpperCase() + value.slice(1);
}
"#;

const HELPERS_TS: &str = r#"
export function formatCount(count: number): string {
  return count === 1 ? 'Tapped 1 time' : `Tapped ${count} times`;
}

export function capitalize(value: string): string {
  return value.charAt(0).toUpperCase() + value.slice(1);
}
"#;

const METRO_CONFIG: &str = r#"
const { getDefaultConfig, mergeConfig } = require('@react-native/metro-config');

/**
 * Metro configuration
 * https://facebook.github.io/metro/docs/configuration
 *
 * @type {import('metro-config').MetroConfig}
 */
const config = {};

module.exports = mergeConfig(getDefaultConfig(__dirname), config);
"#;

const BABEL_CONFIG: &str = r#"
module.exports = {
  presets: ['module:metro-react-native-babel-preset'],
};
"#;

const RN_CONFIG: &str = r#"
module.exports = {
  project: {
    ios: {},
    android: {},
  },
  assets: ['./src/assets/'],
};
"#;

const ESLINT_CONFIG: &str = r#"
module.exports = {
  root: true,
  extends: '@react-native',
};
"#;

const GITIGNORE: &str = r#"
# OSX
.DS_Store

# Xcode
build/
*.pbxuser
xcuserdata
*.xccheckout
*.xcuserstate
ios/Pods/

# Android/IntelliJ
build/
.idea
.gradle
local.properties
*.iml
*.hprof
.cxx/

# node.js
node_modules/
npm-debug.log
yarn-error.log

# Bundle artifact
*.jsbundle

# Metro
.metro-health-check*

# Testing
coverage/
"#;

const README: &str = r#"
# {{project_name}}

A [React Native](https://reactnative.dev/) application created with js-project-generator.

## Getting Started

```bash
npm install

# Start Metro
npm start

# In another terminal
npm run android
# or
npm run ios
```

The `android/` and `ios/` folders are placeholders. Generate the native projects with the React Native CLI before running on a device.

## Project Structure

```
App.{{ext}}            # Root component
index.{{ext}}          # Entry point registering the app
src/
├── components/     # Reusable components
├── screens/        # Screen components
├── navigation/     # Navigation setup
├── services/       # API calls
├── utils/          # Helpers
└── assets/         # Images and icons
```

## License

MIT
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entry_files_follow_language() {
        let tree = build_file_tree("mobile", Language::TypeScript);
        assert!(tree.contains_file("App.tsx"));
        assert!(tree.contains_file("index.tsx"));
        assert!(tree.contains_file("tsconfig.json"));

        let tree = build_file_tree("mobile", Language::JavaScript);
        assert!(tree.contains_file("App.jsx"));
        assert!(tree.contains_file("index.jsx"));
        assert!(!tree.contains_file("tsconfig.json"));
    }

    #[test]
    fn test_app_json_registers_project_name() {
        let tree = build_file_tree("mobile", Language::JavaScript);
        let value: serde_json::Value = serde_json::from_str(&tree.files["app.json"]).unwrap();
        assert_eq!(value["name"], "mobile");
        assert!(tree.files["index.jsx"].contains("./app.json"));
    }

    #[test]
    fn test_metro_start_script() {
        let tree = build_file_tree("mobile", Language::TypeScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert_eq!(manifest.scripts["start"], "react-native start");
        assert!(manifest.scripts.contains_key("typecheck"));
        assert!(manifest.dev_dependencies.contains_key("@types/react"));
        assert_eq!(manifest.main, "index.tsx");
        assert!(tree.contains_file(&manifest.main));
    }
}
