//! Next.js project using the App Router

use super::{fill, variant};
use crate::manifest::{pretty_json, PackageManifest, TYPES_NODE_VERSION};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let ext = Archetype::NextJs.source_extension(language);
    let values = [("project_name", project_name), ("ext", ext)];
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/components",
        "src/lib",
        "src/styles",
        "public",
        "src/app",
        "src/app/api",
        "src/app/api/hello",
    ]);

    tree.file(format!("src/app/layout.{ext}"), fill(variant(language, LAYOUT_JS, LAYOUT_TS), &values))
        .file(format!("src/app/page.{ext}"), fill(PAGE, &values))
        .file("src/app/globals.css", GLOBALS_CSS)
        .file(format!("src/app/api/hello/route.{ext}"), variant(language, ROUTE_JS, ROUTE_TS))
        .file(format!("src/components/Header.{ext}"), fill(HEADER, &values))
        .file(format!("src/components/Footer.{ext}"), fill(FOOTER, &values))
        .file(format!("src/lib/utils.{ext}"), variant(language, UTILS_JS, UTILS_TS));

    tree.file("package.json", manifest(project_name, language).render())
        .file("next.config.js", NEXT_CONFIG)
        .file("tailwind.config.js", TAILWIND_CONFIG)
        .file("postcss.config.js", POSTCSS_CONFIG)
        .file(".eslintrc.json", pretty_json(&json!({ "extends": "next/core-web-vitals" })));

    if language.is_typed() {
        tree.file("tsconfig.json", tsconfig());
    } else {
        tree.file("jsconfig.json", jsconfig());
    }

    tree.file(".gitignore", GITIGNORE)
        .file("README.md", fill(README, &values));

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    let ext = Archetype::NextJs.source_extension(language);
    PackageManifest::new(project_name)
        .main(format!("src/app/layout.{ext}"))
        .scripts(&[
            ("dev", "next dev"),
            ("build", "next build"),
            ("start", "next start"),
            ("lint", "next lint"),
        ])
        .dependencies(&[
            ("next", "^14.0.0"),
            ("react", "^18.2.0"),
            ("react-dom", "^18.2.0"),
            ("clsx", "^2.0.0"),
            ("tailwind-merge", "^2.0.0"),
        ])
        .dev_dependencies(&[
            ("eslint", "^8.54.0"),
            ("eslint-config-next", "^14.0.0"),
            ("tailwindcss", "^3.3.5"),
            ("postcss", "^8.4.31"),
            ("autoprefixer", "^10.4.16"),
        ])
        .typed_dev_dependencies(
            language,
            &[
                ("@types/node", TYPES_NODE_VERSION),
                ("@types/react", "^18.2.0"),
                ("@types/react-dom", "^18.2.0"),
            ],
        )
        .type_checked(language)
}

fn tsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "target": "es5",
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./src/*"] }
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"]
    }))
}

fn jsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "paths": { "@/*": ["./src/*"] }
        }
    }))
}

const NEXT_CONFIG: &str = r#"
/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
  // Add your Next.js configuration here
}

module.exports = nextConfig
"#;

const TAILWIND_CONFIG: &str = r#"
/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./src/**/*.{js,jsx,ts,tsx}'],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

const POSTCSS_CONFIG: &str = r#"
module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

const LAYOUT_JS: &str = r#"
import './globals.css'
import Header from '../components/Header'
import Footer from '../components/Footer'

export const metadata = {
  title: '{{project_name}}',
  description: 'Created with js-project-generator',
}

export default function RootLayout({ children }) {
  return (
    <html lang="en">
      <body>
        <Header />
        <main className="min-h-screen">
          {children}
        </main>
        <Footer />
      </body>
    </html>
  )
}
"#;

const LAYOUT_TS: &str = r#"
import type { Metadata } from 'next'
import type { ReactNode } from 'react'
import './globals.css'
import Header from '../components/Header'
import Footer from '../components/Footer'

export const metadata: Metadata = {
  title: '{{project_name}}',
  description: 'Created with js-project-generator',
}

export default function RootLayout({
  children,
}: {
  children: ReactNode
}) {
  return (
    <html lang="en">
      <body>
        <Header />
        <main className="min-h-screen">
          {children}
        </main>
        <Footer />
      </body>
    </html>
  )
}
"#;

const PAGE: &str = r#"
export default function Home() {
  return (
    <div className="container mx-auto px-4 py-8">
      <h1 className="text-4xl font-bold text-center mb-8">
        Welcome to Next.js!
      </h1>
      <p className="text-center text-lg text-gray-600">
        Get started by editing src/app/page.{{ext}}
      </p>
      <div className="mt-8 text-center">
        <a
          href="https://nextjs.org/docs"
          target="_blank"
          rel="noopener noreferrer"
          className="text-blue-600 hover:text-blue-800 underline"
        >
          Learn more about Next.js →
        </a>
      </div>
    </div>
  )
}
"#;

const GLOBALS_CSS: &str = r#"
@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  --foreground-rgb: 0, 0, 0;
  --background-start-rgb: 214, 219, 220;
  --background-end-rgb: 255, 255, 255;
}

@media (prefers-color-scheme: dark) {
  :root {
    --foreground-rgb: 255, 255, 255;
    --background-start-rgb: 0, 0, 0;
    --background-end-rgb: 0, 0, 0;
  }
}

body {
  color: rgb(var(--foreground-rgb));
  background: linear-gradient(
      to bottom,
      transparent,
      rgb(var(--background-end-rgb))
    )
    rgb(var(--background-start-rgb));
}
"#;

const ROUTE_JS: &str = r#"
import { NextResponse } from 'next/server'

export async function GET() {
  return NextResponse.json({
    message: 'Hello from Next.js API!',
    timestamp: new Date().toISOString(),
  })
}

export async function POST(request) {
  const body = await request.json()
  return NextResponse.json({
    message: 'Data received successfully!',
    data: body,
    timestamp: new Date().toISOString(),
  })
}
"#;

const ROUTE_TS: &str = r#"
import { NextResponse } from 'next/server'

export async function GET() {
  return NextResponse.json({
    message: 'Hello from Next.js API!',
    timestamp: new Date().toISOString(),
  })
}

export async function POST(request: Request) {
  const body: unknown = await request.json()
  return NextResponse.json({
    message: 'Data received successfully!',
    data: body,
    timestamp: new Date().toISOString(),
  })
}
"#;

const HEADER: &str = r#"
import Link from 'next/link'

export default function Header() {
  return (
    <header className="bg-white shadow-sm border-b">
      <div className="container mx-auto px-4 py-4">
        <nav className="flex items-center justify-between">
          <div className="text-xl font-bold text-gray-900">
            {{project_name}}
          </div>
          <div className="space-x-4">
            <Link href="/" className="text-gray-600 hover:text-gray-900">
              Home
            </Link>
            <Link href="/about" className="text-gray-600 hover:text-gray-900">
              About
            </Link>
          </div>
        </nav>
      </div>
    </header>
  )
}
"#;

const FOOTER: &str = r#"
export default function Footer() {
  return (
    <footer className="bg-gray-100 border-t">
      <div className="container mx-auto px-4 py-8">
        <div className="text-center text-gray-600">
          <p>&copy; {{project_name}}. All rights reserved.</p>
          <p className="mt-2 text-sm">
            Built with Next.js and js-project-generator
          </p>
        </div>
      </div>
    </footer>
  )
}
"#;

const UTILS_JS: &str = r#"
import { clsx } from 'clsx'
import { twMerge } from 'tailwind-merge'

export function cn(...inputs) {
  return twMerge(clsx(inputs))
}

// Add your utility functions here
export function formatDate(date) {
  return new Intl.DateTimeFormat('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  }).format(date)
}
"#;

const UTILS_TS: &str = r#"
import { type ClassValue, clsx } from 'clsx'
import { twMerge } from 'tailwind-merge'

export function cn(...inputs: ClassValue[]): string {
  return twMerge(clsx(inputs))
}

// Add your utility functions here
export function formatDate(date: Date): string {
  return new Intl.DateTimeFormat('en-US', {
    year: 'numeric',
    month: 'long',
    day: 'numeric',
  }).format(date)
}
"#;

const GITIGNORE: &str = r#"
# See https://help.github.com/articles/ignoring-files/ for more about ignoring files.

# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
"#;

const README: &str = r#"
# {{project_name}}

This is a [Next.js](https://nextjs.org/) project bootstrapped with js-project-generator.

## Getting Started

Install the dependencies, then run the development server:

```bash
npm install
npm run dev
```

Open [http://localhost:3000](http://localhost:3000) with your browser to see the result.

You can start editing the page by modifying `src/app/page.{{ext}}`. The page auto-updates as you edit the file.

## Available Scripts

- `npm run dev` - Start the development server
- `npm run build` - Build for production
- `npm start` - Serve the production build
- `npm run lint` - Run ESLint

## Learn More

- [Next.js Documentation](https://nextjs.org/docs) - learn about Next.js features and API.
- [Learn Next.js](https://nextjs.org/learn) - an interactive Next.js tutorial.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_router_layout() {
        let tree = build_file_tree("site", Language::TypeScript);
        assert!(tree.contains_file("src/app/page.tsx"));
        assert!(tree.contains_file("src/app/api/hello/route.tsx"));
        assert!(tree.contains_dir("src/app/api/hello"));
        assert!(tree.contains_file("tsconfig.json"));
        assert!(!tree.contains_file("jsconfig.json"));
    }

    #[test]
    fn test_javascript_uses_jsconfig() {
        let tree = build_file_tree("site", Language::JavaScript);
        assert!(tree.contains_file("jsconfig.json"));
        assert!(tree.contains_file("src/app/layout.jsx"));
        assert!(tree.files["src/app/page.jsx"].contains("src/app/page.jsx"));
    }

    #[test]
    fn test_start_script_serves_build() {
        let tree = build_file_tree("site", Language::JavaScript);
        let manifest: PackageManifest = serde_json::from_str(&tree.files["package.json"]).unwrap();
        assert_eq!(manifest.scripts["start"], "next start");
        assert_eq!(manifest.main, "src/app/layout.jsx");
        assert!(tree.contains_file(&manifest.main));
    }
}
