//! NestJS project
//!
//! NestJS is TypeScript only: the requested language is ignored and every source
//! file is emitted with the typed extension.

use super::fill;
use crate::manifest::{pretty_json, PackageManifest, TYPES_NODE_VERSION, TYPESCRIPT_VERSION};
use crate::project::{Archetype, Language};
use crate::tree::FileTree;
use serde_json::json;

pub fn build_file_tree(project_name: &str, language: Language) -> FileTree {
    let language = Archetype::Nest.effective_language(language);
    let ext = Archetype::Nest.source_extension(language);
    let mut tree = FileTree::new();

    tree.dirs([
        "src",
        "src/controllers",
        "src/services",
        "src/modules",
        "src/dto",
        "src/entities",
        "src/config",
        "src/common",
        "src/common/decorators",
        "src/common/guards",
        "src/common/interceptors",
        "test",
    ]);

    let sources = [
        ("src/main", MAIN),
        ("src/app.module", APP_MODULE),
        ("src/controllers/app.controller", APP_CONTROLLER),
        ("src/controllers/app.controller.spec", APP_CONTROLLER_SPEC),
        ("src/services/app.service", APP_SERVICE),
        ("src/dto/create-example.dto", CREATE_EXAMPLE_DTO),
        ("src/entities/example.entity", EXAMPLE_ENTITY),
        ("src/config/database.config", DATABASE_CONFIG),
        ("src/common/decorators/api-response.decorator", API_RESPONSE_DECORATOR),
        ("src/common/guards/api-key.guard", API_KEY_GUARD),
        ("src/common/interceptors/logging.interceptor", LOGGING_INTERCEPTOR),
        ("test/app.e2e-spec", E2E_TEST),
    ];
    for (stem, content) in sources {
        tree.file(format!("{stem}.{ext}"), content);
    }

    tree.file("test/jest-e2e.json", jest_e2e_config())
        .file("package.json", manifest(project_name, language).render())
        .file("tsconfig.json", tsconfig())
        .file("tsconfig.build.json", tsconfig_build())
        .file("nest-cli.json", nest_cli_config())
        .file("jest.config.js", JEST_CONFIG)
        .file(".eslintrc.js", ESLINT_CONFIG)
        .file(".prettierrc", pretty_json(&json!({ "singleQuote": true, "trailingComma": "all" })))
        .file(".env.example", ENV_EXAMPLE)
        .file(".gitignore", GITIGNORE)
        .file("README.md", fill(README, &[("project_name", project_name)]));

    tree
}

fn manifest(project_name: &str, language: Language) -> PackageManifest {
    PackageManifest::new(project_name)
        .main("dist/main.js")
        .scripts(&[
            ("build", "nest build"),
            ("format", "prettier --write \"src/**/*.ts\" \"test/**/*.ts\""),
            ("start", "nest start"),
            ("start:dev", "nest start --watch"),
            ("start:debug", "nest start --debug --watch"),
            ("start:prod", "node dist/main"),
            ("lint", "eslint \"{src,apps,libs,test}/**/*.ts\" --fix"),
            ("test", "jest"),
            ("test:watch", "jest --watch"),
            ("test:cov", "jest --coverage"),
            ("test:e2e", "jest --config ./test/jest-e2e.json"),
        ])
        .dependencies(&[
            ("@nestjs/common", "^10.0.0"),
            ("@nestjs/core", "^10.0.0"),
            ("@nestjs/platform-express", "^10.0.0"),
            ("@nestjs/swagger", "^7.0.0"),
            ("@nestjs/typeorm", "^10.0.0"),
            ("class-transformer", "^0.5.1"),
            ("class-validator", "^0.14.0"),
            ("pg", "^8.11.3"),
            ("reflect-metadata", "^0.1.13"),
            ("rxjs", "^7.8.1"),
            ("typeorm", "^0.3.17"),
        ])
        .dev_dependencies(&[
            ("@nestjs/cli", "^10.0.0"),
            ("@nestjs/schematics", "^10.0.0"),
            ("@nestjs/testing", "^10.0.0"),
            ("@types/express", "^4.17.21"),
            ("@types/jest", "^29.5.2"),
            ("@types/node", TYPES_NODE_VERSION),
            ("@types/supertest", "^2.0.12"),
            ("@typescript-eslint/eslint-plugin", "^6.10.0"),
            ("@typescript-eslint/parser", "^6.10.0"),
            ("eslint", "^8.54.0"),
            ("eslint-config-prettier", "^9.0.0"),
            ("eslint-plugin-prettier", "^5.0.1"),
            ("jest", "^29.5.0"),
            ("prettier", "^3.1.0"),
            ("source-map-support", "^0.5.21"),
            ("supertest", "^6.3.3"),
            ("ts-jest", "^29.1.0"),
            ("ts-loader", "^9.4.3"),
            ("ts-node", "^10.9.1"),
            ("tsconfig-paths", "^4.2.1"),
            ("typescript", TYPESCRIPT_VERSION),
        ])
        .type_checked(language)
}

fn tsconfig() -> String {
    pretty_json(&json!({
        "compilerOptions": {
            "module": "commonjs",
            "declaration": true,
            "removeComments": true,
            "emitDecoratorMetadata": true,
            "experimentalDecorators": true,
            "allowSyntheticDefaultImports": true,
            "target": "ES2021",
            "sourceMap": true,
            "outDir": "./dist",
            "baseUrl": "./",
            "incremental": true,
            "skipLibCheck": true,
            "strictNullChecks": false,
            "noImplicitAny": false,
            "strictBindCallApply": false,
            "forceConsistentCasingInFileNames": false,
            "noFallthroughCasesInSwitch": false
        }
    }))
}

fn tsconfig_build() -> String {
    pretty_json(&json!({
        "extends": "./tsconfig.json",
        "exclude": ["node_modules", "test", "dist", "**/*spec.ts"]
    }))
}

fn nest_cli_config() -> String {
    pretty_json(&json!({
        "$schema": "https://json.schemastore.org/nest-cli",
        "collection": "@nestjs/schematics",
        "sourceRoot": "src",
        "entryFile": "main"
    }))
}

fn jest_e2e_config() -> String {
    pretty_json(&json!({
        "moduleFileExtensions": ["js", "json", "ts"],
        "rootDir": ".",
        "testEnvironment": "node",
        "testRegex": ".e2e-spec.ts$",
        "transform": { "^.+\\.(t|j)s$": "ts-jest" }
    }))
}

const MAIN: &str = r#"
import { NestFactory } from '@nestjs/core';
import { ValidationPipe } from '@nestjs/common';
import { DocumentBuilder, SwaggerModule } from '@nestjs/swagger';
import { AppModule } from './app.module';
import { LoggingInterceptor } from './common/interceptors/logging.interceptor';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);

  app.enableCors();

  app.useGlobalPipes(
    new ValidationPipe({
      whitelist: true,
      forbidNonWhitelisted: true,
      transform: true,
    }),
  );
  app.useGlobalInterceptors(new LoggingInterceptor());

  const config = new DocumentBuilder()
    .setTitle('NestJS API')
    .setDescription('The NestJS API description')
    .setVersion('1.0')
    .addBearerAuth()
    .build();
  const document = SwaggerModule.createDocument(app, config);
  SwaggerModule.setup('api', app, document);

  const port = process.env.PORT || 3000;
  await app.listen(port);
  console.log(`Application is running on: http://localhost:${port}`);
  console.log(`Swagger documentation: http://localhost:${port}/api`);
}
bootstrap();
"#;

const APP_MODULE: &str = r#"
import { Module } from '@nestjs/common';
import { AppController } from './controllers/app.controller';
import { AppService } from './services/app.service';

@Module({
  imports: [],
  controllers: [AppController],
  providers: [AppService],
})
export class AppModule {}
"#;

const APP_CONTROLLER: &str = r#"
import { Controller, Get } from '@nestjs/common';
import { ApiTags, ApiOperation, ApiResponse } from '@nestjs/swagger';
import { AppService } from '../services/app.service';

@ApiTags('app')
@Controller()
export class AppController {
  constructor(private readonly appService: AppService) {}

  @Get()
  @ApiOperation({ summary: 'Get hello message' })
  @ApiResponse({ status: 200, description: 'Returns a hello message' })
  getHello(): string {
    return this.appService.getHello();
  }

  @Get('health')
  @ApiOperation({ summary: 'Health check endpoint' })
  @ApiResponse({ status: 200, description: 'Service is healthy' })
  getHealth() {
    return {
      status: 'ok',
      timestamp: new Date().toISOString(),
      uptime: process.uptime(),
    };
  }
}
"#;

const APP_CONTROLLER_SPEC: &str = r#"
import { Test, TestingModule } from '@nestjs/testing';
import { AppController } from './app.controller';
import { AppService } from '../services/app.service';

describe('AppController', () => {
  let appController: AppController;

  beforeEach(async () => {
    const app: TestingModule = await Test.createTestingModule({
      controllers: [AppController],
      providers: [AppService],
    }).compile();

    appController = app.get<AppController>(AppController);
  });

  it('should return "Hello World!"', () => {
    expect(appController.getHello()).toBe('Hello World!');
  });
});
"#;

const APP_SERVICE: &str = r#"
import { Injectable } from '@nestjs/common';

@Injectable()
export class AppService {
  getHello(): string {
    return 'Hello World!';
  }
}
"#;

const CREATE_EXAMPLE_DTO: &str = r#"
import { ApiProperty } from '@nestjs/swagger';
import { IsString, IsNotEmpty, IsOptional } from 'class-validator';

export class CreateExampleDto {
  @ApiProperty({
    description: 'The name of the example',
    example: 'Example Name',
  })
  @IsString()
  @IsNotEmpty()
  name: string;

  @ApiProperty({
    description: 'The description of the example',
    example: 'This is an example description',
    required: false,
  })
  @IsString()
  @IsOptional()
  description?: string;
}
"#;

const EXAMPLE_ENTITY: &str = r#"
import { Entity, Column, PrimaryGeneratedColumn, CreateDateColumn, UpdateDateColumn } from 'typeorm';

@Entity()
export class Example {
  @PrimaryGeneratedColumn()
  id: number;

  @Column()
  name: string;

  @Column({ nullable: true })
  description: string;

  @CreateDateColumn()
  createdAt: Date;

  @UpdateDateColumn()
  updatedAt: Date;
}
"#;

const DATABASE_CONFIG: &str = r#"
import { TypeOrmModuleOptions } from '@nestjs/typeorm';

export const databaseConfig: TypeOrmModuleOptions = {
  type: 'postgres',
  host: process.env.DB_HOST || 'localhost',
  port: parseInt(process.env.DB_PORT ?? '5432', 10),
  username: process.env.DB_USERNAME || 'postgres',
  password: process.env.DB_PASSWORD || 'password',
  database: process.env.DB_NAME || 'nestjs_db',
  entities: [__dirname + '/../**/*.entity{.ts,.js}'],
  synchronize: process.env.NODE_ENV !== 'production',
  logging: process.env.NODE_ENV === 'development',
};
"#;

const API_RESPONSE_DECORATOR: &str = r#"
import { applyDecorators, Type } from '@nestjs/common';
import { ApiExtraModels, ApiResponse, getSchemaPath } from '@nestjs/swagger';

export const ApiResponseWrapper = <TModel extends Type<unknown>>(
  model: TModel,
  status = 200,
  description?: string,
) => {
  return applyDecorators(
    ApiExtraModels(model),
    ApiResponse({
      status,
      description,
      schema: {
        allOf: [
          {
            properties: {
              data: {
                $ref: getSchemaPath(model),
              },
              message: {
                type: 'string',
              },
              statusCode: {
                type: 'number',
              },
            },
          },
        ],
      },
    }),
  );
};
"#;

const API_KEY_GUARD: &str = r#"
import { CanActivate, ExecutionContext, Injectable } from '@nestjs/common';
import { Request } from 'express';

@Injectable()
export class ApiKeyGuard implements CanActivate {
  canActivate(context: ExecutionContext): boolean {
    const expected = process.env.API_KEY;
    if (!expected) {
      return true;
    }

    const request = context.switchToHttp().getRequest<Request>();
    return request.header('x-api-key') === expected;
  }
}
"#;

const LOGGING_INTERCEPTOR: &str = r#"
import { CallHandler, ExecutionContext, Injectable, Logger, NestInterceptor } from '@nestjs/common';
import { Observable } from 'rxjs';
import { tap } from 'rxjs/operators';

@Injectable()
export class LoggingInterceptor implements NestInterceptor {
  private readonly logger = new Logger('HTTP');

  intercept(context: ExecutionContext, next: CallHandler): Observable<unknown> {
    const request = context.switchToHttp().getRequest();
    const started = Date.now();

    return next
      .handle()
      .pipe(tap(() => this.logger.log(`${request.method} ${request.url} ${Date.now() - started}ms`)));
  }
}
"#;

const E2E_TEST: &str = r#"
import { Test, TestingModule } from '@nestjs/testing';
import { INestApplication } from '@nestjs/common';
import * as request from 'supertest';
import { AppModule } from './../src/app.module';

describe('AppController (e2e)', () => {
  let app: INestApplication;

  beforeEach(async () => {
    const moduleFixture: TestingModule = await Test.createTestingModule({
      imports: [AppModule],
    }).compile();

    app = moduleFixture.createNestApplication();
    await app.init();
  });

  afterEach(async () => {
    await app.close();
  });

  it('/ (GET)', () => {
    return request(app.getHttpServer())
      .get('/')
      .expect(200)
      .expect('Hello World!');
  });

  it('/health (GET)', () => {
    return request(app.getHttpServer())
      .get('/health')
      .expect(200)
      .expect((res) => {
        expect(res.body.status).toBe('ok');
        expect(res.body.timestamp).toBeDefined();
        expect(res.body.uptime).toBeDefined();
      });
  });
});
"#;

const JEST_CONFIG: &str = r#"
module.exports = {
  moduleFileExtensions: ['js', 'json', 'ts'],
  rootDir: 'src',
  testRegex: '.*\\.spec\\.ts$',
  transform: {
    '^.+\\.(t|j)s$': 'ts-jest',
  },
  collectCoverageFrom: ['**/*.(t|j)s'],
  coverageDirectory: '../coverage',
  testEnvironment: 'node',
};
"#;

const ESLINT_CONFIG: &str = r#"
module.exports = {
  parser: '@typescript-eslint/parser',
  parserOptions: {
    project: 'tsconfig.json',
    tsconfigRootDir: __dirname,
    sourceType: 'module',
  },
  plugins: ['@typescript-eslint/eslint-plugin'],
  extends: [
    'plugin:@typescript-eslint/recommended',
    'plugin:prettier/recommended',
  ],
  root: true,
  env: {
    node: true,
    jest: true,
  },
  ignorePatterns: ['.eslintrc.js'],
  rules: {
    '@typescript-eslint/interface-name-prefix': 'off',
    '@typescript-eslint/explicit-function-return-type': 'off',
    '@typescript-eslint/explicit-module-boundary-types': 'off',
    '@typescript-eslint/no-explicit-any': 'off',
  },
};
"#;

const ENV_EXAMPLE: &str = r#"
PORT=3000
NODE_ENV=development
DB_HOST=localhost
DB_PORT=5432
DB_USERNAME=postgres
DB_PASSWORD=password
DB_NAME=nestjs_db
"#;

const GITIGNORE: &str = r#"
# compiled output
/dist
/node_modules

# Logs
logs
*.log
npm-debug.log*
pnpm-debug.log*
yarn-debug.log*
yarn-error.log*

# OS
.DS_Store

# Tests
/coverage
/.nyc_output

# IDEs and editors
/.idea
.project
.classpath
*.sublime-workspace

# IDE - VSCode
.vscode/*
!.vscode/settings.json
!.vscode/tasks.json
!.vscode/launch.json
!.vscode/extensions.json

# dotenv environment variable files
.env
.env.development.local
.env.test.local
.env.production.local
.env.local

# temp directory
.temp
.tmp

# Runtime data
pids
*.pid
*.seed
*.pid.lock
"#;

const README: &str = r#"
# {{project_name}}

A [NestJS](https://nestjs.com/) project created with js-project-generator.

## Installation

```bash
npm install
```

## Running the app

```bash
# development
npm run start

# watch mode
npm run start:dev

# production mode
npm run build
npm run start:prod
```

## Test

```bash
# unit tests
npm run test

# e2e tests
npm run test:e2e

# test coverage
npm run test:cov
```

## API Documentation

Once the application is running, the Swagger documentation is served at
`http://localhost:3000/api`.

## License

MIT
"#;
