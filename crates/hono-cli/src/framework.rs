//! Hono framework configuration

use apigen_core::{setup_return_pattern, Anchor, FrameworkConfig, ModuleName, TemplateFile};
use std::path::Path;

const TEMPLATES: &[(&str, &str)] = &[
    (
        "project/index.ts",
        include_str!("../templates/project/index.ts.tera"),
    ),
    (
        "project/routes.ts",
        include_str!("../templates/project/routes.ts.tera"),
    ),
    (
        "project/app.types.ts",
        include_str!("../templates/project/app.types.ts.tera"),
    ),
    (
        "project/pagination.ts",
        include_str!("../templates/project/pagination.ts.tera"),
    ),
    (
        "project/service.types.ts",
        include_str!("../templates/project/service.types.ts.tera"),
    ),
    (
        "project/base.service.ts",
        include_str!("../templates/project/base.service.ts.tera"),
    ),
    (
        "project/package.json",
        include_str!("../templates/project/package.json.tera"),
    ),
    (
        "module/types.ts",
        include_str!("../templates/module/types.ts.tera"),
    ),
    (
        "module/validation.ts",
        include_str!("../templates/module/validation.ts.tera"),
    ),
    (
        "module/service.ts",
        include_str!("../templates/module/service.ts.tera"),
    ),
    (
        "module/controller.ts",
        include_str!("../templates/module/controller.ts.tera"),
    ),
    (
        "module/routes.ts",
        include_str!("../templates/module/routes.ts.tera"),
    ),
    (
        "module/index.ts",
        include_str!("../templates/module/index.ts.tera"),
    ),
    (
        "router/route.ts",
        include_str!("../templates/module/router.ts.tera"),
    ),
];

const PROJECT_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "src/index.ts",
        template: "project/index.ts",
    },
    TemplateFile {
        path: "src/routes.ts",
        template: "project/routes.ts",
    },
    TemplateFile {
        path: "src/config/db.config.ts",
        template: "shared/db.config.ts",
    },
    TemplateFile {
        path: "src/shared/utils/db.util.ts",
        template: "shared/db.util.ts",
    },
    TemplateFile {
        path: "src/shared/types/app.types.ts",
        template: "project/app.types.ts",
    },
    TemplateFile {
        path: "src/shared/pagination.ts",
        template: "project/pagination.ts",
    },
    TemplateFile {
        path: "src/shared/service/types.ts",
        template: "project/service.types.ts",
    },
    TemplateFile {
        path: "src/shared/service/base.service.ts",
        template: "project/base.service.ts",
    },
    TemplateFile {
        path: "tsconfig.json",
        template: "shared/tsconfig.json",
    },
    TemplateFile {
        path: ".env",
        template: "shared/env",
    },
    TemplateFile {
        path: ".env.example",
        template: "shared/env",
    },
    TemplateFile {
        path: "README.md",
        template: "shared/README.md",
    },
    TemplateFile {
        path: ".gitignore",
        template: "shared/gitignore",
    },
    TemplateFile {
        path: "package.json",
        template: "project/package.json",
    },
];

const MODULE_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "{{ name.kebab }}.types.ts",
        template: "module/types.ts",
    },
    TemplateFile {
        path: "{{ name.kebab }}.validation.ts",
        template: "module/validation.ts",
    },
    TemplateFile {
        path: "{{ name.kebab }}.controller.ts",
        template: "module/controller.ts",
    },
    TemplateFile {
        path: "{{ name.kebab }}.service.ts",
        template: "module/service.ts",
    },
    TemplateFile {
        path: "{{ name.kebab }}.routes.ts",
        template: "module/routes.ts",
    },
    TemplateFile {
        path: "index.ts",
        template: "module/index.ts",
    },
];

/// Hono product configuration
#[derive(Clone)]
pub struct HonoConfig;

impl FrameworkConfig for HonoConfig {
    fn name(&self) -> &'static str {
        "hono-cli"
    }

    fn display_name(&self) -> &'static str {
        "Hono"
    }

    fn cli_description(&self) -> &'static str {
        "Hono.js project, module and router generator"
    }

    fn docs_url(&self) -> &'static str {
        "https://hono.dev/docs"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["hono", "zod", "mongodb"]
    }

    fn dev_dependencies(&self) -> &'static [&'static str] {
        &["@types/mongodb", "bun-types"]
    }

    fn project_dirs(&self) -> &'static [&'static str] {
        &[
            "src/modules",
            "src/routes",
            "src/shared/middleware",
            "src/shared/utils",
            "src/shared/types",
            "src/shared/service",
            "src/config",
        ]
    }

    fn project_files(&self) -> &'static [TemplateFile] {
        PROJECT_FILES
    }

    fn module_files(&self) -> &'static [TemplateFile] {
        MODULE_FILES
    }

    fn router_file(&self) -> Option<TemplateFile> {
        Some(TemplateFile {
            path: "{{ name.kebab }}.route.ts",
            template: "router/route.ts",
        })
    }

    fn templates(&self) -> &'static [(&'static str, &'static str)] {
        TEMPLATES
    }

    fn route_symbol(&self, name: &ModuleName) -> String {
        format!("{}Router", name.camel())
    }

    fn route_registration(&self, symbol: &str, name: &ModuleName) -> String {
        format!("  app.route('/{}', {})", name.kebab(), symbol)
    }

    fn registration_anchor(&self) -> Anchor {
        Anchor::BeforeGroup {
            pattern: setup_return_pattern(),
            group: "ret",
        }
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        if let Some(name) = dir.file_name() {
            steps.push(format!("cd {}", name.to_string_lossy()));
        }
        steps.push("Start MongoDB or point DB_URL in .env at an instance".to_string());
        steps.push("bun run dev".to_string());
        steps.push(format!("{} g:m <name>  or  {} g:r <name>", self.name(), self.name()));
        steps
    }
}
