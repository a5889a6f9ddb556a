//! Elysia framework configuration

use apigen_core::{Anchor, FrameworkConfig, ModuleName, TemplateFile};
use std::path::Path;

/// Marker line in `src/routes.ts` that registrations are inserted after
pub const REGISTRATION_MARKER: &str = "// Auto-generated route registrations";

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
        "project/database.plugin.ts",
        include_str!("../templates/project/database.plugin.ts.tera"),
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
        path: "src/shared/plugins/database.plugin.ts",
        template: "project/database.plugin.ts",
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

/// Elysia product configuration
#[derive(Clone)]
pub struct ElysiaConfig;

impl FrameworkConfig for ElysiaConfig {
    fn name(&self) -> &'static str {
        "ely-cli"
    }

    fn display_name(&self) -> &'static str {
        "Elysia"
    }

    fn cli_description(&self) -> &'static str {
        "Elysia.js project and module generator"
    }

    fn docs_url(&self) -> &'static str {
        "https://elysiajs.com"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["elysia", "@elysiajs/cors", "@elysiajs/swagger", "mongodb"]
    }

    fn dev_dependencies(&self) -> &'static [&'static str] {
        &["@types/mongodb", "bun-types"]
    }

    fn project_dirs(&self) -> &'static [&'static str] {
        &[
            "src/modules",
            "src/shared/middleware",
            "src/shared/utils",
            "src/shared/plugins",
            "src/config",
        ]
    }

    fn project_files(&self) -> &'static [TemplateFile] {
        PROJECT_FILES
    }

    fn module_files(&self) -> &'static [TemplateFile] {
        MODULE_FILES
    }

    fn templates(&self) -> &'static [(&'static str, &'static str)] {
        TEMPLATES
    }

    fn route_symbol(&self, name: &ModuleName) -> String {
        format!("{}Routes", name.camel())
    }

    fn route_registration(&self, symbol: &str, _name: &ModuleName) -> String {
        format!("  app.use({})", symbol)
    }

    fn registration_anchor(&self) -> Anchor {
        Anchor::AfterMarker(REGISTRATION_MARKER.to_string())
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        if let Some(name) = dir.file_name() {
            steps.push(format!("cd {}", name.to_string_lossy()));
        }
        steps.push("Start MongoDB or point DB_URL in .env at an instance".to_string());
        steps.push("bun run dev".to_string());
        steps.push(format!("{} generate:module <name>", self.name()));
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_core::generator::module::module_route_entry;
    use apigen_core::registry::routes::apply_entry;
    use apigen_core::render::ProjectContext;
    use apigen_core::{generate_module, initialize_project, InitOptions, Project, Renderer};
    use tempfile::tempdir;

    fn seed_routes(renderer: &Renderer) -> String {
        let ctx = ProjectContext::new(&ModuleName::parse("shop").unwrap(), "Elysia", "ely-cli");
        renderer.render("project/routes.ts", &ctx).unwrap()
    }

    #[test]
    fn test_all_templates_compile() {
        let renderer = Renderer::new(ElysiaConfig.templates()).unwrap();
        for file in PROJECT_FILES.iter().chain(MODULE_FILES) {
            assert!(renderer.has_template(file.template), "{}", file.template);
        }
    }

    #[test]
    fn test_order_module_registers_once_in_place() {
        let renderer = Renderer::new(ElysiaConfig.templates()).unwrap();
        let seed = seed_routes(&renderer);
        let project = Project::new(".".into(), Default::default());
        let name = ModuleName::parse("order").unwrap();
        let entry = module_route_entry(&ElysiaConfig, &project, &name);
        assert_eq!(entry.import, "import { orderRoutes } from './modules/order'");

        let config = ElysiaConfig;
        let updated = apply_entry(
            &seed,
            &entry,
            &config.import_anchor(),
            &config.registration_anchor(),
            Path::new("src/routes.ts"),
        )
        .unwrap()
        .unwrap();

        assert_eq!(updated.matches("import { orderRoutes } from './modules/order'").count(), 1);
        assert_eq!(updated.matches("app.use(orderRoutes)").count(), 1);
        assert!(updated.starts_with(
            "import { Elysia } from 'elysia'\nimport { orderRoutes } from './modules/order'\n"
        ));
        assert!(updated.contains(
            "  // Auto-generated route registrations\n  app.use(orderRoutes)\n\n  return app\n"
        ));

        // A second pass changes nothing
        let again = apply_entry(
            &updated,
            &entry,
            &config.import_anchor(),
            &config.registration_anchor(),
            Path::new("src/routes.ts"),
        )
        .unwrap();
        assert!(again.is_none());
    }

    #[tokio::test]
    async fn test_init_then_generate_module() {
        let parent = tempdir().unwrap();
        let renderer = Renderer::new(ElysiaConfig.templates()).unwrap();
        let options = InitOptions { skip_install: true };
        let root = initialize_project(&ElysiaConfig, &renderer, parent.path(), "shop", &options)
            .await
            .unwrap();

        for file in PROJECT_FILES {
            assert!(root.join(file.path).is_file(), "{}", file.path);
        }

        let project = Project::open(&root).await.unwrap();
        let generated = generate_module(&ElysiaConfig, &project, &renderer, "orderItem")
            .await
            .unwrap();
        assert_eq!(generated.files.len(), 5);

        let service =
            std::fs::read_to_string(generated.dir.join("order-item.service.ts")).unwrap();
        assert!(service.contains("COLLECTIONS.ORDER_ITEM"));
        assert!(service.contains("constructor(private readonly database: Database)"));

        let routes = std::fs::read_to_string(generated.dir.join("order-item.routes.ts")).unwrap();
        assert!(routes.contains("export const orderItemRoutes = new Elysia({ prefix: '/order-item' })"));

        let collections =
            std::fs::read_to_string(root.join("src/config/collections.config.ts")).unwrap();
        assert!(collections.contains("    ORDER_ITEM: 'order_items'\n"));

        let registry = std::fs::read_to_string(root.join("src/routes.ts")).unwrap();
        assert!(registry.contains("import { orderItemRoutes } from './modules/order-item'\n"));
        assert!(registry.contains("  app.use(orderItemRoutes)\n"));
    }
}
