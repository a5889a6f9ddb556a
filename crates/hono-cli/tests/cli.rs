//! End-to-end tests for `hono-cli init`, `g:m` and `g:r`

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_writes_hono_extras() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");

    for file in [
        "src/index.ts",
        "src/routes.ts",
        "src/shared/pagination.ts",
        "src/shared/service/base.service.ts",
        "src/shared/service/types.ts",
        "src/shared/types/app.types.ts",
        "src/config/collections.config.ts",
    ] {
        assert!(root.join(file).is_file(), "missing {}", file);
    }
    assert!(root.join("src/routes").is_dir());
}

#[test]
fn test_generate_module_registers_router() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");

    hono_cmd()
        .arg("-C")
        .arg(&root)
        .args(["g:m", "order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module order generated successfully!"));

    assert!(root.join("src/modules/order/order.validation.ts").is_file());

    let routes = fs::read_to_string(root.join("src/routes.ts")).unwrap();
    assert_eq!(routes.matches("import { orderRouter } from './modules/order'").count(), 1);
    assert_eq!(routes.matches("app.route('/order', orderRouter)").count(), 1);
    let registration = routes.find("app.route('/order', orderRouter)").unwrap();
    let ret = routes.find("return app").unwrap();
    assert!(registration < ret);
}

#[test]
fn test_generate_router() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");

    hono_cmd()
        .arg("-C")
        .arg(&root)
        .args(["generate:router", "health"])
        .assert()
        .success();

    let router = fs::read_to_string(root.join("src/routes/health.route.ts")).unwrap();
    assert!(router.contains("export const healthRouter = new Hono<AppEnv>()"));

    let routes = fs::read_to_string(root.join("src/routes.ts")).unwrap();
    assert!(routes.contains("import { healthRouter } from './routes/health.route'"));
    assert!(routes.contains("app.route('/health', healthRouter)"));
}

#[test]
fn test_existing_router_exits_zero() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");

    hono_cmd()
        .env("HONO_CLI_PROJECT_DIR", &root)
        .args(["g:r", "health"])
        .assert()
        .success();

    hono_cmd()
        .env("HONO_CLI_PROJECT_DIR", &root)
        .args(["g:r", "health"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Route 'health' already exists"));
}

#[test]
fn test_existing_module_exits_zero() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");
    fs::create_dir_all(root.join("src/modules/order")).unwrap();
    let routes_before = fs::read_to_string(root.join("src/routes.ts")).unwrap();

    hono_cmd()
        .arg("-C")
        .arg(&root)
        .args(["g:m", "order"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Module 'order' already exists"));

    assert_eq!(fs::read_to_string(root.join("src/routes.ts")).unwrap(), routes_before);
    assert_eq!(fs::read_dir(root.join("src/modules/order")).unwrap().count(), 0);
}

#[test]
fn test_missing_anchor_fails_with_manual_instructions() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");
    fs::write(
        root.join("src/routes.ts"),
        "import { Hono } from 'hono'\n\nexport default new Hono()\n",
    )
    .unwrap();

    hono_cmd()
        .arg("-C")
        .arg(&root)
        .args(["g:m", "order"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("app.route('/order', orderRouter)"));

    assert_eq!(
        fs::read_to_string(root.join("src/routes.ts")).unwrap(),
        "import { Hono } from 'hono'\n\nexport default new Hono()\n"
    );
}

#[test]
fn test_layout_file_moves_modules() {
    let parent = tempdir().unwrap();
    let root = init_project(parent.path(), "api");
    fs::write(root.join("apigen.yaml"), "modules_dir: src/features\n").unwrap();

    hono_cmd()
        .arg("-C")
        .arg(&root)
        .args(["g:m", "invoice"])
        .assert()
        .success();

    assert!(root.join("src/features/invoice/invoice.routes.ts").is_file());
    let routes = fs::read_to_string(root.join("src/routes.ts")).unwrap();
    assert!(routes.contains("import { invoiceRouter } from './features/invoice'"));
}
