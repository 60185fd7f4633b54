mod common;

use common::{options, FakeNpm};
use react_starter_core::{generate, EmitStep, ProjectName, RunConfig, ScaffoldError, EMIT_ORDER};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

fn config(name: &str, typescript: bool, tailwind: bool) -> RunConfig {
    RunConfig::new(ProjectName::parse(name).unwrap(), typescript, tailwind)
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

// ── End-to-end scenarios ────────────────────────────────────────────

#[tokio::test]
async fn javascript_project_is_wired_through_routes() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();

    generate(&config("demo", false, false), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let root = tmp.path().join("demo");
    let app = fs::read_to_string(root.join("src/App.jsx")).unwrap();
    assert!(app.contains(r#"import AppRoutes from "./routes""#));

    let routes = fs::read_to_string(root.join("src/routes/index.jsx")).unwrap();
    assert!(routes.contains("ROUTES.HOME"));
    assert!(routes.contains("ROUTES.NOT_FOUND"));
    assert!(routes.contains("<Router>"));

    let eslint = fs::read_to_string(root.join(".eslintrc.cjs")).unwrap();
    assert!(eslint.contains("plugins: ['react']"));
}

#[tokio::test]
async fn typescript_project_uses_tsx_and_project_name() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();

    generate(&config("shop", true, false), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let root = tmp.path().join("shop");
    assert!(root.join("src/App.tsx").is_file());
    assert!(root.join("src/layouts/DefaultLayout.tsx").is_file());
    let home = fs::read_to_string(root.join("src/pages/home/Home.tsx")).unwrap();
    assert!(home.contains(r#"Commencez "shop""#));
}

#[tokio::test]
async fn failed_bootstrap_emits_nothing() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::failing_on("npm create");

    let err = generate(&config("demo", false, false), &npm, &options(tmp.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::CommandFailed { .. }));
    assert_eq!(npm.rendered(), ["npm create vite@latest demo -- --template react"]);
    assert!(!tmp.path().join("demo/src").exists());
}

#[tokio::test]
async fn failed_install_stops_before_cleaning() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::failing_on("npm install sass");

    generate(&config("demo", false, false), &npm, &options(tmp.path()))
        .await
        .unwrap_err();

    let root = tmp.path().join("demo");
    // Only what the create step produced is present
    assert!(root.join("src/index.css").is_file());
    assert!(!root.join("src/index.scss").exists());
    assert!(!root.join("src/routes").exists());
}

// ── Commands and ordering ───────────────────────────────────────────

#[tokio::test]
async fn commands_run_in_fixed_order() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();

    generate(&config("demo", false, true), &npm, &options(tmp.path()))
        .await
        .unwrap();

    assert_eq!(
        npm.rendered(),
        [
            "npm create vite@latest demo -- --template react",
            "npm install",
            "npm install sass",
            "npm install react-router-dom",
            "npm install tailwindcss @tailwindcss/vite",
            "npm install -D eslint prettier eslint-config-prettier eslint-plugin-react",
        ]
    );

    let root = tmp.path().join("demo");
    let commands = npm.commands.borrow();
    assert_eq!(commands[0].cwd.as_deref(), Some(tmp.path()));
    assert!(commands[1..].iter().all(|c| c.cwd.as_deref() == Some(root.as_path())));
}

#[tokio::test]
async fn skip_install_keeps_declared_dependencies() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();
    let mut opts = options(tmp.path());
    opts.skip_install = true;

    generate(&config("demo", false, true), &npm, &opts).await.unwrap();

    assert_eq!(
        npm.rendered(),
        [
            "npm create vite@latest demo -- --template react",
            "npm install",
        ]
    );
    assert!(tmp.path().join("demo/.eslintrc.cjs").is_file());
}

#[tokio::test]
async fn report_lists_steps_in_emit_order() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();

    let report = generate(&config("demo", false, false), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let expected: Vec<EmitStep> = EMIT_ORDER
        .iter()
        .copied()
        .filter(|s| *s != EmitStep::Tailwind)
        .collect();
    assert_eq!(report.steps, expected);
    assert_eq!(report.project_dir, tmp.path().join("demo"));
    assert_eq!(report.removed_boilerplate, 5);
}

// ── Generated tree ──────────────────────────────────────────────────

#[tokio::test]
async fn component_extensions_follow_language() {
    for (typescript, ext, other) in [(false, "jsx", "tsx"), (true, "tsx", "jsx")] {
        let tmp = TempDir::new().unwrap();
        let npm = FakeNpm::default();
        generate(&config("demo", typescript, false), &npm, &options(tmp.path()))
            .await
            .unwrap();

        let src = tmp.path().join("demo/src");
        let files = files_under(&src);
        assert!(files.iter().any(|p| p.extension().is_some_and(|e| e == ext)));
        assert!(
            !files.iter().any(|p| p.extension().is_some_and(|e| e == other)),
            "found .{other} file in a .{ext} project"
        );
    }
}

#[tokio::test]
async fn expected_tree_is_present() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();
    generate(&config("demo", false, false), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let root = tmp.path().join("demo");
    for path in [
        "src/components/README.md",
        "src/components/Navbar/Navbar.jsx",
        "src/components/Navbar/navbar.module.scss",
        "src/hooks/README.md",
        "src/assets/README.md",
        "src/constants/routes.js",
        "src/utils/README.md",
        "src/layouts/DefaultLayout.jsx",
        "src/layouts/AdminLayout.jsx",
        "src/styles/global.scss",
        "src/styles/base/_reset.scss",
        "src/styles/mixins/_media.scss",
        "src/styles/variables/_colors.scss",
        "src/pages/home/Home.jsx",
        "src/pages/home/home.module.scss",
        "src/pages/notfound/NotFound.jsx",
        "src/pages/notfound/notfound.module.scss",
        "src/routes/index.jsx",
        "src/routes/RequireAuth.jsx",
        "src/index.scss",
        ".env",
        ".prettierrc",
        ".eslintignore",
        ".prettierignore",
        "README.md",
        "README-advanced.md",
    ] {
        assert!(root.join(path).is_file(), "missing {path}");
    }

    assert!(!root.join("src/App.css").exists());
    assert!(!root.join("public/vite.svg").exists());
    assert!(!root.join("src/styles/tailwind.css").exists());

    let main = fs::read_to_string(root.join("src/main.jsx")).unwrap();
    assert!(main.contains("import './index.scss'"));

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"lint\": \"eslint .\""));
}

#[tokio::test]
async fn tailwind_project_wires_plugin_and_stylesheet() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();
    generate(&config("shop", true, true), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let root = tmp.path().join("shop");
    assert!(root.join("src/styles/tailwind.css").is_file());
    let vite = fs::read_to_string(root.join("vite.config.ts")).unwrap();
    assert!(vite.contains("tailwindcss()"));
    let main = fs::read_to_string(root.join("src/main.tsx")).unwrap();
    assert!(main.contains("import './styles/tailwind.css'"));
}

#[tokio::test]
async fn relative_imports_resolve() {
    let tmp = TempDir::new().unwrap();
    let npm = FakeNpm::default();
    generate(&config("demo", true, false), &npm, &options(tmp.path()))
        .await
        .unwrap();

    let routes_dir = tmp.path().join("demo/src/routes");
    for (import, candidates) in [
        ("../constants/routes", &["ts"][..]),
        ("../layouts/DefaultLayout", &["tsx"][..]),
        ("../pages/home/Home", &["tsx"][..]),
        ("../pages/notfound/NotFound", &["tsx"][..]),
    ] {
        let base = routes_dir.join(import);
        let found = candidates
            .iter()
            .any(|ext| Path::new(&format!("{}.{ext}", base.display())).is_file());
        assert!(found, "{import} does not resolve");
    }
}
