use react_starter_core::{ProductConfig, RunConfig};
use serial_test::serial;
use std::path::Path;

const ENV: &str = "REACT_STARTER_TEST_NPM";

#[derive(Clone)]
struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "test"
    }

    fn display_name(&self) -> &'static str {
        "Test"
    }

    fn package_manager_env(&self) -> &'static str {
        ENV
    }

    fn docs_url(&self) -> &'static str {
        "https://example.invalid/docs"
    }

    fn next_steps(&self, _dir: &Path, _config: &RunConfig) -> Vec<String> {
        Vec::new()
    }

    fn cli_description(&self) -> &'static str {
        "test"
    }
}

struct EnvGuard;

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(ENV);
    }
}

#[test]
#[serial]
fn package_manager_defaults_to_npm() {
    let _guard = EnvGuard;
    std::env::remove_var(ENV);
    assert_eq!(TestConfig.package_manager(), "npm");
    assert_eq!(TestConfig.vite_package(), "vite@latest");
}

#[test]
#[serial]
fn package_manager_env_override() {
    let _guard = EnvGuard;
    std::env::set_var(ENV, "pnpm");
    assert_eq!(TestConfig.package_manager(), "pnpm");
}

#[test]
#[serial]
fn blank_override_is_ignored() {
    let _guard = EnvGuard;
    std::env::set_var(ENV, "  ");
    assert_eq!(TestConfig.package_manager(), "npm");
}
