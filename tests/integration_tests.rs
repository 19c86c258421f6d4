//! Integration tests for modcheck
//!
//! These tests drive the full pipeline through the library with in-memory
//! module sources and verify:
//! - Incompatible modules are flagged and the newest compatible version suggested
//! - Modules without a known requirement are never flagged
//! - Exact matches with the target are compatible
//! - Report order follows the build list, whatever the job count
//! - Repeated runs produce identical reports

use async_trait::async_trait;
use modcheck::check::ModuleFilter;
use modcheck::config::CheckConfig;
use modcheck::domain::{GoVersion, ModuleRecord};
use modcheck::error::{AppError, RegistryError, ToolchainError};
use modcheck::orchestrator::Orchestrator;
use modcheck::output::{create_formatter, OutputConfig};
use modcheck::registry::ModuleRegistry;
use modcheck::toolchain::ModuleLister;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Build list served from memory
struct FakeLister {
    modules: Vec<ModuleRecord>,
}

#[async_trait]
impl ModuleLister for FakeLister {
    async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ToolchainError> {
        Ok(self.modules.clone())
    }
}

/// Registry served from memory: module -> [(version, go directive)].
/// Optional per-module delay to shuffle completion order.
#[derive(Default)]
struct FakeRegistry {
    modules: HashMap<String, Vec<(String, Option<String>)>>,
    delays: HashMap<String, Duration>,
}

impl FakeRegistry {
    fn module(mut self, path: &str, versions: &[(&str, Option<&str>)]) -> Self {
        self.modules.insert(
            path.to_string(),
            versions
                .iter()
                .map(|(v, go)| (v.to_string(), go.map(str::to_string)))
                .collect(),
        );
        self
    }

    fn delay(mut self, path: &str, millis: u64) -> Self {
        self.delays
            .insert(path.to_string(), Duration::from_millis(millis));
        self
    }
}

#[async_trait]
impl ModuleRegistry for FakeRegistry {
    fn registry_name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_go_mod(&self, module: &str, version: &str) -> Result<String, RegistryError> {
        if let Some(delay) = self.delays.get(module) {
            tokio::time::sleep(*delay).await;
        }
        let (_, go) = self
            .modules
            .get(module)
            .and_then(|versions| versions.iter().find(|(v, _)| v == version))
            .ok_or_else(|| RegistryError::module_not_found(module, "fake"))?;
        Ok(match go {
            Some(go) => format!("module {}\n\ngo {}\n", module, go),
            None => format!("module {}\n", module),
        })
    }

    async fn list_versions(&self, module: &str) -> Result<Vec<String>, RegistryError> {
        self.modules
            .get(module)
            .map(|versions| versions.iter().map(|(v, _)| v.clone()).collect())
            .ok_or_else(|| RegistryError::module_not_found(module, "fake"))
    }
}

fn config(target: &str) -> CheckConfig {
    CheckConfig::new(GoVersion::parse(target).unwrap())
}

fn orchestrator(
    config: CheckConfig,
    modules: Vec<ModuleRecord>,
    registry: FakeRegistry,
) -> Orchestrator {
    Orchestrator::with_sources(
        config,
        Arc::new(FakeLister { modules }),
        Arc::new(registry),
    )
}

fn registry_with_d() -> FakeRegistry {
    FakeRegistry::default().module(
        "example.com/d",
        &[
            ("v1.0.0", Some("1.10")),
            ("v1.1.0", Some("1.15")),
            ("v1.2.0", Some("1.25")),
            ("v2.0.0", Some("1.30")),
        ],
    )
}

mod pipeline {
    use super::*;

    #[tokio::test]
    async fn test_incompatible_module_gets_newest_compatible_suggestion() {
        let modules = vec![ModuleRecord::new("example.com/d", "v2.0.0").with_go_version("1.30")];
        let report = orchestrator(config("1.20"), modules, registry_with_d())
            .run()
            .await
            .unwrap();

        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.module, "example.com/d");
        assert_eq!(finding.current_version, "v2.0.0");
        assert_eq!(finding.suggested_version.as_deref(), Some("v1.1.0"));
        assert_eq!(finding.required_go, "1.30");
        assert_eq!(report.fix_commands(), vec!["go get example.com/d@v1.1.0"]);
    }

    #[tokio::test]
    async fn test_requirement_resolved_from_go_mod_when_not_listed() {
        let modules = vec![ModuleRecord::new("example.com/d", "v2.0.0")];
        let report = orchestrator(config("1.20"), modules, registry_with_d())
            .run()
            .await
            .unwrap();

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].required_go, "1.30");
    }

    #[tokio::test]
    async fn test_unknown_requirement_never_reported() {
        // example.com/e declares nothing and its go.mod cannot be fetched
        let modules = vec![ModuleRecord::new("example.com/e", "v0.4.0")];
        let report = orchestrator(config("1.20"), modules, FakeRegistry::default())
            .run()
            .await
            .unwrap();

        assert!(report.is_compatible());
        assert_eq!(report.checked, 1);
    }

    #[tokio::test]
    async fn test_go_mod_without_directive_never_reported() {
        let registry = FakeRegistry::default().module("example.com/old", &[("v1.0.0", None)]);
        let modules = vec![ModuleRecord::new("example.com/old", "v1.0.0")];
        let report = orchestrator(config("1.11"), modules, registry)
            .run()
            .await
            .unwrap();

        assert!(report.is_compatible());
    }

    #[tokio::test]
    async fn test_exact_requirement_is_compatible() {
        let modules = vec![ModuleRecord::new("example.com/f", "v1.0.0").with_go_version("1.21")];
        let report = orchestrator(config("1.21"), modules, FakeRegistry::default())
            .run()
            .await
            .unwrap();

        assert!(report.is_compatible());
    }

    #[tokio::test]
    async fn test_patch_level_target() {
        let modules = vec![
            ModuleRecord::new("example.com/a", "v1.0.0").with_go_version("1.21.0"),
            ModuleRecord::new("example.com/b", "v1.0.0").with_go_version("1.21.6"),
        ];
        let report = orchestrator(config("1.21.5"), modules, FakeRegistry::default())
            .run()
            .await
            .unwrap();

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].module, "example.com/b");
    }

    #[tokio::test]
    async fn test_no_compatible_version_yields_no_fix() {
        let registry = FakeRegistry::default().module(
            "example.com/new",
            &[("v1.0.0", Some("1.22")), ("v1.1.0", Some("1.23"))],
        );
        let modules = vec![ModuleRecord::new("example.com/new", "v1.1.0")];
        let report = orchestrator(config("1.20"), modules, registry)
            .run()
            .await
            .unwrap();

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].suggested_version, None);
        assert!(report.fix_commands().is_empty());
    }

    #[tokio::test]
    async fn test_lister_failure_aborts() {
        struct Broken;

        #[async_trait]
        impl ModuleLister for Broken {
            async fn list_modules(&self) -> Result<Vec<ModuleRecord>, ToolchainError> {
                Err(ToolchainError::NotFound {
                    program: "go".to_string(),
                })
            }
        }

        let orchestrator = Orchestrator::with_sources(
            config("1.20"),
            Arc::new(Broken),
            Arc::new(FakeRegistry::default()),
        );
        let err = orchestrator.run().await.unwrap_err();
        assert!(matches!(err, AppError::Toolchain(ToolchainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_only_filter() {
        let modules = vec![
            ModuleRecord::new("example.com/a", "v1.0.0").with_go_version("1.30"),
            ModuleRecord::new("example.com/b", "v1.0.0").with_go_version("1.30"),
        ];
        let config = config("1.20")
            .with_filter(ModuleFilter::new().with_only(vec!["example.com/b".to_string()]));
        let report = orchestrator(config, modules, FakeRegistry::default())
            .run()
            .await
            .unwrap();

        assert_eq!(report.checked, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.findings[0].module, "example.com/b");
    }
}

mod ordering {
    use super::*;

    fn shuffled_registry() -> FakeRegistry {
        FakeRegistry::default()
            .module("example.com/slow", &[("v1.0.0", Some("1.25"))])
            .module("example.com/mid", &[("v1.0.0", Some("1.24"))])
            .module("example.com/fast", &[("v1.0.0", Some("1.23"))])
            .delay("example.com/slow", 60)
            .delay("example.com/mid", 30)
    }

    fn modules() -> Vec<ModuleRecord> {
        vec![
            ModuleRecord::new("example.com/slow", "v1.0.0"),
            ModuleRecord::new("example.com/mid", "v1.0.0"),
            ModuleRecord::new("example.com/fast", "v1.0.0"),
        ]
    }

    #[tokio::test]
    async fn test_report_keeps_build_list_order_with_concurrency() {
        let report = orchestrator(config("1.20").with_jobs(3), modules(), shuffled_registry())
            .run()
            .await
            .unwrap();

        let order: Vec<&str> = report.findings.iter().map(|f| f.module.as_str()).collect();
        assert_eq!(
            order,
            vec!["example.com/slow", "example.com/mid", "example.com/fast"]
        );
    }

    #[tokio::test]
    async fn test_sequential_and_concurrent_runs_match() {
        let sequential = orchestrator(config("1.20").with_jobs(1), modules(), shuffled_registry())
            .run()
            .await
            .unwrap();
        let concurrent = orchestrator(config("1.20").with_jobs(8), modules(), shuffled_registry())
            .run()
            .await
            .unwrap();

        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let orchestrator = orchestrator(config("1.20"), modules(), shuffled_registry());
        let first = orchestrator.run().await.unwrap();
        let second = orchestrator.run().await.unwrap();
        assert_eq!(first, second);
    }
}

mod output {
    use super::*;

    #[tokio::test]
    async fn test_text_report_end_to_end() {
        let modules = vec![
            ModuleRecord::new("example.com/d", "v2.0.0").with_go_version("1.30"),
            ModuleRecord::new("example.com/f", "v1.0.0").with_go_version("1.20"),
        ];
        let report = orchestrator(config("1.20"), modules, registry_with_d())
            .run()
            .await
            .unwrap();

        let formatter = create_formatter(OutputConfig::from_cli(false, false, false, true));
        let mut buf = Vec::new();
        formatter.format(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("v2.0.0 => v1.1.0"));
        assert!(text.contains("v1.30"));
        assert!(!text.contains("example.com/f"));
        assert!(text.ends_with("Suggested fixes:\ngo get example.com/d@v1.1.0\n"));
    }

    #[tokio::test]
    async fn test_json_report_end_to_end() {
        let modules = vec![ModuleRecord::new("example.com/f", "v1.0.0").with_go_version("1.21")];
        let report = orchestrator(config("1.21"), modules, FakeRegistry::default())
            .run()
            .await
            .unwrap();

        let formatter = create_formatter(OutputConfig::from_cli(true, false, false, true));
        let mut buf = Vec::new();
        formatter.format(&report, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["compatible"], true);
        assert_eq!(json["checked"], 1);
        assert_eq!(json["target"], "1.21");
    }
}
