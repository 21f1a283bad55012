//! Tests for registry initialisation, the facade and artifact loading.

use super::{keyword_class, manifest, manifest_entry, panicking_class};
use crate::artifact::adapters::InMemoryArtifactStore;
use crate::artifact::ports::ArtifactStore;
use crate::runtime::adapters::StaticClassResolver;
use crate::runtime::domain::{ConstructionStrategy, EntryStatus, FailureStage, RegistryCounts};
use crate::runtime::services::{
    AdapterRegistry, LoadError, adapter_counts, get_adapter, list_adapters, load_registry,
};
use camino::Utf8Path;
use rstest::{fixture, rstest};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[fixture]
fn resolver() -> StaticClassResolver {
    StaticClassResolver::new()
        .with_class("adapters.foo_adapter", keyword_class("FooAdapter", &[], &[]))
        .with_class(
            "adapters.bar_tool",
            keyword_class("BarEngine", &["config"], &["config"]),
        )
        .with_class(
            "adapters.picky_adapter",
            keyword_class("PickyAdapter", &["api_key"], &["api_key"]),
        )
        .with_class("adapters.fragile_adapter", panicking_class("FragileAdapter"))
        .with_broken_module("adapters.broken_adapter", "ImportError: no module named torch")
}

#[fixture]
fn registry(resolver: StaticClassResolver) -> AdapterRegistry {
    let declared = manifest([
        manifest_entry("foo", "adapters.foo_adapter", "FooAdapter"),
        manifest_entry("bar_tool", "adapters.bar_tool", "BarEngine"),
        manifest_entry("picky", "adapters.picky_adapter", "PickyAdapter"),
        manifest_entry("fragile", "adapters.fragile_adapter", "FragileAdapter"),
        manifest_entry("broken", "adapters.broken_adapter", "BrokenAdapter"),
        manifest_entry("missing", "adapters.missing_adapter", "MissingAdapter"),
        manifest_entry("renamed", "adapters.foo_adapter", "RenamedAdapter"),
    ]);
    AdapterRegistry::initialize(&declared, &resolver)
}

#[rstest]
fn every_declared_name_resolves(registry: AdapterRegistry) {
    assert_eq!(
        registry.list(),
        ["bar_tool", "broken", "foo", "fragile", "missing", "picky", "renamed"]
    );
    for name in registry.list() {
        assert!(registry.get(name).is_some(), "{name} should resolve");
    }
    assert!(registry.get("unknown").is_none());
}

#[rstest]
fn counts_split_registered_and_failed(registry: AdapterRegistry) {
    assert_eq!(
        registry.counts(),
        RegistryCounts {
            total: 7,
            registered: 3,
            failed: 4,
        }
    );
    assert_eq!(registry.failed(), ["broken", "missing", "picky", "renamed"]);
}

#[rstest]
fn registered_entries_record_the_winning_strategy(registry: AdapterRegistry) {
    let bar = registry.entry("bar_tool").expect("bar_tool entry");
    assert_eq!(bar.status(), EntryStatus::Registered);
    assert_eq!(bar.strategy(), Some(ConstructionStrategy::WithConfig));
    assert!(bar.failure().is_none());

    let fragile = registry.entry("fragile").expect("fragile entry");
    assert_eq!(fragile.strategy(), Some(ConstructionStrategy::WithRegistry));
}

#[rstest]
#[case("broken", FailureStage::Import, "torch")]
#[case("missing", FailureStage::Import, "adapters.missing_adapter")]
#[case("renamed", FailureStage::Import, "RenamedAdapter")]
#[case("picky", FailureStage::Construction, "PickyAdapter")]
fn failures_record_stage_and_reason(
    registry: AdapterRegistry,
    #[case] name: &str,
    #[case] stage: FailureStage,
    #[case] fragment: &str,
) {
    let entry = registry.entry(name).expect("entry exists");
    let failure = entry.failure().expect("failure recorded");
    assert_eq!(entry.status(), EntryStatus::Failed);
    assert_eq!(failure.stage(), stage);
    assert!(
        failure.message().contains(fragment),
        "{} should mention {fragment}",
        failure.message()
    );
}

#[rstest]
fn failed_entries_answer_with_the_minimal_stand_in(registry: AdapterRegistry) {
    let picky = registry.get("picky").expect("stand-in present");
    assert_eq!(picky.capabilities(), ["basic_processing"]);
    assert_eq!(
        picky.process(json!({"query": "hi"})).expect("stand-in processes"),
        json!({
            "adapter": "picky",
            "implementation": "minimal",
            "input": {"query": "hi"},
        })
    );
}

#[rstest]
fn registered_entries_answer_with_the_real_adapter(registry: AdapterRegistry) {
    let foo = registry.get("foo").expect("foo present");
    assert_eq!(foo.capabilities(), ["FooAdapter_processing"]);
    assert_eq!(
        foo.process(json!(1)).expect("processes"),
        json!({"handled_by": "FooAdapter", "input": 1})
    );
}

#[rstest]
fn module_level_queries_match_the_facade(registry: AdapterRegistry) {
    assert_eq!(list_adapters(&registry), registry.list());
    assert_eq!(adapter_counts(&registry), registry.counts());
    assert!(get_adapter(&registry, "foo").is_some());
}

#[rstest]
fn report_summarises_the_registry(registry: AdapterRegistry) {
    let report = registry.report();
    assert_eq!(report.counts(), registry.counts());
    assert_eq!(report.failed_names, ["broken", "missing", "picky", "renamed"]);
    assert_eq!(report.categories.values().sum::<usize>(), 7);
    assert!(report.registration_rate > 42.0 && report.registration_rate < 43.0);
}

#[rstest]
fn empty_manifest_yields_empty_registry(resolver: StaticClassResolver) {
    let registry = AdapterRegistry::initialize(&manifest([]), &resolver);
    assert_eq!(registry.counts(), RegistryCounts::default());
    assert!(registry.list().is_empty());
    assert!((registry.report().registration_rate - 100.0).abs() < f64::EPSILON);
}

#[rstest]
fn registry_is_readable_from_many_threads(registry: AdapterRegistry) {
    let shared = Arc::new(registry);
    thread::scope(|scope| {
        for _ in 0..4 {
            let reader = Arc::clone(&shared);
            scope.spawn(move || {
                for name in reader.list() {
                    assert!(reader.get(name).is_some());
                }
                assert_eq!(reader.counts().total, 7);
            });
        }
    });
}

#[rstest]
fn load_registry_reads_the_artifact_header(resolver: StaticClassResolver) {
    let declared = manifest([
        manifest_entry("foo", "adapters.foo_adapter", "FooAdapter"),
        manifest_entry("broken", "adapters.broken_adapter", "BrokenAdapter"),
    ]);
    let store = InMemoryArtifactStore::new();
    let location = Utf8Path::new("adapter_registry.py");
    let text = format!("{}\nimport importlib\n", declared.header().expect("header"));
    store.write(location, &text).expect("write artifact");

    let registry = load_registry(&store, location, &resolver).expect("load registry");
    assert_eq!(registry.list(), ["broken", "foo"]);
    assert_eq!(registry.failed(), ["broken"]);
}

#[rstest]
fn load_registry_reports_missing_artifact(resolver: StaticClassResolver) {
    let store = InMemoryArtifactStore::new();
    let result = load_registry(&store, Utf8Path::new("absent.py"), &resolver);
    assert!(matches!(result, Err(LoadError::Missing(path)) if path == "absent.py"));
}

#[rstest]
fn load_registry_rejects_non_artifact_files(resolver: StaticClassResolver) {
    let store = InMemoryArtifactStore::new();
    let location = Utf8Path::new("adapter_registry.py");
    store.write(location, "print('hello')\n").expect("write");
    assert!(matches!(
        load_registry(&store, location, &resolver),
        Err(LoadError::Artifact(_))
    ));
}
