//! Tests for adapter classification heuristics.

use crate::config::ClassifierConfig;
use crate::discovery::{
    domain::{ClassInfo, SourceAnalysis},
    services::AdapterClassifier,
};
use rstest::{fixture, rstest};

#[fixture]
fn classifier() -> AdapterClassifier {
    AdapterClassifier::default()
}

fn analysis(classes: &[&str], functions: &[&str], imports: &[&str]) -> SourceAnalysis {
    SourceAnalysis::new(
        classes.iter().map(|name| ClassInfo::new(*name)).collect(),
        functions.iter().map(|name| (*name).to_owned()).collect(),
        imports.iter().map(|name| (*name).to_owned()).collect(),
    )
}

#[rstest]
fn adapter_class_with_process_method_is_valid(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(&["FooAdapter"], &["process"], &[]));
    assert!(verdict.is_valid());
    assert_eq!(verdict.main_class(), Some("FooAdapter"));
}

#[rstest]
fn free_functions_without_classes_are_invalid(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(&[], &["process", "run", "execute"], &[]));
    assert!(!verdict.is_valid());
    assert_eq!(verdict.main_class(), None);
    assert_eq!(verdict.selected_class(), None);
}

#[rstest]
#[case::lifecycle(&["process"][..], &[][..])]
#[case::framework_import(&["helper"][..], &[".base_adapter.BaseAdapter"][..])]
#[case::many_functions(&["a", "b", "c", "d", "e", "f"][..], &[][..])]
fn any_secondary_signal_completes_validity(
    classifier: AdapterClassifier,
    #[case] functions: &[&str],
    #[case] imports: &[&str],
) {
    let verdict = classifier.classify(&analysis(&["SearchEngine"], functions, imports));
    assert!(verdict.is_valid(), "signals: {:?}", verdict.signals());
}

#[rstest]
fn function_count_must_exceed_threshold(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(
        &["SearchEngine"],
        &["a", "b", "c", "d", "e"],
        &[],
    ));
    assert!(!verdict.signals().function_threshold);
    assert!(!verdict.is_valid());
}

#[rstest]
fn threshold_is_configurable() {
    let classifier = AdapterClassifier::new(ClassifierConfig {
        function_count_threshold: 1,
        ..ClassifierConfig::default()
    });
    let verdict = classifier.classify(&analysis(&["SearchEngine"], &["a", "b"], &[]));
    assert!(verdict.is_valid());
}

#[rstest]
fn marker_is_required_even_with_lifecycle_methods(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(&["Helper"], &["process", "run"], &[]));
    assert!(!verdict.signals().capability_marker);
    assert!(!verdict.is_valid());
    assert_eq!(verdict.selected_class(), Some("Helper"));
    assert_eq!(verdict.main_class(), None);
}

#[rstest]
fn first_marked_class_is_selected_over_earlier_unmarked_ones(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(
        &["Config", "WeatherProtocol", "WeatherAdapter"],
        &["execute"],
        &[],
    ));
    assert_eq!(verdict.main_class(), Some("WeatherProtocol"));
}

#[rstest]
fn markers_are_case_sensitive(classifier: AdapterClassifier) {
    let verdict = classifier.classify(&analysis(&["adapterish"], &["process"], &[]));
    assert!(!verdict.signals().capability_marker);
}
