//! Unit tests for registry code generation.


use crate::artifact::domain::{AdapterCategory, AdapterName};
use crate::discovery::domain::{
    AdapterCatalog, AdapterDescriptor, CandidateFile, Classification, ClassificationSignals,
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn instant(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 26, 53)
        .single()
        .expect("valid timestamp")
}

fn descriptor(name: &str, module: &str, class: &str, valid: bool) -> AdapterDescriptor {
    let candidate = CandidateFile::new(
        format!("/src/adapters/{name}.py"),
        format!("{name}.py"),
        module,
    );
    let signals = ClassificationSignals {
        capability_marker: valid,
        lifecycle_method: true,
        ..ClassificationSignals::default()
    };
    AdapterDescriptor::new(
        AdapterName::new(name).expect("valid name"),
        &candidate,
        &Classification::new(Some(class.to_owned()), signals),
        AdapterCategory::General,
    )
}

fn catalog() -> AdapterCatalog {
    let mut catalog = AdapterCatalog::new();
    for entry in [
        descriptor("foo", "adapters.foo_adapter", "FooAdapter", true),
        descriptor("bar_tool", "adapters.bar_tool", "BarEngine", true),
        descriptor("helpers", "adapters.helpers", "Helper", false),
    ] {
        catalog.admit(entry).expect("unique names");
    }
    catalog
}
