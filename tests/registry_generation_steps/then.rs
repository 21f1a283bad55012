//! Then steps for registry generation BDD scenarios.

use super::world::RegistryWorld;
use camino::Utf8Path;
use eyre::{WrapErr, eyre};
use registrar::artifact::ports::ArtifactStore;
use registrar::discovery::domain::FailureKind;
use rstest_bdd_macros::then;
use serde_json::json;

#[then("the artifact declares {count:usize} adapters")]
fn the_artifact_declares(world: &RegistryWorld, count: usize) -> Result<(), eyre::Report> {
    let declared = world.last_outcome()?.manifest().entries().len();
    if declared != count {
        return Err(eyre!("expected {count} declared adapters, found {declared}"));
    }
    Ok(())
}

#[then(r#"the artifact declares adapter "{name}" as class "{class}""#)]
fn the_artifact_declares_adapter(
    world: &RegistryWorld,
    name: String,
    class: String,
) -> Result<(), eyre::Report> {
    let entry = world
        .last_outcome()?
        .manifest()
        .entry(&name)
        .ok_or_else(|| eyre!("adapter '{name}' is not declared"))?;
    if entry.class() != class {
        return Err(eyre!(
            "expected '{name}' to use class {class}, found {}",
            entry.class()
        ));
    }
    Ok(())
}

#[then(r#""{file}" is recorded as a parse failure"#)]
fn recorded_as_parse_failure(world: &RegistryWorld, file: String) -> Result<(), eyre::Report> {
    let catalog = world
        .catalog
        .as_ref()
        .ok_or_else(|| eyre!("no discovery pass in scenario world"))?;
    let recorded = catalog.failures().iter().any(|failure| {
        failure.path().as_str() == file && matches!(failure.kind(), FailureKind::Parse { .. })
    });
    if !recorded {
        return Err(eyre!(
            "expected a parse failure for {file}, found {:?}",
            catalog.failures()
        ));
    }
    Ok(())
}

#[then("a backup of the previous artifact exists")]
fn a_backup_exists(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let backup = world
        .last_outcome()?
        .backup()
        .ok_or_else(|| eyre!("the last generation made no backup"))?;
    if !world.store()?.exists(backup).wrap_err("check backup")? {
        return Err(eyre!("backup {backup} was reported but not written"));
    }
    Ok(())
}

#[then("both artifacts are identical apart from their timestamps")]
fn artifacts_match_without_timestamps(world: &RegistryWorld) -> Result<(), eyre::Report> {
    let outcome = world.last_outcome()?;
    let backup = outcome
        .backup()
        .ok_or_else(|| eyre!("the last generation made no backup"))?;
    let store = world.store()?;
    let read = |location: &Utf8Path| -> Result<Vec<String>, eyre::Report> {
        store
            .read(location)
            .wrap_err("read artifact")?
            .map(|text| without_timestamp(&text))
            .ok_or_else(|| eyre!("nothing stored at {location}"))
    };
    if read(outcome.location())? != read(backup)? {
        return Err(eyre!("regenerated artifact differs from its backup"));
    }
    Ok(())
}

#[then("the registry counts {registered:usize} registered and {failed:usize} failed")]
fn the_registry_counts(
    world: &RegistryWorld,
    registered: usize,
    failed: usize,
) -> Result<(), eyre::Report> {
    let counts = world.registry()?.counts();
    if counts.registered != registered || counts.failed != failed {
        return Err(eyre!(
            "expected {registered} registered and {failed} failed, found {counts:?}"
        ));
    }
    Ok(())
}

#[then(r#"looking up "{name}" returns the minimal stand-in"#)]
fn lookup_returns_stand_in(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let adapter = world
        .registry()?
        .get(&name)
        .ok_or_else(|| eyre!("'{name}' did not resolve"))?;
    let answer = adapter
        .process(json!("ping"))
        .map_err(|err| eyre!("stand-in failed to process: {err}"))?;
    if answer.get("implementation") != Some(&json!("minimal")) {
        return Err(eyre!("expected a minimal implementation, got {answer}"));
    }
    Ok(())
}

fn without_timestamp(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with("# generated-at: "))
        .map(str::to_owned)
        .collect()
}
