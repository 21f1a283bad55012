//! When steps for registry generation BDD scenarios.

use super::world::RegistryWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use registrar::codegen::services::RegenerationService;
use registrar::discovery::{
    adapters::{FsSourceScanner, PythonAnalyzer},
    domain::ScanRules,
    services::DiscoveryService,
};
use registrar::runtime::services::load_registry;
use registrar::verify::SourceClassResolver;
use rstest_bdd_macros::when;
use std::sync::Arc;

#[when("the registry is generated")]
fn the_registry_is_generated(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    generate(world)
}

#[when("the registry is generated again")]
fn the_registry_is_generated_again(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    generate(world)
}

#[when("the registry is loaded for verification")]
fn the_registry_is_loaded(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let config = world.config()?;
    let scanner = FsSourceScanner::new(
        config.adapters_root.clone(),
        ScanRules::new(&config.scanner),
        config.module_prefix.clone(),
    );
    let resolver = SourceClassResolver::new(
        Arc::new(scanner),
        Arc::new(PythonAnalyzer::new()),
        config.adapters_root.clone(),
        config.module_prefix.clone(),
    );
    let registry = load_registry(&world.store()?, config.artifact_location(), &resolver)
        .wrap_err("load generated registry")?;
    world.registry = Some(registry);
    Ok(())
}

fn generate(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let config = world.config()?;
    let catalog = DiscoveryService::from_config(config)
        .discover()
        .wrap_err("discover adapters")?;
    let service = RegenerationService::new(Arc::new(world.store()?), Arc::new(DefaultClock));
    let outcome = service
        .regenerate(&catalog, config.artifact_location())
        .wrap_err("regenerate artifact")?;
    world.catalog = Some(catalog);
    world.outcomes.push(outcome);
    Ok(())
}
