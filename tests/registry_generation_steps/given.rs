//! Given steps for registry generation BDD scenarios.

use super::world::{RegistryWorld, workspace_config};
use camino::Utf8PathBuf;
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::given;

#[given("an adapters directory")]
fn an_adapters_directory(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    let workspace = tempfile::tempdir().wrap_err("create workspace")?;
    let root = Utf8PathBuf::from_path_buf(workspace.path().to_path_buf())
        .map_err(|path| eyre!("workspace path is not UTF-8: {}", path.display()))?;
    let config = workspace_config(&root);
    std::fs::create_dir_all(&config.adapters_root).wrap_err("create adapters root")?;
    world.config = Some(config);
    world.workspace = Some(workspace);
    Ok(())
}

#[given(r#"an adapter file "{file}" declaring class "{class}""#)]
fn an_adapter_file(
    world: &mut RegistryWorld,
    file: String,
    class: String,
) -> Result<(), eyre::Report> {
    let source = format!(
        "class {class}:\n    def __init__(self):\n        self.ready = True\n\n    def process(self, data):\n        return data\n"
    );
    write_adapter(world, &file, &source)
}

#[given(r#"an adapter file "{file}" whose constructor requires "{keyword}""#)]
fn an_adapter_with_required_keyword(
    world: &mut RegistryWorld,
    file: String,
    keyword: String,
) -> Result<(), eyre::Report> {
    let source = format!(
        "class PickyAdapter:\n    def __init__(self, {keyword}):\n        self.{keyword} = {keyword}\n\n    def process(self, data):\n        return data\n"
    );
    write_adapter(world, &file, &source)
}

#[given(r#"a malformed adapter file "{file}""#)]
fn a_malformed_adapter_file(world: &mut RegistryWorld, file: String) -> Result<(), eyre::Report> {
    write_adapter(world, &file, "class BrokenAdapter(:\n    def process(self\n")
}

fn write_adapter(world: &RegistryWorld, file: &str, source: &str) -> Result<(), eyre::Report> {
    let path = world.adapters_root()?.join(file);
    std::fs::write(&path, source).wrap_err_with(|| format!("write {path}"))
}
