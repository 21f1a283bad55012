//! End-to-end tests running the `registrar` binary against a real tree.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{WrapErr, ensure, eyre};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const FOO_ADAPTER: &str = "\
from .base_adapter import BaseAdapter


class FooAdapter(BaseAdapter):
    def __init__(self, config=None):
        self.config = config or {}

    def process(self, data):
        return {\"echo\": data}
";

const WEB_ENGINE: &str = "\
class ScraperEngine:
    def __init__(self, registry, config):
        self.registry = registry

    def run(self, url):
        return url
";

const PICKY_ADAPTER: &str = "\
class PickyAdapter:
    def __init__(self, api_key):
        self.api_key = api_key

    def process(self, data):
        return data
";

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl Workspace {
    fn adapters(&self) -> Utf8PathBuf {
        self.root.join("src/adapters")
    }

    fn generated(&self) -> Utf8PathBuf {
        self.root.join("generated")
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    let adapters = root.join("src/adapters");
    fs::create_dir_all(adapters.join("web")).expect("create adapters tree");
    fs::create_dir_all(adapters.join("__pycache__")).expect("create cache dir");
    fs::write(adapters.join("foo_adapter.py"), FOO_ADAPTER).expect("write foo");
    fs::write(adapters.join("web/scraper_engine.py"), WEB_ENGINE).expect("write scraper");
    fs::write(adapters.join("picky_adapter.py"), PICKY_ADAPTER).expect("write picky");
    fs::write(adapters.join("broken_adapter.py"), "class BrokenAdapter(:\n").expect("write broken");
    fs::write(adapters.join("test_foo_adapter.py"), FOO_ADAPTER).expect("write test file");
    fs::write(adapters.join("__pycache__/foo_adapter.py"), FOO_ADAPTER).expect("write cached");
    fs::write(adapters.join("helpers.py"), "def helper():\n    return 1\n").expect("write helper");

    let config = json!({
        "adapters_root": adapters.as_str(),
        "module_prefix": "src.adapters",
        "artifact_dir": root.join("generated").as_str(),
        "report_file": "adapter_report.json",
    });
    let config_path = root.join("registrar.json");
    fs::write(&config_path, config.to_string()).expect("write config");

    Workspace {
        _dir: dir,
        root,
        config_path,
    }
}

fn registrar(operation: &str, config_path: &Utf8Path) -> Result<Value, eyre::Report> {
    let output = Command::new(env!("CARGO_BIN_EXE_registrar"))
        .args([operation, config_path.as_str()])
        .env("RUST_LOG", "registrar=warn")
        .output()
        .wrap_err("spawn registrar")?;
    ensure!(
        output.status.success(),
        "registrar {operation} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).wrap_err("stdout is UTF-8")?;
    if operation == "generate" {
        return Ok(Value::String(stdout));
    }
    serde_json::from_str(&stdout).wrap_err("stdout is a JSON report")
}

#[rstest]
fn discover_prints_the_discovery_report(workspace: Workspace) -> Result<(), eyre::Report> {
    let report = registrar("discover", &workspace.config_path)?;

    ensure!(report["files_scanned"] == json!(5), "unexpected report: {report}");
    ensure!(report["valid"] == json!(3), "unexpected report: {report}");
    ensure!(report["rejected"] == json!(1), "unexpected report: {report}");
    ensure!(report["failures_by_kind"] == json!({"parse": 1}), "unexpected report: {report}");

    let names: Vec<&str> = report["adapters"]
        .as_array()
        .ok_or_else(|| eyre!("adapters is not an array"))?
        .iter()
        .filter_map(|adapter| adapter["registration_name"].as_str())
        .collect();
    ensure!(names == ["foo", "picky", "web_scraper"], "unexpected names: {names:?}");
    Ok(())
}

#[rstest]
fn generate_then_verify_reports_every_adapter(workspace: Workspace) -> Result<(), eyre::Report> {
    let summary = registrar("generate", &workspace.config_path)?;
    ensure!(
        summary.as_str().is_some_and(|text| text.contains("with 3 adapters")),
        "unexpected summary: {summary}"
    );

    let artifact = fs::read_to_string(workspace.generated().join("adapter_registry.py"))
        .wrap_err("read artifact")?;
    ensure!(artifact.starts_with("# registrar-artifact: v1"), "missing header");
    ensure!(artifact.contains("\"src.adapters.web.scraper_engine\""), "missing import");
    ensure!(
        workspace.generated().join("adapter_report.json").is_file(),
        "report file not written"
    );

    let report = registrar("verify", &workspace.config_path)?;
    ensure!(report["total"] == json!(3), "unexpected report: {report}");
    ensure!(report["registered"] == json!(2), "unexpected report: {report}");
    ensure!(report["failed_names"] == json!(["picky"]), "unexpected report: {report}");
    Ok(())
}

#[rstest]
fn regenerate_backs_up_the_previous_artifact(workspace: Workspace) -> Result<(), eyre::Report> {
    registrar("generate", &workspace.config_path)?;
    let second = registrar("generate", &workspace.config_path)?;
    ensure!(
        second.as_str().is_some_and(|text| text.contains("previous artifact saved as")),
        "unexpected summary: {second}"
    );

    let backups = fs::read_dir(workspace.generated())
        .wrap_err("list generated dir")?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".py.bak"))
        .count();
    ensure!(backups == 1, "expected one backup, found {backups}");
    ensure!(workspace.adapters().is_dir(), "adapters root disappeared");
    Ok(())
}

#[rstest]
fn unknown_operation_fails() {
    let status = Command::new(env!("CARGO_BIN_EXE_registrar"))
        .args(["publish", "registrar.json"])
        .status()
        .expect("spawn registrar");
    assert!(!status.success());
}
