use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::{DocsConfigArgs, DocsFormat};
use crate::formats::DocsConfig;

pub fn run(args: DocsConfigArgs) -> anyhow::Result<()> {
    let config = match &args.from {
        Some(path) => load(Path::new(path)).context("load docs config")?,
        None => DocsConfig::default(),
    };
    tracing::debug!(?config, "resolved docs config");

    let rendered = render(&config, args.format).context("render docs config")?;

    let Some(out) = &args.out else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("write docs config to stdout")?;
        stdout.flush().context("flush stdout")?;
        return Ok(());
    };

    let out_path = PathBuf::from(out);
    if out_path.exists() && !args.force {
        anyhow::bail!("docs config output already exists: {}", out_path.display());
    }
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create docs config dir: {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options
        .open(&out_path)
        .with_context(|| format!("open docs config output: {}", out_path.display()))?;
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("write docs config: {}", out_path.display()))?;
    file.flush().context("flush docs config")?;

    tracing::info!(path = %out_path.display(), "wrote docs config");
    Ok(())
}

/// Reads settings from a YAML or JSON file. Keys left out keep their defaults.
pub fn load(path: &Path) -> anyhow::Result<DocsConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read docs config: {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&contents)
            .with_context(|| format!("parse docs config yaml: {}", path.display())),
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("parse docs config json: {}", path.display())),
        _ => anyhow::bail!(
            "unsupported docs config extension (expected .yaml, .yml or .json): {}",
            path.display()
        ),
    }
}

pub fn render(config: &DocsConfig, format: DocsFormat) -> anyhow::Result<String> {
    match format {
        DocsFormat::Yaml => serde_yaml::to_string(config).context("serialize docs config yaml"),
        DocsFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(config).context("serialize docs config json")?;
            json.push('\n');
            Ok(json)
        }
        DocsFormat::Conf => render_conf(config),
    }
}

fn render_conf(config: &DocsConfig) -> anyhow::Result<String> {
    let autodoc = &config.autodoc_default_options;
    let mut out = String::new();

    writeln!(out, "autodoc_default_options = {{")?;
    writeln!(out, "    'members': {},", py_bool(autodoc.members))?;
    writeln!(out, "    'member_order': '{}',", autodoc.member_order.as_str())?;
    writeln!(out, "    'show-inheritance': {},", py_bool(autodoc.show_inheritance))?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "autosummary_generate = {}", py_bool(config.autosummary_generate))?;
    writeln!(
        out,
        "autosummary_generate_overwrite = {}",
        py_bool(config.autosummary_generate_overwrite)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "numpydoc_show_class_members = {}",
        py_bool(config.numpydoc_show_class_members)
    )?;

    Ok(out)
}

fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
