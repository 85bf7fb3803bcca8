// ABOUTME: Command implementations for the stencil CLI
// ABOUTME: Handles execution of substitute, resolve, and render commands

use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::config::Config;
use crate::interpolate;
use crate::path;
use crate::walker::{self, ParamTable};

/// Substitute every placeholder in a JSON data file
pub async fn substitute(
    data_path: PathBuf,
    params_path: Option<PathBuf>,
    inline: ParamTable,
    overwrite_path: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    config: &Config,
) -> Result<()> {
    info!("Substituting placeholders in: {}", data_path.display());

    let mut data = read_json(&data_path).await?;
    let parameters = assemble_parameters(params_path, inline, config).await?;
    let overwrite = match overwrite_path {
        Some(p) => Some(read_param_table(&p).await?),
        None => None,
    };

    walker::walk_and_substitute(&mut data, &parameters, overwrite.as_ref())
        .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e))?;

    let rendered = render_json(&data, pretty)?;
    match output {
        Some(output_path) => {
            fs::write(&output_path, rendered).await?;
            info!("Substituted tree written to: {}", output_path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Resolve a path expression against a JSON data file
pub async fn resolve(data_path: PathBuf, expr: String, pretty: bool, _config: &Config) -> Result<()> {
    info!("Resolving '{}' against: {}", expr, data_path.display());

    let data = read_json(&data_path).await?;
    let segments = path::parse(&expr);
    let resolved = path::resolve(&data, &segments)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e))?;

    println!("{}", render_json(resolved, pretty)?);

    Ok(())
}

/// Run a single template string through the interpolator
pub async fn render(
    template: String,
    params_path: Option<PathBuf>,
    inline: ParamTable,
    config: &Config,
) -> Result<()> {
    let parameters = assemble_parameters(params_path, inline, config).await?;

    let rendered = interpolate::interpolate(&Value::Object(parameters), &template)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e))?;

    match rendered {
        Value::String(text) => println!("{}", text),
        other => println!("{}", other),
    }

    Ok(())
}

/// Layer the parameter table: config defaults, then a params file, then
/// inline key=value pairs, later layers winning key for key.
async fn assemble_parameters(
    params_path: Option<PathBuf>,
    inline: ParamTable,
    config: &Config,
) -> Result<ParamTable> {
    let mut parameters = config.parameters.clone();

    if let Some(p) = params_path {
        for (key, value) in read_param_table(&p).await? {
            parameters.insert(key, value);
        }
    }

    for (key, value) in inline {
        parameters.insert(key, value);
    }

    info!("Assembled parameter table with {} entries", parameters.len());
    Ok(parameters)
}

async fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}' as JSON: {}", path.display(), e))
}

async fn read_param_table(path: &Path) -> Result<ParamTable> {
    match read_json(path).await? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow::anyhow!(
            "Parameter file '{}' must hold a top-level JSON object",
            path.display()
        )),
    }
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
