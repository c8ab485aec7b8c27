use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use evelina_core::{build_payload, fill_placeholders, PreviewRenderer};
use evelina_models::embed::EmbedValue;
use evelina_script::{encode, import};

use crate::cli::Command;
use crate::config::Config;

/// Execute one subcommand and return what should be printed on stdout.
pub fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Encode { input } => {
            let raw = read_input(input.as_deref())?;
            let value = parse_embed_json(&raw, &config.embed.default_color)?;
            Ok(encode(&value))
        }
        Command::Decode { input } => {
            let value = read_script(input.as_deref())?;
            Ok(serde_json::to_string_pretty(&value)?)
        }
        Command::Preview { input } => {
            let bytes = read_input(input.as_deref())?;
            let script = String::from_utf8(bytes).context("embed script is not valid UTF-8")?;
            let renderer = PreviewRenderer::new(config.preview.clone(), config.cache.ttl());
            let rendered = renderer.render(&script);
            Ok(serde_json::to_string_pretty(&*rendered)?)
        }
        Command::Payload { input, raw } => {
            let mut value = read_script(input.as_deref())?;
            if !raw {
                value = fill_placeholders(&value, &config.preview);
            }
            let payload = build_payload(&value, Utc::now()).context("cannot build message")?;
            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}

fn read_script(path: Option<&Path>) -> Result<EmbedValue> {
    let bytes = read_input(path)?;
    let value = import(&bytes).context("cannot import embed script")?;
    tracing::debug!(
        fields = value.fields.len(),
        buttons = value.buttons.len(),
        "imported script"
    );
    Ok(value)
}

/// Parse a JSON embed, filling `color` from config when the input omits it.
fn parse_embed_json(raw: &[u8], default_color: &str) -> Result<EmbedValue> {
    let mut json: serde_json::Value =
        serde_json::from_slice(raw).context("input is not valid JSON")?;
    if let Some(object) = json.as_object_mut() {
        object
            .entry("color")
            .or_insert_with(|| serde_json::Value::String(default_color.to_string()));
    }
    serde_json::from_value(json).context("input is not a valid embed")
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
