mod babel;
mod eslint;
pub mod js;
mod typescript;
mod webpack;

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::types::ScaffoldConfig;

pub use babel::BabelEmitter;
pub use eslint::EslintEmitter;
pub use typescript::TypeScriptEmitter;
pub use webpack::WebpackEmitter;

/// A rendered configuration file, relative to the project root.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigFile {
    pub path: &'static str,
    pub contents: String,
}

pub trait ConfigEmitter {
    fn name(&self) -> &'static str;

    /// Renders the files this emitter contributes. Returns nothing when the
    /// emitter's feature is disabled.
    fn render(&self, config: &ScaffoldConfig) -> Result<Vec<ConfigFile>>;
}

pub fn emitters() -> Vec<Box<dyn ConfigEmitter>> {
    vec![
        Box::new(WebpackEmitter),
        Box::new(EslintEmitter),
        Box::new(TypeScriptEmitter),
        Box::new(BabelEmitter),
    ]
}

pub fn render_all(config: &ScaffoldConfig) -> Result<Vec<ConfigFile>> {
    let mut files = Vec::new();
    for emitter in emitters() {
        let rendered = emitter
            .render(config)
            .with_context(|| format!("Failed to render {} config", emitter.name()))?;
        log::debug!("{} emitter produced {} file(s)", emitter.name(), rendered.len());
        files.extend(rendered);
    }
    Ok(files)
}

pub fn write_all(root: &Path, files: &[ConfigFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in files {
        let path = root.join(file.path);
        fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Pretty-prints a JSON document, key order preserved, with a trailing newline.
pub(crate) fn json_document(value: &serde_json::Value) -> Result<String> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    Ok(contents)
}
