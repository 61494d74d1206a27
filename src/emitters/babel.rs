use anyhow::Result;
use serde_json::json;

use super::{json_document, ConfigEmitter, ConfigFile};
use crate::types::ScaffoldConfig;

pub const BABEL_CONFIG: &str = ".babelrc";

pub struct BabelEmitter;

impl ConfigEmitter for BabelEmitter {
    fn name(&self) -> &'static str {
        "babel"
    }

    fn render(&self, config: &ScaffoldConfig) -> Result<Vec<ConfigFile>> {
        if !config.enable_babelrc {
            return Ok(Vec::new());
        }
        let babelrc = json!({
            "presets": [
                "@babel/preset-react",
                ["@babel/preset-env", { "modules": false }]
            ]
        });
        Ok(vec![ConfigFile {
            path: BABEL_CONFIG,
            contents: json_document(&babelrc)?,
        }])
    }
}
