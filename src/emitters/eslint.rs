use anyhow::Result;
use serde_json::{json, Value};

use super::{json_document, ConfigEmitter, ConfigFile};
use crate::types::ScaffoldConfig;

pub const ESLINT_CONFIG: &str = ".eslintrc.json";

pub struct EslintEmitter;

impl ConfigEmitter for EslintEmitter {
    fn name(&self) -> &'static str {
        "eslint"
    }

    fn render(&self, config: &ScaffoldConfig) -> Result<Vec<ConfigFile>> {
        if !config.enable_linting {
            return Ok(Vec::new());
        }
        Ok(vec![ConfigFile {
            path: ESLINT_CONFIG,
            contents: json_document(&eslintrc())?,
        }])
    }
}

fn eslintrc() -> Value {
    json!({
        "env": {
            "browser": true,
            "node": true,
            "es6": true
        },
        "extends": "airbnb",
        "globals": {
            "Atomics": "readonly",
            "SharedArrayBuffer": "readonly"
        },
        "parserOptions": {
            "ecmaFeatures": {
                "jsx": true
            },
            "ecmaVersion": 2018,
            "sourceType": "module"
        },
        "plugins": ["react"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::config_fixtures::scaffold_config;

    #[test]
    fn test_disabled_without_linting() {
        let files = EslintEmitter.render(&scaffold_config(true, true, false)).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_static_document() {
        let first = EslintEmitter.render(&scaffold_config(false, false, true)).unwrap();
        let second = EslintEmitter.render(&scaffold_config(true, true, true)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].path, ".eslintrc.json");

        let parsed: Value = serde_json::from_str(&first[0].contents).unwrap();
        assert_eq!(parsed["extends"], "airbnb");
        assert_eq!(parsed["parserOptions"]["ecmaVersion"], 2018);
        assert!(first[0].contents.ends_with("}\n"));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let contents = json_document(&eslintrc()).unwrap();
        let env = contents.find("\"env\"").unwrap();
        let plugins = contents.find("\"plugins\"").unwrap();
        assert!(env < plugins);
        assert!(contents.starts_with("{\n  \"env\": {\n    \"browser\": true,"));
    }
}
