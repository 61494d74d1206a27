use anyhow::Result;
use serde_json::{json, Map, Value};

use super::{json_document, ConfigEmitter, ConfigFile};
use crate::types::ScaffoldConfig;

pub const TSCONFIG: &str = "tsconfig.json";
pub const TSLINT_CONFIG: &str = "tslint.json";

/// Emits the compiler options and the tslint style rules.
pub struct TypeScriptEmitter;

impl ConfigEmitter for TypeScriptEmitter {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn render(&self, config: &ScaffoldConfig) -> Result<Vec<ConfigFile>> {
        if !config.enable_typescript {
            return Ok(Vec::new());
        }
        Ok(vec![
            ConfigFile {
                path: TSCONFIG,
                contents: json_document(&tsconfig())?,
            },
            ConfigFile {
                path: TSLINT_CONFIG,
                contents: json_document(&tslint())?,
            },
        ])
    }
}

fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "outDir": "./dist/",
            "allowUnreachableCode": false,
            "allowUnusedLabels": false,
            "declaration": true,
            "forceConsistentCasingInFileNames": true,
            "lib": ["es2016", "dom"],
            "module": "commonjs",
            "noEmitOnError": true,
            "noFallthroughCasesInSwitch": true,
            "noImplicitReturns": true,
            "pretty": true,
            "sourceMap": true,
            "strict": true,
            "target": "ESNext",
            "jsx": "react",
            "declarationDir": "./src/types/",
            "experimentalDecorators": true
        },
        "include": ["./src"],
        "exclude": ["node_modules"]
    })
}

fn tslint() -> Value {
    let rules: Vec<(&str, Value)> = vec![
        ("array-type", json!([true, "array-simple"])),
        ("arrow-return-shorthand", json!(true)),
        (
            "ban",
            json!([
                true,
                {"name": ["it", "skip"]},
                {"name": ["it", "only"]},
                {"name": ["it", "async", "skip"]},
                {"name": ["it", "async", "only"]},
                {"name": ["describe", "skip"]},
                {"name": ["describe", "only"]},
                {"name": "parseInt", "message": "tsstyle#type-coercion"},
                {"name": "parseFloat", "message": "tsstyle#type-coercion"},
                {"name": "Array", "message": "tsstyle#array-constructor"},
                {"name": ["*", "innerText"], "message": "Use .textContent instead. tsstyle#browser-oddities"}
            ]),
        ),
        ("ban-ts-ignore", json!(true)),
        (
            "ban-types",
            json!([
                true,
                ["Object", "Use {} instead."],
                ["String", "Use 'string' instead."],
                ["Number", "Use 'number' instead."],
                ["Boolean", "Use 'boolean' instead."]
            ]),
        ),
        ("class-name", json!(true)),
        ("curly", json!([true, "ignore-same-line"])),
        ("deprecation", json!(true)),
        ("forin", json!(true)),
        ("interface-name", json!([true, "never-prefix"])),
        ("interface-over-type-literal", json!(true)),
        ("jsdoc-format", json!(true)),
        ("label-position", json!(true)),
        ("member-access", json!([true, "no-public"])),
        ("new-parens", json!(true)),
        ("no-angle-bracket-type-assertion", json!(true)),
        ("no-any", json!(true)),
        ("no-arg", json!(true)),
        ("no-conditional-assignment", json!(true)),
        ("no-construct", json!(true)),
        ("no-debugger", json!(true)),
        ("no-default-export", json!(true)),
        ("no-duplicate-variable", json!(true)),
        ("no-inferrable-types", json!(true)),
        ("no-namespace", json!([true, "allow-declarations"])),
        ("no-reference", json!(true)),
        ("no-string-throw", json!(true)),
        ("no-return-await", json!(true)),
        ("no-unsafe-finally", json!(true)),
        ("no-unused-expression", json!(true)),
        ("no-var-keyword", json!(true)),
        ("object-literal-shorthand", json!(true)),
        (
            "only-arrow-functions",
            json!([true, "allow-declarations", "allow-named-functions"]),
        ),
        ("prefer-const", json!(true)),
        ("radix", json!(true)),
        (
            "semicolon",
            json!([true, "always", "ignore-bound-class-methods"]),
        ),
        ("switch-default", json!(true)),
        (
            "trailing-comma",
            json!([
                true,
                {
                    "multiline": {
                        "objects": "always",
                        "arrays": "always",
                        "functions": "never",
                        "typeLiterals": "ignore"
                    },
                    "esSpecCompliant": true
                }
            ]),
        ),
        ("triple-equals", json!([true, "allow-null-check"])),
        ("use-isnan", json!(true)),
        (
            "variable-name",
            json!([
                true,
                "check-format",
                "ban-keywords",
                "allow-leading-underscore",
                "allow-trailing-underscore"
            ]),
        ),
    ];

    let rules: Map<String, Value> = rules
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    json!({ "rules": rules })
}
