use anyhow::Result;

use super::js::{JsModule, JsValue};
use super::{ConfigEmitter, ConfigFile};
use crate::types::ScaffoldConfig;

pub const WEBPACK_CONFIG: &str = "webpackDevServer.js";

pub struct WebpackEmitter;

impl ConfigEmitter for WebpackEmitter {
    fn name(&self) -> &'static str {
        "webpack"
    }

    fn render(&self, config: &ScaffoldConfig) -> Result<Vec<ConfigFile>> {
        Ok(vec![ConfigFile {
            path: WEBPACK_CONFIG,
            contents: webpack_module(config).render(),
        }])
    }
}

pub fn webpack_module(config: &ScaffoldConfig) -> JsModule {
    let dist_dir = |f: &str| JsValue::call(f, vec![JsValue::ident("__dirname"), JsValue::str("dist")]);

    let config_object = JsValue::object([
        (
            "entry",
            JsValue::Str(format!("./src/index.{}", config.entry_extension())),
        ),
        (
            "output",
            JsValue::object([
                ("path", dist_dir("path.resolve")),
                ("filename", JsValue::str("[name].[contenthash].js")),
            ]),
        ),
        (
            "devServer",
            JsValue::object([
                ("index", JsValue::str("index.html")),
                ("port", JsValue::Number(config.port.into())),
                ("contentBase", dist_dir("path.join")),
            ]),
        ),
        ("module", JsValue::object([("rules", JsValue::array(rules(config)))])),
        (
            "resolve",
            JsValue::object([("extensions", JsValue::strings(&[".js", ".jsx", ".tsx", ".ts"]))]),
        ),
        (
            "plugins",
            JsValue::array([JsValue::new_instance(
                "HtmlWebpackPlugin",
                vec![JsValue::object([
                    (
                        "template",
                        JsValue::call("require", vec![JsValue::str("html-webpack-template")]),
                    ),
                    ("inject", JsValue::Bool(false)),
                    ("appMountId", JsValue::str("app")),
                ])],
            )]),
        ),
        (
            "optimization",
            JsValue::object([
                ("runtimeChunk", JsValue::str("single")),
                (
                    "splitChunks",
                    JsValue::object([(
                        "cacheGroups",
                        JsValue::object([(
                            "vendor",
                            JsValue::object([
                                ("test", JsValue::regex(r"[\\/]node_modules[\\/]")),
                                ("name", JsValue::str("vendors")),
                                ("chunks", JsValue::str("all")),
                            ]),
                        )]),
                    )]),
                ),
            ]),
        ),
    ]);

    JsModule::new("config", config_object)
        .require("webpack", "webpack")
        .require("path", "path")
        .require("HtmlWebpackPlugin", "html-webpack-plugin")
}

/// Optional rules first (Sass, then TypeScript), then the rules every
/// scaffold carries.
pub fn rules(config: &ScaffoldConfig) -> Vec<JsValue> {
    let mut rules = Vec::new();
    if config.enable_sass {
        rules.push(sass_rule());
    }
    if config.enable_typescript {
        rules.push(typescript_rule());
    }
    rules.extend(fixed_rules());
    rules
}

fn sass_rule() -> JsValue {
    JsValue::object([
        ("test", JsValue::regex(r"\.scss$")),
        ("use", JsValue::strings(&["style-loader", "css-loader", "sass-loader"])),
    ])
}

fn typescript_rule() -> JsValue {
    JsValue::object([
        ("test", JsValue::regex(r"\.(ts|tsx)?$")),
        ("loader", JsValue::str("ts-loader")),
        ("exclude", JsValue::regex("node_modules")),
    ])
}

fn fixed_rules() -> Vec<JsValue> {
    vec![
        JsValue::object([
            ("test", JsValue::regex(r"\.(js|jsx)$")),
            ("use", JsValue::str("babel-loader")),
            ("exclude", JsValue::regex("node_modules")),
        ]),
        JsValue::object([
            ("test", JsValue::regex(r"\.css$")),
            ("use", JsValue::strings(&["style-loader", "css-loader"])),
        ]),
        JsValue::object([
            ("test", JsValue::regex(r"\.svg$")),
            ("use", JsValue::str("file-loader")),
        ]),
        JsValue::object([
            ("test", JsValue::regex(r"\.png$")),
            (
                "use",
                JsValue::array([JsValue::object([
                    ("loader", JsValue::str("url-loader")),
                    ("options", JsValue::object([("mimetype", JsValue::str("image/png"))])),
                ])]),
            ),
        ]),
    ]
}
