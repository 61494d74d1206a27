use crate::types::ScaffoldConfig;

/// Packages installed as regular dependencies of every scaffold.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["react", "react-dom"];

/// Build tooling installed as dev dependencies of every scaffold.
pub const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "@babel/core",
    "@babel/preset-env",
    "@babel/preset-react",
    "babel-loader",
    "css-loader",
    "file-loader",
    "html-webpack-plugin",
    "html-webpack-template",
    "style-loader",
    "url-loader",
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Feature {
    TypeScript,
    Sass,
    Linting,
}

impl Feature {
    /// Install order of the optional dev dependency groups.
    pub const ALL: [Feature; 3] = [Feature::TypeScript, Feature::Sass, Feature::Linting];

    pub fn dev_dependencies(self) -> &'static [&'static str] {
        match self {
            Feature::TypeScript => &["@types/react", "@types/react-dom", "ts-loader", "typescript"],
            Feature::Sass => &["node-sass", "sass-loader"],
            Feature::Linting => &[
                "eslint",
                "eslint-config-airbnb",
                "eslint-loader",
                "eslint-plugin-import",
                "eslint-plugin-jsx-a11y",
                "eslint-plugin-react",
            ],
        }
    }

    pub fn is_enabled(self, config: &ScaffoldConfig) -> bool {
        match self {
            Feature::TypeScript => config.enable_typescript,
            Feature::Sass => config.enable_sass,
            Feature::Linting => config.enable_linting,
        }
    }
}

pub fn runtime_dependencies() -> Vec<&'static str> {
    RUNTIME_DEPENDENCIES.to_vec()
}

/// The base dev set followed by the set of every enabled feature, in
/// `Feature::ALL` order, without repeats.
pub fn dev_dependencies(config: &ScaffoldConfig) -> Vec<&'static str> {
    let mut packages: Vec<&'static str> = BASE_DEV_DEPENDENCIES.to_vec();
    for feature in Feature::ALL {
        if !feature.is_enabled(config) {
            continue;
        }
        for &package in feature.dev_dependencies() {
            if !packages.contains(&package) {
                packages.push(package);
            }
        }
    }
    packages
}
