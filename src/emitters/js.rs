//! A small JavaScript expression tree, enough to describe a webpack config
//! module and render it as readable source.

const INDENT: &str = "  ";

#[derive(Clone, Debug, PartialEq)]
pub enum JsValue {
    Str(String),
    Number(i64),
    Bool(bool),
    /// Regular expression literal, stored without the surrounding slashes.
    Regex(String),
    Ident(String),
    Call(String, Vec<JsValue>),
    New(String, Vec<JsValue>),
    Array(Vec<JsValue>),
    Object(Vec<(String, JsValue)>),
}

impl JsValue {
    pub fn str(value: &str) -> Self {
        JsValue::Str(value.to_string())
    }

    pub fn regex(pattern: &str) -> Self {
        JsValue::Regex(pattern.to_string())
    }

    pub fn ident(name: &str) -> Self {
        JsValue::Ident(name.to_string())
    }

    pub fn call(callee: &str, args: Vec<JsValue>) -> Self {
        JsValue::Call(callee.to_string(), args)
    }

    pub fn new_instance(class: &str, args: Vec<JsValue>) -> Self {
        JsValue::New(class.to_string(), args)
    }

    pub fn array<I: IntoIterator<Item = JsValue>>(items: I) -> Self {
        JsValue::Array(items.into_iter().collect())
    }

    pub fn strings(items: &[&str]) -> Self {
        JsValue::array(items.iter().map(|s| JsValue::str(s)))
    }

    pub fn object<I: IntoIterator<Item = (&'static str, JsValue)>>(entries: I) -> Self {
        JsValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, 0);
        out
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        match self {
            JsValue::Str(s) => write_string(out, s),
            JsValue::Number(n) => out.push_str(&n.to_string()),
            JsValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            JsValue::Regex(pattern) => {
                out.push('/');
                out.push_str(pattern);
                out.push('/');
            }
            JsValue::Ident(name) => out.push_str(name),
            JsValue::Call(callee, args) => {
                out.push_str(callee);
                write_args(out, args, depth);
            }
            JsValue::New(class, args) => {
                out.push_str("new ");
                out.push_str(class);
                write_args(out, args, depth);
            }
            JsValue::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, depth + 1);
                    item.write_to(out, depth + 1);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push(']');
            }
            JsValue::Object(entries) => {
                if entries.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (i, (key, value)) in entries.iter().enumerate() {
                    push_indent(out, depth + 1);
                    if is_identifier(key) {
                        out.push_str(key);
                    } else {
                        write_string(out, key);
                    }
                    out.push_str(": ");
                    value.write_to(out, depth + 1);
                    if i + 1 < entries.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push('}');
            }
        }
    }
}

/// A CommonJS module: `require` bindings followed by an exported constant.
#[derive(Clone, Debug, PartialEq)]
pub struct JsModule {
    pub requires: Vec<(String, String)>,
    pub export_name: String,
    pub export: JsValue,
}

impl JsModule {
    pub fn new(export_name: &str, export: JsValue) -> Self {
        Self {
            requires: Vec::new(),
            export_name: export_name.to_string(),
            export,
        }
    }

    pub fn require(mut self, binding: &str, module: &str) -> Self {
        self.requires.push((binding.to_string(), module.to_string()));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (binding, module) in &self.requires {
            out.push_str(&format!("const {} = require(", binding));
            write_string(&mut out, module);
            out.push_str(");\n");
        }
        if !self.requires.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("const {} = {};\n", self.export_name, self.export.render()));
        out.push_str(&format!("module.exports = {};\n", self.export_name));
        out
    }
}

fn write_args(out: &mut String, args: &[JsValue], depth: usize) {
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        arg.write_to(out, depth);
    }
    out.push(')');
}

fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
