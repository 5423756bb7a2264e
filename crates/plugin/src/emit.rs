//! A small intermediate representation for the emitted TypeScript, plus
//! the one printer that renders it.
//!
//! Composition code builds typed declarations (object-literal methods with
//! parameter lists, type aliases, raw statement blocks); all formatting —
//! indentation units, parameter joining, multi-line indenting — lives
//! here, so output shape is testable independent of composition logic.

use std::fmt::Write as _;

/// One indentation level: two spaces.
pub(crate) const INDENT: &str = "  ";

/// Indent every line of `text` by `levels` indentation levels.
/// Blank lines are left untouched.
pub(crate) fn indent_multiline(text: &str, levels: usize) -> String {
    let prefix = INDENT.repeat(levels);
    let mut out = String::with_capacity(text.len() + prefix.len() * 4);
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(&prefix);
        }
        out.push_str(line);
    }
    out
}

/// A typed function parameter.
#[derive(Debug, Clone)]
pub(crate) struct Param {
    pub name: &'static str,
    pub optional: bool,
    pub ty: String,
}

impl Param {
    pub(crate) fn required(name: &'static str, ty: impl Into<String>) -> Self {
        Self {
            name,
            optional: false,
            ty: ty.into(),
        }
    }

    pub(crate) fn optional(name: &'static str, ty: impl Into<String>) -> Self {
        Self {
            name,
            optional: true,
            ty: ty.into(),
        }
    }
}

/// An object-literal method: `name(params) { body }`.
///
/// `body` may span multiple lines; continuation lines keep their relative
/// indentation and the whole body is placed one level inside the braces.
#[derive(Debug, Clone)]
pub(crate) struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub body: String,
}

impl Method {
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('(');
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let marker = if param.optional { "?" } else { "" };
            let _ = write!(out, "{}{marker}: {}", param.name, param.ty);
        }
        out.push_str(") {\n");
        out.push_str(&indent_multiline(&self.body, 1));
        out.push_str("\n}");
        out
    }
}

/// A type alias declaration. Generic parameters, if any, are part of
/// `name`; the trailing semicolon is added by the printer.
#[derive(Debug, Clone)]
pub(crate) struct TypeAlias {
    pub exported: bool,
    pub name: String,
    pub body: String,
}

impl TypeAlias {
    fn render(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        format!("{export}type {} = {};", self.name, self.body)
    }
}

/// A top-level piece of the assembled output.
#[derive(Debug, Clone)]
pub(crate) enum Declaration {
    TypeAlias(TypeAlias),
    /// A pre-indented statement block emitted verbatim.
    Block(String),
}

/// Render declarations in order, newline-joined.
pub(crate) fn render_document(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|decl| match decl {
            Declaration::TypeAlias(alias) => alias.render(),
            Declaration::Block(block) => block.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
