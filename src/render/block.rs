//! Layout of block lines into alignable rows.

use crate::ast::{Block, Line, Tag};

use super::align::{align, Row};

/// Space between aligned columns.
const PADDING: usize = 1;

/// Render a block to canonical text, terminated by a newline.
pub(crate) fn render(block: &Block) -> String {
    let rows: Vec<Row> = block.lines.iter().map(layout).collect();
    let lines: Vec<String> = align(&rows, PADDING)
        .iter()
        .map(|line| trim_trailing(line).to_string())
        .collect();

    let indent = block.indent.as_str();
    let mut out = String::new();
    out.push_str(indent);
    out.push_str("/**");

    if block.prefer_oneline && lines.len() <= 1 {
        if let Some(line) = lines.first().filter(|l| !l.is_empty()) {
            out.push(' ');
            out.push_str(line);
        }
        out.push_str(" */\n");
        return out;
    }

    out.push('\n');
    for line in &lines {
        out.push_str(indent);
        out.push_str(" *");
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(" */\n");
    out
}

/// Lay out one line as aligned cells plus a verbatim tail.
fn layout(line: &Line) -> Row {
    let tag = match line {
        Line::Text(text) => return Row::new(Vec::new(), text.value.as_str()),
        Line::Tag(tag) => tag,
    };
    let name = tag.name();
    let desc = tag.desc();

    match tag {
        Tag::Param(t) => Row::new(vec![name, t.param.ty.to_string()], tail(&[&t.param.var(), desc])),
        Tag::Return(t) => Row::new(vec![name, t.ty.to_string()], desc),
        Tag::Throws(t) => Row::new(vec![name, t.ty.to_string()], desc),
        Tag::Extends(t) => Row::new(vec![name, t.ty.to_string()], desc),
        Tag::Implements(t) => Row::new(vec![name, t.ty.to_string()], desc),
        Tag::Uses(t) => Row::new(vec![name, t.ty.to_string()], desc),
        Tag::Property(t) => {
            let var = format!("${}", t.var);
            Row::new(vec![name, t.ty.to_string()], tail(&[&var, desc]))
        }
        Tag::Var(t) => {
            let var = t.var.as_ref().map(|v| format!("${}", v)).unwrap_or_default();
            Row::new(vec![name, t.ty.to_string()], tail(&[&var, desc]))
        }
        Tag::Method(t) => {
            let mut sig = String::new();
            if t.is_static {
                sig.push_str("static ");
            }
            if let Some(result) = &t.result {
                sig.push_str(&result.to_string());
                sig.push(' ');
            }
            sig.push_str(&t.name);
            sig.push('(');
            let params: Vec<String> = t.params.iter().map(|p| p.to_string()).collect();
            sig.push_str(&params.join(", "));
            sig.push(')');
            Row::new(vec![name, sig], desc)
        }
        Tag::Template(t) => {
            let decl = match &t.bound {
                Some(bound) => format!("{} of {}", t.param, bound),
                None => t.param.clone(),
            };
            Row::new(vec![name, decl], desc)
        }
        Tag::TypeDef(t) => Row::new(vec![name, t.name.clone(), t.ty.to_string()], desc),
        Tag::Other(_) => Row::new(vec![name], desc),
    }
}

/// Join the non-empty parts of a tail with single spaces.
fn tail(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_trailing(line: &str) -> &str {
    line.trim_end_matches([' ', '\t'])
}
