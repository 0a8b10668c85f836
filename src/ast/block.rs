use serde::Serialize;

use super::phptype::{Param, Type};

/// One parsed doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Block {
    /// Lines in document order.
    pub lines: Vec<Line>,
    /// Whitespace preceding the opening `/**`.
    pub indent: String,
    /// The source had no newline right after `/**`.
    pub prefer_oneline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    Text(TextLine),
    Tag(Tag),
}

/// Free-form commentary without the leading `*` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub value: String,
}

impl TextLine {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Param(ParamTag),
    Return(ReturnTag),
    Property(PropertyTag),
    Method(MethodTag),
    Var(VarTag),
    Throws(ThrowsTag),
    Extends(ExtendsTag),
    Implements(ImplementsTag),
    Uses(UsesTag),
    Template(TemplateTag),
    TypeDef(TypeDefTag),
    Other(OtherTag),
}

impl Tag {
    /// The tag keyword including `@`, as printed.
    pub fn name(&self) -> String {
        let name = match self {
            Tag::Param(_) => "param",
            Tag::Return(_) => "return",
            Tag::Property(p) if p.read_only => "property-read",
            Tag::Property(p) if p.write_only => "property-write",
            Tag::Property(_) => "property",
            Tag::Method(_) => "method",
            Tag::Var(_) => "var",
            Tag::Throws(_) => "throws",
            Tag::Extends(_) => "extends",
            Tag::Implements(_) => "implements",
            Tag::Uses(_) => "uses",
            Tag::Template(_) => "template",
            Tag::TypeDef(_) => "phpstan-type",
            Tag::Other(o) => o.name.as_str(),
        };
        format!("@{}", name)
    }

    /// Trailing free text.
    pub fn desc(&self) -> &str {
        match self {
            Tag::Param(t) => &t.desc,
            Tag::Return(t) => &t.desc,
            Tag::Property(t) => &t.desc,
            Tag::Method(t) => &t.desc,
            Tag::Var(t) => &t.desc,
            Tag::Throws(t) => &t.desc,
            Tag::Extends(t) => &t.desc,
            Tag::Implements(t) => &t.desc,
            Tag::Uses(t) => &t.desc,
            Tag::Template(t) => &t.desc,
            Tag::TypeDef(t) => &t.desc,
            Tag::Other(t) => &t.desc,
        }
    }
}

/// `@param`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamTag {
    pub param: Param,
    pub desc: String,
}

/// `@return`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnTag {
    pub ty: Type,
    pub desc: String,
}

/// `@property`, `@property-read` and `@property-write`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyTag {
    pub read_only: bool,
    pub write_only: bool,
    pub ty: Type,
    /// Property name without `$`.
    pub var: String,
    pub desc: String,
}

/// `@method [static] [Result] name(params)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodTag {
    pub is_static: bool,
    pub result: Option<Type>,
    pub name: String,
    pub params: Vec<Param>,
    pub desc: String,
}

/// `@var`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarTag {
    pub ty: Type,
    /// Variable name without `$`.
    pub var: Option<String>,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThrowsTag {
    pub ty: Type,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtendsTag {
    pub ty: Type,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImplementsTag {
    pub ty: Type,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsesTag {
    pub ty: Type,
    pub desc: String,
}

/// `@template T [of Bound]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateTag {
    pub param: String,
    pub bound: Option<Type>,
    pub desc: String,
}

/// `@phpstan-type Name Type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDefTag {
    pub name: String,
    pub ty: Type,
    pub desc: String,
}

/// Any tag without a dedicated grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherTag {
    /// Tag name without `@`.
    pub name: String,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn other(name: &str) -> Tag {
        Tag::Other(OtherTag {
            name: name.to_string(),
            desc: "by Jack".to_string(),
        })
    }

    #[test]
    fn test_tag_name() {
        let read = Tag::Property(PropertyTag {
            read_only: true,
            write_only: false,
            ty: Type::named("int"),
            var: "id".to_string(),
            desc: String::new(),
        });
        assert_eq!(read.name(), "@property-read");
        assert_eq!(other("author").name(), "@author");
    }

    #[test]
    fn test_tag_desc() {
        assert_eq!(other("author").desc(), "by Jack");
    }
}
