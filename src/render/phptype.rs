//! Canonical text for type expressions.

use std::fmt;

use crate::ast::{Literal, Name, Param, ShapeElem, Type};

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Union(types) => join(f, types, "|"),
            Type::Intersect(types) => join(f, types, "&"),
            Type::Paren(inner) => write!(f, "({})", inner),
            Type::Array(elem) => write!(f, "{}[]", elem),
            Type::Nullable(inner) => write!(f, "?{}", inner),
            Type::ArrayShape(elems) => shape(f, "array", elems),
            Type::ObjectShape(elems) => shape(f, "object", elems),
            Type::Generic { base, params } => {
                write!(f, "{}<", base)?;
                join(f, params, ", ")?;
                f.write_str(">")
            }
            Type::Named(name) => write!(f, "{}", name),
            Type::ConstFetch { class, name } => write!(f, "{}::{}", class, name),
            Type::Literal(lit) => write!(f, "{}", lit),
            Type::This => f.write_str("$this"),
            Type::Callable { params, result } => {
                f.write_str("callable")?;
                if params.is_empty() && result.is_none() {
                    return Ok(());
                }
                f.write_str("(")?;
                join(f, params, ", ")?;
                f.write_str(")")?;
                if let Some(result) = result {
                    write!(f, ": {}", result)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fully_qualified {
            f.write_str("\\")?;
        }
        f.write_str(&self.parts.join("\\"))
    }
}

impl fmt::Display for ShapeElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {}", self.key, optional, self.ty)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// `type [&][...]$name[ = default]`, as in a signature.
impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if self.name.is_some() {
            write!(f, " {}", self.var())?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

impl Param {
    /// The `[&][...]$name` part; empty for an anonymous parameter.
    pub fn var(&self) -> String {
        let Some(name) = &self.name else {
            return String::new();
        };
        let mut out = String::new();
        if self.by_ref {
            out.push('&');
        }
        if self.variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(name);
        out
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn shape(f: &mut fmt::Formatter<'_>, keyword: &str, elems: &[ShapeElem]) -> fmt::Result {
    f.write_str(keyword)?;
    if elems.is_empty() {
        return Ok(());
    }
    f.write_str("{")?;
    join(f, elems, ", ")?;
    f.write_str("}")
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_type;

    fn canonical(src: &str) -> String {
        parse_type(src).unwrap().to_string()
    }

    #[test]
    fn test_unions_and_intersections() {
        assert_eq!(canonical("int | float"), "int|float");
        assert_eq!(canonical("Traversable &Countable"), "Traversable&Countable");
        assert_eq!(canonical("( int |float )[]"), "(int|float)[]");
    }

    #[test]
    fn test_names() {
        assert_eq!(canonical("\\Foo\\ Bar \\DateTime"), "\\Foo\\Bar\\DateTime");
        assert_eq!(canonical("? float"), "?float");
    }

    #[test]
    fn test_shapes() {
        assert_eq!(
            canonical("array{20?:int, foo :string | \\ DateTime,}"),
            "array{20?: int, foo: string|\\DateTime}"
        );
        assert_eq!(canonical("object"), "object");
        assert_eq!(canonical("array<int , string>"), "array<int, string>");
    }

    #[test]
    fn test_callables() {
        assert_eq!(canonical("callable"), "callable");
        assert_eq!(canonical("callable()"), "callable");
        assert_eq!(
            canonical("callable(int &...$b, string $c = 'x'):void"),
            "callable(int &...$b, string $c = 'x'): void"
        );
    }

    #[test]
    fn test_const_fetch() {
        assert_eq!(canonical("self :: ANY_*"), "self::ANY_*");
        assert_eq!(canonical("Foo::*[]"), "Foo::*[]");
    }
}
