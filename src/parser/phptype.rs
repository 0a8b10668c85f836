//! Type expression grammar.
//!
//! ```text
//! Type       = Atomic { "|" Atomic } | Atomic { "&" Atomic }
//! Atomic     = ( "(" Type ")" | "$this" | Literal | ["?"] Basic ) { "[" "]" }
//! Basic      = ( Shape | Callable | "static" | Name ) ["<" Types ">"] ["::" Const]
//! Shape      = ("array" | "object") ["{" Key ["?"] ":" Type { "," ... } [","] "}"]
//! Callable   = "callable" ["(" Params ")" [":" Type]]
//! Name       = ["\"] Ident { "\" Ident }
//! Const      = Ident ["*"] | "*"
//! ```

use crate::ast::{Literal, Name, Param, ShapeElem, Type};

use super::stream::{PResult, Parser};
use super::token::TokenKind;

/// Where a parameter appears, which decides what it may omit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParamSite {
    /// `@param`: the variable name is required.
    Tag,
    /// Callable types and `@method`: the name is optional and a default
    /// value may follow it.
    Signature,
}

impl TokenKind {
    /// Tokens that can start an atomic type.
    fn starts_type(self) -> bool {
        matches!(
            self,
            TokenKind::Lparen
                | TokenKind::This
                | TokenKind::Qmark
                | TokenKind::Array
                | TokenKind::Object
                | TokenKind::Callable
                | TokenKind::Static
                | TokenKind::Ident
                | TokenKind::Backslash
                | TokenKind::Str
                | TokenKind::Int
        )
    }
}

/// Deepest nesting of parentheses, generics, shapes and callables.
const MAX_TYPE_DEPTH: u32 = 128;

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> PResult<Type> {
        if self.depth >= MAX_TYPE_DEPTH {
            return Err(self.error("type nesting too deep"));
        }
        self.depth += 1;
        let ty = self.parse_compound_type();
        self.depth -= 1;
        ty
    }

    fn parse_compound_type(&mut self) -> PResult<Type> {
        let first = self.parse_atomic_type()?;
        match self.tok.kind {
            TokenKind::Or => {
                let mut types = vec![first];
                while self.got(TokenKind::Or) {
                    types.push(self.parse_atomic_type()?);
                }
                Ok(Type::Union(types))
            }
            TokenKind::And => {
                let mut types = vec![first];
                while self.tok.kind == TokenKind::And {
                    self.next();
                    if !self.tok.kind.starts_type() {
                        // leave `&` for a by-reference marker
                        self.backup();
                        break;
                    }
                    types.push(self.parse_atomic_type()?);
                }
                if types.len() == 1 {
                    Ok(types.remove(0))
                } else {
                    Ok(Type::Intersect(types))
                }
            }
            _ => Ok(first),
        }
    }

    fn parse_atomic_type(&mut self) -> PResult<Type> {
        let mut ty = match self.tok.kind {
            TokenKind::Lparen => {
                self.next();
                let inner = self.parse_type()?;
                self.expect(TokenKind::Rparen)?;
                Type::Paren(Box::new(inner))
            }
            TokenKind::This => {
                self.next();
                Type::This
            }
            TokenKind::Str | TokenKind::Int => {
                let value = self.tok.text.clone();
                self.next();
                Type::Literal(Literal::new(value))
            }
            TokenKind::Qmark => {
                self.next();
                Type::nullable(self.parse_basic_type(true)?)
            }
            kind if kind.starts_type() => self.parse_basic_type(false)?,
            _ => return Err(self.unexpected("( or basic type")),
        };

        while self.got(TokenKind::Lbrack) {
            self.expect(TokenKind::Rbrack)?;
            ty = Type::array(ty);
        }
        Ok(ty)
    }

    fn parse_basic_type(&mut self, nullable: bool) -> PResult<Type> {
        let mut generic_ok = true;
        let mut ty = match self.tok.kind {
            TokenKind::Array => {
                self.next();
                Type::ArrayShape(self.parse_shape()?)
            }
            TokenKind::Object => {
                self.next();
                Type::ObjectShape(self.parse_shape()?)
            }
            TokenKind::Callable => {
                self.next();
                generic_ok = false;
                self.parse_callable()?
            }
            TokenKind::Static => {
                self.next();
                Type::named("static")
            }
            TokenKind::Ident | TokenKind::Backslash => Type::Named(self.parse_name()?),
            _ => return Err(self.unexpected("basic type")),
        };

        if generic_ok && self.got(TokenKind::Lt) {
            let params = self.parse_generic_params()?;
            ty = Type::generic(ty, params);
        }

        if self.got(TokenKind::DoubleColon) {
            if !matches!(ty, Type::Named(_)) {
                return Err(self.error("unexpected ::"));
            }
            if nullable {
                return Err(self.error("constant fetch cannot be nullable"));
            }
            let name = self.parse_const_name()?;
            ty = Type::ConstFetch {
                class: Box::new(ty),
                name,
            };
        }
        Ok(ty)
    }

    /// Qualified name; whitespace around `\` is insignificant.
    pub(crate) fn parse_name(&mut self) -> PResult<Name> {
        let fully_qualified = self.got(TokenKind::Backslash);
        let mut parts = Vec::new();
        loop {
            parts.push(self.expect(TokenKind::Ident)?.text);
            if !self.got(TokenKind::Backslash) {
                break;
            }
        }
        Ok(Name {
            parts,
            fully_qualified,
        })
    }

    /// Generic parameters after `<`, through the closing `>`.
    fn parse_generic_params(&mut self) -> PResult<Vec<Type>> {
        let mut params = Vec::new();
        loop {
            params.push(self.parse_type()?);
            if !self.got(TokenKind::Comma) || self.tok.kind == TokenKind::Gt {
                break;
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(params)
    }

    /// Optional `{...}` body after `array` or `object`.
    fn parse_shape(&mut self) -> PResult<Vec<ShapeElem>> {
        let mut elems = Vec::new();
        if !self.got(TokenKind::Lbrace) {
            return Ok(elems);
        }
        loop {
            if self.tok.kind == TokenKind::Rbrace && !elems.is_empty() {
                break;
            }
            let key = match self.tok.kind {
                TokenKind::Ident
                | TokenKind::Int
                | TokenKind::Str
                | TokenKind::Array
                | TokenKind::Object
                | TokenKind::Callable
                | TokenKind::Static => self.tok.text.clone(),
                _ => return Err(self.unexpected("Ident, Int or String")),
            };
            self.next();
            let optional = self.got(TokenKind::Qmark);
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?;
            elems.push(ShapeElem { key, optional, ty });
            if !self.got(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Rbrace)?;
        Ok(elems)
    }

    /// Optional signature after `callable`.
    fn parse_callable(&mut self) -> PResult<Type> {
        if !self.got(TokenKind::Lparen) {
            return Ok(Type::Callable {
                params: Vec::new(),
                result: None,
            });
        }
        let params = self.parse_param_list()?;
        let result = if self.got(TokenKind::Colon) {
            Some(Box::new(self.parse_type()?))
        } else {
            None
        };
        Ok(Type::Callable { params, result })
    }

    /// Parameters after `(`, through the closing `)`. A trailing comma is
    /// accepted.
    pub(crate) fn parse_param_list(&mut self) -> PResult<Vec<Param>> {
        let mut params = Vec::new();
        while self.tok.kind != TokenKind::Rparen {
            params.push(self.parse_param(ParamSite::Signature)?);
            if !self.got(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Rparen)?;
        Ok(params)
    }

    pub(crate) fn parse_param(&mut self, site: ParamSite) -> PResult<Param> {
        let ty = self.parse_type()?;
        let by_ref = self.got(TokenKind::And);
        let variadic = self.got(TokenKind::Ellipsis);

        let name = if self.tok.kind == TokenKind::Var {
            Some(self.expect(TokenKind::Var)?.text[1..].to_string())
        } else if site == ParamSite::Tag || by_ref || variadic {
            return Err(self.unexpected("Var"));
        } else {
            None
        };

        let default = if site == ParamSite::Signature && name.is_some() && self.got(TokenKind::Equals)
        {
            Some(self.parse_default()?)
        } else {
            None
        };

        Ok(Param {
            ty,
            by_ref,
            variadic,
            name,
            default,
        })
    }

    fn parse_default(&mut self) -> PResult<Literal> {
        match self.tok.kind {
            TokenKind::Str | TokenKind::Int | TokenKind::Ident => {
                let value = self.tok.text.clone();
                self.next();
                Ok(Literal::new(value))
            }
            _ => Err(self.unexpected("default value")),
        }
    }

    /// Constant name after `::`. A `*` glued to the name is a prefix match.
    fn parse_const_name(&mut self) -> PResult<String> {
        match self.tok.kind {
            TokenKind::Asterisk => {
                self.next();
                Ok("*".to_string())
            }
            TokenKind::Ident => {
                let mut name = self.tok.text.clone();
                self.next();
                if self.tok.kind == TokenKind::Asterisk {
                    let spaced = self.spaced;
                    self.next();
                    if spaced {
                        return Err(self.error(format!(
                            "invalid position of *, did you mean to write {}*?",
                            name
                        )));
                    }
                    name.push('*');
                }
                Ok(name)
            }
            _ => Err(self.unexpected("Ident or *")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_type;
    use pretty_assertions::assert_eq;

    fn ty(src: &str) -> Type {
        parse_type(src).unwrap()
    }

    fn err(src: &str) -> String {
        parse_type(src).unwrap_err().to_string()
    }

    #[test]
    fn test_nullable() {
        assert_eq!(ty("? float"), Type::nullable(Type::named("float")));
    }

    #[test]
    fn test_array_suffixes() {
        assert_eq!(ty("int [ ] []"), Type::array(Type::array(Type::named("int"))));
    }

    #[test]
    fn test_generic_array() {
        assert_eq!(
            ty("array < string, ?array<string, int > []>"),
            Type::generic(
                Type::ArrayShape(vec![]),
                vec![
                    Type::named("string"),
                    Type::array(Type::nullable(Type::generic(
                        Type::ArrayShape(vec![]),
                        vec![Type::named("string"), Type::named("int")],
                    ))),
                ],
            )
        );
    }

    #[test]
    fn test_intersect() {
        assert_eq!(
            ty("Traversable &Countable"),
            Type::Intersect(vec![Type::named("Traversable"), Type::named("Countable")])
        );
    }

    #[test]
    fn test_paren_union_array() {
        assert_eq!(
            ty("( int |float )[]"),
            Type::array(Type::Paren(Box::new(Type::Union(vec![
                Type::named("int"),
                Type::named("float"),
            ]))))
        );
    }

    #[test]
    fn test_qualified_names() {
        assert_eq!(
            ty("\\Foo\\ Bar \\DateTime"),
            Type::qualified(&["Foo", "Bar", "DateTime"], true)
        );
        assert_eq!(ty("Other\\DateTime"), Type::qualified(&["Other", "DateTime"], false));
        assert_eq!(ty("\\ Traversable"), Type::qualified(&["Traversable"], true));
    }

    #[test]
    fn test_array_shape() {
        assert_eq!(
            ty("array{20?:int, foo :string | \\ DateTime}"),
            Type::ArrayShape(vec![
                ShapeElem {
                    key: "20".to_string(),
                    optional: true,
                    ty: Type::named("int"),
                },
                ShapeElem {
                    key: "foo".to_string(),
                    optional: false,
                    ty: Type::Union(vec![
                        Type::named("string"),
                        Type::qualified(&["DateTime"], true),
                    ]),
                },
            ])
        );
    }

    #[test]
    fn test_shape_trailing_comma() {
        let Type::ObjectShape(elems) = ty("object{'a': int,}") else {
            panic!("expected object shape");
        };
        assert_eq!(elems.len(), 1);
        assert_eq!(elems[0].key, "'a'");
    }

    #[test]
    fn test_empty_braces_are_rejected() {
        assert_eq!(err("array{}"), "line:1:7: expecting Ident, Int or String, found }");
    }

    #[test]
    fn test_special_names() {
        assert_eq!(
            ty("class-string<T>"),
            Type::generic(Type::named("class-string"), vec![Type::named("T")])
        );
        assert_eq!(ty("static"), Type::named("static"));
        assert_eq!(ty("self"), Type::named("self"));
        assert_eq!(ty("$this"), Type::This);
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            ty("'foo'|1"),
            Type::Union(vec![
                Type::Literal(Literal::new("'foo'")),
                Type::Literal(Literal::new("1")),
            ])
        );
    }

    #[test]
    fn test_callable_signature() {
        assert_eq!(
            ty("callable(int &...$b, string): void"),
            Type::Callable {
                params: vec![
                    Param {
                        ty: Type::named("int"),
                        by_ref: true,
                        variadic: true,
                        name: Some("b".to_string()),
                        default: None,
                    },
                    Param {
                        ty: Type::named("string"),
                        by_ref: false,
                        variadic: false,
                        name: None,
                        default: None,
                    },
                ],
                result: Some(Box::new(Type::named("void"))),
            }
        );
    }

    #[test]
    fn test_bare_callable() {
        assert_eq!(
            ty("callable"),
            Type::Callable {
                params: vec![],
                result: None
            }
        );
    }

    #[test]
    fn test_param_default() {
        let Type::Callable { params, .. } = ty("callable(int $a = 10, ?string $b = null)") else {
            panic!("expected callable");
        };
        assert_eq!(params[0].default, Some(Literal::new("10")));
        assert_eq!(params[1].name.as_deref(), Some("b"));
        assert_eq!(params[1].default, Some(Literal::new("null")));
    }

    #[test]
    fn test_const_fetch() {
        assert_eq!(
            ty("self::ANY_*[]"),
            Type::array(Type::ConstFetch {
                class: Box::new(Type::named("self")),
                name: "ANY_*".to_string(),
            })
        );
        assert_eq!(
            ty("\\Foo::*"),
            Type::ConstFetch {
                class: Box::new(Type::qualified(&["Foo"], true)),
                name: "*".to_string(),
            }
        );
    }

    #[test]
    fn test_const_fetch_errors() {
        assert_eq!(err("? DateTime::FORMAT"), "line:1:13: constant fetch cannot be nullable");
        assert_eq!(err("array ::foo"), "line:1:9: unexpected ::");
        assert_eq!(
            err("DateTime::ANY_ * "),
            "line:1:18: invalid position of *, did you mean to write ANY_*?"
        );
    }

    #[test]
    fn test_missing_type() {
        assert_eq!(err(""), "line:1:1: expecting ( or basic type, found EOF");
        assert_eq!(err("?$x"), "line:1:2: expecting basic type, found Var(\"$x\")");
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}int{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(err(&deep), "line:1:129: type nesting too deep");

        let callables = format!("{}int{}", "callable(".repeat(200), ")".repeat(200));
        assert!(err(&callables).ends_with("type nesting too deep"));

        let shallow = format!("{}int{}", "(".repeat(100), ")".repeat(100));
        assert!(parse_type(&shallow).is_ok());
    }

    #[test]
    fn test_nesting_limit_in_block() {
        let text = format!("/** @var array<{}int{}> $x */", "list<".repeat(300), ">".repeat(300));
        let err = crate::parser::parse_block(&text).unwrap_err();
        assert_eq!(err.message, "type nesting too deep");
    }
}
