//! Block, line and tag grammar.

use crate::ast::{
    Block, ExtendsTag, ImplementsTag, Line, MethodTag, OtherTag, ParamTag, PropertyTag, ReturnTag,
    Tag, TemplateTag, TextLine, ThrowsTag, Type, TypeDefTag, UsesTag, VarTag,
};

use super::phptype::ParamSite;
use super::stream::{PResult, Parser};
use super::token::TokenKind;

impl Parser<'_> {
    pub(crate) fn parse_block(&mut self) -> PResult<Block> {
        let mut indent = String::new();
        loop {
            while self.tok.kind == TokenKind::Newline {
                self.next_raw();
            }
            if self.tok.kind != TokenKind::Whitespace {
                break;
            }
            indent = self.tok.text.clone();
            self.next_raw();
        }
        if self.tok.kind != TokenKind::OpenDoc {
            indent.clear();
        }

        self.expect(TokenKind::OpenDoc)?;
        let prefer_oneline = !self.got(TokenKind::Newline);
        let lines = self.parse_lines()?;
        self.expect(TokenKind::CloseDoc)?;
        self.expect_end()?;

        Ok(Block {
            lines,
            indent,
            prefer_oneline,
        })
    }

    /// Only blank space may follow the parsed text.
    pub(crate) fn expect_end(&mut self) -> PResult<()> {
        while matches!(self.tok.kind, TokenKind::Newline | TokenKind::Whitespace) {
            self.next_raw();
        }
        if self.tok.kind != TokenKind::Eof {
            return Err(self.unexpected("EOF"));
        }
        Ok(())
    }

    fn parse_lines(&mut self) -> PResult<Vec<Line>> {
        let mut lines = Vec::new();
        while self.tok.kind != TokenKind::CloseDoc {
            lines.push(self.parse_line()?);
            if !self.got(TokenKind::Newline) {
                break;
            }
        }
        Ok(lines)
    }

    fn parse_line(&mut self) -> PResult<Line> {
        self.skip_whitespace();
        if self.tok.kind == TokenKind::Asterisk {
            self.next_raw();
            self.skip_whitespace();
        }
        if self.tok.kind == TokenKind::Tag {
            Ok(Line::Tag(self.parse_tag()?))
        } else {
            Ok(Line::Text(TextLine::new(self.parse_desc())))
        }
    }

    /// Rest of the line as trimmed free text.
    fn parse_desc(&mut self) -> String {
        self.parse_desc_after(String::new())
    }

    /// Rest of the line appended to `text`, trimmed.
    fn parse_desc_after(&mut self, mut text: String) -> String {
        while !matches!(
            self.tok.kind,
            TokenKind::Newline | TokenKind::CloseDoc | TokenKind::Eof
        ) {
            text.push_str(&self.tok.text);
            self.next_raw();
        }
        text.trim().to_string()
    }

    fn parse_tag(&mut self) -> PResult<Tag> {
        let mut name = self.tok.text[1..].to_string();
        self.next_raw();

        // `@fooBar` and `@foo.bar` are unknown tags, not `@foo` plus text.
        // An other run may carry on past a space; that part is description.
        let mut glued = None;
        while !matches!(
            self.tok.kind,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::CloseDoc | TokenKind::Eof
        ) {
            let text = &self.tok.text;
            let end = text.find([' ', '\t', '\r']).unwrap_or(text.len());
            name.push_str(&text[..end]);
            glued = Some(text[end..].to_string());
            self.next_raw();
            if glued.as_ref().is_some_and(|rest| !rest.is_empty()) {
                break;
            }
        }
        if let Some(rest) = glued {
            return Ok(Tag::Other(OtherTag {
                name,
                desc: self.parse_desc_after(rest),
            }));
        }
        self.skip_whitespace();

        let tag = match name.as_str() {
            "param" => {
                let param = self.parse_param(ParamSite::Tag)?;
                Tag::Param(ParamTag {
                    param,
                    desc: self.parse_desc(),
                })
            }
            "return" => {
                let ty = self.parse_type()?;
                Tag::Return(ReturnTag {
                    ty,
                    desc: self.parse_desc(),
                })
            }
            "property" | "property-read" | "property-write" => {
                let ty = self.parse_type()?;
                let var = self.expect(TokenKind::Var)?.text[1..].to_string();
                Tag::Property(PropertyTag {
                    read_only: name == "property-read",
                    write_only: name == "property-write",
                    ty,
                    var,
                    desc: self.parse_desc(),
                })
            }
            "method" => self.parse_method_tag()?,
            "var" => {
                let ty = self.parse_type()?;
                let var = if self.tok.kind == TokenKind::Var {
                    Some(self.expect(TokenKind::Var)?.text[1..].to_string())
                } else {
                    None
                };
                Tag::Var(VarTag {
                    ty,
                    var,
                    desc: self.parse_desc(),
                })
            }
            "throws" => {
                let ty = self.parse_type()?;
                Tag::Throws(ThrowsTag {
                    ty,
                    desc: self.parse_desc(),
                })
            }
            "extends" => {
                let ty = self.parse_type()?;
                Tag::Extends(ExtendsTag {
                    ty,
                    desc: self.parse_desc(),
                })
            }
            "implements" => {
                let ty = self.parse_type()?;
                Tag::Implements(ImplementsTag {
                    ty,
                    desc: self.parse_desc(),
                })
            }
            "uses" => {
                let ty = self.parse_type()?;
                Tag::Uses(UsesTag {
                    ty,
                    desc: self.parse_desc(),
                })
            }
            "template" => {
                let param = self.expect(TokenKind::Ident)?.text;
                let bound = if self.tok.kind == TokenKind::Ident
                    && matches!(self.tok.text.as_str(), "of" | "as")
                {
                    self.next();
                    Some(self.parse_type()?)
                } else {
                    None
                };
                Tag::Template(TemplateTag {
                    param,
                    bound,
                    desc: self.parse_desc(),
                })
            }
            "phpstan-type" => {
                let name = self.expect(TokenKind::Ident)?.text;
                self.got(TokenKind::Equals);
                let ty = self.parse_type()?;
                Tag::TypeDef(TypeDefTag {
                    name,
                    ty,
                    desc: self.parse_desc(),
                })
            }
            _ => Tag::Other(OtherTag {
                name,
                desc: self.parse_desc(),
            }),
        };
        Ok(tag)
    }

    fn parse_method_tag(&mut self) -> PResult<Tag> {
        let mut is_static = self.got(TokenKind::Static);
        let first = self.parse_type()?;

        let (result, name) = if self.tok.kind == TokenKind::Lparen {
            let name = match first {
                Type::Named(mut n) if n.is_simple() => n.parts.remove(0),
                _ => return Err(self.unexpected("Ident")),
            };
            // `@method static foo()` returns `static`; it is not a static method
            let result = is_static.then(|| Type::named("static"));
            is_static = false;
            (result, name)
        } else {
            let name = self.expect(TokenKind::Ident)?.text;
            (Some(first), name)
        };

        self.expect(TokenKind::Lparen)?;
        let params = self.parse_param_list()?;
        if self.tok.kind == TokenKind::Colon {
            self.next();
            return Err(self.error("unexpected :, expecting description"));
        }

        Ok(Tag::Method(MethodTag {
            is_static,
            result,
            name,
            params,
            desc: self.parse_desc(),
        }))
    }
}
