//! Syntax tree for parsed doc comments.
//!
//! A [`Block`] is built once per parse and never mutated by the printer.
//! Type expressions form a separate recursive tree ([`Type`]) reachable
//! from most tag variants.

mod block;
mod phptype;

pub use block::{
    Block, ExtendsTag, ImplementsTag, Line, MethodTag, OtherTag, ParamTag, PropertyTag, ReturnTag,
    Tag, TemplateTag, TextLine, ThrowsTag, TypeDefTag, UsesTag, VarTag,
};
pub use phptype::{Literal, Name, Param, ShapeElem, Type};
