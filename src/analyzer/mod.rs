//! Line-oriented documentation analysis.
//!
//! No syntax tree is built: declarations are recognised by line patterns and
//! their documentation is found by walking upward through the source lines.

mod comment;
mod declaration;
mod types;
mod validator;

pub use comment::{CommentBlockLocator, locate_comment_block};
pub use declaration::{DeclarationExtractor, PatternExtractor, parse_parameters};
pub use types::{
    Accessor, BlockKind, CommentBlock, Declaration, DeclarationKind, Parameter, Visibility,
};
pub use validator::{ConsistencyValidator, ValidationError, VoidReturnPolicy};
