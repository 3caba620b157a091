//! Static metadata parser for React component sources.
//!
//! This crate reads a component module without executing it and recovers the
//! documentation a docs site needs: the component's doc comment and a table of
//! its declared props (type, required flag, default value, description).

pub mod docblock;
pub mod props;
pub mod proptypes;
pub mod react;
pub mod traits;

pub use docblock::{clean_docblock, DocComments};
pub use props::{PropDescriptor, PropTable, PropType, PropTypeValue, RawValue, ShapeField};
pub use react::ReactDocParser;
pub use traits::{DocInfo, MetadataParser, ParseError};
