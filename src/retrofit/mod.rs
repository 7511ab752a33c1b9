//! Textual rewrites that retrofit the game video widget into a Dart screen.
//!
//! Nothing here parses Dart. Every transformer looks for a fixed anchor in
//! the source text and checks a sentinel substring first, so running the
//! whole pipeline again over its own output changes nothing.

pub mod build_method;
pub mod helper;
pub mod import;
pub mod patterns;
pub mod transform;

pub use build_method::RewriteBuild;
pub use helper::InsertHelper;
pub use import::InsertImport;
pub use transform::{Pipeline, Transformer};
