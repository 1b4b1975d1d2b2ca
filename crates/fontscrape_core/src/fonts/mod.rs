//! Font library indexing and fuzzy font resolution.
//!
//! # Components
//!
//! - **similarity**: Pluggable string similarity scoring (0-100)
//! - **metadata**: Reading family/subfamily/full names from font files
//! - **library**: The font library index and the layered matching strategies
//!
//! # Usage
//!
//! ```no_run
//! use fontscrape_core::fonts::{FontLibrary, MatchOptions};
//! use fontscrape_core::models::{FontRequirement, RequirementOrigin, StyleAttribute};
//!
//! let library = FontLibrary::open("fonts")?;
//! let requirement = FontRequirement::new(
//!     RequirementOrigin::Style("Default".into()),
//!     "Arial",
//!     [StyleAttribute::Bold],
//! );
//! if let Some(result) = library.resolve(&requirement, &MatchOptions::default()) {
//!     println!("{}", result.font.path().display());
//! }
//! # Ok::<(), fontscrape_core::fonts::LibraryError>(())
//! ```

mod error;
mod library;
mod metadata;
mod similarity;

pub use error::{LibraryError, MetadataError};
pub use library::{
    is_font_file, FontLibrary, MatchOptions, MatchStrategy, MetadataErrorPolicy, FONT_EXTENSIONS,
};
pub use metadata::{MetadataProvider, TtfMetadataProvider};
pub use similarity::{Similarity, SimilarityAlgorithm};
