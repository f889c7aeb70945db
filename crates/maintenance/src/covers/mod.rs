//! Cover image resolution: where a title's cover comes from and how the
//! downloaded image is prepared for storage.

pub mod curated;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod sources;

pub use curated::{CuratedCovers, DuplicateTitle};
pub use normalize::{CoverImageError, EncodedCover, normalize_cover};
pub use resolver::{CoverOrigin, CoverResolver, ResolvedCover};
pub use sources::{CoverSource, GoogleBooksSource, OpenLibrarySource, SourceError};
