//! Ordered cover URL resolution: curated table, then each metadata source.

use tracing::{debug, info, warn};

use crate::covers::curated::CuratedCovers;
use crate::covers::query::title_candidates;
use crate::covers::sources::CoverSource;

/// Where a resolved cover URL came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverOrigin {
    Curated,
    Source(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCover {
    pub url: String,
    pub origin: CoverOrigin,
    /// The title or narrowed title that produced the match.
    pub query: String,
}

pub struct CoverResolver {
    curated: CuratedCovers,
    sources: Vec<Box<dyn CoverSource>>,
}

impl CoverResolver {
    pub fn new(curated: CuratedCovers) -> Self {
        if curated.is_empty() {
            debug!("No curated covers; resolving through metadata sources only");
        } else {
            debug!("{} curated covers loaded", curated.len());
        }
        Self {
            curated,
            sources: Vec::new(),
        }
    }

    /// Appends a source; sources are consulted in the order they are added.
    pub fn with_source(mut self, source: impl CoverSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// First match wins. Returns `None` when no strategy yields a URL.
    pub async fn resolve(&self, title: &str) -> Option<ResolvedCover> {
        if let Some(url) = self.curated.lookup(title) {
            info!("  Curated cover found: {url}");
            return Some(ResolvedCover {
                url: url.to_string(),
                origin: CoverOrigin::Curated,
                query: title.to_string(),
            });
        }

        for source in &self.sources {
            if let Some(found) = search_with_narrowing(source.as_ref(), title).await {
                info!(
                    "  Cover found via {} for {:?}: {}",
                    source.name(),
                    found.query,
                    found.url
                );
                return Some(found);
            }
        }

        None
    }
}

/// Tries each narrowing candidate against one source. A source error ends
/// the search for this source.
async fn search_with_narrowing(source: &dyn CoverSource, title: &str) -> Option<ResolvedCover> {
    for candidate in title_candidates(title) {
        match source.lookup(&candidate).await {
            Ok(Some(url)) => {
                return Some(ResolvedCover {
                    url,
                    origin: CoverOrigin::Source(source.name()),
                    query: candidate,
                });
            }
            Ok(None) => debug!("  {} has no cover for {candidate:?}", source.name()),
            Err(e) => {
                warn!("  {} lookup failed for {candidate:?}: {e}", source.name());
                return None;
            }
        }
    }
    None
}
