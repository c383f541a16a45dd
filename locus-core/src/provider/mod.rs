//! Ports to the collaborators that gather scoring inputs.
//!
//! The engine never performs I/O. Callers fetch nearby places, their travel
//! distances and a location classification through these traits, then hand
//! the results to the scorer. Every port is synchronous; an adapter around
//! an asynchronous client blocks on its own runtime.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use locus_core::{Place, PlaceSearchProvider, ProviderError};
//!
//! struct Fixed(Vec<Place>);
//!
//! impl PlaceSearchProvider for Fixed {
//!     fn search_nearby(
//!         &self,
//!         _origin: Coord<f64>,
//!         _radius_meters: u32,
//!     ) -> Result<Vec<Place>, ProviderError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! let search = Fixed(vec![Place::new("p1", "Clinic")]);
//! let places = search.search_nearby(Coord { x: 77.59, y: 12.97 }, 5_000)?;
//! assert_eq!(places.len(), 1);
//! # Ok::<(), ProviderError>(())
//! ```

mod error;

pub use error::ProviderError;

use geo::Coord;

use crate::{DistanceMap, LocationIntelligence, LocationQuery, Place};

/// Search for places around an origin.
pub trait PlaceSearchProvider {
    /// Return places within `radius_meters` of `origin`.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the search backend fails.
    fn search_nearby(
        &self,
        origin: Coord<f64>,
        radius_meters: u32,
    ) -> Result<Vec<Place>, ProviderError>;
}

/// Look up travel distances from an origin to a set of places.
pub trait DistanceProvider {
    /// Return distances keyed by [`Place::id`].
    ///
    /// Places missing from the returned map are treated as unreachable.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the distance backend fails.
    fn distances(&self, origin: Coord<f64>, places: &[Place])
    -> Result<DistanceMap, ProviderError>;
}

/// Classify the settlement type and investment potential of a location.
pub trait IntelligenceProvider {
    /// Return a classification for `query`.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when classification fails.
    fn classify(&self, query: &LocationQuery) -> Result<LocationIntelligence, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProviderError::unavailable("maps", "503"), true)]
    #[case(ProviderError::Timeout { provider: "maps".into() }, true)]
    #[case(ProviderError::malformed("intelligence", "missing locationType"), false)]
    fn recoverability(#[case] error: ProviderError, #[case] expected: bool) {
        assert_eq!(error.is_recoverable(), expected);
    }

    #[rstest]
    fn errors_name_the_provider() {
        let error = ProviderError::malformed("intelligence", "bad json");
        assert_eq!(error.provider(), "intelligence");
        assert_eq!(
            error.to_string(),
            "intelligence returned a malformed response: bad json"
        );
    }
}
