//! # Merge Engine
//!
//! Applies a partially populated candidate onto the stored record.
//!
//! ## The Rule
//!
//! For every field except the identity, independently of all other fields:
//!
//! | candidate field | result            |
//! |-----------------|-------------------|
//! | `Absent`        | stored value      |
//! | `Cleared`       | `Cleared`         |
//! | `Present(v)`    | `Present(v)`      |
//!
//! Values are replaced wholesale (a new carrier list replaces the old one, it is not
//! appended). The one exception is a [`Geolocation`] that is `Present` on both sides:
//! its coordinates are themselves presence-tagged, so the rule is applied to each of
//! them in turn and an update may move only the latitude.
//!
//! The merge is written out field by field. Adding a field to [`OfferDetails`] without
//! adding it here is caught by the exhaustive destructuring below.

use crate::model::{Field, Geolocation, Offer, OfferDetails};

/// Types whose fields are individually presence-tagged.
pub trait Merge {
    /// Returns `self` with every supplied field of `incoming` applied.
    fn merge(self, incoming: Self) -> Self;
}

impl<T: Merge> Field<T> {
    /// Like [`Field::apply`], but merges instead of replacing when both sides are
    /// `Present`.
    pub fn apply_nested(self, incoming: Self) -> Self {
        match (self, incoming) {
            (stored, Field::Absent) => stored,
            (Field::Present(stored), Field::Present(incoming)) => {
                Field::Present(stored.merge(incoming))
            }
            (_, incoming) => incoming,
        }
    }
}

impl Merge for Geolocation {
    fn merge(self, incoming: Self) -> Self {
        let Geolocation {
            latitude,
            longitude,
        } = incoming;
        Geolocation {
            latitude: self.latitude.apply(latitude),
            longitude: self.longitude.apply(longitude),
        }
    }
}

impl Merge for OfferDetails {
    fn merge(self, incoming: Self) -> Self {
        let OfferDetails {
            start_location,
            end_location,
            start_location_text,
            end_location_text,
            start_time,
            end_time,
            is_bid,
            carriers,
            owner,
        } = incoming;
        OfferDetails {
            start_location: self.start_location.apply_nested(start_location),
            end_location: self.end_location.apply_nested(end_location),
            start_location_text: self.start_location_text.apply(start_location_text),
            end_location_text: self.end_location_text.apply(end_location_text),
            start_time: self.start_time.apply(start_time),
            end_time: self.end_time.apply(end_time),
            is_bid: self.is_bid.apply(is_bid),
            carriers: self.carriers.apply(carriers),
            owner: self.owner.apply(owner),
        }
    }
}

/// Produces the record to store when `candidate` updates `stored`.
///
/// Both records must carry the same `offer_id`; callers check this before merging.
/// The result keeps that identity.
pub fn merge(stored: Offer, candidate: Offer) -> Offer {
    debug_assert_eq!(stored.offer_id, candidate.offer_id);
    Offer {
        offer_id: stored.offer_id,
        details: stored.details.merge(candidate.details),
    }
}
