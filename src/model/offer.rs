use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Field;

/// A transport offer or bid, the only record kept in the ledger.
///
/// The key in the ledger is [`Offer::offer_id`]. Everything else lives in
/// [`OfferDetails`], where each field carries its own presence state so that a
/// partial update can leave it untouched.
///
/// # Wire Format
/// JSON, with these field names:
///
/// ```json
/// {
///   "offerID": "OFR-1",
///   "startlocation": { "latitude": 52.52, "longitude": 13.40 },
///   "startlocationstr": "Berlin",
///   "starttime": "2026-03-01T08:00:00Z",
///   "isbid": false,
///   "carrier": ["CARRIER-7"],
///   "owner": "alice"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "offerID")]
    pub offer_id: String,
    #[serde(flatten)]
    pub details: OfferDetails,
}

impl Offer {
    /// An offer with only its identity set.
    pub fn new(offer_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            details: OfferDetails::default(),
        }
    }
}

/// The mutable part of an [`Offer`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferDetails {
    #[serde(rename = "startlocation", default, skip_serializing_if = "Field::is_absent")]
    pub start_location: Field<Geolocation>,
    #[serde(rename = "endlocation", default, skip_serializing_if = "Field::is_absent")]
    pub end_location: Field<Geolocation>,
    #[serde(rename = "startlocationstr", default, skip_serializing_if = "Field::is_absent")]
    pub start_location_text: Field<String>,
    #[serde(rename = "endlocationstr", default, skip_serializing_if = "Field::is_absent")]
    pub end_location_text: Field<String>,
    /// Earliest start.
    #[serde(rename = "starttime", default, skip_serializing_if = "Field::is_absent")]
    pub start_time: Field<DateTime<Utc>>,
    /// Latest end.
    #[serde(rename = "endtime", default, skip_serializing_if = "Field::is_absent")]
    pub end_time: Field<DateTime<Utc>>,
    #[serde(rename = "isbid", default, skip_serializing_if = "Field::is_absent")]
    pub is_bid: Field<bool>,
    /// Assigned carriers; a single entry once the offer is assigned.
    #[serde(rename = "carrier", default, skip_serializing_if = "Field::is_absent")]
    pub carriers: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub owner: Field<String>,
}

/// A point on the map. Each coordinate is tracked separately, so an update may move
/// just one of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub latitude: Field<f64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub longitude: Field<f64>,
}

impl Geolocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Field::Present(latitude),
            longitude: Field::Present(longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_identity_only_offer_encodes_to_identity_only() {
        let bytes = serde_json::to_vec(&Offer::new("OFR-1")).unwrap();
        assert_eq!(bytes, br#"{"offerID":"OFR-1"}"#.to_vec());
    }

    #[test]
    fn test_full_offer_decodes_every_field() {
        let json = r#"{
            "offerID": "OFR-1",
            "startlocation": {"latitude": 52.52, "longitude": 13.4},
            "endlocation": {"latitude": 48.14},
            "startlocationstr": "Berlin",
            "endlocationstr": "",
            "starttime": "2026-03-01T08:00:00Z",
            "endtime": null,
            "isbid": false,
            "carrier": [],
            "owner": "alice"
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        let details = &offer.details;

        assert_eq!(offer.offer_id, "OFR-1");
        assert_eq!(details.start_location, Field::Present(Geolocation::new(52.52, 13.4)));
        assert_eq!(
            details.end_location,
            Field::Present(Geolocation {
                latitude: Field::Present(48.14),
                longitude: Field::Absent,
            })
        );
        assert_eq!(details.start_location_text, Field::Present("Berlin".into()));
        assert_eq!(details.end_location_text, Field::Present(String::new()));
        assert_eq!(
            details.start_time,
            Field::Present(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap())
        );
        assert_eq!(details.end_time, Field::Cleared);
        assert_eq!(details.is_bid, Field::Present(false));
        assert_eq!(details.carriers, Field::Present(vec![]));
        assert_eq!(details.owner, Field::Present("alice".into()));
    }

    #[test]
    fn test_stored_offer_requires_identity() {
        assert!(serde_json::from_str::<Offer>(r#"{"owner":"alice"}"#).is_err());
    }

    #[test]
    fn test_decode_then_encode_is_stable() {
        let json = r#"{"offerID":"OFR-1","startlocation":{"latitude":1.5},"endtime":null,"carrier":["X"],"owner":""}"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&offer).unwrap(), json);
    }
}
