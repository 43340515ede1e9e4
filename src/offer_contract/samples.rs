//! Static payloads returned by `readOfferSamples` and `readOfferSchemas`.
//!
//! Neither touches the ledger; they exist so API consumers can see what to send.

/// Example requests, keyed by what they illustrate. Every value is a valid offer.
pub const SAMPLES: &str = r#"{
    "offer": {
        "offerID": "OFR-1001",
        "startlocation": {
            "latitude": 52.520008,
            "longitude": 13.404954
        },
        "endlocation": {
            "latitude": 48.135125,
            "longitude": 11.581981
        },
        "startlocationstr": "Berlin Hbf",
        "endlocationstr": "Muenchen Hbf",
        "starttime": "2026-03-01T08:00:00Z",
        "endtime": "2026-03-01T18:00:00Z",
        "isbid": false,
        "carrier": [],
        "owner": "shipper-alice"
    },
    "bid": {
        "offerID": "BID-2001",
        "startlocationstr": "Hamburg Hafen",
        "endlocationstr": "Berlin Hbf",
        "starttime": "2026-03-02T06:00:00Z",
        "isbid": true,
        "owner": "carrier-bob"
    },
    "assignCarrier": {
        "offerID": "OFR-1001",
        "carrier": ["carrier-bob"]
    },
    "moveStartLatitude": {
        "offerID": "OFR-1001",
        "startlocation": {
            "latitude": 52.509663
        }
    },
    "clearEndTime": {
        "offerID": "OFR-1001",
        "endtime": null
    }
}"#;

/// JSON Schema (draft-04) for the documents the contract accepts.
pub const SCHEMAS: &str = r##"{
    "$schema": "http://json-schema.org/draft-04/schema#",
    "definitions": {
        "geolocation": {
            "type": ["object", "null"],
            "properties": {
                "latitude": { "type": ["number", "null"] },
                "longitude": { "type": ["number", "null"] }
            },
            "additionalProperties": false
        },
        "offer": {
            "title": "Offer",
            "description": "A transport offer or bid. Omitted properties are left unchanged by updates; null clears them.",
            "type": "object",
            "properties": {
                "offerID": { "type": "string", "minLength": 1, "description": "Primary key" },
                "startlocation": { "$ref": "#/definitions/geolocation" },
                "endlocation": { "$ref": "#/definitions/geolocation" },
                "startlocationstr": { "type": ["string", "null"] },
                "endlocationstr": { "type": ["string", "null"] },
                "starttime": { "type": ["string", "null"], "format": "date-time" },
                "endtime": { "type": ["string", "null"], "format": "date-time" },
                "isbid": { "type": ["boolean", "null"] },
                "carrier": { "type": ["array", "null"], "items": { "type": "string" } },
                "owner": { "type": ["string", "null"] }
            },
            "required": ["offerID"]
        },
        "contractState": {
            "title": "ContractState",
            "type": "object",
            "properties": {
                "version": { "type": "string" }
            },
            "required": ["version"]
        }
    },
    "oneOf": [
        { "$ref": "#/definitions/offer" },
        { "$ref": "#/definitions/contractState" }
    ]
}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Offer};
    use std::collections::BTreeMap;

    #[test]
    fn test_every_sample_is_a_valid_offer() {
        let samples: BTreeMap<String, serde_json::Value> = serde_json::from_str(SAMPLES).unwrap();
        assert!(!samples.is_empty());
        for (name, value) in samples {
            let offer: Offer = serde_json::from_value(value)
                .unwrap_or_else(|e| panic!("sample {name} is not an offer: {e}"));
            assert!(!offer.offer_id.is_empty(), "sample {name} has no id");
        }
    }

    #[test]
    fn test_clear_sample_uses_null() {
        let samples: BTreeMap<String, Offer> = serde_json::from_str(SAMPLES).unwrap();
        assert_eq!(samples["clearEndTime"].details.end_time, Field::Cleared);
    }

    #[test]
    fn test_schemas_are_json() {
        let schemas: serde_json::Value = serde_json::from_str(SCHEMAS).unwrap();
        assert!(schemas["definitions"]["offer"]["properties"]["offerID"].is_object());
    }
}
