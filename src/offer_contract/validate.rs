//! Input validation shared by every offer operation that names a record.

use serde::Deserialize;

use crate::model::{Offer, OfferDetails};
use crate::offer_contract::OfferError;

/// What a caller sent, before the identity has been checked.
#[derive(Debug, Deserialize)]
struct OfferPayload {
    #[serde(rename = "offerID", default)]
    offer_id: Option<String>,
    #[serde(flatten)]
    details: OfferDetails,
}

/// Returns the only argument, or `ArgumentCount` if there is not exactly one.
pub fn single_argument(args: &[String]) -> Result<&str, OfferError> {
    match args {
        [payload] => Ok(payload.as_str()),
        _ => Err(OfferError::ArgumentCount {
            expected: 1,
            actual: args.len(),
        }),
    }
}

/// Decodes the single JSON argument into a candidate offer and checks its identity.
///
/// On success the returned offer's id is trimmed and non-empty, and every other field
/// is exactly as supplied: fields the caller left out stay `Absent`.
///
/// # Errors
/// - [`OfferError::ArgumentCount`] unless `args` has exactly one element
/// - [`OfferError::Decode`] if the argument is not a valid offer encoding
/// - [`OfferError::MissingIdentity`] if `offerID` is missing or `null`
/// - [`OfferError::EmptyIdentity`] if `offerID` is blank after trimming
pub fn validate(args: &[String]) -> Result<Offer, OfferError> {
    let payload = single_argument(args)?;
    let candidate: OfferPayload =
        serde_json::from_str(payload).map_err(|e| OfferError::Decode(e.to_string()))?;

    let raw_id = candidate.offer_id.ok_or(OfferError::MissingIdentity)?;
    let offer_id = raw_id.trim();
    if offer_id.is_empty() {
        return Err(OfferError::EmptyIdentity);
    }

    Ok(Offer {
        offer_id: offer_id.to_string(),
        details: candidate.details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn args(payload: &str) -> Vec<String> {
        vec![payload.to_string()]
    }

    #[test]
    fn test_argument_count_must_be_one() {
        assert_eq!(
            validate(&[]),
            Err(OfferError::ArgumentCount {
                expected: 1,
                actual: 0
            })
        );
        let two = vec![r#"{"offerID":"A"}"#.to_string(), r#"{"offerID":"B"}"#.to_string()];
        assert_eq!(
            validate(&two),
            Err(OfferError::ArgumentCount {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        assert!(matches!(validate(&args("{not json")), Err(OfferError::Decode(_))));
        assert!(matches!(
            validate(&args(r#"{"offerID":42}"#)),
            Err(OfferError::Decode(_))
        ));
        assert!(matches!(
            validate(&args(r#"{"offerID":"A","isbid":"yes"}"#)),
            Err(OfferError::Decode(_))
        ));
    }

    #[test]
    fn test_missing_identity() {
        assert_eq!(
            validate(&args(r#"{"owner":"alice"}"#)),
            Err(OfferError::MissingIdentity)
        );
        assert_eq!(
            validate(&args(r#"{"offerID":null}"#)),
            Err(OfferError::MissingIdentity)
        );
    }

    #[test]
    fn test_blank_identity() {
        assert_eq!(validate(&args(r#"{"offerID":""}"#)), Err(OfferError::EmptyIdentity));
        assert_eq!(
            validate(&args(r#"{"offerID":" \t\n "}"#)),
            Err(OfferError::EmptyIdentity)
        );
    }

    #[test]
    fn test_identity_is_trimmed() {
        let offer = validate(&args(r#"{"offerID":"  OFR-1 "}"#)).unwrap();
        assert_eq!(offer.offer_id, "OFR-1");
    }

    #[test]
    fn test_unsupplied_fields_stay_absent() {
        let offer = validate(&args(r#"{"offerID":"A","owner":""}"#)).unwrap();
        assert_eq!(offer.details.owner, Field::Present(String::new()));
        assert_eq!(offer.details.carriers, Field::Absent);
        assert_eq!(offer.details.start_location, Field::Absent);
    }
}
