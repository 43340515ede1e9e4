//! Operation names and the mode each one is callable in.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::offer_contract::OfferError;

/// How the host invoked the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// May write to the ledger.
    Invoke,
    /// Read-only.
    Query,
}

/// Every named operation of the offer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateOffer,
    UpdateOffer,
    DeleteOffer,
    ReadOffer,
    ReadOfferObjectModel,
    ReadOfferSamples,
    ReadOfferSchemas,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::CreateOffer,
        Operation::UpdateOffer,
        Operation::DeleteOffer,
        Operation::ReadOffer,
        Operation::ReadOfferObjectModel,
        Operation::ReadOfferSamples,
        Operation::ReadOfferSchemas,
    ];

    /// The name callers use on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateOffer => "createOffer",
            Operation::UpdateOffer => "updateOffer",
            Operation::DeleteOffer => "deleteOffer",
            Operation::ReadOffer => "readOffer",
            Operation::ReadOfferObjectModel => "readOfferObjectModel",
            Operation::ReadOfferSamples => "readOfferSamples",
            Operation::ReadOfferSchemas => "readOfferSchemas",
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Operation::CreateOffer | Operation::UpdateOffer | Operation::DeleteOffer => {
                Mode::Invoke
            }
            Operation::ReadOffer
            | Operation::ReadOfferObjectModel
            | Operation::ReadOfferSamples
            | Operation::ReadOfferSchemas => Mode::Query,
        }
    }

    /// Looks up `name` among the operations callable in `mode`.
    ///
    /// A known name used in the other mode is reported as unknown, the same as a name
    /// that does not exist at all.
    pub fn resolve(name: &str, mode: Mode) -> Result<Self, OfferError> {
        name.parse::<Operation>()
            .ok()
            .filter(|op| op.mode() == mode)
            .ok_or_else(|| OfferError::UnknownOperation(name.to_string()))
    }
}

impl FromStr for Operation {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| OfferError::UnknownOperation(s.to_string()))
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
