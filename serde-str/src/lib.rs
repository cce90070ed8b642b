//! `#[serde(with = "...")]` helpers that render Solana key and signature
//! types as base58 strings, the way they appear everywhere outside of the
//! wire format.
//!
//! Inspection reports contain keys that may be unresolved and signature
//! slots that may be empty, so the `Option` variants serialize `None` as
//! JSON `null` rather than omitting the field.

pub mod pubkey {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&pubkey.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s)
            .map_err(|_| serde::de::Error::custom(format!("invalid base58 pubkey: {s}")))
    }
}

pub mod option_pubkey {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(
        pubkey: &Option<Pubkey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match pubkey {
            Some(pubkey) => serializer.serialize_some(&pubkey.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Pubkey>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Pubkey::from_str(&s)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid base58 pubkey: {s}"))),
            None => Ok(None),
        }
    }
}

pub mod signature {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::signature::Signature;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(
        signature: &Signature,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&signature.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Signature, D::Error> {
        let s = String::deserialize(deserializer)?;
        Signature::from_str(&s)
            .map_err(|_| serde::de::Error::custom(format!("invalid base58 signature: {s}")))
    }
}

pub mod option_signature {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::signature::Signature;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(
        signature: &Option<Signature>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match signature {
            Some(signature) => serializer.serialize_some(&signature.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Signature>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Signature::from_str(&s)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid base58 signature: {s}"))),
            None => Ok(None),
        }
    }
}
