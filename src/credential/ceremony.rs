use chrono::DateTime;

use super::types::{Authenticator, Credential, CredentialsConfig};

/// Authenticator state as the ceremony engine reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CeremonyAuthenticator {
    pub aaguid: Vec<u8>,
    pub sign_count: u32,
    pub clone_warning: bool,
}

/// A credential in the shape the ceremony engine works with.
///
/// These structures are ephemeral: the engine builds one per completed
/// registration ceremony and consumes a candidate list per login ceremony,
/// then discards them. Only the stored model is durable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CeremonyCredential {
    pub id: Vec<u8>,
    pub public_key: Vec<u8>,
    pub attestation_type: String,
    pub authenticator: CeremonyAuthenticator,
}

impl Credential {
    /// Build a storable credential from a completed ceremony.
    ///
    /// Field-for-field and total: input from a successful ceremony is
    /// well-formed by construction. `display_name` and `added_at` are not
    /// ceremony data; the caller fills them in before persisting.
    pub fn from_ceremony(credential: &CeremonyCredential) -> Self {
        Self {
            id: credential.id.clone(),
            public_key: credential.public_key.clone(),
            attestation_type: credential.attestation_type.clone(),
            authenticator: Authenticator {
                aaguid: credential.authenticator.aaguid.clone(),
                sign_count: credential.authenticator.sign_count,
                clone_warning: credential.authenticator.clone_warning,
            },
            display_name: String::new(),
            added_at: DateTime::UNIX_EPOCH,
        }
    }

    /// Rebuild the engine shape from storage.
    ///
    /// Exact inverse of [`Credential::from_ceremony`] on every
    /// ceremony-relevant field.
    pub fn to_ceremony(&self) -> CeremonyCredential {
        CeremonyCredential {
            id: self.id.clone(),
            public_key: self.public_key.clone(),
            attestation_type: self.attestation_type.clone(),
            authenticator: CeremonyAuthenticator {
                aaguid: self.authenticator.aaguid.clone(),
                sign_count: self.authenticator.sign_count,
                clone_warning: self.authenticator.clone_warning,
            },
        }
    }
}

impl CredentialsConfig {
    /// Convert the whole stored set into the engine's candidate list for a
    /// login ceremony. Element-wise, order- and length-preserving.
    pub fn to_ceremony(&self) -> Vec<CeremonyCredential> {
        self.credentials.iter().map(Credential::to_ceremony).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Conversion scenario: binary fields must decode back to the original
    /// byte sequences exactly, and no ceremony field may be defaulted.
    #[test]
    fn test_from_ceremony_is_field_for_field() {
        let engine_credential = CeremonyCredential {
            id: vec![0x01, 0x02],
            public_key: vec![0xAA],
            attestation_type: "packed".to_string(),
            authenticator: CeremonyAuthenticator {
                aaguid: vec![0x00; 16],
                sign_count: 7,
                clone_warning: false,
            },
        };

        let stored = Credential::from_ceremony(&engine_credential);

        assert_eq!(stored.id, vec![0x01, 0x02]);
        assert_eq!(stored.public_key, vec![0xAA]);
        assert_eq!(stored.attestation_type, "packed");
        assert_eq!(stored.authenticator.aaguid, vec![0x00; 16]);
        assert_eq!(stored.authenticator.sign_count, 7);
        assert!(!stored.authenticator.clone_warning);

        // caller-supplied metadata is left for the caller
        assert_eq!(stored.display_name, "");
        assert_eq!(stored.added_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_clone_warning_survives_both_directions() {
        let engine_credential = CeremonyCredential {
            id: vec![0x05],
            public_key: vec![0x06],
            attestation_type: "none".to_string(),
            authenticator: CeremonyAuthenticator {
                aaguid: vec![0x07; 16],
                sign_count: 42,
                clone_warning: true,
            },
        };

        let stored = Credential::from_ceremony(&engine_credential);
        assert!(stored.authenticator.clone_warning);
        assert!(stored.to_ceremony().authenticator.clone_warning);
    }

    fn ceremony_credential_strategy() -> impl Strategy<Value = CeremonyCredential> {
        (
            proptest::collection::vec(any::<u8>(), 1..64),
            proptest::collection::vec(any::<u8>(), 1..128),
            "[a-z-]{1,16}",
            proptest::collection::vec(any::<u8>(), 16),
            any::<u32>(),
            proptest::bool::ANY,
        )
            .prop_map(
                |(id, public_key, attestation_type, aaguid, sign_count, clone_warning)| {
                    CeremonyCredential {
                        id,
                        public_key,
                        attestation_type,
                        authenticator: CeremonyAuthenticator {
                            aaguid,
                            sign_count,
                            clone_warning,
                        },
                    }
                },
            )
    }

    proptest! {
        /// Round-trip law: to_ceremony(from_ceremony(x)) == x for every
        /// ceremony-relevant field.
        #[test]
        fn test_ceremony_roundtrip_law(engine_credential in ceremony_credential_strategy()) {
            let roundtripped = Credential::from_ceremony(&engine_credential).to_ceremony();
            prop_assert_eq!(roundtripped, engine_credential);
        }

        /// The login candidate set keeps the stored length and order, and
        /// survives a storage round trip unchanged.
        #[test]
        fn test_candidate_set_preserves_order_and_length(
            engine_credentials in proptest::collection::vec(ceremony_credential_strategy(), 0..8)
        ) {
            let config = CredentialsConfig {
                credentials: engine_credentials.iter().map(Credential::from_ceremony).collect(),
            };

            let json = serde_json::to_string(&config).unwrap();
            let restored: CredentialsConfig = serde_json::from_str(&json).unwrap();
            let candidates = restored.to_ceremony();

            prop_assert_eq!(candidates, engine_credentials);
        }
    }
}
