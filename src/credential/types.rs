use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ceremony::CeremonyAuthenticator;
use super::errors::CredentialError;
use crate::utils::base64url_encode;

/// The authenticator device a credential is bound to.
///
/// `aaguid` identifies the authenticator model, not the instance. The sign
/// count and clone warning are the only fields that change after
/// registration; both are written back after each successful login ceremony.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Authenticator {
    /// AAGUID of the authenticator, stored as base64url
    #[serde(with = "crate::utils::base64url")]
    pub aaguid: Vec<u8>,
    /// Monotonic counter reported by the authenticator on each use
    pub sign_count: u32,
    /// Set once a counter regression has been observed; never cleared
    pub clone_warning: bool,
}

/// One registered authenticator bound to an identity.
///
/// `id`, `public_key` and `attestation_type` are immutable after
/// registration. `display_name` is a user-chosen label used only for
/// presentation; `added_at` records when the registration ceremony
/// completed.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Credential {
    /// Credential ID bytes, stored as base64url
    #[serde(with = "crate::utils::base64url")]
    pub id: Vec<u8>,
    /// Public key bytes, stored as base64url
    #[serde(with = "crate::utils::base64url")]
    pub public_key: Vec<u8>,
    /// How the credential's authenticity was attested at registration
    pub attestation_type: String,
    /// The authenticator this credential lives on
    pub authenticator: Authenticator,
    /// User-chosen label for UI presentation
    pub display_name: String,
    /// When the credential was registered
    pub added_at: DateTime<Utc>,
}

impl Credential {
    /// The credential ID in the encoded form used by the storage contract
    /// and by UI node values.
    pub fn encoded_id(&self) -> String {
        base64url_encode(&self.id)
    }
}

/// The full set of one identity's registered credentials.
///
/// Part of the identity's credential record; the field name and nesting are
/// a storage contract and must not change. Insertion order is preserved
/// through storage but carries no semantic priority. Callers receive this as
/// a snapshot to transform; the storage layer owns the authoritative copy
/// and serializes concurrent updates.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct CredentialsConfig {
    /// List of webauthn credentials
    pub credentials: Vec<Credential>,
}

impl CredentialsConfig {
    /// Look up a credential by its raw ID bytes.
    pub fn lookup(&self, id: &[u8]) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.id == id)
    }

    /// Append a newly registered credential.
    ///
    /// Credential IDs are unique within one identity; a duplicate is
    /// rejected rather than silently replacing the stored public key.
    pub fn push(&mut self, credential: Credential) -> Result<(), CredentialError> {
        if self.lookup(&credential.id).is_some() {
            return Err(CredentialError::Duplicate(credential.encoded_id()));
        }
        tracing::debug!(
            credential_id = %credential.encoded_id(),
            "registering webauthn credential"
        );
        self.credentials.push(credential);
        Ok(())
    }

    /// Remove a single credential on user-initiated unlink.
    pub fn remove(&mut self, id: &[u8]) -> Result<Credential, CredentialError> {
        let index = self
            .credentials
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CredentialError::NotFound(base64url_encode(id)))?;
        let removed = self.credentials.remove(index);
        tracing::debug!(
            credential_id = %removed.encoded_id(),
            "unlinked webauthn credential"
        );
        Ok(removed)
    }

    /// Write back the authenticator state observed by a successful login
    /// ceremony.
    ///
    /// The sign count is overwritten with the engine's value. The clone
    /// warning is sticky: once set it survives every later update.
    pub fn record_use(
        &mut self,
        id: &[u8],
        observed: &CeremonyAuthenticator,
    ) -> Result<(), CredentialError> {
        let credential = self
            .credentials
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CredentialError::NotFound(base64url_encode(id)))?;

        if observed.clone_warning && !credential.authenticator.clone_warning {
            tracing::warn!(
                credential_id = %credential.encoded_id(),
                sign_count = observed.sign_count,
                "counter regression reported, flagging credential as possibly cloned"
            );
        }
        credential.authenticator.sign_count = observed.sign_count;
        credential.authenticator.clone_warning |= observed.clone_warning;
        Ok(())
    }
}
