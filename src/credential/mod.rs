mod ceremony;
mod errors;
mod types;

pub use ceremony::{CeremonyAuthenticator, CeremonyCredential};
pub use errors::CredentialError;
pub use types::{Authenticator, Credential, CredentialsConfig};
