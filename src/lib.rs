//! webauthn-selfservice - WebAuthn credential records for self-service flows
//!
//! This crate provides the durable representation of a user's registered
//! WebAuthn/FIDO2 authenticators, lossless conversion to and from the
//! transient shapes a ceremony engine works with, and the declarative UI
//! nodes that drive registration, login and credential removal.
//!
//! Ceremony verification, challenge state, persistence and transport live
//! outside this crate; everything here is pure and synchronous.

mod config;
mod credential;
mod flow;
mod ui;
mod utils;

pub use credential::{
    Authenticator, CeremonyAuthenticator, CeremonyCredential, Credential, CredentialError,
    CredentialsConfig,
};

pub use flow::{
    WEBAUTHN_LOGIN, WEBAUTHN_REGISTER, WEBAUTHN_REGISTER_DISPLAYNAME, WEBAUTHN_REMOVE,
    display_name_input, login_trigger, registration_trigger, unlink_trigger,
};

pub use ui::{InputAttributes, InputType, Label, Node, NodeGroup};
