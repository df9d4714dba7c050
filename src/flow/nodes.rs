use serde_json::json;

use crate::config::WEBAUTHN_DEFAULT_KEY_NAME;
use crate::credential::Credential;
use crate::ui::{InputType, Label, Node, NodeGroup};

/// Node name of the registration trigger; also the field the client script
/// writes the completed ceremony payload into.
pub const WEBAUTHN_REGISTER: &str = "webauthn_register";
/// Node name of the login trigger.
pub const WEBAUTHN_LOGIN: &str = "webauthn_login";
/// Node name of the display-name input.
pub const WEBAUTHN_REGISTER_DISPLAYNAME: &str = "webauthn_register_displayname";
/// Node name of the per-credential removal trigger.
pub const WEBAUTHN_REMOVE: &str = "webauthn_remove";

/// Marker in the script assets where the serialized ceremony options land.
/// Each template carries it exactly once; a test asserts that.
const OPTIONS_PLACEHOLDER: &str = "injectWebAuthnOptions";

const REGISTER_SCRIPT: &str = include_str!("js/webauthn_register.js");
const LOGIN_SCRIPT: &str = include_str!("js/webauthn_login.js");

/// Trigger node that starts the in-browser registration ceremony.
///
/// `ceremony_options` is the serialized challenge payload produced by the
/// ceremony engine; it is an opaque string here and is spliced into the
/// client script unmodified.
pub fn registration_trigger(ceremony_options: &str) -> Node {
    Node::input(WEBAUTHN_REGISTER, "", NodeGroup::Webauthn, InputType::Submit)
        .with_on_click(REGISTER_SCRIPT.replacen(OPTIONS_PLACEHOLDER, ceremony_options, 1))
        .with_meta_label(Label::new("Sign up with security key"))
}

/// Trigger node that starts the in-browser login ceremony.
pub fn login_trigger(ceremony_options: &str) -> Node {
    Node::input(WEBAUTHN_LOGIN, "", NodeGroup::Webauthn, InputType::Submit)
        .with_on_click(LOGIN_SCRIPT.replacen(OPTIONS_PLACEHOLDER, ceremony_options, 1))
        .with_meta_label(Label::new("Use security key"))
}

/// Text input letting the user name a new authenticator at registration.
pub fn display_name_input() -> Node {
    Node::input(
        WEBAUTHN_REGISTER_DISPLAYNAME,
        "",
        NodeGroup::Webauthn,
        InputType::Text,
    )
    .with_meta_label(Label::new("Name of the security key"))
}

/// Trigger node removing one registered credential.
///
/// The node value is the credential ID in its storage encoding, so the
/// submitting flow can address the exact credential to unlink.
pub fn unlink_trigger(credential: &Credential) -> Node {
    let display_name = if credential.display_name.is_empty() {
        WEBAUTHN_DEFAULT_KEY_NAME.as_str()
    } else {
        credential.display_name.as_str()
    };
    let added_at = credential.added_at.format("%Y-%m-%d %H:%M:%S UTC");

    Node::input(
        WEBAUTHN_REMOVE,
        credential.encoded_id(),
        NodeGroup::Webauthn,
        InputType::Submit,
    )
    .with_meta_label(
        Label::new(format!("Remove security key \"{display_name}\" added {added_at}"))
            .with_context(json!({
                "display_name": display_name,
                "added_at": credential.added_at,
            })),
    )
}
