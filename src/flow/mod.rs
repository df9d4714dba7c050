mod nodes;

pub use nodes::{
    WEBAUTHN_LOGIN, WEBAUTHN_REGISTER, WEBAUTHN_REGISTER_DISPLAYNAME, WEBAUTHN_REMOVE,
    display_name_input, login_trigger, registration_trigger, unlink_trigger,
};
