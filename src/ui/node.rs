use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical grouping of nodes within a flow's form.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    Webauthn,
}

/// The HTML input type an input node renders as.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Submit,
}

/// Attributes of an input-field node.
///
/// `on_click` carries the client-side behavior for trigger nodes; it is
/// absent on plain inputs.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct InputAttributes {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub on_click: Option<String>,
}

/// Human-readable label attached to a node.
///
/// `context` carries the structured values the text was derived from, so a
/// UI can re-render the label in its own locale or format.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub context: Value,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: Value::Null,
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }
}

/// One declarative form element.
///
/// Nodes are assembled into a full form by the enclosing flow; this crate
/// only constructs them. The serialized shape is what the UI consumes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    pub group: NodeGroup,
    pub attributes: InputAttributes,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub meta: Option<Label>,
}

impl Node {
    /// Construct an input-field node.
    pub fn input(
        name: impl Into<String>,
        value: impl Into<String>,
        group: NodeGroup,
        input_type: InputType,
    ) -> Self {
        Self {
            node_type: "input".to_string(),
            group,
            attributes: InputAttributes {
                name: name.into(),
                input_type,
                value: value.into(),
                on_click: None,
            },
            meta: None,
        }
    }

    /// Set the client-side behavior of a trigger node.
    pub fn with_on_click(mut self, script: impl Into<String>) -> Self {
        self.attributes.on_click = Some(script.into());
        self
    }

    /// Attach a meta label.
    pub fn with_meta_label(mut self, label: Label) -> Self {
        self.meta = Some(label);
        self
    }
}
