mod node;

pub use node::{InputAttributes, InputType, Label, Node, NodeGroup};
