use crate::render::NodeBundle;
use crate::schema::AttributeSchema;

/// `mj-raw` takes no attributes beyond the global ones.
pub static SCHEMA: AttributeSchema = AttributeSchema::new(&[], &[]);

pub fn render(node: &NodeBundle<'_>) -> String {
    node.node.content.clone()
}
