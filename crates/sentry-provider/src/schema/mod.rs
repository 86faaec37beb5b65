pub mod attribute;
pub mod attribute_role;
pub mod attribute_type;
#[allow(clippy::module_inception)]
pub mod schema;

pub use attribute::Attribute;
pub use attribute_role::AttributeRole;
pub use attribute_type::AttributeType;
pub use schema::Schema;
