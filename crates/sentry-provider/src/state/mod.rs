pub mod attribute_value;
pub mod resource_data;

pub use attribute_value::AttributeValue;
pub use resource_data::ResourceData;
