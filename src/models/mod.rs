pub mod attribute;
pub mod de;
pub mod object;
pub mod reference;
pub mod view;

pub use attribute::{AttributeRecord, DataType, EnumValue, Source, Status};
pub use object::{ObjectRecord, PerspectiveRecord};
pub use reference::AttributeRef;
pub use view::ViewRecord;
