mod collection;
mod list;
mod specs;
mod vehicle;

pub use collection::CollectionDetails;
pub use list::{CollectionList, CollectionSummary, Pagination};
pub use specs::{spec_rows, SpecRow, VehicleSpecs};
pub use vehicle::{InspectionHistory, VehicleData, VehicleText};
