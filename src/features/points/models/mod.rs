mod point;

pub use point::{
    AdminStatus, FieldCondition, OperationalStatus, PointId, PointOfInterest, ValidPointDraft,
};
