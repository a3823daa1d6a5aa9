mod viewpoint_dto;

pub use viewpoint_dto::{ViewpointQuery, ViewpointResponseDto};
