mod map_dto;
mod point_dto;

pub use map_dto::{
    FilterStateDto, MapPointDto, SelectionResponseDto, SelectionState, VisiblePointsQuery,
};
pub use point_dto::{DeletePointResponseDto, PointDraftDto, PointResponseDto, PointStatsDto};
