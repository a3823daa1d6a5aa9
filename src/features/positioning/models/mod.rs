mod position;

pub use position::{PositionSource, ResolvedPosition};
