use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::features::categories::Category;
use crate::features::points::models::{
    AdminStatus, FieldCondition, OperationalStatus, PointOfInterest,
};
use crate::features::points::services::qr_code::compose_qr_code;
use crate::features::points::services::PointStore;
use crate::shared::geo::{Coordinate, CoordinateError};

#[derive(Debug, Error, PartialEq)]
pub enum DemoDataError {
    #[error("demo point '{name}': {source}")]
    Coordinate {
        name: &'static str,
        source: CoordinateError,
    },

    #[error("demo point '{name}': {year}-{month}-{day} is not a calendar date")]
    Date {
        name: &'static str,
        year: i32,
        month: u32,
        day: u32,
    },
}

struct DemoPoint {
    name: &'static str,
    category: Category,
    position: (f64, f64),
    description: &'static str,
    /// Historic code carried over from the first admin mock, if any
    qr_code: Option<&'static str>,
    rating: f32,
    hours: &'static str,
    dates: ((i32, u32, u32), (i32, u32, u32)),
}

const DEMO_POINTS: &[DemoPoint] = &[
    DemoPoint {
        name: "Central Park Waste Station",
        category: Category::Bins,
        position: (12.9716, 77.5946),
        description: "Large capacity waste station with recycling facilities",
        qr_code: Some("QR001-CENTRAL-PARK"),
        rating: 4.5,
        hours: "24/7",
        dates: ((2024, 1, 15), (2024, 1, 20)),
    },
    DemoPoint {
        name: "Metro Plaza Restroom",
        category: Category::Toilets,
        position: (12.9756, 77.5996),
        description: "Clean public restroom with accessibility features",
        qr_code: Some("QR002-METRO-PLAZA"),
        rating: 4.2,
        hours: "6 AM - 10 PM",
        dates: ((2024, 1, 16), (2024, 1, 22)),
    },
    DemoPoint {
        name: "Urban Eats Food Court",
        category: Category::Food,
        position: (12.9731, 77.5921),
        description: "Popular food court with diverse dining options, outdoor seating, and high hygiene standards.",
        qr_code: None,
        rating: 4.7,
        hours: "7 AM - 11 PM",
        dates: ((2024, 1, 18), (2024, 1, 18)),
    },
    DemoPoint {
        name: "Riverside Dog Park",
        category: Category::Feeding,
        position: (12.9688, 77.5979),
        description: "Spacious off-leash dog park with water stations, waste bags, and separate areas for small and large dogs.",
        qr_code: None,
        rating: 4.3,
        hours: "5 AM - 9 PM",
        dates: ((2024, 1, 19), (2024, 1, 19)),
    },
    DemoPoint {
        name: "Public Bin - MG Road",
        category: Category::Bins,
        position: (12.9756, 77.6066),
        description: "Large waste bin with recycling options",
        qr_code: None,
        rating: 4.2,
        hours: "24/7",
        dates: ((2024, 1, 21), (2024, 1, 21)),
    },
    DemoPoint {
        name: "Cubbon Park Rest Area",
        category: Category::Rest,
        position: (12.9763, 77.5929),
        description: "Shaded benches near the bandstand",
        qr_code: None,
        rating: 4.0,
        hours: "6 AM - 6 PM",
        dates: ((2024, 1, 23), (2024, 1, 23)),
    },
];

fn date(
    name: &'static str,
    (year, month, day): (i32, u32, u32),
) -> Result<NaiveDate, DemoDataError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DemoDataError::Date {
        name,
        year,
        month,
        day,
    })
}

fn build(index: usize, demo: &DemoPoint) -> Result<PointOfInterest, DemoDataError> {
    let coordinate = Coordinate::new(demo.position.0, demo.position.1).map_err(|source| {
        DemoDataError::Coordinate {
            name: demo.name,
            source,
        }
    })?;
    let qr_code = demo
        .qr_code
        .map(str::to_string)
        .unwrap_or_else(|| compose_qr_code(index as u16 + 1, demo.category, demo.name));

    Ok(PointOfInterest {
        id: Uuid::now_v7(),
        name: demo.name.to_string(),
        category: demo.category,
        coordinate,
        description: demo.description.to_string(),
        status: AdminStatus::Active,
        condition: FieldCondition {
            status: OperationalStatus::Working,
            rating: Some(demo.rating),
            operating_hours: Some(demo.hours.to_string()),
        },
        qr_code,
        created_at: date(demo.name, demo.dates.0)?,
        updated_at: date(demo.name, demo.dates.1)?,
    })
}

/// Demo records shown on first start, in display order
pub fn demo_points() -> Result<Vec<PointOfInterest>, DemoDataError> {
    DEMO_POINTS
        .iter()
        .enumerate()
        .map(|(index, demo)| build(index, demo))
        .collect()
}

/// Fill `store` with the demo records
pub fn seed(store: &mut PointStore) -> Result<usize, DemoDataError> {
    let points = demo_points()?;
    let count = points.len();
    for point in points {
        store.upsert(point);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_points_respect_record_invariants() {
        let points = demo_points().unwrap();

        let ids: HashSet<_> = points.iter().map(|p| p.id).collect();
        let codes: HashSet<_> = points.iter().map(|p| p.qr_code.as_str()).collect();
        assert_eq!(ids.len(), points.len());
        assert_eq!(codes.len(), points.len());
        assert!(points.iter().all(|p| p.created_at <= p.updated_at));
        assert!(points.iter().all(|p| !p.name.trim().is_empty()));
    }

    #[test]
    fn test_seed_keeps_historic_codes() {
        let mut store = PointStore::new();
        let count = seed(&mut store).unwrap();

        assert_eq!(count, store.len());
        let first = &store.list()[0];
        assert_eq!(first.name, "Central Park Waste Station");
        assert_eq!(first.qr_code, "QR001-CENTRAL-PARK");
        assert!(store.find_by_qr_code("QR002-METRO-PLAZA").is_some());
    }

    fn broken(position: (f64, f64), dates: ((i32, u32, u32), (i32, u32, u32))) -> DemoPoint {
        DemoPoint {
            name: "Broken Bin",
            category: Category::Bins,
            position,
            description: "x",
            qr_code: None,
            rating: 1.0,
            hours: "24/7",
            dates,
        }
    }

    #[test]
    fn test_impossible_date_is_an_error() {
        let demo = broken((12.97, 77.59), ((2024, 1, 15), (2024, 2, 30)));

        let err = build(0, &demo).unwrap_err();
        assert_eq!(
            err,
            DemoDataError::Date {
                name: "Broken Bin",
                year: 2024,
                month: 2,
                day: 30,
            }
        );
        assert!(err.to_string().contains("2024-2-30"));
    }

    #[test]
    fn test_out_of_range_position_is_an_error() {
        let demo = broken((999.0, 77.59), ((2024, 1, 15), (2024, 1, 15)));

        assert!(matches!(
            build(0, &demo),
            Err(DemoDataError::Coordinate {
                source: CoordinateError::Latitude,
                ..
            })
        ));
    }
}
