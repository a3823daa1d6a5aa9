use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::features::categories::Category;
use crate::features::points::dtos::PointDraftDto;
use crate::features::points::models::{AdminStatus, FieldCondition, PointOfInterest};
use crate::features::points::services::qr_code::SequenceSource;
use crate::shared::clock::Clock;
use crate::shared::geo::Coordinate;

/// An active point near the fallback viewpoint with a unique placeholder QR code
pub fn sample_point(name: &str, category: Category) -> PointOfInterest {
    let id = Uuid::now_v7();
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    PointOfInterest {
        id,
        name: name.to_string(),
        category,
        coordinate: Coordinate::new(12.9716, 77.5946).unwrap(),
        description: String::new(),
        status: AdminStatus::Active,
        condition: FieldCondition::unknown(),
        qr_code: format!("QR-TEST-{}", id),
        created_at: date,
        updated_at: date,
    }
}

pub fn draft(name: &str, category: &str, lat: &str, lng: &str) -> PointDraftDto {
    PointDraftDto {
        name: name.to_string(),
        category: category.to_string(),
        coordinates: [lat.to_string(), lng.to_string()],
        description: String::new(),
    }
}

/// Clock pinned to a date that tests move explicitly
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.lock().unwrap();
        *today += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}

/// Replays a fixed list of sequence values, then repeats the last one
pub struct ScriptedSequence {
    values: VecDeque<u16>,
    last: u16,
}

impl ScriptedSequence {
    pub fn new(values: Vec<u16>) -> Self {
        Self {
            values: values.into(),
            last: 0,
        }
    }
}

impl SequenceSource for ScriptedSequence {
    fn draw(&mut self) -> u16 {
        if let Some(value) = self.values.pop_front() {
            self.last = value;
        }
        self.last
    }
}
