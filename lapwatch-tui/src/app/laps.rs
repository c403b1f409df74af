use super::categories::CategoryId;
use std::collections::VecDeque;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Lap {
    /// 1-based lap number, as shown in the list.
    pub number: usize,
    /// Stopwatch reading in seconds when the lap was taken.
    pub time: u64,
    pub recorded_at: OffsetDateTime,
    pub category: Option<CategoryId>,
}

/// Recorded laps, newest first.
#[derive(Debug, Default)]
pub struct LapLog {
    laps: VecDeque<Lap>,
}

impl LapLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, time: u64) -> &Lap {
        let lap = Lap {
            number: self.laps.len() + 1,
            time,
            recorded_at: OffsetDateTime::now_utc(),
            category: None,
        };
        self.laps.push_front(lap);
        &self.laps[0]
    }

    /// Tag the lap at display position `index`. Out-of-range indices are ignored.
    pub fn assign_category(&mut self, index: usize, category: CategoryId) -> bool {
        match self.laps.get_mut(index) {
            Some(lap) => {
                lap.category = Some(category);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Lap> {
        self.laps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lap> {
        self.laps.iter()
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }
}
