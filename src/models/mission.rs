//! Mission and curriculum models.
//!
//! A curriculum is the fixed, ordered list of missions a class works
//! through. Order is assignment priority: the mission at index 0 always
//! receives the earliest qualifying date.

use serde::{Deserialize, Serialize};

/// A single mission in a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Catalog identifier.
    pub id: String,
    /// Display title, used as the scheduled mission name.
    pub title: String,
}

impl Mission {
    /// Creates a mission.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Ordered list of missions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    missions: Vec<Mission>,
}

impl Curriculum {
    /// Creates an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mission.
    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.missions.push(mission);
        self
    }

    /// Builds a curriculum from titles; ids are `mission-1`, `mission-2`, ...
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Mission::new(format!("mission-{}", i + 1), title))
            .collect()
    }

    /// Mission at `index`.
    pub fn get(&self, index: usize) -> Option<&Mission> {
        self.missions.get(index)
    }

    /// Missions in assignment order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mission> {
        self.missions.iter()
    }

    /// Number of missions.
    pub fn len(&self) -> usize {
        self.missions.len()
    }

    /// Whether the curriculum has no missions.
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Missions as a slice.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }
}

impl FromIterator<Mission> for Curriculum {
    fn from_iter<T: IntoIterator<Item = Mission>>(iter: T) -> Self {
        Self {
            missions: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Mission>> for Curriculum {
    fn from(missions: Vec<Mission>) -> Self {
        Self { missions }
    }
}

impl<'a> IntoIterator for &'a Curriculum {
    type Item = &'a Mission;
    type IntoIter = std::slice::Iter<'a, Mission>;

    fn into_iter(self) -> Self::IntoIter {
        self.missions.iter()
    }
}
