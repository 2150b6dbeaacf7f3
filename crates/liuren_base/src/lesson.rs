//! The four lessons (sike).
//!
//! The heaven plate is the earth plate rotated so that 子 sits on the
//! Noble-Deity branch; the rotation `offset` is that branch's index. Lessons
//! 1 and 3 start from the day stem's lodging branch and the day branch; lessons
//! 2 and 4 are the branches the heaven plate carries above them.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::element::Element;
use crate::error::LiurenError;
use crate::pillar::Pillar;
use crate::placement::{SpiritDirection, SpiritPlacement, place_spirits_from};
use crate::spirit::Spirit;
use crate::stem::Stem;

/// One of the four lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Day stem; all four lessons carry it.
    pub stem: Stem,
    /// Branch on the heaven plate.
    pub branch: Branch,
    /// Spirit sitting on `branch`.
    pub spirit: Spirit,
    /// 1..=4.
    pub ordinal: u8,
    /// Earth-plate branch that `branch` is mounted on.
    pub ground: Branch,
}

impl Lesson {
    /// True if the lesson has the same branch and spirit as `other`.
    pub fn echoes(&self, other: &Lesson) -> bool {
        self.branch == other.branch && self.spirit == other.spirit
    }

    /// True if the ground and mounted branches are in a conquest relation.
    pub fn has_conquest(&self) -> bool {
        self.ground.element().in_conflict(self.branch.element())
    }

    pub fn element(&self) -> Element {
        self.branch.element()
    }
}

/// The four lessons of a chart plus the plate rotation that produced them.
///
/// Deserialized lessons must equal what [`build_lessons`] gives for their
/// day, hour and offset under either spirit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLessons")]
pub struct FourLessons {
    lessons: [Lesson; 4],
    offset: u8,
    day: Pillar,
    hour: Pillar,
}

#[derive(Deserialize)]
struct RawLessons {
    lessons: [Lesson; 4],
    offset: u8,
    day: Pillar,
    hour: Pillar,
}

impl TryFrom<RawLessons> for FourLessons {
    type Error = LiurenError;

    fn try_from(raw: RawLessons) -> Result<Self, Self::Error> {
        let noble = Branch::try_from_index(raw.offset).map_err(|_| {
            LiurenError::InvalidLessons(format!("offset {} outside 0..12", raw.offset))
        })?;
        [SpiritDirection::Clockwise, SpiritDirection::CounterClockwise]
            .into_iter()
            .map(|dir| build_lessons(raw.day, raw.hour, &place_spirits_from(noble, dir)))
            .find(|built| built.lessons == raw.lessons)
            .ok_or_else(|| {
                LiurenError::InvalidLessons(format!(
                    "lessons do not follow from {} with offset {}",
                    raw.day, raw.offset
                ))
            })
    }
}

impl FourLessons {
    pub const fn day(&self) -> Pillar {
        self.day
    }

    /// Hour pillar; kept for special-pattern detection only.
    pub const fn hour(&self) -> Pillar {
        self.hour
    }

    pub const fn lessons(&self) -> &[Lesson; 4] {
        &self.lessons
    }

    /// Lesson by 1-based ordinal; `None` outside 1..=4.
    pub fn get(&self, ordinal: u8) -> Option<&Lesson> {
        self.lessons.get(usize::from(ordinal).checked_sub(1)?)
    }

    /// Rotation of the heaven plate over the earth plate, 0..12.
    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Branch the heaven plate carries above `ground`.
    pub const fn mounted_on(&self, ground: Branch) -> Branch {
        ground.offset(self.offset as i32)
    }

    /// `(ground, mounted)` pairs for the full heaven plate, from 子.
    pub fn heaven_plate(&self) -> [(Branch, Branch); 12] {
        ALL_BRANCHES.map(|g| (g, self.mounted_on(g)))
    }

    /// Spirit of the first lesson whose branch is `branch`.
    pub fn spirit_on(&self, branch: Branch) -> Option<Spirit> {
        self.lessons
            .iter()
            .find(|l| l.branch == branch)
            .map(|l| l.spirit)
    }

    /// Number of distinct `(branch, spirit)` pairs among the lessons.
    pub fn unique_count(&self) -> usize {
        self.unique().len()
    }

    /// Distinct lessons in ordinal order, dropping later echoes.
    pub fn unique(&self) -> Vec<Lesson> {
        let mut out: Vec<Lesson> = Vec::with_capacity(4);
        for l in &self.lessons {
            if !out.iter().any(|u| u.echoes(l)) {
                out.push(*l);
            }
        }
        out
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.lessons.iter()
    }

    /// Lessons as given, without checking them against a placement.
    #[cfg(test)]
    pub(crate) fn from_parts(lessons: [Lesson; 4], offset: u8, day: Pillar, hour: Pillar) -> Self {
        Self {
            lessons,
            offset,
            day,
            hour,
        }
    }
}

impl<'a> IntoIterator for &'a FourLessons {
    type Item = &'a Lesson;
    type IntoIter = std::slice::Iter<'a, Lesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.lessons.iter()
    }
}

/// Build the four lessons for a day pillar.
///
/// The hour pillar does not enter the construction; it is carried along for
/// the transmission selector.
pub fn build_lessons(day: Pillar, hour: Pillar, placement: &SpiritPlacement) -> FourLessons {
    let offset = placement.noble_branch().index();
    let stem = day.stem();
    let lesson = |ordinal: u8, branch: Branch| Lesson {
        stem,
        branch,
        spirit: placement.spirit_at(branch),
        ordinal,
        ground: branch.offset(-(offset as i32)),
    };

    let b1 = stem.lodging_branch();
    let b2 = b1.offset(offset as i32);
    let b3 = day.branch();
    let b4 = b3.offset(offset as i32);

    FourLessons {
        lessons: [lesson(1, b1), lesson(2, b2), lesson(3, b3), lesson(4, b4)],
        offset,
        day,
        hour,
    }
}
