//! The three transmissions (sanchuan) and the rules that select them.
//!
//! Selection is an ordered decision chain over the four lessons; the first
//! rule that matches wins:
//!
//! 1. Concealed echo (伏吟): two lessons coincide.
//! 2. Reflected mirror (反吟): two lessons sit on opposite branches.
//! 3. Double specialization (八专): a specialization day whose third lesson
//!    stays on the pair branch.
//! 4. Count-based rules: thief conquest (贼克), distant conquest (遥克),
//!    pleiades (昴星) for four distinct lessons, deficiency (涉害) for three.
//!
//! A chart that matches nothing falls back to lessons 1–3 in order.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::lesson::{FourLessons, Lesson};
use crate::pillar::Pillar;
use crate::spirit::Spirit;

/// Lesson index pairs in the order the coincidence rules scan them.
const LESSON_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

const ECHO_MEANINGS: [&str; 3] = [
    "伏而不动，事多停滞",
    "静守待时，宜忍耐",
    "久伏终动，事有转机",
];

const MIRROR_MEANINGS: [&str; 3] = [
    "反复无常，动荡变化",
    "两相对冲，主争执对立",
    "冲而复合，终归和解",
];

/// Named method used to derive the transmissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransmissionMethod {
    ConcealedEcho,
    ReflectedMirror,
    DoubleSpecialization,
    ThiefConquest,
    DistantConquest,
    Pleiades,
    Deficiency,
}

impl TransmissionMethod {
    /// Traditional name (伏吟, 反吟, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConcealedEcho => "伏吟",
            Self::ReflectedMirror => "反吟",
            Self::DoubleSpecialization => "八专",
            Self::ThiefConquest => "贼克",
            Self::DistantConquest => "遥克",
            Self::Pleiades => "昴星",
            Self::Deficiency => "涉害",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::ConcealedEcho => "Concealed Echo",
            Self::ReflectedMirror => "Reflected Mirror",
            Self::DoubleSpecialization => "Double Specialization",
            Self::ThiefConquest => "Thief Conquest",
            Self::DistantConquest => "Distant Conquest",
            Self::Pleiades => "Pleiades",
            Self::Deficiency => "Deficiency",
        }
    }
}

/// Which rule of the decision chain matched, with the data it matched on.
///
/// Lesson positions are 0-based indices into [`FourLessons::lessons`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Branch shared by the first coinciding pair.
    ConcealedEcho { branch: Branch },
    /// First branch of the first opposing pair.
    ReflectedMirror { branch: Branch },
    DoubleSpecialization,
    /// `(conquered, conquering)` lesson positions, or `None` when a ground
    /// conquest exists but no lesson pair conquers; then lessons 1–3 are used.
    ThiefConquest { pair: Option<(usize, usize)> },
    /// Lesson in a conquest relation with the day stem.
    DistantConquest { lesson: usize },
    Pleiades,
    Deficiency,
}

impl Classification {
    pub const fn method(&self) -> TransmissionMethod {
        match self {
            Self::ConcealedEcho { .. } => TransmissionMethod::ConcealedEcho,
            Self::ReflectedMirror { .. } => TransmissionMethod::ReflectedMirror,
            Self::DoubleSpecialization => TransmissionMethod::DoubleSpecialization,
            Self::ThiefConquest { .. } => TransmissionMethod::ThiefConquest,
            Self::DistantConquest { .. } => TransmissionMethod::DistantConquest,
            Self::Pleiades => TransmissionMethod::Pleiades,
            Self::Deficiency => TransmissionMethod::Deficiency,
        }
    }
}

/// Position of a transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Initial,
    Middle,
    Final,
}

impl Stage {
    /// Chinese name (初传 中传 末传).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "初传",
            Self::Middle => "中传",
            Self::Final => "末传",
        }
    }

    pub const fn all() -> [Stage; 3] {
        [Self::Initial, Self::Middle, Self::Final]
    }
}

/// One transmission: a branch, the spirit on it and the reading it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    pub branch: Branch,
    pub spirit: Spirit,
    pub meaning: String,
    pub stage: Stage,
}

impl Transmission {
    fn new(stage: Stage, branch: Branch, spirit: Spirit, meaning: &str) -> Self {
        Self {
            branch,
            spirit,
            meaning: meaning.to_owned(),
            stage,
        }
    }

    /// Transmission whose meaning comes from the spirit table.
    fn with_spirit_meaning(stage: Stage, branch: Branch, spirit: Spirit) -> Self {
        Self::new(stage, branch, spirit, spirit.transmission_meaning())
    }
}

/// The selected method and its initial, middle and final transmissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeTransmissions {
    pub method: TransmissionMethod,
    pub transmissions: [Transmission; 3],
}

impl ThreeTransmissions {
    pub fn initial(&self) -> &Transmission {
        &self.transmissions[0]
    }

    pub fn middle(&self) -> &Transmission {
        &self.transmissions[1]
    }

    /// The final (末) transmission.
    pub fn last(&self) -> &Transmission {
        &self.transmissions[2]
    }

    pub fn branches(&self) -> [Branch; 3] {
        self.transmissions.each_ref().map(|t| t.branch)
    }

    pub fn spirits(&self) -> [Spirit; 3] {
        self.transmissions.each_ref().map(|t| t.spirit)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transmission> {
        self.transmissions.iter()
    }
}

/// Run the decision chain without building transmissions.
///
/// Returns `None` when no rule applies.
pub fn classify(lessons: &FourLessons, day: Pillar, hour: Pillar) -> Option<Classification> {
    let ls = lessons.lessons();

    // On a specialization day lodging on its own branch, lessons 1/3 and 2/4
    // coincide by construction; they count only when the hour repeats the day.
    let exempt =
        day.is_specialization() && day.stem().lodging_branch() == day.branch() && hour != day;

    for (i, j) in LESSON_PAIRS {
        if exempt && matches!((i, j), (0, 2) | (1, 3)) {
            continue;
        }
        if ls[i].echoes(&ls[j]) {
            return Some(Classification::ConcealedEcho {
                branch: ls[i].branch,
            });
        }
    }
    if !exempt && ls[1].branch == ls[3].branch {
        return Some(Classification::ConcealedEcho {
            branch: ls[1].branch,
        });
    }

    for (i, j) in LESSON_PAIRS {
        if ls[i].branch.is_opposite(ls[j].branch) {
            return Some(Classification::ReflectedMirror {
                branch: ls[i].branch,
            });
        }
    }

    if day.is_specialization() && ls[2].branch == day.stem().specialization_branch() {
        return Some(Classification::DoubleSpecialization);
    }

    if ls.iter().any(Lesson::has_conquest) {
        return Some(Classification::ThiefConquest {
            pair: conquest_pair(ls),
        });
    }

    let stem_element = day.stem().element();
    let distant = ls
        .iter()
        .position(|l| l.element().is_conquering(stem_element))
        .or_else(|| ls.iter().position(|l| stem_element.is_conquering(l.element())));
    if let Some(lesson) = distant {
        return Some(Classification::DistantConquest { lesson });
    }

    match lessons.unique_count() {
        4 => Some(Classification::Pleiades),
        3 => Some(Classification::Deficiency),
        _ => None,
    }
}

/// First `(i, j)` with lesson `j` conquering lesson `i`, scanning `i` outer.
fn conquest_pair(ls: &[Lesson; 4]) -> Option<(usize, usize)> {
    (0..4).find_map(|i| {
        (0..4)
            .filter(|&j| j != i)
            .find(|&j| ls[j].element().is_conquering(ls[i].element()))
            .map(|j| (i, j))
    })
}

fn fixed_meanings(
    branches: [Branch; 3],
    spirit_of: impl Fn(Branch) -> Spirit,
    meanings: &[&str; 3],
) -> [Transmission; 3] {
    let stages = Stage::all();
    [0, 1, 2].map(|k| {
        Transmission::new(stages[k], branches[k], spirit_of(branches[k]), meanings[k])
    })
}

/// Select the three transmissions for a set of lessons.
pub fn select_transmissions(
    lessons: &FourLessons,
    day: Pillar,
    hour: Pillar,
) -> ThreeTransmissions {
    let ls = lessons.lessons();
    // Spirit of a derived branch: the first lesson standing on it, else 贵人.
    let spirit_of = |b: Branch| lessons.spirit_on(b).unwrap_or(Spirit::GuiRen);
    let from_lesson =
        |stage: Stage, l: &Lesson| Transmission::with_spirit_meaning(stage, l.branch, l.spirit);
    let derived =
        |stage: Stage, b: Branch| Transmission::with_spirit_meaning(stage, b, spirit_of(b));
    let positional = || {
        [
            from_lesson(Stage::Initial, &ls[0]),
            from_lesson(Stage::Middle, &ls[1]),
            from_lesson(Stage::Final, &ls[2]),
        ]
    };

    let Some(class) = classify(lessons, day, hour) else {
        tracing::warn!(
            day = %day,
            hour = %hour,
            "no transmission rule matched; using lessons 1-3"
        );
        return ThreeTransmissions {
            method: TransmissionMethod::ThiefConquest,
            transmissions: positional(),
        };
    };
    tracing::debug!(
        day = %day,
        hour = %hour,
        method = class.method().name(),
        "transmission rule matched"
    );

    let transmissions = match class {
        Classification::ConcealedEcho { branch } => {
            let b = [branch, branch.offset(1), branch.offset(2)];
            fixed_meanings(b, spirit_of, &ECHO_MEANINGS)
        }
        Classification::ReflectedMirror { branch } => {
            let b = [branch, branch.opposite(), branch.offset(6)];
            fixed_meanings(b, spirit_of, &MIRROR_MEANINGS)
        }
        Classification::DoubleSpecialization => {
            let initial = if day.stem().polarity().is_yang() {
                ls[0].branch.offset(2)
            } else {
                ls[3].branch.offset(-2)
            };
            [
                derived(Stage::Initial, initial),
                from_lesson(Stage::Middle, &ls[0]),
                from_lesson(Stage::Final, &ls[0]),
            ]
        }
        Classification::ThiefConquest { pair: Some((i, j)) } => {
            let target = ls[j].element().conquers().representative_branch();
            [
                from_lesson(Stage::Initial, &ls[i]),
                from_lesson(Stage::Middle, &ls[j]),
                derived(Stage::Final, target),
            ]
        }
        Classification::ThiefConquest { pair: None } => positional(),
        Classification::DistantConquest { lesson } => {
            let b = ls[lesson].branch;
            [
                from_lesson(Stage::Initial, &ls[lesson]),
                derived(Stage::Middle, b.offset(1)),
                derived(Stage::Final, b.offset(2)),
            ]
        }
        Classification::Pleiades => {
            let b = ls[0].branch;
            [
                from_lesson(Stage::Initial, &ls[0]),
                Transmission::with_spirit_meaning(Stage::Middle, b.offset(1), Spirit::TengShe),
                Transmission::with_spirit_meaning(Stage::Final, b.offset(2), Spirit::ZhuQue),
            ]
        }
        Classification::Deficiency => {
            let u = lessons.unique();
            [
                from_lesson(Stage::Initial, &u[0]),
                from_lesson(Stage::Middle, &u[1]),
                from_lesson(Stage::Final, &u[2]),
            ]
        }
    };

    ThreeTransmissions {
        method: class.method(),
        transmissions,
    }
}
