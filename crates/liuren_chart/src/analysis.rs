//! Narration over the four lessons and three transmissions.
//!
//! Nothing here changes the symbolic data; it only counts and describes it.

use liuren_base::{
    Branch, Element, FourLessons, Lesson, Nature, Polarity, Spirit, ThreeTransmissions,
};
use serde::{Deserialize, Serialize};

/// Overall lean of the seven spirit positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Favorable,
    Unfavorable,
    Balanced,
}

impl Bias {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "偏吉",
            Self::Unfavorable => "偏凶",
            Self::Balanced => "平和",
        }
    }
}

/// Auspicious/inauspicious counts over 4 lessons + 3 transmissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritTally {
    pub auspicious: u8,
    pub inauspicious: u8,
    pub neutral: u8,
    pub bias: Bias,
}

/// Direction of travel through the transmissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Sequential,
    Reverse,
    Mixed,
}

impl Flow {
    /// Chinese name (顺 逆 混合).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequential => "顺",
            Self::Reverse => "逆",
            Self::Mixed => "混合",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sequential => "三传顺行，事情发展顺利",
            Self::Reverse => "三传逆行，事情可能有阻碍",
            Self::Mixed => "三传混合，事情发展复杂多变",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    pub flow: Flow,
    /// 0-100.
    pub strength: u8,
}

/// Repetition pattern of the four lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonPattern {
    /// Four distinct lessons.
    NoRepeat,
    /// Three distinct lessons.
    OneRepeat,
    /// Two distinct lessons.
    TwoRepeats,
    /// All four lessons identical.
    FourFold,
}

impl LessonPattern {
    pub fn from_unique_count(k: usize) -> Self {
        match k {
            4 => Self::NoRepeat,
            3 => Self::OneRepeat,
            2 => Self::TwoRepeats,
            _ => Self::FourFold,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NoRepeat => "四课无重",
            Self::OneRepeat => "一重一空",
            Self::TwoRepeats => "二重二空",
            Self::FourFold => "四重",
        }
    }
}

/// Per-lesson breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonAnalysis {
    pub ordinal: u8,
    pub branch: Branch,
    pub spirit: Spirit,
    pub element: Element,
    pub polarity: Polarity,
    /// 0-100; 50 shifted by 20 toward the spirit's nature.
    pub strength: u8,
    pub nature: Nature,
}

/// Complete analysis of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub tally: SpiritTally,
    pub flow: FlowAnalysis,
    pub pattern: LessonPattern,
    pub lessons: [LessonAnalysis; 4],
    /// Consistency warnings about the lessons themselves.
    pub validation: Vec<String>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

/// Count spirit natures over the lessons and transmissions.
pub fn tally_spirits(lessons: &FourLessons, transmissions: &ThreeTransmissions) -> SpiritTally {
    let (mut auspicious, mut inauspicious, mut neutral) = (0u8, 0u8, 0u8);
    let spirits = lessons
        .iter()
        .map(|l| l.spirit)
        .chain(transmissions.iter().map(|t| t.spirit));
    for s in spirits {
        match s.nature() {
            Nature::Auspicious => auspicious += 1,
            Nature::Inauspicious => inauspicious += 1,
            Nature::Neutral => neutral += 1,
        }
    }
    let bias = match auspicious.cmp(&inauspicious) {
        std::cmp::Ordering::Greater => Bias::Favorable,
        std::cmp::Ordering::Less => Bias::Unfavorable,
        std::cmp::Ordering::Equal => Bias::Balanced,
    };
    SpiritTally {
        auspicious,
        inauspicious,
        neutral,
        bias,
    }
}

/// Classify the travel from initial to middle to final.
///
/// Sequential when both steps are at most six branches forward; otherwise
/// reverse when both are at most six backward.
pub fn transmission_flow(transmissions: &ThreeTransmissions) -> FlowAnalysis {
    let [i, m, f] = transmissions.branches();
    let flow = if i.forward_distance(m) <= 6 && m.forward_distance(f) <= 6 {
        Flow::Sequential
    } else if m.forward_distance(i) <= 6 && f.forward_distance(m) <= 6 {
        Flow::Reverse
    } else {
        Flow::Mixed
    };
    let strength = match flow {
        Flow::Sequential => 50 + 20,
        Flow::Reverse => 50 - 10,
        Flow::Mixed => 50,
    };
    FlowAnalysis { flow, strength }
}

pub fn analyze_lesson(lesson: &Lesson) -> LessonAnalysis {
    let nature = lesson.spirit.nature();
    let strength = match nature {
        Nature::Auspicious => 70,
        Nature::Inauspicious => 30,
        Nature::Neutral => 50,
    };
    LessonAnalysis {
        ordinal: lesson.ordinal,
        branch: lesson.branch,
        spirit: lesson.spirit,
        element: lesson.branch.element(),
        polarity: lesson.branch.polarity(),
        strength,
        nature,
    }
}

/// Sanity warnings: misnumbered lessons, or fewer than two distinct spirits.
pub fn validate_lessons(lessons: &FourLessons) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, l) in lessons.iter().enumerate() {
        if l.ordinal as usize != i + 1 {
            warnings.push(format!("第{}课位置标记不正确", i + 1));
        }
    }
    let mut spirits: Vec<Spirit> = lessons.iter().map(|l| l.spirit).collect();
    spirits.sort_by_key(|s| s.index());
    spirits.dedup();
    if spirits.len() < 2 {
        warnings.push("四课神将过于单一，可能存在计算错误".to_owned());
    }
    warnings
}

/// Advice attached to the spirit on the initial transmission.
pub fn spirit_advice(spirit: Spirit) -> &'static [&'static str] {
    match spirit {
        Spirit::GuiRen => &["宜主动寻求贵人帮助，把握机遇", "保持谦逊态度，广结善缘"],
        Spirit::QingLong => &["适合投资理财，把握财运", "可考虑拓展业务，发展新项目"],
        Spirit::LiuHe => &["利于合作洽谈，签订合同", "感情方面有利，可考虑重要决定"],
        _ => &[],
    }
}

/// Cautions attached to an inauspicious initial transmission.
pub fn initial_warnings(spirit: Spirit) -> Vec<String> {
    let mut out = Vec::new();
    if matches!(
        spirit,
        Spirit::BaiHu | Spirit::TengShe | Spirit::ZhuQue | Spirit::XuanWu | Spirit::TianKong
    ) {
        out.push(format!("初传遇{}，需特别注意相关事项", spirit.name()));
    }
    let specific = match spirit {
        Spirit::BaiHu => Some("注意身体健康，避免意外伤害"),
        Spirit::ZhuQue => Some("谨慎言辞，避免口舌是非"),
        Spirit::XuanWu => Some("防范小人暗算，保护财物安全"),
        Spirit::TianKong => Some("避免虚假信息，谨防上当受骗"),
        _ => None,
    };
    out.extend(specific.map(str::to_owned));
    out
}

/// Run every analysis over a chart's lessons and transmissions.
pub fn analyze(lessons: &FourLessons, transmissions: &ThreeTransmissions) -> Analysis {
    let tally = tally_spirits(lessons, transmissions);
    let flow = transmission_flow(transmissions);
    let pattern = LessonPattern::from_unique_count(lessons.unique_count());
    let lesson_analyses = lessons.lessons().each_ref().map(analyze_lesson);
    let validation = validate_lessons(lessons);
    let initial = transmissions.initial().spirit;

    let mut recommendations: Vec<String> = spirit_advice(initial)
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    match tally.bias {
        Bias::Favorable => recommendations.push("吉神众多，宜积极行动".to_owned()),
        Bias::Unfavorable => recommendations.push("凶神较多，宜谨慎行事".to_owned()),
        Bias::Balanced => {}
    }
    match flow.flow {
        Flow::Sequential => recommendations.push("三传顺行，可顺势而为".to_owned()),
        Flow::Reverse => recommendations.push("三传逆行，需耐心等待时机".to_owned()),
        Flow::Mixed => {}
    }
    if !validation.is_empty() {
        recommendations.push("起课过程中有异常，建议重新核对时间".to_owned());
    }

    Analysis {
        tally,
        flow,
        pattern,
        lessons: lesson_analyses,
        validation,
        recommendations,
        warnings: initial_warnings(initial),
    }
}
