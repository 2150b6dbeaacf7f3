//! Reader-facing interpretation of a chart.

use liuren_base::{FourLessons, Spirit, SpiritPlacement, ThreeTransmissions};
use serde::{Deserialize, Serialize};

use crate::analysis::{Analysis, initial_warnings, spirit_advice};
use crate::chart_types::QuestionCategory;

/// Text bundle for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// One-paragraph reading led by the initial transmission.
    pub general: String,
    /// One line per lesson, per transmission, and for the Noble Deity.
    pub detailed: Vec<String>,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    /// 0.0-1.0.
    pub confidence: f64,
    pub summary: String,
}

const LESSON_LABELS: [&str; 4] = ["一课", "二课", "三课", "四课"];

/// General reading for a question category.
pub fn general_reading(transmissions: &ThreeTransmissions, category: QuestionCategory) -> String {
    let [i, m, f] = transmissions.spirits();
    let lead = match category {
        QuestionCategory::Other => "综合来看，".to_owned(),
        c => format!("在{}方面，", c.name()),
    };
    let verdict = match i {
        Spirit::GuiRen => "有贵人相助，事情发展顺利。",
        Spirit::QingLong => "喜庆之事将至，财运亨通。",
        Spirit::BaiHu => "需防意外之事，宜谨慎行事。",
        Spirit::ZhuQue => "可能有口舌是非，需注意沟通方式。",
        _ => transmissions.initial().meaning.as_str(),
    };
    format!(
        "根据三传分析：初传{}，中传{}，末传{}。{lead}{verdict}",
        i.name(),
        m.name(),
        f.name()
    )
}

/// Line-by-line reading of lessons, transmissions and the Noble Deity.
pub fn detailed_reading(
    lessons: &FourLessons,
    transmissions: &ThreeTransmissions,
    placement: &SpiritPlacement,
) -> Vec<String> {
    let mut lines: Vec<String> = lessons
        .iter()
        .zip(LESSON_LABELS)
        .map(|(l, label)| {
            format!(
                "{label}：{}在{}位，{}",
                l.spirit.name(),
                l.branch.name(),
                l.spirit.lesson_reading()
            )
        })
        .collect();
    lines.extend(transmissions.iter().map(|t| {
        format!("{}{}：{}", t.stage.name(), t.spirit.name(), t.meaning)
    }));
    lines.push(format!(
        "贵人在{}位，主导整体运势走向",
        placement.noble_branch().name()
    ));
    lines
}

/// Suggestions from the initial spirit, then the question category.
pub fn suggestions(transmissions: &ThreeTransmissions, category: QuestionCategory) -> Vec<String> {
    let mut out: Vec<String> = spirit_advice(transmissions.initial().spirit)
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
    let by_category = match category {
        QuestionCategory::Career => Some("工作中保持积极态度，主动承担责任"),
        QuestionCategory::Wealth => Some("理财需谨慎，避免高风险投资"),
        QuestionCategory::Relationship => Some("多沟通理解，避免误会产生"),
        _ => None,
    };
    out.extend(by_category.map(str::to_owned));
    out
}

/// Confidence in 0.0-1.0.
///
/// Base 0.7; +0.2 when the four lessons carry four distinct spirits, +0.1
/// when they all carry the same one; +0.1 for the placed Noble Deity.
pub fn confidence(lessons: &FourLessons) -> f64 {
    let mut spirits: Vec<Spirit> = lessons.iter().map(|l| l.spirit).collect();
    spirits.sort_by_key(|s| s.index());
    spirits.dedup();
    // Tenths, to keep the sum exact.
    let mut tenths: u8 = 7;
    match spirits.len() {
        4 => tenths += 2,
        1 => tenths += 1,
        _ => {}
    }
    tenths += 1;
    f64::from(tenths.min(10)) / 10.0
}

/// One-line summary: pattern, method, bias and flow.
pub fn summary(analysis: &Analysis, transmissions: &ThreeTransmissions) -> String {
    format!(
        "课式类型：{}（{}法），整体趋势：{}，{}",
        analysis.pattern.name(),
        transmissions.method.name(),
        analysis.tally.bias.name(),
        analysis.flow.flow.description()
    )
}

/// Assemble the interpretation bundle.
pub fn interpret(
    lessons: &FourLessons,
    transmissions: &ThreeTransmissions,
    placement: &SpiritPlacement,
    analysis: &Analysis,
    category: QuestionCategory,
) -> Interpretation {
    Interpretation {
        general: general_reading(transmissions, category),
        detailed: detailed_reading(lessons, transmissions, placement),
        suggestions: suggestions(transmissions, category),
        warnings: initial_warnings(transmissions.initial().spirit),
        confidence: confidence(lessons),
        summary: summary(analysis, transmissions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use liuren_base::{Pillar, SpiritDirection, build_lessons, place_spirits, select_transmissions};

    fn parts(day: &str, hour: &str) -> (SpiritPlacement, FourLessons, ThreeTransmissions) {
        let day: Pillar = day.parse().unwrap();
        let hour: Pillar = hour.parse().unwrap();
        let p = place_spirits(day.stem(), true, SpiritDirection::Clockwise);
        let fl = build_lessons(day, hour, &p);
        let tt = select_transmissions(&fl, day, hour);
        (p, fl, tt)
    }

    #[test]
    fn general_reading_by_category() {
        let (_, _, tt) = parts("甲子", "丙寅");
        let g = general_reading(&tt, QuestionCategory::Career);
        assert_eq!(
            g,
            "根据三传分析：初传天后，中传贵人，末传天后。在事业方面，慈爱包容，母性滋养"
        );
        let g = general_reading(&tt, QuestionCategory::Other);
        assert!(g.contains("综合来看，"));
    }

    #[test]
    fn detailed_has_eight_lines() {
        let (p, fl, tt) = parts("甲子", "丙寅");
        let d = detailed_reading(&fl, &tt, &p);
        assert_eq!(d.len(), 8);
        assert_eq!(d[0], "一课：腾蛇在寅位，主变化惊扰，需防虚惊");
        assert_eq!(d[4], "初传天后：慈爱包容，母性滋养");
        assert_eq!(d[7], "贵人在丑位，主导整体运势走向");
    }

    #[test]
    fn confidence_levels() {
        let (_, fl, _) = parts("甲子", "丙寅");
        assert_eq!(confidence(&fl), 1.0);
        let (_, fl, _) = parts("乙卯", "乙卯");
        assert_eq!(confidence(&fl), 0.9);
        // 白虎 太常 白虎 太常
        let (_, fl, _) = parts("庚申", "甲申");
        assert_eq!(confidence(&fl), 0.8);
    }

    #[test]
    fn summary_line() {
        let (_, fl, tt) = parts("戊申", "壬子");
        let a = analyze(&fl, &tt);
        assert_eq!(
            summary(&a, &tt),
            "课式类型：四课无重（昴星法），整体趋势：偏凶，三传顺行，事情发展顺利"
        );
    }

    #[test]
    fn suggestions_add_category_line() {
        let (_, _, tt) = parts("乙卯", "乙卯");
        let s = suggestions(&tt, QuestionCategory::Wealth);
        assert_eq!(s.len(), 3);
        assert_eq!(s[2], "理财需谨慎，避免高风险投资");
    }
}
