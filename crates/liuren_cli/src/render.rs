//! Plain-text rendering of charts for the terminal.

use std::fmt::Write;

use liuren_base::{Pillar, SpiritPlacement};
use liuren_chart::Chart;

pub fn placement_text(p: &SpiritPlacement) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "贵人: {}  方向: {}",
        p.noble_branch().name(),
        p.direction().name()
    );
    for (branch, spirit) in p.iter() {
        let _ = writeln!(
            out,
            "  {}  {}  ({}, {})",
            branch.name(),
            spirit.name(),
            spirit.element().name(),
            spirit.nature().name()
        );
    }
    out
}

pub fn pillar_text(p: Pillar) -> String {
    let (nayin, element) = p.nayin();
    format!(
        "{p}  #{}  {}{} / {}{}  纳音: {nayin} ({})",
        p.cycle_index(),
        p.stem().element().name(),
        p.stem().polarity().name(),
        p.branch().element().name(),
        p.branch().polarity().name(),
        element.name()
    )
}

pub fn chart_text(chart: &Chart) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "日: {}  时: {}  {}",
        chart.input.day,
        chart.input.hour,
        if chart.is_daytime { "昼" } else { "夜" }
    );
    let _ = writeln!(
        out,
        "贵人: {}  方向: {}",
        chart.placement.noble_branch().name(),
        chart.placement.direction().name()
    );

    let _ = writeln!(out, "\n四课:");
    for l in &chart.lessons {
        let _ = writeln!(
            out,
            "  {}. {}{}  {}  (临{})",
            l.ordinal,
            l.stem.name(),
            l.branch.name(),
            l.spirit.name(),
            l.ground.name()
        );
    }

    let _ = writeln!(out, "\n三传 ({}):", chart.transmissions.method.name());
    for t in chart.transmissions.iter() {
        let _ = writeln!(
            out,
            "  {}  {}  {}  {}",
            t.stage.name(),
            t.branch.name(),
            t.spirit.name(),
            t.meaning
        );
    }

    if let Some(a) = &chart.analysis {
        let _ = writeln!(out, "\n分析:");
        let _ = writeln!(
            out,
            "  课式: {}  吉{} 凶{} 中{} ({})",
            a.pattern.name(),
            a.tally.auspicious,
            a.tally.inauspicious,
            a.tally.neutral,
            a.tally.bias.name()
        );
        let _ = writeln!(
            out,
            "  三传: {} (强度 {})",
            a.flow.flow.name(),
            a.flow.strength
        );
        for r in &a.recommendations {
            let _ = writeln!(out, "  建议: {r}");
        }
        for w in a.validation.iter().chain(&a.warnings) {
            let _ = writeln!(out, "  注意: {w}");
        }
    }

    if let Some(i) = &chart.interpretation {
        let _ = writeln!(out, "\n解读:");
        let _ = writeln!(out, "  {}", i.general);
        for line in &i.detailed {
            let _ = writeln!(out, "  - {line}");
        }
        for s in &i.suggestions {
            let _ = writeln!(out, "  * {s}");
        }
        let _ = writeln!(out, "  可信度: {:.0}%", i.confidence * 100.0);
        let _ = writeln!(out, "  {}", i.summary);
    }
    out
}
