//! Chart orchestration: placement, lessons, transmissions, then narration.

use liuren_base::{build_lessons, place_spirits, place_spirits_from, select_transmissions};

use crate::analysis::analyze;
use crate::chart_types::{Chart, ChartInput, ChartOptions, TimeOfDay};
use crate::error::ChartError;
use crate::report::interpret;

/// Resolve the input's day/night against the configured window.
pub fn resolve_daytime(time: TimeOfDay, options: &ChartOptions) -> Result<bool, ChartError> {
    match time {
        TimeOfDay::Day => Ok(true),
        TimeOfDay::Night => Ok(false),
        TimeOfDay::Hour(h) => Ok(options.daylight.contains(h)?),
    }
}

/// Compute a full chart in one shot.
pub fn compute_chart(input: &ChartInput, options: &ChartOptions) -> Result<Chart, ChartError> {
    options.validate()?;
    let is_daytime = resolve_daytime(input.time, options)?;

    let placement = match input.month_general {
        Some(general) => place_spirits_from(general, options.direction),
        None => place_spirits(input.day.stem(), is_daytime, options.direction),
    };
    let lessons = build_lessons(input.day, input.hour, &placement);
    let transmissions = select_transmissions(&lessons, input.day, input.hour);
    tracing::debug!(
        day = %input.day,
        hour = %input.hour,
        noble = placement.noble_branch().name(),
        method = transmissions.method.name(),
        "chart computed"
    );

    let analysis = if options.include_analysis || options.include_interpretation {
        Some(analyze(&lessons, &transmissions))
    } else {
        None
    };
    let interpretation = match (&analysis, options.include_interpretation) {
        (Some(a), true) => Some(interpret(
            &lessons,
            &transmissions,
            &placement,
            a,
            input.category,
        )),
        _ => None,
    };
    let analysis = analysis.filter(|_| options.include_analysis);

    Ok(Chart {
        input: *input,
        is_daytime,
        placement,
        lessons,
        transmissions,
        analysis,
        interpretation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use liuren_base::{Branch, DaylightWindow, LiurenError, Pillar, Spirit, TransmissionMethod};

    fn input(day: &str, hour: &str) -> ChartInput {
        ChartInput::new(day.parse().unwrap(), hour.parse().unwrap())
    }

    #[test]
    fn hour_resolves_day_and_night() {
        let opts = ChartOptions::default();
        assert_eq!(resolve_daytime(TimeOfDay::Hour(9), &opts), Ok(true));
        assert_eq!(resolve_daytime(TimeOfDay::Hour(20), &opts), Ok(false));
        assert_eq!(
            resolve_daytime(TimeOfDay::Hour(24), &opts),
            Err(ChartError::Base(LiurenError::InvalidHour(24)))
        );
    }

    #[test]
    fn night_hour_changes_noble() {
        let mut inp = input("甲子", "丙寅");
        inp.time = TimeOfDay::Hour(22);
        let chart = compute_chart(&inp, &ChartOptions::default()).unwrap();
        assert!(!chart.is_daytime);
        assert_eq!(chart.placement.noble_branch(), Branch::Wei);
    }

    #[test]
    fn month_general_seeds_noble() {
        let mut inp = input("甲子", "丙寅");
        inp.month_general = Some(Branch::Hai);
        let chart = compute_chart(&inp, &ChartOptions::default()).unwrap();
        assert_eq!(chart.placement.noble_branch(), Branch::Hai);
        assert_eq!(chart.placement.spirit_at(Branch::Hai), Spirit::GuiRen);
        assert_eq!(chart.lessons.offset(), 11);
    }

    #[test]
    fn sections_follow_options() {
        let opts = ChartOptions {
            include_analysis: false,
            include_interpretation: false,
            ..ChartOptions::default()
        };
        let chart = compute_chart(&input("甲子", "丙寅"), &opts).unwrap();
        assert!(chart.analysis.is_none());
        assert!(chart.interpretation.is_none());
        assert_eq!(chart.transmissions.method, TransmissionMethod::ThiefConquest);

        let opts = ChartOptions {
            include_analysis: false,
            ..ChartOptions::default()
        };
        let chart = compute_chart(&input("甲子", "丙寅"), &opts).unwrap();
        assert!(chart.analysis.is_none());
        assert!(chart.interpretation.is_some());
    }

    #[test]
    fn bad_window_rejected_before_work() {
        let opts = ChartOptions {
            daylight: DaylightWindow {
                start_hour: 6,
                end_hour: 30,
            },
            ..ChartOptions::default()
        };
        let day: Pillar = "甲子".parse().unwrap();
        let err = compute_chart(&ChartInput::new(day, day), &opts).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDaylightWindow { .. }));
    }
}
