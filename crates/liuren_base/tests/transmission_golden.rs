//! Golden charts for the three-transmission selector.
//!
//! Each row lists day pillar, hour pillar, day/night, and the expected method,
//! branches and spirits of the initial, middle and final transmissions.

use liuren_base::{
    Branch, Pillar, Spirit, SpiritDirection, TransmissionMethod, all_pillars, build_lessons,
    classify, place_spirits, select_transmissions,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn run(day: &str, hour: &str, daytime: bool) -> (TransmissionMethod, Vec<(Branch, Spirit)>) {
    let day: Pillar = day.parse().unwrap();
    let hour: Pillar = hour.parse().unwrap();
    let placement = place_spirits(day.stem(), daytime, SpiritDirection::Clockwise);
    let lessons = build_lessons(day, hour, &placement);
    let tt = select_transmissions(&lessons, day, hour);
    let got = tt.iter().map(|t| (t.branch, t.spirit)).collect();
    (tt.method, got)
}

use Branch::*;
use Spirit::*;

#[rstest]
#[case::thief_jiazi("甲子", "丙寅", true, TransmissionMethod::ThiefConquest,
    [(Zi, TianHou), (Chou, GuiRen), (Zi, TianHou)])]
#[case::thief_bingyin("丙寅", "丙申", true, TransmissionMethod::ThiefConquest,
    [(Chen, QingLong), (Yin, LiuHe), (Chou, ZhuQue)])]
#[case::thief_positional("丁卯", "丙午", true, TransmissionMethod::ThiefConquest,
    [(Wu, BaiHu), (Si, TianKong), (Mao, GouChen)])]
#[case::echo_zero_offset("乙卯", "乙卯", true, TransmissionMethod::ConcealedEcho,
    [(Mao, LiuHe), (Chen, GuiRen), (Si, GuiRen)])]
#[case::echo_yihai("乙亥", "甲子", true, TransmissionMethod::ConcealedEcho,
    [(Mao, LiuHe), (Chen, GuiRen), (Si, GuiRen)])]
#[case::echo_repeated_hour("庚申", "庚申", true, TransmissionMethod::ConcealedEcho,
    [(Shen, BaiHu), (You, TaiChang), (Xu, GuiRen)])]
#[case::echo_repeated_hour_night("辛酉", "辛酉", false, TransmissionMethod::ConcealedEcho,
    [(You, BaiHu), (Xu, GuiRen), (Hai, XuanWu)])]
#[case::specialization_yang("庚申", "甲申", true, TransmissionMethod::DoubleSpecialization,
    [(Xu, GuiRen), (Shen, BaiHu), (Shen, BaiHu)])]
#[case::specialization_yin_night("辛酉", "甲午", false, TransmissionMethod::DoubleSpecialization,
    [(You, BaiHu), (You, BaiHu), (You, BaiHu)])]
#[case::specialization_renzi("壬子", "甲辰", true, TransmissionMethod::DoubleSpecialization,
    [(Chou, GuiRen), (Hai, TaiChang), (Hai, TaiChang)])]
#[case::specialization_jiayin_night("甲寅", "丙寅", false, TransmissionMethod::DoubleSpecialization,
    [(Chen, GuiRen), (Yin, BaiHu), (Yin, BaiHu)])]
#[case::mirror("丙子", "壬子", true, TransmissionMethod::ReflectedMirror,
    [(Si, TianKong), (Hai, GuiRen), (Hai, GuiRen)])]
#[case::distant("丙申", "壬子", true, TransmissionMethod::DistantConquest,
    [(Shen, XuanWu), (You, GuiRen), (Xu, GuiRen)])]
#[case::pleiades_wushen("戊申", "壬子", true, TransmissionMethod::Pleiades,
    [(Si, GouChen), (Wu, TengShe), (Wei, ZhuQue)])]
#[case::pleiades_guihai("癸亥", "壬子", true, TransmissionMethod::Pleiades,
    [(Zi, XuanWu), (Chou, TengShe), (Yin, ZhuQue)])]
fn golden_transmissions(
    #[case] day: &str,
    #[case] hour: &str,
    #[case] daytime: bool,
    #[case] method: TransmissionMethod,
    #[case] expected: [(Branch, Spirit); 3],
) {
    let (got_method, got) = run(day, hour, daytime);
    assert_eq!(got_method, method, "{day}/{hour}");
    assert_eq!(got, expected.to_vec(), "{day}/{hour}");
}

#[test]
fn every_chart_is_classified() {
    for day in all_pillars() {
        for hour in all_pillars() {
            for daytime in [true, false] {
                let placement = place_spirits(day.stem(), daytime, SpiritDirection::Clockwise);
                let lessons = build_lessons(day, hour, &placement);
                assert!(
                    classify(&lessons, day, hour).is_some(),
                    "{day}/{hour} daytime={daytime}"
                );
            }
        }
    }
}

#[test]
fn lessons_well_formed_for_all_days_and_hours() {
    for day in all_pillars() {
        for hour in all_pillars() {
            let placement = place_spirits(day.stem(), true, SpiritDirection::Clockwise);
            let lessons = build_lessons(day, hour, &placement);
            let ordinals: Vec<u8> = lessons.iter().map(|l| l.ordinal).collect();
            assert_eq!(ordinals, vec![1, 2, 3, 4]);
            assert!(lessons.iter().all(|l| l.stem == day.stem()));
            assert!(
                lessons
                    .iter()
                    .all(|l| placement.spirit_at(l.branch) == l.spirit)
            );
        }
    }
}

#[rstest]
#[case::jiayin("甲寅")]
#[case::gengshen("庚申")]
fn specialization_echo_needs_repeated_hour(#[case] day: &str) {
    let (method, _) = run(day, "丙寅", true);
    assert_eq!(method, TransmissionMethod::DoubleSpecialization, "{day}");
    let (method, _) = run(day, day, true);
    assert_eq!(method, TransmissionMethod::ConcealedEcho, "{day}");
}
