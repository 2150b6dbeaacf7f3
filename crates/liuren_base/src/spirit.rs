//! The twelve heavenly generals (shenjiang) and their fixed attributes.
//!
//! The spirits are laid around the branch ring starting from the Noble
//! Deity (贵人). Five are auspicious, six inauspicious and one (太阴) neutral.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Direction;
use crate::element::Element;
use crate::error::{LiurenError, SymbolKind};

/// The 12 spirits in canonical (forward) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spirit {
    GuiRen,
    TengShe,
    ZhuQue,
    LiuHe,
    GouChen,
    QingLong,
    TianKong,
    BaiHu,
    TaiChang,
    XuanWu,
    TaiYin,
    TianHou,
}

/// Forward order, laid clockwise from the Noble Deity.
pub const ALL_SPIRITS: [Spirit; 12] = [
    Spirit::GuiRen,
    Spirit::TengShe,
    Spirit::ZhuQue,
    Spirit::LiuHe,
    Spirit::GouChen,
    Spirit::QingLong,
    Spirit::TianKong,
    Spirit::BaiHu,
    Spirit::TaiChang,
    Spirit::XuanWu,
    Spirit::TaiYin,
    Spirit::TianHou,
];

/// Reverse order, laid counter-clockwise from the Noble Deity.
///
/// This is its own sequence, not `ALL_SPIRITS` read backwards: the Noble
/// Deity stays first and the remaining eleven follow from 天后.
pub const REVERSE_SPIRITS: [Spirit; 12] = [
    Spirit::GuiRen,
    Spirit::TianHou,
    Spirit::TaiYin,
    Spirit::XuanWu,
    Spirit::TaiChang,
    Spirit::BaiHu,
    Spirit::TianKong,
    Spirit::QingLong,
    Spirit::GouChen,
    Spirit::LiuHe,
    Spirit::ZhuQue,
    Spirit::TengShe,
];

/// Auspiciousness of a spirit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl Nature {
    /// Chinese name (吉 凶 中).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "吉",
            Self::Inauspicious => "凶",
            Self::Neutral => "中",
        }
    }
}

impl Spirit {
    /// Chinese name of the spirit.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GuiRen => "贵人",
            Self::TengShe => "腾蛇",
            Self::ZhuQue => "朱雀",
            Self::LiuHe => "六合",
            Self::GouChen => "勾陈",
            Self::QingLong => "青龙",
            Self::TianKong => "天空",
            Self::BaiHu => "白虎",
            Self::TaiChang => "太常",
            Self::XuanWu => "玄武",
            Self::TaiYin => "太阴",
            Self::TianHou => "天后",
        }
    }

    /// English rendering of the spirit's name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::GuiRen => "Noble Deity",
            Self::TengShe => "Soaring Serpent",
            Self::ZhuQue => "Vermilion Bird",
            Self::LiuHe => "Six Harmony",
            Self::GouChen => "Hooked Array",
            Self::QingLong => "Azure Dragon",
            Self::TianKong => "Heavenly Void",
            Self::BaiHu => "White Tiger",
            Self::TaiChang => "Great Constancy",
            Self::XuanWu => "Dark Warrior",
            Self::TaiYin => "Great Yin",
            Self::TianHou => "Heavenly Empress",
        }
    }

    /// 0-based position in the forward order (GuiRen=0 .. TianHou=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::GuiRen => 0,
            Self::TengShe => 1,
            Self::ZhuQue => 2,
            Self::LiuHe => 3,
            Self::GouChen => 4,
            Self::QingLong => 5,
            Self::TianKong => 6,
            Self::BaiHu => 7,
            Self::TaiChang => 8,
            Self::XuanWu => 9,
            Self::TaiYin => 10,
            Self::TianHou => 11,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::GuiRen | Self::GouChen | Self::TianKong | Self::TaiChang => Element::Earth,
            Self::TengShe | Self::ZhuQue => Element::Fire,
            Self::LiuHe | Self::QingLong => Element::Wood,
            Self::BaiHu | Self::TaiYin => Element::Metal,
            Self::XuanWu | Self::TianHou => Element::Water,
        }
    }

    pub const fn nature(self) -> Nature {
        match self {
            Self::GuiRen | Self::LiuHe | Self::QingLong | Self::TaiChang | Self::TianHou => {
                Nature::Auspicious
            }
            Self::TaiYin => Nature::Neutral,
            Self::TengShe
            | Self::ZhuQue
            | Self::GouChen
            | Self::TianKong
            | Self::BaiHu
            | Self::XuanWu => Nature::Inauspicious,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::GuiRen | Self::GouChen | Self::TianKong | Self::TaiChang => Direction::Center,
            Self::TengShe | Self::ZhuQue => Direction::South,
            Self::LiuHe | Self::QingLong => Direction::East,
            Self::BaiHu | Self::TaiYin => Direction::West,
            Self::XuanWu | Self::TianHou => Direction::North,
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self.nature(), Nature::Auspicious)
    }

    pub const fn is_inauspicious(self) -> bool {
        matches!(self.nature(), Nature::Inauspicious)
    }

    /// Meaning attached to a transmission carried by this spirit.
    pub const fn transmission_meaning(self) -> &'static str {
        match self {
            Self::GuiRen => "贵人相助，事业顺利",
            Self::TengShe => "变化无常，需防虚惊",
            Self::ZhuQue => "口舌是非，文书信息",
            Self::LiuHe => "和合美满，合作顺利",
            Self::GouChen => "纠纷束缚，田土之事",
            Self::QingLong => "喜庆财运，生机勃勃",
            Self::TianKong => "空虚不实，防范欺骗",
            Self::BaiHu => "疾病伤灾，需防凶险",
            Self::TaiChang => "平常稳定，衣食无忧",
            Self::XuanWu => "盗贼暗昧，阴私之事",
            Self::TaiYin => "阴柔隐秘，女性相关",
            Self::TianHou => "慈爱包容，母性滋养",
        }
    }

    /// Reading of the spirit when it sits on a lesson.
    pub const fn lesson_reading(self) -> &'static str {
        match self {
            Self::GuiRen => "主贵人扶持，地位提升",
            Self::TengShe => "主变化惊扰，需防虚惊",
            Self::ZhuQue => "主文书信息，或有口舌",
            Self::LiuHe => "主和合协调，利于合作",
            Self::GouChen => "主纠纷束缚，田土之事",
            Self::QingLong => "主喜庆财运，生机勃发",
            Self::TianKong => "主空虚不实，防范欺骗",
            Self::BaiHu => "主疾病伤灾，需防凶险",
            Self::TaiChang => "主平常稳定，衣食充足",
            Self::XuanWu => "主盗贼暗昧，阴私之事",
            Self::TaiYin => "主阴柔隐秘，女性之事",
            Self::TianHou => "主慈爱滋养，母性关怀",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::GuiRen => "天乙贵人，最为尊贵，主贵人相助、地位提升",
            Self::TengShe => "主虚惊、怪异、变化无常",
            Self::ZhuQue => "主口舌是非、文书、信息",
            Self::LiuHe => "主和合、婚姻、合作",
            Self::GouChen => "主田土、牢狱、纠纷",
            Self::QingLong => "主喜庆、财运、生机",
            Self::TianKong => "主空虚、失落、不实",
            Self::BaiHu => "主疾病、伤灾、孝服",
            Self::TaiChang => "主衣食、平常、稳定",
            Self::XuanWu => "主盗贼、暗昧、阴私",
            Self::TaiYin => "主阴私、女人、暗中",
            Self::TianHou => "主后土、母亲、滋养",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::GuiRen => &["贵人相助", "地位提升", "权威", "尊贵", "官运"],
            Self::TengShe => &["虚惊", "怪异", "变化", "不安", "惊恐"],
            Self::ZhuQue => &["口舌", "是非", "文书", "信息", "争执"],
            Self::LiuHe => &["和合", "婚姻", "合作", "团结", "协调"],
            Self::GouChen => &["田土", "牢狱", "纠纷", "束缚", "困扰"],
            Self::QingLong => &["喜庆", "财运", "生机", "活力", "成长"],
            Self::TianKong => &["空虚", "失落", "不实", "虚无", "欺骗"],
            Self::BaiHu => &["疾病", "伤灾", "孝服", "死亡", "凶险"],
            Self::TaiChang => &["衣食", "平常", "稳定", "日常", "生活"],
            Self::XuanWu => &["盗贼", "暗昧", "阴私", "隐秘", "欺诈"],
            Self::TaiYin => &["阴私", "女人", "暗中", "隐藏", "柔和"],
            Self::TianHou => &["后土", "母亲", "滋养", "包容", "慈爱"],
        }
    }

    /// Spirits this one restrains (e.g. 青龙 restrains 白虎).
    pub fn restrains(self) -> &'static [Spirit] {
        match self {
            Self::GuiRen => &[Spirit::TengShe, Spirit::ZhuQue],
            Self::QingLong => &[Spirit::BaiHu],
            Self::LiuHe => &[Spirit::GouChen],
            Self::TianHou => &[Spirit::XuanWu],
            Self::TaiChang => &[Spirit::TianKong],
            _ => &[],
        }
    }

    /// Spirits this one supports through a shared or generating element.
    pub fn supports(self) -> &'static [Spirit] {
        match self {
            Self::GuiRen => &[Spirit::TaiChang, Spirit::GouChen],
            Self::QingLong => &[Spirit::LiuHe],
            Self::ZhuQue => &[Spirit::TengShe],
            Self::BaiHu => &[Spirit::TaiYin],
            Self::XuanWu => &[Spirit::TianHou],
            _ => &[],
        }
    }

    /// All 12 spirits in forward order.
    pub const fn all() -> &'static [Spirit; 12] {
        &ALL_SPIRITS
    }
}

impl Display for Spirit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spirit {
    type Err = LiurenError;

    /// Accepts the Chinese name or the enum name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_SPIRITS
            .iter()
            .copied()
            .find(|sp| sp.name() == t || format!("{sp:?}").eq_ignore_ascii_case(t))
            .ok_or_else(|| LiurenError::malformed(SymbolKind::Spirit, s))
    }
}
