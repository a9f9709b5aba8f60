//! # 格局选择
//!
//! ## 概述
//!
//! 1. 按优先级表为每个候选计算优先级（基础值 + 旺衰加成 + 月令加成），
//!    表中没有的格局取最低优先级
//! 2. 先按优先级、再按强度降序排序（稳定排序）
//! 3. 首位为主格局，其余依次为辅助格局
//! 4. 由主格局确定用神；不在对照中的格局按日主旺衰取用
//! 5. 汇总判定依据，仅作解释输出

use alloc::{format, string::String, vec};
use sp_std::prelude::*;

use crate::geju::zaqi_candidate;
use crate::heju::{detect_dizhi_heju, HeJuKind};
use crate::shishen::{SiZhuShiShen, BI_JIE, CAI_XING, GUAN_SHA, YIN_XING};
use crate::types::{
	DiZhi, GeJuCandidate, GeJuFactor, GeJuResult, GeJuType, RiZhuWangShuai, ShiShen, SiZhu,
	YongShen, ZhuPosition,
};

/// 表中找不到时使用的最低优先级
pub const LOWEST_PRIORITY: u8 = 1;

/// 优先级表条目
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GeJuPriority {
	pub ge_ju: GeJuType,
	pub base: u8,
	/// 日主旺衰属于此集合时加成
	pub wang_shuai_bonus: Option<(&'static [RiZhuWangShuai], u8)>,
	/// 月令属于此集合时加成（地支索引）
	pub month_bonus: Option<(&'static [u8], u8)>,
}

const STRONG: &[RiZhuWangShuai] =
	&[RiZhuWangShuai::PianWang, RiZhuWangShuai::Wang, RiZhuWangShuai::JiWang];
const WEAK: &[RiZhuWangShuai] =
	&[RiZhuWangShuai::PianRuo, RiZhuWangShuai::Ruo, RiZhuWangShuai::JiRuo];
const PING_HENG: &[RiZhuWangShuai] = &[RiZhuWangShuai::PingHeng];
const PING_HENG_PIAN_WANG: &[RiZhuWangShuai] =
	&[RiZhuWangShuai::PingHeng, RiZhuWangShuai::PianWang];
const WANG: &[RiZhuWangShuai] = &[RiZhuWangShuai::JiWang, RiZhuWangShuai::Wang];
const RUO: &[RiZhuWangShuai] = &[RiZhuWangShuai::JiRuo, RiZhuWangShuai::Ruo];
const JI_WANG: &[RiZhuWangShuai] = &[RiZhuWangShuai::JiWang];

/// 寅巳申亥
const LU_MONTHS: &[u8] = &[2, 5, 8, 11];
/// 子卯午酉
const YUAN_MONTHS: &[u8] = &[0, 3, 6, 9];

const fn entry(
	ge_ju: GeJuType,
	base: u8,
	wang_shuai_bonus: Option<(&'static [RiZhuWangShuai], u8)>,
) -> GeJuPriority {
	GeJuPriority { ge_ju, base, wang_shuai_bonus, month_bonus: None }
}

/// 默认优先级表
pub const DEFAULT_GEJU_PRIORITIES: &[GeJuPriority] = &[
	entry(GeJuType::CaiGuanShuangMei, 10, Some((PING_HENG_PIAN_WANG, 2))),
	entry(GeJuType::ShangGuanPeiYin, 9, Some((PING_HENG, 2))),
	GeJuPriority {
		ge_ju: GeJuType::RiYuanJianLu,
		base: 8,
		wang_shuai_bonus: None,
		month_bonus: Some((LU_MONTHS, 2)),
	},
	GeJuPriority {
		ge_ju: GeJuType::RiYuanJianYuan,
		base: 8,
		wang_shuai_bonus: None,
		month_bonus: Some((YUAN_MONTHS, 2)),
	},
	entry(GeJuType::CongWang, 7, Some((WANG, 3))),
	entry(GeJuType::CongRuo, 7, Some((RUO, 3))),
	entry(GeJuType::ZhengGuan, 6, Some((STRONG, 2))),
	entry(GeJuType::QiSha, 6, Some((STRONG, 2))),
	entry(GeJuType::ZhengCai, 5, Some((STRONG, 2))),
	entry(GeJuType::PianCai, 5, Some((STRONG, 2))),
	entry(GeJuType::ShiShen, 5, Some((STRONG, 2))),
	entry(GeJuType::ShangGuan, 5, Some((STRONG, 2))),
	entry(GeJuType::ZhengYin, 4, Some((WEAK, 2))),
	entry(GeJuType::PianYin, 4, Some((WEAK, 2))),
	entry(GeJuType::BiJian, 3, Some((WEAK, 2))),
	entry(GeJuType::JieCai, 3, Some((WEAK, 2))),
	entry(GeJuType::ZhuanWang, 3, Some((JI_WANG, 3))),
	entry(GeJuType::ZaQi, 1, None),
];

/// 计算候选格局的优先级
pub fn priority_of(
	table: &[GeJuPriority],
	ge_ju: GeJuType,
	wang_shuai: RiZhuWangShuai,
	month_zhi: DiZhi,
) -> u8 {
	let Some(item) = table.iter().find(|p| p.ge_ju == ge_ju) else {
		return LOWEST_PRIORITY;
	};

	let mut priority = item.base;
	if let Some((levels, bonus)) = item.wang_shuai_bonus {
		if levels.contains(&wang_shuai) {
			priority = priority.saturating_add(bonus);
		}
	}
	if let Some((zhis, bonus)) = item.month_bonus {
		if zhis.contains(&month_zhi.0) {
			priority = priority.saturating_add(bonus);
		}
	}
	priority
}

/// 排序候选格局，返回（主格局，辅助格局）
///
/// 候选为空时以杂气格为主格局。
pub fn rank_candidates(
	mut candidates: Vec<GeJuCandidate>,
	table: &[GeJuPriority],
	wang_shuai: RiZhuWangShuai,
	month_zhi: DiZhi,
) -> (GeJuCandidate, Vec<GeJuCandidate>) {
	if candidates.is_empty() {
		candidates.push(zaqi_candidate());
	}
	for c in candidates.iter_mut() {
		c.priority = priority_of(table, c.ge_ju, wang_shuai, month_zhi);
	}
	candidates.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.strength.cmp(&a.strength)));

	let mut iter = candidates.into_iter();
	let main = iter.next().unwrap_or_else(zaqi_candidate);
	(main, iter.collect())
}

/// 由主格局确定用神及说明
pub fn determine_yongshen(
	main: GeJuType,
	wang_shuai: RiZhuWangShuai,
	month_zhi: DiZhi,
) -> (YongShen, String) {
	let (yong_shen, detail) = match main {
		GeJuType::ZhengYin | GeJuType::PianYin => (YongShen::YinXing, "印格以印星为用，生身护主"),
		GeJuType::ZhengGuan | GeJuType::QiSha => (YongShen::GuanSha, "官杀格以官杀为用，约束成器"),
		GeJuType::ZhengCai | GeJuType::PianCai => (YongShen::CaiXing, "财格以财星为用，身强任财"),
		GeJuType::ShiShen | GeJuType::ShangGuan => (YongShen::ShiShang, "食伤格以食伤泄秀为用"),
		GeJuType::BiJian | GeJuType::JieCai => (YongShen::BiJie, "比劫格以比劫为用，同气相扶"),
		GeJuType::CaiGuanShuangMei => (YongShen::CaiGuan, "财官双美，以财官为用"),
		GeJuType::ShangGuanPeiYin => (YongShen::ShangGuanYin, "伤官佩印，伤官与印星并用"),
		GeJuType::CongWang => (YongShen::BiJie, "从旺格顺其旺势，以比劫为用"),
		GeJuType::CongRuo => (YongShen::GuanSha, "从弱格从其克势，以官杀为用"),
		GeJuType::RiYuanJianLu | GeJuType::RiYuanJianYuan => {
			(YongShen::RiYuan, "日元得月令之气，以日元本气为用")
		}
		GeJuType::ZhuanWang | GeJuType::ZaQi => {
			return yongshen_by_wang_shuai(wang_shuai, month_zhi);
		}
	};
	(yong_shen, String::from(detail))
}

/// 按日主旺衰取用神：身强取财官食伤，身弱取印比劫，中和取月令当令之五行
pub fn yongshen_by_wang_shuai(wang_shuai: RiZhuWangShuai, month_zhi: DiZhi) -> (YongShen, String) {
	if wang_shuai.is_strong() {
		(YongShen::CaiGuanShiShang, String::from("日主偏旺，宜以财官食伤泄耗克制"))
	} else if wang_shuai.is_weak() {
		(YongShen::YinBiJie, String::from("日主偏弱，宜以印星比劫生扶"))
	} else {
		let dang_ling = month_zhi.jijie().map(|j| j.dang_ling());
		let detail = match dang_ling {
			Some(wx) => format!("日主中和，取月令当令之{}为用", wx.name()),
			None => String::from("日主中和，月令不明，用神待定"),
		};
		(YongShen::YueLingDangLing(dang_ling), detail)
	}
}

/// 主格局的核心十神
fn defining_shishen(ge_ju: GeJuType) -> Vec<ShiShen> {
	match ge_ju {
		GeJuType::CaiGuanShuangMei => CAI_XING.iter().chain(GUAN_SHA.iter()).copied().collect(),
		GeJuType::ShangGuanPeiYin => {
			core::iter::once(ShiShen::ShangGuan).chain(YIN_XING.iter().copied()).collect()
		}
		GeJuType::CongWang | GeJuType::ZhuanWang => BI_JIE.to_vec(),
		GeJuType::CongRuo => GUAN_SHA.to_vec(),
		GeJuType::ZhengGuan => vec![ShiShen::ZhengGuan],
		GeJuType::QiSha => vec![ShiShen::QiSha],
		GeJuType::ZhengCai => vec![ShiShen::ZhengCai],
		GeJuType::PianCai => vec![ShiShen::PianCai],
		GeJuType::ShiShen => vec![ShiShen::ShiShen],
		GeJuType::ShangGuan => vec![ShiShen::ShangGuan],
		GeJuType::ZhengYin => vec![ShiShen::ZhengYin],
		GeJuType::PianYin => vec![ShiShen::PianYin],
		GeJuType::BiJian => vec![ShiShen::BiJian],
		GeJuType::JieCai => vec![ShiShen::JieCai],
		GeJuType::RiYuanJianLu | GeJuType::RiYuanJianYuan | GeJuType::ZaQi => Vec::new(),
	}
}

fn factor(name: String, description: String, contribution: u8) -> GeJuFactor {
	GeJuFactor { factor: name, description, contribution }
}

fn wang_shuai_description(wang_shuai: RiZhuWangShuai) -> &'static str {
	match wang_shuai {
		RiZhuWangShuai::JiWang => "日主之气极盛，宜泄宜克",
		RiZhuWangShuai::Wang => "日主强旺，可任财官",
		RiZhuWangShuai::PianWang => "日主略旺，稍喜克泄",
		RiZhuWangShuai::PingHeng => "日主中和，格局易成",
		RiZhuWangShuai::PianRuo => "日主略弱，稍喜生扶",
		RiZhuWangShuai::Ruo => "日主衰弱，需印比生扶",
		RiZhuWangShuai::JiRuo => "日主极弱，或可从势",
	}
}

/// 汇总格局判定依据
pub fn collect_factors(
	sizhu: &SiZhu,
	shishen: &SiZhuShiShen,
	main: GeJuType,
	wang_shuai: RiZhuWangShuai,
) -> Vec<GeJuFactor> {
	let mut factors = Vec::new();
	let rizhu = sizhu.rizhu();
	let month_zhi = sizhu.month_zhi();

	factors.push(factor(
		String::from("日主旺衰"),
		format!(
			"日主{}{}，{}",
			rizhu.name(),
			wang_shuai.name(),
			wang_shuai_description(wang_shuai)
		),
		25,
	));

	let season = month_zhi.jijie().map(|j| j.name()).unwrap_or("季节不明");
	let month_description = match (month_zhi.to_wuxing(), rizhu.to_wuxing()) {
		(Some(month_wx), Some(rizhu_wx)) => format!(
			"月支{}，时值{}，五行属{}，{}",
			month_zhi.name(),
			season,
			month_wx.name(),
			month_wx.guanxi(rizhu_wx).name()
		),
		(Some(month_wx), None) => {
			format!("月支{}，时值{}，五行属{}", month_zhi.name(), season, month_wx.name())
		}
		_ => String::from("月令无效，无法判断季节"),
	};
	factors.push(factor(String::from("月令"), month_description, 20));

	let tags = defining_shishen(main);
	if !tags.is_empty() {
		for position in ZhuPosition::ALL {
			if position != ZhuPosition::Day {
				let gan_tag = shishen.gan(position);
				if tags.contains(&gan_tag) {
					let gan = sizhu.zhu(position).gan;
					factors.push(factor(
						format!("{}干{}", position.name(), gan.name()),
						format!(
							"{}干透出{}，为{}之源",
							position.name(),
							gan_tag.name(),
							main.name()
						),
						if position == ZhuPosition::Month { 20 } else { 10 },
					));
				}
			}

			let zhi = sizhu.zhu(position).zhi;
			let matched: Vec<String> = zhi
				.canggan()
				.iter()
				.zip(shishen.canggan(position))
				.filter(|(_, tag)| tags.contains(*tag))
				.map(|(gan, tag)| format!("{}({})", gan.name(), tag.name()))
				.collect();
			if !matched.is_empty() {
				factors.push(factor(
					format!("{}支{}藏干", position.name(), zhi.name()),
					format!("{}中藏{}，暗助格局", zhi.name(), matched.join("、")),
					if position == ZhuPosition::Month { 15 } else { 8 },
				));
			}
		}
	}

	match main {
		GeJuType::RiYuanJianLu => factors.push(factor(
			String::from("建禄"),
			format!("日干{}以月支{}为禄", rizhu.name(), month_zhi.name()),
			30,
		)),
		GeJuType::RiYuanJianYuan => factors.push(factor(
			String::from("建元"),
			format!("日干{}以月支{}为元", rizhu.name(), month_zhi.name()),
			30,
		)),
		_ => {}
	}

	if let Some(nayin) = sizhu.day.nayin() {
		if let Some(wx) = nayin.to_wuxing() {
			factors.push(factor(
				String::from("纳音五行"),
				format!("日柱纳音{}，属{}", nayin.name(), wx.name()),
				10,
			));
		}
	}

	let heju = detect_dizhi_heju(&sizhu.zhis());
	for kind in [HeJuKind::SanHe, HeJuKind::SanHui] {
		if let Some(found) = heju.iter().find(|h| h.kind == kind) {
			let completeness = if found.full { "三支齐全" } else { "仅见两支" };
			factors.push(factor(
				String::from(kind.name()),
				format!(
					"地支{}{}，成{}局",
					found.members_name(),
					completeness,
					found.wuxing.name()
				),
				15,
			));
		}
	}

	factors
}

/// 排序候选并生成完整的格局结果
pub fn select_geju(
	candidates: Vec<GeJuCandidate>,
	table: &[GeJuPriority],
	wang_shuai: RiZhuWangShuai,
	sizhu: &SiZhu,
	shishen: &SiZhuShiShen,
) -> GeJuResult {
	let month_zhi = sizhu.month_zhi();
	let (main, auxiliary) = rank_candidates(candidates, table, wang_shuai, month_zhi);
	let (yong_shen, yong_shen_detail) = determine_yongshen(main.ge_ju, wang_shuai, month_zhi);
	let factors = collect_factors(sizhu, shishen, main.ge_ju, wang_shuai);

	GeJuResult { main, auxiliary, wang_shuai, yong_shen, yong_shen_detail, factors }
}
