//! # 格局候选生成
//!
//! ## 概述
//!
//! 依次检查一组彼此独立的成格规则，每条成立的规则产生一个候选格局，
//! 强度按 `min(上限, 基准 + 十神力量 × 每分加成)` 计算。
//! 没有任何规则成立时给出唯一的兜底候选"杂气格"。
//!
//! 本模块只负责生成，不做排序；排序与用神见 `selector`。
//!
//! ## 规则顺序
//!
//! 1. 财官双美、伤官佩印
//! 2. 日元建禄、日元建元
//! 3. 从旺、从弱、专旺
//! 4. 正官、七杀、正财、偏财、食神、伤官（身强方能担当）
//! 5. 正印、偏印、比肩、劫财（身弱方为所喜）

use alloc::{format, string::String};
use sp_std::prelude::*;

use crate::constants::{JIANLU_ZHI, JIANYUAN_ZHI};
use crate::shishen::{SiZhuShiShen, BI_JIE, CAI_XING, GUAN_SHA, YIN_XING};
use crate::types::{GeJuCandidate, GeJuType, RiZhuWangShuai, ShiShen, SiZhu};

/// 十神力量达到 2 分方可成格
const MIN_SHISHEN_STRENGTH: u32 = 200;

/// 从格所需的同类十神个数
const MIN_CONG_COUNT: u32 = 3;

/// 兜底格局强度
pub const ZAQI_STRENGTH: u8 = 60;

/// 建禄格强度
const JIANLU_STRENGTH: u8 = 80;

/// 建元格强度
const JIANYUAN_STRENGTH: u8 = 75;

/// 单一十神成格规则
struct ShiShenRule {
	ge_ju: GeJuType,
	shishen: ShiShen,
	/// 身强时成格更有力（官杀财食伤），否则身弱时更有力（印比劫）
	favours_strong: bool,
}

const SINGLE_RULES: [ShiShenRule; 10] = [
	ShiShenRule { ge_ju: GeJuType::ZhengGuan, shishen: ShiShen::ZhengGuan, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::QiSha, shishen: ShiShen::QiSha, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::ZhengCai, shishen: ShiShen::ZhengCai, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::PianCai, shishen: ShiShen::PianCai, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::ShiShen, shishen: ShiShen::ShiShen, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::ShangGuan, shishen: ShiShen::ShangGuan, favours_strong: true },
	ShiShenRule { ge_ju: GeJuType::ZhengYin, shishen: ShiShen::ZhengYin, favours_strong: false },
	ShiShenRule { ge_ju: GeJuType::PianYin, shishen: ShiShen::PianYin, favours_strong: false },
	ShiShenRule { ge_ju: GeJuType::BiJian, shishen: ShiShen::BiJian, favours_strong: false },
	ShiShenRule { ge_ju: GeJuType::JieCai, shishen: ShiShen::JieCai, favours_strong: false },
];

/// `min(upper, baseline + points × per_point)`，`points` 以 0.01 分计，小数部分舍去
fn capped_strength(upper: u8, baseline: u8, points: u32, per_point: u32) -> u8 {
	let bonus = points.saturating_mul(per_point) / 100;
	(baseline as u32).saturating_add(bonus).min(upper as u32) as u8
}

/// 0.01 分转为 "2.5" 形式
fn format_points(points: u32) -> String {
	if points % 100 == 0 {
		format!("{}", points / 100)
	} else {
		format!("{}.{}", points / 100, (points % 100) / 10)
	}
}

fn candidate(ge_ju: GeJuType, detail: String, strength: u8) -> GeJuCandidate {
	GeJuCandidate { ge_ju, detail, strength, priority: 0 }
}

/// 兜底候选
pub fn zaqi_candidate() -> GeJuCandidate {
	candidate(
		GeJuType::ZaQi,
		String::from("未成特殊格局，五行之气驳杂，以日主旺衰论用神"),
		ZAQI_STRENGTH,
	)
}

/// 生成全部候选格局（至少一个）
pub fn generate_geju_candidates(
	sizhu: &SiZhu,
	shishen: &SiZhuShiShen,
	wang_shuai: RiZhuWangShuai,
) -> Vec<GeJuCandidate> {
	let mut candidates = Vec::new();

	check_double_patterns(shishen, &mut candidates);
	check_jianlu_jianyuan(sizhu, &mut candidates);
	check_cong_patterns(shishen, wang_shuai, &mut candidates);
	check_single_patterns(shishen, wang_shuai, &mut candidates);

	if candidates.is_empty() {
		candidates.push(zaqi_candidate());
	}

	log::debug!("🔮 格局候选 {} 个, 日主{}", candidates.len(), wang_shuai.name());
	candidates
}

/// 两组十神同时有力
fn check_pair(
	shishen: &SiZhuShiShen,
	first: &[ShiShen],
	second: &[ShiShen],
) -> Option<(u32, u32)> {
	if !shishen.is_present(first) || !shishen.is_present(second) {
		return None;
	}
	let a = shishen.strength(first);
	let b = shishen.strength(second);
	(a >= MIN_SHISHEN_STRENGTH && b >= MIN_SHISHEN_STRENGTH).then_some((a, b))
}

/// 财官双美、伤官佩印
fn check_double_patterns(shishen: &SiZhuShiShen, out: &mut Vec<GeJuCandidate>) {
	if let Some((cai, guan)) = check_pair(shishen, &CAI_XING, &GUAN_SHA) {
		out.push(candidate(
			GeJuType::CaiGuanShuangMei,
			format!(
				"财星({}分)与官星({}分)俱旺，财生官、官护财",
				format_points(cai),
				format_points(guan)
			),
			capped_strength(85, 60, cai.saturating_add(guan), 5),
		));
	}

	if let Some((shang, yin)) = check_pair(shishen, &[ShiShen::ShangGuan], &YIN_XING) {
		out.push(candidate(
			GeJuType::ShangGuanPeiYin,
			format!(
				"伤官({}分)得印星({}分)制约，才华得以收敛",
				format_points(shang),
				format_points(yin)
			),
			capped_strength(85, 60, shang.saturating_add(yin), 5),
		));
	}
}

/// 日元建禄、日元建元
fn check_jianlu_jianyuan(sizhu: &SiZhu, out: &mut Vec<GeJuCandidate>) {
	let rizhu = sizhu.rizhu();
	let month_zhi = sizhu.month_zhi();
	if !month_zhi.is_valid() {
		return;
	}

	if JIANLU_ZHI.get(rizhu.0 as usize) == Some(&month_zhi.0) {
		out.push(candidate(
			GeJuType::RiYuanJianLu,
			format!("日干{}临月令{}为禄，根基深厚", rizhu.name(), month_zhi.name()),
			JIANLU_STRENGTH,
		));
	}

	if JIANYUAN_ZHI.get(rizhu.0 as usize) == Some(&month_zhi.0) {
		out.push(candidate(
			GeJuType::RiYuanJianYuan,
			format!("日干{}坐月令{}为元，本元得地", rizhu.name(), month_zhi.name()),
			JIANYUAN_STRENGTH,
		));
	}
}

/// 从旺、从弱、专旺
fn check_cong_patterns(
	shishen: &SiZhuShiShen,
	wang_shuai: RiZhuWangShuai,
	out: &mut Vec<GeJuCandidate>,
) {
	let strong = matches!(wang_shuai, RiZhuWangShuai::JiWang | RiZhuWangShuai::Wang);
	let weak = matches!(wang_shuai, RiZhuWangShuai::JiRuo | RiZhuWangShuai::Ruo);

	let bijie_count = shishen.count(&BI_JIE);
	if strong && bijie_count >= MIN_CONG_COUNT {
		out.push(candidate(
			GeJuType::CongWang,
			format!("日主{}，比劫{}见，顺其旺势", wang_shuai.name(), bijie_count),
			capped_strength(90, 70, bijie_count * 100, 5),
		));
	}

	let guansha_count = shishen.count(&GUAN_SHA);
	if weak && guansha_count >= MIN_CONG_COUNT {
		out.push(candidate(
			GeJuType::CongRuo,
			format!("日主{}，官杀{}见，弃命从势", wang_shuai.name(), guansha_count),
			capped_strength(90, 70, guansha_count * 100, 5),
		));
	}

	if wang_shuai == RiZhuWangShuai::JiWang && !shishen.is_present(&GUAN_SHA) {
		let bijie = shishen.strength(&BI_JIE);
		if bijie >= MIN_SHISHEN_STRENGTH {
			out.push(candidate(
				GeJuType::ZhuanWang,
				format!("日主极旺，比劫{}分，局中无官杀制约，一气专旺", format_points(bijie)),
				capped_strength(95, 75, bijie, 5),
			));
		}
	}
}

/// 单一十神格局
fn check_single_patterns(
	shishen: &SiZhuShiShen,
	wang_shuai: RiZhuWangShuai,
	out: &mut Vec<GeJuCandidate>,
) {
	for rule in SINGLE_RULES.iter() {
		let tags = [rule.shishen];
		if !shishen.is_present(&tags) {
			continue;
		}
		let points = shishen.strength(&tags);
		if points < MIN_SHISHEN_STRENGTH {
			continue;
		}

		let favoured =
			if rule.favours_strong { wang_shuai.is_strong() } else { wang_shuai.is_weak() };
		let (strength, note) = match (favoured, rule.favours_strong) {
			(true, true) => (capped_strength(80, 60, points, 5), "身强能任"),
			(true, false) => (capped_strength(80, 60, points, 5), "身弱得扶"),
			(false, _) => (capped_strength(60, 40, points, 5), "日主旺衰不相宜，格局力弱"),
		};

		out.push(candidate(
			rule.ge_ju,
			format!(
				"{}有力({}分)，日主{}，{}",
				rule.shishen.name(),
				format_points(points),
				wang_shuai.name(),
				note
			),
			strength,
		));
	}
}
