//! # 日主旺衰
//!
//! 两种算法，由 `WeightConfig::mode` 选择：
//!
//! - **比值法**（默认）：日主五行总分 ÷ 其余四行总分，按阈值分七级。
//!   其余四行总分不大于零时直接判为极旺。
//! - **增减分法**（旧版）：以日主五行占比为底分（千分制），再按季节状态、
//!   月令生克、地支三合、天干五合、日柱纳音逐项加减，最后分五档映射到七级中的
//!   旺、偏旺、平衡、偏弱、弱。

use crate::config::{StrengthMode, WangShuaiThresholds, WeightConfig};
use crate::heju::{detect_dizhi_heju, detect_tiangan_wuhe, HeJuKind};
use crate::types::{RiZhuWangShuai, SiZhu, WangXiang, WuXing, WuXingGuanXi, WuXingStrengthSet};

/// 比值法
pub fn classify_by_ratio(
	rizhu: WuXing,
	strength: &WuXingStrengthSet,
	thresholds: &WangShuaiThresholds,
) -> RiZhuWangShuai {
	let day = strength.total(rizhu) as i64;
	let other = strength.sum_total() - day;
	if other <= 0 {
		return RiZhuWangShuai::JiWang;
	}
	let ratio = (day.max(0) * 100 / other).min(u32::MAX as i64) as u32;
	thresholds.classify(ratio)
}

/// 增减分法得分（千分制）；日干无效时返回 `None`
pub fn additive_delta_score(sizhu: &SiZhu, strength: &WuXingStrengthSet) -> Option<i32> {
	let rizhu = sizhu.rizhu().to_wuxing()?;

	let all = strength.sum_total();
	let mut score: i64 = if all > 0 { strength.total(rizhu) as i64 * 1000 / all } else { 0 };

	// 季节
	let month_zhi = sizhu.month_zhi();
	if let Some(jijie) = month_zhi.jijie() {
		score += match jijie.state_of(rizhu) {
			WangXiang::Wang => 300,
			WangXiang::Xiang => 150,
			WangXiang::Ping => 0,
			WangXiang::Qiu => -150,
			WangXiang::Si => -300,
		};
	}

	// 月令生克
	if let Some(month_wx) = month_zhi.to_wuxing() {
		score += match month_wx.guanxi(rizhu) {
			WuXingGuanXi::TongLei | WuXingGuanXi::ShengWo => 200,
			WuXingGuanXi::KeWo => -200,
			WuXingGuanXi::WoKe => 100,
			WuXingGuanXi::WoSheng => -100,
		};
	}

	// 地支三合
	for heju in detect_dizhi_heju(&sizhu.zhis()).iter().filter(|h| h.kind == HeJuKind::SanHe) {
		score += match heju.wuxing.guanxi(rizhu) {
			WuXingGuanXi::TongLei | WuXingGuanXi::ShengWo => 150,
			WuXingGuanXi::KeWo => -150,
			WuXingGuanXi::WoKe => 100,
			WuXingGuanXi::WoSheng => -100,
		};
	}

	// 天干五合，日干参与合化则减力
	for wuhe in detect_tiangan_wuhe(&sizhu.gans()) {
		score += match wuhe.wuxing.guanxi(rizhu) {
			WuXingGuanXi::TongLei | WuXingGuanXi::ShengWo => 100,
			WuXingGuanXi::KeWo => -100,
			_ => 0,
		};
		if wuhe.positions.0 == 2 || wuhe.positions.1 == 2 {
			score -= 50;
		}
	}

	// 日柱纳音
	if let Some(nayin_wx) = sizhu.day.nayin().and_then(|n| n.to_wuxing()) {
		score += match nayin_wx.guanxi(rizhu) {
			WuXingGuanXi::TongLei => 100,
			WuXingGuanXi::ShengWo => 50,
			WuXingGuanXi::KeWo => -50,
			_ => 0,
		};
	}

	Some(score.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// 增减分法得分分档
pub fn classify_by_additive_delta(score: i32) -> RiZhuWangShuai {
	if score > 600 {
		RiZhuWangShuai::Wang
	} else if score > 300 {
		RiZhuWangShuai::PianWang
	} else if score >= -300 {
		RiZhuWangShuai::PingHeng
	} else if score >= -600 {
		RiZhuWangShuai::PianRuo
	} else {
		RiZhuWangShuai::Ruo
	}
}

/// 按配置的模式计算日主旺衰；日干无效时为平衡
pub fn calculate_wangshuai(
	sizhu: &SiZhu,
	strength: &WuXingStrengthSet,
	config: &WeightConfig,
) -> RiZhuWangShuai {
	let Some(rizhu) = sizhu.rizhu().to_wuxing() else {
		log::warn!("⚠️ 日干无效 ({}), 旺衰按平衡处理", sizhu.rizhu().0);
		return RiZhuWangShuai::PingHeng;
	};

	match config.mode {
		StrengthMode::Ratio => classify_by_ratio(rizhu, strength, &config.thresholds),
		StrengthMode::AdditiveDelta => additive_delta_score(sizhu, strength)
			.map(classify_by_additive_delta)
			.unwrap_or_default(),
	}
}
