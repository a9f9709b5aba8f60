//! # 五行力量计算
//!
//! ## 算法
//!
//! 依次执行六轮累加，再取整得到总分：
//!
//! 1. 天干：按柱位权重计入天干五行
//! 2. 地支：按柱位权重计入地支本气五行
//! 3. 藏干：柱位藏干权重按本气/中气/余气比例分配
//! 4. 纳音：按柱位权重计入该柱纳音五行
//! 5. 季节：由月令定季，五行各按旺相平囚死取调整值
//! 6. 合局：天干五合、地支三合与三会（半合按比例折算）
//!
//! 无效天干地支在各轮中都不产生贡献。同一四柱与同一配置的结果完全一致。

use sp_arithmetic::PerThing;

use crate::config::WeightConfig;
use crate::constants::canggan_ratios;
use crate::heju::{detect_dizhi_heju, detect_tiangan_wuhe, HeJuKind};
use crate::types::{SiZhu, WuXing, WuXingStrengthSet};

fn to_score(value: u32) -> i32 {
	i32::try_from(value).unwrap_or(i32::MAX)
}

/// 四舍五入到 0.1 分（即 10 的倍数），0.05 向远离零的方向进位
pub fn round_to_tenth(value: i32) -> i32 {
	let remainder = value % 10;
	let base = value - remainder;
	if remainder >= 5 {
		base.saturating_add(10)
	} else if remainder <= -5 {
		base.saturating_sub(10)
	} else {
		base
	}
}

/// 计算四柱五行力量
pub fn calculate_wuxing_strength(sizhu: &SiZhu, config: &WeightConfig) -> WuXingStrengthSet {
	let mut set = WuXingStrengthSet::default();
	let pillars = sizhu.pillars();

	// 1. 天干
	for (position, ganzhi) in pillars.iter() {
		if let Some(wx) = ganzhi.gan.to_wuxing() {
			let entry = set.get_mut(wx);
			entry.tian_gan = entry.tian_gan.saturating_add(to_score(config.tiangan.get(*position)));
		}
	}

	// 2. 地支本气
	for (position, ganzhi) in pillars.iter() {
		if let Some(wx) = ganzhi.zhi.to_wuxing() {
			let entry = set.get_mut(wx);
			entry.di_zhi = entry.di_zhi.saturating_add(to_score(config.dizhi.get(*position)));
		}
	}

	// 3. 藏干
	for (position, ganzhi) in pillars.iter() {
		let base = config.canggan.get(*position);
		let stems = ganzhi.zhi.canggan();
		for (gan, ratio) in stems.iter().zip(canggan_ratios(stems.len())) {
			if let Some(wx) = gan.to_wuxing() {
				let entry = set.get_mut(wx);
				entry.cang_gan = entry.cang_gan.saturating_add(to_score(ratio.mul_floor(base)));
			}
		}
	}

	// 4. 纳音
	for (position, ganzhi) in pillars.iter() {
		if let Some(wx) = ganzhi.nayin().and_then(|n| n.to_wuxing()) {
			let entry = set.get_mut(wx);
			entry.na_yin = entry.na_yin.saturating_add(to_score(config.nayin.get(*position)));
		}
	}

	// 5. 季节
	if let Some(jijie) = sizhu.month_zhi().jijie() {
		for wx in WuXing::ALL {
			set.get_mut(wx).ji_jie = config.jijie.get(jijie.state_of(wx));
		}
	}

	// 6. 合局
	for wuhe in detect_tiangan_wuhe(&sizhu.gans()) {
		let entry = set.get_mut(wuhe.wuxing);
		entry.he_ju = entry.he_ju.saturating_add(to_score(config.heju.tiangan_wuhe));
	}
	let partial = config.heju.partial_ratio();
	for heju in detect_dizhi_heju(&sizhu.zhis()) {
		let full_bonus = match heju.kind {
			HeJuKind::SanHe => config.heju.sanhe,
			HeJuKind::SanHui => config.heju.sanhui,
		};
		let bonus = if heju.full {
			full_bonus
		} else {
			partial.mul_floor(full_bonus)
		};
		let entry = set.get_mut(heju.wuxing);
		entry.he_ju = entry.he_ju.saturating_add(to_score(bonus));
	}

	// 7. 总分
	for wx in WuXing::ALL {
		let entry = set.get_mut(wx);
		entry.total = round_to_tenth(entry.category_sum());
	}

	log::trace!(
		"🌳 五行力量 金{} 木{} 水{} 火{} 土{}",
		set.jin.total,
		set.mu.total,
		set.shui.total,
		set.huo.total,
		set.tu.total
	);

	set
}
