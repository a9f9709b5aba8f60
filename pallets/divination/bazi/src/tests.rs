//! 端到端测试：五行力量、日主旺衰、格局判定整条链路

use crate::config::{HeJuBonus, ZhuWeights};
use crate::selector::LOWEST_PRIORITY;
use crate::strength::round_to_tenth;
use crate::wangshuai::additive_delta_score;
use crate::*;

// TianGan
const JIA: TianGan = TianGan(0);
const BING: TianGan = TianGan(2);
const DING: TianGan = TianGan(3);
const WU: TianGan = TianGan(4);
const JI: TianGan = TianGan(5);
const GENG: TianGan = TianGan(6);

// DiZhi
const ZI: DiZhi = DiZhi(0);
const CHOU: DiZhi = DiZhi(1);
const YIN: DiZhi = DiZhi(2);
const SI: DiZhi = DiZhi(5);
const WU_ZHI: DiZhi = DiZhi(6);
const SHEN: DiZhi = DiZhi(8);
const XU: DiZhi = DiZhi(10);
const HAI: DiZhi = DiZhi(11);

const BAD_GAN: TianGan = TianGan(10);
const BAD_ZHI: DiZhi = DiZhi(12);

fn gz(gan: TianGan, zhi: DiZhi) -> GanZhi {
	GanZhi::new(gan, zhi)
}

/// 六十甲子第 i 组
fn jiazi(i: u8) -> GanZhi {
	gz(TianGan(i % 10), DiZhi(i % 12))
}

fn all_jia_zi() -> SiZhu {
	let jia_zi = gz(JIA, ZI);
	SiZhu::new(jia_zi, jia_zi, jia_zi, jia_zi)
}

/// 年 甲子、月 己巳、日 庚申、时 丙子：含甲己合与申子半合
fn mixed_chart() -> SiZhu {
	SiZhu::new(gz(JIA, ZI), gz(JI, SI), gz(GENG, SHEN), gz(BING, ZI))
}

/// 遍历 日柱 × 月支 的一组四柱
fn sample_charts() -> Vec<SiZhu> {
	let mut charts = Vec::new();
	for day in 0..60u8 {
		for month in 0..12u8 {
			let month_pillar = gz(TianGan(month % 10), DiZhi(month));
			charts.push(SiZhu::new(gz(GENG, WU_ZHI), month_pillar, jiazi(day), gz(BING, ZI)));
		}
	}
	charts
}

fn with_gan(mut sizhu: SiZhu, position: ZhuPosition, gan: TianGan) -> SiZhu {
	match position {
		ZhuPosition::Year => sizhu.year.gan = gan,
		ZhuPosition::Month => sizhu.month.gan = gan,
		ZhuPosition::Day => sizhu.day.gan = gan,
		ZhuPosition::Hour => sizhu.hour.gan = gan,
	}
	sizhu
}

fn with_zhi(mut sizhu: SiZhu, position: ZhuPosition, zhi: DiZhi) -> SiZhu {
	match position {
		ZhuPosition::Year => sizhu.year.zhi = zhi,
		ZhuPosition::Month => sizhu.month.zhi = zhi,
		ZhuPosition::Day => sizhu.day.zhi = zhi,
		ZhuPosition::Hour => sizhu.hour.zhi = zhi,
	}
	sizhu
}

// ================================
// 五行力量
// ================================

#[test]
fn test_results_are_deterministic() {
	for sizhu in [all_jia_zi(), mixed_chart()] {
		assert_eq!(
			compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG),
			compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG)
		);
		assert_eq!(
			compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES),
			compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES)
		);
	}
}

#[test]
fn test_unknown_symbol_never_adds_strength() {
	let base = mixed_chart();
	let before = compute_element_strength(&base, &DEFAULT_WEIGHT_CONFIG);

	for position in ZhuPosition::ALL {
		let variants = [
			(with_gan(base, position, BAD_GAN), false),
			(with_zhi(base, position, BAD_ZHI), position == ZhuPosition::Month),
		];
		for (sizhu, touches_month) in variants {
			let after = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
			for wx in WuXing::ALL {
				let (b, a) = (before.get(wx), after.get(wx));
				assert!(a.tian_gan <= b.tian_gan, "{} {} 天干", position.name(), wx.name());
				assert!(a.di_zhi <= b.di_zhi, "{} {} 地支", position.name(), wx.name());
				assert!(a.cang_gan <= b.cang_gan, "{} {} 藏干", position.name(), wx.name());
				assert!(a.na_yin <= b.na_yin, "{} {} 纳音", position.name(), wx.name());
				assert!(a.he_ju <= b.he_ju, "{} {} 合局", position.name(), wx.name());
				if !touches_month {
					assert_eq!(a.ji_jie, b.ji_jie, "{} {} 季节", position.name(), wx.name());
				}
			}
		}
	}
}

#[test]
fn test_unknown_month_drops_season() {
	let sizhu = with_zhi(mixed_chart(), ZhuPosition::Month, BAD_ZHI);
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	for wx in WuXing::ALL {
		assert_eq!(strength.get(wx).ji_jie, 0);
	}
}

#[test]
fn test_all_invalid_chart_is_zero() {
	let bad = gz(BAD_GAN, BAD_ZHI);
	let sizhu = SiZhu::new(bad, bad, bad, bad);
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	assert_eq!(strength, WuXingStrengthSet::default());
}

#[test]
fn test_hidden_stems_split_five_three_two() {
	let bad = gz(BAD_GAN, BAD_ZHI);
	// 只有月支为寅：本气甲、中气丙、余气戊
	let sizhu = SiZhu::new(bad, gz(BAD_GAN, YIN), bad, bad);
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	assert_eq!(strength.mu.cang_gan, 150);
	assert_eq!(strength.huo.cang_gan, 90);
	assert_eq!(strength.tu.cang_gan, 60);

	let config = WeightConfig {
		canggan: ZhuWeights::new(0, 1000, 0, 0),
		..DEFAULT_WEIGHT_CONFIG
	};
	let strength = compute_element_strength(&sizhu, &config);
	assert_eq!(
		(strength.mu.cang_gan, strength.huo.cang_gan, strength.tu.cang_gan),
		(500, 300, 200)
	);
}

#[test]
fn test_single_hidden_stem_takes_full_weight() {
	let bad = gz(BAD_GAN, BAD_ZHI);
	let sizhu = SiZhu::new(bad, gz(BAD_GAN, ZI), bad, bad);
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	assert_eq!(strength.shui.cang_gan, DEFAULT_WEIGHT_CONFIG.canggan.month as i32);
}

#[test]
fn test_total_is_rounded_to_tenth() {
	// 奇数权重使藏干与半合出现非整 0.1 分
	let config = WeightConfig {
		tiangan: ZhuWeights::new(333, 777, 1001, 605),
		canggan: ZhuWeights::new(155, 305, 205, 155),
		heju: HeJuBonus { partial_percent: 55, ..DEFAULT_WEIGHT_CONFIG.heju },
		..DEFAULT_WEIGHT_CONFIG
	};
	for sizhu in sample_charts() {
		let strength = compute_element_strength(&sizhu, &config);
		for wx in WuXing::ALL {
			let entry = strength.get(wx);
			let sum = entry.category_sum();
			assert_eq!(entry.total, round_to_tenth(sum));
			assert_eq!(entry.total % 10, 0);
			let diff = (entry.total - sum).abs();
			assert!(diff <= 5);
			if diff == 5 {
				assert!(entry.total.abs() > sum.abs());
			}
		}
	}
}

#[test]
fn test_all_jia_zi_strength() {
	let strength = compute_element_strength(&all_jia_zi(), &DEFAULT_WEIGHT_CONFIG);
	// 木：天干 5+7+10+6，冬季相 +3
	assert_eq!(strength.mu.total, 3100);
	// 水：地支 2+5+3+2，藏干癸 1.5+3+2+1.5，冬季旺 +6
	assert_eq!(strength.shui.total, 2600);
	// 金：海中金 1+2+1.5+0.5，冬季死 -6
	assert_eq!(strength.jin.total, -100);
	assert_eq!(strength.tu.total, -300);
	assert_eq!(strength.huo.total, 0);
	assert_eq!(strength.strongest(), WuXing::Mu);
	for wx in WuXing::ALL {
		assert_eq!(strength.get(wx).he_ju, 0);
	}
}

#[test]
fn test_winter_month_season_adjustment() {
	for month in [gz(DING, HAI), gz(BING, ZI), gz(DING, CHOU)] {
		let sizhu = SiZhu::new(gz(BING, YIN), month, gz(GENG, SHEN), gz(WU, WU_ZHI));
		let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
		assert_eq!(strength.shui.ji_jie, 600);
		assert_eq!(strength.mu.ji_jie, 300);
		let mut rest = [strength.huo.ji_jie, strength.tu.ji_jie, strength.jin.ji_jie];
		rest.sort();
		assert_eq!(rest, [-600, -300, 0]);
	}
}

#[test]
fn test_full_fire_triad_bonus() {
	let sizhu = SiZhu::new(gz(JIA, YIN), gz(JIA, WU_ZHI), gz(JIA, XU), gz(JIA, YIN));
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	assert_eq!(strength.huo.he_ju, 300);
	for wx in [WuXing::Jin, WuXing::Mu, WuXing::Shui, WuXing::Tu] {
		assert_eq!(strength.get(wx).he_ju, 0);
	}
}

#[test]
fn test_stem_combination_bonus() {
	let strength = compute_element_strength(&mixed_chart(), &DEFAULT_WEIGHT_CONFIG);
	// 甲己合土
	assert_eq!(strength.tu.he_ju, 200);
	// 申子半合水局：3 分的 60%
	assert_eq!(strength.shui.he_ju, 180);
}

// ================================
// 日主旺衰
// ================================

#[test]
fn test_all_jia_zi_is_extremely_strong() {
	// 3100 / (2600 - 100 - 300 + 0) ≈ 1.41
	assert_eq!(compute_day_master(&all_jia_zi(), &DEFAULT_WEIGHT_CONFIG), RiZhuWangShuai::JiWang);
}

#[test]
fn test_unknown_day_stem_is_balanced() {
	let sizhu = with_gan(all_jia_zi(), ZhuPosition::Day, BAD_GAN);
	assert_eq!(compute_day_master(&sizhu, &DEFAULT_WEIGHT_CONFIG), RiZhuWangShuai::PingHeng);
}

#[test]
fn test_additive_delta_mode() {
	let sizhu = all_jia_zi();
	let strength = compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG);
	// 占比 584，冬季木相 +150，子水生木 +200，海中金克木 -50
	assert_eq!(additive_delta_score(&sizhu, &strength), Some(884));

	let config = WeightConfig { mode: StrengthMode::AdditiveDelta, ..DEFAULT_WEIGHT_CONFIG };
	assert_eq!(compute_day_master(&sizhu, &config), RiZhuWangShuai::Wang);
}

#[test]
fn test_thresholds_are_configurable() {
	let mut config = DEFAULT_WEIGHT_CONFIG;
	config.thresholds.wang = 150;
	assert_eq!(compute_day_master(&all_jia_zi(), &config), RiZhuWangShuai::Wang);
}

// ================================
// 格局判定
// ================================

#[test]
fn test_all_jia_zi_pattern() {
	let result = compute_pattern(&all_jia_zi(), &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
	assert_eq!(result.wang_shuai, RiZhuWangShuai::JiWang);
	// 年月时三干比肩：从旺 7 + 3，与建元 8 + 2 同级，强度 85 > 75
	assert_eq!(result.main.ge_ju, GeJuType::CongWang);
	assert_eq!(result.main.priority, 10);
	assert_eq!(result.main.strength, 85);
	assert_eq!(result.yong_shen, YongShen::BiJie);
	assert_eq!(result.yong_shen.elements(WuXing::Mu), vec![WuXing::Mu]);

	let order: Vec<GeJuType> = result.auxiliary.iter().map(|c| c.ge_ju).collect();
	assert_eq!(
		order,
		vec![
			GeJuType::RiYuanJianYuan,
			GeJuType::ZhuanWang,
			GeJuType::ZhengYin,
			GeJuType::BiJian,
		]
	);
}

#[test]
fn test_all_jia_yin_is_cong_wang() {
	let jia_yin = gz(JIA, YIN);
	let sizhu = SiZhu::new(jia_yin, jia_yin, jia_yin, jia_yin);
	let result = compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
	assert_eq!(result.wang_shuai, RiZhuWangShuai::JiWang);
	assert_eq!(result.main.ge_ju, GeJuType::CongWang);
	assert_eq!(result.main.strength, 90);

	let zhuan_wang = result.auxiliary.iter().find(|c| c.ge_ju == GeJuType::ZhuanWang);
	assert_eq!(zhuan_wang.map(|c| c.strength), Some(95));
	assert!(result.auxiliary.iter().any(|c| c.ge_ju == GeJuType::RiYuanJianLu));
	assert!(result.auxiliary.iter().any(|c| c.ge_ju == GeJuType::BiJian));

	// 比肩透于年、月、时三干
	let stems: Vec<&str> = result
		.factors
		.iter()
		.filter(|f| f.factor.contains('干') && !f.factor.contains("藏干"))
		.map(|f| f.factor.as_str())
		.collect();
	assert_eq!(stems, vec!["年干甲", "月干甲", "时干甲"]);
}

#[test]
fn test_factors_lead_with_day_master_and_month() {
	let result = compute_pattern(&all_jia_zi(), &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
	assert!(result.factors.len() >= 2);
	assert_eq!(result.factors[0].factor, "日主旺衰");
	assert_eq!(result.factors[1].factor, "月令");
	assert!(result.factors.iter().all(|f| f.contribution <= 100));
}

#[test]
fn test_main_pattern_ranks_first() {
	for sizhu in sample_charts() {
		let result = compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
		let mut previous = &result.main;
		for candidate in result.auxiliary.iter() {
			assert!(candidate.priority <= previous.priority);
			if candidate.priority == previous.priority {
				assert!(candidate.strength <= previous.strength);
			}
			previous = candidate;
		}
		assert!(result.main.strength <= 100);
		assert!(result.main.priority >= LOWEST_PRIORITY);
	}
}

#[test]
fn test_unmatched_chart_falls_back_to_zaqi() {
	let bad = gz(BAD_GAN, BAD_ZHI);
	let sizhu = SiZhu::new(bad, bad, bad, bad);
	let result = compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
	assert_eq!(result.main.ge_ju, GeJuType::ZaQi);
	assert_eq!(result.main.priority, 1);
	assert!(result.auxiliary.is_empty());
	assert_eq!(result.wang_shuai, RiZhuWangShuai::PingHeng);
	assert_eq!(result.yong_shen, YongShen::YueLingDangLing(None));
}

#[test]
fn test_custom_priority_table() {
	const YIN_FIRST: &[GeJuPriority] = &[GeJuPriority {
		ge_ju: GeJuType::ZhengYin,
		base: 20,
		wang_shuai_bonus: None,
		month_bonus: None,
	}];
	let engine = GeJuEngine::new(DEFAULT_WEIGHT_CONFIG, YIN_FIRST);
	let result = engine.compute_pattern(&all_jia_zi());
	assert_eq!(result.main.ge_ju, GeJuType::ZhengYin);
	assert_eq!(result.main.priority, 20);
	assert_eq!(result.yong_shen, YongShen::YinXing);
	// 表中未列出的格局取最低优先级
	assert!(result.auxiliary.iter().all(|c| c.priority == LOWEST_PRIORITY));
}

// ================================
// 引擎
// ================================

#[test]
fn test_engine_matches_free_functions() {
	let engine = GeJuEngine::default();
	for sizhu in [all_jia_zi(), mixed_chart()] {
		assert_eq!(
			engine.compute_element_strength(&sizhu),
			compute_element_strength(&sizhu, &DEFAULT_WEIGHT_CONFIG)
		);
		assert_eq!(
			engine.compute_day_master(&sizhu),
			compute_day_master(&sizhu, &DEFAULT_WEIGHT_CONFIG)
		);
		assert_eq!(
			engine.compute_pattern(&sizhu),
			compute_pattern(&sizhu, &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES)
		);
	}
}

#[test]
fn test_engine_from_provider() {
	let engine = GeJuEngine::from_provider::<DefaultWeightConfig>();
	assert_eq!(engine.config(), &DEFAULT_WEIGHT_CONFIG);
}

#[cfg(feature = "std")]
#[test]
fn test_result_serializes_to_json() {
	let result = compute_pattern(&all_jia_zi(), &DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES);
	let json = serde_json::to_string(&result).expect("serialize");
	let back: GeJuResult = serde_json::from_str(&json).expect("deserialize");
	assert_eq!(back, result);
}
