//! # 八字格局引擎 (Pallet Bazi GeJu)
//!
//! ## 概述
//!
//! 本 crate 对已排好的四柱八字做格局分析，包括：
//! - 五行力量计算（天干、地支、藏干、纳音、季节、合局六项加权）
//! - 日主旺衰判定（比值法为主，保留旧版增减分法）
//! - 十神计算
//! - 格局候选生成、优先级排序与用神推导
//!
//! 排盘（公历/农历转四柱）、大运流年、神煞等不在本 crate 范围内，
//! 调用方需先提供完整的 `SiZhu`。
//!
//! ## 特点
//!
//! - ✅ 纯计算库，无链上存储、无全局状态
//! - ✅ 定点整数运算（0.01 分），结果与平台无关
//! - ✅ 权重配置显式传入，可并行使用多套配置
//! - ✅ 无效干支不报错，按零贡献处理
//! - ✅ no_std 兼容
//!
//! ## 使用示例
//!
//! ```ignore
//! use pallet_bazi_geju::{GeJuEngine, GanZhi, SiZhu, TianGan, DiZhi};
//!
//! let jia_zi = GanZhi::new(TianGan(0), DiZhi(0));
//! let sizhu = SiZhu::new(jia_zi, jia_zi, jia_zi, jia_zi);
//!
//! let engine = GeJuEngine::default();
//! let strength = engine.compute_element_strength(&sizhu);
//! let result = engine.compute_pattern(&sizhu);
//! println!("{} {}", result.main.ge_ju.name(), result.yong_shen.name());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod constants;
pub mod geju;
pub mod heju;
pub mod selector;
pub mod shishen;
pub mod strength;
pub mod types;
pub mod wangshuai;

#[cfg(test)]
mod tests;

pub use config::{
	ConfigError, DefaultWeightConfig, StrengthMode, WeightConfig, DEFAULT_WEIGHT_CONFIG,
};
pub use selector::{GeJuPriority, DEFAULT_GEJU_PRIORITIES};
pub use shishen::{calculate_canggan_shishen, calculate_shishen, SiZhuShiShen};
pub use types::{
	DiZhi, GanZhi, GeJuCandidate, GeJuFactor, GeJuResult, GeJuType, NaYin, RiZhuWangShuai,
	ShiShen, SiZhu, TianGan, WuXing, WuXingStrength, WuXingStrengthSet, YongShen, ZhuPosition,
};

/// 计算四柱五行力量
pub fn compute_element_strength(sizhu: &SiZhu, config: &WeightConfig) -> WuXingStrengthSet {
	if sizhu.has_invalid_symbol() {
		log::warn!("⚠️ 四柱含无效干支, 按零贡献处理: {:?}", sizhu);
	}
	strength::calculate_wuxing_strength(sizhu, config)
}

/// 计算日主旺衰
pub fn compute_day_master(sizhu: &SiZhu, config: &WeightConfig) -> RiZhuWangShuai {
	let strength = compute_element_strength(sizhu, config);
	let wang_shuai = wangshuai::calculate_wangshuai(sizhu, &strength, config);
	log::debug!("☯️ 日主{} {}", sizhu.rizhu().name(), wang_shuai.name());
	wang_shuai
}

/// 判定格局（主格局、辅助格局、用神及判定依据）
pub fn compute_pattern(
	sizhu: &SiZhu,
	config: &WeightConfig,
	priorities: &[GeJuPriority],
) -> GeJuResult {
	let wang_shuai = compute_day_master(sizhu, config);
	let shishen = SiZhuShiShen::from_sizhu(sizhu);
	let candidates = geju::generate_geju_candidates(sizhu, &shishen, wang_shuai);
	let result = selector::select_geju(candidates, priorities, wang_shuai, sizhu, &shishen);

	log::debug!(
		"🔮 主格局 {} (强度 {}, 优先级 {}), 辅助格局 {} 个, 用神 {}",
		result.main.ge_ju.name(),
		result.main.strength,
		result.main.priority,
		result.auxiliary.len(),
		result.yong_shen.name()
	);
	result
}

/// 格局引擎：持有一套权重配置与优先级表
#[derive(Clone, Copy, Debug)]
pub struct GeJuEngine<'a> {
	config: WeightConfig,
	priorities: &'a [GeJuPriority],
}

impl Default for GeJuEngine<'static> {
	fn default() -> Self {
		Self::new(DEFAULT_WEIGHT_CONFIG, DEFAULT_GEJU_PRIORITIES)
	}
}

impl<'a> GeJuEngine<'a> {
	pub fn new(config: WeightConfig, priorities: &'a [GeJuPriority]) -> Self {
		Self { config, priorities }
	}

	/// 使用 `Get` 提供的权重与默认优先级表
	pub fn from_provider<P: sp_core::Get<WeightConfig>>() -> GeJuEngine<'static> {
		GeJuEngine::new(P::get(), DEFAULT_GEJU_PRIORITIES)
	}

	pub fn config(&self) -> &WeightConfig {
		&self.config
	}

	pub fn compute_element_strength(&self, sizhu: &SiZhu) -> WuXingStrengthSet {
		compute_element_strength(sizhu, &self.config)
	}

	pub fn compute_day_master(&self, sizhu: &SiZhu) -> RiZhuWangShuai {
		compute_day_master(sizhu, &self.config)
	}

	pub fn compute_pattern(&self, sizhu: &SiZhu) -> GeJuResult {
		compute_pattern(sizhu, &self.config, self.priorities)
	}
}
