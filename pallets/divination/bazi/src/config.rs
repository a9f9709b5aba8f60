//! # 权重配置
//!
//! ## 概述
//!
//! 五行力量计算所用的全部权重：天干、地支、藏干、纳音四类按柱位取值，
//! 另有季节旺相调整、合局加成、日主旺衰阈值与计算模式。
//!
//! 配置是显式传入的不可变值，不存在进程级全局状态，同一进程内可并行使用多套权重。
//!
//! ## 默认值（单位 0.01 分）
//!
//! | 类别 | 年 | 月 | 日 | 时 |
//! |------|----|----|----|----|
//! | 天干 | 500 | 700 | 1000 | 600 |
//! | 地支 | 200 | 500 | 300 | 200 |
//! | 藏干 | 150 | 300 | 200 | 150 |
//! | 纳音 | 100 | 200 | 150 | 50 |
//!
//! 月支权重在四柱地支中最大（月令司权）。

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_arithmetic::Percent;
use sp_core::Get;

use crate::types::{RiZhuWangShuai, WangXiang, ZhuPosition};

/// 按柱位区分的权重
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ZhuWeights {
	pub year: u32,
	pub month: u32,
	pub day: u32,
	pub hour: u32,
}

impl ZhuWeights {
	pub const fn new(year: u32, month: u32, day: u32, hour: u32) -> Self {
		Self { year, month, day, hour }
	}

	pub fn get(&self, position: ZhuPosition) -> u32 {
		match position {
			ZhuPosition::Year => self.year,
			ZhuPosition::Month => self.month,
			ZhuPosition::Day => self.day,
			ZhuPosition::Hour => self.hour,
		}
	}
}

/// 季节旺相调整（囚、死必须为负）
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct JiJieAdjust {
	pub wang: i32,
	pub xiang: i32,
	pub ping: i32,
	pub qiu: i32,
	pub si: i32,
}

impl JiJieAdjust {
	pub fn get(&self, state: WangXiang) -> i32 {
		match state {
			WangXiang::Wang => self.wang,
			WangXiang::Xiang => self.xiang,
			WangXiang::Ping => self.ping,
			WangXiang::Qiu => self.qiu,
			WangXiang::Si => self.si,
		}
	}
}

/// 合局加成
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HeJuBonus {
	/// 天干五合
	pub tiangan_wuhe: u32,
	/// 地支三合（完整）
	pub sanhe: u32,
	/// 地支三会（完整）
	pub sanhui: u32,
	/// 半合（仅两支）按完整加成的百分比计
	pub partial_percent: u8,
}

impl HeJuBonus {
	pub fn partial_ratio(&self) -> Percent {
		Percent::from_parts(self.partial_percent)
	}
}

/// 日主旺衰阈值
///
/// 比值 = 日主五行总分 × 100 / 其余四行总分。
/// 各字段为对应等级的上界（不含），超过 `wang` 即为极旺。
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WangShuaiThresholds {
	pub ji_ruo: u32,
	pub ruo: u32,
	pub pian_ruo: u32,
	pub ping_heng: u32,
	pub pian_wang: u32,
	pub wang: u32,
}

impl WangShuaiThresholds {
	fn bounds(&self) -> [(u32, RiZhuWangShuai); 6] {
		[
			(self.ji_ruo, RiZhuWangShuai::JiRuo),
			(self.ruo, RiZhuWangShuai::Ruo),
			(self.pian_ruo, RiZhuWangShuai::PianRuo),
			(self.ping_heng, RiZhuWangShuai::PingHeng),
			(self.pian_wang, RiZhuWangShuai::PianWang),
			(self.wang, RiZhuWangShuai::Wang),
		]
	}

	/// 按比值（百分数）查等级
	pub fn classify(&self, ratio_percent: u32) -> RiZhuWangShuai {
		self.bounds()
			.iter()
			.find(|(bound, _)| ratio_percent < *bound)
			.map(|(_, level)| *level)
			.unwrap_or(RiZhuWangShuai::JiWang)
	}

	pub fn is_ascending(&self) -> bool {
		self.bounds().windows(2).all(|w| w[0].0 < w[1].0)
	}
}

/// 日主旺衰计算模式
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
	Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StrengthMode {
	/// 日主五行与其余四行之比（默认）
	#[default]
	Ratio,
	/// 旧版增减分法：以占比为底，按月令、三合、五合、纳音逐项加减
	AdditiveDelta,
}

/// 五行力量权重配置
#[derive(
	Clone,
	Copy,
	Encode,
	Decode,
	DecodeWithMemTracking,
	TypeInfo,
	MaxEncodedLen,
	PartialEq,
	Eq,
	Debug,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct WeightConfig {
	pub tiangan: ZhuWeights,
	pub dizhi: ZhuWeights,
	pub canggan: ZhuWeights,
	pub nayin: ZhuWeights,
	pub jijie: JiJieAdjust,
	pub heju: HeJuBonus,
	pub thresholds: WangShuaiThresholds,
	pub mode: StrengthMode,
}

/// 默认权重
pub const DEFAULT_WEIGHT_CONFIG: WeightConfig = WeightConfig {
	tiangan: ZhuWeights::new(500, 700, 1000, 600),
	dizhi: ZhuWeights::new(200, 500, 300, 200),
	canggan: ZhuWeights::new(150, 300, 200, 150),
	nayin: ZhuWeights::new(100, 200, 150, 50),
	jijie: JiJieAdjust { wang: 600, xiang: 300, ping: 0, qiu: -300, si: -600 },
	heju: HeJuBonus { tiangan_wuhe: 200, sanhe: 300, sanhui: 200, partial_percent: 60 },
	thresholds: WangShuaiThresholds {
		ji_ruo: 20,
		ruo: 30,
		pian_ruo: 45,
		ping_heng: 70,
		pian_wang: 100,
		wang: 130,
	},
	mode: StrengthMode::Ratio,
};

impl Default for WeightConfig {
	fn default() -> Self {
		DEFAULT_WEIGHT_CONFIG
	}
}

/// 配置校验错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
	/// JSON 无法解析
	Malformed,
	/// 囚、死调整值不为负
	DeclineNotNegative,
	/// 旺 ≥ 相 ≥ 平 不成立
	DeclineNotMonotone,
	/// 旺衰阈值未严格递增
	ThresholdsNotAscending,
	/// 半合比例超过 100%
	PartialRatioOutOfRange,
}

impl ConfigError {
	pub fn as_str(&self) -> &'static str {
		match self {
			ConfigError::Malformed => "配置格式错误",
			ConfigError::DeclineNotNegative => "囚、死调整值必须为负",
			ConfigError::DeclineNotMonotone => "旺相平调整值必须依次不增",
			ConfigError::ThresholdsNotAscending => "旺衰阈值必须严格递增",
			ConfigError::PartialRatioOutOfRange => "半合比例不能超过 100%",
		}
	}
}

impl WeightConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		let jijie = &self.jijie;
		if jijie.qiu >= 0 || jijie.si >= 0 {
			return Err(ConfigError::DeclineNotNegative);
		}
		if jijie.wang < jijie.xiang || jijie.xiang < jijie.ping {
			return Err(ConfigError::DeclineNotMonotone);
		}
		if !self.thresholds.is_ascending() {
			return Err(ConfigError::ThresholdsNotAscending);
		}
		if self.heju.partial_percent > 100 {
			return Err(ConfigError::PartialRatioOutOfRange);
		}
		Ok(())
	}

	/// 从 JSON 读取配置，缺省的顶层字段取默认值
	#[cfg(feature = "std")]
	pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
		let config: WeightConfig = serde_json::from_slice(bytes).map_err(|e| {
			log::warn!("⚠️ 权重配置解析失败: {}", e);
			ConfigError::Malformed
		})?;
		config.validate()?;
		log::info!("⚖️ 已载入权重配置, 模式: {:?}", config.mode);
		Ok(config)
	}
}

/// 默认权重提供者
pub struct DefaultWeightConfig;

impl Get<WeightConfig> for DefaultWeightConfig {
	fn get() -> WeightConfig {
		DEFAULT_WEIGHT_CONFIG
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config_is_valid() {
		assert_eq!(DEFAULT_WEIGHT_CONFIG.validate(), Ok(()));
		assert_eq!(DefaultWeightConfig::get(), WeightConfig::default());
	}

	#[test]
	fn test_month_branch_weight_dominates() {
		let dizhi = DEFAULT_WEIGHT_CONFIG.dizhi;
		assert!(dizhi.month > dizhi.year);
		assert!(dizhi.month > dizhi.day);
		assert!(dizhi.month > dizhi.hour);
	}

	#[test]
	fn test_validate_rejects_bad_values() {
		let mut config = DEFAULT_WEIGHT_CONFIG;
		config.jijie.si = 0;
		assert_eq!(config.validate(), Err(ConfigError::DeclineNotNegative));

		let mut config = DEFAULT_WEIGHT_CONFIG;
		config.jijie.xiang = 700;
		assert_eq!(config.validate(), Err(ConfigError::DeclineNotMonotone));

		let mut config = DEFAULT_WEIGHT_CONFIG;
		config.thresholds.pian_wang = 70;
		assert_eq!(config.validate(), Err(ConfigError::ThresholdsNotAscending));

		let mut config = DEFAULT_WEIGHT_CONFIG;
		config.heju.partial_percent = 101;
		assert_eq!(config.validate(), Err(ConfigError::PartialRatioOutOfRange));
	}

	#[test]
	fn test_threshold_classify() {
		let t = DEFAULT_WEIGHT_CONFIG.thresholds;
		assert_eq!(t.classify(0), RiZhuWangShuai::JiRuo);
		assert_eq!(t.classify(20), RiZhuWangShuai::Ruo);
		assert_eq!(t.classify(44), RiZhuWangShuai::PianRuo);
		assert_eq!(t.classify(45), RiZhuWangShuai::PingHeng);
		assert_eq!(t.classify(99), RiZhuWangShuai::PianWang);
		assert_eq!(t.classify(129), RiZhuWangShuai::Wang);
		assert_eq!(t.classify(130), RiZhuWangShuai::JiWang);
	}

	#[cfg(feature = "std")]
	#[test]
	fn test_from_json_partial_document() {
		let json = br#"{ "heju": { "tiangan_wuhe": 100, "sanhe": 400, "sanhui": 250, "partial_percent": 50 }, "mode": "AdditiveDelta" }"#;
		let config = WeightConfig::from_json(json).expect("valid json");
		assert_eq!(config.heju.sanhe, 400);
		assert_eq!(config.heju.partial_percent, 50);
		assert_eq!(config.heju.partial_ratio(), Percent::from_percent(50));
		assert_eq!(config.mode, StrengthMode::AdditiveDelta);
		assert_eq!(config.tiangan, DEFAULT_WEIGHT_CONFIG.tiangan);
	}

	#[cfg(feature = "std")]
	#[test]
	fn test_from_json_errors() {
		assert_eq!(WeightConfig::from_json(b"not json"), Err(ConfigError::Malformed));
		let json = br#"{ "jijie": { "wang": 600, "xiang": 300, "ping": 0, "qiu": 100, "si": -600 } }"#;
		assert_eq!(WeightConfig::from_json(json), Err(ConfigError::DeclineNotNegative));
	}
}
