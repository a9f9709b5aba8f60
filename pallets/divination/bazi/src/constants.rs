//! # 八字格局引擎 - 常量表
//!
//! 天干地支五行、藏干、纳音、季节旺相、合局等固定对照表。
//! 所有表在编译期确定，运行时只读。

use sp_arithmetic::Percent;

use crate::types::{TianGan, WuXing};

// ================================
// 天干
// ================================

pub const TIANGAN_CHARS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

pub const TIANGAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const TIANGAN_WUXING: [WuXing; 10] = [
	WuXing::Mu,
	WuXing::Mu,
	WuXing::Huo,
	WuXing::Huo,
	WuXing::Tu,
	WuXing::Tu,
	WuXing::Jin,
	WuXing::Jin,
	WuXing::Shui,
	WuXing::Shui,
];

// ================================
// 地支
// ================================

pub const DIZHI_CHARS: [char; 12] =
	['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'];

pub const DIZHI_NAMES: [&str; 12] =
	["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

pub const SHENGXIAO_NAMES: [&str; 12] =
	["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"];

/// 地支本气五行
pub const DIZHI_WUXING: [WuXing; 12] = [
	WuXing::Shui, // 子
	WuXing::Tu,   // 丑
	WuXing::Mu,   // 寅
	WuXing::Mu,   // 卯
	WuXing::Tu,   // 辰
	WuXing::Huo,  // 巳
	WuXing::Huo,  // 午
	WuXing::Tu,   // 未
	WuXing::Jin,  // 申
	WuXing::Jin,  // 酉
	WuXing::Tu,   // 戌
	WuXing::Shui, // 亥
];

/// 地支藏干（本气在前），辰藏"戊乙癸"
pub const DIZHI_CANGGAN: [&[TianGan]; 12] = [
	&[TianGan(9)],                          // 子：癸
	&[TianGan(5), TianGan(9), TianGan(7)],  // 丑：己癸辛
	&[TianGan(0), TianGan(2), TianGan(4)],  // 寅：甲丙戊
	&[TianGan(1)],                          // 卯：乙
	&[TianGan(4), TianGan(1), TianGan(9)],  // 辰：戊乙癸
	&[TianGan(2), TianGan(6), TianGan(4)],  // 巳：丙庚戊
	&[TianGan(3), TianGan(5)],              // 午：丁己
	&[TianGan(5), TianGan(3), TianGan(1)],  // 未：己丁乙
	&[TianGan(6), TianGan(8), TianGan(4)],  // 申：庚壬戊
	&[TianGan(7)],                          // 酉：辛
	&[TianGan(4), TianGan(7), TianGan(3)],  // 戌：戊辛丁
	&[TianGan(8), TianGan(0)],              // 亥：壬甲
];

const CANGGAN_RATIO_ONE: [Percent; 1] = [Percent::from_parts(100)];
const CANGGAN_RATIO_TWO: [Percent; 2] = [Percent::from_parts(60), Percent::from_parts(40)];
const CANGGAN_RATIO_THREE: [Percent; 3] =
	[Percent::from_parts(50), Percent::from_parts(30), Percent::from_parts(20)];

/// 藏干分配比例：一藏 1.0；二藏 0.6/0.4；三藏 0.5/0.3/0.2
pub fn canggan_ratios(count: usize) -> &'static [Percent] {
	match count {
		1 => &CANGGAN_RATIO_ONE,
		2 => &CANGGAN_RATIO_TWO,
		3 => &CANGGAN_RATIO_THREE,
		_ => &[],
	}
}

// ================================
// 纳音
// ================================

/// 六十甲子纳音，每两柱一音，按甲子序排列
pub const NAYIN_TABLE: [(&str, WuXing); 30] = [
	("海中金", WuXing::Jin),  // 甲子 乙丑
	("炉中火", WuXing::Huo),  // 丙寅 丁卯
	("大林木", WuXing::Mu),   // 戊辰 己巳
	("路旁土", WuXing::Tu),   // 庚午 辛未
	("剑锋金", WuXing::Jin),  // 壬申 癸酉
	("山头火", WuXing::Huo),  // 甲戌 乙亥
	("涧下水", WuXing::Shui), // 丙子 丁丑
	("城头土", WuXing::Tu),   // 戊寅 己卯
	("白蜡金", WuXing::Jin),  // 庚辰 辛巳
	("杨柳木", WuXing::Mu),   // 壬午 癸未
	("泉中水", WuXing::Shui), // 甲申 乙酉
	("屋上土", WuXing::Tu),   // 丙戌 丁亥
	("霹雳火", WuXing::Huo),  // 戊子 己丑
	("松柏木", WuXing::Mu),   // 庚寅 辛卯
	("长流水", WuXing::Shui), // 壬辰 癸巳
	("砂中金", WuXing::Jin),  // 甲午 乙未
	("山下火", WuXing::Huo),  // 丙申 丁酉
	("平地木", WuXing::Mu),   // 戊戌 己亥
	("壁上土", WuXing::Tu),   // 庚子 辛丑
	("金箔金", WuXing::Jin),  // 壬寅 癸卯
	("覆灯火", WuXing::Huo),  // 甲辰 乙巳
	("天河水", WuXing::Shui), // 丙午 丁未
	("大驿土", WuXing::Tu),   // 戊申 己酉
	("钗钏金", WuXing::Jin),  // 庚戌 辛亥
	("桑柘木", WuXing::Mu),   // 壬子 癸丑
	("大溪水", WuXing::Shui), // 甲寅 乙卯
	("沙中土", WuXing::Tu),   // 丙辰 丁巳
	("天上火", WuXing::Huo),  // 戊午 己未
	("石榴木", WuXing::Mu),   // 庚申 辛酉
	("大海水", WuXing::Shui), // 壬戌 癸亥
];

// ================================
// 季节旺相
// ================================

/// 四季五行状态，列顺序为 旺、相、平、囚、死
pub const JIJIE_WANGXIANG: [[WuXing; 5]; 4] = [
	[WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui],  // 春
	[WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui, WuXing::Mu],  // 夏
	[WuXing::Jin, WuXing::Shui, WuXing::Mu, WuXing::Huo, WuXing::Tu],  // 秋
	[WuXing::Shui, WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin],  // 冬
];

// ================================
// 合局
// ================================

/// 天干五合及化神
/// 甲己合土、乙庚合金、丙辛合水、丁壬合木、戊癸合火
pub const TIANGAN_WUHE: [(u8, u8, WuXing); 5] = [
	(0, 5, WuXing::Tu),   // 甲己
	(1, 6, WuXing::Jin),  // 乙庚
	(2, 7, WuXing::Shui), // 丙辛
	(3, 8, WuXing::Mu),   // 丁壬
	(4, 9, WuXing::Huo),  // 戊癸
];

/// 地支三合局
pub const DIZHI_SANHE: [([u8; 3], WuXing); 4] = [
	([2, 6, 10], WuXing::Huo), // 寅午戌
	([8, 0, 4], WuXing::Shui), // 申子辰
	([11, 3, 7], WuXing::Mu),  // 亥卯未
	([5, 9, 1], WuXing::Jin),  // 巳酉丑
];

/// 地支三会局（季节方局）
pub const DIZHI_SANHUI: [([u8; 3], WuXing); 4] = [
	([2, 3, 4], WuXing::Mu),    // 寅卯辰
	([5, 6, 7], WuXing::Huo),   // 巳午未
	([8, 9, 10], WuXing::Jin),  // 申酉戌
	([11, 0, 1], WuXing::Shui), // 亥子丑
];

// ================================
// 禄与元
// ================================

/// 日干临官（禄）之支：甲寅 乙卯 丙巳 丁午 戊巳 己午 庚申 辛酉 壬亥 癸子
pub const JIANLU_ZHI: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// 建元对照：甲子 乙丑 丙寅 丁卯 戊辰 己巳 庚午 辛未 壬申 癸酉
pub const JIANYUAN_ZHI: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

#[cfg(test)]
mod tests {
	use super::*;
	use sp_arithmetic::PerThing;

	#[test]
	fn test_canggan_ratios_sum_to_whole() {
		for count in 1..=3 {
			let sum: u32 = canggan_ratios(count).iter().map(|p| p.deconstruct() as u32).sum();
			assert_eq!(sum, 100);
		}
		assert!(canggan_ratios(0).is_empty());
	}

	#[test]
	fn test_canggan_counts() {
		for stems in DIZHI_CANGGAN.iter() {
			assert!(!stems.is_empty() && stems.len() <= 3);
		}
		// 本气与地支五行一致
		for (i, stems) in DIZHI_CANGGAN.iter().enumerate() {
			assert_eq!(TIANGAN_WUXING[stems[0].0 as usize], DIZHI_WUXING[i]);
		}
	}

	#[test]
	fn test_each_season_is_a_permutation() {
		for row in JIJIE_WANGXIANG.iter() {
			for wx in WuXing::ALL {
				assert_eq!(row.iter().filter(|&&x| x == wx).count(), 1);
			}
		}
	}
}
