//! # 八字格局引擎 - 基础类型
//!
//! ## 天干地支索引
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//!
//! 超出范围的索引视为无效符号：不报错，只是不产生任何五行贡献，十神记为"未知"。
//!
//! ## 分值单位
//!
//! 所有力量分值均为定点整数，单位为 0.01 分（`1.0` 分记作 `100`）。

use alloc::{string::String, vec};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_std::prelude::*;

use crate::constants::{
	DIZHI_CANGGAN, DIZHI_CHARS, DIZHI_NAMES, DIZHI_WUXING, JIJIE_WANGXIANG, NAYIN_TABLE,
	SHENGXIAO_NAMES, TIANGAN_CHARS, TIANGAN_NAMES, TIANGAN_WUXING,
};

/// 一分对应的定点数值
pub const SCORE_SCALE: i32 = 100;

// ================================
// 五行与阴阳
// ================================

/// 五行
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
pub enum WuXing {
	/// 金
	Jin,
	/// 木
	Mu,
	/// 水
	Shui,
	/// 火
	Huo,
	/// 土
	Tu,
}

impl WuXing {
	/// 按 金木水火土 顺序排列的全部五行
	pub const ALL: [WuXing; 5] = [WuXing::Jin, WuXing::Mu, WuXing::Shui, WuXing::Huo, WuXing::Tu];

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn name(self) -> &'static str {
		match self {
			WuXing::Jin => "金",
			WuXing::Mu => "木",
			WuXing::Shui => "水",
			WuXing::Huo => "火",
			WuXing::Tu => "土",
		}
	}

	/// 我生者（木生火、火生土、土生金、金生水、水生木）
	pub fn sheng(self) -> WuXing {
		match self {
			WuXing::Mu => WuXing::Huo,
			WuXing::Huo => WuXing::Tu,
			WuXing::Tu => WuXing::Jin,
			WuXing::Jin => WuXing::Shui,
			WuXing::Shui => WuXing::Mu,
		}
	}

	/// 我克者（木克土、土克水、水克火、火克金、金克木）
	pub fn ke(self) -> WuXing {
		match self {
			WuXing::Mu => WuXing::Tu,
			WuXing::Tu => WuXing::Shui,
			WuXing::Shui => WuXing::Huo,
			WuXing::Huo => WuXing::Jin,
			WuXing::Jin => WuXing::Mu,
		}
	}

	/// 生我者
	pub fn sheng_wo(self) -> WuXing {
		self.sheng().sheng().sheng().sheng()
	}

	/// 克我者
	pub fn ke_wo(self) -> WuXing {
		self.sheng().sheng().sheng()
	}

	/// `self` 相对于日主五行 `rizhu` 的关系
	pub fn guanxi(self, rizhu: WuXing) -> WuXingGuanXi {
		if self == rizhu {
			WuXingGuanXi::TongLei
		} else if self.sheng() == rizhu {
			WuXingGuanXi::ShengWo
		} else if self.ke() == rizhu {
			WuXingGuanXi::KeWo
		} else if rizhu.ke() == self {
			WuXingGuanXi::WoKe
		} else {
			WuXingGuanXi::WoSheng
		}
	}
}

/// 某一五行相对日主五行的生克关系
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
pub enum WuXingGuanXi {
	/// 同类（比劫）
	TongLei,
	/// 生我（印）
	ShengWo,
	/// 克我（官杀）
	KeWo,
	/// 我克（财）
	WoKe,
	/// 我生（食伤）
	WoSheng,
}

impl WuXingGuanXi {
	pub fn name(self) -> &'static str {
		match self {
			WuXingGuanXi::TongLei => "同类相助",
			WuXingGuanXi::ShengWo => "生扶日主",
			WuXingGuanXi::KeWo => "克制日主",
			WuXingGuanXi::WoKe => "为日主所克",
			WuXingGuanXi::WoSheng => "泄日主之气",
		}
	}
}

/// 阴阳
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
pub enum YinYang {
	Yang,
	Yin,
}

// ================================
// 天干、地支、干支
// ================================

/// 天干（0-9）
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
pub struct TianGan(pub u8);

impl TianGan {
	pub fn is_valid(self) -> bool {
		(self.0 as usize) < TIANGAN_WUXING.len()
	}

	pub fn to_wuxing(self) -> Option<WuXing> {
		TIANGAN_WUXING.get(self.0 as usize).copied()
	}

	/// 甲丙戊庚壬为阳，乙丁己辛癸为阴
	pub fn yin_yang(self) -> Option<YinYang> {
		if !self.is_valid() {
			return None;
		}
		Some(if self.0 % 2 == 0 { YinYang::Yang } else { YinYang::Yin })
	}

	pub fn name(self) -> &'static str {
		TIANGAN_NAMES.get(self.0 as usize).copied().unwrap_or("?")
	}

	pub fn from_char(c: char) -> Option<Self> {
		TIANGAN_CHARS.iter().position(|&x| x == c).map(|i| TianGan(i as u8))
	}
}

/// 地支（0-11）
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
pub struct DiZhi(pub u8);

impl DiZhi {
	pub fn is_valid(self) -> bool {
		(self.0 as usize) < DIZHI_WUXING.len()
	}

	pub fn to_wuxing(self) -> Option<WuXing> {
		DIZHI_WUXING.get(self.0 as usize).copied()
	}

	pub fn name(self) -> &'static str {
		DIZHI_NAMES.get(self.0 as usize).copied().unwrap_or("?")
	}

	/// 生肖
	pub fn shengxiao(self) -> Option<&'static str> {
		SHENGXIAO_NAMES.get(self.0 as usize).copied()
	}

	pub fn from_char(c: char) -> Option<Self> {
		DIZHI_CHARS.iter().position(|&x| x == c).map(|i| DiZhi(i as u8))
	}

	/// 藏干（本气、中气、余气顺序），无效地支返回空切片
	pub fn canggan(self) -> &'static [TianGan] {
		DIZHI_CANGGAN.get(self.0 as usize).copied().unwrap_or(&[])
	}

	/// 作为月令时所属季节
	pub fn jijie(self) -> Option<JiJie> {
		match self.0 {
			2..=4 => Some(JiJie::Chun),
			5..=7 => Some(JiJie::Xia),
			8..=10 => Some(JiJie::Qiu),
			0 | 1 | 11 => Some(JiJie::Dong),
			_ => None,
		}
	}
}

/// 干支组合
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
pub struct GanZhi {
	pub gan: TianGan,
	pub zhi: DiZhi,
}

impl GanZhi {
	pub fn new(gan: TianGan, zhi: DiZhi) -> Self {
		Self { gan, zhi }
	}

	/// 在六十甲子中的序号（甲子 = 0）
	///
	/// 天干地支阴阳不一致（如甲丑）时不存在对应的甲子，返回 `None`。
	pub fn jiazi_index(&self) -> Option<u8> {
		if !self.gan.is_valid() || !self.zhi.is_valid() || self.gan.0 % 2 != self.zhi.0 % 2 {
			return None;
		}
		let index = (6 * self.gan.0 as i32 - 5 * self.zhi.0 as i32).rem_euclid(60);
		Some(index as u8)
	}

	pub fn nayin(&self) -> Option<NaYin> {
		self.jiazi_index().map(|i| NaYin(i / 2))
	}

	pub fn is_valid(&self) -> bool {
		self.gan.is_valid() && self.zhi.is_valid()
	}
}

/// 纳音（0-29，每两组相邻干支共用一个纳音）
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
pub struct NaYin(pub u8);

impl NaYin {
	pub fn name(self) -> &'static str {
		NAYIN_TABLE.get(self.0 as usize).map(|(name, _)| *name).unwrap_or("?")
	}

	pub fn to_wuxing(self) -> Option<WuXing> {
		NAYIN_TABLE.get(self.0 as usize).map(|(_, wx)| *wx)
	}
}

// ================================
// 四柱
// ================================

/// 柱位
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
pub enum ZhuPosition {
	Year,
	Month,
	Day,
	Hour,
}

impl ZhuPosition {
	pub const ALL: [ZhuPosition; 4] =
		[ZhuPosition::Year, ZhuPosition::Month, ZhuPosition::Day, ZhuPosition::Hour];

	pub fn index(self) -> usize {
		self as usize
	}

	/// 年、月、日、时
	pub fn name(self) -> &'static str {
		match self {
			ZhuPosition::Year => "年",
			ZhuPosition::Month => "月",
			ZhuPosition::Day => "日",
			ZhuPosition::Hour => "时",
		}
	}
}

/// 四柱八字（由上游排盘模块提供）
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
pub struct SiZhu {
	pub year: GanZhi,
	pub month: GanZhi,
	pub day: GanZhi,
	pub hour: GanZhi,
}

impl SiZhu {
	pub fn new(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
		Self { year, month, day, hour }
	}

	pub fn zhu(&self, position: ZhuPosition) -> GanZhi {
		match position {
			ZhuPosition::Year => self.year,
			ZhuPosition::Month => self.month,
			ZhuPosition::Day => self.day,
			ZhuPosition::Hour => self.hour,
		}
	}

	/// 按年、月、日、时顺序返回四柱
	pub fn pillars(&self) -> [(ZhuPosition, GanZhi); 4] {
		ZhuPosition::ALL.map(|pos| (pos, self.zhu(pos)))
	}

	/// 日主（日干）
	pub fn rizhu(&self) -> TianGan {
		self.day.gan
	}

	/// 月令（月支）
	pub fn month_zhi(&self) -> DiZhi {
		self.month.zhi
	}

	pub fn gans(&self) -> [TianGan; 4] {
		[self.year.gan, self.month.gan, self.day.gan, self.hour.gan]
	}

	pub fn zhis(&self) -> [DiZhi; 4] {
		[self.year.zhi, self.month.zhi, self.day.zhi, self.hour.zhi]
	}

	pub fn has_invalid_symbol(&self) -> bool {
		self.pillars().iter().any(|(_, gz)| !gz.is_valid())
	}
}

// ================================
// 季节与旺相休囚
// ================================

/// 季节（由月令决定）
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
pub enum JiJie {
	/// 春（寅卯辰）
	Chun,
	/// 夏（巳午未）
	Xia,
	/// 秋（申酉戌）
	Qiu,
	/// 冬（亥子丑）
	Dong,
}

impl JiJie {
	pub fn name(self) -> &'static str {
		match self {
			JiJie::Chun => "春季",
			JiJie::Xia => "夏季",
			JiJie::Qiu => "秋季",
			JiJie::Dong => "冬季",
		}
	}

	/// 某五行在本季的状态
	pub fn state_of(self, wuxing: WuXing) -> WangXiang {
		let row = &JIJIE_WANGXIANG[self as usize];
		let column = row.iter().position(|&wx| wx == wuxing).unwrap_or(WangXiang::Ping as usize);
		WangXiang::ALL[column]
	}

	/// 当令五行（本季处于旺地者）
	pub fn dang_ling(self) -> WuXing {
		JIJIE_WANGXIANG[self as usize][WangXiang::Wang as usize]
	}
}

/// 五行在季节中的状态：旺、相、平、囚、死
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
pub enum WangXiang {
	Wang,
	Xiang,
	Ping,
	Qiu,
	Si,
}

impl WangXiang {
	pub const ALL: [WangXiang; 5] =
		[WangXiang::Wang, WangXiang::Xiang, WangXiang::Ping, WangXiang::Qiu, WangXiang::Si];

	pub fn name(self) -> &'static str {
		match self {
			WangXiang::Wang => "旺",
			WangXiang::Xiang => "相",
			WangXiang::Ping => "平",
			WangXiang::Qiu => "囚",
			WangXiang::Si => "死",
		}
	}
}

// ================================
// 十神
// ================================

/// 十神（另含"日主"与"未知"两个标记）
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
pub enum ShiShen {
	BiJian,
	JieCai,
	ShiShen,
	ShangGuan,
	PianCai,
	ZhengCai,
	QiSha,
	ZhengGuan,
	PianYin,
	ZhengYin,
	/// 与日干完全相同
	RiZhu,
	/// 含无效天干
	#[default]
	Unknown,
}

impl ShiShen {
	pub fn name(self) -> &'static str {
		match self {
			ShiShen::BiJian => "比肩",
			ShiShen::JieCai => "劫财",
			ShiShen::ShiShen => "食神",
			ShiShen::ShangGuan => "伤官",
			ShiShen::PianCai => "偏财",
			ShiShen::ZhengCai => "正财",
			ShiShen::QiSha => "七杀",
			ShiShen::ZhengGuan => "正官",
			ShiShen::PianYin => "偏印",
			ShiShen::ZhengYin => "正印",
			ShiShen::RiZhu => "日主",
			ShiShen::Unknown => "未知",
		}
	}
}

// ================================
// 五行强度
// ================================

/// 单个五行的力量明细（单位 0.01 分）
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
pub struct WuXingStrength {
	/// 天干贡献
	pub tian_gan: i32,
	/// 地支本气贡献
	pub di_zhi: i32,
	/// 藏干贡献
	pub cang_gan: i32,
	/// 纳音贡献
	pub na_yin: i32,
	/// 季节旺相休囚调整
	pub ji_jie: i32,
	/// 合局加成
	pub he_ju: i32,
	/// 六项之和，四舍五入到 0.1 分
	pub total: i32,
}

impl WuXingStrength {
	/// 六项分值之和（未取整）
	pub fn category_sum(&self) -> i32 {
		self.tian_gan
			.saturating_add(self.di_zhi)
			.saturating_add(self.cang_gan)
			.saturating_add(self.na_yin)
			.saturating_add(self.ji_jie)
			.saturating_add(self.he_ju)
	}
}

/// 五行力量全表
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
pub struct WuXingStrengthSet {
	pub jin: WuXingStrength,
	pub mu: WuXingStrength,
	pub shui: WuXingStrength,
	pub huo: WuXingStrength,
	pub tu: WuXingStrength,
}

impl WuXingStrengthSet {
	pub fn get(&self, wuxing: WuXing) -> &WuXingStrength {
		match wuxing {
			WuXing::Jin => &self.jin,
			WuXing::Mu => &self.mu,
			WuXing::Shui => &self.shui,
			WuXing::Huo => &self.huo,
			WuXing::Tu => &self.tu,
		}
	}

	pub fn get_mut(&mut self, wuxing: WuXing) -> &mut WuXingStrength {
		match wuxing {
			WuXing::Jin => &mut self.jin,
			WuXing::Mu => &mut self.mu,
			WuXing::Shui => &mut self.shui,
			WuXing::Huo => &mut self.huo,
			WuXing::Tu => &mut self.tu,
		}
	}

	pub fn total(&self, wuxing: WuXing) -> i32 {
		self.get(wuxing).total
	}

	/// 五行总分之和
	pub fn sum_total(&self) -> i64 {
		WuXing::ALL.iter().map(|&wx| self.total(wx) as i64).sum()
	}

	/// 总分最高的五行（并列时取 金木水火土 顺序靠前者）
	pub fn strongest(&self) -> WuXing {
		let mut best = WuXing::Jin;
		for wx in WuXing::ALL {
			if self.total(wx) > self.total(best) {
				best = wx;
			}
		}
		best
	}
}

// ================================
// 日主旺衰
// ================================

/// 日主旺衰等级（由弱到强排列）
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
	PartialOrd,
	Ord,
	Debug,
	Default,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RiZhuWangShuai {
	JiRuo,
	Ruo,
	PianRuo,
	#[default]
	PingHeng,
	PianWang,
	Wang,
	JiWang,
}

impl RiZhuWangShuai {
	pub const ALL: [RiZhuWangShuai; 7] = [
		RiZhuWangShuai::JiRuo,
		RiZhuWangShuai::Ruo,
		RiZhuWangShuai::PianRuo,
		RiZhuWangShuai::PingHeng,
		RiZhuWangShuai::PianWang,
		RiZhuWangShuai::Wang,
		RiZhuWangShuai::JiWang,
	];

	pub fn name(self) -> &'static str {
		match self {
			RiZhuWangShuai::JiRuo => "极弱",
			RiZhuWangShuai::Ruo => "弱",
			RiZhuWangShuai::PianRuo => "偏弱",
			RiZhuWangShuai::PingHeng => "平衡",
			RiZhuWangShuai::PianWang => "偏旺",
			RiZhuWangShuai::Wang => "旺",
			RiZhuWangShuai::JiWang => "极旺",
		}
	}

	/// 偏旺、旺、极旺
	pub fn is_strong(self) -> bool {
		self > RiZhuWangShuai::PingHeng
	}

	/// 偏弱、弱、极弱
	pub fn is_weak(self) -> bool {
		self < RiZhuWangShuai::PingHeng
	}
}

// ================================
// 格局
// ================================

/// 格局类型
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
pub enum GeJuType {
	CaiGuanShuangMei,
	ShangGuanPeiYin,
	RiYuanJianLu,
	RiYuanJianYuan,
	CongWang,
	CongRuo,
	ZhuanWang,
	ZhengGuan,
	QiSha,
	ZhengCai,
	PianCai,
	ShiShen,
	ShangGuan,
	ZhengYin,
	PianYin,
	BiJian,
	JieCai,
	/// 兜底格局，没有任何规则成立时使用
	ZaQi,
}

impl GeJuType {
	pub fn name(self) -> &'static str {
		match self {
			GeJuType::CaiGuanShuangMei => "财官双美格",
			GeJuType::ShangGuanPeiYin => "伤官佩印格",
			GeJuType::RiYuanJianLu => "日元建禄格",
			GeJuType::RiYuanJianYuan => "日元建元格",
			GeJuType::CongWang => "从旺格",
			GeJuType::CongRuo => "从弱格",
			GeJuType::ZhuanWang => "专旺格",
			GeJuType::ZhengGuan => "正官格",
			GeJuType::QiSha => "七杀格",
			GeJuType::ZhengCai => "正财格",
			GeJuType::PianCai => "偏财格",
			GeJuType::ShiShen => "食神格",
			GeJuType::ShangGuan => "伤官格",
			GeJuType::ZhengYin => "正印格",
			GeJuType::PianYin => "偏印格",
			GeJuType::BiJian => "比肩格",
			GeJuType::JieCai => "劫财格",
			GeJuType::ZaQi => "杂气格",
		}
	}
}

/// 格局候选
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GeJuCandidate {
	pub ge_ju: GeJuType,
	/// 说明文字
	pub detail: String,
	/// 成格强度（0-100）
	pub strength: u8,
	/// 排序优先级，生成时为 0，由选择器填写
	pub priority: u8,
}

/// 格局判定依据
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GeJuFactor {
	pub factor: String,
	pub description: String,
	/// 影响程度（0-100）
	pub contribution: u8,
}

/// 用神（以十神类别或当令五行表示）
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
pub enum YongShen {
	/// 印星
	YinXing,
	/// 官杀
	GuanSha,
	/// 财星
	CaiXing,
	/// 食伤
	ShiShang,
	/// 比劫
	BiJie,
	/// 财星与官星
	CaiGuan,
	/// 伤官配印
	ShangGuanYin,
	/// 日元本气
	RiYuan,
	/// 身强：财官食伤
	CaiGuanShiShang,
	/// 身弱：印比劫
	YinBiJie,
	/// 中和：月令当令五行，月令无效时为 `None`
	YueLingDangLing(Option<WuXing>),
}

impl YongShen {
	pub fn name(self) -> &'static str {
		match self {
			YongShen::YinXing => "印星",
			YongShen::GuanSha => "官杀",
			YongShen::CaiXing => "财星",
			YongShen::ShiShang => "食伤",
			YongShen::BiJie => "比劫",
			YongShen::CaiGuan => "财官",
			YongShen::ShangGuanYin => "伤官配印",
			YongShen::RiYuan => "日元",
			YongShen::CaiGuanShiShang => "财官食伤",
			YongShen::YinBiJie => "印比劫",
			YongShen::YueLingDangLing(_) => "月令当令",
		}
	}

	/// 将用神类别落实为具体五行
	pub fn elements(self, rizhu: WuXing) -> Vec<WuXing> {
		let yin = rizhu.sheng_wo();
		let guan = rizhu.ke_wo();
		let cai = rizhu.ke();
		let shishang = rizhu.sheng();
		match self {
			YongShen::YinXing => vec![yin],
			YongShen::GuanSha => vec![guan],
			YongShen::CaiXing => vec![cai],
			YongShen::ShiShang => vec![shishang],
			YongShen::BiJie | YongShen::RiYuan => vec![rizhu],
			YongShen::CaiGuan => vec![cai, guan],
			YongShen::ShangGuanYin => vec![shishang, yin],
			YongShen::CaiGuanShiShang => vec![cai, guan, shishang],
			YongShen::YinBiJie => vec![yin, rizhu],
			YongShen::YueLingDangLing(wx) => wx.into_iter().collect(),
		}
	}
}

/// 格局判定结果
#[derive(Clone, Encode, Decode, DecodeWithMemTracking, TypeInfo, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GeJuResult {
	/// 主格局
	pub main: GeJuCandidate,
	/// 辅助格局（已排序，可能为空）
	pub auxiliary: Vec<GeJuCandidate>,
	/// 日主旺衰
	pub wang_shuai: RiZhuWangShuai,
	pub yong_shen: YongShen,
	pub yong_shen_detail: String,
	/// 判定依据（仅用于解释，不参与排序）
	pub factors: Vec<GeJuFactor>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tiangan_from_char() {
		assert_eq!(TianGan::from_char('甲'), Some(TianGan(0)));
		assert_eq!(TianGan::from_char('癸'), Some(TianGan(9)));
		assert_eq!(TianGan::from_char('子'), None);
		for c in "甲乙丙丁戊己庚辛壬癸".chars() {
			let gan = TianGan::from_char(c).expect("天干");
			assert_eq!(gan.name().chars().next(), Some(c));
		}
	}

	#[test]
	fn test_dizhi_from_char() {
		assert_eq!(DiZhi::from_char('子'), Some(DiZhi(0)));
		assert_eq!(DiZhi::from_char('亥'), Some(DiZhi(11)));
		assert_eq!(DiZhi::from_char('甲'), None);
	}

	#[test]
	fn test_shengxiao() {
		assert_eq!(DiZhi(0).shengxiao(), Some("鼠"));
		assert_eq!(DiZhi::from_char('寅').and_then(|z| z.shengxiao()), Some("虎"));
		assert_eq!(DiZhi(11).shengxiao(), Some("猪"));
		assert_eq!(DiZhi(12).shengxiao(), None);
	}
}
