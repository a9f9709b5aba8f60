//! # 十神计算
//!
//! 以日干为参照，按五行生克与阴阳异同确定其它天干（含藏干）的十神。
//!
//! | 关系 | 同性 | 异性 |
//! |------|------|------|
//! | 同我 | 比肩 | 劫财 |
//! | 我生 | 食神 | 伤官 |
//! | 我克 | 偏财 | 正财 |
//! | 克我 | 七杀 | 正官 |
//! | 生我 | 偏印 | 正印 |

use sp_std::prelude::*;

use crate::types::{DiZhi, ShiShen, SiZhu, TianGan, WuXingGuanXi, ZhuPosition};

/// 财星
pub const CAI_XING: [ShiShen; 2] = [ShiShen::ZhengCai, ShiShen::PianCai];
/// 官杀
pub const GUAN_SHA: [ShiShen; 2] = [ShiShen::ZhengGuan, ShiShen::QiSha];
/// 印星
pub const YIN_XING: [ShiShen; 2] = [ShiShen::ZhengYin, ShiShen::PianYin];
/// 比劫
pub const BI_JIE: [ShiShen; 2] = [ShiShen::BiJian, ShiShen::JieCai];

/// 计算 `other` 相对日干 `rizhu` 的十神
///
/// 两者相同时返回 `ShiShen::RiZhu`，任一无效时返回 `ShiShen::Unknown`。
pub fn calculate_shishen(rizhu: TianGan, other: TianGan) -> ShiShen {
	let (Some(rizhu_wx), Some(other_wx), Some(rizhu_yy), Some(other_yy)) =
		(rizhu.to_wuxing(), other.to_wuxing(), rizhu.yin_yang(), other.yin_yang())
	else {
		return ShiShen::Unknown;
	};

	if rizhu == other {
		return ShiShen::RiZhu;
	}

	match (other_wx.guanxi(rizhu_wx), rizhu_yy == other_yy) {
		(WuXingGuanXi::TongLei, true) => ShiShen::BiJian,
		(WuXingGuanXi::TongLei, false) => ShiShen::JieCai,
		(WuXingGuanXi::WoSheng, true) => ShiShen::ShiShen,
		(WuXingGuanXi::WoSheng, false) => ShiShen::ShangGuan,
		(WuXingGuanXi::WoKe, true) => ShiShen::PianCai,
		(WuXingGuanXi::WoKe, false) => ShiShen::ZhengCai,
		(WuXingGuanXi::KeWo, true) => ShiShen::QiSha,
		(WuXingGuanXi::KeWo, false) => ShiShen::ZhengGuan,
		(WuXingGuanXi::ShengWo, true) => ShiShen::PianYin,
		(WuXingGuanXi::ShengWo, false) => ShiShen::ZhengYin,
	}
}

/// 四柱取格用的十神：日干以外与日干相同的天干（含藏干）按比肩论
fn as_geju_shishen(tag: ShiShen) -> ShiShen {
	match tag {
		ShiShen::RiZhu => ShiShen::BiJian,
		other => other,
	}
}

/// 计算地支各藏干的十神，顺序与藏干一致；无效地支返回空列表
pub fn calculate_canggan_shishen(rizhu: TianGan, zhi: DiZhi) -> Vec<ShiShen> {
	zhi.canggan().iter().map(|&gan| calculate_shishen(rizhu, gan)).collect()
}

/// 四柱十神表
///
/// 日干恒为日主；其余天干与各支藏干中与日干相同者记为比肩。
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SiZhuShiShen {
	/// 年、月、日、时干十神（日干恒为"日主"）
	pub gan: [ShiShen; 4],
	/// 年、月、日、时支藏干十神
	pub canggan: [Vec<ShiShen>; 4],
}

impl SiZhuShiShen {
	pub fn from_sizhu(sizhu: &SiZhu) -> Self {
		let rizhu = sizhu.rizhu();
		let mut gan = sizhu.gans().map(|gan| as_geju_shishen(calculate_shishen(rizhu, gan)));
		gan[ZhuPosition::Day.index()] = calculate_shishen(rizhu, rizhu);
		let canggan = sizhu.zhis().map(|zhi| {
			let tags = calculate_canggan_shishen(rizhu, zhi);
			tags.into_iter().map(as_geju_shishen).collect::<Vec<_>>()
		});
		Self { gan, canggan }
	}

	pub fn gan(&self, position: ZhuPosition) -> ShiShen {
		self.gan[position.index()]
	}

	pub fn canggan(&self, position: ZhuPosition) -> &[ShiShen] {
		&self.canggan[position.index()]
	}

	/// 十神力量（0.01 分）
	///
	/// 年干、时干各 1 分，月干 2 分；藏干每个 0.5 分，月支藏干每个 1 分。
	/// 日干为日主本身，不计。
	pub fn strength(&self, tags: &[ShiShen]) -> u32 {
		let mut total = 0u32;
		for position in ZhuPosition::ALL {
			let (gan_weight, canggan_weight) = match position {
				ZhuPosition::Year | ZhuPosition::Hour => (100, 50),
				ZhuPosition::Month => (200, 100),
				ZhuPosition::Day => (0, 50),
			};
			if tags.contains(&self.gan(position)) {
				total = total.saturating_add(gan_weight);
			}
			let hits = self.canggan(position).iter().filter(|s| tags.contains(*s)).count() as u32;
			total = total.saturating_add(hits.saturating_mul(canggan_weight));
		}
		total
	}

	/// 年、月、时三柱的天干与藏干中出现的十神
	fn visible(&self) -> impl Iterator<Item = &ShiShen> + '_ {
		[ZhuPosition::Year, ZhuPosition::Month, ZhuPosition::Hour].into_iter().flat_map(move |pos| {
			core::iter::once(&self.gan[pos.index()]).chain(self.canggan[pos.index()].iter())
		})
	}

	/// 年、月、时三柱（干及藏干）中是否出现任一指定十神
	pub fn is_present(&self, tags: &[ShiShen]) -> bool {
		self.visible().any(|s| tags.contains(s))
	}

	/// 年、月、时三柱（干及藏干）中指定十神出现的次数
	pub fn count(&self, tags: &[ShiShen]) -> u32 {
		self.visible().filter(|s| tags.contains(*s)).count() as u32
	}
}
