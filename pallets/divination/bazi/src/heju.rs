//! # 合局检测
//!
//! - 天干五合：四干两两配对，逐对检查
//! - 地支三合、三会：四支中出现某局的两个或三个不同成员即成局，
//!   三个齐全为"完整"，仅两个为"半合"

use sp_std::prelude::*;

use crate::constants::{DIZHI_SANHE, DIZHI_SANHUI, TIANGAN_WUHE};
use crate::types::{DiZhi, TianGan, WuXing};

/// 天干五合
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TianGanWuHe {
	/// 参与合化的两干所在柱位（年 0、月 1、日 2、时 3）
	pub positions: (usize, usize),
	/// 化神
	pub wuxing: WuXing,
}

/// 地支合局种类
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeJuKind {
	/// 三合局
	SanHe,
	/// 三会局
	SanHui,
}

impl HeJuKind {
	pub fn name(self) -> &'static str {
		match self {
			HeJuKind::SanHe => "三合局",
			HeJuKind::SanHui => "三会局",
		}
	}
}

/// 地支合局
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiZhiHeJu {
	pub kind: HeJuKind,
	pub members: [DiZhi; 3],
	pub wuxing: WuXing,
	/// 三支齐全
	pub full: bool,
}

impl DiZhiHeJu {
	/// 如 "寅午戌"
	pub fn members_name(&self) -> alloc::string::String {
		self.members.iter().map(|z| z.name()).collect()
	}
}

/// 检查两个天干是否五合，返回化神
pub fn tiangan_wuhe(a: TianGan, b: TianGan) -> Option<WuXing> {
	TIANGAN_WUHE
		.iter()
		.find(|(x, y, _)| (a.0 == *x && b.0 == *y) || (a.0 == *y && b.0 == *x))
		.map(|(_, _, wx)| *wx)
}

/// 四干中所有五合组合（按柱位顺序）
pub fn detect_tiangan_wuhe(gans: &[TianGan; 4]) -> Vec<TianGanWuHe> {
	let mut result = Vec::new();
	for i in 0..gans.len() {
		for j in (i + 1)..gans.len() {
			if let Some(wuxing) = tiangan_wuhe(gans[i], gans[j]) {
				result.push(TianGanWuHe { positions: (i, j), wuxing });
			}
		}
	}
	result
}

/// 四支中所有成立的三合、三会局（先三合后三会，各按表序）
pub fn detect_dizhi_heju(zhis: &[DiZhi; 4]) -> Vec<DiZhiHeJu> {
	let sanhe = DIZHI_SANHE.iter().map(|entry| (HeJuKind::SanHe, entry));
	let sanhui = DIZHI_SANHUI.iter().map(|entry| (HeJuKind::SanHui, entry));

	sanhe
		.chain(sanhui)
		.filter_map(|(kind, (members, wuxing))| {
			let present = members.iter().filter(|&&m| zhis.iter().any(|z| z.0 == m)).count();
			(present >= 2).then(|| DiZhiHeJu {
				kind,
				members: members.map(DiZhi),
				wuxing: *wuxing,
				full: present == 3,
			})
		})
		.collect()
}
