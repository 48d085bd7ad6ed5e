use itertools::Itertools;
use serde::Serialize;

use crate::battalion::{Battalion, Route, Stat};

/// グリッドに渡す一行分のデータ。
/// 大隊レコードを平坦化したもので、ステータスは null のまま渡す。
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub battalion: String,
    pub authority: String,
    pub phys: Option<f64>,
    pub mag: Option<f64>,
    pub hit: Option<f64>,
    pub crit: Option<f64>,
    pub avo: Option<f64>,
    pub prot: Option<f64>,
    pub res: Option<f64>,
    pub cha: Option<f64>,
    pub movement: String,
    pub gambit: String,
    pub cf: bool,
    pub ss: bool,
    pub am: bool,
    pub vw: bool,
    /// 外伝に関わるかどうか。単独の大隊では false。
    pub has_paralogue: bool,
    /// 外伝に関わるキャラクター名を表示順に連結したもの。
    pub paralogue_characters: Option<String>,
    pub first_shop_chapter: Option<u32>,
    pub cheapest_price: Option<u32>,
    pub notes: Option<String>,
    pub special: Option<String>,
}

impl From<&Battalion> for GridRow {
    fn from(b: &Battalion) -> Self {
        Self {
            battalion: b.name().to_owned(),
            authority: b.authority().to_owned(),
            phys: b.stat(Stat::Phys),
            mag: b.stat(Stat::Mag),
            hit: b.stat(Stat::Hit),
            crit: b.stat(Stat::Crit),
            avo: b.stat(Stat::Avo),
            prot: b.stat(Stat::Prot),
            res: b.stat(Stat::Res),
            cha: b.stat(Stat::Cha),
            movement: b.movement().to_owned(),
            gambit: b.gambit().to_owned(),
            cf: b.is_available_on(Route::Cf),
            ss: b.is_available_on(Route::Ss),
            am: b.is_available_on(Route::Am),
            vw: b.is_available_on(Route::Vw),
            has_paralogue: !b.is_standalone(),
            paralogue_characters: b
                .paralogue()
                .map(|p| p.characters().iter().map(|c| c.name.as_str()).join(", ")),
            first_shop_chapter: b.earliest_shop_entry().map(|e| e.chapter),
            cheapest_price: b.cheapest_price(),
            notes: b.notes().map(str::to_owned),
            special: b.special().map(str::to_owned),
        }
    }
}
