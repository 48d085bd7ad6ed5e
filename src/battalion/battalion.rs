use log::warn;
use serde::{Deserialize, Serialize};

use crate::battalion::quest::{unique_quests, QuestSteps, Quests};
use crate::battalion::route::Route;
use crate::battalion::shop::ShopEntry;
use crate::battalion::stat::{nullable, Stat};
use crate::error::ValidationError;
use crate::paralogue::Paralogue;

/// 大隊を表す不変の構造体。
/// データセットから一度だけ読み込まれ、以後変更されない。
///
/// 戦闘ステータスは「値なし」と「0」を区別する。
/// キー自体は必須で、該当しない場合は null が入る。
/// 各フィールドはゲッターメソッドを通じてのみアクセス可能。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Battalion {
    battalion: String,
    authority: String,

    #[serde(deserialize_with = "nullable")]
    phys: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    mag: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    hit: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    crit: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    avo: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    prot: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    res: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    cha: Option<f64>,

    movement: String,
    gambit: String,

    cf: bool,
    ss: bool,
    am: bool,
    vw: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paralogue: Option<Paralogue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    special: Option<String>,

    shop: Vec<ShopEntry>,
    #[serde(
        default,
        deserialize_with = "unique_quests",
        skip_serializing_if = "Option::is_none"
    )]
    quest: Option<Quests>,
}

impl Battalion {
    // attributes getters
    /// 大隊名を取得する。データセット内で一意。
    pub fn name(&self) -> &str {
        &self.battalion
    }
    /// 指揮に必要な技能を取得する。
    pub fn authority(&self) -> &str {
        &self.authority
    }
    pub fn movement(&self) -> &str {
        &self.movement
    }
    /// 計略名を取得する。
    pub fn gambit(&self) -> &str {
        &self.gambit
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
    pub fn special(&self) -> Option<&str> {
        self.special.as_deref()
    }

    // status getters
    /// 戦闘ステータスを取得する。該当しない場合は None を返す (0 とは区別される)。
    pub fn stat(&self, stat: Stat) -> Option<f64> {
        match stat {
            Stat::Phys => self.phys,
            Stat::Mag => self.mag,
            Stat::Hit => self.hit,
            Stat::Crit => self.crit,
            Stat::Avo => self.avo,
            Stat::Prot => self.prot,
            Stat::Res => self.res,
            Stat::Cha => self.cha,
        }
    }

    /// 全ステータスを表示順で取得する。
    pub fn stats(&self) -> Vec<(Stat, Option<f64>)> {
        Stat::ALL.iter().map(|s| (*s, self.stat(*s))).collect()
    }

    // route getters
    /// 指定のルートで入手可能かどうかを判定する。
    pub fn is_available_on(&self, route: Route) -> bool {
        match route {
            Route::Cf => self.cf,
            Route::Ss => self.ss,
            Route::Am => self.am,
            Route::Vw => self.vw,
        }
    }

    /// 入手可能なルートを列挙する。
    pub fn routes(&self) -> Vec<Route> {
        Route::ALL
            .iter()
            .copied()
            .filter(|r| self.is_available_on(*r))
            .collect()
    }

    // paralogue
    pub fn paralogue(&self) -> Option<&Paralogue> {
        self.paralogue.as_ref()
    }

    /// 外伝に関わらない単独の大隊かどうかを判定する。
    pub fn is_standalone(&self) -> bool {
        self.paralogue.is_none()
    }

    // shop
    /// 販売情報をデータ上の順序で取得する。
    pub fn shop(&self) -> &[ShopEntry] {
        &self.shop
    }

    /// 最も早い章の販売情報を取得する。同じ章が複数ある場合は先に書かれたもの。
    pub fn earliest_shop_entry(&self) -> Option<&ShopEntry> {
        self.shop.iter().min_by_key(|e| e.chapter)
    }

    /// 最安値を取得する。ショップに並ばない場合は None。
    pub fn cheapest_price(&self) -> Option<u32> {
        self.shop.iter().map(|e| e.price).min()
    }

    // quest
    pub fn quest(&self) -> Option<&Quests> {
        self.quest.as_ref()
    }

    pub fn quest_steps(&self, key: &str) -> Option<&QuestSteps> {
        self.quest.as_ref().and_then(|q| q.get(key))
    }

    /// デシリアライズ後のデータの妥当性を検証する。
    /// 型で表現できない制約のみを扱い、値の補正は行わない。
    ///
    /// 修正不能な例外
    /// - 大隊名が空
    /// - ステータスが有限の数値でない (JS 側から NaN や Infinity が渡された場合)
    /// - 外伝の検証に失敗
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.battalion.trim().is_empty() {
            warn!("Battalion name is empty: {:?}", self);
            return Err(ValidationError::EmptyName);
        }
        if let Some((stat, value)) = self
            .stats()
            .into_iter()
            .find_map(|(s, v)| v.filter(|v| !v.is_finite()).map(|v| (s, v)))
        {
            warn!("Stat {} of {} is not finite: {}", stat, self.battalion, value);
            return Err(ValidationError::NonFiniteStat { stat });
        }
        if let Some(paralogue) = &self.paralogue {
            paralogue.validate()?;
        }
        Ok(())
    }
}
