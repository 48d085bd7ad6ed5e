use std::fmt;

use indexmap::IndexMap;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::battalion::route::Route;

/// クエスト ID からクエストの発生条件への対応表。
/// キーは自由な文字列として扱い、列挙はしない。データ上の順序を保持する。
pub type Quests = IndexMap<String, QuestSteps>;

/// クエストの発生条件。
///
/// データ上は判別用のフィールドを持たず、形で区別される。
/// - 配列: ルートごとに発生する章が異なる (`Routed`)
/// - 単一のオブジェクト: ルートに関係なく同じ章で発生する (`Anytime`)
///
/// それ以外の形は読み込み時に拒否する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestSteps {
    Routed(Vec<RoutedStep>),
    Anytime(ChapterStep),
}

/// 特定のルートで、特定の章に発生するクエストの段階。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoutedStep {
    pub chapter: u32,
    pub route: Route,
}

/// ルートに関係なく発生するクエストの段階。
/// `route` を含むオブジェクトは第三の形とみなして拒否する。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChapterStep {
    pub chapter: u32,
}

impl QuestSteps {
    /// 指定のルートでこのクエストが発生するかどうかを判定する。
    pub fn occurs_on(&self, route: Route) -> bool {
        self.chapter_on(route).is_some()
    }

    /// 指定のルートでの発生章を取得する。
    /// `Routed` で同じルートが複数ある場合は最初のものを返す。
    pub fn chapter_on(&self, route: Route) -> Option<u32> {
        match self {
            QuestSteps::Routed(steps) => steps
                .iter()
                .find(|s| s.route == route)
                .map(|s| s.chapter),
            QuestSteps::Anytime(step) => Some(step.chapter),
        }
    }

    /// 発生する章をデータ上の順序で列挙する。
    pub fn chapters(&self) -> Vec<u32> {
        match self {
            QuestSteps::Routed(steps) => steps.iter().map(|s| s.chapter).collect(),
            QuestSteps::Anytime(step) => vec![step.chapter],
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self, QuestSteps::Routed(_))
    }
}

impl Serialize for QuestSteps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuestSteps::Routed(steps) => steps.serialize(serializer),
            QuestSteps::Anytime(step) => step.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for QuestSteps {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuestStepsVisitor)
    }
}

/// クエスト表を読む。同じキーが二度現れた場合は後勝ちにせず拒否する。
pub(crate) fn unique_quests<'de, D>(deserializer: D) -> Result<Option<Quests>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<UniqueQuests>::deserialize(deserializer)?.map(|q| q.0))
}

struct UniqueQuests(Quests);

impl<'de> Deserialize<'de> for UniqueQuests {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UniqueQuestsVisitor)
    }
}

struct UniqueQuestsVisitor;

impl<'de> Visitor<'de> for UniqueQuestsVisitor {
    type Value = UniqueQuests;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from quest id to quest steps")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut quests = Quests::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if quests.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate quest key `{}`", key)));
            }
            let steps = map.next_value::<QuestSteps>()?;
            quests.insert(key, steps);
        }
        Ok(UniqueQuests(quests))
    }
}

struct QuestStepsVisitor;

impl<'de> Visitor<'de> for QuestStepsVisitor {
    type Value = QuestSteps;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of {chapter, route} steps or a single {chapter} object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<RoutedStep>::deserialize(SeqAccessDeserializer::new(seq)).map(QuestSteps::Routed)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        ChapterStep::deserialize(MapAccessDeserializer::new(map)).map(QuestSteps::Anytime)
    }
}
