use std::collections::HashMap;

use log::{debug, error, info};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::battalion::{Battalion, Route};
use crate::error::{Error, Result};

/// 検証済みの大隊レコードの列。
/// 起動時に一度だけ読み込まれ、順序はデータ上の順序のまま保持される。
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Battalion>,
}

impl Dataset {
    /// JSON 配列からデータセットを読み込む。
    /// 最初に見つかった不正なレコードで読み込みを中断する。
    ///
    /// 各レコードは元の文字列のまま型に読み込む。
    /// 一度 `Value` を経由すると重複したキーが後勝ちで潰れてしまうため。
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<&RawValue> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                serde_json::from_str::<Battalion>(raw.get()).map_err(|source| {
                    error!("Failed to parse battalion #{}: {}", index, source);
                    Error::Record { index, source }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_records(records)
    }

    /// デシリアライズ済みのレコードを検証してデータセットにする。
    ///
    /// 修正不能な例外
    /// - レコード単体の検証に失敗
    /// - 大隊名の重複 (前後の空白は無視して比較する)
    pub fn from_records(records: Vec<Battalion>) -> Result<Self> {
        Self::check_records(&records)?;
        info!("Loaded {} battalions", records.len());
        Ok(Self { records })
    }

    fn check_records(records: &[Battalion]) -> Result<()> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
        for (index, battalion) in records.iter().enumerate() {
            debug!("Validating battalion #{}: {}", index, battalion.name());
            if let Err(source) = battalion.validate() {
                error!("Battalion #{} is invalid: {}", index, source);
                return Err(Error::Invalid {
                    index,
                    name: battalion.name().to_owned(),
                    source,
                });
            }
            if let Some(first) = seen.insert(battalion.name().trim(), index) {
                error!("Duplicate battalion: {}", battalion.name());
                return Err(Error::DuplicateBattalion {
                    name: battalion.name().to_owned(),
                    first,
                    second: index,
                });
            }
        }
        Ok(())
    }

    /// データセットを JSON 配列として書き出す。
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Battalion> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Battalion] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Battalion> {
        self.records
    }

    /// 大隊名で検索する。
    pub fn get(&self, name: &str) -> Option<&Battalion> {
        self.records.iter().find(|b| b.name() == name)
    }

    /// 指定のルートで入手可能な大隊を列挙する。
    pub fn available_on(&self, route: Route) -> impl Iterator<Item = &Battalion> + '_ {
        self.records.iter().filter(move |b| b.is_available_on(route))
    }

    /// 外伝に関わる大隊を列挙する。
    pub fn with_paralogue(&self) -> impl Iterator<Item = &Battalion> + '_ {
        self.records.iter().filter(|b| !b.is_standalone())
    }

    pub fn standalone(&self) -> impl Iterator<Item = &Battalion> + '_ {
        self.records.iter().filter(|b| b.is_standalone())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Battalion;
    type IntoIter = std::slice::Iter<'a, Battalion>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::paralogue::ParalogueRoute;
    use serde_json::{json, Value};

    fn record(name: &str, cf: bool, paralogue: Option<Value>) -> Value {
        let mut value = json!({
            "battalion": name,
            "authority": "Authority D",
            "phys": 2,
            "mag": null,
            "hit": 5,
            "crit": null,
            "avo": null,
            "prot": 1,
            "res": null,
            "cha": 3,
            "movement": "0",
            "gambit": "Group Assault",
            "cf": cf,
            "ss": true,
            "am": false,
            "vw": false,
            "shop": []
        });
        if let Some(p) = paralogue {
            value["paralogue"] = p;
        }
        value
    }

    fn paralogue(start: u32, end: u32) -> Value {
        json!({
            "characters": [{ "name": "Lorenz", "required": true }],
            "chapters": { "wc": { "start": start, "end": end } }
        })
    }

    #[test]
    fn loads_and_queries_in_data_order() {
        let json = json!([
            record("Gloucester Knights", true, Some(paralogue(6, 11))),
            record("Leicester Mercenaries", false, None),
            record("Black Eagle Pegasus Co.", true, None),
        ])
        .to_string();
        let dataset = Dataset::from_json_str(&json).unwrap();

        assert_eq!(dataset.len(), 3);
        let names = dataset.iter().map(|b| b.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Gloucester Knights", "Leicester Mercenaries", "Black Eagle Pegasus Co."]
        );
        assert_eq!(dataset.available_on(Route::Cf).count(), 2);
        assert_eq!(dataset.available_on(Route::Am).count(), 0);
        assert_eq!(dataset.with_paralogue().count(), 1);
        assert_eq!(dataset.standalone().count(), 2);
        assert!(dataset.get("Leicester Mercenaries").unwrap().is_standalone());
        assert!(dataset.get("Nonexistent").is_none());
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        let dataset = Dataset::from_json_str("[]").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn malformed_record_reports_its_index() {
        let mut bad = record("Second", true, None);
        bad.as_object_mut().unwrap().remove("authority");
        let json = json!([record("First", true, None), bad]).to_string();

        match Dataset::from_json_str(&json) {
            Err(Error::Record { index, source }) => {
                assert_eq!(index, 1);
                assert!(source.to_string().contains("authority"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn duplicate_stat_key_is_not_collapsed() {
        let one = record("Doubled", true, None).to_string();
        let doubled = one.replacen("\"phys\":2", "\"phys\":1,\"phys\":9", 1);
        assert_ne!(one, doubled);

        match Dataset::from_json_str(&format!("[{}]", doubled)) {
            Err(Error::Record { index, source }) => {
                assert_eq!(index, 0);
                assert!(source.to_string().contains("duplicate field `phys`"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn duplicate_quest_key_is_not_collapsed() {
        let one = record("Quester", true, None).to_string();
        let with_quest = one.replacen(
            "\"shop\":[]",
            r#""shop":[],"quest":{"a":{"chapter":1},"a":[{"chapter":2,"route":"cf"}]}"#,
            1,
        );
        assert_ne!(one, with_quest);

        let err = Dataset::from_json_str(&format!("[{}]", with_quest)).unwrap_err();
        assert!(matches!(err, Error::Record { index: 0, .. }));
        assert!(err.to_string().contains("duplicate quest key `a`"));
    }

    #[test]
    fn fractional_stats_load_through_the_dataset() {
        let mut value = record("Fractional", true, None);
        value["hit"] = json!(2.5);
        value["phys"] = json!(5.0);
        let dataset = Dataset::from_json_str(&json!([value]).to_string()).unwrap();
        let b = dataset.get("Fractional").unwrap();
        assert_eq!(b.stat(crate::battalion::Stat::Hit), Some(2.5));
        assert_eq!(b.stat(crate::battalion::Stat::Phys), Some(5.0));
    }

    #[test]
    fn names_differing_only_in_whitespace_are_duplicates() {
        let json = json!([record("Eagle", true, None), record("Eagle ", false, None)]).to_string();
        match Dataset::from_json_str(&json) {
            Err(Error::DuplicateBattalion { name, first, second }) => {
                assert_eq!(name, "Eagle ");
                assert_eq!((first, second), (0, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn non_array_input_is_rejected() {
        assert!(matches!(
            Dataset::from_json_str(r#"{ "battalion": "Lone" }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let json = json!([
            record("Twin", true, None),
            record("Other", true, None),
            record("Twin", false, None),
        ])
        .to_string();
        match Dataset::from_json_str(&json) {
            Err(Error::DuplicateBattalion { name, first, second }) => {
                assert_eq!(name, "Twin");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn inverted_paralogue_range_is_rejected() {
        let json = json!([record("Backwards", true, Some(paralogue(9, 3)))]).to_string();
        let err = Dataset::from_json_str(&json).unwrap_err();
        match &err {
            Error::Invalid { index, name, source } => {
                assert_eq!(*index, 0);
                assert_eq!(name, "Backwards");
                assert_eq!(
                    source,
                    &ValidationError::InvertedChapterRange {
                        route: ParalogueRoute::Wc,
                        start: 9,
                        end: 3,
                    }
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("start 9 > end 3"));
    }

    #[test]
    fn written_json_loads_back_to_the_same_dataset() {
        let json = json!([
            record("Gloucester Knights", true, Some(paralogue(6, 11))),
            record("Leicester Mercenaries", false, None),
        ])
        .to_string();
        let dataset = Dataset::from_json_str(&json).unwrap();
        let again = Dataset::from_json_str(&dataset.to_json_string().unwrap()).unwrap();
        assert_eq!(again, dataset);
    }
}
