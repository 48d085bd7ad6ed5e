//! 表示側 (データグリッド) との契約。
//! グリッド本体はホストページ側にあり、ここでは列定義と行データを組み立てるだけ。

use serde::Serialize;

use crate::dataset::Dataset;

mod column;
pub use column::{ColumnDef, ColumnFilter, GridConfig};

mod row;
pub use row::GridRow;

/// グリッドに一度に渡す列定義と行データ。
/// 行はデータセットの順序のまま並ぶ。並べ替えや絞り込みはグリッド側が行う。
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub column_defs: Vec<ColumnDef>,
    pub row_data: Vec<GridRow>,
}

impl GridOptions {
    pub fn new(config: &GridConfig, dataset: &Dataset) -> Self {
        Self {
            column_defs: config.column_defs.clone(),
            row_data: dataset.iter().map(GridRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn dataset() -> Dataset {
        let json = json!([
            {
                "battalion": "Eagle",
                "authority": "Knight",
                "phys": 5, "mag": null, "hit": 10, "crit": null,
                "avo": 0, "prot": 2, "res": null, "cha": 5,
                "movement": "-1",
                "gambit": "Eagle Strike",
                "cf": true, "ss": false, "am": false, "vw": true,
                "shop": [{ "chapter": 3, "price": 500 }],
                "quest": { "step1": { "chapter": 4 } }
            },
            {
                "battalion": "Blue Lion Knights",
                "authority": "Authority B",
                "phys": 6, "mag": 2, "hit": 10, "crit": null,
                "avo": null, "prot": 3, "res": 2, "cha": 5,
                "movement": "0",
                "gambit": "Rally",
                "cf": false, "ss": false, "am": true, "vw": false,
                "notes": "House leader only",
                "paralogue": {
                    "characters": [
                        { "name": "Dimitri", "required": true },
                        { "name": "Dedue", "required": false }
                    ],
                    "chapters": { "am": { "start": 13, "end": 17 } }
                },
                "shop": [],
                "quest": { "hunt": [{ "chapter": 14, "route": "am" }] }
            }
        ])
        .to_string();
        Dataset::from_json_str(&json).unwrap()
    }

    #[test]
    fn standalone_battalion_has_no_paralogue_indicator() {
        let options = GridOptions::new(&GridConfig::default(), &dataset());
        let eagle = &options.row_data[0];
        assert_eq!(eagle.battalion, "Eagle");
        assert!(!eagle.has_paralogue);
        assert_eq!(eagle.paralogue_characters, None);
        assert_eq!(eagle.mag, None);
        assert_eq!(eagle.avo, Some(0.0));
        assert_eq!(eagle.first_shop_chapter, Some(3));
        assert_eq!(eagle.cheapest_price, Some(500));
    }

    #[test]
    fn paralogue_battalion_is_marked() {
        let options = GridOptions::new(&GridConfig::default(), &dataset());
        let lions = &options.row_data[1];
        assert!(lions.has_paralogue);
        assert_eq!(lions.paralogue_characters.as_deref(), Some("Dimitri, Dedue"));
        assert_eq!(lions.first_shop_chapter, None);
        assert_eq!(lions.notes.as_deref(), Some("House leader only"));
    }

    #[test]
    fn every_default_column_points_at_a_row_field() {
        let options = GridOptions::new(&GridConfig::default(), &dataset());
        let value = serde_json::to_value(&options).unwrap();
        let row = value["rowData"][0].as_object().unwrap();
        for column in value["columnDefs"].as_array().unwrap() {
            let field = column["field"].as_str().unwrap();
            assert!(row.contains_key(field), "missing row field {}", field);
        }
        assert_eq!(row["mag"], Value::Null);
        assert_eq!(row["hasParalogue"], json!(false));
    }
}
