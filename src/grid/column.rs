use serde::{Serialize, Serializer};

use crate::battalion::{Route, Stat};

/// グリッドの列定義。
/// `field` は `GridRow` をシリアライズしたときのキー名と一致しなければならない。
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub field: String,
    pub header_name: String,
    pub sortable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ColumnFilter>,
}

impl ColumnDef {
    pub fn new(field: &str, header_name: &str) -> Self {
        Self {
            field: field.to_owned(),
            header_name: header_name.to_owned(),
            sortable: true,
            filter: None,
        }
    }

    pub fn filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// 列ごとのフィルタの種類。
/// グリッド側の組み込みフィルタ名に変換して渡す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFilter {
    Text,
    Number,
    /// グリッドにセルの型から推論させる (真偽値の列など)。
    Inferred,
}

impl Serialize for ColumnFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnFilter::Text => serializer.serialize_str("agTextColumnFilter"),
            ColumnFilter::Number => serializer.serialize_str("agNumberColumnFilter"),
            ColumnFilter::Inferred => serializer.serialize_bool(true),
        }
    }
}

/// グリッドの設定。表示する列とその順序を持つ。
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub column_defs: Vec<ColumnDef>,
}

impl GridConfig {
    pub fn new(column_defs: Vec<ColumnDef>) -> Self {
        Self { column_defs }
    }
}

impl Default for GridConfig {
    /// 大隊表の標準の列構成。
    fn default() -> Self {
        let mut columns = vec![
            ColumnDef::new("battalion", "Battalion").filter(ColumnFilter::Text),
            ColumnDef::new("authority", "Authority").filter(ColumnFilter::Text),
        ];
        columns.extend(
            Stat::ALL
                .iter()
                .map(|s| ColumnDef::new(s.key(), &s.to_string()).filter(ColumnFilter::Number)),
        );
        columns.push(ColumnDef::new("movement", "Movement").filter(ColumnFilter::Text));
        columns.push(ColumnDef::new("gambit", "Gambit").filter(ColumnFilter::Text));
        columns.extend(
            Route::ALL
                .iter()
                .map(|r| ColumnDef::new(r.key(), &r.key().to_uppercase()).filter(ColumnFilter::Inferred)),
        );
        columns.push(ColumnDef::new("hasParalogue", "Paralogue").filter(ColumnFilter::Inferred));
        columns.push(ColumnDef::new("firstShopChapter", "Shop Chapter").filter(ColumnFilter::Number));
        columns.push(ColumnDef::new("cheapestPrice", "Price").filter(ColumnFilter::Number));
        columns.push(ColumnDef::new("notes", "Notes").unsortable());
        Self::new(columns)
    }
}
