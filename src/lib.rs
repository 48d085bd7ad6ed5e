use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod battalion;
mod dataset;
mod error;
mod grid;
pub mod interface;
mod paralogue;
mod utils;

pub use crate::dataset::Dataset;
pub use crate::error::{Error, Result, ValidationError};

static INIT: std::sync::Once = std::sync::Once::new();

fn initialize() {
    INIT.call_once(|| {
        utils::set_panic_hook();
        wasm_logger::init(wasm_logger::Config::default()); // ロガー初期化
        info!("Logger initialized");
    });
}

/// JS の値を返す。`null` は `undefined` にせず、マップは素のオブジェクトにする。
fn to_js<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// JS 配列の要素を変換せずに受け取るための入れ物。
/// 要素ごとに変換することで、エラーに位置を含められる。
#[derive(Deserialize)]
struct JsRecord(#[serde(with = "serde_wasm_bindgen::preserve")] JsValue);

fn load(data: JsValue) -> Result<Dataset> {
    let elements = serde_wasm_bindgen::from_value::<Vec<JsRecord>>(data).map_err(|err| {
        error!("Failed to read battalion array: {:?}", err);
        Error::from(err)
    })?;
    debug!("Received {} battalion records", elements.len());

    let records = elements
        .into_iter()
        .enumerate()
        .map(|(index, JsRecord(value))| {
            serde_wasm_bindgen::from_value::<interface::Battalion>(value).map_err(|source| {
                error!("Failed to parse battalion #{}: {}", index, source);
                Error::JsRecord { index, source }
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Dataset::from_records(records)
}

/// 大隊レコードの配列を検証し、正規化したものを返す。
/// 不正なレコードがあれば、その内容を含む Error を投げる。
#[wasm_bindgen(js_name = loadBattalions)]
pub fn load_battalions(data: JsValue) -> std::result::Result<JsValue, JsError> {
    initialize();
    web_sys::console::time_with_label("loadBattalions");

    let dataset = load(data);

    web_sys::console::time_end_with_label("loadBattalions");
    to_js(&dataset?)
}

/// JSON 文字列で渡された大隊レコードを検証する。
#[wasm_bindgen(js_name = loadBattalionsJson)]
pub fn load_battalions_json(json: &str) -> std::result::Result<JsValue, JsError> {
    initialize();
    let dataset = Dataset::from_json_str(json)?;
    to_js(&dataset)
}

/// 大隊レコードを検証し、グリッドにそのまま渡せる `{ columnDefs, rowData }` を返す。
#[wasm_bindgen(js_name = gridOptions)]
pub fn grid_options(data: JsValue) -> std::result::Result<JsValue, JsError> {
    initialize();

    let dataset = load(data)?;
    let options = interface::GridOptions::new(&interface::GridConfig::default(), &dataset);
    info!("Built grid options: {} rows", options.row_data.len());
    to_js(&options)
}

/// 標準の列定義を返す。
#[wasm_bindgen(js_name = defaultColumnDefs)]
pub fn default_column_defs() -> std::result::Result<JsValue, JsError> {
    initialize();
    to_js(&interface::GridConfig::default().column_defs)
}
