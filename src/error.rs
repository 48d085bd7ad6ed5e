//! 読み込み時のエラー型。
//! 不正なデータは値を補正せず、読み込みの時点で拒否する。

use thiserror::Error;

use crate::battalion::Stat;
use crate::paralogue::ParalogueRoute;

/// データセット読み込み時のエラー。
#[derive(Error, Debug)]
pub enum Error {
    /// JSON の構文エラー、またはレコードの形の不一致 (必須フィールドの欠落、型違いなど)。
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JS の値からの変換に失敗した場合。
    #[error("JS value conversion error: {0}")]
    Bridge(#[from] serde_wasm_bindgen::Error),

    /// 個々のレコードの形が不正な場合。`index` はデータセット内の位置。
    #[error("battalion #{index} is malformed: {source}")]
    Record {
        index: usize,
        source: serde_json::Error,
    },

    /// JS から渡された配列のうち、個々の要素の形が不正な場合。
    #[error("battalion #{index} is malformed: {source}")]
    JsRecord {
        index: usize,
        source: serde_wasm_bindgen::Error,
    },

    #[error("battalion #{index} ({name:?}) is invalid: {source}")]
    Invalid {
        index: usize,
        name: String,
        source: ValidationError,
    },

    #[error("duplicate battalion {name:?} at #{first} and #{second}")]
    DuplicateBattalion {
        name: String,
        first: usize,
        second: usize,
    },
}

/// デシリアライズでは表現できない制約の違反。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("battalion name is empty")]
    EmptyName,

    #[error("stat {stat} is not a finite number")]
    NonFiniteStat { stat: Stat },

    #[error("paralogue character #{index} has an empty name")]
    EmptyCharacterName { index: usize },

    #[error("paralogue chapter range on {route} is inverted: start {start} > end {end}")]
    InvertedChapterRange {
        route: ParalogueRoute,
        start: u32,
        end: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
