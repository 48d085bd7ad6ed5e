use serde::{Deserialize, Serialize};

/// 本編のルートを表す列挙型。
/// 大隊の入手可否フラグやクエストの発生条件に使われる。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// 紅花の章
    Cf,
    /// 銀雪の章
    Ss,
    /// 蒼月の章
    Am,
    /// 翠風の章
    Vw,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Cf, Route::Ss, Route::Am, Route::Vw];

    /// JSON 上のキー名を取得する。
    pub fn key(&self) -> &'static str {
        match self {
            Route::Cf => "cf",
            Route::Ss => "ss",
            Route::Am => "am",
            Route::Vw => "vw",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Route::Cf => "Crimson Flower",
            Route::Ss => "Silver Snow",
            Route::Am => "Azure Moon",
            Route::Vw => "Verdant Wind",
        };
        write!(f, "{}", s)
    }
}
