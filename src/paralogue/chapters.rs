use serde::{Deserialize, Serialize};

/// 外伝が発生しうるルート。
/// 大隊のルートに「共通ルート (白雲の章)」を加えた五種類。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ParalogueRoute {
    /// 白雲の章
    Wc,
    Cf,
    Ss,
    Am,
    Vw,
}

impl ParalogueRoute {
    pub const ALL: [ParalogueRoute; 5] = [
        ParalogueRoute::Wc,
        ParalogueRoute::Cf,
        ParalogueRoute::Ss,
        ParalogueRoute::Am,
        ParalogueRoute::Vw,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ParalogueRoute::Wc => "wc",
            ParalogueRoute::Cf => "cf",
            ParalogueRoute::Ss => "ss",
            ParalogueRoute::Am => "am",
            ParalogueRoute::Vw => "vw",
        }
    }
}

impl From<crate::battalion::Route> for ParalogueRoute {
    fn from(route: crate::battalion::Route) -> Self {
        use crate::battalion::Route;
        match route {
            Route::Cf => ParalogueRoute::Cf,
            Route::Ss => ParalogueRoute::Ss,
            Route::Am => ParalogueRoute::Am,
            Route::Vw => ParalogueRoute::Vw,
        }
    }
}

impl std::fmt::Display for ParalogueRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 外伝が発生する章の範囲 (両端を含む)。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChapterRange {
    pub start: u32,
    pub end: u32,
}

impl ChapterRange {
    pub fn contains(&self, chapter: u32) -> bool {
        self.start <= chapter && chapter <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// ルートごとの発生範囲。キーが無いルートでは外伝は発生しない。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParalogueChapters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wc: Option<ChapterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cf: Option<ChapterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ss: Option<ChapterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    am: Option<ChapterRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vw: Option<ChapterRange>,
}

impl ParalogueChapters {
    pub fn get(&self, route: ParalogueRoute) -> Option<&ChapterRange> {
        match route {
            ParalogueRoute::Wc => self.wc.as_ref(),
            ParalogueRoute::Cf => self.cf.as_ref(),
            ParalogueRoute::Ss => self.ss.as_ref(),
            ParalogueRoute::Am => self.am.as_ref(),
            ParalogueRoute::Vw => self.vw.as_ref(),
        }
    }

    /// 設定されているルートと範囲を列挙する。
    pub fn iter(&self) -> impl Iterator<Item = (ParalogueRoute, &ChapterRange)> + '_ {
        IntoIterator::into_iter(ParalogueRoute::ALL)
            .filter_map(move |r| self.get(r).map(|range| (r, range)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
