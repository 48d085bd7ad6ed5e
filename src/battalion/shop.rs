use serde::{Deserialize, Serialize};

/// ショップでの販売情報。
/// 指定の章から指定の価格で購入可能になることを表す。
/// 同じ大隊が別の章で再登場する場合は複数のエントリを持つ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShopEntry {
    pub chapter: u32,
    pub price: u32,
}
