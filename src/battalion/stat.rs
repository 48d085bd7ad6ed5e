use serde::{Deserialize, Deserializer};

/// 大隊の戦闘ステータスの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Phys,
    Mag,
    Hit,
    Crit,
    Avo,
    Prot,
    Res,
    Cha,
}

impl Stat {
    pub const ALL: [Stat; 8] = [
        Stat::Phys,
        Stat::Mag,
        Stat::Hit,
        Stat::Crit,
        Stat::Avo,
        Stat::Prot,
        Stat::Res,
        Stat::Cha,
    ];

    /// JSON 上のキー名を取得する。
    pub fn key(&self) -> &'static str {
        match self {
            Stat::Phys => "phys",
            Stat::Mag => "mag",
            Stat::Hit => "hit",
            Stat::Crit => "crit",
            Stat::Avo => "avo",
            Stat::Prot => "prot",
            Stat::Res => "res",
            Stat::Cha => "cha",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stat::Phys => "Phys",
            Stat::Mag => "Mag",
            Stat::Hit => "Hit",
            Stat::Crit => "Crit",
            Stat::Avo => "Avo",
            Stat::Prot => "Prot",
            Stat::Res => "Res",
            Stat::Cha => "Cha",
        };
        write!(f, "{}", s)
    }
}

/// キーの存在は必須だが値は null を許すフィールド用。
/// `Option` のままだとキーが無いときに黙って None になるため、`deserialize_with` 経由で読む。
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
