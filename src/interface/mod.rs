/// フロントエンドとデータコア間のインターフェースを定義する。
/// このモジュールで公開される構造体は、シリアライズ/デシリアライズ可能でなければならない。
/// また、それらのメソッドは単なるゲッターに限定し、原則的にロジックを含めてはならない。
///
/// 受け取るもの: 大隊レコードの配列。
/// 返すもの: 検証済みのレコード、またはグリッドの列定義と行データ。
pub use crate::battalion::{Battalion, ChapterStep, QuestSteps, Quests, Route, RoutedStep, ShopEntry, Stat};
pub use crate::grid::{ColumnDef, ColumnFilter, GridConfig, GridOptions, GridRow};
pub use crate::paralogue::{ChapterRange, Paralogue, ParalogueChapters, ParalogueCharacter, ParalogueRoute};
