use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::paralogue::chapters::{ChapterRange, ParalogueChapters, ParalogueRoute};

/// 外伝 (サイドクエストの連なり) を表す構造体。
/// 別のコレクションを参照するのではなく、所属する大隊の中に直接埋め込まれる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Paralogue {
    characters: Vec<ParalogueCharacter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    chapters: ParalogueChapters,
}

/// 外伝に関わるキャラクター。
/// `required` が true の場合、発生や攻略に必須。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParalogueCharacter {
    pub name: String,
    pub required: bool,
}

impl Paralogue {
    /// 関わるキャラクターを表示順で取得する。
    pub fn characters(&self) -> &[ParalogueCharacter] {
        &self.characters
    }

    /// 必須のキャラクターのみを取得する。
    pub fn required_characters(&self) -> impl Iterator<Item = &ParalogueCharacter> + '_ {
        self.characters.iter().filter(|c| c.required)
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn chapters(&self) -> &ParalogueChapters {
        &self.chapters
    }

    /// 指定ルートでの発生範囲を取得する。発生しない場合は None。
    pub fn chapters_on<R: Into<ParalogueRoute>>(&self, route: R) -> Option<&ChapterRange> {
        self.chapters.get(route.into())
    }

    /// 発生するルートを列挙する。
    pub fn routes(&self) -> Vec<ParalogueRoute> {
        self.chapters.iter().map(|(r, _)| r).collect()
    }

    /// 修正不能な例外
    /// - キャラクター名が空
    /// - 章の範囲が逆転している (start > end)
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(index) = self.characters.iter().position(|c| c.name.trim().is_empty()) {
            warn!("Paralogue character name is empty: {:?}", self.characters);
            return Err(ValidationError::EmptyCharacterName { index });
        }
        if let Some((route, range)) = self.chapters.iter().find(|(_, r)| r.is_inverted()) {
            warn!("Paralogue chapter range is inverted on {}: {:?}", route, range);
            return Err(ValidationError::InvertedChapterRange {
                route,
                start: range.start,
                end: range.end,
            });
        }
        Ok(())
    }
}
