use anyhow::{bail, Context, Result};
use crate::cedict::{
    aggregator::{HeadwordKey, WordGroup, WordList},
    pinyin::{accentuate, accentuate_inline},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWord {
    pub hanzi: String,               // 简体
    pub traditional: Option<String>, // 简体と異なる場合のみ
    pub meanings: Vec<RenderedMeaning>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMeaning {
    pub pinyins: Vec<String>,
    pub translations: Vec<String>,
}

// 読みの並べ方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeaningOrder {
    #[default]
    Insertion, // 入力に現れた順
    GlossCount, // 訳語の多い順 (同数なら入力順)
}

// 声調記号への変換に失敗する読みがあれば全体を失敗とする
pub fn render_word_list(word_list: WordList, order: MeaningOrder) -> Result<Vec<RenderedWord>> {
    word_list
        .into_iter()
        .map(|(key, group)| {
            render_word(&key, group, order)
                .with_context(|| format!("Failed to render {} {}", key.traditional, key.simplified))
        })
        .collect()
}

pub fn render_word(key: &HeadwordKey, group: WordGroup, order: MeaningOrder) -> Result<RenderedWord> {
    let hanzi = key.simplified.trim().to_owned();
    let traditional = if key.traditional != key.simplified {
        Some(key.traditional.trim().to_owned())
    } else {
        None
    };

    let mut meanings = group.into_meanings();
    if order == MeaningOrder::GlossCount {
        // sort_by は安定
        meanings.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));
    }

    let meanings = meanings
        .into_iter()
        .map(|(pinyin, glosses)| -> Result<RenderedMeaning> {
            let pinyins = pinyin
                .split(',')
                .map(|p| accentuate(p.trim()))
                .collect::<Result<Vec<_>, _>>()?;

            let translations = glosses
                .iter()
                .map(|gloss| accentuate_inline(gloss))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(RenderedMeaning {
                pinyins,
                translations,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedWord {
        hanzi,
        traditional,
        meanings,
    })
}

// part_size 個ずつに分ける
// 元の変換器に合わせ，割り切れる場合も末尾に空の part を作る
pub fn split_into_parts(words: &[RenderedWord], part_size: usize) -> Result<Vec<&[RenderedWord]>> {
    if part_size == 0 {
        bail!("part size must be positive");
    }

    let len = words.len();
    Ok((0..=(len / part_size))
        .map(|part| {
            let start = (part * part_size).min(len);
            let end = ((part + 1) * part_size).min(len);
            &words[start..end]
        })
        .collect())
}
