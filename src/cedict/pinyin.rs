use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// 第一声から第四声 (macron, acute, caron, grave)
const TONE_MARKS: [char; 4] = ['\u{0304}', '\u{0301}', '\u{030C}', '\u{0300}'];

const UMLAUT_MARK: char = '\u{0308}';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No vowel to accentuate in {syllable:?} ({pinyin:?})")]
pub struct AccentuationError {
    pub syllable: String,
    pub pinyin: String,
}

// 声調番号付きピンイン ("ni3 hao3") を声調記号付きに変換する
// 声調記号は結合文字として主母音の直後に置く
pub fn accentuate(pinyin: &str) -> Result<String, AccentuationError> {
    let mut parts: Vec<String> = Vec::new();

    for part in pinyin.split(' ') {
        let part = match part {
            "" => String::new(),

            // 儿化は直前の音節にくっつける
            "r5" => match parts.last_mut() {
                Some(previous) => {
                    previous.push('r');
                    String::new()
                }
                None => "r".to_owned(),
            },

            "xx5" => "xx".to_owned(),

            _ => accentuate_syllable(part, pinyin)?,
        };

        parts.push(part);
    }

    Ok(parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

// 訳語中の "[hao3]" のような括弧内のピンイン
pub fn accentuate_inline(text: &str) -> Result<String, AccentuationError> {
    static REGEX_INLINE_PINYIN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\[[a-zA-Z0-9 ]+\]").unwrap());

    let mut ret = String::with_capacity(text.len());
    let mut last_end = 0;

    for m in REGEX_INLINE_PINYIN.find_iter(text) {
        ret.push_str(&text[last_end..m.start()]);
        ret.push('[');
        ret.push_str(&accentuate(&text[(m.start() + 1)..(m.end() - 1)])?);
        ret.push(']');
        last_end = m.end();
    }
    ret.push_str(&text[last_end..]);

    Ok(ret)
}

fn accentuate_syllable(syllable: &str, pinyin: &str) -> Result<String, AccentuationError> {
    let (base, tone_mark) = split_tone(syllable);

    let mut accent: String = tone_mark.into_iter().collect();

    // "lu:3" は ü に声調記号, "lu:e4" は e に声調記号
    let base = match base.strip_suffix(':') {
        Some(base) => {
            accent.insert(0, UMLAUT_MARK);
            base.to_owned()
        }
        None => base.replace("u:", "\u{FC}"),
    };

    if accent.is_empty() {
        return Ok(base);
    }

    let position = nucleus_position(&base).ok_or_else(|| AccentuationError {
        syllable: base.clone(),
        pinyin: pinyin.to_owned(),
    })?;

    let mut ret = base;
    ret.insert_str(position, &accent);
    Ok(ret)
}

// 末尾が 1-5 以外なら声調なしとしてそのまま通す
fn split_tone(syllable: &str) -> (&str, Option<char>) {
    let mut chars = syllable.chars();
    match chars.next_back() {
        Some(tone @ '1'..='4') => (
            chars.as_str(),
            Some(TONE_MARKS[(tone as usize) - ('1' as usize)]),
        ),
        Some('5') => (chars.as_str(), None),
        _ => (syllable, None),
    }
}

// 声調記号を置く位置 (主母音の直後のバイト位置)
// a > e > o の順 (a と e は共存しない)，iu / ui は後ろの方，母音がなければ m ("m2")
fn nucleus_position(syllable: &str) -> Option<usize> {
    let find = |vowel: char| {
        syllable
            .char_indices()
            .find(|(_, c)| c.to_ascii_lowercase() == vowel)
            .map(|(i, c)| i + c.len_utf8())
    };

    find('a')
        .or_else(|| find('e'))
        .or_else(|| find('o'))
        .or_else(|| match (find('u'), find('i')) {
            (Some(u), Some(i)) => Some(u.max(i)),
            (u, i) => u.or(i),
        })
        .or_else(|| find('m'))
}
