use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CedictEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String, // 小文字化済み，声調番号付き
    pub glosses: Vec<String>,
}

// 繁體 简体 [pin1 yin1] /gloss 1/gloss 2/
//
// 形式に合わない行 (コメント "# ..." など) は None
pub fn parse_cedict_line(line: &str) -> Option<CedictEntry> {
    static REGEX_CEDICT_LINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"\A(?P<traditional>\S+)\s+(?P<simplified>\S+)\s*\[(?P<pinyin>.+?)\]\s*/(?P<glosses>.+)/?\z",
        )
        .unwrap()
    });

    let captures = REGEX_CEDICT_LINE.captures(line.trim())?;

    let traditional = captures.name("traditional")?.as_str().to_owned();
    let simplified = captures.name("simplified")?.as_str().to_owned();
    let pinyin = captures.name("pinyin")?.as_str().to_lowercase();
    let glosses = captures
        .name("glosses")?
        .as_str()
        .split('/')
        .map(|gloss| gloss.trim())
        .filter(|gloss| !gloss.is_empty())
        .map(|gloss| gloss.to_owned())
        .collect();

    Some(CedictEntry {
        traditional,
        simplified,
        pinyin,
        glosses,
    })
}
