use std::collections::{btree_map, BTreeMap, HashMap};

use crate::cedict::entry_parser::{parse_cedict_line, CedictEntry};

// (繁体, 简体) の辞書順がそのまま出力順になる
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadwordKey {
    pub traditional: String,
    pub simplified: String,
}

// 1 つの見出し語に対する読みごとの訳語
// 読みは最初に現れた順，訳語は重複があってもそのまま追加する
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordGroup {
    meanings: Vec<(String, Vec<String>)>,
    index_by_pinyin: HashMap<String, usize>,
}

impl WordGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pinyin: String, glosses: Vec<String>) {
        match self.index_by_pinyin.get(&pinyin) {
            Some(&i) => self.meanings[i].1.extend(glosses),
            None => {
                self.index_by_pinyin.insert(pinyin.clone(), self.meanings.len());
                self.meanings.push((pinyin, glosses));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.meanings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }

    pub fn get(&self, pinyin: &str) -> Option<&[String]> {
        self.index_by_pinyin
            .get(pinyin)
            .map(|&i| self.meanings[i].1.as_slice())
    }

    pub fn meanings(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.meanings
            .iter()
            .map(|(pinyin, glosses)| (pinyin.as_str(), glosses.as_slice()))
    }

    pub fn into_meanings(self) -> Vec<(String, Vec<String>)> {
        self.meanings
    }
}

#[derive(Debug, Default)]
pub struct WordList {
    words: BTreeMap<HeadwordKey, WordGroup>,

    pub parsed_lines: usize,
    pub skipped_lines: usize,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, key: &HeadwordKey) -> Option<&WordGroup> {
        self.words.get(key)
    }

    pub fn add_entry(&mut self, entry: CedictEntry) {
        let key = HeadwordKey {
            traditional: entry.traditional,
            simplified: entry.simplified,
        };

        self.words
            .entry(key)
            .or_insert_with(WordGroup::new)
            .add(entry.pinyin, entry.glosses);
    }
}

// キー順に取り出す
impl IntoIterator for WordList {
    type Item = (HeadwordKey, WordGroup);
    type IntoIter = btree_map::IntoIter<HeadwordKey, WordGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

// 行を読んで WordList に集約する
// 解析できない行は数えるだけで飛ばす，空行は数えない
pub fn aggregate_cedict<'a, I>(lines: I, mut word_list: WordList) -> WordList
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        match parse_cedict_line(line) {
            Some(entry) => {
                word_list.add_entry(entry);
                word_list.parsed_lines += 1;
            }
            None => {
                word_list.skipped_lines += 1;
            }
        }
    }

    word_list
}
