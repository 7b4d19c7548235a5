// CC-CEDICT (https://www.mdbg.net/chinese/dictionary?page=cc-cedict) の変換
//
// 1 行 1 項目: 繁體 简体 [pin1 yin1] /gloss 1/gloss 2/
// - "#" で始まるコメント行など形式に合わない行は読み飛ばす
// - 同じ (繁體, 简体) の項目は読みごとにまとめる
// - 声調番号は声調記号にする．声調記号を置けない読みはエラーとして変換全体を止める

pub mod aggregator;
pub mod entry_parser;
pub mod pinyin;
pub mod renderer;
pub mod source;
pub mod writer;
