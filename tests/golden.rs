use std::{fs, path::PathBuf};

use anyhow::Result;

use cedict_xml::cedict::{
    aggregator::{aggregate_cedict, WordList},
    renderer::{render_word_list, split_into_parts, MeaningOrder},
    source::read_cedict_source,
    writer::PartWriter,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn convert(part_size: usize) -> Result<tempfile::TempDir> {
    let cedict = read_cedict_source(&fixture("sample.u8"))?;
    let word_list = aggregate_cedict(cedict.lines(), WordList::new());
    let words = render_word_list(word_list, MeaningOrder::Insertion)?;

    let dir = tempfile::tempdir()?;
    // 存在しない階層も作られる
    let out = PartWriter::init(&dir.path().join("Cedict_CN_ENG"))?;
    for (part, part_words) in split_into_parts(&words, part_size)?.into_iter().enumerate() {
        out.save_part(part, part_words)?;
    }

    Ok(dir)
}

#[test]
fn test_sample_xml() -> Result<()> {
    let dir = convert(30000)?;

    let actual = fs::read_to_string(dir.path().join("Cedict_CN_ENG/00.xml"))?;
    let expected = fs::read_to_string(fixture("sample_00.xml"))?;
    assert_eq!(actual, expected);

    assert!(!dir.path().join("Cedict_CN_ENG/01.xml").exists());
    Ok(())
}

#[test]
fn test_sample_parts() -> Result<()> {
    let dir = convert(4)?;

    let mut names = fs::read_dir(dir.path().join("Cedict_CN_ENG"))?
        .map(|entry| -> Result<String> { Ok(entry?.file_name().to_string_lossy().into_owned()) })
        .collect::<Result<Vec<_>>>()?;
    names.sort();
    assert_eq!(names, vec!["00.xml", "01.xml", "02.xml"]);

    let last = fs::read_to_string(dir.path().join("Cedict_CN_ENG/02.xml"))?;
    assert_eq!(last.matches("<Word>").count(), 2);
    assert!(last.contains("<Hanzi>略</Hanzi>"));
    Ok(())
}

#[test]
fn test_sample_umlaut() -> Result<()> {
    let dir = convert(30000)?;
    let xml = fs::read_to_string(dir.path().join("Cedict_CN_ENG/00.xml"))?;

    // "lu:e4" の ü は合成済み文字 U+00FC
    assert!(xml.contains("<Pinyin>l\u{FC}e\u{300}</Pinyin>"));
    assert!(!xml.contains("lu\u{308}e"));
    // "nu:3" は分音記号と声調記号を u に重ねる
    assert!(xml.contains("<Pinyin>nu\u{308}\u{30C} e\u{301}r</Pinyin>"));
    Ok(())
}

#[test]
fn test_part_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let out = PartWriter::init(dir.path())?;
    assert_eq!(out.part_path(0), dir.path().join("00.xml"));
    assert_eq!(out.part_path(12), dir.path().join("12.xml"));
    Ok(())
}

#[test]
fn test_output_directory_may_exist() -> Result<()> {
    let dir = tempfile::tempdir()?;
    PartWriter::init(dir.path())?;
    PartWriter::init(dir.path())?;
    Ok(())
}

#[test]
fn test_missing_input() {
    assert!(read_cedict_source(&fixture("missing.u8")).is_err());
}
