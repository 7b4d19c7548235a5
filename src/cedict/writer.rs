use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{cedict::renderer::RenderedWord, utility::str::escape_xml};

pub struct PartWriter {
    root: PathBuf,
}

impl PartWriter {
    // 出力先が既にあってもよい
    pub fn init(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create output directory: {}", root.display()))?;

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    // 00.xml, 01.xml, ...
    pub fn part_path(&self, part: usize) -> PathBuf {
        self.root.join(format!("{:02}.xml", part))
    }

    pub fn save_part(&self, part: usize, words: &[RenderedWord]) -> Result<PathBuf> {
        let path = self.part_path(part);

        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);

        write_xml_word_list(&mut out, words)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        out.flush()
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(path)
    }
}

pub fn write_xml_word_list<W: Write>(out: &mut W, words: &[RenderedWord]) -> Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    writeln!(out, r#"<WordList xmlns="../Dictionary.xsd">"#)?;

    for word in words {
        write_xml_word(out, word)?;
    }

    // 末尾の改行はなし
    write!(out, "</WordList>")?;

    Ok(())
}

pub fn write_xml_word<W: Write>(out: &mut W, word: &RenderedWord) -> Result<()> {
    writeln!(out, "    <Word>")?;
    writeln!(out, "        <Hanzi>{}</Hanzi>", escape_xml(&word.hanzi))?;

    if let Some(traditional) = &word.traditional {
        writeln!(
            out,
            "        <Traditional>{}</Traditional>",
            escape_xml(traditional)
        )?;
    }

    for meaning in &word.meanings {
        writeln!(out, "        <Meaning>")?;
        for pinyin in &meaning.pinyins {
            writeln!(out, "            <Pinyin>{}</Pinyin>", escape_xml(pinyin))?;
        }
        for translation in &meaning.translations {
            writeln!(
                out,
                "            <Translation>{}</Translation>",
                escape_xml(translation)
            )?;
        }
        writeln!(out, "        </Meaning>")?;
    }

    writeln!(out, "    </Word>")?;

    Ok(())
}
