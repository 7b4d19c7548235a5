use std::io::{Read, Seek};

use anyhow::{ensure, Context, Result};
use zip::ZipArchive;

pub struct ZipReader<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ZipReader<R> {
    pub fn new(reader: R) -> Result<ZipReader<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open zip archive")?;
        Ok(ZipReader { archive })
    }

    // 条件に合うエントリが高々 1 つであることを確かめて読む
    pub fn read_single<P>(&mut self, mut predicate: P) -> Result<Option<Vec<u8>>>
    where
        P: FnMut(&str) -> bool,
    {
        let mut found: Option<Vec<u8>> = None;

        for i in 0..self.archive.len() {
            let mut file = self
                .archive
                .by_index(i)
                .with_context(|| format!("Failed to open entry at {}", i))?;

            if !predicate(file.name()) {
                continue;
            }

            ensure!(
                found.is_none(),
                "More than one matching entry: {}",
                file.name()
            );

            let mut data = Vec::new();
            file.read_to_end(&mut data)
                .with_context(|| format!("Failed to read {}", file.name()))?;
            found = Some(data);
        }

        Ok(found)
    }
}
