use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};

use crate::utility::zip::ZipReader;

// cedict_ts.u8 そのもの，または配布されている cedict_1_0_ts_utf-8_mdbg.zip
pub fn read_cedict_source(path: &Path) -> Result<String> {
    ensure!(path.exists(), "File not found: {}", path.display());

    let is_zip = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("zip"));

    let bytes = if is_zip {
        read_cedict_zip(path)?
    } else {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    Ok(decode_cedict(&bytes))
}

// BOM は取り除き，不正なバイト列は U+FFFD に置き換える
pub fn decode_cedict(bytes: &[u8]) -> String {
    encoding_rs::UTF_8.decode(bytes).0.into_owned()
}

fn read_cedict_zip(path: &Path) -> Result<Vec<u8>> {
    let file = fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut zip_reader = ZipReader::new(file)?;

    zip_reader
        .read_single(|name| {
            let name = name.to_lowercase();
            name.ends_with(".u8") || name.ends_with(".txt")
        })
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_context(|| format!("Dictionary file is not found in {}", path.display()))
}
