use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, path::PathBuf};

use cedict_xml::cedict::{
    aggregator::{aggregate_cedict, WordList},
    renderer::{render_word_list, split_into_parts, MeaningOrder},
    source::read_cedict_source,
    writer::PartWriter,
};

static DEFAULT_INPUT_PATH: &str = "cedict_ts.u8";
static DEFAULT_OUTPUT_PATH: &str = "Dictionaries/Cedict_CN_ENG";
const DEFAULT_PART_SIZE: usize = 30000;

struct Args {
    input_path: PathBuf,
    output_path: PathBuf,
    part_size: usize,
    meaning_order: MeaningOrder,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("", "part-size", "number of words per output file", "N");
    opts.optflag(
        "",
        "order-by-gloss-count",
        "put pronunciations with more glosses first",
    );

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let input_path = PathBuf::from(
        matches
            .free
            .first()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_INPUT_PATH),
    );
    let output_path = PathBuf::from(
        matches
            .free
            .get(1)
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_OUTPUT_PATH),
    );

    let part_size = match matches.opt_str("part-size") {
        Some(n) => n
            .parse()
            .with_context(|| format!("Invalid part size: {:?}", n))?,
        None => DEFAULT_PART_SIZE,
    };
    ensure!(0 < part_size, "part size must be positive");

    let meaning_order = if matches.opt_present("order-by-gloss-count") {
        MeaningOrder::GlossCount
    } else {
        MeaningOrder::Insertion
    };

    Ok(Args {
        input_path,
        output_path,
        part_size,
        meaning_order,
    })
}

fn main() -> Result<()> {
    let args = get_args()?;

    println!("Parsing cedict input...");

    let word_list = {
        let cedict = read_cedict_source(&args.input_path)
            .with_context(|| format!("Failed to load {}", args.input_path.display()))?;

        let lines: Vec<&str> = cedict.lines().collect();
        let pb = create_progress_bar(lines.len() as u64);
        aggregate_cedict(lines.into_iter().progress_with(pb), WordList::new())
    };

    println!(
        "Finished. {} lines parsed, {} lines skipped.",
        word_list.parsed_lines, word_list.skipped_lines
    );
    println!("{} words!", word_list.len());

    // 1 つでも失敗したら何も書き出さない
    let words = render_word_list(word_list, args.meaning_order)?;

    println!("Writing xml output...");

    let out = PartWriter::init(&args.output_path)?;

    let pb = create_progress_bar(words.len() as u64);
    for (part, part_words) in split_into_parts(&words, args.part_size)?
        .into_iter()
        .enumerate()
    {
        pb.println(format!("Writing part {:02}", part));
        let path = out.save_part(part, part_words)?;
        pb.inc(part_words.len() as u64);
        pb.println(format!("Saved {}", path.display()));
    }
    pb.finish();

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
