use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scribe_lexicon::MemoryLexicon;
use scribe_protocol::{Dictionary, Node};
use scribe_realiser::{Realiser, RealiserConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Scribe sentence realiser tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compiles a text (.lex) or JSON lexicon to an rkyv archive
    Compile {
        /// Lexicon to compile; the built-in core lexicon when omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Realises a JSON syntax tree into a sentence
    Realise {
        /// Syntax tree as JSON; `-` reads standard input
        #[arg(short, long, value_name = "FILE")]
        tree: PathBuf,

        /// Lexicon (.lex, .json or compiled archive); the built-in one when omitted
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        /// Realiser configuration as JSON
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the realised tree as JSON instead of its words
        #[arg(long)]
        json: bool,
    },
}

/// How a lexicon file is read, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexiconFormat {
    Text,
    Json,
    Archive,
}

impl LexiconFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("lex") | Some("txt") => LexiconFormat::Text,
            Some("json") => LexiconFormat::Json,
            _ => LexiconFormat::Archive,
        }
    }
}

fn load_lexicon(path: Option<&Path>) -> anyhow::Result<MemoryLexicon> {
    let Some(path) = path else {
        return Ok(scribe_lexicon::builtin()?);
    };
    let format = LexiconFormat::from_path(path);
    info!(?path, ?format, "loading lexicon");

    let lexicon = match format {
        LexiconFormat::Text => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            MemoryLexicon::parse(&text)?
        }
        LexiconFormat::Json => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let dictionary: Dictionary = serde_json::from_str(&text)?;
            MemoryLexicon::from_dictionary(dictionary)
        }
        LexiconFormat::Archive => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            MemoryLexicon::from_archive(&bytes)?
        }
    };
    Ok(lexicon)
}

fn read_tree(path: &Path) -> anyhow::Result<Node> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(serde_json::from_str(&text).context("parsing syntax tree")?)
}

fn compile(input: Option<&Path>, output: &Path) -> anyhow::Result<()> {
    let lexicon = load_lexicon(input)?;
    println!("⚙️  Compiling lexicon with {} words...", lexicon.len());

    let bytes = lexicon.to_archive()?;
    fs::write(output, bytes.as_slice()).with_context(|| format!("writing {}", output.display()))?;

    println!("✅ Archive written to {:?}", output);
    Ok(())
}

fn realise(tree: &Path, lexicon: Option<&Path>, config: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).context("parsing realiser configuration")?
        }
        None => RealiserConfig::default(),
    };
    let realiser = Realiser::new(Arc::new(load_lexicon(lexicon)?), config);
    let tree = read_tree(tree)?;

    let realised = realiser.realise(&tree)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&realised)?);
    } else {
        println!("{}", realised.map(|node| node.surface_text()).unwrap_or_default());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Compile { input, output } => compile(input.as_deref(), &output),
        Command::Realise { tree, lexicon, config, json } => {
            realise(&tree, lexicon.as_deref(), config.as_deref(), json)
        }
    }
}
