use anyhow::{Context, Result};
use folio_config::Config;
use folio_engine::{Renderer, RenderedDocument};
use std::{env, fs, path::PathBuf, process};

struct Args {
    input: PathBuf,
    toc: bool,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut input = None;
    let mut toc = false;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--toc" => toc = true,
            flag if flag.starts_with("--") => return None,
            path if input.is_none() => input = Some(PathBuf::from(path)),
            _ => return None,
        }
    }
    Some(Args { input: input?, toc })
}

fn renderer_for(config: &Config) -> Renderer {
    if config.cache_highlights {
        Renderer::cached_syntect(config.theme.clone())
    } else {
        Renderer::syntect(config.theme.clone())
    }
}

fn print_document(doc: &RenderedDocument, toc: bool) {
    println!("{}", doc.html);
    if toc {
        println!();
        for entry in &doc.headings {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(2)));
            println!("{indent}- [{}](#{})", entry.text, entry.id);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        let program = args.first().map(String::as_str).unwrap_or("folio");
        eprintln!("Usage: {program} <markdown-file> [--toc]");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let markdown = fs::read_to_string(&parsed.input)
        .with_context(|| format!("Failed to read {}", parsed.input.display()))?;

    let renderer = renderer_for(&config);
    let doc = futures::executor::block_on(renderer.render(&markdown));
    log::info!(
        "Rendered {} ({} bytes of HTML, {} headings)",
        parsed.input.display(),
        doc.html.len(),
        doc.headings.len()
    );

    print_document(&doc, parsed.toc || config.output_toc);
    Ok(())
}
