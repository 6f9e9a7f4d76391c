use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use docmerge_merge::{MergeConfig, MergeEngine, MergeMode};
use docmerge_normalize::{load_document, validate};
use docmerge_types::Document;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::render::{render_json, render_markdown};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let files = resolve_order(&cli.files, &cli.order);
    debug!(?files, output = %cli.output.display(), "resolved merge order");

    if cli.validate {
        return cmd_validate(&files);
    }
    let docs = load_all(&files, false)?;
    cmd_merge(&cli, config, &docs)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    let Some(path) = path else {
        return Ok(MergeConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Move the files named in `order` to the front, in that order.
///
/// A name matches a file by exact path or by trailing file name. Names that
/// match nothing are ignored; unlisted files keep their relative order.
pub fn resolve_order(files: &[PathBuf], order: &[String]) -> Vec<PathBuf> {
    let mut used = vec![false; files.len()];
    let mut result = Vec::with_capacity(files.len());

    for name in order.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let found = files.iter().enumerate().find(|(i, file)| {
            !used[*i] && (file.as_path() == Path::new(name) || file.file_name().is_some_and(|f| f == name))
        });
        if let Some((i, file)) = found {
            used[i] = true;
            result.push(file.clone());
        }
    }
    for (i, file) in files.iter().enumerate() {
        if !used[i] {
            result.push(file.clone());
        }
    }
    result
}

/// Load every file in sequence, stopping at the first failure.
///
/// With `validate_each`, each document is validated as soon as it is loaded,
/// so a rejected file stops the run before later files are read.
fn load_all(files: &[PathBuf], validate_each: bool) -> anyhow::Result<Vec<Document>> {
    let mut docs = Vec::with_capacity(files.len());
    for path in files {
        let doc = load_document(path)?;
        if let Some(syntax) = doc.syntax() {
            println!("{} Loaded {} ({} format)", "✓".green(), path.display(), syntax.name().cyan());
        }
        if validate_each {
            validate(&doc)?;
            println!("{} {} validated successfully", "✓".green(), path.display());
        }
        docs.push(doc);
    }
    Ok(docs)
}

fn cmd_validate(files: &[PathBuf]) -> anyhow::Result<()> {
    load_all(files, true)?;
    println!("{} All documents validated successfully", "✓".green().bold());
    Ok(())
}

fn cmd_merge(cli: &Cli, config: MergeConfig, docs: &[Document]) -> anyhow::Result<()> {
    let engine = MergeEngine::with_default_extractors(config);
    let outcome = engine.merge(docs).context("failed to merge documents")?;

    if let MergeMode::Template { base_index } = outcome.mode {
        println!(
            "  Template: {} ({} placeholders filled)",
            docs[base_index].source_label().yellow(),
            outcome.replacements.len()
        );
    }

    let rendered = match cli.format {
        OutputFormat::Markdown => render_markdown(&outcome.document),
        OutputFormat::Json => render_json(&outcome.document).context("failed to encode JSON")?,
    };
    fs::write(&cli.output, rendered)
        .with_context(|| format!("failed to write output {}", cli.output.display()))?;

    println!(
        "{} Merged {} documents into {}",
        "✓".green().bold(),
        docs.len(),
        cli.output.display().to_string().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_order_keeps_input_order() {
        let files = paths(&["a.md", "b.toml", "c.yaml"]);
        assert_eq!(resolve_order(&files, &[]), files);
    }

    #[test]
    fn listed_files_move_to_front() {
        let files = paths(&["a.md", "b.toml", "c.yaml"]);
        assert_eq!(
            resolve_order(&files, &order(&["c.yaml", "a.md"])),
            paths(&["c.yaml", "a.md", "b.toml"])
        );
    }

    #[test]
    fn order_matches_trailing_file_name() {
        let files = paths(&["docs/common.md", "lang/go.md"]);
        assert_eq!(
            resolve_order(&files, &order(&["go.md"])),
            paths(&["lang/go.md", "docs/common.md"])
        );
    }

    #[test]
    fn unknown_and_repeated_names_are_ignored() {
        let files = paths(&["a.md", "b.md"]);
        assert_eq!(
            resolve_order(&files, &order(&["missing.md", " b.md ", "b.md", ""])),
            paths(&["b.md", "a.md"])
        );
    }

    #[test]
    fn config_defaults_without_flag() {
        assert_eq!(load_config(None).unwrap(), MergeConfig::default());
    }

    #[test]
    fn config_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docmerge.toml");
        fs::write(&path, "template_substitution = false\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), MergeConfig::standard_only());
    }

    #[test]
    fn merges_files_into_output() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("file1.md");
        let second = dir.path().join("file2.md");
        let output = dir.path().join("out.md");
        fs::write(&first, "# File 1\n\nThis is content from file 1.\n").unwrap();
        fs::write(&second, "# File 2\n\nThis is content from file 2.\n").unwrap();

        let files = format!("{},{}", first.display(), second.display());
        let cli = Cli::try_parse_from([
            "docmerge",
            "--files",
            files.as_str(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run_command(cli).unwrap();

        let merged = fs::read_to_string(&output).unwrap();
        assert_eq!(merged, "# File 2\n\nThis is content from file 2.\n");
    }

    #[test]
    fn validate_mode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.toml");
        let output = dir.path().join("out.md");
        fs::write(&input, "[metadata]\ntitle = \"A\"\n\n[sections.s]\ncontent = \"x\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "docmerge",
            "--files",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--validate",
        ])
        .unwrap();
        run_command(cli).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn validate_mode_rejects_untitled_structured_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.yaml");
        fs::write(&input, "sections:\n  s:\n    content: x\n").unwrap();

        let cli = Cli::try_parse_from(["docmerge", "--files", input.to_str().unwrap(), "--validate"])
            .unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn first_load_error_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md");
        fs::write(&good, "body\n").unwrap();
        let bad = dir.path().join("notes.txt");
        fs::write(&bad, "text\n").unwrap();

        let err = load_all(&[good, bad], false).unwrap_err();
        assert!(err.to_string().contains("unsupported file format"));
    }

    #[test]
    fn validation_error_precedes_later_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let untitled = dir.path().join("a.yaml");
        fs::write(&untitled, "sections:\n  s:\n    content: x\n").unwrap();
        let unsupported = dir.path().join("b.txt");
        fs::write(&unsupported, "text\n").unwrap();

        let files = format!("{},{}", untitled.display(), unsupported.display());
        let cli = Cli::try_parse_from(["docmerge", "--files", files.as_str(), "--validate"]).unwrap();
        let err = run_command(cli).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing title"), "{message}");
        assert!(message.contains("a.yaml"), "{message}");
    }
}
