use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use mdmeta::{license, ParseResult};

const FILE_ERROR: u8 = 2;
const PARSE_ERROR: u8 = 3;
const SERIALIZATION_ERROR: u8 = 4;

#[derive(Parser)]
#[command(
    name = "mdmeta",
    version,
    about = "Convert Markdown into structured metadata and an HTML fragment"
)]
struct Cli {
    #[arg(help = "Markdown file (reads stdin if omitted)")]
    file: Option<PathBuf>,

    #[arg(long, help = "Expect the meta block at the end of the document")]
    meta_at_end: bool,

    #[arg(long, help = "Serialize the result as JSON (the default)")]
    json: bool,

    #[arg(long, conflicts_with = "json", help = "Serialize the result as YAML")]
    yaml: bool,

    #[arg(long, help = "Indent JSON output")]
    indent: bool,

    #[arg(long, help = "Print only the rendered content")]
    content: bool,

    #[arg(long, conflicts_with = "content", help = "Print only the metadata")]
    meta: bool,

    #[arg(
        long,
        help = "Convert plain Markdown, with no meta block handling",
        conflicts_with_all = ["meta_at_end", "json", "yaml", "indent", "content", "meta", "force", "silent"]
    )]
    plain: bool,

    #[arg(long, help = "Exit zero even if the meta block fails to decode")]
    force: bool,

    #[arg(long, help = "Suppress the meta block error message")]
    silent: bool,

    #[arg(long, help = "Parse the input but print nothing")]
    test: bool,

    #[arg(long, help = "Print license information and exit")]
    license: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.license {
        println!("{}", license::full_text());
        return ExitCode::SUCCESS;
    }

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            report(cli.file.as_deref(), &err.to_string());
            return ExitCode::from(FILE_ERROR);
        }
    };

    if cli.plain {
        if !cli.test {
            println!("{}", mdmeta::render_plain(&input));
        }
        return ExitCode::SUCCESS;
    }

    let result = match mdmeta::parse(&input, cli.meta_at_end) {
        Ok(result) => result,
        Err(err) => {
            if !cli.silent {
                report(cli.file.as_deref(), &err.to_string());
            }
            if !cli.force {
                return ExitCode::from(PARSE_ERROR);
            }
            // The content half survives meta errors; print it anyway.
            err.into_partial_result()
        }
    };

    if cli.test {
        return ExitCode::SUCCESS;
    }

    match render_output(&result, &cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(cli.file.as_deref(), &err);
            ExitCode::from(SERIALIZATION_ERROR)
        }
    }
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
}

fn report(file: Option<&Path>, message: &str) {
    match file {
        Some(path) => eprintln!("{}: {}", path.display(), message),
        None => eprintln!("{}", message),
    }
}

/// Serialize the result per the output options. Content-only output is the
/// raw HTML fragment; everything else goes through serde.
fn render_output(result: &ParseResult, cli: &Cli) -> Result<String, String> {
    if cli.content {
        return Ok(result.content.clone());
    }

    if cli.yaml {
        let text = if cli.meta {
            serde_yaml::to_string(&result.meta)
        } else {
            serde_yaml::to_string(result)
        };
        return text.map_err(|e| e.to_string());
    }

    let text = match (cli.meta, cli.indent) {
        (true, true) => serde_json::to_string_pretty(&result.meta),
        (true, false) => serde_json::to_string(&result.meta),
        (false, true) => serde_json::to_string_pretty(result),
        (false, false) => serde_json::to_string(result),
    };
    text.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseResult {
        mdmeta::parse("\tKey: value\n\nBody\n", false).unwrap()
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("mdmeta").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_output_is_json() {
        let out = render_output(&sample(), &cli(&[])).unwrap();
        assert_eq!(out, r#"{"meta":{"Key":"value"},"content":"<p>Body</p>\n"}"#);
    }

    #[test]
    fn test_indented_json() {
        let out = render_output(&sample(), &cli(&["--indent"])).unwrap();
        assert!(out.contains("\n  \"meta\""));
    }

    #[test]
    fn test_meta_only_json() {
        let out = render_output(&sample(), &cli(&["--meta"])).unwrap();
        assert_eq!(out, r#"{"Key":"value"}"#);
    }

    #[test]
    fn test_content_only_is_raw_html() {
        let out = render_output(&sample(), &cli(&["--content"])).unwrap();
        assert_eq!(out, "<p>Body</p>\n");
    }

    #[test]
    fn test_yaml_output() {
        let out = render_output(&sample(), &cli(&["--yaml"])).unwrap();
        assert!(out.contains("meta:"));
        assert!(out.contains("Key: value"));
        assert!(out.contains("content:"));
    }

    #[test]
    fn test_yaml_meta_only() {
        let out = render_output(&sample(), &cli(&["--yaml", "--meta"])).unwrap();
        assert_eq!(out.trim(), "Key: value");
    }

    #[test]
    fn test_conflicting_formats_rejected() {
        let parsed = Cli::try_parse_from(["mdmeta", "--json", "--yaml"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_meta_and_content_rejected() {
        let parsed = Cli::try_parse_from(["mdmeta", "--meta", "--content"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_plain_excludes_other_options() {
        let parsed = Cli::try_parse_from(["mdmeta", "--plain", "--meta"]);
        assert!(parsed.is_err());
    }
}
