// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use scarf_ring::prelude::{Instance, InstanceLoader, SegmentRing, write_line};
use std::{
    error::Error,
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
struct Cli {
    input: Option<PathBuf>,
    expect: Option<PathBuf>,
    multi_case: bool,
    checked: bool,
}

fn parse_cli<I: Iterator<Item = String>>(mut args: I) -> Cli {
    let mut cli = Cli::default();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--input" => cli.input = args.next().map(PathBuf::from),
            "--expect" => cli.expect = args.next().map(PathBuf::from),
            "--multi-case" => cli.multi_case = true,
            "--checked" => cli.checked = true,
            other => tracing::warn!("Ignoring unknown argument {}", other),
        }
    }

    cli
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn solve_one(index: usize, inst: &Instance, checked: bool) -> Result<SegmentRing, Box<dyn Error>> {
    if !checked {
        return Ok(inst.solve());
    }

    let ring = inst.solve_checked()?;
    if !ring.is_consistent() {
        return Err(format!("case #{}: ring lost its single-cycle shape", index + 1).into());
    }
    Ok(ring)
}

/// Replays every case and writes one line per case.
fn run<W: Write>(instances: &[Instance], checked: bool, out: &mut W) -> Result<(), Box<dyn Error>> {
    for (i, inst) in instances.iter().enumerate() {
        let ring = solve_one(i, inst, checked)?;
        write_line(&ring, out)?;
    }
    Ok(())
}

// Line-wise comparison, ignoring trailing whitespace and a trailing newline.
fn lines_match(expected: &str, actual: &str) -> bool {
    expected
        .lines()
        .map(str::trim_end)
        .eq(actual.lines().map(str::trim_end))
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let cli = parse_cli(std::env::args().skip(1));

    let loader = InstanceLoader::new().multi_case(cli.multi_case);
    let instances = match &cli.input {
        Some(path) => loader.from_path(path)?,
        None => loader.from_bufread(io::stdin().lock())?,
    };

    tracing::info!(
        "Loaded {} case(s), {} queries total (checked = {})",
        instances.len(),
        instances.iter().map(|i| i.queries().len()).sum::<usize>(),
        cli.checked
    );

    let Some(expect_path) = cli.expect else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        run(&instances, cli.checked, &mut out)?;
        out.flush()?;
        return Ok(());
    };

    // Sample mode: capture, compare against the expected file, report timing.
    let t0 = Instant::now();
    let mut buf = Vec::new();
    run(&instances, cli.checked, &mut buf)?;
    let elapsed = t0.elapsed();

    let actual = String::from_utf8(buf)?;
    let expected = fs::read_to_string(&expect_path)?;
    print!("{}", actual);

    if !lines_match(&expected, &actual) {
        tracing::error!("Output differs from {}", expect_path.display());
        return Err(format!("Expected {:?}, got {:?}", expected, actual).into());
    }

    tracing::info!("Output matches {}, took: {:?}", expect_path.display(), elapsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_cli_flags() {
        let cli = parse_cli(args(&[
            "--input",
            "in.txt",
            "--checked",
            "--multi-case",
            "--expect",
            "out.txt",
        ]));
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.expect, Some(PathBuf::from("out.txt")));
        assert!(cli.checked);
        assert!(cli.multi_case);

        let cli = parse_cli(args(&["--bogus"]));
        assert!(cli.input.is_none());
        assert!(!cli.checked);
    }

    #[test]
    fn test_run_writes_one_line_per_case() {
        let instances = InstanceLoader::new()
            .multi_case(true)
            .from_text("2\n4 1\n2 2 0\n4 1\n3 4 1\n")
            .unwrap();

        let mut buf = Vec::new();
        run(&instances, false, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 1 3 4\n1 3 4 2\n");

        let mut buf = Vec::new();
        run(&instances, true, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 1 3 4\n1 3 4 2\n");
    }

    #[test]
    fn test_run_checked_surfaces_invalid_query() {
        let instances = InstanceLoader::new().from_text("4 1\n2 3 3\n").unwrap();
        let mut buf = Vec::new();
        assert!(run(&instances, true, &mut buf).is_err());
    }

    #[test]
    fn test_lines_match_ignores_trailing_whitespace() {
        assert!(lines_match("2 1 3 4\n", "2 1 3 4 \n"));
        assert!(lines_match("1 2 3", "1 2 3\n"));
        assert!(!lines_match("1 2 3\n", "1 3 2\n"));
        assert!(!lines_match("1 2 3\n4\n", "1 2 3\n"));
    }
}
