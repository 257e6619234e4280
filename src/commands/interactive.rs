//! Interactive prompted mode
//!
//! Asks for the input file, the output file and the number of words, then
//! builds the cloud. Problems are reported on the console instead of failing
//! the run; only unreadable standard input aborts.

use super::generate::{CloudSummary, render_counted};
use super::input::{CountedInput, count_reader, create_output, open_input};
use crate::core::SeparatorSet;
use crate::error::{TagCloudError, parse_word_count};
use crate::render::HtmlOptions;
use colored::Colorize;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Run one prompted generation
///
/// Returns `Ok(None)` when a file could not be opened or written; the reason
/// has already been printed to `console`. A malformed or negative word count
/// is reported and treated as zero.
///
/// # Errors
///
/// Returns `TagCloudError::Prompt` if `input` cannot be read (including end of
/// input before all answers were given) or `console` cannot be written.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    console: &mut W,
    separators: &SeparatorSet,
    html: &HtmlOptions,
) -> Result<Option<CloudSummary>, TagCloudError> {
    let input_name = prompt(input, console, "Enter an input file name:")?;
    let source = match open_input(Path::new(&input_name)) {
        Ok(file) => file,
        Err(e) => {
            report(console, &e)?;
            return Ok(None);
        }
    };

    let output_name = prompt(input, console, "Enter an output file name:")?;
    let output_path = Path::new(&output_name);
    let sink = match create_output(output_path) {
        Ok(file) => file,
        Err(e) => {
            report(console, &e)?;
            return Ok(None);
        }
    };

    let count_text = prompt(input, console, "Enter the number of words to include in the cloud:")?;
    let count = match parse_word_count(&count_text) {
        Ok(n) => n,
        Err(e) => {
            report(console, &e)?;
            0
        }
    };

    let counted = count_reader(source, separators);
    let target = CloudTarget {
        sink: BufWriter::new(sink),
        path: output_path,
        source_name: &input_name,
    };
    write_cloud(counted, target, console, count, html)
}

/// Where a prompted run writes its document
struct CloudTarget<'a, S: Write> {
    sink: S,
    path: &'a Path,
    source_name: &'a str,
}

/// Render counted words into the target, reporting a failed write on the
/// console instead of returning it
fn write_cloud<S: Write, W: Write>(
    counted: CountedInput,
    mut target: CloudTarget<'_, S>,
    console: &mut W,
    count: usize,
    html: &HtmlOptions,
) -> Result<Option<CloudSummary>, TagCloudError> {
    match render_counted(counted, &mut target.sink, target.source_name, count, html) {
        Ok(summary) => Ok(Some(summary)),
        Err(source) => {
            report(
                console,
                &TagCloudError::Write {
                    path: target.path.to_path_buf(),
                    source,
                },
            )?;
            Ok(None)
        }
    }
}

/// Print a prompt and read one trimmed answer
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    console: &mut W,
    message: &str,
) -> Result<String, TagCloudError> {
    writeln!(console, "{message}").map_err(TagCloudError::Prompt)?;
    console.flush().map_err(TagCloudError::Prompt)?;

    let mut answer = String::new();
    if input.read_line(&mut answer).map_err(TagCloudError::Prompt)? == 0 {
        return Err(TagCloudError::Prompt(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed",
        )));
    }

    Ok(answer.trim().to_string())
}

fn report<W: Write>(console: &mut W, error: &TagCloudError) -> Result<(), TagCloudError> {
    writeln!(console, "{}", error.to_string().red()).map_err(TagCloudError::Prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    struct Session {
        dir: PathBuf,
    }

    impl Session {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("tag_cloud_interactive_{name}_{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn path(&self, file: &str) -> PathBuf {
            self.dir.join(file)
        }

        fn run(&self, answers: &str) -> (Result<Option<CloudSummary>, TagCloudError>, String) {
            let mut input = Cursor::new(answers.to_string());
            let mut console = Vec::new();
            let result = run_interactive(
                &mut input,
                &mut console,
                &SeparatorSet::default(),
                &HtmlOptions::default(),
            );
            (result, String::from_utf8_lossy(&console).into_owned())
        }
    }

    impl Drop for Session {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn full_session_writes_cloud() {
        let session = Session::new("full");
        let input = session.path("in.txt");
        let output = session.path("out.html");
        fs::write(&input, "the cat sat on the mat. the cat ran.\n").unwrap();

        let (result, console) =
            session.run(&format!("{}\n{}\n3\n", input.display(), output.display()));

        let summary = result.unwrap().unwrap();
        assert_eq!(summary.table.len(), 3);
        assert!(console.contains("Enter an input file name:"));
        assert!(console.contains("Enter an output file name:"));
        assert!(console.contains("Enter the number of words"));

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(&format!("<title>Top 3 words in {}</title>", input.display())));
    }

    #[test]
    fn negative_count_is_reported_and_treated_as_zero() {
        let session = Session::new("negative");
        let input = session.path("in.txt");
        let output = session.path("out.html");
        fs::write(&input, "some words").unwrap();

        let (result, console) =
            session.run(&format!("{}\n{}\n-4\n", input.display(), output.display()));

        let summary = result.unwrap().unwrap();
        assert!(summary.table.is_empty());
        assert!(console.contains("cannot be negative"));
        assert!(fs::read_to_string(&output).unwrap().contains("Top 0 words"));
    }

    #[test]
    fn malformed_count_is_treated_as_zero() {
        let session = Session::new("malformed");
        let input = session.path("in.txt");
        let output = session.path("out.html");
        fs::write(&input, "some words").unwrap();

        let (result, console) =
            session.run(&format!("{}\n{}\nmany\n", input.display(), output.display()));

        assert!(result.unwrap().unwrap().table.is_empty());
        assert!(console.contains("whole number"));
    }

    #[test]
    fn missing_input_ends_run_quietly() {
        let session = Session::new("missing");
        let (result, console) = session.run(&format!("{}\n", session.path("absent.txt").display()));

        assert!(result.unwrap().is_none());
        assert!(console.contains("Error opening the input file"));
        assert!(!console.contains("Enter an output file name:"));
    }

    #[test]
    fn unopenable_output_ends_run_quietly() {
        let session = Session::new("bad_output");
        let input = session.path("in.txt");
        fs::write(&input, "words").unwrap();

        let (result, console) = session.run(&format!(
            "{}\n{}\n",
            input.display(),
            session.path("missing/dir/out.html").display()
        ));

        assert!(result.unwrap().is_none());
        assert!(console.contains("Error opening the output file"));
    }

    #[test]
    fn closed_stdin_at_count_prompt_aborts() {
        let session = Session::new("eof");
        let input = session.path("in.txt");
        let output = session.path("out.html");
        fs::write(&input, "words").unwrap();

        let (result, _) = session.run(&format!("{}\n{}\n", input.display(), output.display()));

        assert!(matches!(result, Err(TagCloudError::Prompt(_))));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_is_reported_on_console() {
        let counted = count_reader("ink ink paper".as_bytes(), &SeparatorSet::default());
        let target = CloudTarget {
            sink: FullDisk,
            path: Path::new("cloud.html"),
            source_name: "notes.txt",
        };
        let mut console = Vec::new();

        let result = write_cloud(counted, target, &mut console, 5, &HtmlOptions::default());

        assert!(result.unwrap().is_none());
        let console = String::from_utf8_lossy(&console);
        assert!(console.contains("Error writing cloud.html"));
        assert!(console.contains("no space left"));
    }

    #[test]
    fn buffered_write_failure_surfaces_on_flush() {
        let counted = count_reader("ink".as_bytes(), &SeparatorSet::default());
        let target = CloudTarget {
            sink: BufWriter::new(FullDisk),
            path: Path::new("cloud.html"),
            source_name: "notes.txt",
        };
        let mut console = Vec::new();

        let result = write_cloud(counted, target, &mut console, 5, &HtmlOptions::default());

        assert!(result.unwrap().is_none());
        assert!(String::from_utf8_lossy(&console).contains("Error writing cloud.html"));
    }
}
