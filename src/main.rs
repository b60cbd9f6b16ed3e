//! word-guard - Entry Point
//!
//! Reads candidate words from stdin, one per line, and prints `ok` or the
//! JSON error report for each.

use log::{debug, error, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use word_guard::utils::logging::setup_logging;
use word_guard::validation::{sanitize_input, word_pipeline};
use word_guard::{ErrorReport, GuardConfig};

#[tokio::main]
async fn main() {
    setup_logging();

    let config = match GuardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Checking words from stdin...");

    if let Err(e) = run(&config).await {
        error!("Failed to process input: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &GuardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = word_pipeline();
    let rules = config.input_rules();

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);

        let report = match pipeline.validate([("word", Some(line.as_str()))]) {
            Err(violations) => Some(ErrorReport::from_violations(&violations)),
            Ok(()) => rules
                .validate_word(&line)
                .err()
                .map(|e| ErrorReport::from_input_error(&e)),
        };

        let out = match report {
            Some(report) => {
                debug!("Rejected line: {}", sanitize_input(Some(&line)));
                serde_json::to_string(&report)?
            }
            None => "ok".to_string(),
        };
        stdout.write_all(out.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }

    stdout.flush().await?;
    Ok(())
}

/// Decodes one raw stdin line. Invalid UTF-8 is replaced rather than
/// rejected, and the line terminator is dropped.
fn decode_line(buf: &[u8]) -> String {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    let buf = buf.strip_suffix(b"\r").unwrap_or(buf);
    String::from_utf8_lossy(buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line_strips_terminator() {
        assert_eq!(decode_line(b"quiz\n"), "quiz");
        assert_eq!(decode_line(b"quiz\r\n"), "quiz");
        assert_eq!(decode_line(b"quiz"), "quiz");
        assert_eq!(decode_line(b"\n"), "");
    }

    #[test]
    fn test_decode_line_replaces_invalid_utf8() {
        let line = decode_line(b"ca\xfft\n");
        assert_eq!(line, "ca\u{fffd}t");

        let pipeline = word_pipeline();
        let violations = pipeline.validate([("word", Some(line.as_str()))]).unwrap_err();
        let report = ErrorReport::from_violations(&violations);
        assert_eq!(report.status, 400);
        assert!(report.detail("word").unwrap().contains("contains invalid characters"));
    }
}
