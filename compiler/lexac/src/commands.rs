//! The `lex` command: scan a file and display the token stream.

use std::fs::File;

use lexa_scanner::{
    EncodingIssue, EncodingIssueKind, MalformedPolicy, ScanError, Scanner, ScannerConfig, Token,
};

/// Options accepted after `lexac lex <file>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: ScannerConfig,
    /// Print `line:column` next to each token span.
    pub positions: bool,
}

/// Parse `lex` flags. Returns a user-facing message on bad input.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();
    for arg in args {
        match arg.as_str() {
            "--strict" => {
                options.config = options.config.with_malformed(MalformedPolicy::Reject);
            }
            "--positions" => options.positions = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--max-len=") {
                    let limit = value
                        .parse::<u32>()
                        .map_err(|_| format!("invalid --max-len value '{value}'"))?;
                    options.config = options.config.with_max_source_len(limit);
                } else {
                    return Err(format!("unknown option '{arg}'"));
                }
            }
        }
    }
    Ok(options)
}

/// Lex a file and print its tokens. Returns `false` if anything failed.
pub fn lex_file(path: &str, options: &LexOptions) -> bool {
    let mut scanner = match open_scanner(path, options.config) {
        Ok(scanner) => scanner,
        Err(msg) => {
            eprintln!("error: {msg}");
            return false;
        }
    };

    for issue in scanner.source().encoding_issues() {
        eprintln!("warning: {}", describe_issue(issue));
    }

    match collect_tokens(&mut scanner) {
        Ok(tokens) => {
            print!("{}", render_tokens(path, &scanner, &tokens, options.positions));
            true
        }
        Err(err) => {
            eprintln!("error: {path}: {err}");
            false
        }
    }
}

/// Open `path` and buffer it into a scanner.
pub(crate) fn open_scanner(path: &str, config: ScannerConfig) -> Result<Scanner, String> {
    let file = File::open(path).map_err(|e| describe_read_error(path, &e))?;
    Scanner::from_reader_with_config(file, config).map_err(|err| match err {
        ScanError::Io(e) => describe_read_error(path, &e),
        other => format!("'{path}': {other}"),
    })
}

fn describe_read_error(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// Scan to `Eof`, stopping at the first error.
pub(crate) fn collect_tokens(scanner: &mut Scanner) -> Result<Vec<Token>, ScanError> {
    scanner.tokens().collect()
}

/// Render the token dump printed by `lexac lex`.
pub(crate) fn render_tokens(
    path: &str,
    scanner: &Scanner,
    tokens: &[Token],
    positions: bool,
) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens {
        let literal = scanner.slice(token.span);
        let line = if positions {
            format!(
                "  {} {literal:?} @ {} ({})\n",
                token.kind, token.span, token.start
            )
        } else {
            format!("  {} {literal:?} @ {}\n", token.kind, token.span)
        };
        out.push_str(&line);
    }
    out
}

fn describe_issue(issue: &EncodingIssue) -> String {
    let what = match issue.kind {
        EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
        EncodingIssueKind::Utf16LeBom => "UTF-16 (little-endian) byte order mark",
        EncodingIssueKind::Utf16BeBom => "UTF-16 (big-endian) byte order mark",
        EncodingIssueKind::InteriorNull => "null byte",
        EncodingIssueKind::InvalidUtf8 => "invalid UTF-8",
    };
    format!("{what} at byte {} ({} bytes)", issue.pos, issue.len)
}
