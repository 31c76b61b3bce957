use std::fs;
use std::io::{IsTerminal, Read};

use crate::import::invalid_input_error;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) source_kind: SourceKind,
    pub(crate) source_ref: Option<String>,
    pub(crate) content: String,
}

/// Resolves one obligation source: a file path, `-` for stdin, or piped
/// stdin when no path is given. Supplying both a file and piped stdin is an
/// error.
pub(crate) fn resolve_source(
    path: Option<&str>,
    stdin_override: Option<String>,
) -> ClientResult<ResolvedSource> {
    let stdin_body = read_stdin(stdin_override)?;

    match path {
        Some("-") => match stdin_body {
            Some(body) => Ok(ResolvedSource {
                source_kind: SourceKind::Stdin,
                source_ref: None,
                content: body,
            }),
            None => Err(invalid_input_error(
                "Path `-` means stdin input, but stdin was empty. Pipe JSON/CSV obligations or pass a file path.",
            )),
        },
        Some(file_path) => {
            if stdin_body.is_some() {
                return Err(invalid_input_error(
                    "Both stdin and file input were provided. Pass exactly one source: either a file path or piped stdin.",
                ));
            }
            let content = fs::read_to_string(file_path)
                .map_err(|error| ClientError::source_unreadable(file_path, &error.to_string()))?;
            Ok(ResolvedSource {
                source_kind: SourceKind::File,
                source_ref: Some(file_path.to_string()),
                content,
            })
        }
        None => match stdin_body {
            Some(body) => Ok(ResolvedSource {
                source_kind: SourceKind::Stdin,
                source_ref: None,
                content: body,
            }),
            None => Err(invalid_input_error(
                "No obligation source provided. Pass a file path or pipe input via stdin.",
            )),
        },
    }
}

/// Returns non-blank stdin content. An override stands in for the process
/// stdin; a terminal stdin is treated as absent.
fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    let body = match stdin_override {
        Some(value) => value,
        None => {
            if std::io::stdin().is_terminal() {
                return Ok(None);
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|error| ClientError::source_unreadable("stdin", &error.to_string()))?;
            buffer
        }
    };

    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(body))
}
