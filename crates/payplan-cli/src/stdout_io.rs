use std::io::{self, Write};

/// Writes to stdout, treating a closed pipe (`payplan export | head -3`) as
/// success.
pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, &[text.as_bytes()])
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, &[text.as_bytes(), b"\n"])
}

fn write_tolerating_closed_pipe(writer: &mut dyn Write, chunks: &[&[u8]]) -> io::Result<()> {
    let written = chunks
        .iter()
        .try_for_each(|chunk| writer.write_all(chunk))
        .and_then(|()| writer.flush());
    match written {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::write_tolerating_closed_pipe;

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        let mut writer = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_tolerating_closed_pipe(&mut writer, &[b"rows".as_slice()]).is_ok());
    }

    #[test]
    fn other_write_failures_propagate() {
        let mut writer = FailingWriter(io::ErrorKind::PermissionDenied);
        assert!(write_tolerating_closed_pipe(&mut writer, &[b"rows".as_slice()]).is_err());
    }

    #[test]
    fn chunks_are_written_in_order() {
        let mut buffer: Vec<u8> = Vec::new();
        let chunks = [b"a,b".as_slice(), b"\n".as_slice()];
        let result = write_tolerating_closed_pipe(&mut buffer, &chunks);
        assert!(result.is_ok());
        assert_eq!(buffer, b"a,b\n");
    }
}
