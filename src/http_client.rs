//! HTTP agent construction and bounded response helpers.

use std::io::{self, Read, Write};

use crate::config::BackendSettings;

const COPY_BUFFER_BYTES: usize = 64 * 1024;

/// Build an HTTP agent using the configured timeouts.
pub(crate) fn agent(settings: &BackendSettings) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(settings.connect_timeout())
        .timeout_read(settings.read_timeout())
        .timeout_write(settings.write_timeout())
        .build()
}

/// Read a response into memory, enforcing a maximum byte size.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes)?;
    if bytes.len() > max_bytes {
        return Err(too_large(format!("Response exceeded {max_bytes} bytes")));
    }
    Ok(bytes)
}

/// Read a response body as text, replacing invalid UTF-8.
pub(crate) fn read_response_text(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<String, io::Error> {
    let bytes = read_response_bytes(response, max_bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Stream a response to the provided writer, enforcing a maximum byte size.
///
/// Returns the number of bytes written.
pub(crate) fn copy_response_to_writer(
    response: ureq::Response,
    writer: &mut dyn Write,
    max_bytes: usize,
) -> Result<u64, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut total = 0usize;
    let mut buf = vec![0u8; COPY_BUFFER_BYTES];
    loop {
        let read = limited.read(&mut buf)?;
        if read == 0 {
            break;
        }
        total += read;
        if total > max_bytes {
            return Err(too_large(format!("Response exceeded {max_bytes} bytes")));
        }
        writer.write_all(&buf[..read])?;
    }
    writer.flush()?;
    Ok(total as u64)
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(too_large(format!("Response too large: {length} bytes")));
    }
    Ok(())
}

fn too_large(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn test_agent() -> ureq::Agent {
        agent(&BackendSettings::default())
    }

    #[test]
    fn read_response_bytes_rejects_content_length_over_max() {
        let response = "HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nok".to_string();
        let url = serve_once(response);
        let response = test_agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn read_response_bytes_rejects_body_over_max() {
        let body = "a".repeat(32);
        let url = serve_once(format!("HTTP/1.0 200 OK\r\n\r\n{body}"));
        let response = test_agent().get(&url).call().unwrap();
        let err = read_response_bytes(response, 16).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn copy_response_streams_whole_body() {
        let body = "ID,label\n1,yes\n";
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let response = test_agent().get(&url).call().unwrap();
        let mut sink = Vec::new();
        let written = copy_response_to_writer(response, &mut sink, 1024).unwrap();
        assert_eq!(written, body.len() as u64);
        assert_eq!(sink, body.as_bytes());
    }

    #[test]
    fn read_response_text_decodes_utf8() {
        let url = serve_once("HTTP/1.1 200 OK\r\nContent-Length: 3\r\n\r\na\u{00ff}".to_string());
        let response = test_agent().get(&url).call().unwrap();
        let text = read_response_text(response, 16).unwrap();
        assert_eq!(text, "a\u{00ff}");
    }
}
