// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Store(String),
    Media(MediaError),
}

/// Specific error types for media playback issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Loading the source was aborted before metadata arrived.
    Aborted,

    /// Network failure while fetching the source (timeout, refused, DNS).
    Network(String),

    /// The container opened but decoding failed (codec missing, corrupt data).
    Decode(String),

    /// The source format is not supported (unknown container, no video stream).
    Unsupported(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::Aborted => "media-error-aborted",
            MediaError::Network(_) => "media-error-network",
            MediaError::Decode(_) => "media-error-decode",
            MediaError::Unsupported(_) => "media-error-unsupported",
        }
    }

    /// Attempts to parse a raw error message into a specific MediaError type.
    /// This is used to categorize errors coming out of the demuxer/decoder.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        // Network-level failures first: they often also mention "i/o"
        if msg_lower.contains("connection")
            || msg_lower.contains("timed out")
            || msg_lower.contains("timeout")
            || msg_lower.contains("network")
            || msg_lower.contains("tcp")
            || msg_lower.contains("tls")
            || msg_lower.contains("http")
            || msg_lower.contains("name resolution")
        {
            return MediaError::Network(msg.to_string());
        }

        // Explicit cancellation
        if msg_lower.contains("abort") || msg_lower.contains("interrupt") {
            return MediaError::Aborted;
        }

        // Unsupported container/stream layout
        if msg_lower.contains("no video stream")
            || msg_lower.contains("unknown format")
            || msg_lower.contains("unsupported")
            || msg_lower.contains("invalid data found")
        {
            return MediaError::Unsupported(msg.to_string());
        }

        // Decoder-level failures
        if msg_lower.contains("codec")
            || msg_lower.contains("decoder")
            || msg_lower.contains("decode")
            || msg_lower.contains("corrupt")
            || msg_lower.contains("packet")
        {
            return MediaError::Decode(msg.to_string());
        }

        // Anything else while retrieving a streaming source reads as a
        // retrieval failure; keep the raw message for diagnostics.
        MediaError::Network(msg.to_string())
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Aborted => write!(f, "Loading aborted"),
            MediaError::Network(msg) => write!(f, "Network error: {msg}"),
            MediaError::Decode(msg) => write!(f, "Decode error: {msg}"),
            MediaError::Unsupported(msg) => write!(f, "Unsupported media: {msg}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Store(msg) => write!(f, "Storage error: {msg}"),
            Error::Media(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for MediaError {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_message_detects_network_errors() {
        assert!(matches!(
            MediaError::from_message("Connection refused"),
            MediaError::Network(_)
        ));
        assert!(matches!(
            MediaError::from_message("I/O operation timed out"),
            MediaError::Network(_)
        ));
        assert!(matches!(
            MediaError::from_message("HTTP error 404 Not Found"),
            MediaError::Network(_)
        ));
    }

    #[test]
    fn from_message_detects_aborted() {
        assert_eq!(
            MediaError::from_message("Operation aborted by user"),
            MediaError::Aborted
        );
        assert_eq!(
            MediaError::from_message("Interrupted system call"),
            MediaError::Aborted
        );
    }

    #[test]
    fn from_message_detects_unsupported() {
        assert!(matches!(
            MediaError::from_message("No video stream found"),
            MediaError::Unsupported(_)
        ));
        assert!(matches!(
            MediaError::from_message("Invalid data found when processing input"),
            MediaError::Unsupported(_)
        ));
    }

    #[test]
    fn from_message_detects_decode_errors() {
        assert!(matches!(
            MediaError::from_message("Decoder not found for codec h266"),
            MediaError::Decode(_)
        ));
        assert!(matches!(
            MediaError::from_message("corrupt frame detected"),
            MediaError::Decode(_)
        ));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            MediaError::Aborted.i18n_key(),
            MediaError::Network(String::new()).i18n_key(),
            MediaError::Decode(String::new()).i18n_key(),
            MediaError::Unsupported(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_display_includes_context() {
        let err = Error::Config("missing section".to_string());
        assert!(err.to_string().contains("missing section"));

        let err: Error = MediaError::Aborted.into();
        assert!(matches!(err, Error::Media(MediaError::Aborted)));
    }
}
