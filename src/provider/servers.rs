//! Streaming Servers
//!
//! Closed set of streaming-server names accepted by the watch endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// == Streaming Server ==
/// A streaming server the provider knows how to extract sources from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingServer {
    AsianLoad,
    GogoCdn,
    StreamSb,
    MixDrop,
    Mp4Upload,
    UpCloud,
    VidCloud,
    StreamTape,
    VizCloud,
    MyCloud,
    Filemoon,
    VidStreaming,
    BuiltIn,
    SmashyStream,
    StreamHub,
    StreamWish,
    VidHide,
    VidMoly,
    Voe,
    MegaUp,
}

impl StreamingServer {
    /// Every accepted server, in declaration order.
    pub const ALL: [StreamingServer; 20] = [
        Self::AsianLoad,
        Self::GogoCdn,
        Self::StreamSb,
        Self::MixDrop,
        Self::Mp4Upload,
        Self::UpCloud,
        Self::VidCloud,
        Self::StreamTape,
        Self::VizCloud,
        Self::MyCloud,
        Self::Filemoon,
        Self::VidStreaming,
        Self::BuiltIn,
        Self::SmashyStream,
        Self::StreamHub,
        Self::StreamWish,
        Self::VidHide,
        Self::VidMoly,
        Self::Voe,
        Self::MegaUp,
    ];

    /// Wire name of the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsianLoad => "asianload",
            Self::GogoCdn => "gogocdn",
            Self::StreamSb => "streamsb",
            Self::MixDrop => "mixdrop",
            Self::Mp4Upload => "mp4upload",
            Self::UpCloud => "upcloud",
            Self::VidCloud => "vidcloud",
            Self::StreamTape => "streamtape",
            Self::VizCloud => "vizcloud",
            Self::MyCloud => "mycloud",
            Self::Filemoon => "filemoon",
            Self::VidStreaming => "vidstreaming",
            Self::BuiltIn => "builtin",
            Self::SmashyStream => "smashystream",
            Self::StreamHub => "streamhub",
            Self::StreamWish => "streamwish",
            Self::VidHide => "vidhide",
            Self::VidMoly => "vidmoly",
            Self::Voe => "voe",
            Self::MegaUp => "megaup",
        }
    }
}

/// Matching is exact: `GogoCDN` is not `gogocdn`.
impl FromStr for StreamingServer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|server| server.as_str() == s)
            .ok_or_else(|| format!("unknown streaming server '{}'", s))
    }
}

impl fmt::Display for StreamingServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_server() {
        assert_eq!("gogocdn".parse::<StreamingServer>(), Ok(StreamingServer::GogoCdn));
        assert_eq!("vidstreaming".parse::<StreamingServer>(), Ok(StreamingServer::VidStreaming));
    }

    #[test]
    fn test_parse_unknown_server() {
        assert!("invalid-value".parse::<StreamingServer>().is_err());
        assert!("".parse::<StreamingServer>().is_err());
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!("streamwish".parse::<StreamingServer>().is_ok());
        assert!("StreamWish".parse::<StreamingServer>().is_err());
    }

    #[test]
    fn test_wire_names_are_unique() {
        let mut names: Vec<&str> = StreamingServer::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StreamingServer::ALL.len());
    }

    #[test]
    fn test_serde_matches_wire_name() {
        for server in StreamingServer::ALL {
            let json = serde_json::to_string(&server).unwrap();
            assert_eq!(json, format!("\"{}\"", server.as_str()));
        }
    }
}
