//! Cache Keys
//!
//! Every cached operation gets a key of the form
//! `anitaku:<operation>;<param>;<param>`, so identical requests share an
//! entry and requests differing in any parameter never do.

use std::fmt;
use std::time::Duration;

use crate::cache::LONG_TTL_FACTOR;
use crate::provider::StreamingServer;

/// Namespace shared by every key this service writes.
pub const KEY_PREFIX: &str = "anitaku:";

// == Cache Key ==
/// A cacheable provider operation and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    Search { query: &'a str, page: u32 },
    Info { id: &'a str },
    Genre { genre: &'a str, page: u32 },
    GenreList,
    Watch {
        episode_id: &'a str,
        server: Option<StreamingServer>,
    },
    Servers { episode_id: &'a str },
    TopAiring { page: u32 },
    Movies { page: u32 },
    Popular { page: u32 },
    RecentEpisodes { page: u32, kind: u32 },
    AnimeList { page: u32 },
    Download { link: &'a str },
}

impl CacheKey<'_> {
    /// How long a payload stored under this key stays fresh, given the
    /// configured lifetime of ordinary entries.
    ///
    /// Genre list and download links change rarely and keep
    /// [`LONG_TTL_FACTOR`] times longer.
    pub fn ttl(&self, base: Duration) -> Duration {
        match self {
            Self::GenreList | Self::Download { .. } => base.saturating_mul(LONG_TTL_FACTOR),
            _ => base,
        }
    }
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(KEY_PREFIX)?;
        match self {
            Self::Search { query, page } => write!(f, "search;{};{}", page, query),
            Self::Info { id } => write!(f, "info;{}", id),
            Self::Genre { genre, page } => write!(f, "genre;{};{}", page, genre),
            Self::GenreList => f.write_str("genre-list"),
            Self::Watch { episode_id, server } => {
                // Must match keys already present in shared Redis stores
                let server = server.map_or("undefined", |s| s.as_str());
                write!(f, "watch;{};{}", server, episode_id)
            }
            Self::Servers { episode_id } => write!(f, "servers;{}", episode_id),
            Self::TopAiring { page } => write!(f, "top-airing;{}", page),
            Self::Movies { page } => write!(f, "movies;{}", page),
            Self::Popular { page } => write!(f, "popular;{}", page),
            Self::RecentEpisodes { page, kind } => {
                write!(f, "recent-episodes;{};{}", page, kind)
            }
            Self::AnimeList { page } => write!(f, "anime-list;{}", page),
            Self::Download { link } => write!(f, "download-{}", link),
        }
    }
}
