pub mod manifest;
pub mod subtitle;

pub use manifest::Manifest;
pub use subtitle::{
    AddonSubtitle, CandidateRecord, DataUri, Language, SubtitleRecord, SubtitlesResponse,
};
