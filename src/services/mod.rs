pub mod encoding;
pub mod language;
pub mod metrics;
pub mod normalizer;
pub mod query;
pub mod ranker;
pub mod subtitles;
pub mod titlovi;
