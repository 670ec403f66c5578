pub mod recording_opener;

pub use recording_opener::RecordingOpener;
